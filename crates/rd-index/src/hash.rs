//! Key-hashing strategies.
//!
//! [`NameIndex`](crate::NameIndex) never hashes keys itself; it asks a
//! [`KeyHasher`] and reduces the result modulo its capacity.  The default
//! strategies reproduce the classic "times 33, xor" family in 32-bit wrapping
//! arithmetic, so slot placement is identical across platforms.

/// Seed shared by the multiplicative-xor hashes.
pub const HASH_SEED: u32 = 5381;

/// Pluggable hash function for keys of type `K`.
pub trait KeyHasher<K: ?Sized> {
    fn hash_key(&self, key: &K) -> u64;
}

// ── StringHash ────────────────────────────────────────────────────────────────

/// `hash = hash * 33 ^ byte` over the UTF-8 bytes, seeded with 5381.
///
/// Each byte is sign-extended before the xor (as a C `char` would be), so
/// names containing non-ASCII bytes land in the same slots as the classic
/// byte-string implementation.
#[derive(Copy, Clone, Debug, Default)]
pub struct StringHash;

impl StringHash {
    #[inline]
    pub fn hash_bytes(bytes: &[u8]) -> u32 {
        bytes.iter().fold(HASH_SEED, |hash, &b| {
            hash.wrapping_mul(33) ^ (b as i8 as u32)
        })
    }
}

impl KeyHasher<str> for StringHash {
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        Self::hash_bytes(key.as_bytes()) as u64
    }
}

impl KeyHasher<String> for StringHash {
    #[inline]
    fn hash_key(&self, key: &String) -> u64 {
        Self::hash_bytes(key.as_bytes()) as u64
    }
}

// ── IntDigitHash ──────────────────────────────────────────────────────────────

/// Same recurrence as [`StringHash`] but folding in the decimal digits of an
/// integer, least significant first.  Zero hashes to the bare seed.
#[derive(Copy, Clone, Debug, Default)]
pub struct IntDigitHash;

impl KeyHasher<i32> for IntDigitHash {
    fn hash_key(&self, key: &i32) -> u64 {
        let mut n = *key;
        let mut hash = HASH_SEED;
        while n != 0 {
            // Negative remainders wrap to large unsigned values.
            hash = hash.wrapping_mul(33) ^ ((n % 10) as u32);
            n /= 10;
        }
        hash as u64
    }
}

// ── HashFn ────────────────────────────────────────────────────────────────────

/// Adapter turning any `Fn(&K) -> u64` into a [`KeyHasher`].
///
/// ```
/// use rd_index::{HashFn, NameIndex};
///
/// let mut idx = NameIndex::with_hasher(7, HashFn(|k: &i32| *k as u64));
/// idx.insert_or_update(12, "twelve").unwrap();
/// assert_eq!(idx.lookup(&12), Some(&"twelve"));
/// ```
#[derive(Copy, Clone)]
pub struct HashFn<F>(pub F);

impl<K: ?Sized, F: Fn(&K) -> u64> KeyHasher<K> for HashFn<F> {
    #[inline]
    fn hash_key(&self, key: &K) -> u64 {
        (self.0)(key)
    }
}

// ── FxKeyHasher ───────────────────────────────────────────────────────────────

/// FxHash over the key's `Hash` impl.  Faster than [`StringHash`] on long
/// keys but slot placement differs from the classic recurrence.
#[cfg(feature = "fx-hash")]
#[derive(Copy, Clone, Debug, Default)]
pub struct FxKeyHasher;

#[cfg(feature = "fx-hash")]
impl<K: std::hash::Hash + ?Sized> KeyHasher<K> for FxKeyHasher {
    fn hash_key(&self, key: &K) -> u64 {
        use std::hash::Hasher;
        let mut h = rustc_hash::FxHasher::default();
        key.hash(&mut h);
        h.finish()
    }
}
