//! Fixed-capacity open-addressing map.
//!
//! # Slot states
//!
//! ```text
//! Empty            never written; terminates every probe
//! Occupied(k, v)   live entry
//! Tombstone        removed entry; search probes walk past it,
//!                  insert probes may land on it
//! ```
//!
//! Both probes start at `hash(key) % capacity` and advance by one slot with
//! wrap-around.  A probe visits at most `capacity` slots, so a full table or
//! one saturated with tombstones never loops forever.
//!
//! The insert probe does not stop at the first tombstone.  It remembers that
//! slot and keeps walking until an `Empty` slot or a live copy of the key:
//! a live copy is updated in place, otherwise the key lands on the
//! remembered tombstone.  Stopping at the first tombstone could leave the
//! same key live in two slots, and removing it would then expose the older
//! value.
//!
//! The table never grows.  Choose a prime capacity at least as large as the
//! number of distinct keys the caller will insert; once every slot is live,
//! inserting a new key fails with [`IndexError::Full`].

use std::borrow::Borrow;

use crate::hash::{KeyHasher, StringHash};
use crate::{IndexError, IndexResult};

enum Slot<K, V> {
    Empty,
    Occupied(K, V),
    Tombstone,
}

/// Open-addressing hash map with linear probing and lazy deletion.
///
/// `H` is the injected hash strategy; it defaults to [`StringHash`] which is
/// what name → id lookups use.
///
/// # Example
///
/// ```
/// use rd_index::NameIndex;
///
/// let mut idx: NameIndex<String, u32> = NameIndex::new(13);
/// idx.insert_or_update("Obor".to_string(), 0).unwrap();
/// idx.insert_or_update("Unirii".to_string(), 1).unwrap();
/// assert_eq!(idx.lookup("Unirii"), Some(&1));
/// idx.remove("Obor");
/// assert!(!idx.contains("Obor"));
/// ```
pub struct NameIndex<K, V, H = StringHash> {
    slots:  Vec<Slot<K, V>>,
    /// Number of `Occupied` slots.
    len:    usize,
    hasher: H,
}

impl<K: Eq, V, H: Default> NameIndex<K, V, H> {
    /// Allocate `capacity` empty slots with the default hasher.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, H::default())
    }
}

impl<K: Eq, V, H> NameIndex<K, V, H> {
    /// Allocate `capacity` empty slots using `hasher`.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hasher: H) -> Self {
        assert!(capacity > 0, "NameIndex capacity must be non-zero");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || Slot::Empty);
        Self { slots, len: 0, hasher }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fixed slot count chosen at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of tombstoned slots still occupying probe chains.
    pub fn tombstones(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Tombstone))
            .count()
    }

    /// Iterate live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.slots.iter().filter_map(|s| match s {
            Slot::Occupied(k, v) => Some((k, v)),
            _ => None,
        })
    }

    #[inline]
    fn home<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        H: KeyHasher<Q>,
    {
        (self.hasher.hash_key(key) % self.slots.len() as u64) as usize
    }

    /// Search probe: walk from the home slot past `Occupied` and `Tombstone`
    /// slots until the key or an `Empty` slot is found.
    fn find_slot_search<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let cap = self.slots.len();
        let mut i = self.home(key);
        for _ in 0..cap {
            match &self.slots[i] {
                Slot::Empty => return None,
                Slot::Occupied(k, _) if k.borrow() == key => return Some(i),
                _ => i = (i + 1) % cap,
            }
        }
        None
    }

    /// Insert `value` under `key`, returning the previous value if the key
    /// was already present.
    ///
    /// The insert probe lands on the first `Empty` or `Tombstone` slot of the
    /// key's probe run.  If the key is already live further along that run it
    /// is updated in place instead, so a key never occupies two slots.
    pub fn insert_or_update(&mut self, key: K, value: V) -> IndexResult<Option<V>>
    where
        H: KeyHasher<K>,
    {
        let cap = self.slots.len();
        let mut i = self.home(&key);
        let mut landing: Option<usize> = None;

        for _ in 0..cap {
            match &mut self.slots[i] {
                Slot::Occupied(k, v) if *k == key => {
                    return Ok(Some(std::mem::replace(v, value)));
                }
                Slot::Occupied(..) => {}
                Slot::Tombstone => {
                    landing = landing.or(Some(i));
                }
                Slot::Empty => {
                    landing = landing.or(Some(i));
                    break;
                }
            }
            i = (i + 1) % cap;
        }

        let Some(slot) = landing else {
            return Err(IndexError::Full { capacity: cap });
        };
        self.slots[slot] = Slot::Occupied(key, value);
        self.len += 1;
        Ok(None)
    }

    /// Value stored under `key`, or `None` if absent.
    pub fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let i = self.find_slot_search(key)?;
        match &self.slots[i] {
            Slot::Occupied(_, v) => Some(v),
            _ => None,
        }
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        self.find_slot_search(key).is_some()
    }

    /// Lazily delete `key`: its slot becomes a `Tombstone` so later entries
    /// in the same probe run stay reachable.  Returns the removed value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: KeyHasher<Q>,
    {
        let i = self.find_slot_search(key)?;
        match std::mem::replace(&mut self.slots[i], Slot::Tombstone) {
            Slot::Occupied(_, v) => {
                self.len -= 1;
                Some(v)
            }
            _ => None,
        }
    }
}
