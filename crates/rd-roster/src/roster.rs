//! `RankedRoster` — a sorted sequence with a pluggable total order.
//!
//! # Ordering convention
//!
//! `order.rank(a, b) == Less` means `a` ranks ahead of `b`.  The front of the
//! roster is the best-ranked item, so `top(k)` is the first `k` items.
//!
//! # Insertion rule
//!
//! A new item goes immediately before the first item that does not rank
//! strictly ahead of it.  Items the order considers equal therefore keep
//! insertion order with the newcomer first.  Orders used for leaderboards
//! break every metric tie on name, so in practice no two items compare equal.
//!
//! # Complexity
//!
//! Storage is one contiguous `Vec`.  Finding the insertion point is a binary
//! search (`partition_point`), shifting the tail is O(n); removal is a linear
//! identity scan.  Roster sizes are bounded by the number of drivers.

use std::cmp::Ordering;

/// A stable identity that survives changes to an item's ranked fields.
pub trait Identified {
    type Id: Eq + Copy;
    fn id(&self) -> Self::Id;
}

/// Total order over roster items.  `Less` means "ranks ahead".
pub trait RankOrder<T: ?Sized> {
    fn rank(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized> RankOrder<T> for fn(&T, &T) -> Ordering {
    #[inline]
    fn rank(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Items of type `T` kept sorted under the order `O`.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use rd_roster::{Identified, RankedRoster};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Score { who: u32, points: u32 }
///
/// impl Identified for Score {
///     type Id = u32;
///     fn id(&self) -> u32 { self.who }
/// }
///
/// fn most_points(a: &Score, b: &Score) -> Ordering {
///     b.points.cmp(&a.points).then(a.who.cmp(&b.who))
/// }
///
/// let mut board = RankedRoster::new(most_points as fn(&Score, &Score) -> Ordering);
/// board.insert(Score { who: 1, points: 3 });
/// board.insert(Score { who: 2, points: 9 });
/// assert_eq!(board.top(1)[0].who, 2);
///
/// board.remove(2);
/// board.insert(Score { who: 2, points: 0 });
/// assert_eq!(board.top(1)[0].who, 1);
/// ```
#[derive(Clone, Debug)]
pub struct RankedRoster<T, O> {
    items: Vec<T>,
    order: O,
}

impl<T, O: RankOrder<T>> RankedRoster<T, O> {
    pub fn new(order: O) -> Self {
        Self { items: Vec::new(), order }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert `item` at its ranked position.  Returns the index it landed on.
    pub fn insert(&mut self, item: T) -> usize {
        let order = &self.order;
        let at = self
            .items
            .partition_point(|cur| order.rank(cur, &item) == Ordering::Less);
        self.items.insert(at, item);
        at
    }

    /// Items in rank order, best first.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Identified, O: RankOrder<T>> RankedRoster<T, O> {
    /// Remove the item whose identity is `id`.  Returns it, or `None` if no
    /// such item is present.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let pos = self.position(id)?;
        Some(self.items.remove(pos))
    }

    /// Rank (0 = best) of the item whose identity is `id`.
    pub fn position(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|it| it.id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.position(id).is_some()
    }

    /// Replace the entry sharing `item`'s identity (if any) and re-rank it.
    /// Returns the previous entry.
    pub fn reposition(&mut self, item: T) -> Option<T> {
        let old = self.remove(item.id());
        self.insert(item);
        old
    }
}

impl<T: Clone, O> RankedRoster<T, O> {
    /// Independent copy of every item in rank order.  Later changes to the
    /// roster never show up in a snapshot already taken.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Copy of the best `k` items (all of them if fewer than `k`).
    pub fn top(&self, k: usize) -> Vec<T> {
        self.items[..k.min(self.items.len())].to_vec()
    }
}
