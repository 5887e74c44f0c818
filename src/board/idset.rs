//! Fixed-capacity set of small integer ids.
//!
//! Drone and zone ids are dense indices, so a single 64-bit word is enough for
//! any board the game produces. Boards beyond that are rejected at setup.

/// Maximum id (exclusive) an `IdSet` can hold.
pub const ID_SET_CAPACITY: usize = 64;

/// A bitset over ids `0..64`, iterated in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdSet(u64);

impl IdSet {
    pub const fn empty() -> Self {
        IdSet(0)
    }

    /// The set `{0, 1, ..., n - 1}`.
    pub fn with_first(n: usize) -> Self {
        debug_assert!(n <= ID_SET_CAPACITY);
        if n >= ID_SET_CAPACITY {
            IdSet(u64::MAX)
        } else {
            IdSet((1u64 << n) - 1)
        }
    }

    pub fn insert(&mut self, id: usize) -> bool {
        debug_assert!(id < ID_SET_CAPACITY, "id {} out of range", id);
        let was = self.contains(id);
        self.0 |= 1u64 << id;
        !was
    }

    pub fn remove(&mut self, id: usize) -> bool {
        debug_assert!(id < ID_SET_CAPACITY, "id {} out of range", id);
        let was = self.contains(id);
        self.0 &= !(1u64 << id);
        was
    }

    pub fn contains(&self, id: usize) -> bool {
        id < ID_SET_CAPACITY && self.0 & (1u64 << id) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn intersects(&self, other: IdSet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn difference(&self, other: IdSet) -> IdSet {
        IdSet(self.0 & !other.0)
    }

    pub fn iter(&self) -> IdSetIter {
        IdSetIter(self.0)
    }
}

/// Ascending iterator over the ids of an `IdSet`.
pub struct IdSetIter(u64);

impl Iterator for IdSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let id = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for IdSet {
    type Item = usize;
    type IntoIter = IdSetIter;

    fn into_iter(self) -> IdSetIter {
        self.iter()
    }
}

impl FromIterator<usize> for IdSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = IdSet::empty();
        for id in iter {
            set.insert(id);
        }
        set
    }
}
