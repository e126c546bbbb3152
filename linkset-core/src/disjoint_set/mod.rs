//! Disjoint sets backed by linked membership lists and a flat
//! representative table.
//!
//! Each representative owns a singly linked list of the ids in its
//! component. A union splices the smaller list onto the larger one in
//! constant time and then rewrites the table entries of the ids that moved,
//! so an element changes representative at most `log2(n)` times and no
//! union ever scans the whole universe.

mod members;

use std::{fmt, ops::Index};

use tracing::trace;

use crate::error::{DisjointSetError, Result};

use self::members::MemberList;
pub use self::members::Members;

/// Fixed-capacity union-find over the element ids `0..capacity`.
///
/// Elements are created one at a time with [`DisjointSet::make`] and are
/// never removed. Every id starts as its own component; components only grow
/// by merging.
///
/// # Examples
/// ```
/// use linkset_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// for _ in 0..4 {
///     set.make()?;
/// }
/// set.union(0, 1)?;
/// set.union(2, 3)?;
/// assert!(set.same_set(0, 1)?);
/// assert!(!set.same_set(1, 2)?);
///
/// set.union(1, 2)?;
/// assert_eq!(set.find(3)?, set.find(0)?);
/// assert_eq!(set.component_count(), 1);
/// # Ok::<(), linkset_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    capacity: usize,
    representatives: Vec<usize>,
    lists: Vec<MemberList>,
    links: Vec<Option<usize>>,
    components: usize,
}

impl DisjointSet {
    /// Creates an empty set able to hold `capacity` elements.
    ///
    /// A capacity of zero is valid and describes an empty universe.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            representatives: Vec::with_capacity(capacity),
            lists: Vec::with_capacity(capacity),
            links: Vec::with_capacity(capacity),
            components: 0,
        }
    }

    /// Returns the fixed number of elements the set can hold.
    #[must_use]
    #[rustfmt::skip]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Returns the number of elements created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.representatives.len()
    }

    /// Returns `true` when no element has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }

    /// Returns the number of distinct components among the live elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Creates the next element as a singleton component and returns its id.
    ///
    /// Ids are handed out sequentially from zero.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::CapacityExceeded`] once `capacity`
    /// elements exist.
    pub fn make(&mut self) -> Result<usize> {
        let id = self.len();
        if id == self.capacity {
            return Err(DisjointSetError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.representatives.push(id);
        self.lists.push(MemberList::singleton(id));
        self.links.push(None);
        self.components += 1;
        Ok(id)
    }

    /// Returns the representative of `id`, flattening the lookup path.
    ///
    /// Every table entry visited on the way to the root is rewritten to point
    /// at the root. The equivalence classes are never changed by a lookup.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::InvalidId`] when `id` was never created.
    pub fn find(&mut self, id: usize) -> Result<usize> {
        let root = self.representative_of(id)?;

        let mut node = id;
        while node != root {
            let next = self.representatives[node];
            self.representatives[node] = root;
            node = next;
        }
        Ok(root)
    }

    /// Returns the representative of `id` without touching the table.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::InvalidId`] when `id` was never created.
    pub fn representative_of(&self, id: usize) -> Result<usize> {
        self.check_id(id)?;
        let mut root = id;
        loop {
            let parent = self.representatives[root];
            if parent == root {
                return Ok(root);
            }
            root = parent;
        }
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `false` when both ids already share a representative, which
    /// is the cycle signal used by Kruskal. Otherwise the component with the
    /// shorter membership list is absorbed by the longer one; on a tie the
    /// component of `right` absorbs the component of `left`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::InvalidId`] when either id was never
    /// created. Nothing is modified in that case.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        self.check_id(left)?;
        self.check_id(right)?;
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let (absorbing, absorbed) = choose_absorbing(
            (left_root, self.lists[left_root].len()),
            (right_root, self.lists[right_root].len()),
        );

        let moved = std::mem::take(&mut self.lists[absorbed]);
        for member in moved.iter(&self.links) {
            self.representatives[member] = absorbing;
        }
        let moved_len = moved.len();
        self.lists[absorbing].append(moved, &mut self.links);
        self.components -= 1;

        trace!(absorbing, absorbed, moved = moved_len, "merged components");
        record_union(moved_len);
        Ok(true)
    }

    /// Returns `true` when `left` and `right` belong to the same component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::InvalidId`] when either id was never
    /// created.
    pub fn same_set(&self, left: usize, right: usize) -> Result<bool> {
        Ok(self.representative_of(left)? == self.representative_of(right)?)
    }

    /// Returns the number of elements in the component containing `id`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::InvalidId`] when `id` was never created.
    pub fn set_size(&self, id: usize) -> Result<usize> {
        let root = self.representative_of(id)?;
        Ok(self.lists[root].len())
    }

    /// Iterates over the ids in the component containing `id`.
    ///
    /// The representative's original members come first, followed by each
    /// absorbed component in the order it was merged.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::InvalidId`] when `id` was never created.
    ///
    /// # Examples
    /// ```
    /// use linkset_core::DisjointSet;
    ///
    /// let mut set = DisjointSet::new(3);
    /// for _ in 0..3 {
    ///     set.make()?;
    /// }
    /// set.union(0, 2)?;
    /// let mut members: Vec<usize> = set.members(0)?.collect();
    /// members.sort_unstable();
    /// assert_eq!(members, [0, 2]);
    /// # Ok::<(), linkset_core::DisjointSetError>(())
    /// ```
    pub fn members(&self, id: usize) -> Result<Members<'_>> {
        let root = self.representative_of(id)?;
        Ok(self.lists[root].iter(&self.links))
    }

    /// Iterates over the current representatives in ascending id order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.representatives
            .iter()
            .enumerate()
            .filter_map(|(id, &parent)| (id == parent).then_some(id))
    }

    fn check_id(&self, id: usize) -> Result<()> {
        if id < self.len() {
            Ok(())
        } else {
            Err(DisjointSetError::InvalidId {
                id,
                len: self.len(),
            })
        }
    }
}

/// Picks `(absorbing, absorbed)` from two `(root, size)` pairs.
fn choose_absorbing(left: (usize, usize), right: (usize, usize)) -> (usize, usize) {
    let (left_root, left_size) = left;
    let (right_root, right_size) = right;
    if left_size > right_size {
        (left_root, right_root)
    } else {
        (right_root, left_root)
    }
}

#[cfg(feature = "metrics")]
fn record_union(moved: usize) {
    metrics::counter!("disjoint_set_unions_total").increment(1);
    metrics::counter!("disjoint_set_elements_moved_total")
        .increment(u64::try_from(moved).unwrap_or(u64::MAX));
}

#[cfg(not(feature = "metrics"))]
fn record_union(_moved: usize) {}

impl TryFrom<i64> for DisjointSet {
    type Error = DisjointSetError;

    /// Creates a set from a signed capacity, rejecting negative values.
    fn try_from(capacity: i64) -> Result<Self> {
        usize::try_from(capacity)
            .map(Self::new)
            .map_err(|_| DisjointSetError::InvalidCapacity {
                requested: capacity,
            })
    }
}

impl Index<usize> for DisjointSet {
    type Output = usize;

    /// Returns the raw table entry for `id`.
    ///
    /// # Panics
    /// Panics when `id` was never created.
    fn index(&self, id: usize) -> &usize {
        &self.representatives[id]
    }
}

/// Renders one line per element: the size of the list headed at that slot,
/// the linked members and the slot's table entry.
///
/// ```text
/// 0: [2] 0 -> 1 (representative 0)
/// 1: [0] - (representative 0)
/// ```
impl fmt::Display for DisjointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, list) in self.lists.iter().enumerate() {
            write!(f, "{slot}: [{}] ", list.len())?;
            if list.is_empty() {
                f.write_str("-")?;
            }
            for (position, member) in list.iter(&self.links).enumerate() {
                if position > 0 {
                    f.write_str(" -> ")?;
                }
                write!(f, "{member}")?;
            }
            writeln!(f, " (representative {})", self.representatives[slot])?;
        }
        Ok(())
    }
}
