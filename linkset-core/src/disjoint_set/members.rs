//! Index-linked membership lists.
//!
//! Every element id owns exactly one slot in a shared link arena; the slot
//! stores the id that follows it in its component's list. A [`MemberList`]
//! only records the head, tail and length of one chain through that arena,
//! so moving a whole component is a metadata update.

use std::iter::FusedIterator;

/// Head of one component's singly linked membership list.
///
/// The tail's link slot is always `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct MemberList {
    first: Option<usize>,
    last: Option<usize>,
    len: usize,
}

impl MemberList {
    pub(super) const fn singleton(id: usize) -> Self {
        Self {
            first: Some(id),
            last: Some(id),
            len: 1,
        }
    }

    #[rustfmt::skip]
    pub(super) const fn len(&self) -> usize { self.len }

    pub(super) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(super) fn iter<'a>(&self, links: &'a [Option<usize>]) -> Members<'a> {
        Members {
            links,
            cursor: self.first,
            remaining: self.len,
        }
    }

    /// Attaches `other` after this list's tail.
    ///
    /// `other` must already be detached from its slot (the caller takes it
    /// out with [`std::mem::take`]), so no node is copied or duplicated.
    pub(super) fn append(&mut self, other: Self, links: &mut [Option<usize>]) {
        if other.is_empty() {
            return;
        }
        match self.last {
            Some(tail) => {
                if let Some(slot) = links.get_mut(tail) {
                    *slot = other.first;
                }
                self.last = other.last;
                self.len = self.len.saturating_add(other.len);
            }
            None => *self = other,
        }
    }
}

/// Iterator over the ids of one component, in list order.
///
/// Returned by [`crate::DisjointSet::members`].
#[derive(Clone, Debug)]
pub struct Members<'a> {
    links: &'a [Option<usize>],
    cursor: Option<usize>,
    remaining: usize,
}

impl Iterator for Members<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cursor?;
        self.cursor = self.links.get(id).copied().flatten();
        self.remaining -= 1;
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Members<'_> {}

impl FusedIterator for Members<'_> {}
