//! Error types for the linkset core library.
//!
//! Defines the disjoint-set error enum exposed by the public API, its stable
//! error codes and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] operations and by the Kruskal
/// builder that drives them.
///
/// Every variant signals caller misuse; none of them is retryable.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The requested capacity cannot describe a universe of elements.
    #[error("capacity must be a non-negative element count (got {requested})")]
    InvalidCapacity {
        /// The capacity supplied by the caller.
        requested: i64,
    },
    /// [`crate::DisjointSet::make`] was called after every slot was used.
    #[error("disjoint set is full: all {capacity} elements already exist")]
    CapacityExceeded {
        /// The fixed capacity of the set.
        capacity: usize,
    },
    /// An operation referenced an element that was never created.
    #[error("element {id} does not exist (live elements: {len})")]
    InvalidId {
        /// The offending element id.
        id: usize,
        /// Number of elements created so far.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The requested capacity cannot describe a universe of elements.
        InvalidCapacity => InvalidCapacity { .. } => "DISJOINT_SET_INVALID_CAPACITY",
        /// [`crate::DisjointSet::make`] was called after every slot was used.
        CapacityExceeded => CapacityExceeded { .. } => "DISJOINT_SET_CAPACITY_EXCEEDED",
        /// An operation referenced an element that was never created.
        InvalidId => InvalidId { .. } => "DISJOINT_SET_INVALID_ID",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, DisjointSetError>;
