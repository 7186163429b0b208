//! Strong, zero-cost handles for DCEL records.
//!
//! Every record in a resolved [`Dcel`](crate::topology::dcel::Dcel) lives in a
//! flat, index-stable vector, one per record type. Cross-references between
//! records are stored as these handles rather than owning pointers: the DCEL
//! reference graph is cyclic (twins, next/previous, face ↔ edge), and plain
//! indices into commonly-owned storage sidestep any need for `Rc`/`Weak` or
//! manual cycle breaking.
//!
//! The three handle types are deliberately distinct so a vertex index can
//! never be used to address a face or a half-edge.

use std::fmt;

macro_rules! define_handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        ///
        /// # Memory layout
        /// `repr(transparent)` over a `u32`: same ABI and alignment as its
        /// single field, so handles cost nothing to copy or store.
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw slot index. Only the resolver mints handles, so a
            /// handle always addresses a live record of its own type.
            #[inline]
            pub(crate) fn new(raw: u32) -> Self {
                $name(raw)
            }

            /// Returns the slot index this handle addresses.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_handle! {
    /// Handle to a [`Vertex`](crate::topology::dcel::Vertex) in a resolved mesh.
    VertexId
}

define_handle! {
    /// Handle to a [`Face`](crate::topology::dcel::Face) in a resolved mesh.
    FaceId
}

define_handle! {
    /// Handle to a [`HalfEdge`](crate::topology::dcel::HalfEdge) in a resolved mesh.
    HalfEdgeId
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        let h = HalfEdgeId::new(7);
        assert_eq!(h.index(), 7);
        assert_eq!(format!("{h}"), "7");
        assert_eq!(format!("{h:?}"), "HalfEdgeId(7)");
    }

    #[test]
    fn handles_order_by_slot() {
        assert!(FaceId::new(0) < FaceId::new(1));
        assert_eq!(VertexId::new(3), VertexId::new(3));
    }
}
