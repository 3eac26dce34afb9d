//! Arena-style storage for the graph's vertices and edges.
//!
//! Inspired by the memory management in Cranelift IR.
pub mod list;
pub mod slab;

pub use list::IndexList;
pub use slab::Slab;

/// Small integer index that identifies an entity within an arena.
pub trait EntityIndex: Copy + Eq + Default {
    fn new(index: usize) -> Self {
        Self::try_new(index).unwrap()
    }

    fn try_new(index: usize) -> Option<Self>;
    fn index(self) -> usize;
}

/// Macro which provides the common implementation of an n-bit entity reference
///
/// Based on [`cranelift_entity`'s `entity_impl!`](https://docs.rs/cranelift-entity/0.89.2/cranelift_entity/macro.entity_impl.html)
#[macro_export]
macro_rules! entity_impl {
    ($entity:ident, $backing:ty, $reserved_max:expr) => {
        impl $crate::memory::EntityIndex for $entity {
            #[inline(always)]
            fn try_new(ix: usize) -> Option<Self> {
                if ($reserved_max && ix < (<$backing>::MAX as usize))
                    || (!$reserved_max && ix <= (<$backing>::MAX as usize))
                    || (<$backing>::BITS) > usize::BITS
                {
                    Some($entity(ix as $backing))
                } else {
                    None
                }
            }

            #[inline(always)]
            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}
