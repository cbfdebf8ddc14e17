//! Core Entity Trait
//!
//! Anything the server assigns an identity to.

/// Core trait for server-owned records
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}
