//! Entity trait: identity of a record managed by a back-office screen.

/// A remote record with a stable identifier.
///
/// Records are owned by the REST services; the console only ever holds
/// snapshots fetched from them. Two snapshots with the same id describe the
/// same record, possibly at different points in time.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Human-readable label used in confirmations and notifications.
    fn label(&self) -> String;
}
