//! Instance caching strategies.

/// Governs whether and when a set's handler instances are memoized.
///
/// The strategy is fixed when the set is built and cannot change afterwards.
/// Cached entries live as long as the set and are never evicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheStrategy {
    /// Every bind returns a fresh, independent instance.
    None,

    /// All instances are built and cached during finalization, in
    /// enumeration order; binds return the prebuilt instance.
    #[default]
    Eager,

    /// Instances are built and cached on first bind; later binds for the
    /// same member return the stored instance.
    Lazy,
}
