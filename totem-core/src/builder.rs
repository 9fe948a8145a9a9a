//! Builder and finalization pass for handler sets.

use std::collections::HashMap;

use crate::cache::CacheStrategy;
use crate::error::BuildError;
use crate::handler::{Args, Context, Output};
use crate::key::Key;
use crate::registration::{Registration, RegistrationMeta};
use crate::set::{HandlerSet, TableEntry};

/// Collects registrations for a handler set and validates them on build.
///
/// The builder is the mutable, "open" phase of a set's life: registrations
/// accumulate in any order, and [`build`](Self::build) performs the whole
/// validation pass atomically once all of them are known. `build` consumes
/// the builder, so registering on a finalized set is a type error on this
/// path; the runtime-checked counterpart is [`SetCell`].
///
/// [`SetCell`]: crate::SetCell
pub struct HandlerSetBuilder<K: Key, A: Args, O: Output> {
    strategy: CacheStrategy,
    registrations: Vec<Registration<K, A, O>>,
}

impl<K: Key, A: Args, O: Output> Default for HandlerSetBuilder<K, A, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key, A: Args, O: Output> HandlerSetBuilder<K, A, O> {
    /// Create an empty builder with the default ([`Eager`]) caching strategy.
    ///
    /// [`Eager`]: CacheStrategy::Eager
    pub const fn new() -> Self {
        Self {
            strategy: CacheStrategy::Eager,
            registrations: Vec::new(),
        }
    }

    /// Select the caching strategy for the built set.
    pub fn cache(mut self, strategy: CacheStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Register `handler` for one or more domain members.
    pub fn register<I, F>(self, members: I, handler: F) -> Self
    where
        I: IntoIterator<Item = K>,
        F: Fn(&Context<K, A, O>, A) -> O + Send + Sync + 'static,
    {
        self.add(Registration::new(members, handler))
    }

    /// Register `handler` with explicit metadata (name for error reports,
    /// doc string for the bound instances).
    pub fn register_with<I, F>(self, members: I, meta: RegistrationMeta, handler: F) -> Self
    where
        I: IntoIterator<Item = K>,
        F: Fn(&Context<K, A, O>, A) -> O + Send + Sync + 'static,
    {
        self.add(Registration::with_meta(members, meta, handler))
    }

    /// Add a pre-assembled registration.
    pub fn add(mut self, registration: Registration<K, A, O>) -> Self {
        self.registrations.push(registration);
        self
    }

    /// Validate the collected registrations and freeze the handler table.
    ///
    /// Duplicate claims fail first (including claims on out-of-domain
    /// values), then out-of-domain claims, then uncovered members; each
    /// error names every offending member. On success the table is frozen in
    /// enumeration order and, under eager caching, all instances are built
    /// before the set is returned.
    pub fn build(self) -> Result<HandlerSet<K, A, O>, BuildError<K>> {
        build_set(self.registrations, self.strategy)
    }
}

/// The one-shot finalization pass shared by the builder and [`SetCell`].
///
/// [`SetCell`]: crate::SetCell
pub(crate) fn build_set<K: Key, A: Args, O: Output>(
    registrations: Vec<Registration<K, A, O>>,
    strategy: CacheStrategy,
) -> Result<HandlerSet<K, A, O>, BuildError<K>> {
    let mut claims: HashMap<K, usize> = HashMap::new();
    for (index, registration) in registrations.iter().enumerate() {
        for &member in registration.members() {
            if let Some(&previous) = claims.get(&member) {
                return Err(BuildError::DuplicateHandler {
                    member,
                    first: registrations[previous].display_name(previous),
                    second: registration.display_name(index),
                });
            }
            claims.insert(member, index);
        }
    }

    let foreign: Vec<K> = registrations
        .iter()
        .flat_map(|registration| registration.members())
        .copied()
        .filter(|member| member.ordinal().is_none())
        .collect();
    if !foreign.is_empty() {
        return Err(BuildError::ForeignMember { members: foreign });
    }

    let missing: Vec<K> = K::MEMBERS
        .iter()
        .copied()
        .filter(|member| !claims.contains_key(member))
        .collect();
    if !missing.is_empty() {
        return Err(BuildError::NonExhaustive { missing });
    }

    let table: Box<[TableEntry<K, A, O>]> = K::MEMBERS
        .iter()
        .map(|&member| {
            let registration = &registrations[claims[&member]];
            TableEntry {
                member,
                doc: registration.meta().doc(),
                handler: registration.handler().clone(),
            }
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        members = K::MEMBERS.len(),
        strategy = ?strategy,
        "handler set finalized"
    );

    Ok(HandlerSet::from_table(table, strategy))
}
