//! Registrations: the transient association between members and a callable.

use std::sync::Arc;

use crate::handler::{Args, Context, HandlerFn, Output};
use crate::key::Key;

/// Metadata attached to a registration.
///
/// The name is used to identify the callable in duplicate-handler reports;
/// the doc string is copied onto every instance the registration produces,
/// so introspection sees member-specific documentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationMeta {
    name: Option<&'static str>,
    doc: Option<&'static str>,
}

impl RegistrationMeta {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the registration for use in error reports.
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Attach a doc string, copied onto instances bound to this registration.
    pub fn with_doc(mut self, doc: &'static str) -> Self {
        self.doc = Some(doc);
        self
    }

    /// The registration's name, if one was set.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// The registration's doc string, if one was set.
    pub fn doc(&self) -> Option<&'static str> {
        self.doc
    }
}

/// One or more domain members associated with a callable.
///
/// A registration is purely local until harvested: it mutates no shared
/// state, and finalization consumes it while building the handler table.
/// Registrations within one definition are order-independent; validation
/// runs once, atomically, after all of them are collected.
pub struct Registration<K: Key, A: Args, O: Output> {
    members: Vec<K>,
    meta: RegistrationMeta,
    handler: HandlerFn<K, A, O>,
}

impl<K: Key, A: Args, O: Output> Registration<K, A, O> {
    /// Associate `members` with `handler`.
    pub fn new<I, F>(members: I, handler: F) -> Self
    where
        I: IntoIterator<Item = K>,
        F: Fn(&Context<K, A, O>, A) -> O + Send + Sync + 'static,
    {
        Self::with_meta(members, RegistrationMeta::new(), handler)
    }

    /// Associate `members` with `handler`, carrying explicit metadata.
    pub fn with_meta<I, F>(members: I, meta: RegistrationMeta, handler: F) -> Self
    where
        I: IntoIterator<Item = K>,
        F: Fn(&Context<K, A, O>, A) -> O + Send + Sync + 'static,
    {
        Self {
            members: members.into_iter().collect(),
            meta,
            handler: Arc::new(handler),
        }
    }

    /// The members this registration claims.
    pub fn members(&self) -> &[K] {
        &self.members
    }

    /// The registration's metadata.
    pub fn meta(&self) -> &RegistrationMeta {
        &self.meta
    }

    pub(crate) fn handler(&self) -> &HandlerFn<K, A, O> {
        &self.handler
    }

    /// How the registration is referred to in error reports: its name if it
    /// has one, otherwise its position in the definition.
    pub(crate) fn display_name(&self, index: usize) -> String {
        match self.meta.name {
            Some(name) => format!("`{name}`"),
            None => format!("registration #{index}"),
        }
    }
}
