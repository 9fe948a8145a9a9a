//! # totem-core
//!
//! Core types for Totem: exhaustive, per-member handler tables over closed
//! enumeration domains.
//!
//! A handler set associates exactly one callable with each member of a
//! fieldless enum and dispatches to it through a uniform call interface. The
//! whole facility is the three-phase lifecycle below; there is no I/O, no
//! persistence, and nothing asynchronous.
//!
//! ## Phase 1: Definition ([`HandlerSetBuilder`], [`SetCell`])
//!
//! Registrations associate one or more members of a [`Key`] domain with a
//! callable. They are declarative and order-independent; nothing is checked
//! until the definition is complete.
//!
//! - [`HandlerSetBuilder`] is the primary path: a consuming builder, so a
//!   finalized set is impossible to extend by construction.
//! - [`SetCell`] is the `static`-friendly counterpart with a runtime
//!   finalization flag, for process-wide sets.
//!
//! ## Phase 2: Finalization ([`HandlerSetBuilder::build`], [`SetCell::finalize`])
//!
//! A one-shot validation pass over all collected registrations. Duplicate
//! claims, claims outside the declared domain, and uncovered members each
//! fail with a dedicated [`BuildError`] variant naming the offending
//! members. On success the table is frozen in enumeration order and, under
//! [`CacheStrategy::Eager`], every instance is built before the set is
//! returned.
//!
//! ## Phase 3: Dispatch ([`HandlerSet::bind`], [`BoundHandler::call`])
//!
//! Binding a member yields a [`BoundHandler`] whose identity follows the
//! set's [`CacheStrategy`]. Calling it runs the registered handler with a
//! [`Context`] receiver, through which handlers can dispatch to sibling
//! members of the same set.
//!
//! # Error Types
//!
//! - [`BuildError`] - Finalization-time structural validation failures
//! - [`RegisterError`] - Registration after finalization
//! - [`DispatchError`] - Dispatch without a usable handler binding

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod builder;
mod cache;
mod cell;
mod error;
mod handler;
mod key;
mod registration;
mod set;

// Re-exports
pub use builder::HandlerSetBuilder;
pub use cache::CacheStrategy;
pub use cell::SetCell;
pub use error::{BuildError, DispatchError, RegisterError};
pub use handler::{Args, Context, HandlerFn, Output};
pub use key::Key;
pub use registration::{Registration, RegistrationMeta};
pub use set::{BoundHandler, HandlerSet};
