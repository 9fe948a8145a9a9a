//! Error types for Totem.
//!
//! This module provides a structured error hierarchy using `thiserror`, one
//! enum per phase of a handler set's lifecycle:
//!
//! - [`BuildError`] - Structural validation failures at finalization time
//! - [`RegisterError`] - Registration attempted after finalization
//! - [`DispatchError`] - Dispatch attempted without a usable handler binding
//!
//! All conditions are raised synchronously at the point of detection and are
//! never swallowed; a handler set that fails validation is never produced.

use std::fmt::Debug;
use thiserror::Error;

use crate::key::Key;

/// Structural validation failures detected while finalizing a handler set.
///
/// These are definition-time contracts checked once per set, before any
/// dispatch can occur. Each variant lists every offending member.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError<K: Key> {
    /// Some domain members have no registered handler.
    #[error("handler set does not cover its domain; missing members: {}", fmt_members(.missing))]
    NonExhaustive {
        /// The members left without a handler, in enumeration order.
        missing: Vec<K>,
    },

    /// Two registrations claimed the same member.
    #[error("multiple handlers registered for {member:?}: {first} and {second}")]
    DuplicateHandler {
        /// The member claimed twice.
        member: K,
        /// The registration that claimed the member first.
        first: String,
        /// The registration that claimed it again.
        second: String,
    },

    /// Registrations targeted values outside the declared domain.
    #[error("handlers registered for values outside the declared domain: {}", fmt_members(.members))]
    ForeignMember {
        /// The offending values, in registration order.
        members: Vec<K>,
    },
}

/// Errors from registering on an already-defined [`SetCell`].
///
/// [`SetCell`]: crate::SetCell
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// The cell's definition pass has already run; define a new set instead.
    #[error("cannot register a handler on a finalized handler set")]
    Finalized,
}

/// Errors from binding or invoking a handler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Dispatch was attempted through a [`SetCell`] that was never finalized.
    ///
    /// [`SetCell`]: crate::SetCell
    #[error("handler set has not been finalized; finalize it before dispatching")]
    Unfinalized,

    /// The requested member is not part of the declared domain.
    #[error("no handler table entry for {member}; value is outside the declared domain")]
    UnknownMember {
        /// Debug rendering of the out-of-domain value.
        member: String,
    },
}

fn fmt_members<K: Debug>(members: &[K]) -> String {
    members
        .iter()
        .map(|member| format!("{member:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Color {
        Red,
        Blue,
    }

    impl Key for Color {
        const MEMBERS: &'static [Self] = &[Color::Red, Color::Blue];
    }

    #[test]
    fn messages_name_every_offending_member() {
        let err: BuildError<Color> = BuildError::NonExhaustive {
            missing: vec![Color::Red, Color::Blue],
        };
        assert_eq!(
            err.to_string(),
            "handler set does not cover its domain; missing members: Red, Blue"
        );

        let err: BuildError<Color> = BuildError::DuplicateHandler {
            member: Color::Red,
            first: "`paint`".to_string(),
            second: "`repaint`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "multiple handlers registered for Red: `paint` and `repaint`"
        );
    }
}
