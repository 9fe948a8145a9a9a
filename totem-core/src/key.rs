//! Key trait for enumeration domains.

use std::fmt::Debug;
use std::hash::Hash;

/// A closed, finite domain of keys a handler set must cover.
///
/// Implementors are fieldless enums whose full member list is known when the
/// handler set is defined. `MEMBERS` is the canonical enumeration order: it
/// fixes the order of eager cache warm-up and the layout of the frozen
/// handler table, and it must list every member exactly once.
///
/// The `totem` facade provides a `#[derive(Key)]` macro for fieldless enums;
/// manual implementations are also valid, and may deliberately restrict
/// `MEMBERS` to a subdomain of the enum's variants. Values left out of
/// `MEMBERS` are rejected at build time ([`ForeignMember`]) and at bind time
/// ([`UnknownMember`]).
///
/// # Example
///
/// ```rust
/// use totem_core::Key;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Color {
///     Red,
///     Green,
///     Blue,
/// }
///
/// impl Key for Color {
///     const MEMBERS: &'static [Self] = &[Color::Red, Color::Green, Color::Blue];
/// }
///
/// assert_eq!(Color::Green.ordinal(), Some(1));
/// ```
///
/// [`ForeignMember`]: crate::BuildError::ForeignMember
/// [`UnknownMember`]: crate::DispatchError::UnknownMember
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid handler-set key",
    label = "missing `Key` implementation",
    note = "Keys are fieldless enums; derive `totem::Key` or list the members by hand."
)]
pub trait Key: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every member of the domain, in enumeration order.
    const MEMBERS: &'static [Self];

    /// Position of this member within [`MEMBERS`](Self::MEMBERS), or `None`
    /// for values outside the declared domain.
    fn ordinal(&self) -> Option<usize> {
        Self::MEMBERS.iter().position(|member| member == self)
    }
}
