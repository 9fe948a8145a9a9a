//! # totem - Exhaustive Per-Member Handler Tables
//!
//! `totem` associates exactly one handler with each member of a closed enum
//! domain and dispatches to it through a uniform call interface. Coverage is
//! checked when the set is defined, not when a member is first used: a set
//! missing a member, claiming one twice, or reaching outside its domain
//! fails to build at all.
//!
//! ## Quick Start
//!
//! ```rust
//! use totem::{HandlerSetBuilder, Key};
//!
//! #[derive(Key, Clone, Copy, PartialEq, Eq, Hash, Debug)]
//! enum Operation {
//!     Add,
//!     Mul,
//!     Avg,
//! }
//!
//! let operations = HandlerSetBuilder::new()
//!     .register([Operation::Add], |_, args: Vec<i64>| args.iter().sum::<i64>())
//!     .register([Operation::Mul], |_, args: Vec<i64>| args.iter().product())
//!     .register([Operation::Avg], |_, args: Vec<i64>| {
//!         args.iter().sum::<i64>() / args.len() as i64
//!     })
//!     .build()?;
//!
//! let adder = operations.bind(Operation::Add)?;
//! assert_eq!(adder.call(vec![3, 4, 5]), 12);
//! assert_eq!(operations.invoke(Operation::Avg, vec![3, 4, 5])?, 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Or declaratively, with the [`handlers!`] macro:
//!
//! ```rust
//! use totem::Key;
//!
//! #[derive(Key, Clone, Copy, PartialEq, Eq, Hash, Debug)]
//! enum Color {
//!     Red,
//!     Green,
//!     Blue,
//! }
//!
//! let names = totem::handlers! {
//!     [Color::Red] => |_, ()| "Red",
//!     [Color::Green] => |_, ()| "Green",
//!     [Color::Blue] => |_, ()| "Blue",
//! }?;
//!
//! assert_eq!(names.invoke(Color::Blue, ())?, "Blue");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Instance caching
//!
//! Binding a member yields a [`BoundHandler`] instance. How instances are
//! reused is fixed per set by [`CacheStrategy`]: `Eager` (the default)
//! prebuilds every instance during finalization, `Lazy` memoizes on first
//! bind, and `None` hands out a fresh instance per bind. Under the caching
//! strategies, [`BoundHandler::ptr_eq`] holds for repeated binds of the same
//! member for the lifetime of the set.
//!
//! ## Process-wide sets
//!
//! [`SetCell`] is the `const`-constructible counterpart of the builder for
//! sets living in `static`s. It accepts registrations until finalized and
//! rejects them afterwards; dispatching through a never-finalized cell is an
//! error rather than a silent lookup failure.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use totem_core::{
    // Handler surface
    Args,
    BoundHandler,
    // Error types
    BuildError,
    // Caching
    CacheStrategy,
    Context,
    DispatchError,
    HandlerFn,
    // Definition
    HandlerSet,
    HandlerSetBuilder,
    // Key domain
    Key,
    Output,
    RegisterError,
    Registration,
    RegistrationMeta,
    SetCell,
};

#[cfg(feature = "macros")]
pub use totem_macros::Key;

mod macros;
