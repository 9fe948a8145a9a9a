//! Handler callables and the context they receive.
//!
//! A handler is a plain closure bound to one or more domain members. At call
//! time it receives a [`Context`] naming the member it was dispatched for and
//! holding a handle to the owning [`HandlerSet`], so a handler can forward to
//! sibling members of the same set.
//!
//! [`HandlerSet`]: crate::HandlerSet

use std::sync::Arc;

use crate::error::DispatchError;
use crate::key::Key;
use crate::set::HandlerSet;

/// A marker trait for argument bundles forwarded through dispatch.
///
/// Dispatch forwards one owned value per call; bundle several arguments as a
/// tuple, `Vec`, or struct.
pub trait Args: 'static {}
impl<T: 'static> Args for T {}

/// A marker trait for handler outputs.
pub trait Output: 'static {}
impl<T: 'static> Output for T {}

/// The callable form handlers are stored in: shared, thread-safe, receiving
/// the dispatch [`Context`] plus the caller's argument bundle.
pub type HandlerFn<K, A, O> = Arc<dyn Fn(&Context<K, A, O>, A) -> O + Send + Sync>;

/// The receiver passed to every handler invocation.
///
/// Carries the member the call was dispatched for and a handle to the owning
/// set. [`dispatch`](Context::dispatch) lets a handler call the handler of a
/// sibling member, the way a method calls a sibling method on the same type.
pub struct Context<K: Key, A: Args, O: Output> {
    set: HandlerSet<K, A, O>,
    key: K,
}

impl<K: Key, A: Args, O: Output> Context<K, A, O> {
    pub(crate) fn new(set: HandlerSet<K, A, O>, key: K) -> Self {
        Self { set, key }
    }

    /// The member this invocation was dispatched for.
    pub fn key(&self) -> K {
        self.key
    }

    /// The handler set that owns the running handler.
    pub fn set(&self) -> &HandlerSet<K, A, O> {
        &self.set
    }

    /// Invoke the handler registered for a sibling member of the same set.
    pub fn dispatch(&self, member: K, args: A) -> Result<O, DispatchError> {
        self.set.invoke(member, args)
    }
}
