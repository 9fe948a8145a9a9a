//! One-shot, process-wide handler set definitions.

use std::sync::{Mutex, OnceLock, PoisonError};

use crate::builder::build_set;
use crate::cache::CacheStrategy;
use crate::error::{BuildError, DispatchError, RegisterError};
use crate::handler::{Args, Context, Output};
use crate::key::Key;
use crate::registration::{Registration, RegistrationMeta};
use crate::set::{BoundHandler, HandlerSet};

enum CellState<K: Key, A: Args, O: Output> {
    Open(Vec<Registration<K, A, O>>),
    Failed(BuildError<K>),
}

/// A `const`-constructible cell holding one handler set definition.
///
/// Where [`HandlerSetBuilder`] locks registration out at the type level by
/// consuming itself, `SetCell` is the shared, process-wide counterpart: it
/// can live in a `static`, accepts registrations until [`finalize`] runs,
/// and rejects them afterwards with [`RegisterError::Finalized`].
///
/// Finalization runs to completion exactly once, under a mutex; the built
/// set is published atomically, so no reader ever observes a finalized cell
/// with a partially built table or missing eager entries. A failed build
/// latches its error: the malformed set can never be dispatched through.
///
/// # Example
///
/// ```rust
/// use totem_core::{CacheStrategy, Key, SetCell};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Signal {
///     Go,
///     Halt,
/// }
///
/// impl Key for Signal {
///     const MEMBERS: &'static [Self] = &[Signal::Go, Signal::Halt];
/// }
///
/// static SIGNALS: SetCell<Signal, (), &'static str> = SetCell::new(CacheStrategy::Eager);
///
/// SIGNALS.register([Signal::Go], |_, ()| "proceed")?;
/// SIGNALS.register([Signal::Halt], |_, ()| "stop")?;
/// SIGNALS.finalize()?;
///
/// assert_eq!(SIGNALS.invoke(Signal::Halt, ())?, "stop");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// [`HandlerSetBuilder`]: crate::HandlerSetBuilder
/// [`finalize`]: SetCell::finalize
pub struct SetCell<K: Key, A: Args, O: Output> {
    strategy: CacheStrategy,
    state: Mutex<CellState<K, A, O>>,
    built: OnceLock<HandlerSet<K, A, O>>,
}

impl<K: Key, A: Args, O: Output> SetCell<K, A, O> {
    /// Create an empty, open cell with the given caching strategy.
    pub const fn new(strategy: CacheStrategy) -> Self {
        Self {
            strategy,
            state: Mutex::new(CellState::Open(Vec::new())),
            built: OnceLock::new(),
        }
    }

    /// Register `handler` for one or more domain members.
    ///
    /// Fails with [`RegisterError::Finalized`] once the cell's definition
    /// pass has run, successfully or not.
    pub fn register<I, F>(&self, members: I, handler: F) -> Result<(), RegisterError>
    where
        I: IntoIterator<Item = K>,
        F: Fn(&Context<K, A, O>, A) -> O + Send + Sync + 'static,
    {
        self.add(Registration::new(members, handler))
    }

    /// Register `handler` with explicit metadata.
    pub fn register_with<I, F>(
        &self,
        members: I,
        meta: RegistrationMeta,
        handler: F,
    ) -> Result<(), RegisterError>
    where
        I: IntoIterator<Item = K>,
        F: Fn(&Context<K, A, O>, A) -> O + Send + Sync + 'static,
    {
        self.add(Registration::with_meta(members, meta, handler))
    }

    /// Add a pre-assembled registration.
    pub fn add(&self, registration: Registration<K, A, O>) -> Result<(), RegisterError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match &mut *state {
            CellState::Open(registrations) if self.built.get().is_none() => {
                registrations.push(registration);
                Ok(())
            }
            _ => Err(RegisterError::Finalized),
        }
    }

    /// Run the validation pass and freeze the cell's handler set.
    ///
    /// Idempotent on success: later calls return the already-built set. A
    /// validation failure is latched and returned from every later call.
    pub fn finalize(&self) -> Result<&HandlerSet<K, A, O>, BuildError<K>> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(set) = self.built.get() {
            return Ok(set);
        }
        match &mut *state {
            CellState::Failed(err) => Err(err.clone()),
            CellState::Open(registrations) => {
                let registrations = std::mem::take(registrations);
                match build_set(registrations, self.strategy) {
                    Ok(set) => Ok(self.built.get_or_init(|| set)),
                    Err(err) => {
                        *state = CellState::Failed(err.clone());
                        Err(err)
                    }
                }
            }
        }
    }

    /// The finalized set, or [`DispatchError::Unfinalized`] if the
    /// definition pass has not produced one.
    pub fn get(&self) -> Result<&HandlerSet<K, A, O>, DispatchError> {
        self.built.get().ok_or(DispatchError::Unfinalized)
    }

    /// Resolve the instance bound to `member` from the finalized set.
    pub fn bind(&self, member: K) -> Result<BoundHandler<K, A, O>, DispatchError> {
        self.get()?.bind(member)
    }

    /// Bind `member` and call its handler in one step.
    pub fn invoke(&self, member: K, args: A) -> Result<O, DispatchError> {
        self.get()?.invoke(member, args)
    }
}
