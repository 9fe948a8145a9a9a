//! Finalized handler sets and the instances bound to their members.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::cache::CacheStrategy;
use crate::error::DispatchError;
use crate::handler::{Args, Context, HandlerFn, Output};
use crate::key::Key;

/// The identity-bearing payload of a bound instance.
///
/// Cache entries hold one of these per member; [`BoundHandler`]s handed to
/// callers are lightweight handles onto it, so instance identity is the
/// identity of the shared core.
pub(crate) struct HandlerCore<K: Key, A: Args, O: Output> {
    member: K,
    doc: Option<&'static str>,
    handler: HandlerFn<K, A, O>,
}

/// One frozen slot of the handler table, in enumeration order.
pub(crate) struct TableEntry<K: Key, A: Args, O: Output> {
    pub(crate) member: K,
    pub(crate) doc: Option<&'static str>,
    pub(crate) handler: HandlerFn<K, A, O>,
}

enum Cache<K: Key, A: Args, O: Output> {
    None,
    Eager(Box<[Arc<HandlerCore<K, A, O>>]>),
    Lazy(Box<[OnceLock<Arc<HandlerCore<K, A, O>>>]>),
}

struct SetInner<K: Key, A: Args, O: Output> {
    table: Box<[TableEntry<K, A, O>]>,
    strategy: CacheStrategy,
    cache: Cache<K, A, O>,
}

impl<K: Key, A: Args, O: Output> SetInner<K, A, O> {
    fn core_for(&self, index: usize) -> HandlerCore<K, A, O> {
        let entry = &self.table[index];
        HandlerCore {
            member: entry.member,
            doc: entry.doc,
            handler: Arc::clone(&entry.handler),
        }
    }
}

/// An immutable, exhaustively-checked table of handlers over a key domain.
///
/// Built once by [`HandlerSetBuilder::build`]; every member of `K::MEMBERS`
/// has exactly one handler, and the table cannot be extended afterwards.
/// Cloning is cheap and yields a handle to the same table and cache.
///
/// [`HandlerSetBuilder::build`]: crate::HandlerSetBuilder::build
pub struct HandlerSet<K: Key, A: Args, O: Output> {
    inner: Arc<SetInner<K, A, O>>,
}

impl<K: Key, A: Args, O: Output> Clone for HandlerSet<K, A, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Key, A: Args, O: Output> HandlerSet<K, A, O> {
    /// Assemble a set from a validated table, populating the eager cache
    /// before the set becomes observable.
    pub(crate) fn from_table(table: Box<[TableEntry<K, A, O>]>, strategy: CacheStrategy) -> Self {
        let inner = SetInner {
            cache: Cache::None,
            strategy,
            table,
        };
        let cache = match strategy {
            CacheStrategy::None => Cache::None,
            // Warm-up builds cores directly off the table, in enumeration
            // order; it never re-enters `bind`.
            CacheStrategy::Eager => Cache::Eager(
                (0..inner.table.len())
                    .map(|index| Arc::new(inner.core_for(index)))
                    .collect(),
            ),
            CacheStrategy::Lazy => Cache::Lazy(
                std::iter::repeat_with(OnceLock::new)
                    .take(inner.table.len())
                    .collect(),
            ),
        };
        Self {
            inner: Arc::new(SetInner { cache, ..inner }),
        }
    }

    /// The caching strategy the set was built with.
    pub fn strategy(&self) -> CacheStrategy {
        self.inner.strategy
    }

    /// The domain the set covers, in enumeration order.
    pub fn members(&self) -> &'static [K] {
        K::MEMBERS
    }

    /// Number of instances currently held by the cache.
    ///
    /// Immediately after an eager build this equals the domain size; a lazy
    /// cache grows monotonically as members are first bound; without caching
    /// it stays zero.
    pub fn cached(&self) -> usize {
        match &self.inner.cache {
            Cache::None => 0,
            Cache::Eager(cores) => cores.len(),
            Cache::Lazy(slots) => slots.iter().filter(|slot| slot.get().is_some()).count(),
        }
    }

    /// Resolve the instance bound to `member`, per the caching strategy.
    ///
    /// Under [`Eager`] and [`Lazy`] caching the returned instance is
    /// identity-stable across calls ([`BoundHandler::ptr_eq`]); under
    /// [`None`] every call yields a fresh instance. Competing first binds of
    /// a lazy member from different threads all observe the same instance.
    ///
    /// [`Eager`]: CacheStrategy::Eager
    /// [`Lazy`]: CacheStrategy::Lazy
    /// [`None`]: CacheStrategy::None
    pub fn bind(&self, member: K) -> Result<BoundHandler<K, A, O>, DispatchError> {
        let index = member.ordinal().ok_or_else(|| DispatchError::UnknownMember {
            member: format!("{member:?}"),
        })?;
        let core = match &self.inner.cache {
            Cache::None => Arc::new(self.inner.core_for(index)),
            Cache::Eager(cores) => Arc::clone(&cores[index]),
            Cache::Lazy(slots) => Arc::clone(slots[index].get_or_init(|| {
                #[cfg(feature = "tracing")]
                tracing::trace!(member = ?member, "caching handler instance");
                Arc::new(self.inner.core_for(index))
            })),
        };
        Ok(BoundHandler {
            core,
            set: self.clone(),
        })
    }

    /// Bind `member` and call its handler in one step.
    pub fn invoke(&self, member: K, args: A) -> Result<O, DispatchError> {
        Ok(self.bind(member)?.call(args))
    }
}

impl<K: Key, A: Args, O: Output> fmt::Debug for HandlerSet<K, A, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerSet")
            .field("members", &self.inner.table.len())
            .field("strategy", &self.inner.strategy)
            .finish()
    }
}

/// A handler instance bound to exactly one domain member.
///
/// Calling it executes the member's registered handler with a dispatch
/// [`Context`] as receiver. Identity of the instance follows the owning
/// set's caching strategy; compare with [`ptr_eq`](BoundHandler::ptr_eq).
pub struct BoundHandler<K: Key, A: Args, O: Output> {
    core: Arc<HandlerCore<K, A, O>>,
    set: HandlerSet<K, A, O>,
}

impl<K: Key, A: Args, O: Output> Clone for BoundHandler<K, A, O> {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
            set: self.set.clone(),
        }
    }
}

impl<K: Key, A: Args, O: Output> BoundHandler<K, A, O> {
    /// The member this instance is bound to.
    pub fn key(&self) -> K {
        self.core.member
    }

    /// The doc string of the registration this instance was bound from.
    pub fn doc(&self) -> Option<&'static str> {
        self.core.doc
    }

    /// The set this instance belongs to.
    pub fn set(&self) -> &HandlerSet<K, A, O> {
        &self.set
    }

    /// Invoke the bound handler, forwarding `args` and returning its result
    /// unchanged.
    pub fn call(&self, args: A) -> O {
        let context = Context::new(self.set.clone(), self.core.member);
        (self.core.handler)(&context, args)
    }

    /// Whether two handles refer to the same underlying instance.
    pub fn ptr_eq(left: &Self, right: &Self) -> bool {
        Arc::ptr_eq(&left.core, &right.core)
    }
}

impl<K: Key, A: Args, O: Output> fmt::Debug for BoundHandler<K, A, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundHandler")
            .field("key", &self.core.member)
            .finish()
    }
}
