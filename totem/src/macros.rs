//! Declarative handler-set definition.

/// Defines a handler set as a literal member-to-handler map.
///
/// Expands to a [`HandlerSetBuilder`] chain and evaluates to the result of
/// [`build`], so validation errors surface exactly as they do on the builder
/// path. An optional leading `cache: <strategy>;` selects the caching
/// strategy; the default is eager.
///
/// # Example
///
/// ```rust
/// use totem::{CacheStrategy, Key};
///
/// #[derive(Key, Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Light {
///     Red,
///     Amber,
///     Green,
/// }
///
/// let lights = totem::handlers! {
///     cache: CacheStrategy::Lazy;
///     [Light::Red, Light::Amber] => |_, ()| "wait",
///     [Light::Green] => |_, ()| "go",
/// }?;
///
/// assert_eq!(lights.invoke(Light::Amber, ())?, "wait");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// [`HandlerSetBuilder`]: crate::HandlerSetBuilder
/// [`build`]: crate::HandlerSetBuilder::build
#[macro_export]
macro_rules! handlers {
    (cache: $strategy:expr; $([$($member:expr),+ $(,)?] => $handler:expr),+ $(,)?) => {
        $crate::HandlerSetBuilder::new()
            .cache($strategy)
            $( .register([$($member),+], $handler) )+
            .build()
    };
    ($([$($member:expr),+ $(,)?] => $handler:expr),+ $(,)?) => {
        $crate::handlers!(cache: $crate::CacheStrategy::Eager; $([$($member),+] => $handler),+)
    };
}
