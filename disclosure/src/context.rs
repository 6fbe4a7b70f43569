//! Render-time context: handler registration and scoped providers.
//!
//! A component publishes a value to its subtree with [`RenderContext::provide`];
//! any descendant reads the nearest one with [`RenderContext::use_context`].
//! Values are keyed by type, so independent providers don't collide.

use std::any::{Any, type_name};

use log::trace;

use crate::error::RenderError;
use crate::handlers::{Handler, HandlerRegistry};

/// Context threaded through one render pass.
pub struct RenderContext<'a> {
    registry: &'a HandlerRegistry,
    providers: Vec<Box<dyn Any + Send + Sync>>,
}

impl<'a> RenderContext<'a> {
    pub fn new(registry: &'a HandlerRegistry) -> Self {
        Self {
            registry,
            providers: Vec::new(),
        }
    }

    /// Register a handler for an element rendered in this pass.
    pub fn on(&self, element_key: &str, event: &str, handler: Handler) {
        self.registry.register(element_key, event, handler);
    }

    pub fn registry(&self) -> &HandlerRegistry {
        self.registry
    }

    /// Make `value` visible to everything rendered inside `f`.
    ///
    /// The value is withdrawn when `f` returns, whether or not it failed.
    pub fn provide<T, R>(&mut self, value: T, f: impl FnOnce(&mut Self) -> R) -> R
    where
        T: Any + Send + Sync,
    {
        trace!("providing {}", type_name::<T>());
        self.providers.push(Box::new(value));
        let result = f(self);
        self.providers.pop();
        result
    }

    /// Nearest provided value of type `T`, if any.
    pub fn try_context<T: Any>(&self) -> Option<&T> {
        self.providers
            .iter()
            .rev()
            .find_map(|value| value.downcast_ref::<T>())
    }

    /// Nearest provided value of type `T`.
    ///
    /// Fails with [`RenderError::MissingContext`] outside any provider;
    /// `component` names the caller in the error.
    pub fn use_context<T: Any + Clone>(&self, component: &'static str) -> Result<T, RenderError> {
        self.try_context::<T>()
            .cloned()
            .ok_or(RenderError::MissingContext {
                component,
                context: type_name::<T>(),
            })
    }

    /// Number of active providers.
    pub fn depth(&self) -> usize {
        self.providers.len()
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("registry", &self.registry)
            .field("providers", &self.providers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Theme(&'static str);

    #[test]
    fn test_nearest_provider_wins() {
        let registry = HandlerRegistry::new();
        let mut cx = RenderContext::new(&registry);

        cx.provide(Theme("outer"), |cx| {
            assert_eq!(cx.use_context::<Theme>("test"), Ok(Theme("outer")));
            cx.provide(Theme("inner"), |cx| {
                assert_eq!(cx.use_context::<Theme>("test"), Ok(Theme("inner")));
            });
            assert_eq!(cx.use_context::<Theme>("test"), Ok(Theme("outer")));
        });
    }

    #[test]
    fn test_missing_context() {
        let registry = HandlerRegistry::new();
        let cx = RenderContext::new(&registry);

        let err = cx.use_context::<Theme>("Widget").unwrap_err();
        assert!(matches!(
            err,
            RenderError::MissingContext { component: "Widget", .. }
        ));
    }

    #[test]
    fn test_provider_withdrawn_after_scope() {
        let registry = HandlerRegistry::new();
        let mut cx = RenderContext::new(&registry);

        cx.provide(Theme("x"), |cx| assert_eq!(cx.depth(), 1));
        assert_eq!(cx.depth(), 0);
        assert!(cx.try_context::<Theme>().is_none());
    }

    #[test]
    fn test_providers_keyed_by_type() {
        let registry = HandlerRegistry::new();
        let mut cx = RenderContext::new(&registry);

        cx.provide(Theme("t"), |cx| {
            cx.provide(42u32, |cx| {
                assert_eq!(cx.try_context::<Theme>(), Some(&Theme("t")));
                assert_eq!(cx.try_context::<u32>(), Some(&42));
            });
        });
    }
}
