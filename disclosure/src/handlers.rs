use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::debug;
use markup::Event;

/// Event handler attached to an element.
pub type Handler = Arc<dyn Fn(&Event) + Send + Sync>;

/// Argument-less notification callback (`on_change`, `on_select`).
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Compose two optional handlers into one.
///
/// The returned handler calls `first`, then `second`, skipping whichever is
/// absent. Both always run; there is no short-circuit.
pub fn wrap_event(first: Option<Handler>, second: Option<Handler>) -> Handler {
    Arc::new(move |event: &Event| {
        if let Some(first) = &first {
            first(event);
        }
        if let Some(second) = &second {
            second(event);
        }
    })
}

/// Adapt a [`Callback`] into a [`Handler`] that ignores the event.
pub fn callback_handler(callback: Callback) -> Handler {
    Arc::new(move |_event: &Event| callback())
}

// =============================================================================
// HandlerRegistry
// =============================================================================

/// Registry for element event handlers.
///
/// Maps (element_key, event_name) to handler closures. Cleared at the start
/// of each render so handlers from previous renders don't persist.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event.
    ///
    /// # Arguments
    /// - `element_key`: The element's internal key (from `Element::key`)
    /// - `event`: The event name (e.g., "click")
    /// - `handler`: The handler closure
    pub fn register(&self, element_key: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_key.to_string(), event.to_string()), handler);
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_key: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_key.to_string(), event.to_string()))
            .cloned()
    }

    /// Run the handler registered for `event` on its target element.
    ///
    /// Returns false when nothing is registered. The registry lock is
    /// released before the handler runs, so handlers may touch the registry.
    pub fn dispatch(&self, event: &Event) -> bool {
        match self.get(event.target(), event.name()) {
            Some(handler) => {
                debug!("dispatching {} to {}", event.name(), event.target());
                handler(event);
                true
            }
            None => {
                debug!("no {} handler for {}", event.name(), event.target());
                false
            }
        }
    }

    /// Clear all handlers.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .map(|h| h.is_empty())
            .unwrap_or(true)
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    fn recorder(log: &Arc<Mutex<Vec<&'static str>>>, name: &'static str) -> Handler {
        let log = Arc::clone(log);
        Arc::new(move |_: &Event| log.lock().unwrap().push(name))
    }

    #[test]
    fn test_wrap_event_runs_first_then_second() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let composed = wrap_event(Some(recorder(&log, "first")), Some(recorder(&log, "second")));

        composed(&Event::click("k"));
        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_wrap_event_skips_missing() {
        let log = Arc::new(Mutex::new(Vec::new()));

        wrap_event(None, Some(recorder(&log, "second")))(&Event::click("k"));
        wrap_event(Some(recorder(&log, "first")), None)(&Event::click("k"));
        wrap_event(None, None)(&Event::click("k"));

        assert_eq!(*log.lock().unwrap(), vec!["second", "first"]);
    }

    #[test]
    fn test_dispatch_by_key_and_name() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = HandlerRegistry::new();
        registry.register("button-1", "click", recorder(&log, "clicked"));

        assert!(registry.dispatch(&Event::click("button-1")));
        assert!(!registry.dispatch(&Event::click("button-2")));
        assert_eq!(*log.lock().unwrap(), vec!["clicked"]);
    }

    #[test]
    fn test_clear() {
        let registry = HandlerRegistry::new();
        registry.register("a", "click", Arc::new(|_: &Event| {}));
        assert_eq!(registry.len(), 1);
        registry.clear();
        assert!(registry.is_empty());
    }
}
