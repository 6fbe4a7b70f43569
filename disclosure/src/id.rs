//! Identifier generation for component instances.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of fresh identifiers.
///
/// One source per render pass (or per page) keeps ids deterministic: the
/// same tree mounted against a new source yields the same ids.
pub trait IdSource: Send + Sync {
    /// Produce an identifier never returned before by this source.
    fn next_id(&self) -> String;
}

/// Counter-backed [`IdSource`] producing `"{prefix}-{n}"`.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicUsize,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::with_prefix("disclosure")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicUsize::new(0),
        }
    }

    /// Process-wide source used when the caller doesn't supply one.
    pub fn global() -> &'static SequentialIds {
        static GLOBAL: std::sync::OnceLock<SequentialIds> = std::sync::OnceLock::new();
        GLOBAL.get_or_init(SequentialIds::new)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", self.prefix, n)
    }
}

/// Identifier bound to one mounted component instance.
///
/// Generated once at mount. [`InstanceId::resolve`] echoes a caller-supplied
/// id back and otherwise returns the generated one, so repeated renders of
/// the same instance always agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceId {
    generated: String,
}

impl InstanceId {
    pub fn new(source: &dyn IdSource) -> Self {
        Self {
            generated: source.next_id(),
        }
    }

    pub fn resolve(&self, explicit: Option<&str>) -> String {
        explicit.unwrap_or(&self.generated).to_string()
    }

    pub fn generated(&self) -> &str {
        &self.generated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::with_prefix("d");
        assert_eq!(ids.next_id(), "d-0");
        assert_eq!(ids.next_id(), "d-1");
    }

    #[test]
    fn test_fresh_sources_are_deterministic() {
        let a = SequentialIds::new();
        let b = SequentialIds::new();
        assert_eq!(a.next_id(), b.next_id());
    }

    #[test]
    fn test_instance_id_is_stable() {
        let ids = SequentialIds::new();
        let instance = InstanceId::new(&ids);
        let first = instance.resolve(None);
        ids.next_id();
        assert_eq!(instance.resolve(None), first);
    }

    #[test]
    fn test_instance_id_echoes_explicit() {
        let ids = SequentialIds::new();
        let instance = InstanceId::new(&ids);
        assert_eq!(instance.resolve(Some("faq")), "faq");
        assert_eq!(instance.resolve(None), "disclosure-0");
    }
}
