use std::sync::Arc;

use log::{debug, warn};
use markup::Element;

use crate::context::RenderContext;
use crate::error::{Diagnostic, RenderError};
use crate::handlers::Callback;
use crate::id::{IdSource, InstanceId, SequentialIds};
use crate::node::{Component, Node, resolve_all};
use crate::state::State;

/// Who owns the open/closed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipMode {
    /// The caller supplies `open` and changes it in response to `on_change`.
    Controlled,
    /// The disclosure keeps its own value, seeded from `default_open`.
    Uncontrolled,
}

impl OwnershipMode {
    fn of(open: Option<bool>) -> Self {
        if open.is_some() {
            Self::Controlled
        } else {
            Self::Uncontrolled
        }
    }
}

/// Value of the `data-state` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataState {
    Open,
    Collapsed,
}

impl DataState {
    pub fn from_open(is_open: bool) -> Self {
        if is_open { Self::Open } else { Self::Collapsed }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Collapsed => "collapsed",
        }
    }
}

impl std::fmt::Display for DataState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload a disclosure publishes to its subtree.
#[derive(Clone)]
pub struct DisclosureContext {
    pub is_open: bool,
    pub panel_id: String,
    /// Notify `on_change` and, when uncontrolled, toggle.
    pub on_select: Callback,
}

impl DisclosureContext {
    pub fn select(&self) {
        (self.on_select)()
    }

    pub fn data_state(&self) -> DataState {
        DataState::from_open(self.is_open)
    }
}

impl std::fmt::Debug for DisclosureContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisclosureContext")
            .field("is_open", &self.is_open)
            .field("panel_id", &self.panel_id)
            .finish_non_exhaustive()
    }
}

type RenderProp = Arc<dyn Fn(&DisclosureContext) -> Vec<Node> + Send + Sync>;

/// Content of a disclosure.
pub enum Children {
    /// A fixed subtree.
    Static(Vec<Node>),
    /// Built on each render from the published context.
    Dynamic(RenderProp),
}

impl Children {
    fn resolve(
        &self,
        payload: &DisclosureContext,
        cx: &mut RenderContext<'_>,
    ) -> Result<Vec<Element>, RenderError> {
        match self {
            Children::Static(nodes) => resolve_all(nodes, cx),
            Children::Dynamic(render) => resolve_all(&render(payload), cx),
        }
    }
}

impl Default for Children {
    fn default() -> Self {
        Self::Static(Vec::new())
    }
}

impl std::fmt::Debug for Children {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(nodes) => f.debug_tuple("Static").field(nodes).finish(),
            Self::Dynamic(_) => write!(f, "Dynamic(..)"),
        }
    }
}

/// Per-render configuration of a disclosure.
#[derive(Default)]
pub struct DisclosureProps {
    /// Base for the panel id; generated per instance when absent.
    pub id: Option<String>,
    /// Supplying this makes the disclosure controlled.
    pub open: Option<bool>,
    pub on_change: Option<Callback>,
    /// Initial value for an uncontrolled disclosure.
    pub default_open: bool,
    pub children: Children,
}

impl std::fmt::Debug for DisclosureProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisclosureProps")
            .field("id", &self.id)
            .field("open", &self.open)
            .field("on_change", &self.on_change.is_some())
            .field("default_open", &self.default_open)
            .field("children", &self.children)
            .finish()
    }
}

impl DisclosureProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    pub fn on_change(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }

    pub fn default_open(mut self, default_open: bool) -> Self {
        self.default_open = default_open;
        self
    }

    pub fn children(mut self, children: Vec<Node>) -> Self {
        self.children = Children::Static(children);
        self
    }

    /// Build the content from the context on every render.
    pub fn render_prop(
        mut self,
        f: impl Fn(&DisclosureContext) -> Vec<Node> + Send + Sync + 'static,
    ) -> Self {
        self.children = Children::Dynamic(Arc::new(f));
        self
    }
}

/// A mounted disclosure.
///
/// Holds the state that must survive between renders. Create it once with
/// [`Disclosure::mount`] and render it with fresh props each pass. Clones
/// share state.
#[derive(Debug, Clone)]
pub struct Disclosure {
    /// Captured at mount, never reassigned.
    mode: OwnershipMode,
    is_open: State<bool>,
    /// Last `open` a controlled caller supplied.
    controlled_open: State<bool>,
    id: InstanceId,
}

impl Disclosure {
    /// Mount with ids drawn from `ids`.
    pub fn mount(props: &DisclosureProps, ids: &dyn IdSource) -> Self {
        let mode = OwnershipMode::of(props.open);
        let id = InstanceId::new(ids);
        debug!("mounting disclosure {} ({:?})", id.generated(), mode);
        Self {
            mode,
            is_open: State::new(props.default_open),
            controlled_open: State::new(props.open.unwrap_or(false)),
            id,
        }
    }

    /// Mount with ids from the process-wide source.
    pub fn new(props: &DisclosureProps) -> Self {
        Self::mount(props, SequentialIds::global())
    }

    pub fn mode(&self) -> OwnershipMode {
        self.mode
    }

    pub fn is_controlled(&self) -> bool {
        self.mode == OwnershipMode::Controlled
    }

    /// The self-managed value. Never changes while controlled.
    pub fn internal_is_open(&self) -> bool {
        self.is_open.get()
    }

    /// Whether a click has changed the self-managed value since the last
    /// render. Always `false` while controlled; the caller owns re-renders.
    pub fn needs_render(&self) -> bool {
        self.is_open.is_dirty()
    }

    /// Openness the subtree sees for these props.
    pub fn effective_is_open(&self, props: &DisclosureProps) -> bool {
        match self.mode {
            OwnershipMode::Controlled => props.open.unwrap_or_else(|| self.controlled_open.get()),
            OwnershipMode::Uncontrolled => self.is_open.get(),
        }
    }

    pub fn panel_id(&self, props: &DisclosureProps) -> String {
        format!("panel-{}", self.id.resolve(props.id.as_deref()))
    }

    /// Usage problems with `props` given the captured mode.
    pub fn diagnose(&self, props: &DisclosureProps) -> Vec<Diagnostic> {
        let mut found = Vec::new();
        if OwnershipMode::of(props.open) != self.mode {
            found.push(Diagnostic::ModeSwitch);
        }
        if self.is_controlled() && props.default_open {
            found.push(Diagnostic::DefaultOpenIgnored);
        }
        found
    }

    /// Build the payload published for `props`.
    pub fn context(&self, props: &DisclosureProps) -> DisclosureContext {
        let on_change = props.on_change.clone();
        let internal = (!self.is_controlled()).then(|| self.is_open.clone());
        let on_select: Callback = Arc::new(move || {
            if let Some(on_change) = &on_change {
                on_change();
            }
            if let Some(internal) = &internal {
                let now = internal.toggle();
                debug!("disclosure toggled to {}", DataState::from_open(now));
            }
        });

        DisclosureContext {
            is_open: self.effective_is_open(props),
            panel_id: self.panel_id(props),
            on_select,
        }
    }

    /// Render the subtree with the context in scope.
    pub fn render(
        &self,
        props: &DisclosureProps,
        cx: &mut RenderContext<'_>,
    ) -> Result<Vec<Element>, RenderError> {
        for diagnostic in self.diagnose(props) {
            warn!("{diagnostic}");
        }
        self.is_open.clear_dirty();
        if let (OwnershipMode::Controlled, Some(open)) = (self.mode, props.open) {
            self.controlled_open.set(open);
        }

        let payload = self.context(props);
        cx.provide(payload.clone(), |cx| props.children.resolve(&payload, cx))
    }

    /// Pair this instance with props as a renderable node.
    pub fn view(&self, props: DisclosureProps) -> Node {
        Node::component(DisclosureView {
            disclosure: self.clone(),
            props,
        })
    }
}

struct DisclosureView {
    disclosure: Disclosure,
    props: DisclosureProps,
}

impl Component for DisclosureView {
    fn name(&self) -> &'static str {
        "Disclosure"
    }

    fn render(&self, cx: &mut RenderContext<'_>) -> Result<Vec<Element>, RenderError> {
        self.disclosure.render(&self.props, cx)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_mode_captured_at_mount() {
        let ids = SequentialIds::new();
        let controlled = Disclosure::mount(&DisclosureProps::new().open(false), &ids);
        let uncontrolled = Disclosure::mount(&DisclosureProps::new(), &ids);

        assert_eq!(controlled.mode(), OwnershipMode::Controlled);
        assert_eq!(uncontrolled.mode(), OwnershipMode::Uncontrolled);
    }

    #[test]
    fn test_needs_render_after_toggle() {
        let props = DisclosureProps::new();
        let d = Disclosure::mount(&props, &SequentialIds::new());
        assert!(!d.needs_render());

        d.context(&props).select();
        assert!(d.needs_render());

        let registry = crate::handlers::HandlerRegistry::new();
        let mut cx = RenderContext::new(&registry);
        d.render(&props, &mut cx).unwrap();
        assert!(!d.needs_render());
    }

    #[test]
    fn test_controlled_never_needs_render() {
        let props = DisclosureProps::new().open(false);
        let d = Disclosure::mount(&props, &SequentialIds::new());

        d.context(&props).select();
        assert!(!d.needs_render());
    }

    #[test]
    fn test_diagnose_mode_switch() {
        let d = Disclosure::mount(&DisclosureProps::new(), &SequentialIds::new());

        assert!(d.diagnose(&DisclosureProps::new()).is_empty());
        assert_eq!(
            d.diagnose(&DisclosureProps::new().open(true)),
            vec![Diagnostic::ModeSwitch]
        );
        assert_eq!(d.mode(), OwnershipMode::Uncontrolled);
    }

    #[test]
    fn test_diagnose_default_open_under_control() {
        let props = DisclosureProps::new().open(true).default_open(true);
        let d = Disclosure::mount(&props, &SequentialIds::new());

        assert_eq!(d.diagnose(&props), vec![Diagnostic::DefaultOpenIgnored]);
        assert!(d.diagnose(&DisclosureProps::new().open(true)).is_empty());
    }

    #[test]
    fn test_uncontrolled_ignores_supplied_open() {
        let d = Disclosure::mount(&DisclosureProps::new(), &SequentialIds::new());
        assert!(!d.effective_is_open(&DisclosureProps::new().open(true)));
    }

    #[test]
    fn test_controlled_select_only_notifies() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let props = DisclosureProps::new()
            .open(false)
            .on_change(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        let d = Disclosure::mount(&props, &SequentialIds::new());

        d.context(&props).select();
        d.context(&props).select();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!d.internal_is_open());
    }

    #[test]
    fn test_uncontrolled_select_toggles() {
        let props = DisclosureProps::new().default_open(true);
        let d = Disclosure::mount(&props, &SequentialIds::new());

        let cx = d.context(&props);
        assert!(cx.is_open);
        cx.select();
        assert!(!d.internal_is_open());
        cx.select();
        assert!(d.internal_is_open());
    }

    #[test]
    fn test_panel_id() {
        let ids = SequentialIds::with_prefix("x");
        let d = Disclosure::mount(&DisclosureProps::new(), &ids);

        assert_eq!(d.panel_id(&DisclosureProps::new()), "panel-x-0");
        assert_eq!(d.panel_id(&DisclosureProps::new().id("faq")), "panel-faq");
    }

    #[test]
    fn test_data_state() {
        assert_eq!(DataState::from_open(true).as_str(), "open");
        assert_eq!(DataState::from_open(false).to_string(), "collapsed");
    }
}
