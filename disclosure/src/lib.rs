pub mod context;
pub mod error;
pub mod handlers;
pub mod id;
pub mod node;
pub mod node_ref;
pub mod renderer;
pub mod state;
pub mod widgets;

pub use context::RenderContext;
pub use error::{Diagnostic, RenderError};
pub use handlers::{Callback, Handler, HandlerRegistry, wrap_event};
pub use id::{IdSource, InstanceId, SequentialIds};
pub use node::{Component, Node};
pub use node_ref::NodeRef;
pub use renderer::Renderer;
pub use state::State;

pub mod prelude {
    pub use crate::context::RenderContext;
    pub use crate::error::{Diagnostic, RenderError};
    pub use crate::handlers::{Callback, Handler, HandlerRegistry, wrap_event};
    pub use crate::id::{IdSource, SequentialIds};
    pub use crate::node::{Component, Node};
    pub use crate::node_ref::NodeRef;
    pub use crate::renderer::Renderer;
    pub use crate::state::State;
    pub use crate::widgets::{
        Children, DataState, Disclosure, DisclosureButton, DisclosureContext, DisclosurePanel,
        DisclosureProps, OwnershipMode,
    };

    pub use markup::{Attributes, Element, Event};
}
