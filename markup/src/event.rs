/// An input event delivered to an element's handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The element was clicked (or activated the way a native button is).
    Click {
        /// Key of the element that received the click.
        target: String,
    },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    /// The name handlers for this event are registered under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Click { .. } => "click",
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Click { target } => target,
        }
    }
}
