use thiserror::Error;

/// Fatal rendering failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A component read a context that no ancestor provides.
    #[error("{component} must be rendered inside a provider of {context}")]
    MissingContext {
        component: &'static str,
        context: &'static str,
    },
}

/// Non-fatal usage problem found while rendering a disclosure.
///
/// Diagnostics are logged and rendering carries on unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// `open` presence differs from the mode captured at mount.
    #[error("cannot change from controlled to uncontrolled or vice versa")]
    ModeSwitch,

    /// `default_open` set on a controlled disclosure.
    #[error("default_open should only be used for uncontrolled disclosures")]
    DefaultOpenIgnored,
}
