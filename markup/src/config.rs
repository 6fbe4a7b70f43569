//! Serialization configuration.

/// Controls how an element tree is written out as HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Put each element on its own line, indented by depth.
    pub pretty: bool,

    /// Spaces per nesting level when `pretty` is set.
    pub indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
        }
    }
}

impl RenderConfig {
    /// Compact output, everything on one line.
    pub fn compact() -> Self {
        Self::default()
    }

    /// Indented, one element per line.
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Default::default()
        }
    }

    /// Set the indentation width.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
