//! Serializer configuration.

/// Configuration options for rendering object-literal source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces per indentation level.
    /// Default: 2
    pub indent_width: usize,

    /// Newline style.
    /// Default: NewlineStyle::Lf
    pub newline: NewlineStyle,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            newline: NewlineStyle::Lf,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set indent width.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set newline style.
    pub fn with_newline(mut self, style: NewlineStyle) -> Self {
        self.newline = style;
        self
    }
}

/// Newline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewlineStyle {
    /// Unix-style line endings (LF).
    #[default]
    Lf,
    /// Windows-style line endings (CRLF).
    Crlf,
}

impl NewlineStyle {
    /// Get the newline string.
    pub fn as_str(self) -> &'static str {
        match self {
            NewlineStyle::Lf => "\n",
            NewlineStyle::Crlf => "\r\n",
        }
    }
}
