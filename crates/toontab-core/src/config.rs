//! Encoder formatting configuration.
//!
//! Decoding is configuration-free: the grammar is fixed and the decoder
//! tolerates any surrounding whitespace. The encoder takes an explicit
//! [`FormatConfig`] parameter rather than consulting any ambient state.

/// Formatting options consumed by the encoder.
///
/// ```rust
/// use toontab_core::FormatConfig;
///
/// let config = FormatConfig::default().with_indent_width(4).with_compact(false);
/// assert_eq!(config.indent_width, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Separator between keys on a keys line and between packed values.
    pub key_separator: String,
    /// Line terminator joining output lines.
    pub line_break: String,
    /// Collapse indentation and inter-item spacing: the separator shrinks to
    /// its bare delimiter and the indent width is treated as zero.
    pub compact: bool,
    /// Reserved for lenient/strict decode switching; not consulted anywhere
    /// yet.
    pub strict: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            indent_width: 2,
            key_separator: ", ".to_string(),
            line_break: "\n".to_string(),
            compact: false,
            strict: false,
        }
    }
}

impl FormatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    #[must_use]
    pub fn with_key_separator(mut self, separator: impl Into<String>) -> Self {
        self.key_separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_line_break(mut self, line_break: impl Into<String>) -> Self {
        self.line_break = line_break.into();
        self
    }

    #[must_use]
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// The active separator: trimmed to its bare delimiter in compact mode.
    pub(crate) fn separator(&self) -> &str {
        if self.compact {
            self.key_separator.trim()
        } else {
            &self.key_separator
        }
    }

    /// Indentation for one output line, computed fresh per line.
    pub(crate) fn indent(&self, level: usize) -> String {
        if self.compact {
            String::new()
        } else {
            " ".repeat(self.indent_width * level)
        }
    }
}
