//! Output formatter for human-readable and JSON output
//!
//! Every message the front end prints goes through here, so JSON mode
//! stays strict and quiet mode stays quiet.

use console::Style;
use serde::Serialize;

use super::OutputConfig;

/// Color theme for styled output
#[derive(Debug, Clone)]
pub struct Theme {
    /// Section headings - cyan
    pub heading: Style,
    /// Available features - green
    pub yes: Style,
    /// Missing features - dim
    pub no: Style,
    /// Error messages - red
    pub error: Style,
    /// Warning messages - yellow
    pub warning: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            heading: Style::new().cyan(),
            yes: Style::new().green(),
            no: Style::new().dim(),
            error: Style::new().red(),
            warning: Style::new().yellow(),
        }
    }
}

impl Theme {
    /// Returns a theme with no styling (for no-color mode)
    pub fn plain() -> Self {
        Self {
            heading: Style::new(),
            yes: Style::new(),
            no: Style::new(),
            error: Style::new(),
            warning: Style::new(),
        }
    }
}

/// Formatter for CLI output
///
/// Handles both human-readable and JSON output formats based on configuration.
/// When JSON mode is enabled, all output is strict JSON without colors.
#[derive(Debug, Clone)]
pub struct Formatter {
    config: OutputConfig,
    theme: Theme,
    program: String,
}

impl Formatter {
    /// Create a new formatter with the given configuration
    pub fn new(config: OutputConfig, program: impl Into<String>) -> Self {
        let theme = if config.no_color || config.json {
            Theme::plain()
        } else {
            Theme::default()
        };
        Self {
            config,
            theme,
            program: program.into(),
        }
    }

    /// Check if JSON output mode is enabled
    pub fn is_json(&self) -> bool {
        self.config.json
    }

    /// Check if colors are enabled
    pub fn colors_enabled(&self) -> bool {
        !self.config.no_color && !self.config.json
    }

    /// Program name used to prefix diagnostics
    pub fn program(&self) -> &str {
        &self.program
    }

    // ========== Style helper methods ==========

    /// Style a heading (cyan)
    pub fn style_heading(&self, text: &str) -> String {
        self.theme.heading.apply_to(text).to_string()
    }

    /// Style a yes/no availability marker
    pub fn style_available(&self, available: bool) -> String {
        if available {
            self.theme.yes.apply_to("yes").to_string()
        } else {
            self.theme.no.apply_to("no").to_string()
        }
    }

    // ========== Output methods ==========

    /// Output a value
    ///
    /// In JSON mode, serializes the value to JSON.
    /// In human mode, uses the Display implementation.
    pub fn output<T: Serialize + std::fmt::Display>(&self, value: &T) {
        if self.config.quiet {
            return;
        }

        if self.config.json {
            self.json(value);
        } else {
            println!("{value}");
        }
    }

    /// Output an error message
    ///
    /// Errors are always printed, even in quiet mode.
    pub fn error(&self, message: &str) {
        if self.config.json {
            let error = serde_json::json!({
                "error": message
            });
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&error).unwrap_or_else(|_| message.to_string())
            );
        } else {
            let prefix = self.theme.error.apply_to(format!("{}:", self.program));
            eprintln!("{prefix} {message}");
        }
    }

    /// Output a warning message
    pub fn warning(&self, message: &str) {
        if self.config.quiet || self.config.json {
            return;
        }

        let prefix = self.theme.warning.apply_to(format!("{}: WARNING:", self.program));
        eprintln!("{prefix} {message}");
    }

    /// Print a hint to stderr (human mode only)
    pub fn hint(&self, message: &str) {
        if self.config.json {
            return;
        }
        eprintln!("{}: {message}", self.program);
    }

    /// Output JSON directly
    pub fn json<T: Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error serializing output: {e}"),
        }
    }

    /// Print a line of text (respects quiet mode)
    pub fn println(&self, message: &str) {
        if self.config.quiet {
            return;
        }
        println!("{message}");
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(OutputConfig::default(), "nulib2")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_default() {
        let formatter = Formatter::default();
        assert!(!formatter.is_json());
        assert!(formatter.colors_enabled());
        assert_eq!(formatter.program(), "nulib2");
    }

    #[test]
    fn test_formatter_json_mode() {
        let config = OutputConfig {
            json: true,
            ..Default::default()
        };
        let formatter = Formatter::new(config, "nulib2");
        assert!(formatter.is_json());
        assert!(!formatter.colors_enabled()); // Colors disabled in JSON mode
    }

    #[test]
    fn test_formatter_no_color() {
        let config = OutputConfig {
            no_color: true,
            ..Default::default()
        };
        let formatter = Formatter::new(config, "nulib2");
        assert!(!formatter.colors_enabled());
        assert_eq!(formatter.style_heading("Compression"), "Compression");
        assert_eq!(formatter.style_available(false), "no");
    }
}
