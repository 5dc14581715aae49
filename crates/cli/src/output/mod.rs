//! Output formatting for human-readable and JSON output

mod formatter;

pub use formatter::Formatter;

/// How results are printed
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Emit JSON instead of text
    pub json: bool,
    /// Disable colors
    pub no_color: bool,
    /// Suppress non-error output
    pub quiet: bool,
}

impl OutputConfig {
    /// Command-line switches win; config file settings fill in the rest.
    pub fn merge(settings: &nl_core::OutputSettings, json: bool, no_color: bool, quiet: bool) -> Self {
        Self {
            json: json || settings.json,
            no_color: no_color || settings.no_color,
            quiet: quiet || settings.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge() {
        let settings = nl_core::OutputSettings {
            quiet: true,
            ..Default::default()
        };
        let config = OutputConfig::merge(&settings, true, false, false);
        assert!(config.json);
        assert!(!config.no_color);
        assert!(config.quiet);
    }
}
