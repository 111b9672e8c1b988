//! Engine configuration.

/// Configuration shared by every host in a composition tree.
///
/// The config is passed explicitly at host construction and shared via
/// `Rc`; there is no process-wide registry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComposeConfig {
    /// Separator between segments of a namespaced fragment name.
    pub delimiter: String,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            delimiter: ".".to_string(),
        }
    }
}

impl ComposeConfig {
    /// Config with a custom path delimiter.
    pub fn with_delimiter(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delimiter_is_dot() {
        assert_eq!(ComposeConfig::default().delimiter, ".");
    }

    #[test]
    fn custom_delimiter() {
        assert_eq!(ComposeConfig::with_delimiter("/").delimiter, "/");
    }
}
