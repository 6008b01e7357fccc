//! Listing UI Errors
//!
//! Nothing here is fatal to the page: callers log and move on.

/// Common result type for listing behaviors
pub type UiResult<T> = Result<T, UiError>;

/// Errors raised while wiring behaviors to the page
#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    /// A required element is not on the page
    MissingElement(String),
    /// localStorage refused a read or write
    Storage(String),
    /// A DOM call threw
    Dom(String),
    /// The page configuration block could not be parsed
    Config(String),
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::MissingElement(what) => write!(f, "Missing element: {}", what),
            UiError::Storage(msg) => write!(f, "Storage error: {}", msg),
            UiError::Dom(msg) => write!(f, "DOM error: {}", msg),
            UiError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_element() {
        let err = UiError::MissingElement("#view-toggle".to_string());
        assert_eq!(err.to_string(), "Missing element: #view-toggle");
    }
}
