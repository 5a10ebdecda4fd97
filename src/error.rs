//! Error type for the face engine.
//!
//! The error surface is deliberately small: a caller can pass an unknown
//! expression name, or the display collaborator can fail. Nothing here is
//! retried — a failed draw or present is fatal for the operation that hit it.

use heapless::String;

/// Maximum length of the offending name carried by
/// [`FaceError::InvalidExpression`]. Longer names are truncated.
pub const ERROR_NAME_CAPACITY: usize = 24;

/// Errors surfaced by the face engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceError {
    /// The caller requested an expression name outside the enumerated set.
    InvalidExpression(String<ERROR_NAME_CAPACITY>),

    /// A draw or present on the display collaborator failed. There is no
    /// fallback rendering path.
    DisplayUnavailable,
}

impl FaceError {
    /// Build an [`FaceError::InvalidExpression`] carrying (a truncated copy
    /// of) the offending name.
    pub(crate) fn invalid_expression(name: &str) -> Self {
        let mut owned: String<ERROR_NAME_CAPACITY> = String::new();
        for ch in name.chars() {
            if owned.push(ch).is_err() {
                break;
            }
        }
        Self::InvalidExpression(owned)
    }
}

impl core::fmt::Display for FaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidExpression(name) => {
                write!(f, "unrecognized expression name: {name}")
            }
            Self::DisplayUnavailable => write!(f, "display unavailable"),
        }
    }
}

impl std::error::Error for FaceError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_expression_keeps_name() {
        let err = FaceError::invalid_expression("grumpy");
        assert_eq!(
            err,
            FaceError::invalid_expression("grumpy"),
            "Same name should compare equal"
        );
        assert_eq!(err.to_string(), "unrecognized expression name: grumpy");
    }

    #[test]
    fn test_invalid_expression_truncates_long_name() {
        let long = "x".repeat(ERROR_NAME_CAPACITY + 10);
        let FaceError::InvalidExpression(name) = FaceError::invalid_expression(&long) else {
            panic!("expected InvalidExpression");
        };
        assert_eq!(name.len(), ERROR_NAME_CAPACITY, "Name should be truncated to capacity");
    }

    #[test]
    fn test_display_unavailable_message() {
        assert_eq!(FaceError::DisplayUnavailable.to_string(), "display unavailable");
    }
}
