//! Method name rules
//!
//! Export tables and the resolver apply the same rule, so every name a
//! program exports is one a caller can resolve.

/// Longest method name a program may export
pub const MAX_METHOD_NAME_LEN: usize = 128;

/// Why a method name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MethodNameError {
    #[error("name is empty")]
    Empty,

    #[error("name too long")]
    TooLong,

    #[error("name contains whitespace")]
    Whitespace,

    #[error("name contains control characters")]
    Control,
}

/// Check a method name against the export rules
pub fn validate_method_name(name: &str) -> Result<(), MethodNameError> {
    if name.is_empty() {
        Err(MethodNameError::Empty)
    } else if name.len() > MAX_METHOD_NAME_LEN {
        Err(MethodNameError::TooLong)
    } else if name.chars().any(char::is_whitespace) {
        Err(MethodNameError::Whitespace)
    } else if name.chars().any(char::is_control) {
        Err(MethodNameError::Control)
    } else {
        Ok(())
    }
}
