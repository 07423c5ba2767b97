//! Result type alias for the HMC client

use super::errors::HmcError;

/// Result type alias for HMC client operations
///
/// # Examples
///
/// ```
/// use hmc_client::domain::result::Result;
/// use hmc_client::domain::errors::HmcError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(HmcError::Configuration("missing base_url".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, HmcError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{DecodeError, HmcError};

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_stage_error_converts_with_question_mark() {
        fn decode_stage() -> std::result::Result<(), DecodeError> {
            Err(DecodeError::MissingRoot)
        }

        fn outer() -> Result<()> {
            decode_stage()?;
            Ok(())
        }

        assert!(matches!(outer(), Err(HmcError::Decode(_))));
    }
}
