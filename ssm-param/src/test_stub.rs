use crate::error::ParamError;

pub const TEST_PARAM_VALUE: &str = "TEST_PARAM_VALUE";

/// Stands in for the parameter store when running with `--test-mode`.
pub fn test_param_value(param_name: &str) -> Result<String, ParamError> {
    if param_name == TEST_PARAM_VALUE {
        Ok(param_name.to_string())
    } else {
        Err(ParamError::UnexpectedTestValue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_returned() {
        assert_eq!(test_param_value("TEST_PARAM_VALUE").unwrap(), TEST_PARAM_VALUE);
    }

    #[test]
    fn test_other_value_is_rejected() {
        let err = test_param_value("anything-else").unwrap_err();
        assert!(matches!(err, ParamError::UnexpectedTestValue));
        assert!(err.to_string().contains(TEST_PARAM_VALUE));
    }

    #[test]
    fn test_sentinel_is_case_sensitive() {
        assert!(test_param_value("test_param_value").is_err());
        assert!(test_param_value(" TEST_PARAM_VALUE").is_err());
    }
}
