//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the config key in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains('$') {
        return Ok(value.to_owned());
    }

    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("127.0.0.1", "server.host").unwrap(), "127.0.0.1");
    }

    #[test]
    fn test_default_used_when_unset() {
        assert_eq!(
            expand_env("${MIXDOCS_TEST_UNSET_HOST:-0.0.0.0}", "server.host").unwrap(),
            "0.0.0.0"
        );
    }

    #[test]
    fn test_missing_variable_names_field() {
        let err = expand_env("${MIXDOCS_TEST_MISSING_VAR}", "server.host").unwrap_err();

        match err {
            ConfigError::EnvVar { field, message } => {
                assert_eq!(field, "server.host");
                assert_eq!(message, "${MIXDOCS_TEST_MISSING_VAR} not set");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
