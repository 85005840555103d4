//! Configuration validation.

use url::Url;

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Collapse into the first error, if any.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(ConfigError::InvalidValue {
                field: err.path,
                message: err.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_notion(config, &mut result);
        Self::validate_capture(config, &mut result);
        Self::validate_history(config, &mut result);
        Self::validate_server(config, &mut result);

        result
    }

    fn validate_notion(config: &Config, result: &mut ValidationResult) {
        let notion = &config.notion;

        if notion.token.trim().is_empty() {
            result.add_warning(ValidationWarning::new(
                "notion.token",
                "Notion token is not set, saves will be refused",
            ));
        }

        if notion.database_id.trim().is_empty() {
            result.add_warning(ValidationWarning::new(
                "notion.database_id",
                "Notion database ID is not set, saves will be refused",
            ));
        }

        match Url::parse(&notion.api_base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(_) => result.add_error(ValidationError::new(
                "notion.api_base_url",
                "api_base_url must start with http:// or https://",
            )),
            Err(e) => result.add_error(ValidationError::new(
                "notion.api_base_url",
                format!("api_base_url is not a valid URL: {}", e),
            )),
        }

        if notion.api_version.trim().is_empty() {
            result.add_error(ValidationError::new(
                "notion.api_version",
                "api_version cannot be empty",
            ));
        }
    }

    fn validate_capture(config: &Config, result: &mut ValidationResult) {
        if config.capture.default_tags.iter().any(|t| t.trim().is_empty()) {
            result.add_warning(ValidationWarning::new(
                "capture.default_tags",
                "default_tags contains an empty label",
            ));
        }
    }

    fn validate_history(config: &Config, result: &mut ValidationResult) {
        if config.history.enabled && config.history.path.as_os_str().is_empty() {
            result.add_error(ValidationError::new(
                "history.path",
                "history path cannot be empty when history is enabled",
            ));
        }
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
