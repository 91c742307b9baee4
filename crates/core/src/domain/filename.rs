use std::fmt;

use serde_json::Value;

use super::{FieldChain, RequestInput, ValidationError, Validator};

const FIELD: &str = "filename";

/// A trimmed, markup-escaped file name ready to be joined onto the service
/// directory. Parent-directory segments are not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Filename(String);

impl Filename {
    /// Validates the `filename` member of a JSON request body.
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        let validator = Validator::new().chain(FieldChain::body(FIELD).is_string().trim().escape());
        let input = RequestInput::new().with_body(body.clone());
        Self::extract(&validator, &input)
    }

    /// Validates a `:filename` path segment.
    pub fn from_path_param(segment: impl Into<String>) -> Result<Self, ValidationError> {
        let validator =
            Validator::new().chain(FieldChain::params(FIELD).is_string().trim().escape());
        let input = RequestInput::new().with_param(FIELD, segment);
        Self::extract(&validator, &input)
    }

    fn extract(validator: &Validator, input: &RequestInput) -> Result<Self, ValidationError> {
        let fields = validator.validate(input)?;
        let value = fields.string(FIELD).unwrap_or_default();
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Filename {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Filename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
