use file_manager_api_types::ValidationFailure;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("request validation failed: {} invalid field(s)", failures.len())]
pub struct ValidationError {
    pub failures: Vec<ValidationFailure>,
}

impl ValidationError {
    pub fn new(failures: Vec<ValidationFailure>) -> Self {
        Self { failures }
    }
}
