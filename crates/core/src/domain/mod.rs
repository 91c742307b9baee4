mod error;
mod filename;
mod validation;

pub use error::ValidationError;
pub use filename::Filename;
pub use validation::{FieldChain, RequestInput, Rule, ValidatedFields, Validator, escape_markup};
