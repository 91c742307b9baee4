//! Request validation for the file manager service.

pub mod domain;

pub use domain::{
    FieldChain, Filename, RequestInput, Rule, ValidatedFields, ValidationError, Validator,
    escape_markup,
};
