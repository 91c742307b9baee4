use std::collections::HashMap;

use file_manager_api_types::{FieldLocation, ValidationFailure};
use serde_json::Value;

use super::ValidationError;

const INVALID_VALUE: &str = "Invalid value";

/// A single named step in a field's validation chain.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    name: &'static str,
    kind: RuleKind,
}

#[derive(Debug, Clone, Copy)]
enum RuleKind {
    Check {
        test: fn(Option<&Value>) -> bool,
        message: &'static str,
    },
    Sanitize(fn(Value) -> Value),
}

impl Rule {
    pub const fn check(
        name: &'static str,
        message: &'static str,
        test: fn(Option<&Value>) -> bool,
    ) -> Self {
        Self {
            name,
            kind: RuleKind::Check { test, message },
        }
    }

    pub const fn sanitize(name: &'static str, transform: fn(Value) -> Value) -> Self {
        Self {
            name,
            kind: RuleKind::Sanitize(transform),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub const IS_STRING: Rule = Rule::check("is_string", INVALID_VALUE, is_string);
    pub const TRIM: Rule = Rule::sanitize("trim", trim);
    pub const ESCAPE: Rule = Rule::sanitize("escape", escape);
}

fn is_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(_)))
}

fn trim(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        other => other,
    }
}

fn escape(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(escape_markup(&s)),
        other => other,
    }
}

/// Ordered rules applied to one field read from one location.
#[derive(Debug, Clone)]
pub struct FieldChain {
    location: FieldLocation,
    field: &'static str,
    rules: Vec<Rule>,
}

impl FieldChain {
    pub fn body(field: &'static str) -> Self {
        Self::new(FieldLocation::Body, field)
    }

    pub fn params(field: &'static str) -> Self {
        Self::new(FieldLocation::Params, field)
    }

    fn new(location: FieldLocation, field: &'static str) -> Self {
        Self {
            location,
            field,
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn is_string(self) -> Self {
        self.rule(Rule::IS_STRING)
    }

    pub fn trim(self) -> Self {
        self.rule(Rule::TRIM)
    }

    pub fn escape(self) -> Self {
        self.rule(Rule::ESCAPE)
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(Rule::name).collect()
    }

    /// Runs the chain. The first failing check ends it; sanitizers on an
    /// absent value are skipped.
    pub fn run(&self, input: &RequestInput) -> Result<Option<Value>, ValidationFailure> {
        let original = input.lookup(self.location, self.field);
        let mut current = original.clone();

        for rule in &self.rules {
            match rule.kind {
                RuleKind::Check { test, message } => {
                    if !test(current.as_ref()) {
                        return Err(ValidationFailure::field(
                            self.location,
                            self.field,
                            original,
                            message,
                        ));
                    }
                }
                RuleKind::Sanitize(transform) => {
                    current = current.map(transform);
                }
            }
        }

        Ok(current)
    }
}

/// Raw, untrusted request fields.
#[derive(Debug, Clone, Default)]
pub struct RequestInput {
    body: Value,
    params: HashMap<String, String>,
}

impl RequestInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    fn lookup(&self, location: FieldLocation, field: &str) -> Option<Value> {
        match location {
            FieldLocation::Body => self.body.get(field).cloned(),
            FieldLocation::Params => self.params.get(field).cloned().map(Value::String),
        }
    }
}

/// Sanitized values keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedFields {
    values: HashMap<&'static str, Value>,
}

impl ValidatedFields {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn string(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }
}

/// Every chain runs; failures are collected into one error.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    chains: Vec<FieldChain>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chain(mut self, chain: FieldChain) -> Self {
        self.chains.push(chain);
        self
    }

    pub fn validate(&self, input: &RequestInput) -> Result<ValidatedFields, ValidationError> {
        let mut fields = ValidatedFields::default();
        let mut failures = Vec::new();

        for chain in &self.chains {
            match chain.run(input) {
                Ok(Some(value)) => {
                    fields.values.insert(chain.field(), value);
                }
                Ok(None) => {}
                Err(failure) => failures.push(failure),
            }
        }

        if failures.is_empty() {
            Ok(fields)
        } else {
            Err(ValidationError::new(failures))
        }
    }
}

/// Replaces characters with markup meaning by their entity form.
pub fn escape_markup(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '/' => escaped.push_str("&#x2F;"),
            '\\' => escaped.push_str("&#x5C;"),
            '`' => escaped.push_str("&#96;"),
            other => escaped.push(other),
        }
    }
    escaped
}
