//! Event-triggered greeting function.
//!
//! Independent of the file manager service: it takes an invocation event with
//! optional query parameters and returns a status code plus a JSON body.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_KEYWORD: &str = "nothing";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingEvent {
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl GreetingEvent {
    pub fn keyword(&self) -> &str {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get("keyword"))
            .map(String::as_str)
            .filter(|keyword| !keyword.is_empty())
            .unwrap_or(DEFAULT_KEYWORD)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingResponse {
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Serialize)]
struct GreetingBody<'a> {
    message: &'a str,
}

pub fn handle(event: &GreetingEvent) -> serde_json::Result<GreetingResponse> {
    let message = format!("Bashar says {}", event.keyword());
    let body = serde_json::to_string(&GreetingBody { message: &message })?;
    Ok(GreetingResponse {
        status_code: 200,
        body,
    })
}
