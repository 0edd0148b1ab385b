use serde::{Deserialize, Serialize};

pub mod clipboard;
pub mod exec;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Action {
    pub label: String,
    pub desc: String,
    pub action: String, // clipboard text, app to reopen, or URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
}
