use crate::actions::Action;
use crate::common::strip_prefix_ci;
use crate::plugin::Plugin;

/// Offers an action that brings an app to the front, starting it if needed.
pub struct ReopenAppPlugin {
    prefix: String,
    app: String,
    process: String,
}

impl ReopenAppPlugin {
    pub fn new(app: impl Into<String>, process: impl Into<String>) -> Self {
        let app = app.into();
        Self {
            prefix: app.to_lowercase(),
            app,
            process: process.into(),
        }
    }
}

impl Default for ReopenAppPlugin {
    fn default() -> Self {
        Self::new("Finder", "Finder")
    }
}

impl Plugin for ReopenAppPlugin {
    fn search(&self, query: &str) -> Vec<Action> {
        match strip_prefix_ci(query.trim(), &self.prefix) {
            Some(rest) if rest.trim().is_empty() => vec![Action {
                label: format!("Open {}", self.app),
                desc: "Reopen app".into(),
                action: format!("app:reopen:{}", self.app),
                args: Some(self.process.clone()),
            }],
            _ => Vec::new(),
        }
    }

    fn name(&self) -> &str {
        "reopen_app"
    }

    fn description(&self) -> &str {
        "Bring an app to the front, restarting it if it is not running"
    }

    fn capabilities(&self) -> &[&str] {
        &["search"]
    }

    fn commands(&self) -> Vec<Action> {
        vec![Action {
            label: self.prefix.clone(),
            desc: "reopen app".into(),
            action: format!("fill:{}", self.prefix),
            args: None,
        }]
    }
}
