use crate::actions::Action;
use crate::airline_api::Airline;
use crate::airline_search::SearchController;
use crate::common::strip_prefix_ci;
use crate::plugin::Plugin;
use std::sync::Mutex;

/// Looks up airlines by IATA code (prefix: `air`).
///
/// Searches run in the background; each call returns the actions for the
/// most recent results the controller has committed.
pub struct AirlinesPlugin {
    controller: SearchController,
    last_query: Mutex<Option<String>>,
}

impl AirlinesPlugin {
    pub fn new(controller: SearchController) -> Self {
        Self {
            controller,
            last_query: Mutex::new(None),
        }
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }
}

/// Copy-name action per airline, plus an open action when the airline
/// publishes its conditions of carriage.
pub fn airline_actions(airlines: &[Airline]) -> Vec<Action> {
    airlines
        .iter()
        .flat_map(|airline| {
            let mut actions = vec![Action {
                label: airline.iata_code.clone(),
                desc: airline.name.clone(),
                action: format!("clipboard:{}", airline.name),
                args: None,
            }];
            if let Some(url) = &airline.conditions_of_carriage_url {
                actions.push(Action {
                    label: format!("Open conditions of carriage for {}", airline.iata_code),
                    desc: airline.name.clone(),
                    action: url.clone(),
                    args: None,
                });
            }
            actions
        })
        .collect()
}

impl Plugin for AirlinesPlugin {
    fn search(&self, query: &str) -> Vec<Action> {
        let Some(rest) = strip_prefix_ci(query, "air") else {
            return Vec::new();
        };
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return Vec::new();
        }
        let q = rest.trim();
        if let Ok(mut last) = self.last_query.lock() {
            // Sending the same text again after a failure is a retry.
            if last.as_deref() != Some(q) || self.controller.last_search_failed() {
                self.controller.search(q);
                *last = Some(q.to_string());
            }
        }
        airline_actions(&self.controller.state().results)
    }

    fn name(&self) -> &str {
        "airlines"
    }

    fn description(&self) -> &str {
        "Look up airlines by IATA code (prefix: `air`)"
    }

    fn capabilities(&self) -> &[&str] {
        &["search"]
    }

    fn commands(&self) -> Vec<Action> {
        vec![Action { label: "air".into(), desc: "airlines".into(), action: "fill:air ".into(), args: None }]
    }
}
