use crate::actions::Action;
use crate::app_restart::{reopen_app, CommandLauncher, SysinfoProbe};
use crate::settings::Settings;

#[derive(Debug, PartialEq, Eq)]
enum ActionKind<'a> {
    ClipboardText(&'a str),
    AppReopen { app: &'a str, process: &'a str },
    Fill(&'a str),
    Open(&'a str),
}

fn parse_action_kind(action: &Action) -> ActionKind<'_> {
    let s = action.action.as_str();
    if let Some(text) = s.strip_prefix("clipboard:") {
        return ActionKind::ClipboardText(text);
    }
    if let Some(app) = s.strip_prefix("app:reopen:") {
        let process = action
            .args
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(app);
        return ActionKind::AppReopen { app, process };
    }
    if let Some(query) = s.strip_prefix("fill:") {
        return ActionKind::Fill(query);
    }
    ActionKind::Open(s)
}

/// Query text a `fill:` command action puts into the search box.
pub fn fill_query(action: &Action) -> Option<&str> {
    match parse_action_kind(action) {
        ActionKind::Fill(query) => Some(query),
        _ => None,
    }
}

pub fn launch_action(action: &Action, settings: &Settings) -> anyhow::Result<()> {
    use crate::actions::*;
    match parse_action_kind(action) {
        ActionKind::ClipboardText(text) => clipboard::set_text(text),
        ActionKind::AppReopen { app, process } => {
            let launcher = CommandLauncher::new(&settings.open_command);
            reopen_app(&SysinfoProbe, &launcher, process, app).map(|_| ())
        }
        ActionKind::Fill(query) => {
            tracing::debug!(query, "fill action has nothing to launch");
            Ok(())
        }
        ActionKind::Open(target) => exec::open_target(target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(s: &str, args: Option<&str>) -> Action {
        Action {
            label: String::new(),
            desc: String::new(),
            action: s.into(),
            args: args.map(str::to_string),
        }
    }

    #[test]
    fn clipboard_prefix_keeps_rest_verbatim() {
        let a = action("clipboard:British Airways: UK", None);
        assert_eq!(
            parse_action_kind(&a),
            ActionKind::ClipboardText("British Airways: UK")
        );
    }

    #[test]
    fn reopen_uses_args_as_process_name() {
        let a = action("app:reopen:Finder", Some("finder"));
        assert_eq!(
            parse_action_kind(&a),
            ActionKind::AppReopen {
                app: "Finder",
                process: "finder"
            }
        );
        let a = action("app:reopen:Finder", None);
        assert_eq!(
            parse_action_kind(&a),
            ActionKind::AppReopen {
                app: "Finder",
                process: "Finder"
            }
        );
    }

    #[test]
    fn fill_actions_expose_their_query() {
        let a = action("fill:air ", None);
        assert_eq!(fill_query(&a), Some("air "));
        assert_eq!(fill_query(&action("clipboard:x", None)), None);
    }

    #[test]
    fn urls_fall_through_to_open() {
        let a = action("https://example.com/coc", None);
        assert_eq!(parse_action_kind(&a), ActionKind::Open("https://example.com/coc"));
    }
}
