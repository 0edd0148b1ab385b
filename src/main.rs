use anyhow::Context;
use clap::{Parser, Subcommand};
use launcher_extensions::actions::Action;
use launcher_extensions::airline_api::HttpAirlineSource;
use launcher_extensions::airline_search::{SearchController, SearchState};
use launcher_extensions::app_restart::{reopen_app, CommandLauncher, SysinfoProbe};
use launcher_extensions::launcher::launch_action;
use launcher_extensions::notify::{Notifier, Toast, ToastNotifier};
use launcher_extensions::plugins::airlines::airline_actions;
use launcher_extensions::settings::Settings;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "launcher_extensions", version, about = "Airline lookup and app reopen commands")]
struct Cli {
    /// Settings file. Defaults to the user config directory.
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search airlines by IATA code. Reads one query per line unless --query is given.
    Airlines {
        #[arg(long)]
        query: Option<String>,
        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Bring an app to the front, starting it if it is not running.
    Reopen {
        #[arg(long)]
        app: Option<String>,
        #[arg(long)]
        process: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings_path = cli.settings.clone().unwrap_or_else(Settings::default_path);
    let settings = Settings::load(&settings_path)
        .with_context(|| format!("loading settings from {}", settings_path.display()))?;
    launcher_extensions::logging::init(cli.debug || settings.debug_logging, settings.log_file.clone());

    match cli.command {
        Command::Airlines { query, json } => run_airlines(&settings, query, json),
        Command::Reopen { app, process } => {
            let app = app.unwrap_or_else(|| settings.reopen_app.clone());
            let process = process.unwrap_or_else(|| settings.reopen_process().to_string());
            let launcher = CommandLauncher::new(&settings.open_command);
            reopen_app(&SysinfoProbe, &launcher, &process, &app)?;
            Ok(())
        }
    }
}

fn run_airlines(settings: &Settings, query: Option<String>, json: bool) -> anyhow::Result<()> {
    let source = HttpAirlineSource::new(settings.api_url.clone(), settings.request_timeout())?;
    let notifier: Arc<dyn Notifier> = Arc::new(ToastNotifier::new(
        settings.enable_toasts,
        settings.toast_log.clone(),
    ));
    let controller = SearchController::new(Arc::new(source), notifier.clone(), settings.max_results);

    if let Some(q) = query {
        controller.search(q.trim());
        controller.wait_idle();
        let state = controller.state();
        if json {
            println!("{}", serde_json::to_string_pretty(&state.results)?);
        } else {
            print_state(&state);
        }
        return Ok(());
    }

    let updates = controller.subscribe();
    std::thread::spawn(move || {
        for state in updates {
            print_state(&state);
        }
    });

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line == ":quit" {
            break;
        }
        if let Some(rest) = line.strip_prefix(":copy ") {
            run_result_action(settings, notifier.as_ref(), &controller.state(), rest, false);
            continue;
        }
        if let Some(rest) = line.strip_prefix(":open ") {
            run_result_action(settings, notifier.as_ref(), &controller.state(), rest, true);
            continue;
        }
        controller.search(line);
    }
    Ok(())
}

fn print_state(state: &SearchState) {
    if state.is_loading {
        println!("Searching...");
        return;
    }
    println!("Airlines ({})", state.results.len());
    for (i, airline) in state.results.iter().enumerate() {
        let coc = if airline.conditions_of_carriage_url.is_some() { " [conditions]" } else { "" };
        println!("{:>3}. {:<3} {}{coc}", i + 1, airline.iata_code, airline.name);
    }
}

/// Run the copy or open action of result `index` (1-based).
fn run_result_action(
    settings: &Settings,
    notifier: &dyn Notifier,
    state: &SearchState,
    index: &str,
    open: bool,
) {
    let Some(airline) = index
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| state.results.get(i))
    else {
        notifier.notify(Toast::failure("No such result", index.trim()));
        return;
    };
    let actions = airline_actions(std::slice::from_ref(airline));
    let chosen: Option<&Action> = if open { actions.get(1) } else { actions.first() };
    let Some(action) = chosen else {
        notifier.notify(Toast::failure("No conditions of carriage", airline.name.as_str()));
        return;
    };
    match launch_action(action, settings) {
        Ok(()) if !open => notifier.notify(Toast::success("Copied to clipboard", airline.name.as_str())),
        Ok(()) => {}
        Err(err) => {
            tracing::error!(error = %err, "action failed");
            notifier.notify(Toast::failure("Oops! Something went wrong.", err.to_string()));
        }
    }
}
