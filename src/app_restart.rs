use std::process::Command;
use sysinfo::System;

/// Default command used to bring an application to the front.
pub const DEFAULT_OPEN_CMD: &str = "open -a";

pub trait ProcessProbe {
    fn is_running(&self, process: &str) -> bool;
}

pub trait AppLauncher {
    fn launch(&self, app: &str) -> anyhow::Result<()>;
}

/// Looks the process up in the system process table.
pub struct SysinfoProbe;

impl ProcessProbe for SysinfoProbe {
    fn is_running(&self, process: &str) -> bool {
        let system = System::new_all();
        system
            .processes()
            .values()
            .any(|p| p.name().to_string_lossy().eq_ignore_ascii_case(process))
    }
}

/// Split the command spec string into executable and arguments.
fn parse_command_spec(spec: &str) -> (String, Vec<String>) {
    let parts = shlex::split(spec)
        .unwrap_or_else(|| spec.split_whitespace().map(|s| s.to_string()).collect());
    let mut iter = parts.into_iter();
    let cmd = iter.next().unwrap_or_else(|| "open".to_string());
    (cmd, iter.collect())
}

/// Runs `<cmd> <args..> <app>`, e.g. `open -a Finder`.
pub struct CommandLauncher {
    cmd: String,
    args: Vec<String>,
}

impl CommandLauncher {
    pub fn new(spec: &str) -> Self {
        let (cmd, args) = parse_command_spec(spec);
        Self { cmd, args }
    }

    pub fn command(&self, app: &str) -> Command {
        let mut command = Command::new(&self.cmd);
        command.args(&self.args).arg(app);
        command
    }
}

impl Default for CommandLauncher {
    fn default() -> Self {
        Self::new(DEFAULT_OPEN_CMD)
    }
}

impl AppLauncher for CommandLauncher {
    fn launch(&self, app: &str) -> anyhow::Result<()> {
        self.command(app).spawn().map(|_| ()).map_err(|e| e.into())
    }
}

/// Bring `app` to the front, starting it when `process` is not running.
///
/// The launch happens exactly once either way. Returns whether the process
/// was already running.
pub fn reopen_app(
    probe: &dyn ProcessProbe,
    launcher: &dyn AppLauncher,
    process: &str,
    app: &str,
) -> anyhow::Result<bool> {
    let running = probe.is_running(process);
    if running {
        tracing::info!(process, app, "process running, activating");
    } else {
        tracing::info!(process, app, "process not running, starting");
    }
    launcher.launch(app)?;
    Ok(running)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_spec_keeps_quoted_args() {
        let (cmd, args) = parse_command_spec("open -a \"Path Finder\"");
        assert_eq!(cmd, "open");
        assert_eq!(args, vec!["-a".to_string(), "Path Finder".to_string()]);
    }

    #[test]
    fn launcher_appends_app_name() {
        let launcher = CommandLauncher::default();
        let command = launcher.command("Finder");
        assert_eq!(command.get_program(), "open");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec!["-a", "Finder"]);
    }
}
