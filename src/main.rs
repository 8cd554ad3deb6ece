mod cli;
mod output;

use pductl::error::{self, Error};
use pductl::outlet::Outlet;
use pductl::uri;
use std::process::ExitCode as StdExitCode;

fn main() -> StdExitCode {
    env_logger::init();

    // Parse CLI arguments - clap handles usage errors and exits with code 2
    let invocation = cli::parse();

    // Run the main logic
    match run(invocation) {
        Ok(()) => error::ExitCode::Success.into(),
        Err(e) => {
            // All errors go to stderr
            eprintln!("Error: {}", e);
            e.exit_code().into()
        }
    }
}

/// Execute a command against the resolved outlet backend
fn execute_command(outlet: &mut dyn Outlet, command: cli::Command) -> Result<(), Error> {
    match command {
        cli::Command::On => outlet.set(true),
        cli::Command::Off => outlet.set(false),
        cli::Command::Status { json } => {
            let power = outlet.get()?;
            print!("{}", output::format_status(power, json));
            Ok(())
        }
    }
}

/// Main application logic - resolves the outlet URI and dispatches
fn run(invocation: cli::Invocation) -> Result<(), Error> {
    let mut outlet = uri::uri_to_outlet(&invocation.power_outlet)?;
    execute_command(outlet.as_mut(), invocation.command)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory outlet recording the last requested state
    struct RecordingOutlet {
        power: bool,
    }

    impl Outlet for RecordingOutlet {
        fn set(&mut self, power: bool) -> Result<(), Error> {
            self.power = power;
            Ok(())
        }

        fn get(&mut self) -> Result<bool, Error> {
            Ok(self.power)
        }
    }

    #[test]
    fn on_command_sets_power() {
        let mut outlet = RecordingOutlet { power: false };
        execute_command(&mut outlet, cli::Command::On).unwrap();
        assert!(outlet.power);
    }

    #[test]
    fn off_command_clears_power() {
        let mut outlet = RecordingOutlet { power: true };
        execute_command(&mut outlet, cli::Command::Off).unwrap();
        assert!(!outlet.power);
    }

    #[test]
    fn status_command_only_reads() {
        let mut outlet = RecordingOutlet { power: true };
        execute_command(&mut outlet, cli::Command::Status { json: false }).unwrap();
        assert!(outlet.power);
    }

    #[test]
    fn error_converts_to_exit_code_1() {
        let error = Error::InvalidUri("bogus".to_string());
        let exit_code = error.exit_code();
        assert_eq!(exit_code, error::ExitCode::Error);
        assert_eq!(exit_code as i32, 1);
    }

    #[test]
    fn run_rejects_invalid_uri() {
        let invocation = cli::Invocation {
            power_outlet: "apc:10.0.0.1:4".to_string(),
            command: cli::Command::On,
        };
        let result = run(invocation);
        assert!(matches!(result, Err(Error::InvalidUri(_))));
    }
}
