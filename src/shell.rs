/// Wrapper for the legacy shell-script power controller
///
/// The power controller used to be a bash script supporting three types of
/// hardware (`pdu`, `ipp`, `testfallback`). This backend keeps those models
/// working by shelling out to the old script until it can be removed
/// entirely. The script speaks the `on` / `off` / `status` verb contract and
/// prints `ON` or `OFF` for `status`.
use crate::error::Error;
use crate::outlet::Outlet;
use log::debug;
use std::path::PathBuf;
use std::process::Command;

const LEGACY_SCRIPT: &str = "pductl-power.sh";

/// Outlet backend delegating to the legacy bash controller
pub struct ShellOutlet {
    script: PathBuf,
    outlet_arg: String,
}

impl ShellOutlet {
    /// Create a backend for `model:hostname:outlet`, resolving the legacy
    /// script next to the current executable.
    pub fn new(model: &str, hostname: &str, outlet: &str) -> Result<Self, Error> {
        let exe = std::env::current_exe()?;
        let script = exe
            .parent()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "executable has no parent directory",
                )
            })?
            .join(LEGACY_SCRIPT);
        Ok(Self::with_script(script, model, hostname, outlet))
    }

    /// Create a backend invoking an explicit script path.
    pub fn with_script(
        script: impl Into<PathBuf>,
        model: &str,
        hostname: &str,
        outlet: &str,
    ) -> Self {
        ShellOutlet {
            script: script.into(),
            outlet_arg: format!("--power-outlet={}:{}:{}", model, hostname, outlet),
        }
    }

    fn command(&self, verb: &str) -> Command {
        let mut cmd = Command::new("bash");
        cmd.arg(&self.script).arg(&self.outlet_arg).arg(verb);
        cmd
    }

    fn command_failed(&self, status: std::process::ExitStatus) -> Error {
        Error::CommandFailed {
            command: format!("bash {}", self.script.display()),
            status: status.to_string(),
        }
    }
}

impl Outlet for ShellOutlet {
    fn set(&mut self, power: bool) -> Result<(), Error> {
        let verb = if power { "on" } else { "off" };
        debug!("running legacy controller: {} {}", self.outlet_arg, verb);
        let status = self.command(verb).status()?;
        if !status.success() {
            return Err(self.command_failed(status));
        }
        Ok(())
    }

    fn get(&mut self) -> Result<bool, Error> {
        let output = self.command("status").output()?;
        if !output.status.success() {
            return Err(self.command_failed(output.status));
        }
        let response = String::from_utf8_lossy(&output.stdout);
        match response.trim() {
            "ON" => Ok(true),
            "OFF" => Ok(false),
            other => Err(Error::UnrecognizedStatus(other.to_string())),
        }
    }
}
