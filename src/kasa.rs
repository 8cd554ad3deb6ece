/// TP-Link Kasa smart plug backend
///
/// Delegates to the `kasa` CLI from python-kasa. State queries request the
/// full JSON sysinfo dump; the relay state is one numeric field buried in
/// it.
use crate::error::Error;
use crate::outlet::Outlet;
use std::process::Command;

/// Outlet backend for Kasa smart plugs
pub struct KasaOutlet {
    hostname: String,
}

impl KasaOutlet {
    pub fn new(hostname: &str) -> Self {
        KasaOutlet {
            hostname: hostname.to_string(),
        }
    }

    fn command(&self, tail: &[&str]) -> Command {
        let mut cmd = Command::new("kasa");
        cmd.args(["--host", &self.hostname, "--type", "plug"]);
        cmd.args(tail);
        cmd
    }

    fn command_failed(&self, status: std::process::ExitStatus) -> Error {
        Error::CommandFailed {
            command: format!("kasa --host {}", self.hostname),
            status: status.to_string(),
        }
    }
}

impl Outlet for KasaOutlet {
    fn set(&mut self, power: bool) -> Result<(), Error> {
        let status = self
            .command(&[if power { "on" } else { "off" }])
            .status()?;
        if !status.success() {
            return Err(self.command_failed(status));
        }
        Ok(())
    }

    fn get(&mut self) -> Result<bool, Error> {
        let output = self.command(&["--json", "state"]).output()?;
        if !output.status.success() {
            return Err(self.command_failed(output.status));
        }
        let state: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        kasa_output_to_state(&state)
    }
}

/// Extract the "relay is energized" flag from the CLI's JSON state dump.
///
/// The payload carries dozens of sibling sections (schedule, cloud, energy
/// metering); only `system.get_sysinfo.relay_state` matters here, and
/// unknown keys are ignored.
pub(crate) fn kasa_output_to_state(state: &serde_json::Value) -> Result<bool, Error> {
    state
        .pointer("/system/get_sysinfo/relay_state")
        .and_then(serde_json::Value::as_i64)
        .map(|relay_state| relay_state != 0)
        .ok_or_else(|| {
            Error::UnrecognizedStatus("missing system.get_sysinfo.relay_state".to_string())
        })
}
