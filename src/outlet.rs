/// Outlet trait for PDU power control
///
/// This trait provides a common interface for controlling one power outlet
/// across different hardware types (rack PDUs, USB relays, smart plugs,
/// test doubles).
///
/// Implementations:
/// - NoOutlet: "no PDU configured" placeholder, always on
/// - FileOutlet: state persisted in a file, for testing
/// - ShellOutlet: wraps the legacy shell-script controller
/// - Aviosys8800Pro: USB relay speaking a serial line protocol
/// - RittalSnmpPower / AtenPe6108g: SNMP-controlled rack PDUs
/// - KasaOutlet: TP-Link Kasa smart plug via the `kasa` CLI
use crate::error::Error;

/// Outlet interface for PDU power control
///
/// Every backend addresses exactly one outlet and performs one external
/// round trip per call; no state is cached between calls. All backends must
/// implement this trait to provide a consistent interface regardless of the
/// underlying hardware.
pub trait Outlet {
    /// Request a power state change for the outlet
    ///
    /// # Parameters
    /// - `power`: `true` to energize the outlet, `false` to cut power
    ///
    /// # Returns
    /// - `Ok(())` if the power state change was accepted
    /// - `Err(Error)` if the operation failed
    fn set(&mut self, power: bool) -> Result<(), Error>;

    /// Get the current power state of the outlet
    ///
    /// # Returns
    /// - `Ok(true)` if the outlet is energized, `Ok(false)` if it is off
    /// - `Err(Error)` if the state could not be determined
    fn get(&mut self) -> Result<bool, Error>;
}
