/// Placeholder backend for when no PDU is configured
///
/// Test execution proceeds without the ability to power-cycle the device
/// under test: power-on requests succeed silently, power-off requests fail.
use crate::error::Error;
use crate::outlet::Outlet;

/// Outlet backend representing "always on, uncontrollable"
pub struct NoOutlet;

impl Outlet for NoOutlet {
    fn set(&mut self, power: bool) -> Result<(), Error> {
        if !power {
            return Err(Error::PowerOffUnsupported);
        }
        Ok(())
    }

    fn get(&mut self) -> Result<bool, Error> {
        // If we can't turn it off, it must be on
        Ok(true)
    }
}
