/// Aviosys USB Net Power 8800 Pro backend
///
/// Serial line protocol at 19200 baud, documented in the vendor manual
/// ("USB Net Power 8800 Pro Manual"). Commands are terminated lines; the
/// device echoes every command back, prefixed with a `z>` prompt on
/// subsequent lines, and accepts trailing junk after a recognized command.
use crate::error::Error;
use crate::outlet::Outlet;
use crate::serial::{LineTransport, SerialLine};

/// Serial device used when the URI or config gives no path
pub const DEFAULT_DEVICE: &str = "/dev/ttyACM0";

const BAUD_RATE: u32 = 19200;

/// Outlet backend for the Aviosys 8800 Pro USB relay
pub struct Aviosys8800Pro {
    device: Box<dyn LineTransport>,
}

impl Aviosys8800Pro {
    /// Wrap an already-open line transport (real serial port or test fake)
    pub fn new(device: Box<dyn LineTransport>) -> Self {
        Aviosys8800Pro { device }
    }

    /// Open the serial device, defaulting to [`DEFAULT_DEVICE`]
    pub fn open(path: Option<&str>) -> Result<Self, Error> {
        let path = path.unwrap_or(DEFAULT_DEVICE);
        let port = SerialLine::open(path, BAUD_RATE)?;
        Ok(Self::new(Box::new(port)))
    }
}

impl Outlet for Aviosys8800Pro {
    fn set(&mut self, power: bool) -> Result<(), Error> {
        self.device
            .write_line(&format!("p1={}", u8::from(power)))?;
        // Discard the echoed command
        self.device.read_line()?;
        Ok(())
    }

    fn get(&mut self) -> Result<bool, Error> {
        self.device.write_line("readio")?;
        // First line echoes the command; the answer is on the second line
        self.device.read_line()?;
        let response = self.device.read_line()?;
        match response.as_str() {
            "IO:5\r\n" => Ok(true),
            "IO:0\r\n" => Ok(false),
            other => Err(Error::UnexpectedResponse(other.trim().to_string())),
        }
    }
}
