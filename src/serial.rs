/// Line-oriented serial transport
///
/// This module provides the `LineTransport` trait used by serial-protocol
/// backends, and `SerialLine`, the real implementation over a serial port.
/// The trait is a constructor parameter of the backends that need it, so
/// tests substitute a scripted fake device instead of opening hardware.
use crate::error::Error;
use std::io::{Read, Write};
use std::time::Duration;

const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Blocking line-oriented byte transport
///
/// `write_line` sends one command line (the terminator is appended);
/// `read_line` blocks until a full line, terminator included, is available.
pub trait LineTransport {
    fn write_line(&mut self, line: &str) -> Result<(), Error>;
    fn read_line(&mut self) -> Result<String, Error>;
}

/// Real serial-port transport
pub struct SerialLine {
    port: Box<dyn serialport::SerialPort>,
}

impl SerialLine {
    /// Open the serial device at `path` with the given baud rate.
    pub fn open(path: &str, baud_rate: u32) -> Result<Self, Error> {
        let port = serialport::new(path, baud_rate)
            .timeout(READ_TIMEOUT)
            .open()
            .map_err(|e| Error::Serial(e.to_string()))?;
        Ok(SerialLine { port })
    }
}

impl LineTransport for SerialLine {
    fn write_line(&mut self, line: &str) -> Result<(), Error> {
        self.port
            .write_all(line.as_bytes())
            .and_then(|()| self.port.write_all(b"\n"))
            .and_then(|()| self.port.flush())
            .map_err(|e| Error::Serial(e.to_string()))
    }

    fn read_line(&mut self) -> Result<String, Error> {
        let mut line = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            self.port
                .read_exact(&mut byte)
                .map_err(|e| Error::Serial(e.to_string()))?;
            line.push(byte[0]);
            if byte[0] == b'\n' {
                return Ok(String::from_utf8_lossy(&line).into_owned());
            }
        }
    }
}
