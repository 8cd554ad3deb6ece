/// ATEN PE6108G rack PDU backend
///
/// The device reports outlet state as 1 (off), 2 (on) or 3 (moving between
/// states), and addresses outlets 1-8 and 9+ through two differently-offset
/// OID banks. The community string is the vendor's fixed default.
use crate::error::Error;
use crate::outlet::Outlet;
use crate::snmp::{SnmpInteger, SnmpTransport, UdpSnmp};
use log::debug;
use std::thread;
use std::time::Duration;

const OID_PREFIX: [u32; 13] = [1, 3, 6, 1, 4, 1, 21317, 1, 3, 2, 2, 2, 2];
const COMMUNITY: &str = "administrator";

const STATE_OFF: i64 = 1;
const STATE_ON: i64 = 2;
const STATE_IN_TRANSITION: i64 = 3;

/// Outlets take between 4-8 seconds to power on, so confirm each switch
/// with up to 12 one-second-spaced reads.
const POLL_ATTEMPTS: u32 = 12;
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Outlet backend for the ATEN PE6108G PDU
pub struct AtenPe6108g {
    snmp: SnmpInteger,
    poll_interval: Duration,
}

impl AtenPe6108g {
    /// `outlet` is 1-based
    pub fn new(address: &str, outlet: u32) -> Self {
        Self::with_transport(Box::new(UdpSnmp::default()), address, outlet)
    }

    pub(crate) fn with_transport(
        transport: Box<dyn SnmpTransport>,
        address: &str,
        outlet: u32,
    ) -> Self {
        // Outlets 1-8 and 9+ live in two differently-offset banks
        let outlet_offset = if outlet <= 8 { 1 } else { 2 };
        let mut oid = OID_PREFIX.to_vec();
        oid.push(outlet + outlet_offset);
        oid.push(0);
        AtenPe6108g {
            snmp: SnmpInteger::new(transport, address, oid, COMMUNITY),
            poll_interval: POLL_INTERVAL,
        }
    }
}

impl Outlet for AtenPe6108g {
    fn set(&mut self, power: bool) -> Result<(), Error> {
        let new_state = self.snmp.set(if power { STATE_ON } else { STATE_OFF })?;

        for attempt in 1..=POLL_ATTEMPTS {
            thread::sleep(self.poll_interval);
            if self.snmp.get()? == new_state {
                return Ok(());
            }
            debug!("outlet has not settled after {} polls", attempt);
        }
        Err(Error::PowerTimeout {
            direction: if power { "ON" } else { "OFF" },
        })
    }

    fn get(&mut self) -> Result<bool, Error> {
        match self.snmp.get()? {
            STATE_ON => Ok(true),
            // Only a terminal "on" state is reported positively
            STATE_OFF | STATE_IN_TRANSITION => Ok(false),
            other => Err(Error::UnexpectedSnmpResult(other.to_string())),
        }
    }
}
