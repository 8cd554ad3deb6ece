/// Rittal rack PDU backend
///
/// Tested with the DK 7955.310. SNMP OIDs may be different on other devices:
/// each outlet's switch lives 7 OID positions after the previous one,
/// starting at 52.
use crate::error::Error;
use crate::outlet::Outlet;
use crate::snmp::{SnmpInteger, SnmpTransport, UdpSnmp};

const OID_PREFIX: [u32; 14] = [1, 3, 6, 1, 4, 1, 2606, 7, 4, 2, 2, 1, 11, 1];
const FIRST_OUTLET_OFFSET: u32 = 52;
const OUTLET_STRIDE: u32 = 7;

/// Outlet backend for Rittal SNMP-controlled PDUs
pub struct RittalSnmpPower {
    snmp: SnmpInteger,
}

impl RittalSnmpPower {
    /// `outlet_no` is 1-based; the community string has no vendor default
    /// and must be supplied by the caller.
    pub fn new(address: &str, outlet_no: u32, community: &str) -> Result<Self, Error> {
        Self::with_transport(Box::new(UdpSnmp::default()), address, outlet_no, community)
    }

    pub(crate) fn with_transport(
        transport: Box<dyn SnmpTransport>,
        address: &str,
        outlet_no: u32,
        community: &str,
    ) -> Result<Self, Error> {
        if outlet_no < 1 {
            return Err(Error::InvalidOutletNumber(outlet_no.to_string()));
        }
        let index = outlet_no - 1;
        let mut oid = OID_PREFIX.to_vec();
        oid.push(FIRST_OUTLET_OFFSET + index * OUTLET_STRIDE);
        Ok(RittalSnmpPower {
            snmp: SnmpInteger::new(transport, address, oid, community),
        })
    }
}

impl Outlet for RittalSnmpPower {
    fn set(&mut self, power: bool) -> Result<(), Error> {
        let requested = i64::from(power);
        if self.snmp.set(requested)? != requested {
            return Err(Error::SetVerificationFailed);
        }
        Ok(())
    }

    fn get(&mut self) -> Result<bool, Error> {
        Ok(self.snmp.get()? != 0)
    }
}
