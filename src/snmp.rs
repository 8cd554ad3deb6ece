/// SNMP integer access shared by the rack-PDU backends
///
/// The Rittal and ATEN backends each control one outlet through a single
/// integer OID with community-string auth. `SnmpInteger` bundles the
/// address/OID/community parameters with a `SnmpTransport`, the injectable
/// wire-protocol seam: production code uses `UdpSnmp` (one SNMPv2c exchange
/// per call, no session kept open), tests use a scripted fake agent.
use crate::error::Error;
use std::time::Duration;

const DEFAULT_PORT: u16 = 161;
const EXCHANGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of one SNMP GET/SET exchange, reduced to what the backends need
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnmpValue {
    /// INTEGER varbind
    Integer(i64),
    /// Agent reported noSuchObject for the OID
    NoSuchObject,
    /// Any other varbind type, described for error reporting
    Other(String),
}

/// One-shot SNMP exchange against a remote agent
pub trait SnmpTransport {
    fn get(&self, target: &str, community: &str, oid: &[u32]) -> Result<SnmpValue, Error>;

    fn set(
        &self,
        target: &str,
        community: &str,
        oid: &[u32],
        value: i64,
    ) -> Result<SnmpValue, Error>;
}

/// SNMPv2c over UDP, one session per exchange
pub struct UdpSnmp {
    timeout: Duration,
}

impl Default for UdpSnmp {
    fn default() -> Self {
        UdpSnmp {
            timeout: EXCHANGE_TIMEOUT,
        }
    }
}

impl UdpSnmp {
    fn session(&self, target: &str, community: &str) -> Result<snmp::SyncSession, Error> {
        snmp::SyncSession::new(target, community.as_bytes(), Some(self.timeout), 0)
            .map_err(|e| Error::Snmp(e.to_string()))
    }

    fn decode(value: snmp::Value<'_>) -> SnmpValue {
        match value {
            snmp::Value::Integer(n) => SnmpValue::Integer(n),
            other => SnmpValue::Other(format!("{:?}", other)),
        }
    }

    fn first_varbind(pdu: snmp::SnmpPdu<'_>) -> Result<SnmpValue, Error> {
        let mut varbinds = pdu.varbinds;
        match varbinds.next() {
            Some((_oid, value)) => Ok(Self::decode(value)),
            None => Err(Error::Snmp("response carried no varbinds".to_string())),
        }
    }
}

impl SnmpTransport for UdpSnmp {
    fn get(&self, target: &str, community: &str, oid: &[u32]) -> Result<SnmpValue, Error> {
        let mut session = self.session(target, community)?;
        let pdu = session
            .get(oid)
            .map_err(|e| Error::Snmp(format!("{:?}", e)))?;
        Self::first_varbind(pdu)
    }

    fn set(
        &self,
        target: &str,
        community: &str,
        oid: &[u32],
        value: i64,
    ) -> Result<SnmpValue, Error> {
        let mut session = self.session(target, community)?;
        let pdu = session
            .set(&[(oid, snmp::Value::Integer(value))])
            .map_err(|e| Error::Snmp(format!("{:?}", e)))?;
        Self::first_varbind(pdu)
    }
}

/// One integer value on a remote SNMP agent
pub struct SnmpInteger {
    transport: Box<dyn SnmpTransport>,
    target: String,
    community: String,
    oid: Vec<u32>,
}

impl SnmpInteger {
    /// `address` may carry an explicit `:port`; port 161 is the default.
    pub fn new(
        transport: Box<dyn SnmpTransport>,
        address: &str,
        oid: Vec<u32>,
        community: &str,
    ) -> Self {
        let target = if address.contains(':') {
            address.to_string()
        } else {
            format!("{}:{}", address, DEFAULT_PORT)
        };
        SnmpInteger {
            transport,
            target,
            community: community.to_string(),
            oid,
        }
    }

    /// Read the integer value
    pub fn get(&self) -> Result<i64, Error> {
        decode_integer(self.transport.get(&self.target, &self.community, &self.oid)?)
    }

    /// Write the integer value; returns the readback reported in the SET
    /// response (not re-queried)
    pub fn set(&self, value: i64) -> Result<i64, Error> {
        decode_integer(
            self.transport
                .set(&self.target, &self.community, &self.oid, value)?,
        )
    }

    pub(crate) fn oid(&self) -> &[u32] {
        &self.oid
    }
}

fn decode_integer(value: SnmpValue) -> Result<i64, Error> {
    match value {
        SnmpValue::Integer(n) => Ok(n),
        SnmpValue::NoSuchObject => Err(Error::NoSuchOutlet),
        SnmpValue::Other(description) => Err(Error::UnexpectedSnmpResult(description)),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    pub(crate) struct AgentState {
        /// Raw value served by `get`
        pub reported: i64,
        /// When true the agent tracks writes, like a device that settles
        /// instantly; when false `reported` stays fixed
        pub apply_sets: bool,
        /// Overrides the `get` response when present
        pub get_override: Option<SnmpValue>,
        /// Overrides the `set` readback when present
        pub set_override: Option<SnmpValue>,
        /// Every (oid, value) written
        pub sets: Vec<(Vec<u32>, i64)>,
        pub gets: usize,
    }

    /// Scripted SNMP agent double shared by the rack-PDU backend tests
    #[derive(Clone, Default)]
    pub(crate) struct FakeSnmpAgent {
        pub state: Rc<RefCell<AgentState>>,
    }

    impl SnmpTransport for FakeSnmpAgent {
        fn get(&self, _target: &str, _community: &str, _oid: &[u32]) -> Result<SnmpValue, Error> {
            let mut state = self.state.borrow_mut();
            state.gets += 1;
            if let Some(value) = &state.get_override {
                return Ok(value.clone());
            }
            Ok(SnmpValue::Integer(state.reported))
        }

        fn set(
            &self,
            _target: &str,
            _community: &str,
            oid: &[u32],
            value: i64,
        ) -> Result<SnmpValue, Error> {
            let mut state = self.state.borrow_mut();
            state.sets.push((oid.to_vec(), value));
            if state.apply_sets {
                state.reported = value;
            }
            if let Some(readback) = &state.set_override {
                return Ok(readback.clone());
            }
            Ok(SnmpValue::Integer(value))
        }
    }
}
