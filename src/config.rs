/// Power outlet selection from configuration
///
/// The crate never parses a config file itself; callers hand it an
/// already-parsed two-level mapping of section name to key/value strings.
/// `device_under_test.power_outlet` names a `power_outlet <name>` section
/// describing the PDU. Example:
///
/// ```ini
/// [device_under_test]
/// power_outlet = myoutlet
///
/// [power_outlet myoutlet]
/// type = aten
/// address = 192.168.7.5
/// outlet = 1
/// ```
///
/// `type` is mandatory, other keys depend on the type of PDU. Common keys
/// are:
///
/// * `address`: IP address or hostname of the PDU
/// * `outlet`: Outlet number
///
/// In addition to the above, `rittal-snmp` PDUs require a `community` key.
///
/// For backwards compatibility with old config files the
/// `device_under_test.power_outlet` value may also be a URI as accepted by
/// [`crate::uri::parse_uri`]. This may be removed in the future once no
/// deployments are using it.
use crate::error::Error;
use crate::outlet::Outlet;
use crate::uri::{OutletSpec, parse_outlet_number, parse_uri};
use std::collections::BTreeMap;

/// Pre-parsed configuration: section name -> key -> value
pub type Config = BTreeMap<String, BTreeMap<String, String>>;

/// Resolve the configured power outlet to a backend selection.
///
/// No `device_under_test.power_outlet` key means no PDU is configured and
/// selects the no-op backend.
pub fn config_to_outlet_spec(config: &Config) -> Result<OutletSpec, Error> {
    let Some(name) = config
        .get("device_under_test")
        .and_then(|section| section.get("power_outlet"))
    else {
        return Ok(OutletSpec::None);
    };

    // For backwards compatibility with old config files the value may be a
    // URI. Only a URI-shaped configuration failure falls through to section
    // lookup; anything else (e.g. a bad outlet number) is a real error.
    match parse_uri(name) {
        Ok(spec) => return Ok(spec),
        Err(e) if e.is_configuration() => {}
        Err(e) => return Err(e),
    }

    let section_name = format!("power_outlet {}", name);
    let Some(section) = config.get(&section_name) else {
        return Err(Error::SectionNotFound {
            outlet: name.clone(),
            section: section_name,
        });
    };

    let require = |key: &str| {
        section.get(key).ok_or_else(|| Error::KeyNotFound {
            key: key.to_string(),
            section: section_name.clone(),
        })
    };

    let ty = require("type")?.to_lowercase();
    match ty.as_str() {
        "none" => Ok(OutletSpec::None),
        "file" => Ok(OutletSpec::File {
            filename: require("filename")?.clone(),
        }),
        "aten" => Ok(OutletSpec::Aten {
            address: require("address")?.clone(),
            outlet: parse_outlet_number(require("outlet")?)?,
        }),
        "rittal-snmp" => Ok(OutletSpec::Rittal {
            address: require("address")?.clone(),
            outlet_no: parse_outlet_number(require("outlet")?)?,
            community: require("community")?.clone(),
        }),
        "aviosys-8800-pro" => Ok(OutletSpec::Aviosys {
            filename: section.get("filename").cloned(),
        }),
        "kasa" => Ok(OutletSpec::Kasa {
            hostname: require("address")?.clone(),
        }),
        _ => Err(Error::UnknownOutletType {
            outlet: name.clone(),
            ty,
        }),
    }
}

/// Resolve the configured power outlet to a ready-to-use backend
pub fn config_to_outlet(config: &Config) -> Result<Box<dyn Outlet>, Error> {
    config_to_outlet_spec(config)?.build()
}
