/// Power outlet URI resolution
///
/// A URI names one outlet and the backend that controls it, e.g.
/// `aten:192.168.0.10:3` or `file:/tmp/outlet`. The grammar is a fixed,
/// ordered list of case-insensitive patterns anchored at the start of the
/// string; the first match wins. The order is load-bearing: patterns are
/// not disjoint, and a malformed `aten:` URI must fail in the `aten` arm
/// rather than fall through to another backend.
use crate::aten::AtenPe6108g;
use crate::aviosys::Aviosys8800Pro;
use crate::error::Error;
use crate::file::FileOutlet;
use crate::kasa::KasaOutlet;
use crate::noop::NoOutlet;
use crate::outlet::Outlet;
use crate::rittal::RittalSnmpPower;
use crate::shell::ShellOutlet;
use regex::Regex;
use std::sync::LazyLock;

/// Backend selection with the fields extracted from a URI or config section
///
/// Parsing touches no I/O; transports are opened by [`OutletSpec::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutletSpec {
    None,
    File {
        filename: String,
    },
    Aten {
        address: String,
        outlet: u32,
    },
    Rittal {
        address: String,
        outlet_no: u32,
        community: String,
    },
    Shell {
        model: String,
        hostname: String,
        outlet: String,
    },
    Aviosys {
        filename: Option<String>,
    },
    Kasa {
        hostname: String,
    },
}

struct UriPatterns {
    none: Regex,
    file: Regex,
    aten: Regex,
    rittal: Regex,
    shell: Regex,
    aviosys: Regex,
    kasa: Regex,
}

static PATTERNS: LazyLock<UriPatterns> = LazyLock::new(|| {
    let pattern = |re| Regex::new(re).expect("power outlet URI pattern is valid");
    UriPatterns {
        none: pattern(r"(?i)^none"),
        file: pattern(r"(?i)^file:(?P<filename>[^:]+)"),
        aten: pattern(r"(?i)^aten:(?P<address>[^: ]+):(?P<outlet>[^: ]+)"),
        rittal: pattern(r"(?i)^rittal:(?P<address>[^: ]+):(?P<outlet_no>[^: ]+):(?P<community>[^: ]+)"),
        shell: pattern(r"(?i)^(?P<model>pdu|ipp|testfallback):(?P<hostname>[^: ]+):(?P<outlet>[^: ]+)"),
        aviosys: pattern(r"(?i)^aviosys-8800-pro(:(?P<filename>[^:]+))?"),
        kasa: pattern(r"(?i)^kasa:(?P<hostname>[^:]+)"),
    }
});

/// Parse a power outlet URI into a backend selection.
///
/// Patterns are tried in declaration order; the first match is taken and
/// its named fields extracted. A string matching no pattern is a
/// configuration error naming the URI.
pub fn parse_uri(uri: &str) -> Result<OutletSpec, Error> {
    let patterns = &*PATTERNS;

    if patterns.none.is_match(uri) {
        return Ok(OutletSpec::None);
    }
    if let Some(caps) = patterns.file.captures(uri) {
        return Ok(OutletSpec::File {
            filename: caps["filename"].to_string(),
        });
    }
    if let Some(caps) = patterns.aten.captures(uri) {
        return Ok(OutletSpec::Aten {
            address: caps["address"].to_string(),
            outlet: parse_outlet_number(&caps["outlet"])?,
        });
    }
    if let Some(caps) = patterns.rittal.captures(uri) {
        return Ok(OutletSpec::Rittal {
            address: caps["address"].to_string(),
            outlet_no: parse_outlet_number(&caps["outlet_no"])?,
            community: caps["community"].to_string(),
        });
    }
    if let Some(caps) = patterns.shell.captures(uri) {
        return Ok(OutletSpec::Shell {
            model: caps["model"].to_string(),
            hostname: caps["hostname"].to_string(),
            outlet: caps["outlet"].to_string(),
        });
    }
    if let Some(caps) = patterns.aviosys.captures(uri) {
        return Ok(OutletSpec::Aviosys {
            filename: caps.name("filename").map(|m| m.as_str().to_string()),
        });
    }
    if let Some(caps) = patterns.kasa.captures(uri) {
        return Ok(OutletSpec::Kasa {
            hostname: caps["hostname"].to_string(),
        });
    }
    Err(Error::InvalidUri(uri.to_string()))
}

pub(crate) fn parse_outlet_number(outlet: &str) -> Result<u32, Error> {
    outlet
        .parse()
        .map_err(|_| Error::InvalidOutletNumber(outlet.to_string()))
}

impl OutletSpec {
    /// Construct the backend, opening its transport where one is needed
    pub fn build(self) -> Result<Box<dyn Outlet>, Error> {
        Ok(match self {
            OutletSpec::None => Box::new(NoOutlet),
            OutletSpec::File { filename } => Box::new(FileOutlet::new(filename)),
            OutletSpec::Aten { address, outlet } => Box::new(AtenPe6108g::new(&address, outlet)),
            OutletSpec::Rittal {
                address,
                outlet_no,
                community,
            } => Box::new(RittalSnmpPower::new(&address, outlet_no, &community)?),
            OutletSpec::Shell {
                model,
                hostname,
                outlet,
            } => Box::new(ShellOutlet::new(&model, &hostname, &outlet)?),
            OutletSpec::Aviosys { filename } => {
                Box::new(Aviosys8800Pro::open(filename.as_deref())?)
            }
            OutletSpec::Kasa { hostname } => Box::new(KasaOutlet::new(&hostname)),
        })
    }
}

/// Resolve a power outlet URI to a ready-to-use backend
pub fn uri_to_outlet(uri: &str) -> Result<Box<dyn Outlet>, Error> {
    parse_uri(uri)?.build()
}
