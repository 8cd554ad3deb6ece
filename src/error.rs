/// Exit codes for the pductl CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Operation completed successfully
    Success = 0,
    /// Runtime error occurred
    Error = 1,
    /// Invalid command-line usage (reserved for clap, currently unused by pductl)
    Usage = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

/// Error types for pductl
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid power outlet URI: \"{0}\"")]
    InvalidUri(String),

    #[error(
        "Expected to find section [{section}] in config because \
         device_under_test.power_outlet == \"{outlet}\". No such section found"
    )]
    SectionNotFound { outlet: String, section: String },

    #[error("{outlet}: Unknown power outlet type: \"{ty}\"")]
    UnknownOutletType { outlet: String, ty: String },

    #[error("Failed to find key \"{key}\" in section [{section}]")]
    KeyNotFound { key: String, section: String },

    #[error("Invalid outlet number \"{0}\". Min outlet number is 1")]
    InvalidOutletNumber(String),

    #[error("Cannot disable power: no power outlet configured")]
    PowerOffUnsupported,

    #[error("Unexpected response from Aviosys 8800 Pro: \"{0}\"")]
    UnexpectedResponse(String),

    #[error("Serial port error: {0}")]
    Serial(String),

    #[error("SNMP error ({0})")]
    Snmp(String),

    #[error("No such outlet")]
    NoSuchOutlet,

    #[error("Unexpected SNMP result ({0})")]
    UnexpectedSnmpResult(String),

    #[error("Setting power failed with unknown error")]
    SetVerificationFailed,

    #[error("Timeout waiting for outlet to power {direction}")]
    PowerTimeout { direction: &'static str },

    #[error("Command `{command}` failed with {status}")]
    CommandFailed { command: String, status: String },

    #[error("Unrecognized power status \"{0}\"")]
    UnrecognizedStatus(String),

    #[error("Failed to parse state output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        // All runtime errors use ExitCode::Error (1)
        // Usage errors would be handled separately by clap
        ExitCode::Error
    }

    /// Whether this error indicates a setup problem (bad URI, bad config)
    /// rather than a runtime transport failure. The config resolver uses
    /// this to fall back from URI interpretation to section lookup.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidUri(_)
                | Error::SectionNotFound { .. }
                | Error::UnknownOutletType { .. }
                | Error::KeyNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::Success as i32, 0);
        assert_eq!(ExitCode::Error as i32, 1);
        assert_eq!(ExitCode::Usage as i32, 2);
    }

    #[test]
    fn exit_code_from_conversion() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Error), 1);
        assert_eq!(i32::from(ExitCode::Usage), 2);
    }

    fn sample_errors() -> Vec<Error> {
        vec![
            Error::InvalidUri("bogus".to_string()),
            Error::SectionNotFound {
                outlet: "myoutlet".to_string(),
                section: "power_outlet myoutlet".to_string(),
            },
            Error::UnknownOutletType {
                outlet: "myoutlet".to_string(),
                ty: "apc7xxx".to_string(),
            },
            Error::KeyNotFound {
                key: "address".to_string(),
                section: "power_outlet myoutlet".to_string(),
            },
            Error::InvalidOutletNumber("0".to_string()),
            Error::PowerOffUnsupported,
            Error::UnexpectedResponse("IO:9".to_string()),
            Error::Serial("device unplugged".to_string()),
            Error::Snmp("ReceiveError".to_string()),
            Error::NoSuchOutlet,
            Error::UnexpectedSnmpResult("OctetString".to_string()),
            Error::SetVerificationFailed,
            Error::PowerTimeout { direction: "ON" },
            Error::CommandFailed {
                command: "kasa".to_string(),
                status: "exit status: 1".to_string(),
            },
            Error::UnrecognizedStatus("MAYBE".to_string()),
            Error::Io(std::io::Error::other("test")),
        ]
    }

    #[test]
    fn all_errors_return_error_exit_code() {
        for error in sample_errors() {
            assert_eq!(
                error.exit_code(),
                ExitCode::Error,
                "Error variant {:?} should return ExitCode::Error",
                error
            );
        }
    }

    #[test]
    fn error_messages_are_non_empty() {
        for error in sample_errors() {
            let message = error.to_string();
            assert!(
                !message.is_empty(),
                "Error variant {:?} should have a non-empty message",
                error
            );
        }
    }

    #[test]
    fn configuration_errors_are_flagged() {
        assert!(Error::InvalidUri("x".to_string()).is_configuration());
        assert!(
            Error::SectionNotFound {
                outlet: "a".to_string(),
                section: "power_outlet a".to_string(),
            }
            .is_configuration()
        );
        assert!(
            Error::UnknownOutletType {
                outlet: "a".to_string(),
                ty: "b".to_string(),
            }
            .is_configuration()
        );
        assert!(
            Error::KeyNotFound {
                key: "address".to_string(),
                section: "power_outlet a".to_string(),
            }
            .is_configuration()
        );
    }

    #[test]
    fn runtime_errors_are_not_configuration() {
        assert!(!Error::InvalidOutletNumber("x".to_string()).is_configuration());
        assert!(!Error::PowerOffUnsupported.is_configuration());
        assert!(!Error::NoSuchOutlet.is_configuration());
        assert!(!Error::Io(std::io::Error::other("test")).is_configuration());
    }

    #[test]
    fn section_not_found_names_outlet_and_section() {
        let error = Error::SectionNotFound {
            outlet: "rack3".to_string(),
            section: "power_outlet rack3".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("rack3"));
        assert!(message.contains("[power_outlet rack3]"));
    }

    #[test]
    fn key_not_found_names_key_and_section() {
        let error = Error::KeyNotFound {
            key: "community".to_string(),
            section: "power_outlet rack3".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("\"community\""));
        assert!(message.contains("[power_outlet rack3]"));
    }
}
