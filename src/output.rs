/// Format status output for one outlet
///
/// The plain text form prints the same `ON` / `OFF` words the legacy shell
/// controller printed, so scripts built against it keep working.
pub fn format_status(power: bool, json: bool) -> String {
    if json {
        format!(r#"{{"power":"{}"}}"#, if power { "on" } else { "off" })
    } else {
        format!("{}\n", if power { "ON" } else { "OFF" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_status_on_text() {
        assert_eq!(format_status(true, false), "ON\n");
    }

    #[test]
    fn format_status_off_text() {
        assert_eq!(format_status(false, false), "OFF\n");
    }

    #[test]
    fn format_status_on_json() {
        assert_eq!(format_status(true, true), r#"{"power":"on"}"#);
    }

    #[test]
    fn format_status_off_json() {
        assert_eq!(format_status(false, true), r#"{"power":"off"}"#);
    }

    #[test]
    fn json_output_is_valid_json() {
        let json: serde_json::Value = serde_json::from_str(&format_status(true, true)).unwrap();
        assert_eq!(json["power"], "on");
    }
}
