use crate::report::{print_reports, AddressReport, Format};
use anyhow::Result;
use mac_proto::{InvalidAddress, MacAddress};
use tracing::{debug, warn};

pub fn parse(addresses: &[String], format: Format) -> Result<bool> {
    let reports: Vec<AddressReport> = addresses
        .iter()
        .map(|text| log_report(AddressReport::new(text, MacAddress::from_text(text))))
        .collect();
    finish(&reports, format)
}

pub fn from_int(integers: &[String], format: Format) -> Result<bool> {
    let reports: Vec<AddressReport> = integers
        .iter()
        .map(|text| {
            let result = parse_integer(text).and_then(MacAddress::from_integer);
            log_report(AddressReport::new(text, result))
        })
        .collect();
    finish(&reports, format)
}

fn finish(reports: &[AddressReport], format: Format) -> Result<bool> {
    print_reports(reports, format)?;
    Ok(reports.iter().all(AddressReport::is_valid))
}

fn log_report(report: AddressReport) -> AddressReport {
    match &report {
        AddressReport::Valid { input, address, .. } => debug!("{} -> {}", input, address),
        AddressReport::Invalid { error, kind, .. } => warn!("Rejected {} input: {}", kind, error),
    }
    report
}

/// Decimal or 0x-prefixed hexadecimal, optionally negative
///
/// Non-numeric text is an unsupported input; numeric text too wide for
/// `i128` is still an integer and is reported as one.
fn parse_integer(text: &str) -> Result<i128, InvalidAddress> {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };

    let numeric = !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    if !numeric {
        return Err(InvalidAddress::Unsupported(format!(
            "`{}` is not an integer",
            text
        )));
    }

    i128::from_str_radix(&format!("{}{}", sign, digits), radix)
        .map_err(|_| InvalidAddress::WideInteger(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_decimal() {
        assert_eq!(parse_integer("0"), Ok(0));
        assert_eq!(parse_integer("73588229205"), Ok(0x0011_2233_4455));
        assert_eq!(parse_integer("-1"), Ok(-1));
        assert_eq!(
            parse_integer("-170141183460469231731687303715884105728"),
            Ok(i128::MIN)
        );
    }

    #[test]
    fn test_parse_integer_hex() {
        assert_eq!(parse_integer("0xffffffffffff"), Ok(0xffff_ffff_ffff));
        assert_eq!(parse_integer("0XAB"), Ok(0xab));
        assert_eq!(parse_integer("-0x10"), Ok(-16));
    }

    #[test]
    fn test_parse_integer_rejects_garbage() {
        for text in ["", "0x", "-", "--1", "+1", "0x-1", "12ab", "00:11:22:33:44:55"] {
            assert_eq!(
                parse_integer(text).map_err(|e| e.kind()),
                Err("unsupported"),
                "{:?} should not parse",
                text
            );
        }
    }

    #[test]
    fn test_parse_integer_too_wide_is_integer() {
        for text in [
            "340282366920938463463374607431768211456",
            "-340282366920938463463374607431768211456",
            "0x1000000000000000000000000000000000",
        ] {
            assert_eq!(
                parse_integer(text),
                Err(InvalidAddress::WideInteger(text.to_string()))
            );
        }
    }

    #[test]
    fn test_from_int_too_wide_reports_integer_kind() {
        let text = "340282366920938463463374607431768211456";
        let result = parse_integer(text).and_then(MacAddress::from_integer);
        match AddressReport::new(text, result) {
            AddressReport::Invalid { kind, error, .. } => {
                assert_eq!(kind, "integer");
                assert_eq!(error, format!("Invalid MAC address: {}", text));
            }
            other => panic!("expected an invalid report, got {:?}", other),
        }
        assert!(!from_int(&[text.to_string()], Format::Json).unwrap());
    }

    #[test]
    fn test_parse_reports_validity() {
        let ok = parse(&["00:11:22:33:44:55".to_string()], Format::Json).unwrap();
        assert!(ok);

        let ok = parse(
            &["00:11:22:33:44:55".to_string(), "001122334455".to_string()],
            Format::Text,
        )
        .unwrap();
        assert!(!ok);
    }

    #[test]
    fn test_from_int_reports_validity() {
        let bounds = ["0".to_string(), "0xffffffffffff".to_string()];
        assert!(from_int(&bounds, Format::Text).unwrap());
        assert!(!from_int(&["281474976710656".to_string()], Format::Text).unwrap());
        assert!(!from_int(&["-1".to_string()], Format::Json).unwrap());
        assert!(!from_int(&["eleven".to_string()], Format::Json).unwrap());
    }
}
