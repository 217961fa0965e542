use anyhow::Result;
use clap::ValueEnum;
use mac_proto::{InvalidAddress, MacAddress};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Outcome of building one address from user input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AddressReport {
    Valid {
        input: String,
        address: MacAddress,
        value: u64,
        octets: [u8; 6],
        multicast: bool,
        local: bool,
    },
    Invalid {
        input: String,
        kind: &'static str,
        error: String,
    },
}

impl AddressReport {
    pub fn new(input: &str, result: Result<MacAddress, InvalidAddress>) -> Self {
        match result {
            Ok(address) => Self::Valid {
                input: input.to_string(),
                value: address.value(),
                octets: address.octets(),
                multicast: address.is_multicast(),
                local: address.is_local(),
                address,
            },
            Err(e) => Self::Invalid {
                input: input.to_string(),
                kind: e.kind(),
                error: e.to_string(),
            },
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

pub fn print_reports(reports: &[AddressReport], format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(reports)?),
        Format::Text => {
            println!(
                "{:<20} {:<18} {:<16} {:<10} {:<6}",
                "Input", "Address", "Value", "Cast", "Admin"
            );
            println!("{}", "-".repeat(74));

            for report in reports {
                match report {
                    AddressReport::Valid {
                        input,
                        address,
                        value,
                        multicast,
                        local,
                        ..
                    } => println!(
                        "{:<20} {:<18} {:<16} {:<10} {:<6}",
                        input,
                        address,
                        format!("{:#014x}", value),
                        if *multicast { "multicast" } else { "unicast" },
                        if *local { "local" } else { "global" },
                    ),
                    AddressReport::Invalid { input, error, .. } => {
                        println!("{:<20} {}", input, error)
                    }
                }
            }
        }
    }

    Ok(())
}
