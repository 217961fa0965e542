use crate::inventory::Inventory;
use crate::report::Format;
use crate::InventoryCommands;
use anyhow::Result;
use mac_proto::MacAddress;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Serialize)]
struct AddressOwners<'a> {
    address: &'a MacAddress,
    hosts: &'a [String],
}

pub fn handle(action: InventoryCommands, format: Format) -> Result<bool> {
    match action {
        InventoryCommands::Check { file } => check(&file, format),
        InventoryCommands::Lookup { file, address } => lookup(&file, &address, format),
        InventoryCommands::Normalize { file, output } => normalize(&file, output.as_deref()),
    }
}

fn load(path: &str) -> Result<Inventory> {
    let inventory = Inventory::from_file(path)?;
    info!("Loaded {} hosts from {}", inventory.hosts.len(), path);
    Ok(inventory)
}

fn check(path: &str, format: Format) -> Result<bool> {
    let inventory = load(path)?;
    let duplicates = inventory.duplicates();

    for (address, hosts) in &duplicates {
        warn!("{} is shared by {}", address, hosts.join(", "));
    }

    match format {
        Format::Json => {
            let owners: Vec<AddressOwners> = duplicates
                .iter()
                .map(|(address, hosts)| AddressOwners { address, hosts })
                .collect();
            println!("{}", serde_json::to_string_pretty(&owners)?);
        }
        Format::Text if duplicates.is_empty() => {
            println!(
                "No duplicate addresses among {} hosts",
                inventory.hosts.len()
            );
        }
        Format::Text => {
            println!("{:<18} {}", "MAC Address", "Hosts");
            println!("{}", "-".repeat(60));
            for (address, hosts) in &duplicates {
                println!("{:<18} {}", address, hosts.join(", "));
            }
        }
    }

    Ok(duplicates.is_empty())
}

fn lookup(path: &str, address: &str, format: Format) -> Result<bool> {
    let mac = MacAddress::from_text(address)?;
    let inventory = load(path)?;
    let hosts: Vec<String> = inventory
        .owners(&mac)
        .into_iter()
        .map(str::to_string)
        .collect();

    match format {
        Format::Json => {
            let owners = AddressOwners {
                address: &mac,
                hosts: &hosts,
            };
            println!("{}", serde_json::to_string_pretty(&owners)?);
        }
        Format::Text if hosts.is_empty() => println!("No host uses {}", mac),
        Format::Text => {
            for host in &hosts {
                println!("{}", host);
            }
        }
    }

    Ok(!hosts.is_empty())
}

fn normalize(path: &str, output: Option<&str>) -> Result<bool> {
    let inventory = load(path)?;
    let destination = output.unwrap_or(path);
    inventory.to_file(destination)?;
    info!("Wrote {} hosts to {}", inventory.hosts.len(), destination);
    Ok(true)
}
