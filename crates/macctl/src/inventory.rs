use anyhow::Context;
use mac_proto::MacAddress;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Host inventory loaded from YAML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// Known hosts
    #[serde(default)]
    pub hosts: Vec<Host>,
}

/// A named host and its hardware address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub name: String,

    /// Colon-separated string or integer in the file; canonical string when written back
    pub mac: MacAddress,

    /// Optional free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Inventory {
    /// Load an inventory from a YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read inventory {}", path))?;
        Self::from_yaml(&contents).with_context(|| format!("Invalid inventory {}", path))
    }

    pub fn from_yaml(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Save the inventory to a YAML file
    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write inventory {}", path))?;
        Ok(())
    }

    /// Host names grouped by address
    pub fn by_address(&self) -> HashMap<MacAddress, Vec<String>> {
        let mut owners: HashMap<MacAddress, Vec<String>> = HashMap::new();
        for host in &self.hosts {
            owners
                .entry(host.mac.clone())
                .or_default()
                .push(host.name.clone());
        }
        owners
    }

    /// Addresses claimed by more than one host, in address order
    pub fn duplicates(&self) -> Vec<(MacAddress, Vec<String>)> {
        let mut duplicates: Vec<_> = self
            .by_address()
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .collect();
        duplicates.sort_by(|a, b| a.0.cmp(&b.0));
        duplicates
    }

    /// Names of the hosts using `mac`
    pub fn owners(&self, mac: &MacAddress) -> Vec<&str> {
        self.hosts
            .iter()
            .filter(|host| &host.mac == mac)
            .map(|host| host.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
hosts:
  - name: gateway
    mac: "00:11:22:33:44:55"
  - name: printer
    mac: 73588229205
    description: same card, integer form
  - name: nas
    mac: "AA:BB:CC:DD:EE:FF"
  - name: nas-backup
    mac: "aa:bb:cc:dd:ee:ff"
  - name: laptop
    mac: "02:00:00:00:00:01"
"#;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("macctl-{}-{}.yaml", std::process::id(), name))
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_inventory_from_yaml() {
        let inventory = Inventory::from_yaml(SAMPLE).unwrap();
        assert_eq!(inventory.hosts.len(), 5);
        assert_eq!(inventory.hosts[1].mac.as_str(), "00:11:22:33:44:55");
        assert_eq!(
            inventory.hosts[1].description.as_deref(),
            Some("same card, integer form")
        );
    }

    #[test]
    fn test_inventory_empty_document() {
        let inventory = Inventory::from_yaml("{}").unwrap();
        assert!(inventory.hosts.is_empty());
        assert!(inventory.duplicates().is_empty());
    }

    #[test]
    fn test_inventory_rejects_invalid_address() {
        let err = Inventory::from_yaml("hosts:\n  - name: bad\n    mac: \"00:11:22:33:44\"\n")
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid MAC address: \"00:11:22:33:44\""));

        let err = Inventory::from_yaml("hosts:\n  - name: bad\n    mac: true\n").unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid MAC address: boolean `true`"));
    }

    #[test]
    fn test_inventory_by_address_collapses_case() {
        let inventory = Inventory::from_yaml(SAMPLE).unwrap();
        let owners = inventory.by_address();
        assert_eq!(owners.len(), 3);

        let nas: MacAddress = "aa:bb:cc:dd:ee:ff".parse().unwrap();
        assert_eq!(owners[&nas], vec!["nas", "nas-backup"]);
    }

    #[test]
    fn test_inventory_duplicates_sorted() {
        let inventory = Inventory::from_yaml(SAMPLE).unwrap();
        let duplicates = inventory.duplicates();
        assert_eq!(duplicates.len(), 2);
        assert_eq!(duplicates[0].0.as_str(), "00:11:22:33:44:55");
        assert_eq!(duplicates[0].1, vec!["gateway", "printer"]);
        assert_eq!(duplicates[1].0.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn test_inventory_owners() {
        let inventory = Inventory::from_yaml(SAMPLE).unwrap();
        let laptop: MacAddress = "02:00:00:00:00:01".parse().unwrap();
        assert_eq!(inventory.owners(&laptop), vec!["laptop"]);

        let unknown = MacAddress::from_integer(7u8).unwrap();
        assert!(inventory.owners(&unknown).is_empty());
    }

    #[test]
    fn test_inventory_file_round_trip_is_canonical() {
        let path = temp_path("round-trip");
        let inventory = Inventory::from_yaml(SAMPLE).unwrap();
        inventory.to_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("00:11:22:33:44:55"));
        assert!(!written.contains("AA:BB:CC:DD:EE:FF"));
        assert!(!written.contains("73588229205"));

        let reloaded = Inventory::from_file(&path).unwrap();
        assert_eq!(reloaded.hosts, inventory.hosts);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_inventory_missing_file() {
        let err = Inventory::from_file(&temp_path("does-not-exist")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read inventory"));
    }
}
