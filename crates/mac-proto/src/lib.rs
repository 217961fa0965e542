//! IEEE 802 48-bit MAC address value type
//!
//! This library validates textual and numeric MAC addresses once, at
//! construction, and normalizes them to the canonical lowercase
//! colon-separated form. It has no I/O and no business logic, so it can be
//! shared by any tool that needs a strongly-typed hardware address.

pub mod error;
pub mod mac;

pub use error::InvalidAddress;
pub use mac::{MacAddress, MacInput, MAX_VALUE};
