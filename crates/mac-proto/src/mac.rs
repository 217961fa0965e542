use crate::InvalidAddress;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Largest value a 48-bit MAC address can hold
pub const MAX_VALUE: u64 = 0xFFFF_FFFF_FFFF;

/// Length of `xx:xx:xx:xx:xx:xx`
const TEXT_LEN: usize = 17;

/// Input accepted by [`MacAddress::new`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacInput {
    Text(String),
    Integer(i128),
}

impl From<&str> for MacInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for MacInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

macro_rules! impl_integer_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for MacInput {
                fn from(n: $ty) -> Self {
                    Self::Integer(i128::from(n))
                }
            }
        )*
    };
}

impl_integer_input!(u8, u16, u32, u64, i8, i16, i32, i64, i128);

/// MAC address representation
///
/// The 48-bit integer is the only authoritative field. The canonical
/// string is derived from it once, at construction, and never changes.
///
/// ```
/// use mac_proto::MacAddress;
///
/// let mac: MacAddress = "AA:BB:CC:DD:EE:FF".parse().unwrap();
/// assert_eq!(mac.to_string(), "aa:bb:cc:dd:ee:ff");
/// assert_eq!(mac.value(), 0xaabbccddeeff);
/// ```
#[derive(Clone)]
pub struct MacAddress {
    value: u64,
    display: String,
}

impl MacAddress {
    /// Create a MAC address from either accepted input kind
    pub fn new(input: impl Into<MacInput>) -> Result<Self, InvalidAddress> {
        match input.into() {
            MacInput::Text(text) => Self::from_text(&text),
            MacInput::Integer(n) => Self::from_integer(n),
        }
    }

    /// Parse a MAC address from a string (xx:xx:xx:xx:xx:xx, any case)
    pub fn from_text(text: &str) -> Result<Self, InvalidAddress> {
        if !is_canonical_shape(text) {
            return Err(InvalidAddress::Text(text.to_string()));
        }

        let digits: String = text.split(':').collect();
        let value = u64::from_str_radix(&digits, 16)
            .map_err(|_| InvalidAddress::Text(text.to_string()))?;

        Ok(Self::from_valid(value))
    }

    /// Create a MAC address from an integer in [0, 0xFFFFFFFFFFFF]
    pub fn from_integer(n: impl Into<i128>) -> Result<Self, InvalidAddress> {
        let n = n.into();
        match u64::try_from(n) {
            Ok(value) if value <= MAX_VALUE => Ok(Self::from_valid(value)),
            _ => Err(InvalidAddress::Integer(n)),
        }
    }

    fn from_valid(value: u64) -> Self {
        let hex = format!("{:012x}", value);
        let groups: Vec<&str> = (0..6).map(|i| &hex[i * 2..i * 2 + 2]).collect();
        Self {
            value,
            display: groups.join(":"),
        }
    }

    /// Get the 48-bit integer value
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Get the canonical lowercase string
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Octets, most significant first, read back from the canonical string
    pub fn octets(&self) -> [u8; 6] {
        self.display_octets().unwrap_or_else(|| {
            // unreachable while the display is derived from `value`
            let bytes = self.value.to_be_bytes();
            [bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7]]
        })
    }

    fn display_octets(&self) -> Option<[u8; 6]> {
        let octets = self
            .display
            .split(':')
            .map(|group| u8::from_str_radix(group, 16).ok())
            .collect::<Option<Vec<u8>>>()?;
        octets.try_into().ok()
    }

    /// Octets as an owned vector
    pub fn to_vec(&self) -> Vec<u8> {
        self.octets().to_vec()
    }

    fn first_octet(&self) -> u8 {
        (self.value >> 40) as u8
    }

    /// ff:ff:ff:ff:ff:ff
    pub fn is_broadcast(&self) -> bool {
        self.value == MAX_VALUE
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Group address: I/G bit of the first octet is set
    pub fn is_multicast(&self) -> bool {
        self.first_octet() & 0x01 != 0
    }

    pub fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    /// Locally administered: U/L bit of the first octet is set
    pub fn is_local(&self) -> bool {
        self.first_octet() & 0x02 != 0
    }

    pub fn is_universal(&self) -> bool {
        !self.is_local()
    }
}

fn is_canonical_shape(text: &str) -> bool {
    text.len() == TEXT_LEN
        && text.bytes().enumerate().all(|(i, b)| {
            if i % 3 == 2 {
                b == b':'
            } else {
                b.is_ascii_hexdigit()
            }
        })
}

impl PartialEq for MacAddress {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for MacAddress {}

impl Hash for MacAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for MacAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MacAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MacAddress").field(&self.display).finish()
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl FromStr for MacAddress {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl TryFrom<&str> for MacAddress {
    type Error = InvalidAddress;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_text(s)
    }
}

impl TryFrom<String> for MacAddress {
    type Error = InvalidAddress;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_text(&s)
    }
}

impl TryFrom<u64> for MacAddress {
    type Error = InvalidAddress;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        Self::from_integer(n)
    }
}

impl TryFrom<i64> for MacAddress {
    type Error = InvalidAddress;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Self::from_integer(n)
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> String {
        mac.display
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MacAddressVisitor)
    }
}

struct MacAddressVisitor;

fn unsupported<E: de::Error>(unexpected: Unexpected<'_>) -> E {
    E::custom(InvalidAddress::Unsupported(unexpected.to_string()))
}

impl<'de> Visitor<'de> for MacAddressVisitor {
    type Value = MacAddress;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a colon-separated MAC address string or a 48-bit integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<MacAddress, E> {
        MacAddress::from_text(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<MacAddress, E> {
        MacAddress::from_integer(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<MacAddress, E> {
        MacAddress::from_integer(v).map_err(E::custom)
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<MacAddress, E> {
        MacAddress::from_integer(v).map_err(E::custom)
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<MacAddress, E> {
        match i128::try_from(v) {
            Ok(n) => MacAddress::from_integer(n).map_err(E::custom),
            Err(_) => Err(E::custom(InvalidAddress::WideInteger(v.to_string()))),
        }
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<MacAddress, E> {
        Err(unsupported(Unexpected::Bool(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<MacAddress, E> {
        Err(unsupported(Unexpected::Float(v)))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<MacAddress, E> {
        Err(unsupported(Unexpected::Bytes(v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<MacAddress, E> {
        Err(unsupported(Unexpected::Unit))
    }

    fn visit_none<E: de::Error>(self) -> Result<MacAddress, E> {
        Err(unsupported(Unexpected::Option))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<MacAddress, A::Error> {
        Err(unsupported(Unexpected::Seq))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<MacAddress, A::Error> {
        Err(unsupported(Unexpected::Map))
    }
}
