use crate::character_sets::REG_NAME_SET;
use crate::compat::{String, ToString};
use crate::error::Result;
use crate::percent;

/// Host component, tagged by form (RFC 3986 §3.2.2).
///
/// Only registered names take part in percent-coding; both address forms
/// pass through verbatim in either direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Host {
    /// Four dot-separated decimal octets
    Ipv4(String),
    /// Bracketed IP literal; contents are opaque beyond the brackets
    IpLiteral(String),
    /// Registered name, stored decoded
    RegName(String),
}

impl Host {
    /// Classify a raw host string, decoding it when it is a reg-name.
    /// Classification order: IPv4, IP-literal, then reg-name as the
    /// greedy fallback.
    pub fn classify(raw: &str) -> Result<Self> {
        if is_ipv4(raw) {
            Ok(Self::Ipv4(raw.to_string()))
        } else if is_ip_literal(raw) {
            Ok(Self::IpLiteral(raw.to_string()))
        } else {
            Ok(Self::RegName(percent::decode(raw)?))
        }
    }

    /// Decoded text of the host
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ipv4(s) | Self::IpLiteral(s) | Self::RegName(s) => s,
        }
    }

    /// True for either address form
    pub fn is_address(&self) -> bool {
        matches!(self, Self::Ipv4(_) | Self::IpLiteral(_))
    }

    /// Wire form: reg-names re-encoded, address forms verbatim
    pub fn serialize(&self) -> String {
        match self {
            Self::Ipv4(s) | Self::IpLiteral(s) => s.clone(),
            Self::RegName(s) => percent::encode(s, REG_NAME_SET),
        }
    }
}

/// Strict dotted-quad check: exactly four decimal octets in 0–255, no
/// leading zeros, no empty parts.
pub(crate) fn is_ipv4(input: &str) -> bool {
    let mut count = 0;
    for part in input.split('.') {
        count += 1;
        let valid = count <= 4
            && !part.is_empty()
            && part.len() <= 3
            && part.bytes().all(|b| b.is_ascii_digit())
            && (part.len() == 1 || !part.starts_with('0'))
            && part.parse::<u8>().is_ok();
        if !valid {
            return false;
        }
    }
    count == 4
}

/// Bracket matching only; the literal's interior is not validated
pub(crate) fn is_ip_literal(input: &str) -> bool {
    input.len() > 2 && input.starts_with('[') && input.ends_with(']')
}
