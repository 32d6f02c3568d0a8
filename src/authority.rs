use crate::compat::String;
use crate::error::{Result, UriError};
use crate::host::Host;
use crate::percent;

/// Decomposed authority triple.
///
/// Produced whole so that callers replace userinfo, host and port together
/// instead of mutating three fields with ordering dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authority {
    pub userinfo: Option<String>,
    pub host: Host,
    pub port: Option<u16>,
}

impl Authority {
    /// Split an authority string into userinfo, host and port.
    ///
    /// Userinfo is taken before the last `@`; the host is classified and,
    /// for reg-names, decoded. An authority that is empty after userinfo
    /// removal still yields a host (the empty reg-name), which is distinct
    /// from having no authority at all.
    pub fn parse(raw: &str) -> Result<Self> {
        let (userinfo, host_port) = match raw.rsplit_once('@') {
            Some((info, rest)) => {
                let info = percent::decode(info)?;
                ((!info.is_empty()).then_some(info), rest)
            }
            None => (None, raw),
        };

        let (host_text, port_text) = split_host_port(host_port);
        let host = Host::classify(host_text)?;
        let port = match port_text {
            Some(text) => Some(parse_port(text)?),
            None => None,
        };

        Ok(Self {
            userinfo,
            host,
            port,
        })
    }
}

/// Split `host[:port]` into the host text and optional port text.
/// Bracketed literals keep their interior colons; otherwise the first ':'
/// separates. Trailing text after a literal's bracket is treated as port
/// text even without a ':' so it surfaces as a malformed port.
fn split_host_port(input: &str) -> (&str, Option<&str>) {
    if input.starts_with('[') {
        if let Some(end) = input.find(']') {
            let (literal, rest) = input.split_at(end + 1);
            if rest.is_empty() {
                return (literal, None);
            }
            return (literal, Some(rest.strip_prefix(':').unwrap_or(rest)));
        }
        return (input, None);
    }
    match input.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (input, None),
    }
}

/// Parse port digits; any non-digit text (including the empty string) is
/// malformed.
fn parse_port(input: &str) -> Result<u16> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UriError::MalformedPort);
    }
    input.parse::<u16>().map_err(|_| UriError::MalformedPort)
}
