use crate::authority::Authority;
use crate::character_sets::{FRAGMENT_SET, USERINFO_SET};
use crate::compat::{String, ToString, format};
use crate::error::{Result, UriError};
use crate::host::Host;
use crate::path::UriPath;
use crate::percent;
use crate::query::QueryParams;
use crate::suffix::SuffixList;
use crate::tokenizer;

/// A mutable RFC 3986 URI.
///
/// Components are stored decoded; percent-encoding happens at render time
/// with the character-class rule of the field being rendered. Rendered
/// forms (authority string, path string, full URI) are rebuilt from the
/// current fields on every call — there is no cached wire form to fall out
/// of sync.
///
/// ```
/// use ruri::Uri;
///
/// let mut uri = Uri::parse("foo://herp@example.com:8042/over/there?name=ferret#nose")?;
/// assert_eq!(uri.scheme(), Some("foo"));
/// assert_eq!(uri.port(), Some(8042));
/// uri.set_query_arg("order", Some("asc"));
/// # Ok::<(), ruri::UriError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Uri {
    scheme: Option<String>,
    userinfo: Option<String>,
    host: Option<Host>,
    port: Option<u16>,
    path: UriPath,
    query: Option<QueryParams>,
    fragment: Option<String>,
}

impl Uri {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw URI string.
    ///
    /// The grammar split itself cannot fail; errors come from component
    /// validation (malformed ports, broken escapes, path shape).
    pub fn parse(input: &str) -> Result<Self> {
        let raw = tokenizer::tokenize(input);
        Self::from_parts(raw.scheme, raw.authority, raw.path, raw.query, raw.fragment)
    }

    /// Assemble a URI from the five grammar components directly, with the
    /// same validation the parser applies.
    pub fn from_parts(
        scheme: Option<&str>,
        authority: Option<&str>,
        path: &str,
        query: Option<&str>,
        fragment: Option<&str>,
    ) -> Result<Self> {
        let mut uri = Self::new();
        uri.scheme = scheme.map(ToString::to_string);
        uri.set_authority(authority)?;
        uri.set_path(path)?;
        uri.set_query(query)?;
        uri.set_fragment(fragment)?;
        Ok(uri)
    }

    // ------------------------------------------------------------------
    // Getters. String-typed components come back decoded; wire forms are
    // available through `authority()`, `path_str()`, `query_str()` and
    // `serialize()`.
    // ------------------------------------------------------------------

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn userinfo(&self) -> Option<&str> {
        self.userinfo.as_deref()
    }

    pub fn host(&self) -> Option<&Host> {
        self.host.as_ref()
    }

    /// Decoded host text
    pub fn host_str(&self) -> Option<&str> {
        self.host.as_ref().map(Host::as_str)
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn path(&self) -> &UriPath {
        &self.path
    }

    /// Encoded path string
    pub fn path_str(&self) -> String {
        self.path.serialize(self.scheme.is_some())
    }

    pub fn query(&self) -> Option<&QueryParams> {
        self.query.as_ref()
    }

    /// Encoded query string, without the leading `?`
    pub fn query_str(&self) -> Option<String> {
        self.query.as_ref().map(QueryParams::serialize)
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// A URI has an authority exactly when it has a host, including the
    /// empty-string host of `scheme://`.
    pub fn has_authority(&self) -> bool {
        self.host.is_some()
    }

    /// Encoded authority string rebuilt from the current userinfo, host
    /// and port
    pub fn authority(&self) -> Option<String> {
        self.build_authority(false)
    }

    // ------------------------------------------------------------------
    // Setters. Each validates its input and re-derives dependent state.
    // ------------------------------------------------------------------

    /// Scheme is a case-preserving token; lowercasing is a normalization
    /// concern.
    pub fn set_scheme(&mut self, scheme: Option<&str>) {
        self.scheme = scheme.map(ToString::to_string);
    }

    /// Replace the whole authority. Userinfo, host and port are re-derived
    /// together from the parse, never left in a mixed state; `None` clears
    /// all three.
    pub fn set_authority(&mut self, authority: Option<&str>) -> Result<()> {
        match authority {
            Some(raw) => {
                let Authority {
                    userinfo,
                    host,
                    port,
                } = Authority::parse(raw)?;
                self.userinfo = userinfo;
                self.host = Some(host);
                self.port = port;
            }
            None => {
                self.userinfo = None;
                self.host = None;
                self.port = None;
            }
        }
        Ok(())
    }

    /// Set the userinfo from its wire form; the empty string clears it.
    pub fn set_userinfo(&mut self, userinfo: Option<&str>) -> Result<()> {
        self.userinfo = match userinfo {
            Some(raw) if !raw.is_empty() => Some(percent::decode(raw)?),
            _ => None,
        };
        Ok(())
    }

    /// Set the host from its wire form, re-deriving the address/reg-name
    /// classification.
    pub fn set_host(&mut self, host: Option<&str>) -> Result<()> {
        self.host = match host {
            Some(raw) => Some(Host::classify(raw)?),
            None => None,
        };
        Ok(())
    }

    pub fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }

    /// Set the path from its wire form, validated against the current
    /// authority shape.
    pub fn set_path(&mut self, path: &str) -> Result<()> {
        self.path = UriPath::parse(path, self.has_authority())?;
        Ok(())
    }

    /// Set the query from its wire form; `None` removes it entirely.
    pub fn set_query(&mut self, query: Option<&str>) -> Result<()> {
        self.query = match query {
            Some(raw) => Some(QueryParams::parse(raw)?),
            None => None,
        };
        Ok(())
    }

    /// Set the fragment from its wire form.
    pub fn set_fragment(&mut self, fragment: Option<&str>) -> Result<()> {
        self.fragment = match fragment {
            Some(raw) => Some(percent::decode(raw)?),
            None => None,
        };
        Ok(())
    }

    /// Upsert a single query argument, creating the query on first use.
    /// Both sides are decoded values, not wire text.
    pub fn set_query_arg(&mut self, key: &str, value: Option<&str>) {
        self.query
            .get_or_insert_with(QueryParams::new)
            .set(key, value);
    }

    /// Decoded value for a query key. An absent key is an error; a key
    /// present without a value comes back as `Ok(None)`.
    pub fn query_arg(&self, key: &str) -> Result<Option<&str>> {
        self.query
            .as_ref()
            .and_then(|query| query.get(key))
            .ok_or(UriError::UnknownQueryKey)
    }

    /// Descend the path like a shell `cd`.
    pub fn change_dir(&mut self, relative: &str) -> Result<()> {
        self.path.descend(relative)
    }

    // ------------------------------------------------------------------
    // Domain and TLD, via the injected public-suffix collaborator.
    // ------------------------------------------------------------------

    /// Registrable domain of the host per `suffixes`; `None` for IP hosts,
    /// missing hosts and hosts the rule list does not match.
    pub fn domain(&self, suffixes: &dyn SuffixList) -> Option<String> {
        let host = self.host.as_ref()?;
        if host.is_address() {
            return None;
        }
        suffixes.public_suffix(host.as_str())
    }

    /// The domain minus its leftmost label, e.g. `amazon.co.uk` → `co.uk`.
    pub fn tld(&self, suffixes: &dyn SuffixList) -> Option<String> {
        let domain = self.domain(suffixes)?;
        let (_, rest) = domain.split_once('.').unwrap_or((domain.as_str(), ""));
        Some(rest.to_string())
    }

    /// Replace the domain suffix of the host, keeping any subdomain
    /// prefix. Fails when the host is an IP address (or absent).
    pub fn set_domain(&mut self, suffixes: &dyn SuffixList, domain: &str) -> Result<()> {
        let current = self.domain(suffixes);
        match self.host.as_mut() {
            Some(Host::RegName(name)) => {
                let prefix = current
                    .as_deref()
                    .and_then(|cur| name.strip_suffix(cur))
                    .unwrap_or("")
                    .to_string();
                *name = format!("{prefix}{domain}");
                Ok(())
            }
            _ => Err(UriError::HostIsAddress),
        }
    }

    /// Replace the TLD, keeping the domain's leftmost label. When the rule
    /// list does not match the current host, the whole host stands in for
    /// the domain.
    pub fn set_tld(&mut self, suffixes: &dyn SuffixList, tld: &str) -> Result<()> {
        let domain = self.domain(suffixes);
        let head = match self.host.as_ref() {
            Some(Host::RegName(name)) => domain
                .as_deref()
                .unwrap_or(name.as_str())
                .split('.')
                .next()
                .unwrap_or("")
                .to_string(),
            _ => return Err(UriError::HostIsAddress),
        };
        self.set_domain(suffixes, &format!("{head}.{tld}"))
    }

    // ------------------------------------------------------------------
    // Rendering and equality.
    // ------------------------------------------------------------------

    /// Assemble the URI string from the current fields.
    ///
    /// With `normalize`, the scheme and host are lowercased, the path goes
    /// through dot-segment removal (defaulting to `/` when empty alongside
    /// an authority) and every percent escape in the assembled string is
    /// uppercased in a final pass.
    pub fn serialize(&self, normalize: bool) -> String {
        let mut out = String::new();
        if let Some(scheme) = &self.scheme {
            if normalize {
                out.push_str(&scheme.to_lowercase());
            } else {
                out.push_str(scheme);
            }
            out.push(':');
        }
        if let Some(authority) = self.build_authority(normalize) {
            out.push_str("//");
            out.push_str(&authority);
        }
        if normalize {
            let path = self.path.remove_dot_segments();
            if path.is_empty() && self.has_authority() {
                out.push('/');
            } else {
                out.push_str(&path.serialize(self.scheme.is_some()));
            }
        } else {
            out.push_str(&self.path.serialize(self.scheme.is_some()));
        }
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(&query.serialize());
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            percent::encode_into(&mut out, fragment, FRAGMENT_SET);
        }
        if normalize {
            out = percent::uppercase_escapes(&out);
        }
        out
    }

    /// Normalized rendering; the form used for URI-to-URI equality
    pub fn normalized(&self) -> String {
        self.serialize(true)
    }

    fn build_authority(&self, normalize: bool) -> Option<String> {
        let host = self.host.as_ref()?;
        let mut out = String::new();
        if let Some(userinfo) = &self.userinfo {
            percent::encode_into(&mut out, userinfo, USERINFO_SET);
            out.push('@');
        }
        let rendered = host.serialize();
        if normalize {
            out.push_str(&rendered.to_lowercase());
        } else {
            out.push_str(&rendered);
        }
        if let Some(port) = self.port {
            out.push(':');
            out.push_str(&format!("{port}"));
        }
        Some(out)
    }
}

impl core::fmt::Display for Uri {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialize(false))
    }
}

/// URI-to-URI equality compares normalized renderings.
impl PartialEq for Uri {
    fn eq(&self, other: &Self) -> bool {
        self.serialize(true) == other.serialize(true)
    }
}

/// URI-to-string equality compares the lowercased literal rendering to the
/// given string — deliberately weaker than URI-to-URI normalization.
impl PartialEq<str> for Uri {
    fn eq(&self, other: &str) -> bool {
        self.serialize(false).to_lowercase() == other
    }
}

impl PartialEq<&str> for Uri {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<Uri> for str {
    fn eq(&self, other: &Uri) -> bool {
        other == self
    }
}
