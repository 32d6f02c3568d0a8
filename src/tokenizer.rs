use memchr::{memchr, memchr2};

/// The five top-level captures of the RFC 3986 Appendix B pattern.
/// Absent components are `None`; the path is always present, possibly
/// empty. All slices borrow from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawComponents<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// Split a raw URI string into its five grammar components.
///
/// This is a total function: every input matches the grammar. Structural
/// validation (authority shape, path/authority interaction, escapes) is
/// left to the component parsers.
pub fn tokenize(input: &str) -> RawComponents<'_> {
    // Fragment first, so a '?' inside the fragment stays fragment data
    let (rest, fragment) = match memchr(b'#', input.as_bytes()) {
        Some(pos) => (&input[..pos], Some(&input[pos + 1..])),
        None => (input, None),
    };

    let (rest, query) = match memchr(b'?', rest.as_bytes()) {
        Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
        None => (rest, None),
    };

    // Scheme is a non-empty run before the first ':' that precedes any '/'.
    // The grammar's greedy match is trusted; no token re-validation here.
    let (scheme, rest) = match memchr2(b':', b'/', rest.as_bytes()) {
        Some(pos) if rest.as_bytes()[pos] == b':' && pos > 0 => {
            (Some(&rest[..pos]), &rest[pos + 1..])
        }
        _ => (None, rest),
    };

    let (authority, path) = match rest.strip_prefix("//") {
        Some(after) => match memchr(b'/', after.as_bytes()) {
            Some(pos) => (Some(&after[..pos]), &after[pos..]),
            None => (Some(after), ""),
        },
        None => (None, rest),
    };

    RawComponents {
        scheme,
        authority,
        path,
        query,
        fragment,
    }
}
