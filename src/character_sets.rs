use percent_encoding::{AsciiSet, CONTROLS};

// Encode sets per RFC 3986. Each set lists the characters a component must
// percent-encode; everything else in the component's grammar passes through.
// Derivations start from the query/fragment rule (the most permissive) and
// add the delimiters each tighter component gives up.

/// Query percent-encode set (RFC 3986 §3.4): everything outside
/// unreserved, sub-delims, `:`, `@`, `/` and `?`.
pub const QUERY_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Fragment percent-encode set (§3.5): same alphabet as query
pub const FRAGMENT_SET: &AsciiSet = QUERY_SET;

/// Path segment percent-encode set (`pchar`, §3.3)
/// Query + `/`, `?` (segments are encoded individually, so a literal `/`
/// inside segment data must escape)
pub const PATH_SET: &AsciiSet = &QUERY_SET.add(b'/').add(b'?');

/// Path segment set for scheme-less references (`segment-nz-nc`, §3.3)
/// `pchar` minus `:`
pub const PATH_NOSCHEME_SET: &AsciiSet = &PATH_SET.add(b':');

/// Userinfo percent-encode set (§3.2.1): `pchar` minus `@`
pub const USERINFO_SET: &AsciiSet = &PATH_SET.add(b'@');

/// Registered-name percent-encode set (§3.2.2): unreserved and sub-delims
/// only
pub const REG_NAME_SET: &AsciiSet = &USERINFO_SET.add(b':');
