use crate::compat::{String, ToString};

/// Source of public-suffix decisions for the domain/TLD accessors.
///
/// The rule list itself is external; implementations are injected at the
/// call sites so tests can substitute doubles. Results are taken as
/// authoritative and are neither cached nor validated.
pub trait SuffixList {
    /// Longest registrable suffix of `host` — the "domain" — e.g.
    /// `www.amazon.co.uk` → `amazon.co.uk`. `None` when the host does not
    /// match the rule list.
    fn public_suffix(&self, host: &str) -> Option<String>;
}

/// Adapter over the compiled public-suffix rule list shipped with the
/// `psl` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PslList;

impl SuffixList for PslList {
    fn public_suffix(&self, host: &str) -> Option<String> {
        psl::domain_str(host).map(ToString::to_string)
    }
}
