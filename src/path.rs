use crate::character_sets::{PATH_NOSCHEME_SET, PATH_SET};
use crate::compat::{String, Vec};
use crate::error::{Result, UriError};
use crate::percent;

/// Ordered decoded path segments.
///
/// An empty leading segment stands for a leading slash, an empty trailing
/// segment for a trailing slash; doubled slashes show up as interior empty
/// segments. The empty path is a single empty segment (or no segments at
/// all for a default-constructed value); both render to `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UriPath {
    segments: Vec<String>,
}

impl UriPath {
    /// Parse a raw path, enforcing the authority shape rules (§3.3):
    /// with an authority the path must be empty or start with `/`;
    /// without one it must not start with `//`.
    pub fn parse(raw: &str, has_authority: bool) -> Result<Self> {
        if has_authority && !raw.is_empty() && !raw.starts_with('/') {
            return Err(UriError::InvalidPath);
        }
        if !has_authority && raw.starts_with("//") {
            return Err(UriError::InvalidPath);
        }
        let segments = raw
            .split('/')
            .map(percent::decode)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True when the path renders to the empty string
    pub fn is_empty(&self) -> bool {
        self.segments.len() <= 1 && self.segments.first().is_none_or(String::is_empty)
    }

    /// Dot-segment removal (§5.2.4): `.` is dropped, `..` removes the most
    /// recently kept segment. A `..` arriving while the output is empty is
    /// absorbed silently, so leading `..` in relative references cannot
    /// underflow.
    pub fn remove_dot_segments(&self) -> Self {
        let mut output: Vec<String> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment.as_str() {
                "." => {}
                ".." => {
                    output.pop();
                }
                _ => output.push(segment.clone()),
            }
        }
        Self { segments: output }
    }

    /// Render the path, encoding each segment with the rule for its
    /// context: `pchar` under a scheme, `pchar` minus `:` without one.
    pub fn serialize(&self, scheme_present: bool) -> String {
        let encode_set = if scheme_present {
            PATH_SET
        } else {
            PATH_NOSCHEME_SET
        };
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push('/');
            }
            percent::encode_into(&mut out, segment, encode_set);
        }
        out
    }

    /// Descend into a relative subpath, shell-`cd` style: a trailing slash
    /// on the current path is dropped, a leading slash on the argument is
    /// ignored, and the argument's segments are appended as-is (dot
    /// segments stay literal; normalization is a render-time concern).
    pub fn descend(&mut self, relative: &str) -> Result<()> {
        let relative = relative.strip_prefix('/').unwrap_or(relative);
        if self.segments.last().is_some_and(String::is_empty) {
            self.segments.pop();
        }
        for part in relative.split('/') {
            self.segments.push(percent::decode(part)?);
        }
        Ok(())
    }
}
