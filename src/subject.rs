//! Decomposition of a parsed URL into the segments the classifier matches on.

use percent_encoding::percent_decode_str;
use tracing::trace;
use url::Url;

use crate::settings::MatcherSettings;

/// Decoded path segments and fragment of an accepted GitHub URL.
///
/// The fragment is kept apart from the path so that an encoded `%23` inside a
/// path segment can never be mistaken for an anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Subject {
    pub(crate) segments: Vec<String>,
    pub(crate) fragment: Option<String>,
}

impl Subject {
    /// Builds the subject for `url`, or `None` if the host is not accepted or
    /// the URL has no hierarchical path.
    pub(crate) fn from_url(url: &Url, settings: &MatcherSettings) -> Option<Self> {
        let host = host_port(url)?;
        if !settings.accepts_host(&host) {
            trace!(%host, "host is not a configured GitHub domain");
            return None;
        }

        let segments = url
            .path_segments()?
            .map(decode)
            .collect::<Option<Vec<_>>>()?;

        // Empty fragment is stripped
        let fragment = match url.fragment() {
            Some(raw) if !raw.is_empty() => Some(decode(raw)?),
            _ => None,
        };

        Some(Self { segments, fragment })
    }
}

/// Formats `host[:port]`. The port is omitted when it is the scheme default.
fn host_port(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

fn decode(raw: &str) -> Option<String> {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => {
            trace!(raw, "percent-encoded text is not valid UTF-8");
            None
        }
    }
}
