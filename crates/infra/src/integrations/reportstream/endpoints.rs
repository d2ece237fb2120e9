//! Hub endpoint URLs

use reportlink_domain::constants::{
    HISTORY_SEGMENT, REPORT_SEGMENT, TOKEN_PATH_SEGMENTS, WATERS_PATH_SEGMENTS,
};
use reportlink_domain::ConfigError;
use url::Url;

/// Endpoint URLs of one hub origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubEndpoints {
    origin: Url,
}

impl HubEndpoints {
    /// Parse the origin every endpoint is resolved against.
    ///
    /// # Errors
    ///
    /// `base_url` is rejected when it does not parse or is not `http(s)`.
    pub fn parse(origin: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(origin)
            .map_err(|err| ConfigError::invalid("base_url", format!("{origin:?}: {err}")))?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ConfigError::invalid(
                "base_url",
                format!("{origin:?} is not an http(s) origin"),
            ));
        }

        Ok(Self { origin: url })
    }

    /// `{origin}/api/token`
    pub fn token(&self) -> Url {
        self.join(&TOKEN_PATH_SEGMENTS)
    }

    /// `{origin}/api/waters`
    pub fn waters(&self) -> Url {
        self.join(&WATERS_PATH_SEGMENTS)
    }

    /// `{origin}/api/waters/report/{submission_id}/history`
    ///
    /// The id is percent-encoded as a single path segment.
    pub fn history(&self, submission_id: &str) -> Url {
        let mut url = self.waters();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.extend([REPORT_SEGMENT, submission_id, HISTORY_SEGMENT]);
        }
        url
    }

    fn join(&self, path: &[&str]) -> Url {
        let mut url = self.origin.clone();
        // Checked in `parse`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path);
        }
        url
    }
}
