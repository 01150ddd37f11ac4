//! Failure causes for the scroll-driven hero video.
//!
//! None of these reach the visitor. Load failures route to the fallback
//! panel, seek failures are retried on the next scroll tick, and the cause is
//! kept around for the console only.

/// Why the hero video could not be scrubbed, or why a single seek failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MediaError {
    /// The video element has no usable `src` or `<source>` child.
    #[error("Video element has no source")]
    MissingSource,

    /// No readiness signal arrived within the configured budget.
    #[error("Video not ready after {waited_ms} ms")]
    LoadTimeout { waited_ms: u32 },

    /// The fetch was aborted by the user agent.
    #[error("Video load aborted")]
    Aborted,

    /// A network error interrupted the download.
    #[error("Network error while loading video")]
    Network,

    /// The decoder failed on the downloaded data.
    #[error("Video decode error")]
    Decode,

    /// The container or codec is not supported.
    #[error("Video format not supported")]
    SourceNotSupported,

    /// Any code outside the four defined by the HTML media error interface.
    #[error("Unknown video error code {0}")]
    Unknown(u16),

    /// Setting the playback position threw.
    #[error("Seek to {target:.3}s rejected")]
    SeekRejected { target: f64 },
}

impl MediaError {
    /// Map a numeric `MediaError.code` to a variant.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::Aborted,
            2 => Self::Network,
            3 => Self::Decode,
            4 => Self::SourceNotSupported,
            other => Self::Unknown(other),
        }
    }

    /// Whether this error ends the load attempt. Seek rejections do not.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::SeekRejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_error_codes_map_to_variants() {
        assert_eq!(MediaError::from_code(1), MediaError::Aborted);
        assert_eq!(MediaError::from_code(2), MediaError::Network);
        assert_eq!(MediaError::from_code(3), MediaError::Decode);
        assert_eq!(MediaError::from_code(4), MediaError::SourceNotSupported);
        assert_eq!(MediaError::from_code(0), MediaError::Unknown(0));
        assert_eq!(MediaError::from_code(17), MediaError::Unknown(17));
    }

    #[test]
    fn seek_rejection_is_not_terminal() {
        assert!(!MediaError::SeekRejected { target: 1.0 }.is_terminal());
        assert!(MediaError::Network.is_terminal());
        assert!(MediaError::LoadTimeout { waited_ms: 3000 }.is_terminal());
    }

    #[test]
    fn messages_are_readable() {
        assert_eq!(
            MediaError::LoadTimeout { waited_ms: 3000 }.to_string(),
            "Video not ready after 3000 ms"
        );
        assert_eq!(
            MediaError::SeekRejected { target: 1.5 }.to_string(),
            "Seek to 1.500s rejected"
        );
    }
}
