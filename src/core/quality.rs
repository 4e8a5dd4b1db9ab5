//! Local vs remote quality comparison.

use crate::models::media::MediaProfile;

/// Remote video bitrate below which the upload is assumed to be a static
/// image with an audio track.
pub const MIN_REMOTE_BITRATE_KBPS: f64 = 100.0;

/// Height advantage the remote copy needs before it replaces the local file.
pub const MIN_HEIGHT_ADVANTAGE_PX: u32 = 100;

/// Outcome of comparing a local file with the host's best format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QualityVerdict {
    /// One of the profiles could not be obtained.
    Unavailable,
    /// The remote copy is most likely a still image.
    StaticImage { bitrate_kbps: f64 },
    /// The remote copy is substantially taller.
    RemoteBetter,
    /// The local copy is as good or close enough.
    LocalSufficient,
}

impl QualityVerdict {
    /// Whether the remote copy should be downloaded.
    pub fn prefers_remote(self) -> bool {
        matches!(self, QualityVerdict::RemoteBetter)
    }
}

impl std::fmt::Display for QualityVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityVerdict::Unavailable => write!(f, "quality data unavailable"),
            QualityVerdict::StaticImage { bitrate_kbps } => write!(
                f,
                "YouTube video bitrate too low ({:.0}kbps), likely static image",
                bitrate_kbps
            ),
            QualityVerdict::RemoteBetter => write!(f, "YouTube has better quality"),
            QualityVerdict::LocalSufficient => write!(f, "local quality is same or better"),
        }
    }
}

/// Compare profiles. Missing numbers count as zero.
pub fn compare(local: Option<&MediaProfile>, remote: Option<&MediaProfile>) -> QualityVerdict {
    let (Some(local), Some(remote)) = (local, remote) else {
        return QualityVerdict::Unavailable;
    };

    let bitrate = remote.bitrate_kbps.unwrap_or(0.0);
    if bitrate < MIN_REMOTE_BITRATE_KBPS {
        return QualityVerdict::StaticImage {
            bitrate_kbps: bitrate,
        };
    }

    let local_height = local.height.unwrap_or(0);
    let remote_height = remote.height.unwrap_or(0);
    if remote_height > local_height.saturating_add(MIN_HEIGHT_ADVANTAGE_PX) {
        QualityVerdict::RemoteBetter
    } else {
        QualityVerdict::LocalSufficient
    }
}

/// Whether the remote copy is a worthwhile replacement for the local file.
pub fn prefer_remote(local: Option<&MediaProfile>, remote: Option<&MediaProfile>) -> bool {
    compare(local, remote).prefers_remote()
}
