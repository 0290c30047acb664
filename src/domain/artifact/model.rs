use chrono::{DateTime, TimeZone};
use std::fmt;
use std::path::PathBuf;

/// Timestamp string that names every file produced by one request.
///
/// Previews use Unix seconds (`1760443200`), voice-overs use local time
/// formatted as `%Y%m%d_%H%M%S` (`20261014_093000`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactId(String);

impl ArtifactId {
    pub const MAX_LEN: usize = 32;

    /// Accept an id coming from a URL path.
    ///
    /// Only ASCII digits and `_` are allowed, so a parsed id can never
    /// escape the artifact directories.
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = !raw.is_empty()
            && raw.len() <= Self::MAX_LEN
            && raw.chars().all(|c| c.is_ascii_digit() || c == '_');

        valid.then(|| Self(raw.to_string()))
    }

    pub fn from_unix_seconds<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self(at.timestamp().to_string())
    }

    pub fn from_local_time<Tz: TimeZone>(at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self(at.format("%Y%m%d_%H%M%S").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Short voice sample, lives in the audio directory
    Preview,
    /// Full script narration, lives in the audio directory
    Voiceover,
    /// Text file with an `.mp4` name, lives in the output directory
    Placeholder,
}

impl ArtifactKind {
    /// Lookup order used by the download endpoint
    pub const DOWNLOADABLE: [ArtifactKind; 2] = [ArtifactKind::Placeholder, ArtifactKind::Voiceover];

    pub fn file_name(&self, id: &ArtifactId) -> String {
        match self {
            ArtifactKind::Preview => format!("preview_{}.mp3", id),
            ArtifactKind::Voiceover => format!("voiceover_{}.mp3", id),
            ArtifactKind::Placeholder => format!("shorts_{}.mp4", id),
        }
    }

    /// File name offered to the client in `Content-Disposition`
    pub fn download_name(&self, id: &ArtifactId) -> String {
        match self {
            ArtifactKind::Preview => format!("preview_{}.mp3", id),
            ArtifactKind::Voiceover => format!("voiceover_{}.mp3", id),
            ArtifactKind::Placeholder => format!("youtube_short_{}.mp4", id),
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ArtifactKind::Preview | ArtifactKind::Voiceover => "audio/mpeg",
            ArtifactKind::Placeholder => "video/mp4",
        }
    }
}

/// A file that exists on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredArtifact {
    pub id: ArtifactId,
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

impl StoredArtifact {
    pub fn download_name(&self) -> String {
        self.kind.download_name(&self.id)
    }

    pub fn content_type(&self) -> &'static str {
        self.kind.content_type()
    }
}
