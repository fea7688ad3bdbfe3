use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of UTF-16 code units in a YouTube video identifier.
pub const VIDEO_ID_LEN: usize = 11;

// `[^\n\r\x{2028}\x{2029}]` is "any character" as browsers define it for `.`
static YOUTUBE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[^\n\r\x{2028}\x{2029}]*",
        r"(youtu[^\n\r\x{2028}\x{2029}]be/|v/|u/[0-9A-Za-z_]/|embed/|watch\?v=|&v=)",
        r"([^#&?]*)",
    ))
    .expect("video link pattern should compile")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VideoError {
    #[error("Video id must be 11 characters, got {0}")]
    InvalidLength(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}?autoplay=1", self.0)
    }

    pub fn thumbnail_url(&self) -> String {
        format!("https://img.youtube.com/vi/{}/hqdefault.jpg", self.0)
    }
}

impl TryFrom<&str> for VideoId {
    type Error = VideoError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // identifier length is counted the way browsers count string length
        let len = value.encode_utf16().count();
        if len != VIDEO_ID_LEN {
            return Err(VideoError::InvalidLength(len));
        }
        Ok(Self(value.to_string()))
    }
}

impl TryFrom<String> for VideoId {
    type Error = VideoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<VideoId> for String {
    fn from(value: VideoId) -> Self {
        value.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoReference {
    Resolved { id: VideoId, embed_url: String },
    Unrecognized,
}

impl VideoReference {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    pub fn id(&self) -> Option<&VideoId> {
        match self {
            Self::Resolved { id, .. } => Some(id),
            Self::Unrecognized => None,
        }
    }

    pub fn embed_url(&self) -> Option<&str> {
        match self {
            Self::Resolved { embed_url, .. } => Some(embed_url),
            Self::Unrecognized => None,
        }
    }
}

impl From<VideoId> for VideoReference {
    fn from(id: VideoId) -> Self {
        let embed_url = id.embed_url();
        Self::Resolved { id, embed_url }
    }
}

/// Extract the video id from a YouTube link.
///
/// Handles short links, `/v/`, `/u/<user>/`, `/embed/`, `watch?v=` and `&v=` forms.
/// Anything else, including an absent or empty link, is [`VideoReference::Unrecognized`].
pub fn resolve(url: Option<&str>) -> VideoReference {
    let url = match url {
        Some(url) if !url.is_empty() => url,
        _ => return VideoReference::Unrecognized,
    };
    let Some(candidate) = YOUTUBE_LINK.captures(url).and_then(|caps| caps.get(2)) else {
        log::trace!("not a video link: {url}");
        return VideoReference::Unrecognized;
    };
    match VideoId::try_from(candidate.as_str()) {
        Ok(id) => id.into(),
        Err(e) => {
            log::debug!("rejecting video link {url}: {e}");
            VideoReference::Unrecognized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RICK: &str = "dQw4w9WgXcQ";

    fn resolved_id(url: &str) -> Option<String> {
        resolve(Some(url)).id().map(|id| id.to_string())
    }

    #[test]
    fn test_absent_and_malformed() {
        assert_eq!(resolve(None), VideoReference::Unrecognized);
        assert_eq!(resolve(Some("")), VideoReference::Unrecognized);
        assert_eq!(resolve(Some("not a url")), VideoReference::Unrecognized);
        assert_eq!(resolve(Some("https://example.com/page")), VideoReference::Unrecognized);
    }

    #[test]
    fn test_line_terminators_before_link() {
        for junk in ["junk\r", "junk\n", "junk\u{2028}", "junk\u{2029}"] {
            let url = format!("{junk}https://youtu.be/dQw4w9WgXcQ");
            assert_eq!(resolve(Some(&url)), VideoReference::Unrecognized, "{url:?}");
        }
        // after the id only the query/fragment delimiters end the capture
        assert_eq!(
            resolved_id("https://youtu.be/dQw4w9WgXcQ?t=1\r\nrest").as_deref(),
            Some(RICK)
        );
        assert_eq!(
            resolve(Some("https://youtu.be/dQw4w9WgXcQ\r\n")),
            VideoReference::Unrecognized
        );
        assert_eq!(
            resolve(Some("https://youtu\rbe/dQw4w9WgXcQ")),
            VideoReference::Unrecognized
        );
    }

    #[test]
    fn test_watch_url() {
        let r = resolve(Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(r.is_resolved());
        assert_eq!(r.id().map(VideoId::as_str), Some(RICK));
        assert_eq!(
            r.embed_url(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1")
        );
    }

    #[test]
    fn test_url_forms_are_equivalent() {
        let forms = [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://www.youtube.com/u/w/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://youtu.be/dQw4w9WgXcQ?si=abc#frag",
        ];
        for form in forms {
            assert_eq!(resolved_id(form).as_deref(), Some(RICK), "{form}");
        }
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(resolve(Some("https://youtu.be/dQw4w9")), VideoReference::Unrecognized);
        assert_eq!(
            resolve(Some("https://youtu.be/dQw4w9WgXcQQ")),
            VideoReference::Unrecognized
        );
        assert_eq!(
            resolve(Some("https://www.youtube.com/watch?v=")),
            VideoReference::Unrecognized
        );
    }

    #[test]
    fn test_pure() {
        let url = "https://youtu.be/dQw4w9WgXcQ";
        assert_eq!(resolve(Some(url)), resolve(Some(url)));
    }

    #[test]
    fn test_video_id() {
        assert_eq!(VideoId::try_from("short"), Err(VideoError::InvalidLength(5)));
        let id = VideoId::try_from(RICK).unwrap();
        assert_eq!(
            id.thumbnail_url(),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
        assert_eq!(VideoReference::from(id.clone()).id(), Some(&id));
    }

    #[test]
    fn test_video_id_serde() {
        let id: VideoId = serde_json::from_str(&format!("\"{RICK}\"")).unwrap();
        assert_eq!(id.as_str(), RICK);
        assert!(serde_json::from_str::<VideoId>("\"abc\"").is_err());
    }
}
