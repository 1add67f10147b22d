use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::{GalleryError, Result};

static VIDEO_ID_REGEX: OnceLock<Regex> = OnceLock::new();

// ════════════════════════════════════════════════════════════════════
// Media
// ════════════════════════════════════════════════════════════════════

/// The visual attached to an item. At most one per item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Media {
    /// A thumbnail or screenshot.
    Image { url: String },
    /// An externally hosted video, by its ID.
    Video { id: String },
    /// Inline content the rendering surface draws itself.
    Custom { content: String },
}

impl Media {
    pub fn image(url: impl Into<String>) -> Self {
        Media::Image { url: url.into() }
    }

    /// Build a video reference from a share/watch/embed URL.
    /// Returns `None` when no video ID can be found.
    pub fn video_from_url(url: &str) -> Option<Self> {
        video_id(url).map(|id| Media::Video { id })
    }
}

/// Extract the video ID from `youtu.be/<id>`, `watch?v=<id>`, `embed/<id>`
/// and `shorts/<id>` links.
pub fn video_id(url: &str) -> Option<String> {
    let re = VIDEO_ID_REGEX.get_or_init(|| {
        Regex::new(
            r"(?:youtu\.be/|youtube\.com/(?:watch\?(?:.*&)?v=|embed/|shorts/))([A-Za-z0-9_-]{6,})",
        )
        .expect("Invalid Video ID Regex")
    });
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

// ════════════════════════════════════════════════════════════════════
// Item
// ════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectStatus {
    Released,
    ActiveDevelopment,
    Unreleased,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Released => "Released",
            ProjectStatus::ActiveDevelopment => "Active Development",
            ProjectStatus::Unreleased => "Unreleased",
        }
    }
}

/// One showcased work unit. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    status: Option<ProjectStatus>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    media: Option<Media>,
    #[serde(default)]
    external_link: Option<String>,
}

impl Item {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(GalleryError::InvalidArgument(
                "item title must not be empty".to_string(),
            ));
        }

        Ok(Self::trusted(title, description))
    }

    /// Skips title validation. Only for the compiled-in showcase.
    pub(crate) fn trusted(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            role: None,
            status: None,
            tags: Vec::new(),
            media: None,
            external_link: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Tags render left-to-right in the order given.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.external_link = Some(link.into());
        self
    }

    /// Deserialized items skip the constructor, so config loading calls this.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(GalleryError::InvalidArgument(
                "item title must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn status(&self) -> Option<ProjectStatus> {
        self.status
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn media(&self) -> Option<&Media> {
        self.media.as_ref()
    }

    pub fn external_link(&self) -> Option<&str> {
        self.external_link.as_deref()
    }
}
