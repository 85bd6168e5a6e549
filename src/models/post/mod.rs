// Post module
// Social media post model shared by the scheduler and validation engine

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Target social platform for a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
}

impl Platform {
    /// Canonical lower-case name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
        }
    }

    /// Parse a platform name, case-insensitive.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "facebook" => Some(Platform::Facebook),
            "instagram" => Some(Platform::Instagram),
            _ => None,
        }
    }
}

/// Lifecycle status of a post. Set only by explicit user action, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Scheduled,
    Published,
    Library,
    Review,
}

/// Content format a post is previewed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Post,
    Reel,
    Story,
}

/// A draft or scheduled social media post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Empty string denotes an unsaved draft
    pub id: String,
    pub title: String,
    pub content: String,
    pub scheduled_time: DateTime<Local>,
    pub platforms: Vec<Platform>,
    pub status: PostStatus,
    pub media_urls: Vec<String>,
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
}

impl Post {
    /// Create a new draft post with the given content and scheduled time.
    ///
    /// # Examples
    /// ```
    /// use postplan::models::post::Post;
    /// use chrono::Local;
    ///
    /// let post = Post::new("Launch day!", Local::now());
    /// assert!(post.id.is_empty());
    /// ```
    pub fn new(content: impl Into<String>, scheduled_time: DateTime<Local>) -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            content: content.into(),
            scheduled_time,
            platforms: Vec::new(),
            status: PostStatus::Draft,
            media_urls: Vec::new(),
            hashtags: Vec::new(),
            mentions: Vec::new(),
        }
    }

    /// Create a builder for constructing posts with optional fields
    pub fn builder() -> PostBuilder {
        PostBuilder::new()
    }

    /// Check whether this post is an unsaved draft (no server-side id yet).
    pub fn is_unsaved(&self) -> bool {
        self.id.is_empty()
    }

    /// Check whether a platform is currently selected.
    pub fn has_platform(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    /// Toggle a platform's membership. Order of `platforms` is irrelevant.
    pub fn toggle_platform(&mut self, platform: Platform) {
        if let Some(index) = self.platforms.iter().position(|p| *p == platform) {
            self.platforms.remove(index);
        } else {
            self.platforms.push(platform);
        }
    }

    /// Count literal `#` characters in the content.
    pub fn hashtag_count(&self) -> usize {
        self.content.chars().filter(|c| *c == '#').count()
    }
}

/// Builder for creating posts with optional fields
pub struct PostBuilder {
    id: Option<String>,
    title: Option<String>,
    content: Option<String>,
    scheduled_time: Option<DateTime<Local>>,
    platforms: Vec<Platform>,
    status: PostStatus,
    media_urls: Vec<String>,
    hashtags: Vec<String>,
    mentions: Vec<String>,
}

impl PostBuilder {
    /// Create a new post builder
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            content: None,
            scheduled_time: None,
            platforms: Vec::new(),
            status: PostStatus::Draft,
            media_urls: Vec::new(),
            hashtags: Vec::new(),
            mentions: Vec::new(),
        }
    }

    /// Set the server-side id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the display title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the post content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the scheduled time
    pub fn scheduled_time(mut self, scheduled_time: DateTime<Local>) -> Self {
        self.scheduled_time = Some(scheduled_time);
        self
    }

    /// Add a target platform
    pub fn platform(mut self, platform: Platform) -> Self {
        if !self.platforms.contains(&platform) {
            self.platforms.push(platform);
        }
        self
    }

    /// Set the post status
    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    /// Add an attached media reference
    pub fn media_url(mut self, url: impl Into<String>) -> Self {
        self.media_urls.push(url.into());
        self
    }

    /// Set the annotated hashtag list
    pub fn hashtags(mut self, hashtags: Vec<String>) -> Self {
        self.hashtags = hashtags;
        self
    }

    /// Set the annotated mention list
    pub fn mentions(mut self, mentions: Vec<String>) -> Self {
        self.mentions = mentions;
        self
    }

    /// Build the post
    pub fn build(self) -> Result<Post, String> {
        let content = self.content.ok_or("Post content is required")?;
        let scheduled_time = self.scheduled_time.ok_or("Post scheduled time is required")?;

        Ok(Post {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            content,
            scheduled_time,
            platforms: self.platforms,
            status: self.status,
            media_urls: self.media_urls,
            hashtags: self.hashtags,
            mentions: self.mentions,
        })
    }
}

impl Default for PostBuilder {
    fn default() -> Self {
        Self::new()
    }
}
