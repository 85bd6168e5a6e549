// Publications mapping
// Maps inbound publication records from the external API into posts, and
// applies user-initiated save actions before handing posts to the caller's
// save callback. Persistence and platform delivery live behind that callback.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::post::{Platform, Post, PostStatus};
use crate::services::validation;
use crate::utils::date::truncate_chars;

/// Characters of content shown as the display title.
const TITLE_PREVIEW_CHARS: usize = 50;

/// Wire shape of a publication as returned by the publications API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationDto {
    pub id: String,
    pub content: PublicationContentDto,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub scheduled_at: DateTime<Local>,
    pub status: PostStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationContentDto {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub mentions: Vec<String>,
}

/// Map an inbound publication into the internal post shape.
///
/// Platform names are lower-cased before parsing; unknown platforms are
/// skipped with a warning rather than failing the whole feed. The display
/// title is the first 50 characters of the content text.
pub fn map_publication(dto: PublicationDto) -> Post {
    let mut platforms = Vec::new();
    for name in &dto.platforms {
        match Platform::parse(name) {
            Some(platform) if !platforms.contains(&platform) => platforms.push(platform),
            Some(_) => {}
            None => log::warn!(
                "publication {}: unknown platform '{}', skipping",
                dto.id,
                name
            ),
        }
    }

    Post {
        id: dto.id,
        title: truncate_chars(&dto.content.text, TITLE_PREVIEW_CHARS),
        content: dto.content.text,
        scheduled_time: dto.scheduled_at,
        platforms,
        status: dto.status,
        media_urls: dto.content.media,
        hashtags: dto.content.hashtags,
        mentions: dto.content.mentions,
    }
}

/// Parse a JSON array of publications into posts.
pub fn map_publications_json(json: &str) -> Result<Vec<Post>> {
    let dtos: Vec<PublicationDto> =
        serde_json::from_str(json).map_err(|err| anyhow!("invalid publications payload: {err}"))?;
    Ok(dtos.into_iter().map(map_publication).collect())
}

/// User-initiated save action for a draft post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    Schedule,
    Draft,
    Library,
    Review,
    Publish,
}

/// Callback invoked with the finalized post; the receiving system is
/// responsible for persistence and platform delivery.
pub type OnSave<'a> = dyn FnMut(&Post) + 'a;

/// Apply a save action to a post and hand it to the save callback.
///
/// `Publish` forces `status = Published` and the scheduled time to `now`.
/// `Schedule` is refused when validation reports a blocking error; all other
/// actions accept the post as-is.
pub fn apply_save_action(
    mut post: Post,
    action: SaveAction,
    now: DateTime<Local>,
    on_save: &mut OnSave<'_>,
) -> Result<Post> {
    post.status = match action {
        SaveAction::Schedule => {
            if !validation::is_valid(&post) {
                return Err(anyhow!(
                    "post cannot be scheduled while validation errors remain"
                ));
            }
            PostStatus::Scheduled
        }
        SaveAction::Draft => PostStatus::Draft,
        SaveAction::Library => PostStatus::Library,
        SaveAction::Review => PostStatus::Review,
        SaveAction::Publish => {
            post.scheduled_time = now;
            PostStatus::Published
        }
    };

    on_save(&post);
    Ok(post)
}
