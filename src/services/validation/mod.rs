// Content validation engine
// Pure rule evaluation over a draft post; recomputed on every field change

use crate::models::post::{Platform, Post};
use crate::models::validation::{LogEntry, LogKind};

/// Facebook's post character limit.
const FACEBOOK_CONTENT_LIMIT: usize = 63_206;

/// Hashtag count beyond which reach tends to drop.
const HASHTAG_WARNING_THRESHOLD: usize = 30;

/// Evaluate every validation rule against the post.
///
/// Rules are independent; no rule short-circuits another, and all applicable
/// messages are emitted together. The order of entries is presentation order
/// only, not priority.
pub fn generate_logs(post: &Post) -> Vec<LogEntry> {
    let mut logs = Vec::new();

    if post.platforms.is_empty() {
        logs.push(LogEntry::error("At least one platform is required"));
    }

    if post.content.trim().is_empty() {
        logs.push(LogEntry::error("Text or a visual asset is required"));
    }

    if post.has_platform(Platform::Instagram) && post.media_urls.is_empty() {
        logs.push(LogEntry::warning(
            "Instagram posts need at least one image or video",
        ));
    }

    if post.has_platform(Platform::Facebook) && post.content.len() > FACEBOOK_CONTENT_LIMIT {
        logs.push(LogEntry::warning(format!(
            "Content exceeds Facebook's {} character limit",
            FACEBOOK_CONTENT_LIMIT
        )));
    }

    let hashtag_count = post.hashtag_count();
    if hashtag_count > HASHTAG_WARNING_THRESHOLD {
        logs.push(LogEntry::warning(format!(
            "{} hashtags may reduce reach, consider using fewer",
            hashtag_count
        )));
    }

    if post.content.contains("http") {
        logs.push(LogEntry::info(
            "Link detected, it will be shortened automatically",
        ));
    }

    logs
}

/// A post is valid iff no rule reported an error. Warnings and info never
/// block submission.
pub fn is_valid(post: &Post) -> bool {
    generate_logs(post)
        .iter()
        .all(|entry| entry.kind != LogKind::Error)
}
