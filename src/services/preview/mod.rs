// Preview dispatch
// Selects the preview shape for a (platform, content type) pair through a
// lookup table of builder functions, so every combination is covered
// exhaustively instead of through nested string conditionals.

use crate::models::post::{ContentType, Platform, Post};

/// Rendering parameters for a post preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSpec {
    pub platform: Platform,
    pub content_type: ContentType,
    /// width : height of the preview frame
    pub aspect_ratio: (u32, u32),
    pub requires_media: bool,
    pub caption_limit: usize,
    /// Caption as it would appear, cut to the platform's visible length.
    pub caption: String,
}

type PreviewBuilder = fn(&Post) -> PreviewSpec;

/// Build the preview spec for a post rendered as the given platform/content
/// type combination.
pub fn build_preview(post: &Post, platform: Platform, content_type: ContentType) -> PreviewSpec {
    builder_for(platform, content_type)(post)
}

/// Dispatch table keyed by (platform, content type). Exhaustive: a new
/// `Platform` or `ContentType` variant fails to compile until handled here.
fn builder_for(platform: Platform, content_type: ContentType) -> PreviewBuilder {
    match (platform, content_type) {
        (Platform::Facebook, ContentType::Post) => facebook_post,
        (Platform::Facebook, ContentType::Reel) => facebook_reel,
        (Platform::Facebook, ContentType::Story) => facebook_story,
        (Platform::Instagram, ContentType::Post) => instagram_post,
        (Platform::Instagram, ContentType::Reel) => instagram_reel,
        (Platform::Instagram, ContentType::Story) => instagram_story,
    }
}

fn spec(
    post: &Post,
    platform: Platform,
    content_type: ContentType,
    aspect_ratio: (u32, u32),
    requires_media: bool,
    caption_limit: usize,
) -> PreviewSpec {
    PreviewSpec {
        platform,
        content_type,
        aspect_ratio,
        requires_media,
        caption_limit,
        caption: post.content.chars().take(caption_limit).collect(),
    }
}

fn facebook_post(post: &Post) -> PreviewSpec {
    spec(post, Platform::Facebook, ContentType::Post, (1, 1), false, 63_206)
}

fn facebook_reel(post: &Post) -> PreviewSpec {
    spec(post, Platform::Facebook, ContentType::Reel, (9, 16), true, 63_206)
}

fn facebook_story(post: &Post) -> PreviewSpec {
    spec(post, Platform::Facebook, ContentType::Story, (9, 16), true, 0)
}

fn instagram_post(post: &Post) -> PreviewSpec {
    spec(post, Platform::Instagram, ContentType::Post, (1, 1), true, 2_200)
}

fn instagram_reel(post: &Post) -> PreviewSpec {
    spec(post, Platform::Instagram, ContentType::Reel, (9, 16), true, 2_200)
}

fn instagram_story(post: &Post) -> PreviewSpec {
    spec(post, Platform::Instagram, ContentType::Story, (9, 16), true, 0)
}
