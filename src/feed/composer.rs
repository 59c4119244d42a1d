use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::{
    entities::SnippetMetadata,
    repositories::{ProfileRepositoryTrait, SnippetRepositoryTrait, SocialRepositoryTrait},
};

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

/// A public snippet plus author and engagement data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedItem {
    #[serde(flatten)]
    pub snippet: SnippetMetadata,
    pub username: Option<String>,
    pub likes_count: i64,
    pub comments_count: i64,
    pub is_liked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedPage {
    pub feed: Vec<FeedItem>,
    /// True when the page came back full; a full last page still reports true.
    pub has_more: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedWindow {
    pub skip: i64,
    pub limit: i64,
}

impl FeedWindow {
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            skip: skip.unwrap_or(0).max(0),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }
}

impl Default for FeedWindow {
    fn default() -> Self {
        Self::new(None, None)
    }
}

pub struct FeedComposer<'a> {
    snippets: &'a dyn SnippetRepositoryTrait,
    profiles: &'a dyn ProfileRepositoryTrait,
    social: &'a dyn SocialRepositoryTrait,
}

impl<'a> FeedComposer<'a> {
    pub fn new(
        snippets: &'a dyn SnippetRepositoryTrait,
        profiles: &'a dyn ProfileRepositoryTrait,
        social: &'a dyn SocialRepositoryTrait,
    ) -> Self {
        Self {
            snippets,
            profiles,
            social,
        }
    }

    #[instrument(skip(self))]
    pub async fn public_feed(&self, window: FeedWindow, viewer: Option<&str>) -> Result<FeedPage> {
        let snippets = self.snippets.list_public(window.skip, window.limit).await?;
        let has_more = snippets.len() as i64 == window.limit;

        let mut feed = Vec::with_capacity(snippets.len());
        for snippet in snippets {
            feed.push(self.decorate(snippet, viewer).await?);
        }

        Ok(FeedPage { feed, has_more })
    }

    async fn decorate(&self, snippet: SnippetMetadata, viewer: Option<&str>) -> Result<FeedItem> {
        let username = self
            .profiles
            .find(&snippet.wallet_address)
            .await?
            .and_then(|profile| profile.username);
        let likes_count = self.social.count_likes(&snippet.storage_id).await?;
        let comments_count = self.social.count_comments(&snippet.storage_id).await?;
        let is_liked = match viewer {
            Some(viewer) => self.social.like_exists(viewer, &snippet.storage_id).await?,
            None => false,
        };

        Ok(FeedItem {
            snippet,
            username,
            likes_count,
            comments_count,
            is_liked,
        })
    }
}
