use anyhow::Result;
use tracing::{info, instrument};

use crate::{
    entities::Comment,
    repositories::{NewComment, ProfileCounter, ProfileRepositoryTrait, SocialRepositoryTrait},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowOutcome {
    Followed,
    AlreadyFollowing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnfollowOutcome {
    Unfollowed,
    NotFollowing,
}

/// Follow edges, likes and comments over the repositories. Counter updates
/// are separate statements and are not transactional with the edge write.
pub struct SocialGraph<'a> {
    profiles: &'a dyn ProfileRepositoryTrait,
    social: &'a dyn SocialRepositoryTrait,
}

impl<'a> SocialGraph<'a> {
    pub fn new(
        profiles: &'a dyn ProfileRepositoryTrait,
        social: &'a dyn SocialRepositoryTrait,
    ) -> Self {
        Self { profiles, social }
    }

    #[instrument(skip(self))]
    pub async fn follow(&self, follower: &str, following: &str) -> Result<FollowOutcome> {
        if !self.social.insert_follow(follower, following).await? {
            return Ok(FollowOutcome::AlreadyFollowing);
        }

        self.profiles
            .adjust_counter(follower, ProfileCounter::Following, 1)
            .await?;
        self.profiles
            .adjust_counter(following, ProfileCounter::Followers, 1)
            .await?;

        info!("follow edge created");
        Ok(FollowOutcome::Followed)
    }

    #[instrument(skip(self))]
    pub async fn unfollow(&self, follower: &str, following: &str) -> Result<UnfollowOutcome> {
        if !self.social.delete_follow(follower, following).await? {
            return Ok(UnfollowOutcome::NotFollowing);
        }

        self.profiles
            .adjust_counter(follower, ProfileCounter::Following, -1)
            .await?;
        self.profiles
            .adjust_counter(following, ProfileCounter::Followers, -1)
            .await?;

        info!("follow edge removed");
        Ok(UnfollowOutcome::Unfollowed)
    }

    /// Returns whether the snippet is liked after the call.
    #[instrument(skip(self))]
    pub async fn toggle_like(&self, user_address: &str, snippet_id: &str) -> Result<bool> {
        if self.social.delete_like(user_address, snippet_id).await? {
            return Ok(false);
        }
        self.social.insert_like(user_address, snippet_id).await?;
        Ok(true)
    }

    pub async fn comment(&self, comment: NewComment) -> Result<Comment> {
        self.social.insert_comment(comment).await
    }

    pub async fn comments(&self, snippet_id: &str) -> Result<Vec<Comment>> {
        self.social.list_comments(snippet_id).await
    }
}
