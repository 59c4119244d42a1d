use crate::{
    config::{Config, StorageMode},
    gateway::{HttpGateway, MockGateway, StorageGateway},
    repositories::{
        ProfileRepository, ProfileRepositoryTrait, SnippetRepository, SnippetRepositoryTrait,
        SocialRepository, SocialRepositoryTrait, StatusRepository, StatusRepositoryTrait,
    },
    summarizer::{AnthropicSummarizer, Summarizer},
};
use sqlx::{Pool, Postgres};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub snippet_repo: Arc<dyn SnippetRepositoryTrait>,
    pub profile_repo: Arc<dyn ProfileRepositoryTrait>,
    pub social_repo: Arc<dyn SocialRepositoryTrait>,
    pub status_repo: Arc<dyn StatusRepositoryTrait>,
    pub summarizer: Arc<dyn Summarizer>,
    pub gateway: Arc<dyn StorageGateway>,
    pub db_pool: Pool<Postgres>,
}

impl AppState {
    pub fn new(pool: Pool<Postgres>, config: &Config) -> Self {
        let gateway: Arc<dyn StorageGateway> = match config.storage_mode() {
            StorageMode::Http => Arc::new(HttpGateway::new(
                config.storage_node_url(),
                config.storage_gateway_url(),
            )),
            StorageMode::Mock => Arc::new(MockGateway::new(config.storage_gateway_url())),
        };

        Self {
            snippet_repo: Arc::new(SnippetRepository::new(pool.clone())),
            profile_repo: Arc::new(ProfileRepository::new(pool.clone())),
            social_repo: Arc::new(SocialRepository::new(pool.clone())),
            status_repo: Arc::new(StatusRepository::new(pool.clone())),
            summarizer: Arc::new(AnthropicSummarizer::new(
                config.claude_api_key().map(str::to_string),
                config.llm_model(),
                config.llm_base_url(),
            )),
            gateway,
            db_pool: pool,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::{
        gateway::client::MockStorageGateway,
        repositories::{
            profile::MockProfileRepositoryTrait, snippet::MockSnippetRepositoryTrait,
            social::MockSocialRepositoryTrait, status::MockStatusRepositoryTrait,
        },
        summarizer::client::MockSummarizer,
    };

    /// State built from mocks. Anything left unset has no expectations, so
    /// touching it fails the test.
    #[derive(Default)]
    pub struct MockState {
        pub snippets: Option<MockSnippetRepositoryTrait>,
        pub profiles: Option<MockProfileRepositoryTrait>,
        pub social: Option<MockSocialRepositoryTrait>,
        pub status: Option<MockStatusRepositoryTrait>,
        pub summarizer: Option<MockSummarizer>,
        pub gateway: Option<MockStorageGateway>,
    }

    impl MockState {
        pub fn build(self) -> AppState {
            AppState {
                snippet_repo: Arc::new(self.snippets.unwrap_or_default()),
                profile_repo: Arc::new(self.profiles.unwrap_or_default()),
                social_repo: Arc::new(self.social.unwrap_or_default()),
                status_repo: Arc::new(self.status.unwrap_or_default()),
                summarizer: Arc::new(self.summarizer.unwrap_or_default()),
                gateway: Arc::new(self.gateway.unwrap_or_default()),
                db_pool: Pool::<Postgres>::connect_lazy("postgresql://dummy")
                    .expect("lazy pool"),
            }
        }
    }
}
