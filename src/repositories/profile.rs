use crate::entities::UserProfile;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};

const PROFILE_COLUMNS: &str = "wallet_address, username, bio, followers_count, following_count, \
     snippets_count, created_at, updated_at";

/// Optional profile fields; `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub username: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub wallet_address: String,
    pub fields: ProfileFields,
}

/// A profile write, decided before touching the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileWrite {
    Insert(NewProfile),
    Patch {
        wallet_address: String,
        fields: ProfileFields,
    },
}

impl ProfileWrite {
    pub fn resolve(
        existing: Option<&UserProfile>,
        wallet_address: &str,
        fields: ProfileFields,
    ) -> Self {
        match existing {
            Some(profile) => ProfileWrite::Patch {
                wallet_address: profile.wallet_address.clone(),
                fields,
            },
            None => ProfileWrite::Insert(NewProfile {
                wallet_address: wallet_address.to_string(),
                fields,
            }),
        }
    }

    pub fn wallet_address(&self) -> &str {
        match self {
            ProfileWrite::Insert(new) => &new.wallet_address,
            ProfileWrite::Patch { wallet_address, .. } => wallet_address,
        }
    }
}

/// Denormalized counters kept on the profile row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileCounter {
    Followers,
    Following,
    Snippets,
}

impl ProfileCounter {
    fn column(self) -> &'static str {
        match self {
            ProfileCounter::Followers => "followers_count",
            ProfileCounter::Following => "following_count",
            ProfileCounter::Snippets => "snippets_count",
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    async fn find(&self, wallet_address: &str) -> Result<Option<UserProfile>>;
    async fn apply(&self, write: ProfileWrite) -> Result<UserProfile>;
    /// Adds `delta` to one counter, creating a zeroed profile first if needed.
    async fn adjust_counter(
        &self,
        wallet_address: &str,
        counter: ProfileCounter,
        delta: i64,
    ) -> Result<()>;
    /// Most followed first, then most snippets.
    async fn discover(&self, limit: i64) -> Result<Vec<UserProfile>>;
}

#[derive(Clone)]
pub struct ProfileRepository {
    pool: Pool<Postgres>,
}

impl ProfileRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    async fn find(&self, wallet_address: &str) -> Result<Option<UserProfile>> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE wallet_address = $1");

        let profile = sqlx::query_as::<_, UserProfile>(&sql)
            .bind(wallet_address)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }

    async fn apply(&self, write: ProfileWrite) -> Result<UserProfile> {
        let profile = match write {
            // A concurrent insert for the same wallet degrades to a patch.
            ProfileWrite::Insert(new) => {
                let sql = format!(
                    r#"
                    INSERT INTO profiles (wallet_address, username, bio)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (wallet_address) DO UPDATE
                      SET username   = COALESCE(EXCLUDED.username, profiles.username),
                          bio        = COALESCE(EXCLUDED.bio, profiles.bio),
                          updated_at = NOW()
                    RETURNING {PROFILE_COLUMNS}
                    "#
                );
                sqlx::query_as::<_, UserProfile>(&sql)
                    .bind(&new.wallet_address)
                    .bind(&new.fields.username)
                    .bind(&new.fields.bio)
                    .fetch_one(&self.pool)
                    .await?
            }
            ProfileWrite::Patch {
                wallet_address,
                fields,
            } => {
                let sql = format!(
                    r#"
                    UPDATE profiles
                    SET username   = COALESCE($2, username),
                        bio        = COALESCE($3, bio),
                        updated_at = NOW()
                    WHERE wallet_address = $1
                    RETURNING {PROFILE_COLUMNS}
                    "#
                );
                sqlx::query_as::<_, UserProfile>(&sql)
                    .bind(&wallet_address)
                    .bind(&fields.username)
                    .bind(&fields.bio)
                    .fetch_one(&self.pool)
                    .await?
            }
        };

        Ok(profile)
    }

    async fn adjust_counter(
        &self,
        wallet_address: &str,
        counter: ProfileCounter,
        delta: i64,
    ) -> Result<()> {
        let column = counter.column();
        let sql = format!(
            r#"
            INSERT INTO profiles (wallet_address, {column})
            VALUES ($1, $2)
            ON CONFLICT (wallet_address) DO UPDATE
              SET {column}  = profiles.{column} + EXCLUDED.{column},
                  updated_at = NOW()
            "#
        );

        sqlx::query(&sql)
            .bind(wallet_address)
            .bind(delta)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn discover(&self, limit: i64) -> Result<Vec<UserProfile>> {
        let sql = format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles
             ORDER BY followers_count DESC, snippets_count DESC
             LIMIT $1"
        );

        let profiles = sqlx::query_as::<_, UserProfile>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(username: Option<&str>) -> ProfileFields {
        ProfileFields {
            username: username.map(str::to_string),
            bio: None,
        }
    }

    #[test]
    fn test_resolve_inserts_unknown_wallet() {
        let write = ProfileWrite::resolve(None, "0xabc", fields(Some("alice")));
        assert_eq!(
            write,
            ProfileWrite::Insert(NewProfile {
                wallet_address: "0xabc".to_string(),
                fields: fields(Some("alice")),
            })
        );
    }

    #[test]
    fn test_resolve_patches_existing_profile() {
        let existing = UserProfile::empty("0xabc");
        let write = ProfileWrite::resolve(Some(&existing), "0xabc", fields(None));
        assert!(matches!(write, ProfileWrite::Patch { .. }));
        assert_eq!(write.wallet_address(), "0xabc");
    }

    #[test]
    fn test_counter_columns() {
        assert_eq!(ProfileCounter::Followers.column(), "followers_count");
        assert_eq!(ProfileCounter::Following.column(), "following_count");
        assert_eq!(ProfileCounter::Snippets.column(), "snippets_count");
    }
}
