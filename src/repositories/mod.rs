pub mod profile;
pub mod snippet;
pub mod social;
pub mod status;

pub use profile::{
    NewProfile, ProfileCounter, ProfileFields, ProfileRepository, ProfileRepositoryTrait,
    ProfileWrite,
};
pub use snippet::{NewSnippet, SnippetRepository, SnippetRepositoryTrait};
pub use social::{NewComment, SocialRepository, SocialRepositoryTrait};
pub use status::{StatusRepository, StatusRepositoryTrait};
