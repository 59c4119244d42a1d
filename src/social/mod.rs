pub mod dtos;
pub mod handlers;
pub mod service;

pub use service::{FollowOutcome, SocialGraph, UnfollowOutcome};
