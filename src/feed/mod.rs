pub mod composer;
pub mod handlers;

pub use composer::{FeedComposer, FeedItem, FeedPage, FeedWindow};
