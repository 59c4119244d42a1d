pub mod app_state;
pub mod config;
pub mod entities;
pub mod error;
pub mod extractor;
pub mod feed;
pub mod fetcher;
pub mod gateway;
pub mod health;
pub mod repositories;
pub mod routes;
pub mod snippets;
pub mod social;
pub mod status;
pub mod summarizer;
pub mod users;
