use reqwest::StatusCode;
use url::Url;

/// A successfully downloaded and decoded HTML page.
#[derive(Debug)]
pub struct FetchedPage {
    pub url_final: Url,
    pub status: StatusCode,
    pub encoding: &'static str,
    pub body: String,
}
