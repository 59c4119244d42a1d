pub mod cleaner;
pub mod model;
pub mod reader;

#[cfg(test)]
mod tests;

pub use model::ExtractedSnippet;

use scraper::Html;
use tracing::{info, instrument};

use crate::fetcher::{FetchError, fetch};

/// Build a snippet from an already downloaded document.
pub fn extract(html: &str, url: &str) -> ExtractedSnippet {
    let document = Html::parse_document(html);

    let title = reader::extract_title(&document);
    let text = cleaner::clean_text(&reader::extract_main_text(&document));

    ExtractedSnippet {
        url: url.to_string(),
        title,
        snippet: cleaner::truncate_snippet(&text),
    }
}

/// Fetch `url` and extract its title and main-content snippet.
#[instrument(skip_all, fields(url = %url))]
pub async fn extract_from_url(url: &str) -> Result<ExtractedSnippet, FetchError> {
    let page = fetch(url).await?;
    let snippet = extract(&page.body, url);
    info!(
        final_url = %page.url_final,
        status = page.status.as_u16(),
        encoding = page.encoding,
        title = %snippet.title,
        snippet_chars = snippet.snippet.chars().count(),
        "snippet extracted"
    );
    Ok(snippet)
}
