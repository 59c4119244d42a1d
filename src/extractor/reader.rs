use scraper::{ElementRef, Html, Node, Selector};

pub const NO_TITLE: &str = "No title found";

/// Subtrees that never contribute text.
const IGNORED_TAGS: [&str; 6] = ["script", "style", "nav", "header", "footer", "aside"];

/// Main-content regions, most specific first. The first selector with any
/// match wins.
const CONTENT_SELECTORS: [&str; 9] = [
    "article",
    "main",
    ".content",
    ".post",
    ".entry-content",
    ".article-body",
    ".story-body",
    ".post-content",
    "#content",
];

/// Text of the document's `<title>`. Headings and social meta tags are not
/// consulted.
pub fn extract_title(document: &Html) -> String {
    first_text(document, "title").unwrap_or_else(|| NO_TITLE.to_string())
}

/// Raw (uncleaned) text of the main content area, or of the whole body when
/// no content selector matches.
pub fn extract_main_text(document: &Html) -> String {
    for selector_str in CONTENT_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };

        let texts: Vec<String> = document
            .select(&selector)
            .filter(|element| !inside_ignored(*element))
            .map(visible_text)
            .collect();

        if !texts.is_empty() {
            let joined = texts.join(" ");
            if !joined.trim().is_empty() {
                return joined;
            }
            break;
        }
    }

    if let Ok(body_selector) = Selector::parse("body")
        && let Some(body) = document.select(&body_selector).next()
    {
        return visible_text(body);
    }

    String::new()
}

fn first_text(document: &Html, selector_str: &str) -> Option<String> {
    let selector = Selector::parse(selector_str).ok()?;
    document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .find(|text| !text.is_empty())
}

fn visible_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_visible_text(element, &mut out);
    out
}

fn collect_visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if IGNORED_TAGS.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_visible_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}

fn inside_ignored(element: ElementRef<'_>) -> bool {
    IGNORED_TAGS.contains(&element.value().name())
        || element.ancestors().any(|node| {
            node.value()
                .as_element()
                .is_some_and(|el| IGNORED_TAGS.contains(&el.name()))
        })
}
