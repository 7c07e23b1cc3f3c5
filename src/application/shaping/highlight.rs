// src/application/shaping/highlight.rs
use crate::application::dto::ArticleView;

pub const EMPHASIS_OPEN: &str = "<b>";
pub const EMPHASIS_CLOSE: &str = "</b>";

/// Returns copies of `articles` where the first case-insensitive occurrence
/// of `query` in each title is wrapped in `<b>…</b>`, keeping the title's own
/// casing. Titles without a match are copied unchanged.
///
/// An empty query matches the empty span at the start of every title, which
/// yields a leading `<b></b>`.
pub fn highlight(articles: &[ArticleView], query: &str) -> Vec<ArticleView> {
    articles
        .iter()
        .map(|article| {
            let mut copy = article.clone();
            if let Some(title) = highlight_title(&article.title, query) {
                copy.title = title;
            }
            copy
        })
        .collect()
}

pub fn highlight_title(title: &str, query: &str) -> Option<String> {
    let (start, end) = find_ignore_case(title, query)?;
    Some(format!(
        "{}{EMPHASIS_OPEN}{}{EMPHASIS_CLOSE}{}",
        &title[..start],
        &title[start..end],
        &title[end..]
    ))
}

/// Byte range of the first case-insensitive occurrence of `needle`.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return Some((0, 0));
    }

    haystack.char_indices().find_map(|(start, _)| {
        matched_len(&haystack[start..], needle).map(|len| (start, start + len))
    })
}

// Compares char by char so the match length is measured on the original
// text even when lowercasing changes byte lengths.
fn matched_len(candidate: &str, needle: &str) -> Option<usize> {
    let mut rest = candidate.char_indices();
    let mut consumed = 0;

    for expected in needle.chars() {
        let (offset, actual) = rest.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        consumed = offset + actual.len_utf8();
    }

    Some(consumed)
}
