const MIN_HIGHLIGHT_CHARS: usize = 10;
const MAX_HIGHLIGHTS: usize = 7;
const MIN_HIGHLIGHTS: usize = 3;

/// Picks the sentences worth echoing back to the writer.
///
/// Sentences are split on runs of `.`, `!` and `?`, trimmed, and kept when
/// longer than ten characters. More than seven are cut to the first seven.
/// Fewer than three yield the tail from index three, which is always empty.
pub fn extract_highlights(text: &str) -> Vec<String> {
    let sentences: Vec<String> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_HIGHLIGHT_CHARS)
        .map(str::to_owned)
        .collect();

    if sentences.len() > MAX_HIGHLIGHTS {
        sentences.into_iter().take(MAX_HIGHLIGHTS).collect()
    } else if sentences.len() < MIN_HIGHLIGHTS {
        sentences.into_iter().skip(MIN_HIGHLIGHTS).collect()
    } else {
        sentences
    }
}
