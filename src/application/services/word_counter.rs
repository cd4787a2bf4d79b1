const BULLET_MARKER: &str = "•";

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Keeps at most `max_words` whitespace-separated words, preserving the
/// original spacing and line breaks up to the cut. A bullet marker left
/// dangling by the cut is dropped.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let mut words = 0;
    let mut in_word = false;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            in_word = false;
        } else if !in_word {
            if words == max_words {
                return drop_dangling_bullet(text[..idx].trim_end()).to_string();
            }
            words += 1;
            in_word = true;
        }
    }

    text.to_string()
}

fn drop_dangling_bullet(text: &str) -> &str {
    text.strip_suffix(BULLET_MARKER)
        .filter(|rest| rest.is_empty() || rest.ends_with(char::is_whitespace))
        .map(str::trim_end)
        .unwrap_or(text)
}
