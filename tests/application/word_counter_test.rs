use voxnote::application::services::{count_words, truncate_words};

#[test]
fn given_text_with_mixed_whitespace_when_counting_then_counts_words() {
    assert_eq!(count_words("  one\ttwo\n three  "), 3);
    assert_eq!(count_words(""), 0);
}

#[test]
fn given_text_longer_than_limit_when_truncating_then_keeps_first_words() {
    assert_eq!(truncate_words("one two three four", 2), "one two");
}

#[test]
fn given_bullet_list_when_truncating_then_preserves_line_breaks() {
    let text = "• first point here\n• second point";
    assert_eq!(truncate_words(text, 6), "• first point here\n• second");
}

#[test]
fn given_cut_landing_on_bullet_marker_when_truncating_then_drops_dangling_marker() {
    let text = "• First sentence here is long\n• Second sentence follows";

    let truncated = truncate_words(text, 7);

    assert_eq!(truncated, "• First sentence here is long");
    assert_eq!(count_words(&truncated), 6);
}

#[test]
fn given_text_within_limit_when_truncating_then_returns_it_unchanged() {
    assert_eq!(truncate_words("short text", 10), "short text");
}
