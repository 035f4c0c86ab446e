//! Soft word-wrapping of display labels.

/// Default maximum line width, in characters.
pub const DEFAULT_MAX_LABEL_WIDTH: usize = 25;

/// Line break marker the renderer understands.
pub const DEFAULT_LINE_BREAK: &str = "<br>";

/// Wrap `label` into lines of at most `max` characters joined by `marker`.
///
/// Labels that already fit are returned unchanged. Otherwise words are
/// packed greedily and runs of whitespace collapse to single spaces. A word
/// longer than `max` gets a line of its own and is never split.
pub fn wrap_label(label: &str, max: usize, marker: &str) -> String {
    if label.chars().count() <= max {
        return label.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in label.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join(marker)
}
