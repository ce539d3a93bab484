const NBSP: &str = "\u{a0}";

/// Splits `text` into one span per character, swapping spaces for
/// non-breaking ones so the spans keep their width.
pub fn split_chars(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| if c == ' ' { NBSP.to_string() } else { c.to_string() })
        .collect()
}

/// Splits on whitespace, keeping every word as its own span.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_characters_keeping_spaces() {
        assert_eq!(split_chars("Hi yo"), vec!["H", "i", "\u{a0}", "y", "o"]);
        assert!(split_chars("").is_empty());
    }

    #[test]
    fn splits_words() {
        assert_eq!(split_words("  Let's   build it "), vec!["Let's", "build", "it"]);
    }
}
