// Text helpers shared by the input and output panels.

/// Number of whitespace-separated words in `text`. Blank text has none.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_has_no_words() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
    }

    #[test]
    fn test_counts_across_mixed_whitespace() {
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("  one two\tthree\n\nfour  "), 4);
    }
}
