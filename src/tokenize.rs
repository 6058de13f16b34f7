//! Tokenization for alignment.
//!
//! Word-level metrics split on Unicode whitespace and keep case and
//! punctuation untouched, so scores reflect the raw transcripts. The
//! character-level tokenizer feeds CER: every non-whitespace character is a
//! token and whitespace is discarded, the conventional CER definition.

/// Split `text` into word tokens. Runs of whitespace produce no empty tokens.
#[must_use]
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split `text` into character tokens, dropping all whitespace.
#[must_use]
pub fn chars(text: &str) -> Vec<char> {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_splits_on_any_whitespace() {
        assert_eq!(words("the cat  sat\t on\nthe mat"), vec![
            "the", "cat", "sat", "on", "the", "mat"
        ]);
    }

    #[test]
    fn words_preserves_case_and_punctuation() {
        assert_eq!(words("Hello, World!"), vec!["Hello,", "World!"]);
    }

    #[test]
    fn words_of_empty_or_blank_text_is_empty() {
        assert!(words("").is_empty());
        assert!(words("   \t\n  ").is_empty());
    }

    #[test]
    fn chars_drops_whitespace_only() {
        assert_eq!(chars("a b\tc"), vec!['a', 'b', 'c']);
        assert_eq!(chars("héllo wörld"), vec![
            'h', 'é', 'l', 'l', 'o', 'w', 'ö', 'r', 'l', 'd'
        ]);
    }

    #[test]
    fn chars_of_blank_text_is_empty() {
        assert!(chars(" \n ").is_empty());
    }
}
