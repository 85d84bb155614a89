//! Headline tokenization.

use super::stopwords::is_stop_word;
use regex::Regex;
use std::sync::LazyLock;

/// Two or more Unicode word characters between word boundaries.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?u)\b\w\w+\b").expect("token pattern is valid"));

/// Split `text` into retained terms, in order of appearance.
///
/// Text is lower-cased first. A token is kept when it has at least one
/// alphabetic character and is not an English stop word, so `"2024"` and
/// `"the"` are dropped while `"covid19"` survives.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|tok| tok.chars().any(char::is_alphabetic))
        .filter(|tok| !is_stop_word(tok))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_drops_stop_words() {
        assert_eq!(
            tokenize("The Markets Fall Sharply"),
            vec!["markets", "fall", "sharply"]
        );
    }

    #[test]
    fn drops_single_characters_and_numbers() {
        assert_eq!(tokenize("A 2024 plan: 5 x wins"), vec!["plan", "wins"]);
    }

    #[test]
    fn keeps_alphanumeric_mix_and_splits_punctuation() {
        assert_eq!(
            tokenize("Covid19 rules -- UK's new-look cabinet"),
            vec!["covid19", "rules", "uk", "new", "look", "cabinet"]
        );
    }

    #[test]
    fn empty_and_stop_word_only_titles_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("Where is it?").is_empty());
    }
}
