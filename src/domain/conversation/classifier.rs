//! Intent classification and name extraction.
//!
//! Deliberately simple: every check is a case-insensitive substring test
//! against a fixed keyword list. The lists overlap with everyday words
//! ("someone" contains "one", "agenda" contains "nda"); which route wins is
//! decided by the order the rule tables consult them, not here.

/// Name used when the user gives us nothing to work with.
pub const NAME_PLACEHOLDER: &str = "Friend";

/// Lead-ins stripped before taking the name token, checked in this order.
pub const NAME_PREFIXES: [&str; 5] = ["my name is", "i'm", "i am", "call me", "it's"];

/// Triage answers that ask for a human lawyer.
pub const HUMAN_KEYWORDS: &[&str] = &[
    "1",
    "one",
    "human",
    "lawyer",
    "attorney",
    "real person",
    "free advice",
    "actual lawyer",
    "person",
    "advice",
];

/// Triage answers that pick the AI assistant.
pub const AI_KEYWORDS: &[&str] = &[
    "2",
    "two",
    "ai",
    "instant",
    "bot",
    "you",
    "legalgram",
    "chatbot",
    "assistant",
];

/// Messages that pull a human-route user back to the AI assistant.
pub const SWITCH_TO_AI_KEYWORDS: &[&str] = &[
    "ai",
    "2",
    "document",
    "template",
    "contract",
    "bot",
    "chatbot",
    "assistant",
    "legalgram",
];

/// First keyword (in list order) occurring anywhere in the message.
pub fn first_keyword<'k>(message: &str, keywords: &[&'k str]) -> Option<&'k str> {
    let lowered = message.to_lowercase();
    keywords.iter().copied().find(|kw| lowered.contains(kw))
}

/// True if any keyword occurs in the message.
pub fn contains_any(message: &str, keywords: &[&str]) -> bool {
    first_keyword(message, keywords).is_some()
}

/// Pulls a display name out of a free-text introduction.
///
/// Takes the first word, unless the message opens with one of
/// [`NAME_PREFIXES`], in which case the first word after the prefix is used.
/// Blank input, or a prefix with nothing after it, yields
/// [`NAME_PLACEHOLDER`].
pub fn extract_name(message: &str) -> String {
    let trimmed = message.trim();
    let Some(first_word) = trimmed.split_whitespace().next() else {
        return NAME_PLACEHOLDER.to_string();
    };

    let lowered = trimmed.to_lowercase();
    for prefix in NAME_PREFIXES {
        if let Some(rest) = lowered.strip_prefix(prefix) {
            return rest
                .split_whitespace()
                .next()
                .map(capitalize)
                .unwrap_or_else(|| NAME_PLACEHOLDER.to_string());
        }
    }

    capitalize(first_word)
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod name_extraction {
        use super::*;

        #[test]
        fn single_word_is_the_name() {
            assert_eq!(extract_name("John"), "John");
        }

        #[test]
        fn first_word_is_title_cased() {
            assert_eq!(extract_name("mARY jane"), "Mary");
        }

        #[test]
        fn my_name_is_prefix_is_stripped() {
            assert_eq!(extract_name("my name is alexander"), "Alexander");
        }

        #[test]
        fn prefixes_match_case_insensitively() {
            assert_eq!(extract_name("I'm sarah"), "Sarah");
            assert_eq!(extract_name("I am Bob Smith"), "Bob");
            assert_eq!(extract_name("Call me ishmael"), "Ishmael");
            assert_eq!(extract_name("It's Dana"), "Dana");
        }

        #[test]
        fn surrounding_whitespace_is_ignored() {
            assert_eq!(extract_name("   my name is   zoe  "), "Zoe");
        }

        #[test]
        fn blank_input_uses_placeholder() {
            assert_eq!(extract_name(""), NAME_PLACEHOLDER);
            assert_eq!(extract_name(" \t\n"), NAME_PLACEHOLDER);
        }

        #[test]
        fn bare_prefix_uses_placeholder() {
            assert_eq!(extract_name("it's"), NAME_PLACEHOLDER);
            assert_eq!(extract_name("my name is   "), NAME_PLACEHOLDER);
        }

        #[test]
        fn prefix_without_space_still_strips() {
            assert_eq!(extract_name("i'mjim"), "Jim");
        }

        #[test]
        fn capitalize_handles_non_ascii() {
            assert_eq!(capitalize("élodie"), "Élodie");
            assert_eq!(capitalize(""), "");
        }
    }

    mod keywords {
        use super::*;

        #[test]
        fn matching_is_case_insensitive_substring() {
            assert!(contains_any("I want a real LAWYER please", HUMAN_KEYWORDS));
            assert!(contains_any("Use the Chatbot", AI_KEYWORDS));
        }

        #[test]
        fn first_keyword_follows_list_order() {
            // "chatbot" also contains "bot", which is listed earlier.
            assert_eq!(first_keyword("chatbot", AI_KEYWORDS), Some("bot"));
        }

        #[test]
        fn unrelated_text_matches_nothing() {
            assert!(!contains_any("maybe", HUMAN_KEYWORDS));
            assert!(!contains_any("maybe", AI_KEYWORDS));
            assert!(!contains_any("thanks", SWITCH_TO_AI_KEYWORDS));
        }

        #[test]
        fn everyday_words_can_collide() {
            assert!(contains_any("someone", HUMAN_KEYWORDS));
            assert!(contains_any("12", HUMAN_KEYWORDS));
            assert!(contains_any("12", AI_KEYWORDS));
        }
    }
}
