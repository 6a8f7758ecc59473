//! Heuristic heading detection for plain-text books.

use super::count_words;

/// Lines with this many tokens or more are never headings.
const MAX_HEADING_WORDS: usize = 15;

/// How a trimmed, non-empty line is treated by the chunker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `PART <n>: <title>` style heading that opens a new section
    Major,
    /// Short question or unpunctuated capitalized line
    Minor,
    /// Body text
    Regular,
}

/// Classify a trimmed line. Major headings win over minor ones.
pub fn classify(line: &str) -> LineKind {
    if is_major_heading(line) {
        LineKind::Major
    } else if is_minor_heading(line) {
        LineKind::Minor
    } else {
        LineKind::Regular
    }
}

fn is_major_heading(line: &str) -> bool {
    line.starts_with("PART ") && line.contains(':')
}

fn is_minor_heading(line: &str) -> bool {
    let short = count_words(line) < MAX_HEADING_WORDS;
    if !short {
        return false;
    }

    let question = line.ends_with('?');
    let statement = line.chars().next().is_some_and(char::is_uppercase) && !line.ends_with('.');

    question || statement
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_major_heading() {
        assert_eq!(classify("PART 1: Foundations"), LineKind::Major);
        assert_eq!(classify("PART TWO: The Approach"), LineKind::Major);
    }

    #[test]
    fn test_part_without_colon_is_not_major() {
        // Still short and capitalized, so it falls through to a minor heading
        assert_eq!(classify("PART 1 Foundations"), LineKind::Minor);
    }

    #[test]
    fn test_part_prefix_requires_space() {
        assert_eq!(classify("PARTS: a list of things."), LineKind::Regular);
    }

    #[test]
    fn test_question_heading() {
        assert_eq!(classify("what is confidence?"), LineKind::Minor);
        assert_eq!(classify("What is confidence?"), LineKind::Minor);
    }

    #[test]
    fn test_capitalized_statement_heading() {
        assert_eq!(classify("The Three Rules"), LineKind::Minor);
        assert_eq!(classify("Rule one: be direct"), LineKind::Minor);
    }

    #[test]
    fn test_sentence_is_regular() {
        assert_eq!(classify("The rules are simple."), LineKind::Regular);
        assert_eq!(classify("lowercase start without period"), LineKind::Regular);
    }

    #[test]
    fn test_long_lines_are_never_headings() {
        let long_question = format!("{} really?", "word ".repeat(14).trim_end());
        assert_eq!(count_words(&long_question), 15);
        assert_eq!(classify(&long_question), LineKind::Regular);

        let long_statement = format!("Capitalized {}", "words ".repeat(14).trim_end());
        assert_eq!(classify(&long_statement), LineKind::Regular);
    }

    #[test]
    fn test_fourteen_words_still_heading() {
        let line = format!("Capitalized {}", "words ".repeat(13).trim_end());
        assert_eq!(count_words(&line), 14);
        assert_eq!(classify(&line), LineKind::Minor);
    }

    #[test]
    fn test_non_ascii_uppercase() {
        assert_eq!(classify("Élan and style"), LineKind::Minor);
    }

    proptest! {
        #[test]
        fn prop_long_lines_are_regular(
            extra in 0usize..30,
            question in any::<bool>(),
        ) {
            let words = vec!["Word"; 15 + extra].join(" ");
            let line = if question { format!("{}?", words) } else { words };
            prop_assert_eq!(classify(&line), LineKind::Regular);
        }
    }
}
