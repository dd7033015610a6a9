use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four answer positions offered for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
}

impl Letter {
    pub const ALL: [Letter; 4] = [Letter::A, Letter::B, Letter::C, Letter::D];

    /// Maps an `A`-`D` character (either case) to a letter.
    pub fn from_char(value: char) -> Option<Letter> {
        match value.to_ascii_uppercase() {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            _ => None,
        }
    }

    /// Maps a 0-based choice position back to a letter.
    pub fn from_index(index: usize) -> Option<Letter> {
        Letter::ALL.get(index).copied()
    }

    /// 0-based position of this letter within a choice list.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An answer line that contributed no letter to the key.
///
/// Skipped lines shift every following answer up one position relative to
/// the question list, so callers should surface these before generating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the original answer text.
    pub line: usize,
    pub text: String,
}

/// Result of parsing an answer key text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerKey {
    pub letters: Vec<Letter>,
    pub skipped: Vec<SkippedLine>,
}

/// Parses an answer key: one letter per non-empty line, taken from the
/// first `A`-`D` character (either case) on that line.
///
/// Lines without any such character yield no letter and are recorded in
/// [`AnswerKey::skipped`]; blank lines are ignored outright.
pub fn parse_answers(text: &str) -> AnswerKey {
    let mut key = AnswerKey::default();
    for (number, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match line.chars().find_map(Letter::from_char) {
            Some(letter) => key.letters.push(letter),
            None => key.skipped.push(SkippedLine {
                line: number + 1,
                text: line.to_string(),
            }),
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_round_trips_through_index() {
        for letter in Letter::ALL {
            assert_eq!(Letter::from_index(letter.index()), Some(letter));
        }
        assert_eq!(Letter::from_index(4), None);
    }

    #[test]
    fn first_matching_character_wins() {
        let key = parse_answers("Q1: C");
        assert_eq!(key.letters, vec![Letter::C]);
        assert!(key.skipped.is_empty());
    }

    #[test]
    fn lowercase_letters_are_accepted() {
        let key = parse_answers("  b  ");
        assert_eq!(key.letters, vec![Letter::B]);
    }

    #[test]
    fn lines_without_letters_are_recorded() {
        let key = parse_answers("1: E\n\nQ2: D\n???\n");
        assert_eq!(key.letters, vec![Letter::D]);
        assert_eq!(
            key.skipped,
            vec![
                SkippedLine {
                    line: 1,
                    text: "1: E".into()
                },
                SkippedLine {
                    line: 4,
                    text: "???".into()
                },
            ]
        );
    }
}
