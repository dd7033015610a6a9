use serde::{Deserialize, Serialize};

use crate::answers::Letter;

/// A single four-choice question as authored in the question bank.
///
/// Choices are kept verbatim, labels included, in their original `A)`-`D)`
/// order; the fixed-size array is the exactly-four-choices invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub choices: [String; 4],
}

impl Question {
    /// Prompt as shown on a rendered exam: anything before the first colon
    /// is treated as an authoring label (`Q3:`) and stripped.
    pub fn display_prompt(&self) -> &str {
        match self.prompt.split_once(':') {
            Some((_, rest)) => rest.trim(),
            None => self.prompt.as_str(),
        }
    }

    /// Choice body without its `X)` label.
    pub fn choice_text(&self, letter: Letter) -> &str {
        strip_label(&self.choices[letter.index()])
    }

    /// All four choice bodies in authored order.
    pub fn choice_texts(&self) -> [&str; 4] {
        [
            strip_label(&self.choices[0]),
            strip_label(&self.choices[1]),
            strip_label(&self.choices[2]),
            strip_label(&self.choices[3]),
        ]
    }
}

fn strip_label(choice: &str) -> &str {
    match choice.split_once(')') {
        Some((_, rest)) => rest.trim(),
        None => choice,
    }
}

/// Parses a loosely structured question bank into question records.
///
/// A line beginning with `Q` opens a block; up to four directly following
/// lines that start with an uppercase `A`-`D` and contain a `)` become its
/// choices. Blocks with fewer than four choices are dropped whole, and
/// anything else is skipped; malformed input never errors, it just yields
/// fewer records.
pub fn parse_questions(text: &str) -> Vec<Question> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut questions = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if !lines[i].starts_with('Q') {
            i += 1;
            continue;
        }
        let prompt = lines[i];
        i += 1;
        let mut choices = Vec::with_capacity(4);
        while i < lines.len() && choices.len() < 4 {
            let line = lines[i];
            if line.starts_with(['A', 'B', 'C', 'D']) && line.contains(')') {
                choices.push(line.to_string());
                i += 1;
            } else {
                break;
            }
        }
        if let Ok(choices) = <[String; 4]>::try_from(choices) {
            questions.push(Question {
                prompt: prompt.to_string(),
                choices,
            });
        }
    }
    questions
}
