use std::fmt::Write;

use crate::shuffle::ShuffledExam;

/// One generated exam variant, ready to be written out by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamVersion {
    /// Single uppercase letter identifying the variant.
    pub label: char,
    pub exam_text: String,
    pub answer_key_text: String,
}

impl ExamVersion {
    pub fn exam_file_name(&self) -> String {
        format!("exam_version_{}.txt", self.label)
    }

    pub fn answer_file_name(&self) -> String {
        format!("answers_version_{}.txt", self.label)
    }
}

fn header(title: &str) -> String {
    format!("{}\n{}\n\n", title, "=".repeat(50))
}

/// Renders the exam sheet for one shuffled variant.
pub fn render_exam(label: char, shuffled: &ShuffledExam) -> String {
    let mut text = header(&format!("EXAM VERSION {}", label));
    for (number, question) in shuffled.questions.iter().enumerate() {
        let _ = writeln!(text, "{}. {}", number + 1, question.display_prompt());
        for choice in &question.choices {
            let _ = writeln!(text, "   {}", choice);
        }
        text.push('\n');
    }
    text
}

/// Renders the answer key matching [`render_exam`]'s question order.
pub fn render_answer_key(label: char, shuffled: &ShuffledExam) -> String {
    let mut text = header(&format!("ANSWER KEY - VERSION {}", label));
    for (number, letter) in shuffled.answers.iter().enumerate() {
        let _ = writeln!(text, "{}. {}", number + 1, letter);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Letter;
    use crate::question::Question;

    fn variant() -> ShuffledExam {
        ShuffledExam {
            questions: vec![Question {
                prompt: "Q1: What is 2+2?".into(),
                choices: ["A) 3".into(), "B) 4".into(), "C) 5".into(), "D) 6".into()],
            }],
            answers: vec![Letter::B],
        }
    }

    #[test]
    fn exam_sheet_numbers_questions_and_indents_choices() {
        let text = render_exam('A', &variant());
        assert!(text.starts_with("EXAM VERSION A\n"));
        assert!(text.contains("\n1. What is 2+2?\n   A) 3\n"));
        assert!(text.ends_with("   D) 6\n\n"));
    }

    #[test]
    fn answer_key_lists_one_letter_per_question() {
        let text = render_answer_key('A', &variant());
        assert!(text.starts_with("ANSWER KEY - VERSION A\n"));
        assert!(text.ends_with("\n1. B\n"));
    }
}
