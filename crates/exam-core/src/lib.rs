#![allow(missing_docs)]

pub mod answers;
pub mod error;
pub mod generate;
pub mod question;
pub mod render;
pub mod shuffle;

pub use answers::{AnswerKey, Letter, SkippedLine, parse_answers};
pub use error::GenerateError;
pub use generate::{MAX_VERSIONS, bundle, generate_versions, generate_versions_with};
pub use question::{Question, parse_questions};
pub use render::{ExamVersion, render_answer_key, render_exam};
pub use shuffle::{ShuffledExam, shuffle_exam};
