use thiserror::Error;

/// Boundary failures detected before any version is generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The question bank parsed to zero usable records.
    #[error("no questions could be parsed from the question bank")]
    EmptyQuestionBank,
    /// The two parsers produced lists of different lengths, so positional
    /// alignment between questions and answers is broken.
    #[error("parsed {questions} question(s) but {answers} answer(s); the lists must align")]
    AlignmentMismatch { questions: usize, answers: usize },
    /// Requested version count is outside the single-letter naming range.
    #[error("requested {0} version(s); between 1 and 26 are supported")]
    InvalidVersionCount(usize),
}
