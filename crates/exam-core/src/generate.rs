use std::collections::BTreeMap;

use rand::Rng;

use crate::answers::Letter;
use crate::error::GenerateError;
use crate::question::Question;
use crate::render::{ExamVersion, render_answer_key, render_exam};
use crate::shuffle::shuffle_exam;

/// Version labels are single uppercase letters, which caps a run at 26.
pub const MAX_VERSIONS: usize = 26;

/// Generates `count` independently shuffled exam versions labeled `A`,
/// `B`, ... using the thread-local random source.
pub fn generate_versions(
    questions: &[Question],
    answers: &[Letter],
    count: usize,
) -> Result<Vec<ExamVersion>, GenerateError> {
    generate_versions_with(questions, answers, count, &mut rand::thread_rng())
}

/// Like [`generate_versions`] but draws from a caller-supplied source, so
/// runs can be seeded and parallel callers can own independent generators.
///
/// This is the validation boundary: empty question banks, misaligned
/// lists, and out-of-range counts are rejected here, and nothing past this
/// point fails for validated input.
pub fn generate_versions_with<R: Rng + ?Sized>(
    questions: &[Question],
    answers: &[Letter],
    count: usize,
    rng: &mut R,
) -> Result<Vec<ExamVersion>, GenerateError> {
    if questions.is_empty() {
        return Err(GenerateError::EmptyQuestionBank);
    }
    if questions.len() != answers.len() {
        return Err(GenerateError::AlignmentMismatch {
            questions: questions.len(),
            answers: answers.len(),
        });
    }
    if count == 0 || count > MAX_VERSIONS {
        return Err(GenerateError::InvalidVersionCount(count));
    }

    let mut versions = Vec::with_capacity(count);
    for index in 0..count {
        let label = (b'A' + index as u8) as char;
        let shuffled = shuffle_exam(questions, answers, rng);
        versions.push(ExamVersion {
            label,
            exam_text: render_exam(label, &shuffled),
            answer_key_text: render_answer_key(label, &shuffled),
        });
    }
    Ok(versions)
}

/// Flattens generated versions into the filename-to-content mapping the
/// caller packages for download.
pub fn bundle(versions: &[ExamVersion]) -> BTreeMap<String, String> {
    let mut files = BTreeMap::new();
    for version in versions {
        files.insert(version.exam_file_name(), version.exam_text.clone());
        files.insert(version.answer_file_name(), version.answer_key_text.clone());
    }
    files
}
