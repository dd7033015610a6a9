use rand::Rng;
use rand::seq::SliceRandom;

use crate::answers::Letter;
use crate::question::Question;

/// One independently shuffled variant of the exam.
///
/// Questions carry freshly relabeled `A)`-`D)` choices in their shuffled
/// order; `answers[i]` is the recomputed correct letter for `questions[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledExam {
    pub questions: Vec<Question>,
    pub answers: Vec<Letter>,
}

/// Produces one shuffled variant: question order and, per question, choice
/// order are permuted uniformly, and each correct letter is recomputed to
/// follow the text of the originally correct choice.
///
/// Precondition: `questions` and `answers` are equal-length, non-empty,
/// positionally aligned lists. The caller validates this; the engine does
/// not.
///
/// If two choices of one question share the same text, the recomputed
/// letter may point at either occurrence; the texts are equal, so either
/// letter marks a correct choice.
pub fn shuffle_exam<R: Rng + ?Sized>(
    questions: &[Question],
    answers: &[Letter],
    rng: &mut R,
) -> ShuffledExam {
    let mut order: Vec<usize> = (0..questions.len()).collect();
    order.shuffle(rng);

    let mut shuffled = ShuffledExam {
        questions: Vec::with_capacity(questions.len()),
        answers: Vec::with_capacity(questions.len()),
    };
    for index in order {
        let question = &questions[index];
        let correct_text = question.choice_text(answers[index]).to_string();

        let mut texts: Vec<String> = question
            .choice_texts()
            .iter()
            .map(|text| text.to_string())
            .collect();
        texts.shuffle(rng);

        let new_letter = texts
            .iter()
            .position(|text| *text == correct_text)
            .and_then(Letter::from_index)
            .expect("shuffled choices are a permutation of the originals");

        let choices: Vec<String> = Letter::ALL
            .iter()
            .zip(&texts)
            .map(|(letter, text)| format!("{}) {}", letter, text))
            .collect();
        shuffled.questions.push(Question {
            prompt: question.prompt.clone(),
            choices: <[String; 4]>::try_from(choices)
                .expect("relabeling preserves the four-choice invariant"),
        });
        shuffled.answers.push(new_letter);
    }
    shuffled
}
