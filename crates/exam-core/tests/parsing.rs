use exam_core::{Letter, parse_answers, parse_questions};

fn fixture(name: &str) -> &'static str {
    match name {
        "sample_questions" => include_str!("../tests/fixtures/sample_questions.txt"),
        "sample_answers" => include_str!("../tests/fixtures/sample_answers.txt"),
        _ => panic!("unknown fixture {}", name),
    }
}

#[test]
fn well_formed_blocks_parse_verbatim() {
    let questions = parse_questions(fixture("sample_questions"));
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].prompt, "Q1: What is the capital of France?");
    assert_eq!(
        questions[0].choices,
        ["A) London", "B) Paris", "C) Berlin", "D) Madrid"]
    );
    assert_eq!(questions[1].choices, ["A) 3", "B) 4", "C) 5", "D) 6"]);
}

#[test]
fn incomplete_blocks_are_dropped_whole() {
    let text = "Q1: Only three choices\nA) one\nB) two\nC) three\nQ2: Complete\nA) 1\nB) 2\nC) 3\nD) 4\n";
    let questions = parse_questions(text);
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].prompt, "Q2: Complete");
}

#[test]
fn surplus_choice_lines_are_left_for_the_next_scan() {
    let text = "Q1: Five choice lines\nA) 1\nB) 2\nC) 3\nD) 4\nD) 5\nQ2: Next\nA) a\nB) b\nC) c\nD) d\n";
    let questions = parse_questions(text);
    // the fifth choice line is evaluated on its own, fails to start a
    // question, and is skipped
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].choices, ["A) 1", "B) 2", "C) 3", "D) 4"]);
}

#[test]
fn noise_lines_and_blank_lines_are_ignored() {
    let text = "Section one\n\nQ1: Real question\nA) yes\nB) no\nC) maybe\nD) unsure\n-- end --\n";
    let questions = parse_questions(text);
    assert_eq!(questions.len(), 1);
}

#[test]
fn choice_lines_must_contain_a_paren() {
    let text = "Q1: Broken labels\nA 1\nB 2\nC 3\nD 4\n";
    assert!(parse_questions(text).is_empty());
}

#[test]
fn degenerate_input_yields_no_questions() {
    assert!(parse_questions("").is_empty());
    assert!(parse_questions("nothing\nto see\nhere\n").is_empty());
}

#[test]
fn answer_key_fixture_parses_positionally() {
    let key = parse_answers(fixture("sample_answers"));
    assert_eq!(key.letters, vec![Letter::B, Letter::B]);
    assert!(key.skipped.is_empty());
}

#[test]
fn skipped_answer_lines_keep_their_line_numbers() {
    let key = parse_answers("Q1: A\nsee footnote\n\n52\nQ4: d\n");
    assert_eq!(key.letters, vec![Letter::A, Letter::D]);
    let skipped: Vec<usize> = key.skipped.iter().map(|entry| entry.line).collect();
    // the blank line 3 is ignored outright, not reported
    assert_eq!(skipped, vec![2, 4]);
    assert_eq!(key.skipped[1].text, "52");
}
