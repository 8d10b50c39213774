//! Terminal prompt tests.

use std::io::Cursor;

use blackjack::{Action, PlayerInput, Prompt};
use blackjack::prompt::PROMPT;

fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
    Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn prompts_written(prompt: Prompt<Cursor<Vec<u8>>, Vec<u8>>) -> usize {
    let (_, written) = prompt.into_inner();
    String::from_utf8(written).unwrap().matches(PROMPT).count()
}

#[test]
fn unrecognised_input_prompts_again() {
    let mut input = prompt("x\n\nq\nh\n");
    assert_eq!(input.decide(12), Action::Hit);
    // "x" and "q" are rejected; the blank line is skipped silently.
    assert_eq!(prompts_written(input), 3);
}

#[test]
fn each_decision_reads_one_answer() {
    let mut input = prompt("h\nS\n");
    assert_eq!(input.decide(12), Action::Hit);
    assert_eq!(input.decide(15), Action::Stand);
    assert_eq!(prompts_written(input), 2);
}

#[test]
fn closed_input_stands() {
    let mut input = prompt("");
    assert_eq!(input.decide(12), Action::Stand);
    assert_eq!(prompts_written(input), 1);
}

#[test]
fn input_closing_after_bad_answers_stands() {
    let mut input = prompt("x\n   \n");
    assert_eq!(input.decide(12), Action::Stand);
    assert_eq!(prompts_written(input), 2);
}
