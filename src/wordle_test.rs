use crate::error::GameError;
use crate::language::{self, Language};
use crate::wordle::{evaluate, LetterStatus};
use crate::wordle::LetterStatus::*;

fn statuses(guess: &str, secret: &str) -> Vec<LetterStatus> {
    evaluate(guess, secret)
        .unwrap()
        .iter()
        .map(|f| f.status)
        .collect()
}

#[test]
fn feedback_preserves_letters_and_length() {
    let feedback = evaluate("pearl", "grape").unwrap();
    assert_eq!(feedback.len(), 5);
    for (f, c) in feedback.iter().zip("pearl".chars()) {
        assert_eq!(f.letter, c);
    }
}

#[test]
fn exact_match_is_all_correct() {
    assert_eq!(statuses("hello", "hello"), vec![Correct; 5]);
}

#[test]
fn displaced_letters_are_present() {
    // Only 'a' sits in its exact spot; 'l' never appears in the secret.
    assert_eq!(
        statuses("pearl", "grape"),
        vec![Present, Present, Correct, Present, Absent]
    );
}

#[test]
fn duplicate_credit_capped_by_secret_count() {
    // "allot" has two l's and one a: the second guessed 'a' gets nothing.
    assert_eq!(
        statuses("llama", "allot"),
        vec![Present, Correct, Present, Absent, Absent]
    );
}

#[test]
fn exact_positions_claim_letters_before_displaced_ones() {
    // Both guessed s's land on exact positions; the trailing 'a' is still
    // credited against the secret's 'a'.
    assert_eq!(
        statuses("mossa", "sassy"),
        vec![Absent, Absent, Correct, Correct, Present]
    );
}

#[test]
fn letter_count_conservation() {
    let cases = [
        ("llama", "allot"),
        ("mossa", "sassy"),
        ("pearl", "grape"),
        ("sssss", "sassy"),
        ("abcde", "fghij"),
    ];
    for (guess, secret) in cases {
        let feedback = evaluate(guess, secret).unwrap();
        for c in guess.chars() {
            let credited = feedback
                .iter()
                .filter(|f| f.letter == c && f.status != Absent)
                .count();
            let in_guess = guess.chars().filter(|&g| g == c).count();
            let in_secret = secret.chars().filter(|&s| s == c).count();
            assert!(
                credited <= in_guess.min(in_secret),
                "'{}' over-credited for guess {} against {}",
                c,
                guess,
                secret
            );
        }
    }
}

#[test]
fn evaluation_is_deterministic() {
    assert_eq!(
        evaluate("llama", "allot").unwrap(),
        evaluate("llama", "allot").unwrap()
    );
}

#[test]
fn length_mismatch_is_invalid_argument() {
    assert!(matches!(
        evaluate("pear", "grape"),
        Err(GameError::InvalidArgument(_))
    ));
}

#[test]
fn empty_guess_is_invalid_argument() {
    assert!(matches!(
        evaluate("", ""),
        Err(GameError::InvalidArgument(_))
    ));
}

#[test]
fn normalize_folds_case_and_diacritics() {
    assert_eq!(language::normalize("Hello", Language::English), "hello");
    assert_eq!(language::normalize("ARÁN", Language::Irish), "aran");
    assert_eq!(language::normalize("Éclair", Language::French), "eclair");
    assert_eq!(language::normalize("Façade", Language::French), "facade");
    assert_eq!(language::normalize("Cañón", Language::Spanish), "cañon");
}

#[test]
fn normalize_leaves_unknown_diacritics_outside_language() {
    // English folds nothing.
    assert_eq!(language::normalize("café", Language::English), "café");
}
