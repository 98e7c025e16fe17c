use std::collections::BTreeSet;
use wordle_trie::core::{Clue, GuessError, score};
use wordle_trie::engine::{ConstraintEngine, EngineError};
use wordle_trie::trie::{NodeRef, Trie};
use wordle_trie::wordlists::{DictionarySource, EmbeddedDictionary, FileDictionary};

fn set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(ToString::to_string).collect()
}

fn candidate_set(engine: &ConstraintEngine) -> BTreeSet<String> {
    engine.candidates().into_iter().collect()
}

#[test]
fn test_insert_enumerate_round_trip() {
    let words = ["crane", "slate", "irate", "grate", "trace", "about"];
    let mut trie = Trie::new();
    trie.insert_many(words);

    let enumerated: BTreeSet<String> = trie.enumerate().into_iter().collect();
    assert_eq!(enumerated, set(&words));
}

#[test]
fn test_enumeration_is_sorted_and_deterministic() {
    let trie: Trie = ["slate", "crane", "about"].into_iter().collect();

    assert_eq!(trie.enumerate(), vec!["about", "crane", "slate"]);
    assert_eq!(trie.enumerate(), trie.enumerate());
}

fn e_in_middle(node: &NodeRef<'_>, depth: usize) -> bool {
    depth == 2 && node.character() == Some('e')
}

#[test]
fn test_prune_keeps_exactly_non_violating_words() {
    let words = EmbeddedDictionary.words_of_length(5).unwrap();
    let mut trie: Trie = words.iter().collect();

    trie.prune(&[e_in_middle]);

    let mut expected: Vec<String> = words
        .iter()
        .filter(|w| w.as_bytes()[2] != b'e')
        .cloned()
        .collect();
    expected.sort();
    assert_eq!(trie.enumerate(), expected);
}

#[test]
fn test_scenario_rating() {
    let mut engine = ConstraintEngine::new(6, &["rating", "retina", "tigers"]).unwrap();

    engine.guess("retina", "GBGGGY").unwrap();

    assert_eq!(candidate_set(&engine), set(&["rating"]));
}

#[test]
fn test_scenario_angle_excludes_all() {
    // ANGLE scored GBBBG excludes N, G and L outright. APPLE and AMBLE both
    // contain L and ANGLE contains N, so nothing survives.
    let mut engine = ConstraintEngine::new(5, &["apple", "angle", "amble"]).unwrap();

    engine.guess("angle", "GBBBG").unwrap();

    assert!(engine.candidates().is_empty());
}

#[test]
fn test_scenario_empty_dictionary() {
    let empty: [&str; 0] = [];
    let engine = ConstraintEngine::new(5, &empty).unwrap();

    assert!(engine.candidates().is_empty());
    assert_eq!(engine.candidate_count(), 0);
}

#[test]
fn test_scenario_wrong_clue_count() {
    let mut engine = ConstraintEngine::new(5, &["crane", "slate"]).unwrap();
    let before = engine.candidates();

    let err = engine.guess("crane", "GGG").unwrap_err();

    assert_eq!(
        err,
        GuessError::ClueLengthMismatch {
            expected: 5,
            actual: 3
        }
    );
    assert_eq!(engine.candidates(), before);
}

#[test]
fn test_invalid_inputs_are_atomic() {
    let mut engine = ConstraintEngine::new(5, &EmbeddedDictionary).unwrap();
    let before = engine.candidates();

    let cases = [
        ("Crane", "GGGGG"),
        ("cranes", "GGGGG"),
        ("crane", ""),
        ("crane", "GG,YY,B"),
        ("crane", "GGGGGG"),
        ("crane", "GGQGG"),
    ];
    for (guess, clues) in cases {
        assert!(engine.guess(guess, clues).is_err(), "{guess} {clues}");
    }

    assert_eq!(engine.candidates(), before);
    assert!(engine.state().is_fresh());
}

#[test]
fn test_engine_agrees_with_brute_force_filter() {
    let words = EmbeddedDictionary.words_of_length(5).unwrap();
    let mut engine = ConstraintEngine::new(5, &words).unwrap();

    // Answer without repeated letters, so real feedback never self-contradicts
    let answer = "light";
    for guess in ["crane", "moist", "fight"] {
        let clues = score(guess, answer);
        engine.apply(guess, &clues).unwrap();
        assert!(engine.is_candidate(answer));
    }

    let state = engine.state();
    let expected: BTreeSet<String> = words
        .iter()
        .filter(|word| {
            word.chars().enumerate().all(|(i, c)| {
                state.known_at(i).is_none_or(|k| k == c)
                    && !state.is_excluded(c)
                    && !state.is_misplaced_at(c, i)
            }) && state.required_letters().all(|r| word.contains(r))
        })
        .cloned()
        .collect();

    assert_eq!(candidate_set(&engine), expected);
}

#[test]
fn test_monotonic_narrowing_over_a_game() {
    let mut engine = ConstraintEngine::new(5, &EmbeddedDictionary).unwrap();
    let answer = "world";
    let mut previous = candidate_set(&engine);

    for guess in ["crane", "sound", "would", "world"] {
        engine.apply(guess, &score(guess, answer)).unwrap();
        let current = candidate_set(&engine);

        assert!(current.is_subset(&previous), "{guess} widened the set");
        previous = current;
    }

    assert_eq!(previous, set(&["world"]));
}

#[test]
fn test_typed_clues_bypass_symbol_parsing() {
    let mut engine = ConstraintEngine::new(6, &["rating", "retina", "tigers"]).unwrap();
    let clues = [
        Clue::Correct,
        Clue::Absent,
        Clue::Correct,
        Clue::Correct,
        Clue::Correct,
        Clue::Present,
    ];

    engine.apply("retina", &clues).unwrap();
    assert!(engine.is_solved());
}

#[test]
fn test_file_backed_engine_and_reset() {
    let path = std::env::temp_dir().join(format!(
        "wordle_trie_scenario_{}.txt",
        std::process::id()
    ));
    std::fs::write(&path, "rating\r\nretina\r\ncrane\r\ntigers").unwrap();
    let dictionary = FileDictionary::new(&path);

    let mut engine = ConstraintEngine::new(6, &dictionary).unwrap();
    assert_eq!(candidate_set(&engine), set(&["rating", "retina", "tigers"]));

    engine.guess("retina", "GBGGGY").unwrap();
    assert_eq!(engine.candidates(), vec!["rating"]);

    engine.reset(&dictionary).unwrap();
    assert_eq!(engine.candidate_count(), 3);
    assert_eq!(engine.guesses_made(), 0);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_dictionary_file_is_reported() {
    let dictionary = FileDictionary::new("/nonexistent/wordle_trie/words.txt");

    let err = ConstraintEngine::new(5, &dictionary).unwrap_err();
    assert!(matches!(err, EngineError::Dictionary(_)));
}
