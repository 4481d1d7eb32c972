//! End-to-end checks of the combination generator and the progress accountant

use paraulogic_assistant::core::{Alphabet, ClueSpec, LetterSet, Subgroup, has_triple_run};
use paraulogic_assistant::engine::{generate, score};
use paraulogic_assistant::progress::{analyze, recommend};

fn alphabet() -> Alphabet {
    Alphabet::new('t', "erasg").unwrap()
}

fn subgroups(keys: &[&str]) -> Vec<Subgroup> {
    let alphabet = alphabet();
    keys.iter()
        .map(|k| Subgroup::parse(k, &alphabet).unwrap())
        .collect()
}

#[test]
fn generated_combinations_respect_every_constraint() {
    let alphabet = alphabet();
    let groups = subgroups(&["ters", "treg"]);
    let results = generate("tr", 4, &alphabet, &groups);

    assert!(!results.is_empty());
    let allowed: Vec<LetterSet> = groups.iter().map(|s| s.letters()).collect();
    for combo in &results {
        assert_eq!(combo.text.len(), 4);
        assert!(combo.text.starts_with("tr"));
        assert!(combo.text.contains('t'));
        assert!(!has_triple_run(combo.text.as_bytes()));
        let set = LetterSet::from_word(&combo.text).unwrap();
        assert!(allowed.iter().any(|a| set.is_subset_of(*a)), "{}", combo.text);
        assert!(!combo.matching_subgroups.is_empty());
        assert_eq!(combo.score, score(&combo.text));
    }
}

#[test]
fn generated_combinations_are_ranked_and_unique() {
    let results = generate("t", 5, &alphabet(), &subgroups(&["aegrst"]));

    for pair in results.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].text < pair[1].text)
        );
    }
    let mut texts: Vec<&str> = results.iter().map(|c| c.text.as_str()).collect();
    texts.sort_unstable();
    texts.dedup();
    assert_eq!(texts.len(), results.len());
}

#[test]
fn generation_without_main_letter_in_reach_is_empty() {
    // Every candidate needs the main letter, which "aegr" lacks
    let results = generate("gr", 4, &alphabet(), &subgroups(&["aegr"]));
    assert!(results.is_empty());
}

#[test]
fn prefix_accounting_counts_starts_with() {
    let mut clues = ClueSpec::new();
    clues.per_prefix.insert("tr".to_string(), 5);
    let found = ["trage", "tres", "tregs"].map(String::from);

    let tr = analyze(&found, &clues, &alphabet()).per_prefix["tr"];
    assert_eq!((tr.found, tr.expected, tr.missing), (3, 5, 2));
}

#[test]
fn subgroup_accounting_uses_exact_letter_sets() {
    let mut clues = ClueSpec::new();
    clues.per_subgroup.insert("erst".to_string(), 3);
    let found = ["ters", "rest", "terst", "tres", "trage"].map(String::from);

    let erst = analyze(&found, &clues, &alphabet()).per_subgroup["erst"];
    assert_eq!((erst.found, erst.expected, erst.missing), (4, 3, 0));
}

#[test]
fn recommendations_follow_the_shortest_missing_length() {
    let alphabet = alphabet();
    let mut clues = ClueSpec::new();
    clues.total_words = 10;
    clues.set_letter_length('t', 5, 2);
    clues.set_letter_length('t', 4, 1);
    clues.set_letter_length('g', 6, 3);
    clues.set_letter_length('s', 4, 1);
    clues.per_prefix.insert("tr".to_string(), 3);
    clues.per_prefix.insert("ga".to_string(), 1);
    let found = ["tres", "trage"].map(String::from);

    let report = analyze(&found, &clues, &alphabet);
    assert_eq!(report.overall().missing, 8);

    let recs = recommend(&report, 4);
    let letters: Vec<char> = recs.iter().map(|r| r.letter).collect();
    // 's' misses a 4-letter word, 't' a 5-letter one, 'g' only 6-letter ones
    assert_eq!(letters, vec!['s', 't', 'g']);
    assert_eq!(recs[1].shortest_length, 5);
    assert_eq!(recs[1].prefixes[0].key, "tr");
    assert_eq!(recs[2].prefixes[0].key, "ga");
}
