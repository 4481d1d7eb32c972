//! Display functions for command results

use super::formatters::{create_progress_bar, format_bucket, format_percent, status_symbol, words};
use crate::commands::{
    BulkOutcome, ExploreResult, ListingEntry, MarkResult, RemoveOutcome, ReportResult,
    SweepResult,
};
use crate::core::{Alphabet, ClueSpec};
use crate::engine::{CombinationStatus, FoundWordChange};
use crate::progress::Bucket;
use crate::session::AddOutcome;
use colored::{ColoredString, Colorize};

/// Recommended prefixes shown per letter
const SHOWN_PREFIXES: usize = 6;
/// Recommended subgroups shown per letter
const SHOWN_SUBGROUPS: usize = 4;

fn header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

fn colored_bucket(bucket: &Bucket) -> ColoredString {
    let text = format_bucket(bucket);
    if bucket.expected == 0 {
        text.bright_black()
    } else if bucket.is_complete() {
        text.green()
    } else {
        text.red()
    }
}

fn colored_status(status: CombinationStatus) -> ColoredString {
    let text = format!("{} {status}", status_symbol(status));
    match status {
        CombinationStatus::Correct => text.green(),
        CombinationStatus::Tried => text.red(),
        CombinationStatus::Untried => text.bright_black(),
    }
}

/// Print the letters of a freshly created game
pub fn print_new_game(alphabet: &Alphabet) {
    println!(
        "🧩 New game: {}  (main letter {})",
        alphabet.to_string().bright_yellow().bold(),
        (alphabet.main() as char).to_ascii_uppercase()
    );
}

/// Print which words were added, skipped or rejected
pub fn print_add_outcome(outcome: &AddOutcome) {
    if !outcome.added.is_empty() {
        println!("{} {}", "✅ Added:".green().bold(), outcome.added.join(", "));
    }
    if !outcome.duplicates.is_empty() {
        println!(
            "{} {}",
            "↺ Already found:".yellow(),
            outcome.duplicates.join(", ")
        );
    }
    for (word, error) in &outcome.rejected {
        println!("{} {word}: {error}", "❌".red());
    }
    if outcome.added.is_empty() && outcome.duplicates.is_empty() && outcome.rejected.is_empty() {
        println!("No words given.");
    }
}

pub fn print_remove_outcome(outcome: &RemoveOutcome) {
    if !outcome.removed.is_empty() {
        println!("{} {}", "🗑 Removed:".green(), outcome.removed.join(", "));
    }
    if !outcome.not_found.is_empty() {
        println!(
            "{} {}",
            "Not in the list:".yellow(),
            outcome.not_found.join(", ")
        );
    }
}

pub fn print_mark_result(result: &MarkResult) {
    println!(
        "{}: {} → {}",
        result.combination.to_uppercase().bold(),
        colored_status(result.previous),
        colored_status(result.status)
    );
    match &result.change {
        FoundWordChange::Add(word) => println!("  {} {word}", "added to found words:".green()),
        FoundWordChange::Remove(word) => {
            println!("  {} {word}", "removed from found words:".yellow());
        }
        FoundWordChange::None => {}
    }
}

pub fn print_bulk_outcome(outcome: &BulkOutcome) {
    for (key, count) in &outcome.applied {
        if *count == 0 {
            println!("  {} {key}", "cleared".yellow());
        } else {
            println!("  {key}-{count}");
        }
    }
    for error in &outcome.errors {
        println!("  {} {error}", "skipped".red());
    }
}

/// Print every clue entered so far
pub fn print_clues(clues: &ClueSpec, alphabet: &Alphabet) {
    header("CLUES");
    println!("Letters: {alphabet}");
    println!("Total words: {}", clues.total_words);

    if clues.per_letter.is_empty() {
        println!("\nNo letter clues yet.");
    } else {
        println!("\n{}", "By letter and length:".bright_cyan());
        for (letter, clue) in &clues.per_letter {
            let lengths: Vec<String> = clue
                .length_counts
                .iter()
                .map(|(len, n)| format!("{len}:{n}"))
                .collect();
            println!(
                "  {} {}  (total {})",
                letter.to_ascii_uppercase(),
                lengths.join(" "),
                clue.total()
            );
        }
        println!("  Sum of letters: {}", clues.letter_sum());
    }

    for (title, map) in [
        ("Subgroups", &clues.per_subgroup),
        ("Prefixes", &clues.per_prefix),
    ] {
        if !map.is_empty() {
            let tokens: Vec<String> = map.iter().map(|(k, n)| format!("{k}-{n}")).collect();
            println!("\n{} {}", format!("{title}:").bright_cyan(), tokens.join(" "));
        }
    }
}

/// Print the combinations generated for a prefix
pub fn print_explore_result(result: &ExploreResult) {
    header(&format!(
        "{} · {} letters",
        result.prefix.to_uppercase(),
        result.length
    ));

    if let Some(bucket) = &result.prefix_progress {
        println!(
            "Prefix {}: {} found of {} ({} missing)",
            result.prefix,
            bucket.found,
            bucket.expected,
            bucket.missing.to_string().red().bold()
        );
    } else {
        println!(
            "Prefix {}: {} found (no clue entered)",
            result.prefix, result.prefix_found
        );
    }

    let subgroups: Vec<String> = result.subgroups.iter().map(ToString::to_string).collect();
    let relevant: Vec<String> = result.relevant.iter().map(ToString::to_string).collect();
    println!("Subgroups: {}", subgroups.join(" "));
    println!("Relevant:  {}", relevant.join(" ").bright_magenta());

    if result.total == 0 {
        println!("\n{}", "No combinations fit these constraints.".yellow());
        return;
    }

    println!(
        "\n{} combinations · score {}–{} (mean {}) · {} correct · {} tried · {} untried",
        result.total,
        result.summary.min,
        result.summary.max,
        result.summary.mean,
        result.counts.correct.to_string().green(),
        result.counts.tried.to_string().red(),
        result.counts.untried
    );
    println!();
    for annotated in &result.combinations {
        let combo = &annotated.combination;
        let groups: Vec<String> = combo
            .matching_subgroups
            .iter()
            .map(ToString::to_string)
            .collect();
        println!(
            "  {:<12} {:>4}  {:<12} {}",
            combo.text.to_uppercase().bold(),
            combo.score,
            colored_status(annotated.status),
            groups.join(" ").bright_black()
        );
    }
    if result.combinations.len() < result.total {
        println!(
            "  … {} more",
            result.total - result.combinations.len()
        );
    }
}

fn print_progress_table(result: &ReportResult) {
    let lengths: Vec<usize> = result.progress.per_length.keys().copied().collect();
    if lengths.is_empty() {
        return;
    }

    print!("\n  {:<6}", "");
    for len in &lengths {
        print!("{:>12}", len.to_string().bright_cyan());
    }
    println!("{:>12}", "Σ".bright_cyan());

    for (letter, progress) in &result.progress.per_letter {
        print!("  {:<6}", letter.to_ascii_uppercase().to_string().bold());
        for len in &lengths {
            match progress.lengths.get(len) {
                Some(bucket) => print!("{:>12}", colored_bucket(bucket)),
                None => print!("{:>12}", "·".bright_black()),
            }
        }
        println!("{:>12}", colored_bucket(&progress.total));
    }

    print!("  {:<6}", "TOTAL".bold());
    for bucket in result.progress.per_length.values() {
        print!("{:>12}", colored_bucket(bucket));
    }
    println!();
}

fn print_bucket_map<'a>(title: &str, buckets: impl Iterator<Item = (&'a String, &'a Bucket)>) {
    let cells: Vec<String> = buckets
        .map(|(key, bucket)| format!("{key} {}", colored_bucket(bucket)))
        .collect();
    if !cells.is_empty() {
        println!("\n{}", title.bright_cyan().bold());
        for row in cells.chunks(4) {
            println!("  {}", row.join("   "));
        }
    }
}

/// Print the progress report and recommendations
pub fn print_report(result: &ReportResult) {
    header("PROGRESS");
    println!("Letters: {}", result.letters);

    let overall = result.progress.overall();
    println!(
        "\n📊 {} found of {}  [{}] {}",
        overall.found.to_string().bright_yellow().bold(),
        overall.expected,
        create_progress_bar(overall.percent(), 30).green(),
        format_percent(overall.percent())
    );

    if result.no_clues {
        println!(
            "\n{}",
            "No clues yet. Add them with `paraulogic clues ...`.".yellow()
        );
    }

    print_progress_table(result);
    print_bucket_map("Subgroups", result.progress.per_subgroup.iter());
    print_bucket_map("Prefixes", result.progress.per_prefix.iter());

    if !result.recommendations.is_empty() {
        println!("\n🎯 {}", "Where to search next".bright_cyan().bold());
    }
    for rec in &result.recommendations {
        println!(
            "\n  {}  {} {} of {} letters · {} missing in total",
            rec.letter.to_ascii_uppercase().to_string().bright_yellow().bold(),
            rec.shortest_missing.to_string().red().bold(),
            words(rec.shortest_missing),
            rec.shortest_length,
            rec.total_missing
        );
        let lengths: Vec<String> = rec
            .missing_by_length
            .iter()
            .map(|(len, n)| format!("{len}:{n}"))
            .collect();
        println!("     lengths   {}", lengths.join(" "));
        if !rec.prefixes.is_empty() {
            let shown: Vec<String> = rec
                .prefixes
                .iter()
                .take(SHOWN_PREFIXES)
                .map(|l| format!("{} ({})", l.key, l.missing))
                .collect();
            println!("     prefixes  {}", shown.join(", ").green());
        }
        if !rec.subgroups.is_empty() {
            let shown: Vec<String> = rec
                .subgroups
                .iter()
                .take(SHOWN_SUBGROUPS)
                .map(|l| format!("{} ({})", l.key, l.missing))
                .collect();
            println!("     subgroups {}", shown.join(", ").magenta());
        }
    }

    if result.found_count > 0 {
        println!("\n{}", "Your words".bright_cyan().bold());
        let subgroups: Vec<String> = result
            .breakdown
            .by_subgroup
            .iter()
            .map(|(k, n)| format!("{k}-{n}"))
            .collect();
        let prefixes: Vec<String> = result
            .breakdown
            .by_prefix
            .iter()
            .map(|(k, n)| format!("{k}-{n}"))
            .collect();
        println!("  subgroups {}", subgroups.join(" "));
        println!("  prefixes  {}", prefixes.join(" "));
    }
}

/// Print the best untried candidates of a sweep
pub fn print_sweep_result(result: &SweepResult) {
    header("SWEEP");
    println!(
        "{} prefix/length pairs explored in {:.2}s",
        result.jobs,
        result.duration.as_secs_f64()
    );
    if result.entries.is_empty() {
        println!("\n{}", "Nothing left to suggest.".yellow());
        return;
    }

    let mut current = "";
    for entry in &result.entries {
        if entry.prefix != current {
            current = entry.prefix.as_str();
            println!(
                "\n{} {}",
                entry.prefix.to_uppercase().bright_yellow().bold(),
                format!("({} missing)", entry.missing).red()
            );
        }
        let texts: Vec<String> = entry.candidates.iter().map(|c| c.text.clone()).collect();
        println!("  {:>2}: {}", entry.length, texts.join("  "));
    }
}

/// Print a subgroup or prefix listing
pub fn print_listing(title: &str, entries: &[ListingEntry]) {
    header(title);
    for row in entries.chunks(4) {
        let cells: Vec<String> = row
            .iter()
            .map(|entry| {
                let cell = match entry.expected {
                    Some(expected) => format!("{:<7} {}/{expected}", entry.key, entry.found),
                    None if entry.found > 0 => format!("{:<7} {}", entry.key, entry.found),
                    None => entry.key.clone(),
                };
                format!("{cell:<16}")
            })
            .collect();
        println!("  {}", cells.join(""));
    }
    println!("\n{} entries", entries.len());
}
