//! Sweep command
//!
//! Explores every clued prefix that still has missing words, at every length
//! its starting letter is still missing, and keeps the best untried
//! candidates of each. Jobs run in parallel.

use super::explore::{ExploreConfig, ExploreContext, MAX_FREE_LETTERS, explore};
use crate::core::MIN_WORD_LENGTH;
use crate::engine::Combination;
use crate::progress::ProgressReport;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Sweep settings
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Longest length explored when a letter has no length clues
    pub max_length: usize,
    /// Untried candidates kept per prefix and length
    pub per_job: usize,
    pub show_progress: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_length: 7,
            per_job: 5,
            show_progress: true,
        }
    }
}

/// Best untried candidates for one prefix and length
#[derive(Debug, Clone)]
pub struct SweepEntry {
    pub prefix: String,
    pub length: usize,
    /// Words still missing for the prefix
    pub missing: u32,
    pub candidates: Vec<Combination>,
}

#[derive(Debug)]
pub struct SweepResult {
    pub entries: Vec<SweepEntry>,
    pub jobs: usize,
    pub duration: Duration,
}

/// Prefix and length pairs worth exploring, in prefix then length order
///
/// Lengths leaving more than [`MAX_FREE_LETTERS`] letters after the prefix
/// are skipped.
#[must_use]
pub fn sweep_jobs(report: &ProgressReport, max_length: usize) -> Vec<(String, usize, u32)> {
    let mut jobs = Vec::new();
    for (prefix, bucket) in report.per_prefix.iter().filter(|(_, b)| b.missing > 0) {
        let letter = prefix
            .chars()
            .next()
            .and_then(|first| report.per_letter.get(&first));
        let lengths: Vec<usize> = match letter {
            Some(progress) if !progress.lengths.is_empty() => progress
                .missing_lengths()
                .map(|(len, _)| len)
                .collect(),
            _ => (MIN_WORD_LENGTH..=max_length).collect(),
        };
        let longest = prefix.len() + MAX_FREE_LETTERS;
        for length in lengths
            .into_iter()
            .filter(|&len| len >= prefix.len() && len <= longest)
        {
            jobs.push((prefix.clone(), length, bucket.missing));
        }
    }
    jobs
}

/// Explore every job and keep the best untried candidates of each
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or a job
/// cannot be explored.
pub fn run_sweep(
    report: &ProgressReport,
    ctx: &ExploreContext<'_>,
    config: SweepConfig,
) -> Result<SweepResult> {
    let jobs = sweep_jobs(report, config.max_length);
    debug!("sweep {} jobs", jobs.len());

    let pb = if config.show_progress {
        let pb = ProgressBar::new(jobs.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )?
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut entries = jobs
        .par_iter()
        .map(|(prefix, length, missing)| -> Result<SweepEntry> {
            let explore_config = ExploreConfig {
                limit: Some(config.per_job),
                untried_only: true,
                ..ExploreConfig::new(prefix.clone(), *length)
            };
            let result = explore(&explore_config, ctx);
            pb.inc(1);
            pb.set_message(format!("{prefix}…"));
            let candidates = result?
                .combinations
                .into_iter()
                .map(|c| c.combination)
                .collect();
            Ok(SweepEntry {
                prefix: prefix.clone(),
                length: *length,
                missing: *missing,
                candidates,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    pb.finish_with_message("done");

    entries.retain(|e| !e.candidates.is_empty());
    entries.sort_by(|a, b| a.prefix.cmp(&b.prefix).then(a.length.cmp(&b.length)));

    Ok(SweepResult {
        entries,
        jobs: jobs.len(),
        duration: start.elapsed(),
    })
}
