//! Paraulògic Assistant - CLI
//!
//! Tracks found words against the game's clues and ranks letter
//! combinations worth trying, with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use paraulogic_assistant::{
    commands::{
        ExploreConfig, ExploreContext, SweepConfig, add_words, apply_bulk, build_report, explore,
        list_prefixes, list_subgroups, mark, remove_words, run_sweep, set_letter, set_total,
    },
    core::BulkKind,
    engine::CombinationStatus,
    output::{
        print_add_outcome, print_bulk_outcome, print_clues, print_explore_result, print_listing,
        print_mark_result, print_new_game, print_remove_outcome, print_report, print_sweep_result,
    },
    progress::DEFAULT_RECOMMENDATIONS,
    session::Game,
    store::JsonFileStore,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "paraulogic",
    about = "Paraulògic helper: progress against the clues and ranked letter combinations",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game file
    #[arg(
        short,
        long,
        global = true,
        env = "PARAULOGIC_DATA",
        default_value = "paraulogic.json"
    )]
    data: PathBuf,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI dashboard (default)
    Play,

    /// Start a new game, replacing the current one
    New {
        /// Central letter, present in every word
        main: char,

        /// The other letters, e.g. "egirs"
        extras: String,
    },

    /// Add found words (comma-separated lists are accepted)
    Add {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Remove found words
    Remove {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Edit or show the clues
    Clues {
        #[command(subcommand)]
        action: ClueCommands,
    },

    /// Generate candidate combinations for a prefix
    Explore {
        /// One or two starting letters
        prefix: String,

        /// Total combination length, at most 6 letters past the prefix
        length: usize,

        /// Combinations shown
        #[arg(short, long)]
        limit: Option<usize>,

        /// Subgroups to use instead of the clue subgroups
        #[arg(short, long, value_delimiter = ',')]
        subgroups: Vec<String>,
    },

    /// Set a combination's status (correct, tried or untried)
    Mark {
        combination: String,
        status: CombinationStatus,
    },

    /// Progress tables and where to search next
    Report {
        /// Letters recommended
        #[arg(short, long, default_value_t = DEFAULT_RECOMMENDATIONS)]
        top: usize,
    },

    /// Explore every prefix that still has missing words
    Sweep {
        /// Longest length tried for letters without length clues
        #[arg(short, long, default_value = "7")]
        max_length: usize,

        /// Candidates kept per prefix and length
        #[arg(short = 'n', long, default_value = "5")]
        per_job: usize,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// List every subgroup of the letters
    Subgroups,

    /// List every two-letter prefix of the letters
    Prefixes,

    /// Forget every tried combination
    ClearTried,

    /// Delete the saved game
    Delete,
}

#[derive(Subcommand)]
enum ClueCommands {
    /// Total number of words
    Total { count: u32 },

    /// Words starting with a letter, for one length (0 removes it)
    Letter {
        letter: char,
        length: usize,
        count: u32,
    },

    /// Subgroup counts, e.g. "egir-8 eirs-3"
    Subgroups {
        #[arg(required = true)]
        entries: Vec<String>,
    },

    /// Prefix counts, e.g. "er-2 ge-4"
    Prefixes {
        #[arg(required = true)]
        entries: Vec<String>,
    },

    /// Show every clue entered
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    debug!("Game file: {}", cli.data.display());

    let store = JsonFileStore::new(&cli.data);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::New { main, extras } => run_new_command(store, main, &extras),
        Commands::Play => run_play_command(store),
        Commands::Add { words } => run_add_command(store, &words),
        Commands::Remove { words } => run_remove_command(store, &words),
        Commands::Clues { action } => run_clues_command(store, action),
        Commands::Explore {
            prefix,
            length,
            limit,
            subgroups,
        } => {
            let config = ExploreConfig {
                limit,
                subgroups,
                ..ExploreConfig::new(prefix, length)
            };
            run_explore_command(store, &config)
        }
        Commands::Mark {
            combination,
            status,
        } => run_mark_command(store, &combination, status),
        Commands::Report { top } => run_report_command(store, top),
        Commands::Sweep {
            max_length,
            per_job,
            quiet,
        } => {
            let config = SweepConfig {
                max_length,
                per_job,
                show_progress: !quiet,
            };
            run_sweep_command(store, config)
        }
        Commands::Subgroups => run_listing_command(store, false),
        Commands::Prefixes => run_listing_command(store, true),
        Commands::ClearTried => run_clear_tried_command(store),
        Commands::Delete => run_delete_command(store),
    }
}

fn open_game(store: JsonFileStore) -> Result<Game<JsonFileStore>> {
    let path = store.path().display().to_string();
    Game::open(store).with_context(|| format!("could not open {path}"))
}

fn run_new_command(store: JsonFileStore, main: char, extras: &str) -> Result<()> {
    let game = Game::create(store, main, extras).context("could not create the game")?;
    print_new_game(game.alphabet());
    Ok(())
}

fn run_add_command(store: JsonFileStore, words: &[String]) -> Result<()> {
    let mut game = open_game(store)?;
    let outcome = add_words(&mut game, words)?;
    print_add_outcome(&outcome);
    println!("{} words found", game.found_words().len());
    Ok(())
}

fn run_remove_command(store: JsonFileStore, words: &[String]) -> Result<()> {
    let mut game = open_game(store)?;
    let outcome = remove_words(&mut game, words)?;
    print_remove_outcome(&outcome);
    Ok(())
}

fn run_clues_command(store: JsonFileStore, action: ClueCommands) -> Result<()> {
    let mut game = open_game(store)?;
    match action {
        ClueCommands::Total { count } => {
            set_total(&mut game, count)?;
            println!("Total words: {count}");
        }
        ClueCommands::Letter {
            letter,
            length,
            count,
        } => {
            set_letter(&mut game, letter, length, count)?;
            println!("{} × {length}: {count}", letter.to_ascii_uppercase());
        }
        ClueCommands::Subgroups { entries } => {
            let outcome = apply_bulk(&mut game, &entries.join(" "), BulkKind::Subgroups)?;
            print_bulk_outcome(&outcome);
        }
        ClueCommands::Prefixes { entries } => {
            let outcome = apply_bulk(&mut game, &entries.join(" "), BulkKind::Prefixes)?;
            print_bulk_outcome(&outcome);
        }
        ClueCommands::Show => print_clues(&game.clues(), game.alphabet()),
    }
    Ok(())
}

fn run_explore_command(store: JsonFileStore, config: &ExploreConfig) -> Result<()> {
    let game = open_game(store)?;
    let clues = game.clues();
    let ctx = ExploreContext {
        alphabet: game.alphabet(),
        clues: &clues,
        found: game.found_words(),
        tried: game.tried(),
    };
    let result = explore(config, &ctx)?;
    print_explore_result(&result);
    Ok(())
}

fn run_mark_command(
    store: JsonFileStore,
    combination: &str,
    status: CombinationStatus,
) -> Result<()> {
    let mut game = open_game(store)?;
    let result = mark(&mut game, combination, status)?;
    print_mark_result(&result);
    Ok(())
}

fn run_report_command(store: JsonFileStore, top: usize) -> Result<()> {
    let game = open_game(store)?;
    let result = build_report(game.alphabet(), &game.clues(), game.found_words(), top);
    print_report(&result);
    Ok(())
}

fn run_sweep_command(store: JsonFileStore, config: SweepConfig) -> Result<()> {
    let game = open_game(store)?;
    let clues = game.clues();
    let report = game.report();
    let ctx = ExploreContext {
        alphabet: game.alphabet(),
        clues: &clues,
        found: game.found_words(),
        tried: game.tried(),
    };
    let result = run_sweep(&report, &ctx, config)?;
    print_sweep_result(&result);
    Ok(())
}

fn run_listing_command(store: JsonFileStore, prefixes: bool) -> Result<()> {
    let game = open_game(store)?;
    let clues = game.clues();
    if prefixes {
        let entries = list_prefixes(game.alphabet(), &clues, game.found_words());
        print_listing("PREFIXES", &entries);
    } else {
        let entries = list_subgroups(game.alphabet(), &clues, game.found_words());
        print_listing("SUBGROUPS", &entries);
    }
    Ok(())
}

fn run_clear_tried_command(store: JsonFileStore) -> Result<()> {
    let mut game = open_game(store)?;
    let cleared = game.clear_tried().context("failed to save the game")?;
    println!("Forgot {cleared} tried combinations");
    Ok(())
}

fn run_delete_command(store: JsonFileStore) -> Result<()> {
    let game = open_game(store)?;
    let letters = game.alphabet().to_string();
    let store = game.delete().context("failed to delete the game")?;
    println!("Deleted game {letters} from {}", store.path().display());
    Ok(())
}

fn run_play_command(store: JsonFileStore) -> Result<()> {
    use paraulogic_assistant::interactive::{App, run_tui};

    let app = App::new(open_game(store)?);
    run_tui(app)
}
