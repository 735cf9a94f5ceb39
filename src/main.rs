use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use war_simulator::card::load_deck_file;
use war_simulator::config::SimulationConfig;
use war_simulator::rng::GameRng;
use war_simulator::simulation::{run_batch, run_game, BatchSummary};

#[derive(Parser)]
#[command(name = "war-simulator")]
#[command(about = "War card game simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    game: GameArgs,

    /// Enable debug logging (every resolved hand)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch of games and print the aggregate results (default)
    Run {
        /// Number of games to simulate
        #[arg(short = 'n', long, default_value = "1000")]
        num_games: usize,

        /// Run games one after another instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// Print the full report of every game
        #[arg(long)]
        reports: bool,

        /// Write the batch summary as JSON to this path
        #[arg(long)]
        json: Option<String>,

        #[command(flatten)]
        game: GameArgs,
    },

    /// Play a single game and print its report
    Game {
        #[command(flatten)]
        game: GameArgs,
    },
}

#[derive(Args, Clone)]
struct GameArgs {
    /// Seed for random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Ranks per suit (13 = standard 52-card deck)
    #[arg(short, long, default_value = "13")]
    rank_span: u8,

    /// JSON deck file dealt unshuffled to every game
    #[arg(short, long)]
    deck: Option<String>,

    /// Safety bound on hands per game
    #[arg(long, default_value = "100000")]
    max_hands: u32,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Run {
            num_games,
            sequential,
            reports,
            json,
            game,
        }) => {
            let mut config = build_config(&game);
            config.num_games = num_games;
            config.parallel = !sequential;
            run_simulation(&config, reports, json.as_deref());
        }
        Some(Commands::Game { game }) => {
            play_single_game(&build_config(&game));
        }
        None => {
            run_simulation(&build_config(&cli.game), false, None);
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(args: &GameArgs) -> SimulationConfig {
    let deck = args.deck.as_deref().map(|path| match load_deck_file(path) {
        Ok(deck) => {
            eprintln!("✓ Loaded {} cards from {}", deck.len(), path);
            deck
        }
        Err(e) => {
            eprintln!("✗ Failed to load deck file '{}': {}", path, e);
            std::process::exit(1);
        }
    });

    let config = SimulationConfig {
        seed: args.seed,
        rank_span: args.rank_span,
        deck,
        max_hands: args.max_hands,
        ..Default::default()
    };

    if let Err(e) = config.validate() {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
    config
}

fn play_single_game(config: &SimulationConfig) {
    let seed = config.seed.unwrap_or_else(|| GameRng::new(None).seed());
    println!("\n=== War Simulator: single game (seed: {}) ===\n", seed);

    match run_game(config, GameRng::new(Some(seed))) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            eprintln!("✗ Game failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_simulation(config: &SimulationConfig, print_reports: bool, json_path: Option<&str>) {
    println!("\n=== War Simulator ===\n");
    println!("Deck: {} cards", config.deck_size());
    println!("Games: {}", config.num_games);
    if let Some(s) = config.seed {
        println!("Seed: {}", s);
    }
    println!();

    let progress = ProgressBar::new(config.num_games as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} games ({per_sec})") {
        progress.set_style(style);
    }

    let summary = match run_batch(config, &progress) {
        Ok(summary) => summary,
        Err(e) => {
            progress.abandon();
            eprintln!("✗ Simulation failed: {}", e);
            std::process::exit(1);
        }
    };
    progress.finish_and_clear();

    if print_reports {
        for report in &summary.reports {
            println!("{}\n", report);
        }
    }

    print_summary(&summary);

    if let Some(path) = json_path {
        match summary.write_json(path) {
            Ok(()) => println!("\nSummary saved to: {}", path),
            Err(e) => eprintln!("\nFailed to save summary: {}", e),
        }
    }
}

fn print_summary(summary: &BatchSummary) {
    let games = summary.num_games as f64;
    let stats = &summary.statistics;

    println!("=== Results ===\n");
    println!("Base seed: {}", summary.base_seed);
    println!("Average hands: {:.1} (min {}, max {})", stats.mean_hands, stats.min_hands, stats.max_hands);
    println!("Average ties: {:.1}", stats.mean_ties);
    println!("Average winner shuffles: {:.1}", stats.mean_winner_shuffles);
    println!(
        "Stronger starting hand won: {:.1}%",
        stats.stronger_hand_win_rate * 100.0
    );
    println!();

    println!("Wins:");
    for (player, wins) in &summary.wins {
        let pct = *wins as f64 / games * 100.0;
        let bar = "█".repeat((pct / 2.0) as usize);
        println!("  {:10} {:5.1}% {} ({})", player, pct, bar, wins);
    }
    println!();

    println!("Hands per game:");
    for bin in &summary.histogram.bins {
        let pct = bin.count as f64 / games * 100.0;
        let bar = "█".repeat(pct as usize);
        println!("  {:>10}: {:5.1}% {} ({})", bin.label(), pct, bar, bin.count);
    }

    println!();
    println!(
        "Simulation completed in {:.2} ms ({:.0} games/sec)",
        summary.elapsed_ms,
        summary.games_per_sec()
    );
}
