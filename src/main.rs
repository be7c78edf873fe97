//! Classroom Arcade CLI
//!
//! Terminal frontend for the arcade:
//! - Play the image tournament from a folder of pictures
//! - Play neon memory from a folder or from hand-made pairs
//! - List the games and print the default config

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use classroom_arcade::memory::{CardContent, FlipOutcome, MemoryCard, MemoryGame, PairSide};
use classroom_arcade::tournament::{Bracket, Candidate, Phase, Side};
use classroom_arcade::{
    catalog, format_clock, generate_default_config, ArcadeConfig, ImageFile, LoggingConfig,
    MemoryStats, ShuffleRng,
};

#[derive(Parser)]
#[command(name = "arcade")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Classroom games in the terminal")]
#[command(long_about = "Classroom Arcade: an ideal-type image tournament and a neon memory game.\nImages are read from a folder; the terminal shows names and paths.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Fixed shuffle seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available games
    Games,

    /// Run an image tournament
    Tournament {
        /// Folder with the competing images
        dir: PathBuf,
        /// Hide candidate names
        #[arg(long)]
        hide_names: bool,
    },

    /// Play neon memory
    Memory {
        #[command(subcommand)]
        mode: MemoryMode,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum MemoryMode {
    /// Two cards per image in a folder (at most `max_auto_pairs` images)
    Auto {
        dir: PathBuf,
    },
    /// Cards from LEFT=RIGHT pairs; a side naming an image file shows the image
    Custom {
        #[arg(short, long = "pair", required = true)]
        pairs: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ArcadeConfig::load_with_env(path)?,
        None => ArcadeConfig::load_default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    init_tracing(&config.logging);
    tracing::debug!("Classroom Arcade v{}", env!("CARGO_PKG_VERSION"));

    let rng = ShuffleRng::from_optional(config.seed);

    match cli.command {
        Commands::Games => {
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(catalog())?);
            } else {
                println!("{:<24} {:<8} {:<8} DESCRIPTION", "GAME", "STATUS", "ACCENT");
                for game in catalog() {
                    let status = if game.disabled { "soon" } else { "ready" };
                    println!(
                        "{:<24} {:<8} {:<8} {}",
                        game.title,
                        status,
                        game.accent.as_str(),
                        game.description
                    );
                }
            }
        }

        Commands::Tournament { dir, hide_names } => {
            let show_names = config.tournament.show_names && !hide_names;
            let files = scan_images(&dir)?;
            let seed = rng.seed();

            let mut bracket = Bracket::new(rng);
            bracket
                .load_files(&files)
                .with_context(|| format!("Cannot start a tournament from {}", dir.display()))?;

            let settle_delay = config.tournament.settle_delay();
            if let Some(report) = play_tournament(&mut bracket, show_names, settle_delay).await? {
                print_tournament_report(&report, seed, cli.format)?;
            }
        }

        Commands::Memory { mode } => {
            let mut game = MemoryGame::new(config.memory.clone(), rng);
            match mode {
                MemoryMode::Auto { dir } => {
                    let files = scan_images(&dir)?;
                    game.start_auto(&files)
                        .with_context(|| format!("Cannot build a deck from {}", dir.display()))?;
                }
                MemoryMode::Custom { pairs } => {
                    fill_custom_pairs(&mut game, &pairs)?;
                }
            }

            if let Some(stats) = play_memory(&mut game).await? {
                print_memory_report(&stats, cli.format)?;
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "classroom_arcade={level},arcade={level}",
            level = logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Image-looking files in `dir`, sorted by name
fn scan_images(dir: &Path) -> anyhow::Result<Vec<ImageFile>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read folder {}", dir.display()))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let files: Vec<ImageFile> = paths.iter().map(|p| ImageFile::from_path(p)).collect();
    tracing::info!(
        folder = %dir.display(),
        files = files.len(),
        images = files.iter().filter(|f| f.is_image()).count(),
        "scanned folder"
    );
    Ok(files)
}

fn stdin_lines() -> Lines<BufReader<Stdin>> {
    BufReader::new(tokio::io::stdin()).lines()
}

fn is_quit(line: &str) -> bool {
    line.trim() == "q"
}

// ============================================================================
// Tournament
// ============================================================================

/// Final result. Name and image are left out while names are hidden, since
/// the image path carries the file name.
#[derive(Serialize)]
struct TournamentReport {
    winner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    entrants: usize,
    rounds: usize,
    finished_at: DateTime<Utc>,
}

impl TournamentReport {
    fn new(winner: &Candidate, show_names: bool, entrants: usize, rounds: usize) -> Self {
        Self {
            winner: winner.id.clone(),
            name: winner.visible_name(show_names).map(str::to_string),
            image: show_names.then(|| winner.image.clone()),
            entrants,
            rounds,
            finished_at: Utc::now(),
        }
    }
}

fn label(candidate: &Candidate, show_names: bool) -> String {
    let rotation = match candidate.rotation {
        0 => String::new(),
        r => format!(" ↻{}°", r),
    };
    match candidate.visible_name(show_names) {
        Some(name) => format!("{} ({}){}", name, candidate.image, rotation),
        None => format!("{}{}", candidate.id, rotation),
    }
}

/// Interactive bracket. Returns `None` when the player quits early.
async fn play_tournament(
    bracket: &mut Bracket,
    show_names: bool,
    settle_delay: Duration,
) -> anyhow::Result<Option<TournamentReport>> {
    let mut input = stdin_lines();
    let entrants = bracket.candidates().len();

    println!("{} entrants. Commands: 1/2 pick, z1/z2 zoom, r rotate, y pick zoomed, c close, q quit", entrants);

    loop {
        match bracket.phase() {
            Phase::Playing => {
                if let Some(candidate) = bracket.previewed() {
                    println!("\n  [zoom] {}", label(candidate, show_names));
                } else {
                    let Some((left, right)) = bracket.current_pair() else {
                        anyhow::bail!("Bracket has no pair to show");
                    };
                    println!(
                        "\n{} · match {}\n  1) {}\n  2) {}",
                        bracket.round_label(),
                        bracket.match_number(),
                        label(left, show_names),
                        label(right, show_names)
                    );
                }

                let Some(line) = input.next_line().await? else {
                    return Ok(None);
                };

                let picked = match line.trim() {
                    "1" => bracket.select(Side::Left).map(|c| c.name.clone()),
                    "2" => bracket.select(Side::Right).map(|c| c.name.clone()),
                    "y" => bracket.confirm_preview().map(|c| c.name.clone()),
                    "z1" | "z2" => {
                        let side = if line.trim() == "z1" { Side::Left } else { Side::Right };
                        if let Err(e) = bracket.open_preview(side) {
                            eprintln!("{}", e);
                        }
                        continue;
                    }
                    "r" => {
                        match bracket.rotate_preview() {
                            Ok(deg) => println!("Rotated to {}°", deg),
                            Err(e) => eprintln!("{}", e),
                        }
                        continue;
                    }
                    "c" => {
                        bracket.close_preview();
                        continue;
                    }
                    "q" => return Ok(None),
                    other => {
                        eprintln!("Unknown command: {:?}", other);
                        continue;
                    }
                };

                match picked {
                    Ok(name) => {
                        println!("  → {} advances", if show_names { name.as_str() } else { "pick" });
                        tokio::time::sleep(settle_delay).await;
                        bracket.settle()?;
                    }
                    Err(e) => eprintln!("{}", e),
                }
            }

            Phase::Bye => {
                if let Some(lucky) = bracket.bye_candidate() {
                    println!(
                        "\nLucky bye! {} goes through. Press Enter for the next round, q to quit.",
                        label(lucky, show_names)
                    );
                }
                match input.next_line().await? {
                    None => return Ok(None),
                    Some(line) if is_quit(&line) => return Ok(None),
                    Some(_) => {}
                }
                bracket.advance()?;
            }

            Phase::Winner => {
                let Some(winner) = bracket.winner() else {
                    anyhow::bail!("Bracket finished without a winner");
                };
                return Ok(Some(TournamentReport::new(
                    winner,
                    show_names,
                    entrants,
                    bracket.round_number(),
                )));
            }

            Phase::Setup => return Ok(None),
        }
    }
}

fn print_tournament_report(
    report: &TournamentReport,
    seed: u64,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(report)?;
            value["seed"] = serde_json::json!(seed);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            match (&report.name, &report.image) {
                (Some(name), Some(image)) => println!("\n🎉 Champion: {} ({})", name, image),
                _ => println!("\n🎉 Champion: {}", report.winner),
            }
            println!("   {} entrants over {} rounds (seed {})", report.entrants, report.rounds, seed);
        }
    }
    Ok(())
}

// ============================================================================
// Memory
// ============================================================================

/// Load LEFT=RIGHT pairs into the editor and start the custom game
fn fill_custom_pairs(game: &mut MemoryGame, pairs: &[String]) -> anyhow::Result<()> {
    game.open_custom_setup()?;

    for (i, raw) in pairs.iter().enumerate() {
        let (left, right) = raw
            .split_once('=')
            .with_context(|| format!("Pair {:?} is not in LEFT=RIGHT form", raw))?;

        let editor = game.editor_mut();
        let reuse = if i == 0 { editor.rows().first().map(|r| r.id) } else { None };
        let row = match reuse {
            Some(id) => id,
            None => editor.add_row(),
        };
        editor.set(row, PairSide::Left, side_content(left.trim()))?;
        editor.set(row, PairSide::Right, side_content(right.trim()))?;
    }

    game.review_custom()?;
    game.start_custom()?;
    Ok(())
}

fn side_content(raw: &str) -> CardContent {
    let path = Path::new(raw);
    if path.is_file() && ImageFile::from_path(path).is_image() {
        CardContent::Image(raw.to_string())
    } else {
        CardContent::Text(raw.to_string())
    }
}

#[derive(Clone, Copy)]
enum Step {
    Resolve,
    ShowResult,
}

async fn wait_until(at: Option<Instant>) {
    match at {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

/// Interactive board. Returns `None` when the player quits early.
async fn play_memory(game: &mut MemoryGame) -> anyhow::Result<Option<MemoryStats>> {
    let mut input = stdin_lines();
    let mut clock = tokio::time::interval(Duration::from_secs(1));
    clock.tick().await;

    let mut scheduled: Option<(Instant, Step)> = None;
    print_board(game);

    loop {
        let wake = scheduled.map(|(at, _)| at);

        tokio::select! {
            line = input.next_line() => {
                let Some(line) = line? else { return Ok(None) };
                if is_quit(&line) {
                    return Ok(None);
                }
                let line = line.trim();

                let Some(id) = line
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| game.cards().get(i))
                    .map(|c| c.id.clone())
                else {
                    eprintln!("Enter a card number between 1 and {}", game.cards().len());
                    continue;
                };

                match game.flip(&id) {
                    FlipOutcome::Ignored => eprintln!("That card can't be flipped right now"),
                    FlipOutcome::Revealed => print_board(game),
                    FlipOutcome::Pending { delay, .. } => {
                        print_board(game);
                        scheduled = Some((Instant::now() + delay, Step::Resolve));
                    }
                }
            }

            _ = clock.tick() => {
                game.tick();
            }

            _ = wait_until(wake) => {
                let Some((_, step)) = scheduled.take() else { continue };
                match step {
                    Step::Resolve => {
                        if let Some(resolution) = game.resolve() {
                            print_board(game);
                            if let Some(delay) = resolution.result_delay {
                                scheduled = Some((Instant::now() + delay, Step::ShowResult));
                            }
                        }
                    }
                    Step::ShowResult => {
                        return Ok(Some(game.show_result()?));
                    }
                }
            }
        }
    }
}

fn card_face(card: &MemoryCard) -> String {
    if !card.is_revealed() {
        return "??".to_string();
    }
    let face = match &card.content {
        CardContent::Text(text) => text.clone(),
        CardContent::Image(path) => Path::new(path)
            .file_name()
            .map(|n| format!("🖼 {}", n.to_string_lossy()))
            .unwrap_or_else(|| path.clone()),
    };
    if card.matched {
        format!("✓ {}", face)
    } else {
        face
    }
}

fn board_columns(cards: usize) -> usize {
    if cards >= 20 {
        5
    } else {
        4
    }
}

fn print_board(game: &MemoryGame) {
    let cards = game.cards();
    let columns = board_columns(cards.len());

    println!(
        "\n⏱ {}   moves {}   pairs {}/{}",
        format_clock(game.elapsed_secs()),
        game.moves(),
        game.matched_pairs(),
        game.total_pairs()
    );
    for (row, chunk) in cards.chunks(columns).enumerate() {
        let line: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(col, card)| {
                let face: String = card_face(card).chars().take(14).collect();
                format!("{:>2}) {:<14}", row * columns + col + 1, face)
            })
            .collect();
        println!("{}", line.join("  "));
    }
}

fn print_memory_report(stats: &MemoryStats, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(stats)?;
            value["finished_at"] = serde_json::json!(Utc::now());
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            println!("\nCLEAR!");
            println!("  time   {}", format_clock(stats.elapsed_secs));
            println!("  moves  {}", stats.moves);
            println!("  pairs  {}", stats.pairs);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["arcade", "--seed", "3", "tournament", "pics", "--hide-names"]).unwrap();
        assert_eq!(cli.seed, Some(3));
        assert!(matches!(cli.command, Commands::Tournament { hide_names: true, .. }));

        let cli = Cli::try_parse_from(["arcade", "memory", "custom", "-p", "a=b", "--pair", "c=d"]).unwrap();
        match cli.command {
            Commands::Memory { mode: MemoryMode::Custom { pairs } } => assert_eq!(pairs, ["a=b", "c=d"]),
            _ => panic!("expected custom memory"),
        }

        assert!(Cli::try_parse_from(["arcade", "memory", "custom"]).is_err());
    }

    #[test]
    fn test_custom_pairs_start_game() {
        let mut game = MemoryGame::new(Default::default(), ShuffleRng::new(1));
        let pairs = vec!["H=hydrogen".to_string(), "O = oxygen".to_string()];
        fill_custom_pairs(&mut game, &pairs).unwrap();
        assert_eq!(game.cards().len(), 4);
        assert!(game
            .cards()
            .iter()
            .any(|c| c.content == CardContent::Text("oxygen".into())));

        let mut game = MemoryGame::new(Default::default(), ShuffleRng::new(1));
        assert!(fill_custom_pairs(&mut game, &["no-separator".to_string()]).is_err());
    }

    #[test]
    fn test_scan_images_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.jpg", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        let files = scan_images(dir.path()).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.jpg", "b.png", "notes.txt"]);
        assert_eq!(files.iter().filter(|f| f.is_image()).count(), 2);
    }

    #[test]
    fn test_hidden_names_stay_hidden() {
        let mut owl = Candidate::new(4, "owl", "/pics/owl.png");
        assert_eq!(label(&owl, true), "owl (/pics/owl.png)");
        owl.rotate();
        assert_eq!(label(&owl, false), "cand-4 ↻90°");

        let report = TournamentReport::new(&owl, false, 5, 3);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["winner"], "cand-4");
        assert!(json.get("name").is_none());
        assert!(json.get("image").is_none());
        assert!(!json.to_string().contains("owl"));

        let report = TournamentReport::new(&owl, true, 5, 3);
        assert_eq!(report.name.as_deref(), Some("owl"));
        assert_eq!(report.image.as_deref(), Some("/pics/owl.png"));
    }

    #[test]
    fn test_quit_command() {
        assert!(is_quit("q"));
        assert!(is_quit("  q\t"));
        assert!(!is_quit(""));
        assert!(!is_quit("1"));
    }

    #[test]
    fn test_card_face() {
        let mut card = MemoryCard::new(
            "card-0-1",
            "pair-0",
            CardContent::Image("/pics/owl.png".into()),
            classroom_arcade::memory::NeonColor { hue: 10 },
        );
        assert_eq!(card_face(&card), "??");
        card.flipped = true;
        assert_eq!(card_face(&card), "🖼 owl.png");
        card.matched = true;
        assert_eq!(card_face(&card), "✓ 🖼 owl.png");
    }
}
