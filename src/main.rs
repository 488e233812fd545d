//! emotion-avatar CLI
//!
//! Usage:
//!   emotion-avatar --text "so tired today"        # Single classification
//!   emotion-avatar --interactive                  # Type lines, watch the avatar react
//!   emotion-avatar --script events.jsonl          # Replay recorded page events
//!   emotion-avatar --text "lol" --ms 50 --json    # JSON output

use clap::Parser;
use tracing_subscriber::EnvFilter;

use emotion_avatar::config::AvatarConfig;
use emotion_avatar::core::{drive_lines, load_script, replay, AvatarController, Classifier, TerminalSurface};
use emotion_avatar::types::{AvatarSurface, Classification, EmotionLabel, WidgetPatch};
use emotion_avatar::{to_pretty_json, Result, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "emotion-avatar",
    version = VERSION,
    about = "Emoji companion that reacts to the mood of what you type",
    long_about = "emotion-avatar scores text against twelve keyword profiles and\n\
                  shows the winning emotion as an emoji avatar.\n\n\
                  Modes:\n  \
                  --text         Classify one piece of text\n  \
                  --interactive  Each line you type becomes the field's value\n  \
                  --script       Replay a JSON-lines file of timed page events"
)]
struct Args {
    /// Text to classify (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Milliseconds since the previous input, for the rapid-typing rule
    #[arg(long, default_value_t = 1000)]
    ms: u64,

    /// Interactive mode - read lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Replay a JSON-lines event script
    #[arg(short, long)]
    script: Option<String>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<String>,

    /// Turn off IDF scaling of keyword weights
    #[arg(long)]
    no_idf: bool,

    /// Turn off the sentiment bonus pass
    #[arg(long)]
    no_sentiment: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show score breakdown / every patch
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("emotion_avatar=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&args).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;

    if let Some(ref path) = args.script {
        run_script(path, config, args)
    } else if args.interactive {
        run_interactive(config, args).await
    } else if let Some(ref text) = args.text {
        run_single(text, config, args)
    } else {
        // Default to interactive if no mode specified
        run_interactive(config, args).await
    }
}

fn load_config(args: &Args) -> Result<AvatarConfig> {
    let mut config = match args.config {
        Some(ref path) => AvatarConfig::load(path)?,
        None => AvatarConfig::default(),
    };
    if args.no_idf {
        config.classifier.idf_scaling = false;
    }
    if args.no_sentiment {
        config.classifier.sentiment_bonus = false;
    }
    Ok(config)
}

/// Run single text classification
fn run_single(text: &str, config: AvatarConfig, args: &Args) -> Result<()> {
    let classifier = Classifier::with_config(config.classifier);
    let result = classifier.analyze(text, args.ms);

    if args.json {
        println!("{}", to_pretty_json(&result)?);
    } else if args.verbose {
        print_verbose(&result);
    } else {
        println!("{}", result.to_terminal_string());
    }
    Ok(())
}

/// Replay a recorded event script
fn run_script(path: &str, config: AvatarConfig, args: &Args) -> Result<()> {
    let events = load_script(path)?;
    let mut controller = AvatarController::new(config, 0);
    let mut surface = PrintingSurface {
        inner: TerminalSurface::new(args.no_color),
        verbose: args.verbose,
    };
    surface.apply_all(&controller.mount());

    let summary = replay(&mut controller, &events, &mut surface);

    if args.json {
        println!("{}", to_pretty_json(&summary)?);
    } else {
        println!("{}", surface.inner.render_line());
        println!(
            "Replayed {} events: {} classifications, {} patches, final={} {} at {}ms",
            summary.events,
            summary.classifications,
            summary.patches,
            summary.final_label.emoji(),
            summary.final_label,
            summary.finished_at_ms
        );
    }
    Ok(())
}

/// Run interactive mode on the tokio event loop
async fn run_interactive(config: AvatarConfig, args: &Args) -> Result<()> {
    print_header(args.no_color);
    println!("Type a line and press Enter; it becomes the field's text. Ctrl-D to exit.");
    println!();

    let start = tokio::time::Instant::now();
    let mut controller = AvatarController::new(config, 0);
    let mut surface = TerminalSurface::new(args.no_color);
    surface.apply_all(&controller.mount());
    println!("{}", surface.render_line());

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let json = args.json;
    drive_lines(stdin, &mut controller, &mut surface, start, |surface, patches| {
        if json {
            for patch in patches {
                if let Ok(line) = serde_json::to_string(patch) {
                    println!("{}", line);
                }
            }
        } else {
            println!("{}", surface.render_line());
        }
    })
    .await?;

    println!("\nSession ended. Classifications: {}", controller.classification_count());
    Ok(())
}

/// Terminal surface that echoes patches as they arrive
struct PrintingSurface {
    inner: TerminalSurface,
    verbose: bool,
}

impl AvatarSurface for PrintingSurface {
    fn apply(&mut self, patch: &WidgetPatch) {
        self.inner.apply(patch);
        if self.verbose {
            if let Ok(line) = serde_json::to_string(patch) {
                println!("  {}", line);
            }
        }
    }
}

fn print_header(no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  emotion-avatar v{}", VERSION);
        println!("========================================");
    } else {
        println!("\x1b[1m╔════════════════════════════════════════╗\x1b[0m");
        println!("\x1b[1m║  {} emotion-avatar v{}                ║\x1b[0m", EmotionLabel::default().emoji(), VERSION);
        println!("\x1b[1m╚════════════════════════════════════════╝\x1b[0m");
    }
    println!();
}

/// Print verbose classification output
fn print_verbose(result: &Classification) {
    println!("┌─────────────────────────────────────");
    println!("│ {} {} ({})", result.label.emoji(), result.label, result.reason);
    println!("│ tokens={} matched={:?}", result.token_count, result.matched_keywords);
    println!("│ ms since last input: {}", result.ms_since_last_input);
    println!("├─────────────────────────────────────");
    for label in EmotionLabel::ALL {
        let score = result.scores.get(label);
        if score > 0.0 {
            println!("│   {:<11} {} {:.4}", label.name(), label.emoji(), score);
        }
    }
    println!("└─────────────────────────────────────");
}
