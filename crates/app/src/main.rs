use std::fmt;
use std::sync::Arc;

use checkin_core::{QuestionGenerator, RandomQuestionGenerator};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing_subscriber::EnvFilter;
use ui::{App, MotionMode, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "Check-in";
const DEFAULT_LOG_FILTER: &str = "checkin_core=info,ui=info,app=info";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidMotion { raw: String },
    EmptyTitle,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid seed: {raw}"),
            ArgsError::InvalidMotion { raw } => {
                write!(f, "invalid motion mode: {raw} (expected animated or instant)")
            }
            ArgsError::EmptyTitle => write!(f, "window title cannot be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--seed <u64>] [--title <text>] [--instant]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --seed <u64>     seed for generated questions (default: random)");
    eprintln!("  --title <text>   window title (default: {DEFAULT_TITLE})");
    eprintln!("  --instant        swap cards without animating");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CHECKIN_SEED, CHECKIN_TITLE, CHECKIN_MOTION=animated|instant, RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    seed: Option<u64>,
    title: String,
    motion_mode: MotionMode,
}

impl Args {
    fn parse(
        env: impl Fn(&str) -> Option<String>,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Command, ArgsError> {
        let mut seed = env("CHECKIN_SEED").map(parse_seed).transpose()?;
        let mut title = env("CHECKIN_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let mut motion_mode = env("CHECKIN_MOTION")
            .map(parse_motion)
            .transpose()?
            .unwrap_or_default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    seed = Some(parse_seed(value)?);
                }
                "--title" => {
                    title = require_value(args, "--title")?;
                }
                "--instant" => motion_mode = MotionMode::Instant,
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if title.trim().is_empty() {
            return Err(ArgsError::EmptyTitle);
        }

        Ok(Command::Run(Self {
            seed,
            title,
            motion_mode,
        }))
    }
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn parse_motion(raw: String) -> Result<MotionMode, ArgsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "animated" => Ok(MotionMode::Animated),
        "instant" => Ok(MotionMode::Instant),
        _ => Err(ArgsError::InvalidMotion { raw }),
    }
}

struct DesktopApp {
    title: String,
    seed: Option<u64>,
    motion_mode: MotionMode,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn motion_mode(&self) -> MotionMode {
        self.motion_mode
    }

    fn question_generator(&self) -> Box<dyn QuestionGenerator> {
        match self.seed {
            Some(seed) => Box::new(RandomQuestionGenerator::seeded(seed)),
            None => Box::new(RandomQuestionGenerator::from_entropy()),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(|key| std::env::var(key).ok(), &mut argv) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            print_usage();
            return Err(err.into());
        }
    };

    init_logging();
    tracing::info!(
        title = %parsed.title,
        seed = ?parsed.seed,
        motion = ?parsed.motion_mode,
        "starting check-in"
    );

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(parsed.title.as_str())
            .with_always_on_top(false),
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: parsed.title,
        seed: parsed.seed,
        motion_mode: parsed.motion_mode,
    });
    let context = build_app_context(&app);

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
