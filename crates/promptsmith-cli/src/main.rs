use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use promptsmith_contracts::batch::{BatchSettings, VaryFlag};
use promptsmith_contracts::request::{ComposeRequest, RequestMode};
use promptsmith_contracts::random::{RandomSource, SeededRandom, ThreadRandom};
use promptsmith_contracts::weights::{Scope, DEFAULT_NEGATIVE_WEIGHT};
use promptsmith_engine::{
    add_negative_weight, append_suggestion, format_token, merge_into_field, parse_token,
    ComposeSession, Composer,
};
use serde_json::{json, Value};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PROMPTSMITH_LOG";
const DEFAULT_OUT_DIR: &str = ".promptsmith";

#[derive(Debug, Parser)]
#[command(name = "promptsmith", version, about = "Compose image-generation prompts from traits")]
struct Cli {
    /// Trait catalog JSON; falls back to PROMPTSMITH_CATALOG, then the built-in tables.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Compile(CompileArgs),
    Batch(BatchArgs),
    Vary(VaryArgs),
    #[command(subcommand)]
    Token(TokenCommand),
    Suggest(SuggestArgs),
    Catalog(CatalogArgs),
}

#[derive(Debug, Parser)]
struct CompileArgs {
    #[arg(long)]
    request: PathBuf,
    #[arg(long, value_enum, default_value_t = ModeArg::TextToImage)]
    mode: ModeArg,
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out: PathBuf,
    #[arg(long)]
    events: Option<PathBuf>,
    #[arg(long)]
    receipt: Option<PathBuf>,
}

#[derive(Debug, Parser)]
struct BatchArgs {
    #[arg(long)]
    request: PathBuf,
    #[arg(long, default_value_t = 4)]
    count: usize,
    #[command(flatten)]
    sampling: SamplingArgs,
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out: PathBuf,
    #[arg(long)]
    events: Option<PathBuf>,
    #[arg(long)]
    receipt: Option<PathBuf>,
}

#[derive(Debug, Parser)]
struct VaryArgs {
    /// Defaults to the configured world.
    #[arg(long)]
    world: Option<String>,
    #[arg(long, default_value_t = 1)]
    count: usize,
    #[command(flatten)]
    sampling: SamplingArgs,
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out: PathBuf,
    #[arg(long)]
    events: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
struct SamplingArgs {
    #[arg(long, value_enum, default_value_t = PresetArg::Default)]
    preset: PresetArg,
    /// Flags enabled on top of the preset.
    #[arg(long, value_enum, value_delimiter = ',')]
    vary: Vec<VaryArg>,
    /// Flags disabled after the preset and `--vary` are applied.
    #[arg(long, value_enum, value_delimiter = ',')]
    keep: Vec<VaryArg>,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Subcommand)]
enum TokenCommand {
    /// Render one weighted token.
    Format {
        #[arg(long)]
        term: String,
        #[arg(long)]
        weight: f64,
        #[arg(long, value_enum, default_value_t = ScopeArg::Global)]
        scope: ScopeArg,
    },
    /// Decode a token back into term, weight and scope.
    Parse { token: String },
    /// Merge tokens into a comma-separated field without duplicates.
    Merge {
        #[arg(long, default_value = "")]
        field: String,
        tokens: Vec<String>,
    },
    /// Add a global exclusion token to a negative prompt.
    Exclude {
        #[arg(long, default_value = "")]
        field: String,
        #[arg(long)]
        term: String,
        #[arg(long, default_value_t = DEFAULT_NEGATIVE_WEIGHT)]
        weight: f64,
    },
}

#[derive(Debug, Parser)]
struct SuggestArgs {
    #[arg(long)]
    prompt: String,
    #[arg(long)]
    text: String,
}

#[derive(Debug, Parser)]
struct CatalogArgs {
    /// Print only this world's role/clothing/environment tables.
    #[arg(long)]
    world: Option<String>,
    #[arg(long)]
    templates: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    TextToImage,
    Variation,
    Upscale,
}

impl From<ModeArg> for RequestMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TextToImage => RequestMode::TextToImage,
            ModeArg::Variation => RequestMode::Variation,
            ModeArg::Upscale => RequestMode::Upscale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    Default,
    PoseSheet,
    None,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VaryArg {
    Outfit,
    Location,
    Weather,
    Framing,
    Lens,
    Focus,
    Motion,
    Lighting,
    Age,
    Pose,
    Emotion,
    Hair,
    SkinTexture,
}

impl From<VaryArg> for VaryFlag {
    fn from(flag: VaryArg) -> Self {
        match flag {
            VaryArg::Outfit => VaryFlag::Outfit,
            VaryArg::Location => VaryFlag::Location,
            VaryArg::Weather => VaryFlag::Weather,
            VaryArg::Framing => VaryFlag::Framing,
            VaryArg::Lens => VaryFlag::Lens,
            VaryArg::Focus => VaryFlag::Focus,
            VaryArg::Motion => VaryFlag::Motion,
            VaryArg::Lighting => VaryFlag::Lighting,
            VaryArg::Age => VaryFlag::Age,
            VaryArg::Pose => VaryFlag::Pose,
            VaryArg::Emotion => VaryFlag::Emotion,
            VaryArg::Hair => VaryFlag::Hair,
            VaryArg::SkinTexture => VaryFlag::SkinTexture,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScopeArg {
    Global,
    Subject,
    Background,
}

impl From<ScopeArg> for Scope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Global => Scope::Global,
            ScopeArg::Subject => Scope::Subject,
            ScopeArg::Background => Scope::Background,
        }
    }
}

fn main() {
    init_tracing();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("promptsmith error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Compile(args) => {
            let composer = load_composer(&cli.catalog, &cli.config)?;
            run_compile(composer, args)
        }
        Command::Batch(args) => {
            let composer = load_composer(&cli.catalog, &cli.config)?;
            run_batch(composer, args)
        }
        Command::Vary(args) => {
            let composer = load_composer(&cli.catalog, &cli.config)?;
            run_vary(composer, args)
        }
        Command::Token(command) => run_token(command),
        Command::Suggest(args) => {
            println!("{}", append_suggestion(&args.prompt, &args.text));
            Ok(0)
        }
        Command::Catalog(args) => {
            let composer = load_composer(&cli.catalog, &cli.config)?;
            run_catalog(&composer, args)
        }
    }
}

fn load_composer(catalog: &Option<PathBuf>, config: &Option<PathBuf>) -> Result<Composer> {
    Composer::from_sources(catalog.as_deref(), config.as_deref())
}

fn run_compile(composer: Composer, args: CompileArgs) -> Result<i32> {
    let request = read_request(&args.request)?;
    let events_path = events_path(&args.out, args.events.as_deref());
    let mut session = ComposeSession::start(composer, &events_path)?;
    let compiled = session.compile(&request, args.mode.into())?;
    let output = json!({
        "session_id": session.session_id(),
        "positive_prompt": compiled.positive_prompt,
        "negative_prompt": compiled.negative_prompt,
        "request_text": session.request_text().unwrap_or_default(),
        "aspect_ratio": request.aspect_ratio.ratio(),
    });
    session.finish(args.receipt.as_deref())?;
    print_json(&output)?;
    Ok(0)
}

fn run_batch(composer: Composer, args: BatchArgs) -> Result<i32> {
    let request = read_request(&args.request)?;
    let settings = batch_settings(&args.sampling);
    let mut rng = random_source(args.sampling.seed);
    let events_path = events_path(&args.out, args.events.as_deref());
    let mut session = ComposeSession::start(composer, &events_path)?;
    let prompts = session.compile_batch(&request, &settings, args.count, rng.as_mut())?;
    session.finish(args.receipt.as_deref())?;
    debug!(count = prompts.len(), "batch sampled");
    for prompt in prompts {
        println!("{prompt}");
    }
    Ok(0)
}

fn run_vary(composer: Composer, args: VaryArgs) -> Result<i32> {
    let world = args
        .world
        .clone()
        .unwrap_or_else(|| composer.config().default_world.clone());
    composer.catalog().world(&world)?;
    let settings = batch_settings(&args.sampling);
    let mut rng = random_source(args.sampling.seed);
    let events_path = events_path(&args.out, args.events.as_deref());
    let mut session = ComposeSession::start(composer, &events_path)?;
    let instructions = session.sample_instructions(&settings, &world, args.count, rng.as_mut())?;
    session.finish(None)?;
    for instruction in instructions {
        println!("{instruction}");
    }
    Ok(0)
}

fn run_token(command: TokenCommand) -> Result<i32> {
    match command {
        TokenCommand::Format {
            term,
            weight,
            scope,
        } => println!("{}", format_token(&term, weight, scope.into())?),
        TokenCommand::Parse { token } => {
            let parsed = parse_token(&token)?;
            print_json(&json!({
                "term": parsed.term,
                "weight": parsed.weight,
                "scope": parsed.scope.label(),
            }))?;
        }
        TokenCommand::Merge { field, tokens } => {
            println!("{}", merge_into_field(&field, tokens.as_slice()))
        }
        TokenCommand::Exclude {
            field,
            term,
            weight,
        } => println!("{}", add_negative_weight(&field, &term, weight)?),
    }
    Ok(0)
}

fn run_catalog(composer: &Composer, args: CatalogArgs) -> Result<i32> {
    let catalog = composer.catalog();
    let payload = if args.templates {
        serde_json::to_value(catalog.templates())?
    } else if let Some(world) = args.world.as_deref() {
        serde_json::to_value(catalog.world(world)?)?
    } else {
        serde_json::to_value(catalog)?
    };
    print_json(&payload)?;
    Ok(0)
}

fn read_request(path: &Path) -> Result<ComposeRequest> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read request {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid request {}", path.display()))
}

fn events_path(out: &Path, events: Option<&Path>) -> PathBuf {
    events
        .map(Path::to_path_buf)
        .unwrap_or_else(|| out.join("events.jsonl"))
}

fn batch_settings(args: &SamplingArgs) -> BatchSettings {
    let mut settings = match args.preset {
        PresetArg::Default => BatchSettings::default(),
        PresetArg::PoseSheet => BatchSettings::pose_sheet(),
        PresetArg::None => BatchSettings::none(),
        PresetArg::All => BatchSettings::all(),
    };
    for flag in &args.vary {
        settings.set((*flag).into(), true);
    }
    for flag in &args.keep {
        settings.set((*flag).into(), false);
    }
    settings
}

fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
