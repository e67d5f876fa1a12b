use std::path::{Path, PathBuf};

use anyhow::Context;
use blockscape_common::BlockKind;
use blockscape_input::{HostRequest, InputEvent, InputRouter, InputScript, KeyBindings, Outcome};
use blockscape_kernel::{EngineConfig, Session, World};
use blockscape_render::{DebugTextRenderer, FrameRenderer, Renderer};
use blockscape_tools::{SessionInspector, hotbar};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blockscape-cli", about = "CLI tool for blockscape sessions")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML file with engine settings and key bindings
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print engine version and crate info
    Info,
    /// Generate the world and print block counts
    World {
        /// Print every block as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Start a session and render one frame
    Frame {
        #[arg(long)]
        json: bool,
    },
    /// Replay an input script, then render the final frame
    Play {
        /// YAML input script
        #[arg(short, long)]
        script: PathBuf,
        /// Refuse every pointer-capture request
        #[arg(long)]
        deny_pointer: bool,
        #[arg(long)]
        json: bool,
    },
}

/// Everything the `--config` file may set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct AppConfig {
    #[serde(flatten)]
    engine: EngineConfig,
    key_bindings: KeyBindings,
}

impl AppConfig {
    fn from_yaml_str(src: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(src)?;
        config.engine.validate()?;
        Ok(config)
    }

    fn load(path: &Path) -> anyhow::Result<Self> {
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml_str(&src).with_context(|| format!("invalid config {}", path.display()))
    }
}

/// Result of replaying a script.
#[derive(Debug, Default, PartialEq, Eq)]
struct PlayStats {
    applied: usize,
    ignored: usize,
    capture_requests: usize,
}

/// Feed every script event through the router. The harness plays the host:
/// each capture request is answered right away.
fn play(
    session: &mut Session,
    router: &mut InputRouter,
    script: &InputScript,
    grant_pointer: bool,
) -> PlayStats {
    let _span = tracing::info_span!("play", steps = script.steps.len()).entered();
    let mut stats = PlayStats::default();
    for event in script.events() {
        let response = router.handle(session, &event);
        tracing::debug!(?event, outcome = ?response.outcome, "step");
        match response.outcome {
            Outcome::Applied => stats.applied += 1,
            Outcome::Ignored => stats.ignored += 1,
        }
        if response.request == Some(HostRequest::AcquirePointerCapture) {
            stats.capture_requests += 1;
            router.handle(
                session,
                &InputEvent::PointerCaptureChanged {
                    active: grant_pointer,
                },
            );
        }
    }
    stats
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Info => {
            println!("blockscape-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", blockscape_common::crate_info());
            println!("kernel: {}", blockscape_kernel::crate_info());
            println!("input: {}", blockscape_input::crate_info());
            println!("render: {}", blockscape_render::crate_info());
            println!("tools: {}", blockscape_tools::crate_info());
            println!("jump policy: {:?}", config.engine.jump.policy);
        }
        Commands::World { json } => {
            let world = World::generate();
            if json {
                println!("{}", serde_json::to_string_pretty(world.blocks())?);
            } else {
                println!("World: blocks={} hash={:016x}", world.len(), world.state_hash());
                for kind in BlockKind::ALL {
                    println!("  {kind}: {}", world.count_of(kind));
                }
            }
        }
        Commands::Frame { json } => {
            let mut session = Session::new(config.engine);
            session.start();
            print_frame(&session, json)?;
        }
        Commands::Play {
            script,
            deny_pointer,
            json,
        } => {
            let script = InputScript::load(&script)
                .with_context(|| format!("loading script {}", script.display()))?;
            let mut session = Session::new(config.engine);
            let mut router = InputRouter::new(config.key_bindings);
            let stats = play(&mut session, &mut router, &script, !deny_pointer);
            tracing::info!(
                applied = stats.applied,
                ignored = stats.ignored,
                capture_requests = stats.capture_requests,
                pointer = ?router.pointer(),
                "script finished"
            );
            print_frame(&session, json)?;
        }
    }

    Ok(())
}

fn print_frame(session: &Session, json: bool) -> anyhow::Result<()> {
    if json {
        let frame = FrameRenderer::new().render(session);
        println!("{}", serde_json::to_string_pretty(&frame)?);
        return Ok(());
    }
    print!("{}", DebugTextRenderer::new().render(session));
    println!("{}", SessionInspector::summary(session));
    let bar: Vec<String> = hotbar(session.inventory())
        .iter()
        .map(|slot| match &slot.item {
            Some(item) => match &item.count_label {
                Some(label) => format!("{}:{label}", item.icon),
                None => item.icon.clone(),
            },
            None => "-".to_string(),
        })
        .collect();
    println!("Hotbar: [{}]", bar.join(" "));
    Ok(())
}
