use std::{
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "shapewatch", version)]
struct Cli {
    /// Log filter used when `RUST_LOG` is not set (e.g. `info`, `shapewatch=debug`).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a shape list once and write a PNG.
    Render(RenderArgs),
    /// Watch a shape list and re-render the PNG whenever it changes.
    Watch(WatchArgs),
}

#[derive(Args, Debug)]
struct SurfaceArgs {
    /// Surface width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Background color (`#rrggbb` or `#rrggbbaa`); transparent when omitted.
    #[arg(long)]
    background: Option<shapewatch::Rgba8>,
}

impl SurfaceArgs {
    fn settings(&self) -> shapewatch::RenderSettings {
        shapewatch::RenderSettings {
            width: self.width,
            height: self.height,
            clear_rgba: self.background,
        }
    }
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input shape list JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    surface: SurfaceArgs,
}

#[derive(Parser, Debug)]
struct WatchArgs {
    /// Shape list JSON to watch.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path, rewritten on every scene change.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    surface: SurfaceArgs,

    /// Frame loop rate.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=1000))]
    fps: u32,

    /// Stop after this many frame ticks.
    #[arg(long)]
    frames: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Watch(args) => cmd_watch(args),
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = shapewatch::load_scene(&args.in_path)
        .with_context(|| format!("load shapes '{}'", args.in_path.display()))?;

    let mut renderer = shapewatch::ShapeRenderer::new();
    let (frame, stats) =
        shapewatch::render_scene(&mut renderer, &scene, &args.surface.settings())?;
    if stats.shapes_skipped > 0 {
        tracing::warn!(skipped = stats.shapes_skipped, "some shapes were not drawn");
    }

    frame
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Host frame loop: one scene snapshot per tick, re-render only when the snapshot changed.
fn cmd_watch(args: WatchArgs) -> anyhow::Result<()> {
    let store = shapewatch::SceneStore::new();
    let watcher = shapewatch::SceneWatcher::spawn(&args.in_path, store.clone())
        .with_context(|| format!("watch '{}'", args.in_path.display()))?;

    let settings = args.surface.settings();
    let tick = Duration::from_secs_f64(1.0 / f64::from(args.fps));
    let mut renderer = shapewatch::ShapeRenderer::new();
    let mut drawn: Option<Arc<shapewatch::Scene>> = None;
    let mut ticks = 0u64;

    while args.frames.is_none_or(|max| ticks < max) {
        let started = Instant::now();

        let scene = store.snapshot();
        if !drawn.as_ref().is_some_and(|prev| Arc::ptr_eq(prev, &scene)) {
            let (frame, stats) = shapewatch::render_scene(&mut renderer, &scene, &settings)?;
            frame
                .save_png(&args.out)
                .with_context(|| format!("write png '{}'", args.out.display()))?;
            tracing::info!(
                tick = ticks,
                drawn = stats.shapes_drawn,
                skipped = stats.shapes_skipped,
                out = %args.out.display(),
                "frame rendered"
            );
            drawn = Some(scene);
        }

        ticks += 1;
        if let Some(rest) = tick.checked_sub(started.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    watcher.stop();
    Ok(())
}
