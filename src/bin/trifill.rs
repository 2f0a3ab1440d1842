use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use trifill::{Stage, StageConfig, Viewport};

#[derive(Parser, Debug)]
#[command(name = "trifill", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the stage at rest as a single PNG.
    Frame(FrameArgs),
    /// Simulate taps on a virtual clock and write one PNG per frame.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 720)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 1280)]
    height: u32,

    /// Optional stage config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 720)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 1280)]
    height: u32,

    /// Optional stage config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of taps to simulate, one full node cycle each.
    #[arg(long, default_value_t = 1)]
    taps: u32,

    /// Directory receiving frame_NNNNN.png files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<StageConfig> {
    let Some(path) = path else {
        return Ok(StageConfig::default());
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let cfg: StageConfig = serde_json::from_reader(r).with_context(|| "parse config JSON")?;
    Ok(cfg)
}

fn write_png(path: &Path, frame: &trifill::FrameRgba) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    cfg.validate()?;

    let viewport = Viewport::new(args.width, args.height)?;
    let mut stage = Stage::new(cfg, viewport)?;
    let frame = stage.render()?;
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    cfg.validate()?;

    let viewport = Viewport::new(args.width, args.height)?;
    let period = cfg.tick_period();
    let mut stage = Stage::new(cfg, viewport)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    // Virtual clock: every tap runs its full cycle tick by tick, so output is
    // identical regardless of wall-clock timing.
    let mut now = Instant::now();
    let mut frame_count: u32 = 0;

    let rest = stage.render()?;
    write_frame(&args.out_dir, frame_count, &rest)?;
    frame_count += 1;

    for tap in 0..args.taps {
        if !stage.handle_tap(now) {
            anyhow::bail!("tap {tap} was ignored even though the stage was at rest (bug)");
        }
        while stage.is_animating() {
            now += period;
            for frame in stage.pump(now)? {
                write_frame(&args.out_dir, frame_count, &frame)?;
                frame_count += 1;
            }
        }
    }

    eprintln!(
        "wrote {frame_count} frames for {} taps into {}",
        args.taps,
        args.out_dir.display()
    );
    Ok(())
}

fn write_frame(dir: &Path, index: u32, frame: &trifill::FrameRgba) -> anyhow::Result<()> {
    write_png(&dir.join(format!("frame_{index:05}.png")), frame)
}
