use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use magnet_logo::{
    CpuBackend, FixedRateScheduler, Fps, FrameRGBA, Logo, RenderOptions, Target, run_loop,
};

#[derive(Parser, Debug)]
#[command(name = "magnet-logo", version, about = "Render the Magnet logo to PNG")]
struct Cli {
    /// Log layout and loop decisions to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a PNG sequence of the swim animation.
    Animate(AnimateArgs),
}

#[derive(Args, Debug)]
struct LogoArgs {
    /// Options JSON (camelCase keys, e.g. {"mantaEnabled": false}).
    #[arg(long)]
    options: Option<PathBuf>,

    /// Box width in pixels (defaults to the options file, then 600).
    #[arg(long)]
    width: Option<f64>,

    /// Box height in pixels (defaults to the options file, then 689).
    #[arg(long)]
    height: Option<f64>,

    /// Put the wordmark beside the mark.
    #[arg(long, default_value_t = false)]
    horizontal: bool,

    /// Do not draw the background square.
    #[arg(long, default_value_t = false)]
    no_background: bool,

    /// Do not draw the manta-ray mark.
    #[arg(long, default_value_t = false)]
    no_manta: bool,

    /// Do not draw the wordmark.
    #[arg(long, default_value_t = false)]
    no_text: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    logo: LogoArgs,

    /// Render the animated pose at this timestamp instead of the still logo.
    #[arg(long)]
    time_ms: Option<f64>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    logo: LogoArgs,

    /// Output directory; frames are written as frame_00000.png, frame_00001.png, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Number of frames to render.
    #[arg(long, default_value_t = 120)]
    frames: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut logo = build_logo(&args.logo)?;
    match args.time_ms {
        Some(t) => {
            logo.render_frame(t)?;
        }
        None => logo.render(None)?,
    }
    write_png(&args.out, logo.frame()?)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let fps = Fps::new(args.fps, 1)?;
    let mut logo = build_logo(&args.logo)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut scheduler = FixedRateScheduler::with_limit(fps, args.frames);
    let mut index = 0u64;
    let out_dir = args.out_dir.clone();
    logo.animate();
    let frames = run_loop(&mut logo, &mut scheduler, |logo, _| {
        let path = out_dir.join(format!("frame_{index:05}.png"));
        write_png(&path, logo.frame()?)?;
        index += 1;
        Ok(())
    })?;
    logo.stop();

    eprintln!("wrote {frames} frames to {}", args.out_dir.display());
    Ok(())
}

fn build_logo(args: &LogoArgs) -> anyhow::Result<Logo<CpuBackend>> {
    let file = match &args.options {
        Some(path) => RenderOptions::from_path(path)?,
        None => RenderOptions::default(),
    };

    let mut flags = RenderOptions {
        width: args.width,
        height: args.height,
        ..RenderOptions::default()
    };
    if args.horizontal {
        flags.horizontal = Some(true);
    }
    if args.no_background {
        flags.background_enabled = Some(false);
    }
    if args.no_manta {
        flags.manta_enabled = Some(false);
    }
    if args.no_text {
        flags.text_enabled = Some(false);
    }
    let options = file.merge(&flags);

    let (w, h) = if options.horizontal == Some(true) {
        (2190.0, 600.0)
    } else {
        (600.0, 689.0)
    };
    let target = Target::Container {
        client_width: w,
        client_height: h,
    };
    Ok(Logo::new(Some(target), CpuBackend::new(), options)?)
}

fn write_png(path: &Path, mut frame: FrameRGBA) -> magnet_logo::LogoResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    frame.unpremultiply();
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
