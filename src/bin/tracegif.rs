use std::path::PathBuf;

use clap::Parser;
use sha2::Digest as _;

use tracegif::pipeline::{DEFAULT_LOG_PATH, DEFAULT_OUT_PATH};

#[derive(Parser, Debug)]
#[command(
    name = "tracegif",
    version,
    about = "Render a tool-execution trace as an animated terminal GIF"
)]
struct Cli {
    /// JSON-lines event log to read.
    #[arg(long = "log", default_value = DEFAULT_LOG_PATH)]
    log_path: PathBuf,

    /// Output GIF path (parent directories are created).
    #[arg(long, default_value = DEFAULT_OUT_PATH)]
    out: PathBuf,

    /// Tool whose progress updates are animated.
    #[arg(long, default_value = tracegif::events::reader::DEFAULT_TOOL_NAME)]
    tool: String,

    /// Font file to use instead of searching for DejaVu Sans Mono.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Extra directory to scan for fonts (repeatable).
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,

    /// Caption shown in the window title bar.
    #[arg(long)]
    title: Option<String>,

    /// Command line shown above the output.
    #[arg(long)]
    prompt: Option<String>,

    /// GIF quantization speed, 1 (best) to 30 (fastest).
    #[arg(long, default_value_t = tracegif::encode::gif::DEFAULT_GIF_SPEED,
          value_parser = clap::value_parser!(i32).range(1..=30))]
    speed: i32,

    /// Also write every frame as a PNG into this directory.
    #[arg(long)]
    png_dir: Option<PathBuf>,

    /// Print diagnostics about font resolution (family, origin + SHA-256 of font bytes).
    #[arg(long)]
    dump_font: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let opts = demo_opts(&cli);
    let report = tracegif::make_demo(&opts)?;

    if cli.dump_font {
        dump_font_diagnostics(report.font.as_ref());
    }

    println!("wrote {}", report.out_path.display());
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn demo_opts(cli: &Cli) -> tracegif::DemoOpts {
    let mut opts = tracegif::DemoOpts {
        log_path: cli.log_path.clone(),
        out_path: cli.out.clone(),
        tool_name: cli.tool.clone(),
        gif_speed: cli.speed,
        png_dir: cli.png_dir.clone(),
        ..tracegif::DemoOpts::default()
    };
    opts.font.path = cli.font.clone();
    opts.font.search_dirs.extend(cli.font_dirs.iter().cloned());
    if let Some(title) = &cli.title {
        opts.style.title = title.clone();
    }
    if let Some(prompt) = &cli.prompt {
        opts.style.prompt = prompt.clone();
    }
    opts
}

fn dump_font_diagnostics(font: Option<&tracegif::MonoFont>) {
    eprintln!("font diagnostics:");
    let Some(font) = font else {
        eprintln!("  no font available (text not drawn)");
        return;
    };
    eprintln!("  family:  {}", font.family);
    eprintln!("  origin:  {}", font.origin);
    if let Some(source) = &font.source {
        eprintln!("  source:  {}", source.display());
    }
    eprintln!("  sha256:  {}", sha256_hex(&font.bytes));
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
