use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "brushfx", version)]
struct Cli {
    /// Log engine decisions (skipped dabs, stroke totals) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON stroke script over an image and write a PNG.
    Apply(ApplyArgs),
    /// Apply a single dab to an image and write a PNG.
    Dab(DabArgs),
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Stroke script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Override the script's noise seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the SHA-256 of the output pixels.
    #[arg(long)]
    digest: bool,
}

#[derive(Parser, Debug)]
struct DabArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Effect to apply.
    #[arg(long, value_enum, default_value_t = EffectChoice::Pixelate)]
    effect: EffectChoice,

    /// Brush center x in image pixels.
    #[arg(long, allow_negative_numbers = true)]
    x: f64,

    /// Brush center y in image pixels.
    #[arg(long, allow_negative_numbers = true)]
    y: f64,

    /// Brush radius in pixels.
    #[arg(long, default_value_t = 24.0)]
    radius: f64,

    /// Effect intensity (block size, noise variance driver, blur driver).
    #[arg(long)]
    intensity: Option<f64>,

    /// Noise seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the SHA-256 of the output pixels.
    #[arg(long)]
    digest: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EffectChoice {
    Pixelate,
    Noise,
    Blur,
}

impl From<EffectChoice> for brushfx::EffectKind {
    fn from(choice: EffectChoice) -> Self {
        match choice {
            EffectChoice::Pixelate => brushfx::EffectKind::Pixelate,
            EffectChoice::Noise => brushfx::EffectKind::Noise,
            EffectChoice::Blur => brushfx::EffectKind::Blur,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Apply(args) => cmd_apply(args),
        Command::Dab(args) => cmd_dab(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "brushfx=debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_script(path: &Path) -> anyhow::Result<brushfx::StrokeScript> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("open stroke script '{}'", path.display()))?;
    let script = brushfx::StrokeScript::from_json(&text)
        .with_context(|| format!("parse stroke script '{}'", path.display()))?;
    Ok(script)
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let mut script = read_script(&args.script)?;
    if let Some(seed) = args.seed {
        script.seed = seed;
    }

    let mut raster = brushfx::load_raster(&args.in_path)?;
    let stats = brushfx::replay(&script, &mut raster, |_: &brushfx::RasterBuffer| {});

    brushfx::save_png(&args.out, &raster)?;
    eprintln!(
        "applied {} strokes ({} dabs), wrote {}",
        stats.strokes,
        stats.dabs,
        args.out.display()
    );
    if args.digest {
        println!("{}", sha256_hex(raster.as_bytes()));
    }
    Ok(())
}

fn cmd_dab(args: DabArgs) -> anyhow::Result<()> {
    let kind: brushfx::EffectKind = args.effect.into();
    let intensity = args
        .intensity
        .unwrap_or_else(|| brushfx::BrushSettings::default().intensity_for(kind));
    let brush = brushfx::Brush::new(args.x, args.y, args.radius, intensity);
    brush.validate()?;

    let mut raster = brushfx::load_raster(&args.in_path)?;
    let mut rng = brushfx::SeededUniform::new(args.seed);
    brushfx::apply_dab(kind, &mut raster, &brush, &mut rng);

    brushfx::save_png(&args.out, &raster)?;
    eprintln!("wrote {}", args.out.display());
    if args.digest {
        println!("{}", sha256_hex(raster.as_bytes()));
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
