use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tessera_engine::RenderConfig;
use tessera_engine::encode::ColorDepth;
use tessera_engine::logging::{LoggingConfig, init_logging};
use tessera_scene::RenderRequest;

/// Render a JSON scene of circles, squares and triangles as terminal art.
#[derive(Debug, Parser)]
#[command(name = "tessera", version)]
struct Args {
    /// Render request file. `-` or no argument reads stdin.
    path: Option<PathBuf>,

    /// Color depth: full, 256 or mono. Overrides the request and the
    /// terminal environment.
    #[arg(long, value_parser = parse_depth)]
    depth: Option<ColorDepth>,

    /// Evaluate every shape at every pixel (debugging aid; same output).
    #[arg(long)]
    no_cull: bool,

    /// Anti-aliasing band width in pixels.
    #[arg(
        long,
        default_value_t = tessera_engine::render::DEFAULT_AA_REGION_PX,
        value_parser = parse_aa
    )]
    aa: f32,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .with_culling(!self.no_cull)
            .with_aa_region_px(self.aa)
    }

    fn logging_config(&self) -> LoggingConfig {
        let default_level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        LoggingConfig { default_level, ..LoggingConfig::default() }
    }
}

fn parse_depth(s: &str) -> Result<ColorDepth, String> {
    s.parse()
        .map_err(|_| format!("unknown color depth {s:?} (expected full, 256 or mono)"))
}

fn parse_aa(s: &str) -> Result<f32, String> {
    match s.parse::<f32>() {
        Ok(px) if px.is_finite() && px >= 0.0 => Ok(px),
        Ok(_) => Err(format!("anti-aliasing width must be a finite number >= 0, got {s}")),
        Err(e) => Err(e.to_string()),
    }
}

/// Flag, then request, then terminal environment.
fn resolve_depth(flag: Option<ColorDepth>, request: &RenderRequest) -> ColorDepth {
    flag.or(request.color_depth).unwrap_or_else(|| {
        let var = |name: &str| std::env::var(name).ok();
        let detected = ColorDepth::detect(
            var("COLORTERM").as_deref(),
            var("TERM").as_deref(),
            var("NO_COLOR").as_deref(),
        );
        log::debug!("detected color depth {:?} from environment", detected);
        detected
    })
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read render request from stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.logging_config());

    let src = read_input(args.path.as_ref())?;
    let request = tessera_scene::parse_str(&src).context("rejected render request")?;

    let depth = resolve_depth(args.depth, &request);
    let out = request.render_at(&args.render_config(), depth);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{out}").context("failed to write output")?;
    Ok(())
}
