use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use foundation::math::Vec2;
use globe::Globe;
use site_config::SiteConfig;
use tools::contact_check::check_contact;
use tools::replay::replay;
use tools::svg::{SvgSurface, document};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "site", about = "Offline tooling for the site's interactive pieces")]
struct Cli {
    /// Site config JSON; defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one globe frame to SVG.
    GlobeSvg {
        #[arg(long)]
        out: PathBuf,
        /// Tilt in radians (clamped to the configured range).
        #[arg(long, allow_negative_numbers = true)]
        rotation_x: Option<f64>,
        /// Spin in radians.
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        rotation_y: f64,
        /// Include the star layer.
        #[arg(long)]
        stars: bool,
    },
    /// Replay visibility ratios for one section through the theme observer.
    ThemeReplay {
        #[arg(required = true, allow_negative_numbers = true)]
        ratios: Vec<f64>,
        /// Print JSON lines instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Validate a contact form JSON file.
    CheckContact { file: PathBuf },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SiteConfig::from_path(path).map_err(|e| e.to_string())?,
        None => SiteConfig::default(),
    };

    match cli.command {
        Command::GlobeSvg {
            out,
            rotation_x,
            rotation_y,
            stars,
        } => cmd_globe_svg(&config, out, rotation_x, rotation_y, stars),
        Command::ThemeReplay { ratios, json } => cmd_theme_replay(&config, &ratios, json),
        Command::CheckContact { file } => cmd_check_contact(file),
    }
}

fn cmd_globe_svg(
    config: &SiteConfig,
    out: PathBuf,
    rotation_x: Option<f64>,
    rotation_y: f64,
    stars: bool,
) -> Result<(), String> {
    let size = config.globe.canvas_size;
    let mut globe = Globe::new(config.globe, config.interaction);
    let x = rotation_x.unwrap_or(config.globe.motion.initial_rotation_x);
    globe.renderer_mut().controller_mut().snap_to(x, rotation_y);

    let mut star_layer = SvgSurface::new(size, size);
    if stars {
        globe.render_stars(&mut star_layer);
    }
    let mut globe_layer = SvgSurface::new(size, size);
    let stats = globe.renderer_mut().draw_still(&mut globe_layer);
    let visible = globe
        .snapshot()
        .markers
        .iter()
        .filter(|m| m.depth >= config.globe.cull_depth)
        .count();

    let svg = document(Vec2::new(size, size), &[&star_layer, &globe_layer]);
    fs::write(&out, svg).map_err(|e| format!("failed to write {}: {e}", out.display()))?;
    info!(
        points = stats.points_drawn,
        markers = stats.markers_drawn,
        pickable = visible,
        "globe frame written"
    );
    println!(
        "wrote {} ({} points, {} markers)",
        out.display(),
        stats.points_drawn,
        stats.markers_drawn
    );
    Ok(())
}

fn cmd_theme_replay(config: &SiteConfig, ratios: &[f64], json: bool) -> Result<(), String> {
    let steps = replay(ratios, config.theme);
    for step in &steps {
        if json {
            let line = serde_json::to_string(step).map_err(|e| e.to_string())?;
            println!("{line}");
        } else {
            println!(
                "{:>6.0}ms  ratio={:.3}  {:<5}{}{}",
                step.at_ms,
                step.ratio,
                step.theme,
                if step.flipped { "  flip" } else { "" },
                if step.animating { "  animating" } else { "" }
            );
        }
    }
    Ok(())
}

fn cmd_check_contact(file: PathBuf) -> Result<(), String> {
    let text = fs::read_to_string(&file).map_err(|e| format!("failed to read {}: {e}", file.display()))?;
    match check_contact(&text)? {
        Ok(body) => {
            println!("valid; request body:\n{body}");
            Ok(())
        }
        Err(errors) => {
            for (field, message) in errors.iter() {
                println!("{field}: {message}");
            }
            Err(format!("{} field(s) invalid", errors.len()))
        }
    }
}
