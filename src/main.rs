use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blockwall::models::{AppConfig, BlockPos, Facing, FillCommand, SurfaceIdentity};
use blockwall::services::{
    fetch_player_info, FileStateStore, GdmcTransport, RenderOptions, ScreenService, Transport,
};

#[derive(Parser)]
#[command(name = "blockwall")]
#[command(about = "Blockwall - render images as block walls in a remote voxel world")]
struct Cli {
    /// Configuration file (defaults to $CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an image onto a surface
    Render {
        /// Image file (PNG, JPEG, ...)
        image: PathBuf,

        #[command(flatten)]
        surface: SurfaceArgs,

        /// Map pixels to their nearest block without error diffusion
        #[arg(long)]
        no_dither: bool,

        /// Diffuse error through flat regions too
        #[arg(long)]
        no_skip_uniform: bool,

        /// Ignore the previous render and send every block
        #[arg(long)]
        full: bool,
    },
    /// Replace a surface with air and forget its state
    Clear {
        #[command(flatten)]
        surface: SurfaceArgs,
    },
    /// Fill a box with one block
    Fill {
        #[arg(allow_hyphen_values = true)]
        x1: i32,
        #[arg(allow_hyphen_values = true)]
        y1: i32,
        #[arg(allow_hyphen_values = true)]
        z1: i32,
        #[arg(allow_hyphen_values = true)]
        x2: i32,
        #[arg(allow_hyphen_values = true)]
        y2: i32,
        #[arg(allow_hyphen_values = true)]
        z2: i32,
        block: String,
    },
    /// Place a single block
    Setblock {
        #[arg(allow_hyphen_values = true)]
        x: i32,
        #[arg(allow_hyphen_values = true)]
        y: i32,
        #[arg(allow_hyphen_values = true)]
        z: i32,
        block: String,
    },
    /// Show where the nearest player stands and looks
    Player,
}

/// Where a surface sits and how large it is
#[derive(Args)]
struct SurfaceArgs {
    /// Origin X (bottom-left block)
    #[arg(long, allow_hyphen_values = true)]
    x: i32,

    /// Origin Y (bottom row)
    #[arg(long, allow_hyphen_values = true)]
    y: i32,

    /// Origin Z
    #[arg(long, allow_hyphen_values = true)]
    z: i32,

    /// north, south, east or west
    #[arg(long, default_value = "north")]
    facing: String,

    /// Size preset: small, medium or large
    #[arg(long, default_value = "medium")]
    size: String,

    /// Width in blocks (overrides --size, requires --height)
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Height in blocks (overrides --size, requires --width)
    #[arg(long, requires = "width")]
    height: Option<u32>,
}

impl SurfaceArgs {
    fn identity(&self, config: &AppConfig) -> SurfaceIdentity {
        let (width, height) = match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            _ => {
                let size = config.size(&self.size);
                (size.width, size.height)
            }
        };
        SurfaceIdentity::new(
            BlockPos::new(self.x, self.y, self.z),
            Facing::parse(&self.facing),
            width,
            height,
        )
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blockwall=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref());

    match cli.command {
        Some(Commands::Render {
            image,
            surface,
            no_dither,
            no_skip_uniform,
            full,
        }) => {
            let mut options = RenderOptions::from(&config.render);
            if no_dither {
                options.dither.dithering = false;
            }
            if no_skip_uniform {
                options.dither.skip_uniform = false;
            }
            if full {
                options.smart_diff = false;
            }
            run_render_command(&config, &image, &surface.identity(&config), &options)
        }
        Some(Commands::Clear { surface }) => {
            run_clear_command(&config, &surface.identity(&config))
        }
        Some(Commands::Fill {
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
            block,
        }) => {
            let command = FillCommand::new(
                BlockPos::new(x1, y1, z1),
                BlockPos::new(x2, y2, z2),
                block,
            );
            let response = connect(&config)?.fill(&command)?;
            print_messages(&response.messages);
            Ok(())
        }
        Some(Commands::Setblock { x, y, z, block }) => {
            let response = connect(&config)?.set_block(BlockPos::new(x, y, z), &block)?;
            print_messages(&response.messages);
            Ok(())
        }
        Some(Commands::Player) => run_player_command(&config),
        None => {
            run_status_command(&config, config_path);
            Ok(())
        }
    }
}

fn connect(config: &AppConfig) -> anyhow::Result<GdmcTransport> {
    GdmcTransport::new(&config.gdmc_url, Duration::from_secs(config.timeout_secs))
        .with_context(|| format!("Failed to create client for {}", config.gdmc_url))
}

fn screen_service(config: &AppConfig) -> anyhow::Result<ScreenService> {
    let transport = Arc::new(connect(config)?);
    let store = Arc::new(FileStateStore::new(&config.state_dir));
    Ok(ScreenService::new(transport, store))
}

/// Chat line in-game, if enabled; failures only get logged
fn announce(config: &AppConfig, service: &ScreenService, message: &str, color: &str) {
    if !config.announce {
        return;
    }
    if let Err(e) = service.transport().tellraw(message, color) {
        tracing::debug!(%e, "Announcement failed");
    }
}

fn run_render_command(
    config: &AppConfig,
    image: &Path,
    identity: &SurfaceIdentity,
    options: &RenderOptions,
) -> anyhow::Result<()> {
    let service = screen_service(config)?;
    announce(
        config,
        &service,
        &format!("Rendering {} on {}", image.display(), identity),
        "yellow",
    );

    match service.render_image(identity, image, options) {
        Ok(report) => {
            let summary = if report.is_noop() {
                "Surface already up to date".to_string()
            } else {
                format!(
                    "Placed {} of {} blocks in {} fills",
                    report.blocks_changed, report.blocks_total, report.commands_sent
                )
            };
            announce(config, &service, &summary, "green");
            println!("{summary}");
            Ok(())
        }
        Err(e) => {
            announce(config, &service, &format!("Render failed: {e}"), "red");
            Err(e).context("Render failed")
        }
    }
}

fn run_clear_command(config: &AppConfig, identity: &SurfaceIdentity) -> anyhow::Result<()> {
    let service = screen_service(config)?;
    service
        .clear(identity)
        .with_context(|| format!("Failed to clear {identity}"))?;
    announce(config, &service, &format!("Cleared {identity}"), "green");
    println!("Cleared {identity}");
    Ok(())
}

fn run_player_command(config: &AppConfig) -> anyhow::Result<()> {
    let transport = connect(config)?;
    match fetch_player_info(&transport)? {
        Some(info) => {
            println!("Position: {}", info.position);
            println!("Rotation: yaw {:.1}, pitch {:.1}", info.yaw, info.pitch);
            println!("Facing:   {}", info.facing);
        }
        None => println!("No player found"),
    }
    Ok(())
}

fn print_messages(messages: &[String]) {
    for message in messages {
        println!("{message}");
    }
}

fn run_status_command(config: &AppConfig, config_path: Option<PathBuf>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Blockwall v{VERSION}");
    println!("Image-to-block surface renderer\n");

    println!("Configuration:");
    println!(
        "  CONFIG_FILE = {}",
        config_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!("  GDMC_URL    = {}", config.gdmc_url);
    println!("  STATE_DIR   = {}", config.state_dir.display());
    println!("  timeout     = {}s", config.timeout_secs);
    println!("  announce    = {}", config.announce);

    println!("\nRendering:");
    println!("  dithering      = {}", config.render.dithering);
    println!("  skip uniform   = {}", config.render.skip_uniform);
    println!("  threshold      = {}", config.render.uniform_threshold);
    println!("  contrast       = {}", config.render.contrast);
    println!("  smart diff     = {}", config.render.smart_diff);

    println!("\nSizes:");
    let mut sizes: Vec<_> = config.sizes.iter().collect();
    sizes.sort_by(|(a_name, a), (b_name, b)| {
        (a.width, a.height, a_name).cmp(&(b.width, b.height, b_name))
    });
    for (name, size) in sizes {
        println!("  {name:<8} {}x{}", size.width, size.height);
    }

    println!("\nRun 'blockwall --help' for available commands.");
}
