use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rakugaki_core::sketch::Sketchpad;
use rakugaki_core::{DEFAULT_PROMPT_COUNT, DEFAULT_ROUND_SECS};
use tracing_subscriber::EnvFilter;

mod client;
mod doodler;

use client::PlayConfig;
use doodler::{DoodleConfig, Doodler};

#[derive(Parser)]
#[command(name = "rakugaki-cli", version, about = "Terminal client for rakugaki draw-and-guess rooms")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Play {
        #[command(flatten)]
        room: RoomArgs,
        #[arg(long)]
        host: bool,
        #[arg(long, default_value_t = DEFAULT_PROMPT_COUNT)]
        n_odai: u32,
        #[arg(long, default_value_t = DEFAULT_ROUND_SECS)]
        n_time_sec: u64,
        #[arg(long, default_value_t = 1500)]
        start_delay_ms: u64,
        #[command(flatten)]
        doodle: DoodleArgs,
    },
    Preview {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 12)]
        strokes: u32,
        #[command(flatten)]
        doodle: DoodleArgs,
    },
}

#[derive(Args)]
struct RoomArgs {
    #[arg(long, env = "RAKUGAKI_WS_URL", default_value = client::DEFAULT_ENDPOINT)]
    url: String,
    #[arg(long)]
    room_id: String,
    #[arg(long, env = "RAKUGAKI_USER_NAME")]
    user_name: String,
}

#[derive(Args)]
struct DoodleArgs {
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 400)]
    think_min_ms: u64,
    #[arg(long, default_value_t = 1600)]
    think_max_ms: u64,
    #[arg(long, default_value_t = 8)]
    points_min: u32,
    #[arg(long, default_value_t = 24)]
    points_max: u32,
    #[arg(long, default_value_t = 35.0)]
    wobble_deg: f32,
}

impl DoodleArgs {
    fn config(&self) -> DoodleConfig {
        DoodleConfig {
            think_min_ms: self.think_min_ms,
            think_max_ms: self.think_max_ms,
            points_min: self.points_min,
            points_max: self.points_max,
            wobble_deg: self.wobble_deg,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play {
            room,
            host,
            n_odai,
            n_time_sec,
            start_delay_ms,
            doodle,
        } => {
            let config = PlayConfig {
                url: room.url,
                room_id: room.room_id,
                user_name: room.user_name,
                host,
                n_odai,
                n_time_sec,
                start_delay_ms,
            };
            client::run_play(config, doodle.config(), doodle.seed).await
        }
        Commands::Preview {
            out,
            strokes,
            doodle,
        } => run_preview(&out, strokes, &doodle),
    }
}

fn run_preview(out: &Path, strokes: u32, doodle: &DoodleArgs) -> anyhow::Result<()> {
    let mut doodler = Doodler::new(doodle.seed, doodle.config())?;
    let mut pad = Sketchpad::new();
    for _ in 0..strokes {
        doodler.doodle_stroke(&mut pad);
    }
    let image = rakugaki_raster::render_rgba(&pad)?;
    let png = rakugaki_raster::encode_png(&image)?;
    std::fs::write(out, &png).with_context(|| format!("write {}", out.display()))?;
    println!("wrote {} ({} strokes)", out.display(), pad.stroke_count());
    Ok(())
}
