use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use linkplanner::elevation::{
    ElevationService, OpenElevationClient, OpenElevationConfig, UnavailableElevation,
};
use linkplanner::settings::default_config_path;
use linkplanner::{init_logging, Config, JsonLinesSurface, Session, BUILD_DATE, VERSION};

#[derive(Parser, Debug)]
#[command(name = "linkplanner")]
#[command(author, version, about = "Plan point-to-point radio links from JSON input events")]
struct Args {
    /// Config file path (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not fetch elevation profiles
    #[arg(long)]
    offline: bool,
}

fn elevation_service(config: &Config) -> anyhow::Result<Arc<dyn ElevationService>> {
    if !config.elevation.enabled {
        return Ok(Arc::new(UnavailableElevation::new("elevation lookups disabled")));
    }
    let client = OpenElevationClient::new(OpenElevationConfig {
        url: config.elevation.url.clone(),
        timeout_ms: config.elevation.timeout_ms,
    })?;
    Ok(Arc::new(client))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let args = Args::parse();
    info!("LinkPlanner {} (built {})", VERSION, BUILD_DATE);

    let path = match args.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let mut config = Config::load_or_default(&path)?;
    if args.offline {
        config.elevation.enabled = false;
    }

    info!(
        "Map view ({:.4}, {:.4}) zoom {}, tiles {}",
        config.map.center_lat, config.map.center_lng, config.map.zoom, config.map.tile_url
    );

    let session = Session::new(&config, elevation_service(&config)?)?;
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut surface = JsonLinesSurface::new(std::io::stdout());

    let summary = session.run(input, &mut surface).await?;
    surface.finish()?;

    info!(
        "Session ended: {} events ({} ignored), {} scenes, {} profiles applied, {} discarded",
        summary.events,
        summary.ignored,
        summary.scenes,
        summary.profiles_applied,
        summary.profiles_discarded
    );
    Ok(())
}
