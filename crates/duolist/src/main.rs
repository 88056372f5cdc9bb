use std::sync::Arc;

use duolist::{logging, App, Args, Config, Error, Flags, PaneSettings};
use duolist_api::HttpRecordSource;
use duolist_core::ProgramOptions;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    let mut config = Config::new(&args.config).map_err(Error::from)?;
    args.apply(&mut config);

    let _guard = logging::init(&config.log)?;
    tracing::info!(base_url = %config.api.base_url, config = %args.config, "starting");

    let source = HttpRecordSource::new(&config.api.base_url, config.api.timeout).map_err(Error::from)?;
    let flags = Flags {
        settings: PaneSettings::from(&config),
        source: Arc::new(source),
        cache_ttl: config.api.cache_ttl,
        size: crossterm::terminal::size().map_err(Error::from)?,
    };
    let options = ProgramOptions {
        title: Some("duolist".to_owned()),
        ..ProgramOptions::default()
    };

    duolist_core::run_with::<App>(flags, options)
        .await
        .map_err(Error::from)?;
    tracing::info!("exiting");
    Ok(())
}
