pub(crate) mod opt;
mod export;
mod generate;
mod play;

use crate::opt::{Cli, Commands};
use anyhow::{Context, Error};
use mondai_config::quiz::QuizConfig;
use mondai_db::sea_orm::{Database, DatabaseConnection};
use mondai_utils::loader::file_system::FileSystemLoader;
use mondai_utils::tracing::TracingConfig;
use std::path::Path;
use tracing::level_filters::LevelFilter;

pub(crate) async fn exec(cli: Cli) -> Result<(), Error> {
    mondai_utils::tracing::setup(
        TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .default_level(if cli.debug { LevelFilter::DEBUG } else { LevelFilter::WARN })
            .build(),
    )?;

    let config = match &cli.config {
        Some(path) => load_config(path).await?,
        None => QuizConfig::default(),
    };
    let db = connect(&cli.database_url).await?;

    match cli.command {
        Commands::Generate(o) => generate::generate(o, &config, &db).await,
        Commands::Play(o) => play::play(o, &config, &db).await,
        Commands::Export(o) => export::export(o, &db).await,
    }
}

async fn load_config(path: &Path) -> Result<QuizConfig, Error> {
    let (loader, file_name) = FileSystemLoader::for_file(path)?;
    mondai_config::quiz::load(&loader, file_name)
        .await
        .with_context(|| format!("failed to load config {}", path.display()))
}

async fn connect(url: &str) -> Result<DatabaseConnection, Error> {
    let db = Database::connect(url)
        .await
        .with_context(|| format!("failed to connect to {url}"))?;
    mondai_db::setup_schema(&db).await?;
    Ok(db)
}
