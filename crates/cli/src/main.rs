use std::io;

use anyhow::Context;

use stockroom_cli::{AppConfig, Menu, Prompter};
use stockroom_products::{InMemoryProductRepository, ProductRepository};

fn main() -> anyhow::Result<()> {
    let (config, warnings) = AppConfig::from_env();
    stockroom_observability::init(&config.observability);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let mut repo = if config.seed {
        InMemoryProductRepository::seeded()
    } else {
        InMemoryProductRepository::new()
    };
    tracing::info!(products = repo.len(), seeded = config.seed, "repository ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    Menu::new(&mut repo, &config.currency)
        .run(&mut prompter)
        .context("terminal I/O failed")?;

    tracing::info!("session closed");
    Ok(())
}
