use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use bootcore::{
    channel,
    cli::{Cli, Command},
    config::Config,
    dispatch::Dispatcher,
    engine::ProcessEngine,
    resolver::RootResolver,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli)?;
    if config.logging_enabled {
        // stdout carries the channel; keep logs on stderr
        tracing_subscriber::fmt()
            .with_env_filter("info")
            .with_writer(std::io::stderr)
            .init();
    }

    let resolver = RootResolver::new(&config.marker, &config.subdir);
    let start = match cli.from.clone() {
        Some(path) => path,
        None => std::env::current_exe()?,
    };

    match cli.command {
        Command::Serve => {
            let root = resolver.resolve(&start);
            match &root {
                Some(root) => info!("resolved root: {}", root.display()),
                None => warn!(
                    "no {} above {} - serving without a root",
                    config.marker,
                    start.display()
                ),
            }
            let command = config
                .engine_command
                .clone()
                .context("engine command not configured")?;
            let engine = ProcessEngine::new(command, config.engine_args.clone())?;
            let mut dispatcher = Dispatcher::new(engine, root);
            let stdin = tokio::io::stdin();
            let stdout = tokio::io::stdout();
            channel::serve(tokio::io::BufReader::new(stdin), stdout, &mut dispatcher).await?;
        }
        Command::Root => match resolver.resolve(&start) {
            Some(root) => println!("{}", root.display()),
            None => anyhow::bail!("no {} above {}", config.marker, start.display()),
        },
    }
    Ok(())
}
