// src/main.rs

use anyhow::Result;
use clap::Parser;
use treecat::cli::Cli;
use treecat::config::ConfigBuilder;
use treecat::progress::StdoutProgress;
use treecat::run;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the root progress lines.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "treecat=debug".parse()?
                } else {
                    "treecat=info".parse()?
                },
            ),
        )
        .init();

    log::debug!("Starting treecat v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    std::panic::set_hook(Box::new(|info| {
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => s.as_str(),
                None => "Box<Any>",
            },
        };
        eprintln!("Application Error: {}", msg);
    }));

    let cli = Cli::parse();

    let result = ConfigBuilder::from_cli(cli)
        .build()
        .and_then(|config| run(&config, &StdoutProgress));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
