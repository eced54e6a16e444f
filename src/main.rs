mod cli;
mod engine;
mod models;
mod normalize;
mod parser;

use anyhow::Result;
use tracing_subscriber::{registry::Registry, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

use crate::cli::CLI;
use crate::engine::Engine;

fn main() -> Result<()> {
    let subscriber = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(HierarchicalLayer::new(2));
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let cli = CLI::init()?;
    let engine = Engine::new(cli.get_engine_options()?);
    let verdict = engine.run()?;

    println!("{}", u8::from(verdict));
    Ok(())
}
