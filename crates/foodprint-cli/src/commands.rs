use std::fs;
use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;

use foodprint_core::FootprintAggregator;
use foodprint_server::{AppState, FoodprintServer, ServerConfig};
use foodprint_store::seed::seed_dev_data;
use foodprint_store::InMemoryStore;
use foodprint_types::{EmissionFactor, Ingredient};

use crate::cli::{Cli, Command, ComputeArgs, OutputFormat, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => serve(args),
        Command::Compute(args) => compute(args),
    }
}

fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    let store = Arc::new(InMemoryStore::new());
    if args.seed {
        seed_dev_data(store.as_ref()).context("failed to seed dev data")?;
        tracing::info!("seeded dev emission factors and products");
    }

    let server = FoodprintServer::new(config, AppState::new(store));
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    Ok(())
}

#[derive(Deserialize)]
struct ProductFile {
    name: String,
    ingredients: Vec<Ingredient>,
}

fn compute(args: ComputeArgs) -> anyhow::Result<()> {
    let factors: Vec<EmissionFactor> = serde_json::from_str(
        &fs::read_to_string(&args.factors)
            .with_context(|| format!("failed to read {}", args.factors.display()))?,
    )
    .context("factor table is not a JSON array of emission factors")?;

    let product: ProductFile = serde_json::from_str(
        &fs::read_to_string(&args.product)
            .with_context(|| format!("failed to read {}", args.product.display()))?,
    )
    .context("product file is not valid product JSON")?;

    let aggregator = FootprintAggregator::new();
    let computed = aggregator.compute_footprint(&product.ingredients, &factors)?;

    match args.format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "name": product.name,
                "carbonFootprint": computed.value,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => match computed.value {
            Some(value) => println!("{}: {value} kgCO2e", product.name),
            None => println!("{}: footprint not computable", product.name),
        },
    }
    Ok(())
}
