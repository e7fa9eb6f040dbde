use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{Dashboard, HttpFoodsApi};
use shared::domain::{FoodDraft, FoodId, FoodPatch};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_settings, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(about = "Manage a remote food catalog")]
struct Cli {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Overrides the catalog service url from config and environment.
    #[arg(long)]
    api_base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current catalog.
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        price: f64,
        #[arg(long, default_value = "")]
        image: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        available: Option<bool>,
        #[arg(long)]
        image: Option<String>,
    },
    Delete {
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings(&cli.config);
    if let Some(url) = cli.api_base_url {
        settings.api_base_url = url;
    }

    let http = reqwest::Client::builder()
        .timeout(settings.request_timeout())
        .build()
        .context("failed to build http client")?;
    let api = HttpFoodsApi::with_client(http, &settings.api_base_url)
        .with_context(|| format!("invalid api base url '{}'", settings.api_base_url))?;
    info!(base_url = %api.base_url(), "using catalog service");

    let dashboard = Dashboard::new(Arc::new(api));
    dashboard
        .load()
        .await
        .context("failed to load the food catalog")?;

    match cli.command {
        Command::List => {}
        Command::Create {
            name,
            description,
            price,
            image,
        } => {
            let food = dashboard
                .on_create(FoodDraft {
                    name,
                    description,
                    price,
                    image,
                })
                .await
                .context("failed to create food")?;
            println!("created food id={}", food.id);
        }
        Command::Update {
            id,
            name,
            description,
            price,
            available,
            image,
        } => {
            let patch = FoodPatch {
                name,
                description,
                price,
                available,
                image,
            };
            if patch.is_empty() {
                bail!("nothing to update for food {id}; pass at least one field");
            }
            dashboard.on_edit_request_by_id(FoodId(id)).await?;
            let food = dashboard
                .on_update(patch)
                .await
                .with_context(|| format!("failed to update food {id}"))?;
            println!("updated food id={}", food.id);
        }
        Command::Delete { id } => {
            let removed = dashboard
                .on_delete(FoodId(id))
                .await
                .with_context(|| format!("failed to delete food {id}"))?;
            println!("deleted food id={id} (removed {removed} local entries)");
        }
    }

    let foods = dashboard.foods().await;
    println!("{}", serde_json::to_string_pretty(&*foods)?);
    Ok(())
}
