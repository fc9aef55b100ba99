use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use discograph::cli::{Cli, Commands};
use discograph::config::DiscographConfig;
use discograph::graphql::{build_schema, run_server};
use discograph::store::{CatalogStore, load_seed_file};

fn main() -> Result<()> {
    let cli = Cli::parse();

    discograph::logging::init(cli.verbose, cli.log_file.as_ref().map(PathBuf::from));

    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(DiscographConfig::default_path);

    match cli.command {
        Commands::Serve {
            port,
            static_dir,
            dev,
        } => {
            let mut config = load_config(&config_path)?;
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(static_dir) = static_dir {
                config.server.static_dir = static_dir;
            }
            if dev {
                config.server.dev = true;
            }

            let store = build_store(&config)?;
            let schema = build_schema(store);

            println!(
                "Starting GraphQL server on http://{}:{}/graphql",
                config.server.host, config.server.port
            );
            println!("GraphiQL playground available at the same URL");

            tokio::runtime::Runtime::new()?
                .block_on(async { run_server(schema, config.server).await })?;
            Ok(())
        }
        Commands::Query { query, variables } => {
            let config = load_config(&config_path)?;
            let schema = build_schema(build_store(&config)?);

            // Auto-wrap bare selections in query { }
            let trimmed = query.trim_start();
            let document = if trimmed.starts_with('{') || trimmed.starts_with("query") {
                query
            } else {
                format!("query {{ {} }}", query)
            };
            execute_document(&schema, &document, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let config = load_config(&config_path)?;
            let schema = build_schema(build_store(&config)?);

            let document = format!("mutation {{ {} }}", mutation);
            execute_document(&schema, &document, variables)
        }
        Commands::Schema => {
            let schema = build_schema(Arc::new(CatalogStore::seeded()));
            println!("{}", schema.sdl());
            Ok(())
        }
        Commands::Init { force } => {
            if config_path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    config_path.display()
                );
            }
            DiscographConfig::default().save(&config_path)?;
            println!("{} {}", "Created".green(), config_path.display());
            Ok(())
        }
    }
}

fn load_config(path: &PathBuf) -> Result<DiscographConfig> {
    DiscographConfig::load(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

fn build_store(config: &DiscographConfig) -> Result<Arc<CatalogStore>> {
    let store = match config.seed_path() {
        Some(path) => {
            let seed = load_seed_file(&path)
                .with_context(|| format!("Failed to load seed from {}", path.display()))?;
            tracing::debug!(
                "seeded catalog from {} ({} bands, {} songs)",
                path.display(),
                seed.bands.len(),
                seed.songs.len()
            );
            CatalogStore::new(seed.bands, seed.songs)
        }
        None => CatalogStore::seeded(),
    };
    Ok(Arc::new(store))
}

fn execute_document(
    schema: &discograph::graphql::DiscographSchema,
    document: &str,
    variables: Option<String>,
) -> Result<()> {
    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v)?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);

    if !response.errors.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
