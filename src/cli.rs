use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "discograph")]
#[command(
    author,
    version,
    about = "A GraphQL API server for an in-memory catalog of bands, albums, and songs"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (defaults to ./discograph.yml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write structured logs to a file
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long, env = "DISCOGRAPH_PORT")]
        port: Option<u16>,

        /// Directory served for non-GraphQL routes (overrides config)
        #[arg(long)]
        static_dir: Option<String>,

        /// Include error detail in error pages
        #[arg(long)]
        dev: bool,
    },

    /// Execute a GraphQL query against the catalog
    #[command(visible_alias = "q")]
    Query {
        /// Query document, or bare selection set to wrap in `query { }`
        query: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation against the catalog
    #[command(visible_alias = "m")]
    Mutate {
        /// Mutation fields, wrapped in `mutation { }` automatically
        mutation: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the schema in SDL form
    Schema,

    /// Write a default discograph.yml to the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
