mod commands;
mod config;
mod diagnostics;
mod error;
mod freshness;
mod generator;
mod info;
mod lookup;
mod model;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "docsite", about = "Static API documentation site generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the site from the metadata document
    Build {
        /// Output directory (overrides the config)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Verify the generated site is up to date (exit 0/1/2)
    Check {
        /// Output directory (overrides the config)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Output a comprehensive reference document for docsite
    Info {
        /// Output as JSON instead of markdown
        #[arg(long)]
        json: bool,
    },
    /// Resolve a slug (e.g. classes/Player) to a documented entity
    Resolve {
        /// Slug to resolve, segments separated by `/`
        slug: String,
    },
    /// Print the flat search index
    Search {
        /// Case-insensitive substring filter on titles
        query: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the sidebar navigation tree
    Sidebar {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the freshness of every generated page
    Status {
        /// Output directory (overrides the config)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build { out } => commands::build(out.as_deref()).map(|()| return ExitCode::SUCCESS),
        Commands::Check { out } => commands::check(out.as_deref()),
        Commands::Info { json } => commands::info(json).map(|()| return ExitCode::SUCCESS),
        Commands::Resolve { slug } => commands::resolve(&slug).map(|()| return ExitCode::SUCCESS),
        Commands::Search { query, json } => {
            commands::search(query.as_deref(), json).map(|()| return ExitCode::SUCCESS)
        },
        Commands::Sidebar { json } => commands::sidebar(json).map(|()| return ExitCode::SUCCESS),
        Commands::Status { out } => commands::status(out.as_deref()).map(|()| return ExitCode::SUCCESS),
    };

    return match result {
        Ok(code) => code,
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::FAILURE
        },
    };
}
