//! CLI entry point for ikigen

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ikigen")]
#[command(version)]
#[command(about = "A bilingual (Turkish/English) static blog generator", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },

    /// Build the static site
    #[command(alias = "b")]
    Build {
        /// Watch for file changes and rebuild
        #[arg(short, long)]
        watch: bool,
    },

    /// Build and serve the site locally
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Delete the output directory
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "ikigen=debug,info"
    } else {
        "ikigen=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            ikigen::commands::init::init_site(&target_dir)?;
            println!("Initialized new site in {:?}", target_dir);
        }

        Commands::New { title } => {
            let site = ikigen::Site::new(&base_dir)?;
            tracing::info!("Creating new post: {}", title);
            site.new_post(&title)?;
        }

        Commands::Build { watch } => {
            let site = ikigen::Site::new(&base_dir)?;
            tracing::info!("Building site...");
            site.build()?;
            println!("Build finished!");

            if watch {
                tracing::info!("Watching for file changes...");
                ikigen::commands::build::watch(&site).await?;
            }
        }

        Commands::Serve { port, ip } => {
            let site = ikigen::Site::new(&base_dir)?;

            // Build first
            tracing::info!("Building site...");
            site.build()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            ikigen::server::start(&site, &ip, port).await?;
        }

        Commands::Clean => {
            let site = ikigen::Site::new(&base_dir)?;
            tracing::info!("Cleaning output directory...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("ikigen version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
