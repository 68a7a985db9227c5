use folio_renderer::config::{FileStore, SiteConfig};
use folio_renderer::content::{ContentProvider, DirectoryProvider};
use folio_renderer::document::CssMode;
use folio_renderer::site::SiteBuilder;
use miette::Result;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use clap::{Parser, Subcommand};

/// Config file picked up from the content directory when `--config` is not given.
const DEFAULT_CONFIG_FILE: &str = "site.kdl";

#[derive(Parser)]
#[command(version, about = "Folio - renders the about page and supporter list of a personal site", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to content directory
    source: Option<PathBuf>,

    /// Output directory for static site
    dest: Option<PathBuf>,

    /// Path to site config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Inline the stylesheet into each page instead of writing css/base.css
    #[arg(long)]
    inline_css: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the site
    Build {
        /// Path to content directory
        source: PathBuf,

        /// Output directory for static site
        dest: PathBuf,

        /// Path to site config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Inline the stylesheet into each page
        #[arg(long)]
        inline_css: bool,
    },
    /// Load and validate content without writing anything
    Check {
        /// Path to content directory
        source: PathBuf,

        /// Path to site config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_miette();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Build {
            source,
            dest,
            config,
            inline_css,
        }) => {
            build(source, dest, config, inline_css).await?;
        }
        Some(Commands::Check { source, config }) => {
            check(source, config).await?;
        }
        None => {
            // Build command (default)
            let source = cli.source.ok_or_else(|| {
                miette::miette!("Source directory required. Usage: folio <source> <dest>")
            })?;
            let dest = cli.dest.ok_or_else(|| {
                miette::miette!("Destination directory required. Usage: folio <source> <dest>")
            })?;
            build(source, dest, cli.config, cli.inline_css).await?;
        }
    }

    Ok(())
}

async fn load_config(source: &Path, config: Option<PathBuf>) -> Result<SiteConfig> {
    let path = match config {
        Some(path) => path,
        None => {
            let candidate = source.join(DEFAULT_CONFIG_FILE);
            if !candidate.exists() {
                tracing::debug!("no site config found, using defaults");
                return Ok(SiteConfig::default());
            }
            candidate
        }
    };
    let config = SiteConfig::load(&FileStore::new(&path)).await?;
    tracing::debug!(path = %path.display(), title = %config.title, "using site config");
    Ok(config)
}

async fn build(source: PathBuf, dest: PathBuf, config: Option<PathBuf>, inline_css: bool) -> Result<()> {
    if !source.exists() {
        return Err(miette::miette!(
            "The path specified ({}) does not exist",
            source.display()
        ));
    }
    let config = load_config(&source, config).await?;
    let css_mode = if inline_css {
        CssMode::Inline
    } else {
        CssMode::Linked
    };

    let summary = SiteBuilder::new(config, DirectoryProvider::new(&source))
        .css_mode(css_mode)
        .build(&dest)
        .await?;

    println!("Wrote {} file(s) to {}", summary.written.len(), dest.display());
    for path in &summary.written {
        println!("  {}", path.display());
    }
    Ok(())
}

async fn check(source: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let config = load_config(&source, config).await?;
    let content = DirectoryProvider::new(&source).load().await?;
    let author = content.require_author(&config.author_slug)?;

    println!("Content OK: {}", source.display());
    println!("  authors:    {}", content.authors().len());
    println!("  about page: {} ({})", author.name, author.slug);
    println!("  supporters: {}", content.supporters().len());
    Ok(())
}

fn init_tracing() {
    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn init_miette() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .color(true)
                .context_lines(5)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }))
    .expect("couldn't set the miette hook");
    miette::set_panic_hook();
}
