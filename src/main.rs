use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use sectionize::{Config, Overrides, Pipeline};

const LOCAL_CONFIG: &str = "sectionize.toml";

#[derive(Parser)]
#[command(name = "sectionize")]
#[command(about = "Convert Markdown to HTML with headings nested into <section> elements")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to ./sectionize.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Deepest heading level left unwrapped (1-6)
    #[arg(long)]
    root_level: Option<u8>,

    /// Render without section wrappers
    #[arg(long)]
    no_sections: bool,

    /// Add class="levelN" to each section
    #[arg(long)]
    level_class: bool,

    /// Print the section tree instead of HTML
    #[arg(long)]
    tree: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let overrides = Overrides {
        root_level: cli.root_level,
        no_sections: cli.no_sections,
        level_class: cli.level_class,
    };
    let config = Config::resolve(cli.config.as_deref(), Path::new(LOCAL_CONFIG))?
        .with_overrides(&overrides)
        .context("Invalid command-line option")?;
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    // Configuration errors surface before the input is touched
    let pipeline = Pipeline::new(load_config(cli)?);

    let markdown = fs::read_to_string(&cli.input)
        .with_context(|| format!("Error reading {}", cli.input.display()))?;

    let rendered = if cli.tree {
        pipeline.render_outline(&markdown)
    } else {
        pipeline.render_html(&markdown)
    };

    match &cli.output {
        Some(output) => {
            fs::write(output, rendered)
                .with_context(|| format!("Error writing {}", output.display()))?;
            log::info!("Created {}", output.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
