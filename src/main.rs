use artwork_gallery::generate::{self, GenerateEvent};
use artwork_gallery::{config, output, scan};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

#[derive(Parser)]
#[command(name = "artwork-gallery")]
#[command(about = "Static HTML gallery page from YAML-described artworks")]
#[command(long_about = "\
Static HTML gallery page from YAML-described artworks

Every .yml/.yaml file in the data directory describes one artwork. Artworks
with at least one image become a grid item showing their first image; the
rest are reported and left out.

Data structure:

  data/
  ├── config.toml          # Optional: page shell and path prefixes
  ├── 010-sunset.yml       # name: Sunset
  │                        # img: [sunset.jpg, sunset-detail.jpg]
  └── 020-harbour.yaml     # Files are read in file name order

Run with no arguments to build ./index.html from ./data.
Run 'artwork-gallery gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory holding the artwork YAML files
    #[arg(long, default_value = "data", global = true)]
    source: PathBuf,

    /// Page to write
    #[arg(long, default_value = "index.html", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the gallery page (default)
    Build,
    /// Load and render the artworks without writing the page
    Check,
    /// Print the loaded artwork records as JSON
    Scan,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Reading artworks from {}", cli.source.display());
            let (tx, rx) = mpsc::channel();
            let result = generate::generate(&cli.source, &cli.output, &site_config, Some(tx));
            print_events(rx);
            result?;
        }
        Command::Check => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            let (tx, rx) = mpsc::channel();
            let result = generate::check(&cli.source, &site_config, Some(tx));
            print_events(rx);
            let stats = result?;
            println!();
            println!("==> Content is valid: {}", output::format_summary(&stats));
        }
        Command::Scan => {
            let artworks = scan::scan(&cli.source)?;
            println!("{}", serde_json::to_string_pretty(&artworks)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Drain the events of a finished run. The sender has been dropped by then,
/// so the iterator ends after the last buffered event.
fn print_events(rx: Receiver<GenerateEvent>) {
    for event in rx {
        output::print_event(&event);
    }
}
