//! Generates the preference and font documentation.
use clap::{Parser, Subcommand};
use padbury::{docs::DocsGenerator, tracing_config};
use tracing::info;

#[derive(Parser)]
#[command(name = "padbury-docs")]
#[command(about = "Generate documentation for the Padbury preferences")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every page and the JSON schema
    All {
        #[arg(short, long, default_value = "docs")]
        output: String,
    },
    /// Write a single page
    Page {
        name: String,
        #[arg(short, long, default_value = "docs")]
        output: String,
    },
    /// Write only the JSON schema
    Schema {
        #[arg(short, long, default_value = "docs")]
        output: String,
    },
    /// List the available pages
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_config::init()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::All { output } => {
            let written = DocsGenerator::new().with_output_dir(output).generate_all()?;
            for path in &written {
                info!("Generated {}", path.display());
            }
            println!("Generated {} files", written.len());
        }
        Commands::Page { name, output } => {
            let path = DocsGenerator::new()
                .with_output_dir(output)
                .generate_page_by_name(&name)?;
            println!("Generated {}", path.display());
        }
        Commands::Schema { output } => {
            let path = DocsGenerator::new().with_output_dir(output).generate_schema()?;
            println!("Generated {}", path.display());
        }
        Commands::List => {
            println!("Available pages:");
            for page in DocsGenerator::new().list_pages() {
                println!("  - {}", page);
            }
        }
    }

    Ok(())
}
