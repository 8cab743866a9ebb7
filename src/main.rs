//! plate-field command-line interface.
//!
//! Render the field of a parallel-plate capacitor for one of three presets:
//! ```sh
//! plate-field render --configuration two --output field.html
//! plate-field render --configuration one --format svg --output field.svg
//! plate-field render-all --output-dir site
//! plate-field list
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use plate_field::io::{page_file_name, write_page_file, write_svg_file};
use plate_field::presets::Configuration;
use plate_field::visualization::{RenderSettings, Visualization};

#[derive(Parser)]
#[command(name = "plate-field")]
#[command(about = "Electric field of a parallel-plate capacitor")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Full page with the configuration panel, heading and caption.
    Html,
    /// The figure alone.
    Svg,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one configuration.
    Render {
        /// Configuration to render: one, two or three.
        #[arg(short, long, default_value = "two")]
        configuration: Configuration,
        /// Output file (defaults to the configuration's page name).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format.
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// Render the pages of all configurations, linked through their side panels.
    RenderAll {
        /// Directory receiving the pages.
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// List the available configurations.
    List,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = RenderSettings::default();

    match cli.command {
        Commands::Render {
            configuration,
            output,
            format,
        } => {
            let figure = Visualization::for_configuration(configuration, &settings).figure_svg()?;
            match format {
                Format::Html => {
                    let path = output.unwrap_or_else(|| PathBuf::from(page_file_name(configuration)));
                    write_page_file(&path, configuration, &figure)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("{}", path.display());
                }
                Format::Svg => {
                    let path = output.unwrap_or_else(|| {
                        PathBuf::from(format!("configuration-{}.svg", configuration.slug()))
                    });
                    write_svg_file(&path, &figure)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("{}", path.display());
                }
            }
            Ok(())
        }
        Commands::RenderAll { output_dir } => {
            std::fs::create_dir_all(&output_dir)
                .with_context(|| format!("failed to create {}", output_dir.display()))?;
            for configuration in Configuration::ALL {
                let figure = Visualization::for_configuration(configuration, &settings).figure_svg()?;
                let path = output_dir.join(page_file_name(configuration));
                write_page_file(&path, configuration, &figure)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("{}", path.display());
            }
            Ok(())
        }
        Commands::List => {
            for configuration in Configuration::ALL {
                let marker = if configuration == Configuration::default() { " (default)" } else { "" };
                println!(
                    "  {:<6} {} : sep = {:.2} m{}",
                    configuration.slug(),
                    configuration,
                    configuration.separation(),
                    marker
                );
            }
            Ok(())
        }
    }
}
