use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use version_info::cli::{run_version_info, Backend, VersionInfoArgs};
use version_info::ui::{self, OutputFormat, Section};
use version_info::{config, logging};

#[derive(clap::Parser)]
#[command(
    name = "version-info",
    version,
    about = "Derive release version information from git tags and the project manifest"
)]
struct Args {
    #[arg(value_enum, default_value_t = Section::All, help = "Which part to print")]
    section: Section,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Directory to start searching from [default: current directory]")]
    dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Backend::Git2, help = "How to query git")]
    backend: Backend,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    format: OutputFormat,

    #[arg(short, long, help = "Log git queries and resolution steps")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init(args.verbose) {
        ui::display_error(&e.to_string());
    }

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let start_dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    let workflow_args = VersionInfoArgs {
        start_dir,
        backend: args.backend,
    };
    let info = run_version_info(&workflow_args, &config)?;

    for warning in &info.warnings {
        ui::display_boundary_warning(warning);
    }

    print!("{}", ui::render(&info, args.section, args.format)?);
    Ok(())
}
