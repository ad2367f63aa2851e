use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use git_buildver::cli::{self, WorkflowArgs};
use git_buildver::config;
use git_buildver::logging;
use git_buildver::ui::{self, OutputFormat};

#[derive(clap::Parser)]
#[command(
    name = "git-buildver",
    about = "Derive a build release version from git tags"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        default_value = ".",
        help = "Working directory to inspect"
    )]
    path: PathBuf,

    #[arg(long, help = "Version used when no git history is available")]
    fallback_version: Option<String>,

    #[arg(short, long, help = "Package name shown in the output")]
    name: Option<String>,

    #[arg(long, help = "Search parent directories for the repository")]
    discover: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    format: OutputFormat,

    #[arg(short, long, help = "Do not report fallback warnings")]
    quiet: bool,

    #[arg(long, help = "Log diagnostics to stderr")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-buildver {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init_tracing(args.verbose);

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = WorkflowArgs {
        path: args.path,
        fallback_version: args.fallback_version,
        name: args.name,
        discover: args.discover,
        format: args.format,
    };

    let result = match cli::run(workflow_args, config) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    if let Some(warning) = &result.warning {
        if !args.quiet {
            ui::display_boundary_warning(warning);
            ui::display_status(&format!(
                "Using fallback version {}",
                result.info.version
            ));
        }
    }

    print!("{}", result.output);

    Ok(())
}
