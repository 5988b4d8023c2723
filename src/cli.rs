//! Command-line interface implementation for cmakegen.
//! Provides argument parsing and help text formatting using clap.

use crate::project::Language;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for cmakegen.
#[derive(Parser, Debug)]
#[command(author, version, about = "cmakegen: generate CMake projects for C/C++", long_about = None)]
pub struct Args {
    /// Directory in which the project directory is created
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Project name
    #[arg(short = 'n', long, value_name = "NAME")]
    pub project_name: String,

    /// Programming language, optionally with the C++ standard
    #[arg(short, long, value_enum, default_value_t = Language::Cxx)]
    pub language: Language,

    /// Do not generate the executable
    #[arg(long)]
    pub no_app: bool,

    /// Do not generate the library (and the tests depending on it)
    #[arg(long)]
    pub no_lib: bool,

    /// Do not generate documentation
    #[arg(long)]
    pub no_docs: bool,

    /// Documentation directory
    #[arg(long, default_value = "docs")]
    pub docs_dir: String,

    /// Generator settings file (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write into an existing project directory without asking
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                // Nothing sensible is left to do when stdout is gone.
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
