//! cmakegen's main application entry point and orchestration logic.
//! Handles command-line argument parsing and drives project generation.

use cmakegen::{
    cli::{get_args, Args},
    config::get_config,
    error::{default_error_handler, Result},
    generator::{confirm_project_root, Generator, Options},
    project::Project,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the generator configuration
/// 2. Derives the project layout from the name
/// 3. Confirms writing into an existing project directory
/// 4. Writes directories, listfiles and example sources
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let prompt = DialoguerPrompter::new();

    log::info!("Output dir: {}", args.output_dir.display());
    log::info!("Project name: {}", args.project_name);
    log::info!("Language: {:?}", args.language);

    let config = get_config(args.config.as_ref())?;
    let project = Project::new(&args.project_name, &args.output_dir, args.language)?;
    let options = Options::from(&args);

    confirm_project_root(&prompt, &project.root, args.force)?;

    let generator = Generator::new(&project, &config, &options);
    for path in generator.generate(&engine)? {
        println!("Created: '{}'", path.display());
    }

    println!("Project generation completed successfully in {}.", project.root.display());
    Ok(())
}
