//! Listfile and project skeleton generation.
//! Builds one [`Block`] tree per listfile and writes it, together with the
//! directory structure and the example sources, below the project root.

use crate::block::Block;
use crate::cli::Args;
use crate::commands::{
    self, add_executable, add_library, add_subdirectory, commented, set_property, set_target_properties,
    target_compile_features, target_include_directories, target_link_libraries, ExecutableOptions,
    PropertyOptions, Visibility, MAIN_PROJECT_CONDITION,
};
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::project::Project;
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use crate::sources::{example_sources, SourceSelection};
use indexmap::IndexMap;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Name of every generated listfile.
pub const LISTFILE: &str = "CMakeLists.txt";

const TESTING_CONDITION: &str =
    "(CMAKE_PROJECT_NAME STREQUAL PROJECT_NAME OR MODERN_CMAKE_BUILD_TESTING) AND BUILD_TESTING";

/// Which parts of the project are generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub app: bool,
    pub lib: bool,
    /// Documentation directory, `None` when docs are disabled
    pub docs_dir: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self { app: true, lib: true, docs_dir: Some("docs".to_string()) }
    }
}

impl From<&Args> for Options {
    fn from(args: &Args) -> Self {
        Self {
            app: !args.no_app,
            lib: !args.no_lib,
            docs_dir: (!args.no_docs).then(|| args.docs_dir.clone()),
        }
    }
}

/// Asks before writing into an already existing project root.
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if the user declines
pub fn confirm_project_root(prompt: &dyn Prompter, root: &Path, force: bool) -> Result<()> {
    if !root.exists() {
        return Ok(());
    }
    let answer = prompt.confirm(
        force,
        format!("Directory '{}' already exists. Write into it?", root.display()),
    )?;
    if answer {
        Ok(())
    } else {
        Err(Error::OutputDirectoryExistsError { output_dir: root.display().to_string() })
    }
}

/// Renders `block` into a new listfile at `path`.
///
/// The file is closed on every exit path. A failed write leaves the partially
/// written file behind.
pub fn write_listfile<P: AsRef<Path>>(path: P, block: &Block) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing listfile {}", path.display());
    let mut writer = BufWriter::new(File::create(path)?);
    block.render(&mut writer, 0)?;
    writer.flush()?;
    Ok(())
}

pub struct Generator<'a> {
    project: &'a Project,
    config: &'a GeneratorConfig,
    options: &'a Options,
}

impl<'a> Generator<'a> {
    pub fn new(project: &'a Project, config: &'a GeneratorConfig, options: &'a Options) -> Self {
        Self { project, config, options }
    }

    /// Tests exercise the library target, so they are skipped along with it.
    fn tests_enabled(&self) -> bool {
        self.options.lib
    }

    /// Directories of the skeleton, in creation order.
    pub fn directories(&self) -> Vec<PathBuf> {
        let root = &self.project.root;
        let mut dirs = vec![self.project.include_dir()];
        if self.options.lib {
            dirs.push(root.join("src"));
        }
        if self.options.app {
            dirs.push(root.join("apps"));
        }
        if self.tests_enabled() {
            dirs.push(root.join("tests"));
        }
        if let Some(docs_dir) = &self.options.docs_dir {
            dirs.push(root.join(docs_dir));
        }
        dirs
    }

    pub fn init_dir_structure(&self) -> Result<()> {
        for dir in self.directories() {
            debug!("Creating directory {}", dir.display());
            fs::create_dir_all(&dir)?;
        }
        Ok(())
    }

    /// Top level listfile of the project.
    pub fn main_listfile(&self) -> Block {
        let project = self.project;
        let language = project.language.cmake_language();

        let mut root = Block::new();
        root.append(commands::minimum_required(
            &self.config.cmake_minimum,
            &self.config.cmake_maximum,
        ))
        .append("");
        root.append(commands::project(
            &project.normalized_name,
            &self.config.project_version,
            &self.config.description,
            language,
            "",
        ));

        let mut main_project = Block::conditional(MAIN_PROJECT_CONDITION).with_comment(
            "Only do these if this is the main project, and not if it is included through add_subdirectory",
        );
        let extensions_comment = if project.language.is_c() {
            "Lets ensure -std=cxx instead of -std=gnuxx"
        } else {
            "Lets ensure -std=c++xx instead of -std=g++xx"
        };
        main_project.append(commands::set(
            &format!("CMAKE_{language}_EXTENSIONS"),
            "OFF",
            extensions_comment,
        ));
        main_project.append(commented(
            "Lets nicely support folders in IDEs",
            set_property("GLOBAL", "", "USE_FOLDERS", "ON", PropertyOptions::default()),
        ));
        main_project.append("");
        main_project.append(commands::include(
            "CTest",
            "Testing only available if this is the main app\n\
             Note this needs to be done in the main CMakeLists\n\
             since it calls enable_testing, which must be in the\n\
             main CMakeLists.",
        ));
        if let Some(docs_dir) = &self.options.docs_dir {
            main_project.append(commands::add_doxygen(
                docs_dir,
                "Docs only available if this is the main app\n\
                 NOTE: graphviz is required:\n    sudo apt install graphviz",
            ));
        }
        root.append(main_project);

        root.append(commands::include(
            "FetchContent",
            "FetchContent added in CMake 3.11, downloads during the configure step\n\
             FetchContent_MakeAvailable was added in CMake 3.14; simpler usage",
        ));

        if self.config.find_boost {
            root.append(commands::find_package(
                "Boost",
                true,
                "This is header only, so could be replaced with git submodules or FetchContent\n\
                 Adds Boost::boost",
            ));
        }
        if self.options.lib {
            root.append(add_subdirectory("src", "The compiled library code is here"));
        }
        if self.options.app {
            root.append(add_subdirectory("apps", "The executable code is here"));
        }

        if self.tests_enabled() {
            let mut testing = Block::conditional(TESTING_CONDITION).with_comment(
                "Testing only available if this is the main app\n\
                 Emergency override MODERN_CMAKE_BUILD_TESTING provided as well",
            );
            testing.append(add_subdirectory("tests", ""));
            root.append(testing);
        }
        root
    }

    pub fn apps_listfile(&self) -> Block {
        let project = self.project;
        let target = project.app_target.as_str();

        let mut block = Block::new();
        block.append(add_executable(
            target,
            &[&project.source_filename],
            ExecutableOptions::default(),
        ));
        block.append(target_compile_features(
            target,
            Some(Visibility::Private),
            project.language.compile_feature(),
        ));
        if self.options.lib {
            block.append(target_link_libraries(
                target,
                Some(Visibility::Private),
                &[&project.lib_target],
            ));
        }
        let properties = IndexMap::from([("OUTPUT_NAME".to_string(), project.app_name.clone())]);
        block.append(set_target_properties(
            target,
            &properties,
            "Explicitly set the filename for the executable file",
        ));
        block
    }

    pub fn lib_listfile(&self) -> Block {
        let project = self.project;
        let target = project.lib_target.as_str();
        let header_list = format!(
            "${{{}_SOURCE_DIR}}/include/{}",
            project.normalized_name,
            project.include_path()
        );

        let mut block = Block::new();
        block.append(commands::set("HEADER_LIST", &header_list, ""));
        block.append(add_library(target, None, &[project.source_filename.as_str(), "${HEADER_LIST}"]));
        block.append(target_include_directories(
            target,
            Some(Visibility::Public),
            &["../include"],
        ));
        if self.config.find_boost {
            block.append(target_link_libraries(
                target,
                Some(Visibility::Private),
                &["Boost::boost"],
            ));
        }
        block.append(target_compile_features(
            target,
            Some(Visibility::Public),
            project.language.compile_feature(),
        ));
        block.append(commands::source_group(
            "include",
            "Header files",
            &["${HEADER_LIST}"],
            "",
        ));
        block
    }

    pub fn tests_listfile(&self) -> Block {
        let project = self.project;
        let target = project.test_target();
        let mut libraries = vec![project.lib_target.clone()];

        let mut block = Block::new();
        if !project.language.is_c() {
            block.append(commands::fetch_content(
                "Catch2",
                "https://github.com/catchorg/Catch2.git",
                "v2.13.6",
                "Test framework, adds Catch2::Catch2",
            ));
            libraries.push("Catch2::Catch2".to_string());
        }
        block.append(add_executable(
            &target,
            &[project.test_source_filename()],
            ExecutableOptions::default(),
        ));
        block.append(target_compile_features(
            &target,
            Some(Visibility::Private),
            project.language.test_compile_feature(),
        ));
        block.append(target_link_libraries(&target, Some(Visibility::Private), &libraries));
        block.append(commands::add_test(&format!("{target}_test"), &target, ""));
        block
    }

    pub fn docs_listfile(&self) -> Block {
        let mut block = Block::new();
        block.append(vec![
            "set(DOXYGEN_EXTRACT_ALL YES)".to_string(),
            "set(DOXYGEN_BUILTIN_STL_SUPPORT YES)".to_string(),
            String::new(),
            format!(
                "doxygen_add_docs(docs {} \"${{CMAKE_CURRENT_SOURCE_DIR}}/mainpage.md\"",
                self.project.include_path()
            ),
            "                 WORKING_DIRECTORY \"${PROJECT_SOURCE_DIR}/include\")".to_string(),
        ]);
        block
    }

    /// Every listfile of the project with its destination path.
    pub fn listfiles(&self) -> Vec<(PathBuf, Block)> {
        let root = &self.project.root;
        let mut listfiles = vec![(root.join(LISTFILE), self.main_listfile())];
        if self.options.app {
            listfiles.push((root.join("apps").join(LISTFILE), self.apps_listfile()));
        }
        if self.options.lib {
            listfiles.push((root.join("src").join(LISTFILE), self.lib_listfile()));
        }
        if self.tests_enabled() {
            listfiles.push((root.join("tests").join(LISTFILE), self.tests_listfile()));
        }
        if let Some(docs_dir) = &self.options.docs_dir {
            listfiles.push((root.join(docs_dir).join(LISTFILE), self.docs_listfile()));
        }
        listfiles
    }

    /// Generates the whole project and returns the written files in order.
    pub fn generate(&self, engine: &dyn TemplateRenderer) -> Result<Vec<PathBuf>> {
        info!("Generating project '{}' in {}", self.project.name, self.project.root.display());
        self.init_dir_structure()?;

        let mut written = Vec::new();
        for (path, block) in self.listfiles() {
            write_listfile(&path, &block)?;
            written.push(path);
        }

        let selection = SourceSelection {
            lib: self.options.lib,
            app: self.options.app,
            tests: self.tests_enabled(),
            docs_dir: self.options.docs_dir.as_deref(),
        };
        for source in example_sources(engine, self.project, selection)? {
            debug!("Writing example source {}", source.path.display());
            fs::write(&source.path, &source.content)?;
            written.push(source.path);
        }
        Ok(written)
    }
}
