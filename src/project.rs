//! Project naming and directory layout.
//! Derives every file, directory and target name from the raw project name.

use crate::error::{Error, Result};
use clap::ValueEnum;
use log::debug;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Language (and optionally language standard) of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[value(name = "C")]
    C,
    #[default]
    #[value(name = "CXX")]
    Cxx,
    #[value(name = "c++11")]
    Cxx11,
    #[value(name = "c++14")]
    Cxx14,
    #[value(name = "c++17")]
    Cxx17,
    #[value(name = "c++20")]
    Cxx20,
    #[value(name = "c++23")]
    Cxx23,
}

impl Language {
    pub fn is_c(&self) -> bool {
        matches!(self, Language::C)
    }

    /// Value of the `LANGUAGES` argument of `project()`.
    pub fn cmake_language(&self) -> &'static str {
        if self.is_c() {
            "C"
        } else {
            "CXX"
        }
    }

    /// Compile feature requested for the library and the application.
    pub fn compile_feature(&self) -> &'static str {
        match self {
            Language::C => "c_std_11",
            Language::Cxx | Language::Cxx11 => "cxx_std_11",
            Language::Cxx14 => "cxx_std_14",
            Language::Cxx17 => "cxx_std_17",
            Language::Cxx20 => "cxx_std_20",
            Language::Cxx23 => "cxx_std_23",
        }
    }

    /// Compile feature of the test executable. Catch2 wants C++17 at least.
    pub fn test_compile_feature(&self) -> &'static str {
        match self {
            Language::Cxx20 | Language::Cxx23 | Language::C => self.compile_feature(),
            _ => "cxx_std_17",
        }
    }

    pub fn header_extension(&self) -> &'static str {
        if self.is_c() {
            "h"
        } else {
            "hpp"
        }
    }

    pub fn source_extension(&self) -> &'static str {
        if self.is_c() {
            "c"
        } else {
            "cpp"
        }
    }
}

/// All names derived from the project name.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    /// Name as given on the command line
    pub name: String,
    /// Name of the top level directory (whitespace replaced)
    pub top_level_dir: String,
    /// Name usable in file names, targets and header guards
    pub normalized_name: String,
    /// File name of the built executable
    pub app_name: String,
    pub lib_target: String,
    pub app_target: String,
    pub header_filename: String,
    pub source_filename: String,
    #[serde(skip)]
    pub root: PathBuf,
    #[serde(skip)]
    pub language: Language,
}

impl Project {
    /// Builds the project layout below `output_dir`.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the name is empty or only whitespace
    /// * `Error::ValidationError` if the name would leave `output_dir`
    ///   (`.`, `..` or a path separator)
    pub fn new<P: AsRef<Path>>(name: &str, output_dir: P, language: Language) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::ValidationError("project name must not be empty".to_string()));
        }
        if name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(Error::ValidationError(format!(
                "project name '{name}' must be a single directory name"
            )));
        }

        let whitespace = Regex::new(r"\s").map_err(|e| Error::ValidationError(e.to_string()))?;
        let separators =
            Regex::new(r"[\s.\-]").map_err(|e| Error::ValidationError(e.to_string()))?;

        let top_level_dir = whitespace.replace_all(name, "_").to_string();
        let normalized_name = separators.replace_all(name, "_").to_string();
        let app_name = top_level_dir.to_lowercase();
        let lower = normalized_name.to_lowercase();

        let project = Self {
            name: name.to_string(),
            root: output_dir.as_ref().join(&top_level_dir),
            lib_target: format!("{normalized_name}_lib_target"),
            app_target: format!("{normalized_name}_app_target"),
            header_filename: format!("{lower}.{}", language.header_extension()),
            source_filename: format!("{lower}.{}", language.source_extension()),
            top_level_dir,
            normalized_name,
            app_name,
            language,
        };

        debug!("Top level dir: {}", project.top_level_dir);
        debug!("Normalized name: {}", project.normalized_name);
        debug!("Project root: {}", project.root.display());
        debug!("Include dir: {}", project.include_dir().display());

        Ok(project)
    }

    /// Directory holding the public header, `<root>/include/<normalized name>`.
    pub fn include_dir(&self) -> PathBuf {
        self.root.join("include").join(&self.normalized_name)
    }

    /// Header path as written in `#include` directives.
    pub fn include_path(&self) -> String {
        format!("{}/{}", self.normalized_name, self.header_filename)
    }

    pub fn test_source_filename(&self) -> String {
        format!("test{}", self.source_filename)
    }

    pub fn test_target(&self) -> String {
        format!("test_{}", self.lib_target)
    }
}
