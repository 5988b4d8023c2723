//! CMake command builders.
//! Stateless helpers that format single listfile commands. Builders that take
//! a comment return a [`Fragment`] so the comment lines travel with the command.

use crate::block::{comment_lines, Fragment};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Condition that holds only when the project is built on its own,
/// not pulled in through `add_subdirectory`.
pub const MAIN_PROJECT_CONDITION: &str = "CMAKE_PROJECT_NAME STREQUAL PROJECT_NAME";

/// Usage requirement scope of a target property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
    Interface,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "PUBLIC"),
            Visibility::Private => write!(f, "PRIVATE"),
            Visibility::Interface => write!(f, "INTERFACE"),
        }
    }
}

impl FromStr for Visibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "PUBLIC" => Ok(Visibility::Public),
            "PRIVATE" => Ok(Visibility::Private),
            "INTERFACE" => Ok(Visibility::Interface),
            _ => Err(Error::ValidationError(format!(
                "visibility must be PUBLIC, PRIVATE, or INTERFACE, got '{s}'"
            ))),
        }
    }
}

/// Kind of library produced by `add_library`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryType {
    Static,
    Shared,
    Module,
}

impl fmt::Display for LibraryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryType::Static => write!(f, "STATIC"),
            LibraryType::Shared => write!(f, "SHARED"),
            LibraryType::Module => write!(f, "MODULE"),
        }
    }
}

impl FromStr for LibraryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "STATIC" => Ok(LibraryType::Static),
            "SHARED" => Ok(LibraryType::Shared),
            "MODULE" => Ok(LibraryType::Module),
            _ => Err(Error::ValidationError(format!(
                "library type must be STATIC, SHARED, or MODULE, got '{s}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutableOptions {
    pub win32: bool,
    pub macosx_bundle: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IncludeOptions {
    pub before: bool,
    pub after: bool,
    pub system: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyOptions {
    pub append: bool,
    pub append_string: bool,
}

fn call<S: AsRef<str>>(command: &str, args: &[S]) -> String {
    let args: Vec<&str> =
        args.iter().map(AsRef::as_ref).filter(|arg| !arg.is_empty()).collect();
    format!("{}({})", command, args.join(" "))
}

fn target_call<S: AsRef<str>>(
    command: &str,
    target: &str,
    visibility: Option<Visibility>,
    items: &[S],
) -> String {
    let mut args = vec![target.to_string()];
    if let Some(visibility) = visibility {
        args.push(visibility.to_string());
    }
    args.extend(items.iter().map(|item| item.as_ref().to_string()));
    call(command, &args)
}

/// Prefixes `lines` with the formatted `comment`.
fn with_comment(comment: &str, lines: Vec<String>) -> Fragment {
    let mut result = comment_lines(comment);
    result.extend(lines);
    result.into()
}

/// Single command preceded by a comment.
pub fn commented<S: Into<String>>(comment: &str, line: S) -> Fragment {
    with_comment(comment, vec![line.into()])
}

pub fn minimum_required(min_version: &str, max_version: &str) -> String {
    format!("cmake_minimum_required(VERSION {min_version}...{max_version})")
}

/// `project()` call spread over several lines, followed by a blank line.
pub fn project(
    name: &str,
    version: &str,
    description: &str,
    languages: &str,
    comment: &str,
) -> Fragment {
    with_comment(
        comment,
        vec![
            "project(".to_string(),
            format!("  {name}"),
            format!("  VERSION {version}"),
            format!("  DESCRIPTION \"{description}\""),
            format!("  LANGUAGES {languages}"),
            ")".to_string(),
            String::new(),
        ],
    )
}

pub fn add_executable<S: AsRef<str>>(
    name: &str,
    sources: &[S],
    options: ExecutableOptions,
) -> String {
    let mut args = vec![name.to_string()];
    if options.win32 {
        args.push("WIN32".to_string());
    }
    if options.macosx_bundle {
        args.push("MACOSX_BUNDLE".to_string());
    }
    args.extend(sources.iter().map(|s| s.as_ref().to_string()));
    call("add_executable", &args)
}

pub fn add_library<S: AsRef<str>>(
    name: &str,
    library_type: Option<LibraryType>,
    sources: &[S],
) -> String {
    let mut args = vec![name.to_string()];
    if let Some(library_type) = library_type {
        args.push(library_type.to_string());
    }
    args.extend(sources.iter().map(|s| s.as_ref().to_string()));
    call("add_library", &args)
}

pub fn add_library_alias(name: &str, target: &str) -> String {
    call("add_library", &[name, "ALIAS", target])
}

pub fn target_include_directories<S: AsRef<str>>(
    target: &str,
    visibility: Option<Visibility>,
    dirs: &[S],
) -> String {
    target_call("target_include_directories", target, visibility, dirs)
}

pub fn target_link_libraries<S: AsRef<str>>(
    target: &str,
    visibility: Option<Visibility>,
    libraries: &[S],
) -> String {
    target_call("target_link_libraries", target, visibility, libraries)
}

pub fn target_compile_features(
    target: &str,
    visibility: Option<Visibility>,
    feature: &str,
) -> String {
    target_call("target_compile_features", target, visibility, &[feature])
}

pub fn set_target_properties(
    target: &str,
    properties: &IndexMap<String, String>,
    comment: &str,
) -> Fragment {
    let mut args = vec![target.to_string(), "PROPERTIES".to_string()];
    for (key, value) in properties {
        args.push(key.clone());
        args.push(value.clone());
    }
    with_comment(comment, vec![call("set_target_properties", &args)])
}

pub fn set(var: &str, value: &str, comment: &str) -> Fragment {
    with_comment(comment, vec![call("set", &[var, value]), String::new()])
}

pub fn set_property(
    scope: &str,
    target: &str,
    property: &str,
    value: &str,
    options: PropertyOptions,
) -> String {
    let mut args = vec![scope, target];
    if options.append {
        args.push("APPEND");
    }
    if options.append_string {
        args.push("APPEND_STRING");
    }
    args.extend(["PROPERTY", property, value]);
    call("set_property", &args)
}

pub fn include(module: &str, comment: &str) -> Fragment {
    with_comment(comment, vec![call("include", &[module]), String::new()])
}

pub fn include_directories<S: AsRef<str>>(dirs: &[S], options: IncludeOptions) -> String {
    let mut args = Vec::new();
    if options.after {
        args.push("AFTER".to_string());
    }
    if options.before {
        args.push("BEFORE".to_string());
    }
    if options.system {
        args.push("SYSTEM".to_string());
    }
    args.extend(dirs.iter().map(|d| d.as_ref().to_string()));
    call("include_directories", &args)
}

pub fn add_compile_options<S: AsRef<str>>(options: &[S]) -> String {
    call("add_compile_options", options)
}

pub fn add_definitions<S: AsRef<str>>(definitions: &[S]) -> String {
    call("add_definitions", definitions)
}

pub fn find_package(package: &str, required: bool, comment: &str) -> Fragment {
    let required = if required { "REQUIRED" } else { "" };
    with_comment(comment, vec![call("find_package", &[package, required]), String::new()])
}

pub fn add_subdirectory(dir: &str, comment: &str) -> Fragment {
    with_comment(comment, vec![call("add_subdirectory", &[dir]), String::new()])
}

pub fn add_test(name: &str, command: &str, comment: &str) -> Fragment {
    with_comment(comment, vec![call("add_test", &["NAME", name, "COMMAND", command])])
}

pub fn source_group<S: AsRef<str>>(
    tree_dir: &str,
    prefix: &str,
    files: &[S],
    comment: &str,
) -> Fragment {
    let files: Vec<&str> = files.iter().map(AsRef::as_ref).collect();
    with_comment(
        comment,
        vec![
            "source_group(".to_string(),
            format!("  TREE \"${{PROJECT_SOURCE_DIR}}/{tree_dir}\""),
            format!("  PREFIX \"{prefix}\""),
            format!("  FILES {}", files.join(" ")),
            ")".to_string(),
        ],
    )
}

/// Declares a FetchContent dependency and makes it available right away.
pub fn fetch_content(name: &str, git_repository: &str, git_tag: &str, comment: &str) -> Fragment {
    with_comment(
        comment,
        vec![
            "FetchContent_Declare(".to_string(),
            format!("  {name}"),
            format!("  GIT_REPOSITORY {git_repository}"),
            format!("  GIT_TAG {git_tag}"),
            ")".to_string(),
            call("FetchContent_MakeAvailable", &[name]),
            String::new(),
        ],
    )
}

/// Adds the docs subdirectory only when Doxygen can be found.
pub fn add_doxygen(docs_dir: &str, comment: &str) -> Fragment {
    with_comment(
        comment,
        vec![
            call("find_package", &["Doxygen"]),
            "if(Doxygen_FOUND)".to_string(),
            format!("  {}", call("add_subdirectory", &[docs_dir])),
            "else()".to_string(),
            "  message(STATUS \"Doxygen not found, not building docs\")".to_string(),
            "endif()".to_string(),
            String::new(),
        ],
    )
}
