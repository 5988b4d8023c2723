//! cmakegen creates CMake-based C and C++ project skeletons.
//! It lays out the directory structure, writes nested listfiles with
//! conditional sections, and adds example sources for the library,
//! application and tests.

/// Listfile blocks: ordered trees of lines and conditional sections
pub mod block;

/// Command-line interface module for the cmakegen application
pub mod cli;

/// Formatting of single CMake commands
pub mod commands;

/// Generator settings loaded from JSON or YAML
pub mod config;

/// Error types and handling for the cmakegen application
pub mod error;

/// Listfile and skeleton generation
pub mod generator;

/// Project names, targets and paths
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// MiniJinja rendering of the example sources
pub mod renderer;

/// Built-in example source templates
pub mod sources;
