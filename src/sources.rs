//! Example source files placed in a freshly generated project.

use crate::error::Result;
use crate::project::Project;
use crate::renderer::TemplateRenderer;
use log::debug;
use std::path::PathBuf;

const HEADER: &str = r#"#ifndef {{ project.normalized_name | upper }}_H
#define {{ project.normalized_name | upper }}_H

int example(int a);

#endif
"#;

const LIB_SOURCE: &str = r#"#include <{{ include_path }}>

int example(int a)
{
    return a * 2;
}
"#;

const APP_SOURCE: &str = r#"#include <{{ include_path }}>

int main(int argc, char* argv[])
{
    (void)argc;
    (void)argv;
    return example(12) == 24 ? 0 : 1;
}
"#;

const TEST_SOURCE_CXX: &str = r#"#define CATCH_CONFIG_MAIN
#include <catch2/catch.hpp>
#include <{{ include_path }}>

TEST_CASE("Quick check", "[main]")
{
    REQUIRE(example(21) == 42);
}
"#;

const TEST_SOURCE_C: &str = r#"#include <assert.h>
#include <{{ include_path }}>

int main(void)
{
    assert(example(21) == 42);
    return 0;
}
"#;

const MAINPAGE: &str = r#"# {{ project.name }}

Documentation of the `{{ project.normalized_name }}` library.
Generated with Doxygen from `{{ include_path }}`.
"#;

/// Which optional parts of the project get example sources.
#[derive(Debug, Clone, Copy)]
pub struct SourceSelection<'a> {
    pub lib: bool,
    pub app: bool,
    pub tests: bool,
    pub docs_dir: Option<&'a str>,
}

/// Rendered example file and its path below the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

/// Renders the example sources for `project`.
///
/// The header is always produced, everything else only when selected.
pub fn example_sources(
    engine: &dyn TemplateRenderer,
    project: &Project,
    selection: SourceSelection<'_>,
) -> Result<Vec<SourceFile>> {
    let context = serde_json::json!({
        "project": project,
        "include_path": project.include_path(),
    });

    let test_template = if project.language.is_c() { TEST_SOURCE_C } else { TEST_SOURCE_CXX };

    let mut planned = vec![(project.include_dir().join(&project.header_filename), HEADER)];
    if selection.lib {
        planned.push((project.root.join("src").join(&project.source_filename), LIB_SOURCE));
    }
    if selection.app {
        planned.push((project.root.join("apps").join(&project.source_filename), APP_SOURCE));
    }
    if selection.tests {
        let test_source = project.root.join("tests").join(project.test_source_filename());
        planned.push((test_source, test_template));
    }
    if let Some(docs_dir) = selection.docs_dir {
        planned.push((project.root.join(docs_dir).join("mainpage.md"), MAINPAGE));
    }

    planned
        .into_iter()
        .map(|(path, template)| -> Result<SourceFile> {
            debug!("Rendering example source {}", path.display());
            let content = engine.render(template, &context)?;
            Ok(SourceFile { path, content })
        })
        .collect()
}
