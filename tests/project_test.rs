use cmakegen::error::Error;
use cmakegen::project::{Language, Project};
use std::path::PathBuf;

#[test]
fn test_project_names_are_normalized() {
    let project = Project::new("My Cool.App-x", "/tmp/out", Language::Cxx).unwrap();

    assert_eq!(project.name, "My Cool.App-x");
    assert_eq!(project.top_level_dir, "My_Cool.App-x");
    assert_eq!(project.normalized_name, "My_Cool_App_x");
    assert_eq!(project.app_name, "my_cool.app-x");
    assert_eq!(project.lib_target, "My_Cool_App_x_lib_target");
    assert_eq!(project.app_target, "My_Cool_App_x_app_target");
    assert_eq!(project.header_filename, "my_cool_app_x.hpp");
    assert_eq!(project.source_filename, "my_cool_app_x.cpp");
    assert_eq!(project.root, PathBuf::from("/tmp/out/My_Cool.App-x"));
    assert_eq!(
        project.include_dir(),
        PathBuf::from("/tmp/out/My_Cool.App-x/include/My_Cool_App_x")
    );
    assert_eq!(project.include_path(), "My_Cool_App_x/my_cool_app_x.hpp");
}

#[test]
fn test_c_project_file_names() {
    let project = Project::new("demo", "out", Language::C).unwrap();

    assert_eq!(project.header_filename, "demo.h");
    assert_eq!(project.source_filename, "demo.c");
    assert_eq!(project.test_source_filename(), "testdemo.c");
    assert_eq!(project.test_target(), "test_demo_lib_target");
}

#[test]
fn test_cxx_standard_selects_cxx_files() {
    let project = Project::new("demo", "out", Language::Cxx17).unwrap();

    assert_eq!(project.source_filename, "demo.cpp");
    assert_eq!(project.language.cmake_language(), "CXX");
    assert_eq!(project.language.compile_feature(), "cxx_std_17");
}

#[test]
fn test_empty_project_name_is_rejected() {
    for name in ["", "   ", "\t"] {
        match Project::new(name, "out", Language::Cxx) {
            Err(Error::ValidationError(_)) => (),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}

#[test]
fn test_project_name_leaving_output_dir_is_rejected() {
    for name in [".", "..", "../demo", "a/b", "a\\b", "/abs"] {
        match Project::new(name, "out", Language::Cxx) {
            Err(Error::ValidationError(msg)) => assert!(msg.contains("single directory name")),
            other => panic!("Expected ValidationError for {name:?}, got {:?}", other),
        }
    }
    assert!(Project::new("my.project", "out", Language::Cxx).is_ok());
}
