use cmakegen::block::{Block, Fragment};
use cmakegen::commands::*;
use indexmap::IndexMap;

fn render(fragment: Fragment) -> String {
    let mut block = Block::new();
    block.append(fragment);
    block.render_to_string(0).unwrap()
}

#[test]
fn test_minimum_required() {
    assert_eq!(minimum_required("3.20", "4.0"), "cmake_minimum_required(VERSION 3.20...4.0)");
}

#[test]
fn test_add_executable() {
    let options = ExecutableOptions { win32: true, macosx_bundle: false };
    assert_eq!(
        add_executable("myapp", &["main.cpp", "utils.cpp"], options),
        "add_executable(myapp WIN32 main.cpp utils.cpp)"
    );
    assert_eq!(
        add_executable("myapp", &["main.cpp"], ExecutableOptions::default()),
        "add_executable(myapp main.cpp)"
    );
}

#[test]
fn test_add_library() {
    assert_eq!(
        add_library("mylib", Some(LibraryType::Static), &["lib.cpp"]),
        "add_library(mylib STATIC lib.cpp)"
    );
    assert_eq!(add_library("mylib", None, &["a.c", "b.c"]), "add_library(mylib a.c b.c)");
    assert_eq!(add_library_alias("demo::lib", "mylib"), "add_library(demo::lib ALIAS mylib)");
}

#[test]
fn test_target_commands() {
    assert_eq!(
        target_link_libraries("myapp", Some(Visibility::Public), &["pthread", "m"]),
        "target_link_libraries(myapp PUBLIC pthread m)"
    );
    assert_eq!(
        target_include_directories("mylib", Some(Visibility::Interface), &["include"]),
        "target_include_directories(mylib INTERFACE include)"
    );
    assert_eq!(
        target_compile_features("mylib", None, "cxx_std_17"),
        "target_compile_features(mylib cxx_std_17)"
    );
}

#[test]
fn test_include_directories() {
    let options = IncludeOptions { system: true, ..Default::default() };
    assert_eq!(
        include_directories(&["/usr/include", "./include"], options),
        "include_directories(SYSTEM /usr/include ./include)"
    );
    let options = IncludeOptions { before: true, system: true, ..Default::default() };
    assert_eq!(include_directories(&["inc"], options), "include_directories(BEFORE SYSTEM inc)");
}

#[test]
fn test_set_property() {
    assert_eq!(
        set_property("TARGET", "myapp", "CXX_STANDARD", "11", PropertyOptions::default()),
        "set_property(TARGET myapp PROPERTY CXX_STANDARD 11)"
    );
    let options = PropertyOptions { append: true, append_string: false };
    assert_eq!(
        set_property("GLOBAL", "", "USE_FOLDERS", "ON", options),
        "set_property(GLOBAL APPEND PROPERTY USE_FOLDERS ON)"
    );
}

#[test]
fn test_flag_lists() {
    assert_eq!(add_compile_options(&["-Wall", "-O2"]), "add_compile_options(-Wall -O2)");
    assert_eq!(add_definitions(&["-DDEBUG"]), "add_definitions(-DDEBUG)");
}

#[test]
fn test_commented_builders() {
    assert_eq!(
        render(find_package("Boost", true, "Header only\nAdds Boost::boost")),
        "# Header only\n# Adds Boost::boost\nfind_package(Boost REQUIRED)\n\n"
    );
    assert_eq!(render(find_package("Threads", false, "")), "find_package(Threads)\n\n");
    assert_eq!(render(set("HEADER_LIST", "a.hpp", "")), "set(HEADER_LIST a.hpp)\n\n");
    assert_eq!(render(include("CTest", "Testing")), "# Testing\ninclude(CTest)\n\n");
    assert_eq!(render(add_subdirectory("src", "")), "add_subdirectory(src)\n\n");
    assert_eq!(
        render(add_test("t_test", "t", "")),
        "add_test(NAME t_test COMMAND t)\n"
    );
    assert_eq!(render(commented("Why", "foo()")), "# Why\nfoo()\n");
}

#[test]
fn test_set_target_properties_keeps_order() {
    let mut properties = IndexMap::new();
    properties.insert("OUTPUT_NAME".to_string(), "app".to_string());
    properties.insert("CXX_EXTENSIONS".to_string(), "OFF".to_string());

    assert_eq!(
        render(set_target_properties("app_target", &properties, "")),
        "set_target_properties(app_target PROPERTIES OUTPUT_NAME app CXX_EXTENSIONS OFF)\n"
    );
}

#[test]
fn test_project() {
    assert_eq!(
        render(project("demo", "0.1", "Demo project", "CXX", "")),
        "project(\n  demo\n  VERSION 0.1\n  DESCRIPTION \"Demo project\"\n  LANGUAGES CXX\n)\n\n"
    );
}

#[test]
fn test_source_group() {
    assert_eq!(
        render(source_group("include", "Header files", &["${HEADER_LIST}"], "")),
        "source_group(\n  TREE \"${PROJECT_SOURCE_DIR}/include\"\n  PREFIX \"Header files\"\n  FILES ${HEADER_LIST}\n)\n"
    );
}

#[test]
fn test_fetch_content() {
    assert_eq!(
        render(fetch_content("fmtlib", "https://github.com/fmtlib/fmt.git", "5.3.0", "Formatting")),
        "# Formatting\nFetchContent_Declare(\n  fmtlib\n  GIT_REPOSITORY https://github.com/fmtlib/fmt.git\n  GIT_TAG 5.3.0\n)\nFetchContent_MakeAvailable(fmtlib)\n\n"
    );
}

#[test]
fn test_add_doxygen_inside_conditional() {
    let mut block = Block::conditional(MAIN_PROJECT_CONDITION);
    block.append(add_doxygen("docs", ""));

    let output = block.render_to_string(1).unwrap();
    assert!(output.starts_with("if(CMAKE_PROJECT_NAME STREQUAL PROJECT_NAME)\n  find_package(Doxygen)\n"));
    assert!(output.contains("\n    add_subdirectory(docs)\n"));
    assert!(output.ends_with("endif() # CMAKE_PROJECT_NAME STREQUAL PROJECT_NAME\n\n"));
}
