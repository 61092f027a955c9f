//! End-to-end classification tests over fixture trees built on disk.

use shipbox::{classify_path, Language, ProjectClassification, ScanConfig, NO_MATCH_REASON};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn classify(name: &str, root: &Path) -> ProjectClassification {
    classify_path(name, root, &ScanConfig::default()).unwrap()
}

#[test]
fn python_project_with_requirements() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("app.py"), "print('serving')\n").unwrap();
    fs::write(dir.path().join("requirements.txt"), "flask==3.0\n").unwrap();

    let record = classify("webapp", dir.path());
    assert_eq!(record.language, Language::Python);
    assert_eq!(record.description, "webapp: Python project with requirements.txt");
    assert!(record.has_dependencies);
    assert_eq!(record.dependency_manifest.as_deref(), Some("requirements.txt"));
    assert_eq!(record.source_files, vec!["app.py"]);
    assert_eq!(record.executable_name, "app.py");
}

#[test]
fn javascript_project_with_package_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.js"), "console.log('hi')\n").unwrap();
    fs::write(dir.path().join("package.json"), "{\"name\": \"demo\"}\n").unwrap();

    let record = classify("demo", dir.path());
    assert_eq!(record.language, Language::JavaScript);
    assert!(record.has_dependencies);
    assert_eq!(record.dependency_manifest.as_deref(), Some("package.json"));
    assert_eq!(record.executable_name, "index.js");
}

#[test]
fn polyglot_tree_resolves_by_priority_not_count() {
    let dir = TempDir::new().unwrap();
    // One Python file against many Go files: priority wins.
    fs::write(dir.path().join("tool.py"), "print(1)\n").unwrap();
    for i in 0..5 {
        fs::write(dir.path().join(format!("part{i}.go")), "package main\n").unwrap();
    }

    let record = classify("poly", dir.path());
    assert_eq!(record.language, Language::Python);
    assert_eq!(record.source_files, vec!["tool.py"]);
}

#[test]
fn java_beats_lower_priority_languages() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Server.java"), "class Server {}\n").unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}\n").unwrap();
    fs::write(dir.path().join("util.go"), "package util\n").unwrap();

    let record = classify("poly", dir.path());
    assert_eq!(record.language, Language::Java);
}

#[test]
fn typescript_with_tsconfig_inherits_package_manifest() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.ts"), "export {}\n").unwrap();
    fs::write(dir.path().join("types.d.ts"), "declare const x: number\n").unwrap();
    fs::write(dir.path().join("tsconfig.json"), "{}\n").unwrap();
    fs::write(dir.path().join("package.json"), "{}\n").unwrap();

    let record = classify("web", dir.path());
    assert_eq!(record.language, Language::TypeScript);
    assert_eq!(record.description, "web: TypeScript project with tsconfig.json");
    assert!(record.has_dependencies);
    assert_eq!(record.dependency_manifest.as_deref(), Some("package.json"));
    assert_eq!(record.executable_name, "main.ts");
}

#[test]
fn makefile_target_variable_sets_executable() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.c"), "int main(void) { return 0; }\n").unwrap();
    fs::write(
        dir.path().join("Makefile"),
        "CC = gcc\nTARGET = app\n\n$(TARGET): main.o\n\t$(CC) -o $(TARGET) main.o\n",
    )
    .unwrap();

    let record = classify("ctool", dir.path());
    assert_eq!(record.language, Language::C);
    assert_eq!(record.build_system.as_deref(), Some("Makefile"));
    assert_eq!(record.executable_name, "app");
}

#[test]
fn makefile_output_flag_resolves_variable_indirection() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.c"), "int main(void) { return 0; }\n").unwrap();
    fs::write(
        dir.path().join("Makefile"),
        "OUT = server\n\nbuild:\n\tgcc main.c -o $(OUT)\n",
    )
    .unwrap();

    let record = classify("ctool", dir.path());
    assert_eq!(record.executable_name, "server");
}

#[test]
fn makefile_without_signal_falls_back_to_source_stem() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("engine.cpp"), "int main() { return 0; }\n").unwrap();
    fs::write(dir.path().join("Makefile"), "clean:\n\trm -f *.o\n").unwrap();

    let record = classify("game", dir.path());
    assert_eq!(record.language, Language::Cpp);
    assert_eq!(record.build_system.as_deref(), Some("Makefile"));
    assert_eq!(record.executable_name, "engine");
}

#[test]
fn go_project_uses_conventional_binary_name() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.go"), "package main\n\nfunc main() {}\n").unwrap();

    let record = classify("svc", dir.path());
    assert_eq!(record.language, Language::Go);
    assert!(record.build_system.is_none());
    assert_eq!(record.executable_name, "main");
}

#[test]
fn go_binary_name_ignores_actual_file_names() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("server.go"), "package main\n").unwrap();

    let record = classify("svc", dir.path());
    assert_eq!(record.executable_name, "main");
}

#[test]
fn interactive_python_tree_reports_pattern_and_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("quiz.py"),
        "answer = input(\"your answer: \")\n",
    )
    .unwrap();

    let record = classify("quiz", dir.path());
    assert!(record.is_interactive);
    assert!(record.interactive_reason.contains("quiz.py"));
    assert!(record.interactive_reason.contains(r"input\s*\("));
}

#[test]
fn non_interactive_twin_tree_reports_no_match() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("quiz.py"), "answer = 42\nprint(answer)\n").unwrap();

    let record = classify("quiz", dir.path());
    assert!(!record.is_interactive);
    assert_eq!(record.interactive_reason, NO_MATCH_REASON);
}

#[test]
fn interactivity_ignores_dependency_caches() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.js"), "console.log('ok')\n").unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(
        dir.path().join("node_modules/prompt.js"),
        "process.stdin.on('data', f)\n",
    )
    .unwrap();

    let record = classify("demo", dir.path());
    assert!(!record.is_interactive);
}

#[test]
fn classification_is_idempotent() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("app.py"), "import sys\nsys.stdin.read()\n").unwrap();
    fs::write(dir.path().join("requirements.txt"), "click\n").unwrap();
    fs::write(dir.path().join("Makefile"), "TARGET = app\n").unwrap();

    let first = classify("stable", dir.path());
    let second = classify("stable", dir.path());

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn unknown_tree_is_a_valid_terminal_state() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "nothing to see\n").unwrap();
    fs::write(dir.path().join("data.csv"), "a,b\n1,2\n").unwrap();

    let record = classify("mystery", dir.path());
    assert_eq!(record.language, Language::Unknown);
    assert_eq!(record.description, "mystery: Unknown project type");
    assert!(record.source_files.is_empty());
    assert!(!record.has_dependencies);
    assert!(record.dependency_manifest.is_none());
    assert!(record.build_system.is_none());
}

#[test]
fn always_populated_fields_are_never_empty() {
    let fixtures: Vec<TempDir> = (0..4).map(|_| TempDir::new().unwrap()).collect();

    fs::write(fixtures[0].path().join("app.py"), "print(1)\n").unwrap();
    fs::write(fixtures[1].path().join("main.go"), "package main\n").unwrap();
    fs::write(fixtures[2].path().join("notes.txt"), "no source here\n").unwrap();
    // Fixture 3 is entirely empty.

    for fixture in &fixtures {
        let record = classify("fixture", fixture.path());
        assert!(!record.description.is_empty());
        assert!(!record.executable_name.is_empty());
        assert!(!record.language.as_str().is_empty());
        assert!(!record.interactive_reason.is_empty());
    }
}

#[test]
fn missing_root_is_the_only_actionable_failure() {
    let err = classify_path(
        "ghost",
        Path::new("/nonexistent/staging/ghost"),
        &ScanConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, shipbox::ClassifyError::PathNotFound(_)));
}

#[test]
fn nested_sources_are_collected_in_lexical_order() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("zmain.py"), "").unwrap();
    fs::write(dir.path().join("src/helper.py"), "").unwrap();

    let record = classify("nested", dir.path());
    // Depth-first walk with sorted siblings: src/ comes before zmain.py.
    assert_eq!(record.source_files, vec!["helper.py", "zmain.py"]);
    assert_eq!(record.executable_name, "helper.py");
}
