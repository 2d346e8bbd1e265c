//! End-to-end runs of load, ask, synthesize and write against a temp directory

use crate::config::{synthesize, FileExtension, ModuleFormat};
use crate::presenter::{generated_banner, run_instruction};
use crate::product::{testing::TestProduct, ProductConfig};
use crate::project::{load_manifest, write_project, ProjectFiles};
use crate::runtime::PackageManager;
use crate::session::{ask, prepare, testing::ScriptedPrompter, Setup};
use serde_json::Value;
use std::path::Path;

fn files() -> ProjectFiles<'static> {
    ProjectFiles {
        manifest: TestProduct.manifest_file(),
        build_config: TestProduct.build_config_file(),
        starter: TestProduct.starter_file(),
        banner: generated_banner(TestProduct.name(), "0.1.0"),
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn empty_directory_with_default_answers() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = load_manifest(&dir.path().join("package.json")).into_inner();
    let package_manager = PackageManager::detect(dir.path(), "yarn.lock");
    let mut prompter = ScriptedPrompter::new(&["my-app", "src", "", "", ""], &[0, 0], &[false]);

    let answers = ask(&mut prompter, &manifest, package_manager).unwrap();
    let synthesis = synthesize(&manifest, &answers);
    let outcomes = write_project(
        dir.path(),
        &synthesis.manifest,
        &synthesis.build_config,
        &files(),
    )
    .await;

    assert_eq!(outcomes.len(), 3);
    assert!(dir.path().join("src/Demo.res").exists());

    let written = read_json(&dir.path().join("package.json"));
    assert_eq!(written["name"], "my-app");
    assert_eq!(written["scripts"]["res:build"], "rescript");
    assert_eq!(written["scripts"]["res:watch"], "rescript build -w");
    assert_eq!(written["scripts"]["res:clean"], "rescript clean");

    let config = read_json(&dir.path().join("bsconfig.json"));
    assert_eq!(config["sources"], serde_json::json!([{ "dir": "src", "subdirs": true }]));
    assert_eq!(config["package-specs"]["module"], "commonjs");
    assert_eq!(config["package-specs"]["suffix"], ".bs.js");

    assert_eq!(
        run_instruction(package_manager, &synthesis.dependencies, &answers.watch_command),
        "npm install rescript && npm run res:watch"
    );
}

#[tokio::test]
async fn existing_project_keeps_name_and_scripts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("package.json"),
        r#"{"name":"kept","version":"2.0.0","scripts":{"test":"jest"},"devDependencies":{"rescript":"^11.0.0"}}"#,
    )
    .unwrap();
    std::fs::create_dir(dir.path().join("src")).unwrap();
    std::fs::write(dir.path().join("yarn.lock"), "").unwrap();

    let manifest = load_manifest(&dir.path().join("package.json")).into_inner();
    let package_manager = PackageManager::detect(dir.path(), "yarn.lock");
    let mut prompter =
        ScriptedPrompter::new(&["other-name", "", "test", "build", "", ""], &[1, 2], &[false]);

    let answers = ask(&mut prompter, &manifest, package_manager).unwrap();
    assert_eq!(answers.module_format, ModuleFormat::Es6);
    assert_eq!(answers.file_extension, FileExtension::Mjs);

    let synthesis = synthesize(&manifest, &answers);
    let outcomes = write_project(
        dir.path(),
        &synthesis.manifest,
        &synthesis.build_config,
        &files(),
    )
    .await;
    assert_eq!(outcomes.len(), 2);

    let reloaded = load_manifest(&dir.path().join("package.json")).into_inner();
    assert_eq!(reloaded.name, "kept");
    assert_eq!(reloaded.scripts, synthesis.manifest.scripts);
    assert_eq!(reloaded.scripts["test"], "jest");
    assert_eq!(reloaded.scripts["build"], "rescript");
    assert_eq!(reloaded.field("version"), Some(&Value::from("2.0.0")));

    assert!(synthesis.dependencies.is_empty());
    assert_eq!(
        run_instruction(package_manager, &synthesis.dependencies, &answers.watch_command),
        "yarn res:watch"
    );
}

#[tokio::test]
async fn react_support_lists_ui_packages() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = load_manifest(&dir.path().join("package.json")).into_inner();
    let mut prompter = ScriptedPrompter::new(&["web-app", "", "", "", ""], &[], &[true]);

    let answers = ask(&mut prompter, &manifest, PackageManager::Npm).unwrap();
    let synthesis = synthesize(&manifest, &answers);

    assert_eq!(
        synthesis.dependencies,
        vec!["rescript", "@rescript/react", "react", "react-dom"]
    );
    assert_eq!(synthesis.build_config.bs_dependencies, vec!["@rescript/react"]);

    let instruction = run_instruction(
        PackageManager::Npm,
        &synthesis.dependencies,
        &answers.watch_command,
    );
    assert!(instruction.starts_with("npm install rescript @rescript/react react react-dom && "));
}

#[test]
fn existing_build_config_stops_before_any_question() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bsconfig.json"), "{}").unwrap();
    let mut prompter = ScriptedPrompter::new(&["my-app", "", "", "", ""], &[], &[true]);

    let setup = prepare(&mut prompter, &TestProduct, dir.path()).unwrap();

    assert_eq!(setup, Setup::AlreadyConfigured);
    assert!(prompter.asked.is_empty());
    assert!(!dir.path().join("package.json").exists());
    assert_eq!(std::fs::read_to_string(dir.path().join("bsconfig.json")).unwrap(), "{}");
}

#[test]
fn prepare_loads_manifest_and_detects_yarn() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("package.json"), r#"{"name":"kept"}"#).unwrap();
    std::fs::write(dir.path().join("yarn.lock"), "").unwrap();
    let mut prompter = ScriptedPrompter::new(&["", "", "", "", ""], &[], &[]);

    let Setup::Ready(prepared) = prepare(&mut prompter, &TestProduct, dir.path()).unwrap() else {
        panic!("expected the questions to be asked");
    };

    assert_eq!(prepared.manifest.name, "kept");
    assert_eq!(prepared.package_manager, PackageManager::Yarn);
    assert_eq!(prepared.answers.name, "kept");
    assert_eq!(prompter.asked.len(), 8);
}
