//! The ordered question sequence and its answers
//!
//! Questions are asked through a [`Prompter`], one at a time and always in the
//! same order. Validators run against trimmed input; a rejected answer is
//! asked again until it passes.

use crate::config::{FileExtension, ModuleFormat};
use crate::product::ProductConfig;
use crate::project::manifest::ProjectManifest;
use crate::project::{is_configured, load_manifest, validate};
use crate::runtime::PackageManager;
use anyhow::Result;
use std::collections::BTreeSet;
use std::path::Path;

/// Validator for a text answer; `Err` carries the message shown to the user
pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// Free-text question
pub struct TextQuestion {
    pub prompt: String,
    /// Used when the user submits an empty answer
    pub default: Option<String>,
    /// Short hint shown next to the input
    pub hint: Option<String>,
    pub validator: Validator,
}

impl TextQuestion {
    pub fn new(prompt: impl Into<String>, validator: Validator) -> Self {
        Self {
            prompt: prompt.into(),
            default: None,
            hint: None,
            validator,
        }
    }

    /// Set the default; an empty default means the answer is mandatory
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        let default = default.into();
        self.default = (!default.is_empty()).then_some(default);
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Apply the default to empty input, trim, then validate
    pub fn check(&self, input: &str) -> Result<String, String> {
        let trimmed = input.trim();
        let answer = match (&self.default, trimmed.is_empty()) {
            (Some(default), true) => default.trim(),
            _ => trimmed,
        };
        (self.validator)(answer)?;
        Ok(answer.to_string())
    }
}

/// One selectable option of a single-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub hint: &'static str,
}

/// Interactive prompt backend
///
/// Implementations must only return text answers that passed
/// [`TextQuestion::check`], re-asking on rejection.
pub trait Prompter {
    /// Ask a free-text question and return the trimmed, validated answer
    fn text(&mut self, question: TextQuestion) -> Result<String>;

    /// Ask a single-choice question and return the index of the chosen item
    fn choice(&mut self, prompt: &str, choices: &[Choice], initial: usize) -> Result<usize>;

    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str, initial: bool) -> Result<bool>;
}

/// Validated answers of one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptAnswers {
    pub name: String,
    pub source_dir: String,
    pub module_format: ModuleFormat,
    pub file_extension: FileExtension,
    pub add_react: bool,
    pub build_command: String,
    pub watch_command: String,
    pub clean_command: String,
}

const MODULE_FORMAT_CHOICES: [Choice; 3] = [
    Choice {
        label: "commonjs",
        hint: "require/module.exports",
    },
    Choice {
        label: "es6",
        hint: "import/export",
    },
    Choice {
        label: "es6-global",
        hint: "import/export with global paths",
    },
];

const FILE_EXTENSION_CHOICES: [Choice; 4] = [
    Choice {
        label: ".bs.js",
        hint: "",
    },
    Choice {
        label: ".js",
        hint: "",
    },
    Choice {
        label: ".mjs",
        hint: "ES module",
    },
    Choice {
        label: ".cjs",
        hint: "CommonJS module",
    },
];

/// Default script names, in the order they are asked
pub const DEFAULT_BUILD_COMMAND: &str = "res:build";
pub const DEFAULT_WATCH_COMMAND: &str = "res:watch";
pub const DEFAULT_CLEAN_COMMAND: &str = "res:clean";

/// Ask every question in order
pub fn ask<P: Prompter>(
    prompter: &mut P,
    manifest: &ProjectManifest,
    package_manager: PackageManager,
) -> Result<PromptAnswers> {
    let name = prompter.text(
        TextQuestion::new(
            "Project name",
            Box::new(|input: &str| validate::validate_package_name(input)),
        )
        .default_value(manifest.name.clone()),
    )?;

    let source_dir = prompter.text(
        TextQuestion::new(
            "Source directory",
            Box::new(|input: &str| validate::validate_source_dir(input)),
        )
        .default_value("src"),
    )?;

    let module_format =
        ModuleFormat::ALL[prompter.choice("Module format", &MODULE_FORMAT_CHOICES, 0)?];
    let file_extension =
        FileExtension::ALL[prompter.choice("File extension", &FILE_EXTENSION_CHOICES, 0)?];

    let add_react = prompter.confirm("Add React support?", false)?;

    // Names chosen earlier in the session are taken as well
    let mut taken: BTreeSet<String> = manifest.scripts.keys().cloned().collect();

    let build_command = ask_script_name(
        prompter,
        "Script name for building",
        DEFAULT_BUILD_COMMAND,
        &mut taken,
        package_manager,
    )?;
    let watch_command = ask_script_name(
        prompter,
        "Script name for watching",
        DEFAULT_WATCH_COMMAND,
        &mut taken,
        package_manager,
    )?;
    let clean_command = ask_script_name(
        prompter,
        "Script name for cleaning",
        DEFAULT_CLEAN_COMMAND,
        &mut taken,
        package_manager,
    )?;

    Ok(PromptAnswers {
        name,
        source_dir,
        module_format,
        file_extension,
        add_react,
        build_command,
        watch_command,
        clean_command,
    })
}

fn ask_script_name<P: Prompter>(
    prompter: &mut P,
    prompt: &str,
    default: &str,
    taken: &mut BTreeSet<String>,
    package_manager: PackageManager,
) -> Result<String> {
    let default = if taken.contains(default) { "" } else { default };
    let existing = taken.clone();

    let answer = prompter.text(
        TextQuestion::new(
            prompt,
            Box::new(move |input: &str| validate::validate_script_name(&existing, input)),
        )
        .default_value(default)
        .hint(format!("run with `{}`", package_manager.run_command("<name>"))),
    )?;

    taken.insert(answer.clone());
    Ok(answer)
}

/// State of a project directory once every question has been answered
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared {
    pub manifest: ProjectManifest,
    pub package_manager: PackageManager,
    pub answers: PromptAnswers,
}

/// Result of [`prepare`]
#[derive(Debug, Clone, PartialEq)]
pub enum Setup {
    /// The build configuration already exists; nothing was asked
    AlreadyConfigured,
    Ready(Prepared),
}

/// Check the directory, load the manifest, pick the package manager and ask
///
/// An existing build configuration stops the run before the first question.
pub fn prepare<C: ProductConfig, P: Prompter>(
    prompter: &mut P,
    config: &C,
    project_dir: &Path,
) -> Result<Setup> {
    if is_configured(project_dir, config.build_config_file()) {
        return Ok(Setup::AlreadyConfigured);
    }

    let manifest = load_manifest(&project_dir.join(config.manifest_file())).into_inner();
    let package_manager = PackageManager::detect(project_dir, config.alternate_lockfile());
    let answers = ask(prompter, &manifest, package_manager)?;

    Ok(Setup::Ready(Prepared {
        manifest,
        package_manager,
        answers,
    }))
}

/// Ask whether to write the files
pub fn confirm_write<P: Prompter>(prompter: &mut P) -> Result<bool> {
    prompter.confirm("Continue?", true)
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedPrompter;
    use super::*;

    fn manifest_with_scripts(scripts: &[&str]) -> ProjectManifest {
        let mut manifest = ProjectManifest::default();
        for script in scripts {
            manifest.set_script(script, "echo");
        }
        manifest
    }

    #[test]
    fn test_defaults_for_fresh_project() {
        let mut prompter = ScriptedPrompter::new(&["my-app", "", "", "", ""], &[], &[]);

        let answers = ask(&mut prompter, &ProjectManifest::default(), PackageManager::Npm).unwrap();

        assert_eq!(
            answers,
            PromptAnswers {
                name: "my-app".to_string(),
                source_dir: "src".to_string(),
                module_format: ModuleFormat::CommonJs,
                file_extension: FileExtension::BsJs,
                add_react: false,
                build_command: "res:build".to_string(),
                watch_command: "res:watch".to_string(),
                clean_command: "res:clean".to_string(),
            }
        );
        assert!(prompter.rejections.is_empty());
    }

    #[test]
    fn test_questions_asked_in_order() {
        let mut prompter = ScriptedPrompter::new(&["my-app", "", "", "", ""], &[], &[]);
        ask(&mut prompter, &ProjectManifest::default(), PackageManager::Npm).unwrap();

        assert_eq!(
            prompter.asked,
            vec![
                "Project name",
                "Source directory",
                "Module format",
                "File extension",
                "Add React support?",
                "Script name for building",
                "Script name for watching",
                "Script name for cleaning",
            ]
        );
    }

    #[test]
    fn test_answers_are_trimmed() {
        let mut prompter = ScriptedPrompter::new(
            &["  my-app ", " lib ", " b ", " w ", " c "],
            &[1, 2],
            &[true],
        );

        let answers = ask(&mut prompter, &ProjectManifest::default(), PackageManager::Yarn).unwrap();

        assert_eq!(answers.name, "my-app");
        assert_eq!(answers.source_dir, "lib");
        assert_eq!(answers.module_format, ModuleFormat::Es6);
        assert_eq!(answers.file_extension, FileExtension::Mjs);
        assert!(answers.add_react);
        assert_eq!(answers.build_command, "b");
        assert_eq!(answers.watch_command, "w");
        assert_eq!(answers.clean_command, "c");
    }

    #[test]
    fn test_manifest_name_is_default() {
        let mut manifest = ProjectManifest::default();
        manifest.name = "from-manifest".to_string();
        let mut prompter = ScriptedPrompter::new(&["", "", "", "", ""], &[], &[]);

        let answers = ask(&mut prompter, &manifest, PackageManager::Npm).unwrap();
        assert_eq!(answers.name, "from-manifest");
    }

    #[test]
    fn test_invalid_project_name_is_reasked() {
        let mut prompter = ScriptedPrompter::new(&["My App", "my-app", "", "", "", ""], &[], &[]);

        let answers = ask(&mut prompter, &ProjectManifest::default(), PackageManager::Npm).unwrap();

        assert_eq!(answers.name, "my-app");
        assert_eq!(prompter.rejections, vec!["name can no longer contain capital letters"]);
    }

    #[test]
    fn test_colliding_script_name_is_reasked() {
        let manifest = manifest_with_scripts(&["test"]);
        let mut prompter =
            ScriptedPrompter::new(&["my-app", "", "test", "build", "", ""], &[], &[]);

        let answers = ask(&mut prompter, &manifest, PackageManager::Npm).unwrap();

        assert_eq!(answers.build_command, "build");
        assert_eq!(
            prompter.rejections,
            vec!["Script \"test\" already exists, please pick another"]
        );
    }

    #[test]
    fn test_taken_default_becomes_mandatory() {
        let manifest = manifest_with_scripts(&["res:build"]);
        // Empty input has no default to fall back on, so it is rejected
        let mut prompter =
            ScriptedPrompter::new(&["my-app", "", "", "compile", "", ""], &[], &[]);

        let answers = ask(&mut prompter, &manifest, PackageManager::Npm).unwrap();

        assert_eq!(answers.build_command, "compile");
        assert_eq!(prompter.rejections, vec!["Please enter a script name"]);
    }

    #[test]
    fn test_same_name_cannot_be_used_twice() {
        let mut prompter =
            ScriptedPrompter::new(&["my-app", "", "dev", "dev", "watch", ""], &[], &[]);

        let answers = ask(&mut prompter, &ProjectManifest::default(), PackageManager::Npm).unwrap();

        assert_eq!(answers.build_command, "dev");
        assert_eq!(answers.watch_command, "watch");
        assert_eq!(prompter.rejections.len(), 1);
    }

    #[test]
    fn test_script_hints_use_package_manager() {
        let mut prompter = ScriptedPrompter::new(&["my-app", "", "", "", ""], &[], &[]);
        ask(&mut prompter, &ProjectManifest::default(), PackageManager::Yarn).unwrap();

        let yarn_hint = Some("run with `yarn <name>`".to_string());
        assert_eq!(
            prompter.hints,
            vec![None, None, yarn_hint.clone(), yarn_hint.clone(), yarn_hint]
        );

        let mut prompter = ScriptedPrompter::new(&["my-app", "", "", "", ""], &[], &[]);
        ask(&mut prompter, &ProjectManifest::default(), PackageManager::Npm).unwrap();
        assert_eq!(
            prompter.hints[2].as_deref(),
            Some("run with `npm run <name>`")
        );
    }

    #[test]
    fn test_confirm_write_defaults_to_yes() {
        let mut prompter = ScriptedPrompter::default();
        assert!(confirm_write(&mut prompter).unwrap());

        let mut prompter = ScriptedPrompter::new(&[], &[], &[false]);
        assert!(!confirm_write(&mut prompter).unwrap());
    }
}
