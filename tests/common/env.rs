//! Test environment builder for isolated iconpack testing.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use super::fixtures::{ICONS_DIR, SVG_BODY};

/// Result of running an iconpack CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory containing `material-1.0/ui/icons`.
pub struct TestEnv {
    pub project_root: TempDir,
}

impl TestEnv {
    /// Project with the default icon directory holding `icons`.
    pub fn with_icons(icons: &[&str]) -> Self {
        let env = Self {
            project_root: tempfile::tempdir().unwrap(),
        };
        std::fs::create_dir_all(env.icons_dir()).unwrap();
        for name in icons {
            env.write_icon(name);
        }
        env
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.project_root.path().join(ICONS_DIR)
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_icon(&self, name: &str) {
        std::fs::write(self.icons_dir().join(name), SVG_BODY).unwrap();
    }

    /// Sorted file names in the icon directory
    pub fn icon_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.icons_dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn manifest(&self) -> String {
        std::fs::read_to_string(self.icons_dir().join("icons.slint")).unwrap()
    }

    /// Run iconpack from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        run_in(self.project_root.path(), args, env_vars)
    }
}

/// Run the iconpack binary in `cwd` with a clean ICONPACK_* environment.
pub fn run_in(cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_iconpack"));
    cmd.current_dir(cwd)
        .args(args)
        .env("TERM", "dumb")
        .env_remove("RUST_LOG")
        .env_remove("ICONPACK_DIR")
        .env_remove("ICONPACK_EXTENSION")
        .env_remove("ICONPACK_MANIFEST")
        .env_remove("ICONPACK_GLOBAL");
    for (key, value) in env_vars {
        cmd.env(key, value);
    }

    let output = cmd.output().unwrap();
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
