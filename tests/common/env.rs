//! Isolated test environment for running the groupsync binary.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use groupsync::Project;
use tempfile::TempDir;

/// Result of running a groupsync command.
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr.
    pub fn output(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// Each instance gets a fresh working directory and a fresh fake home, so
/// user-level configuration on the host machine never leaks into a test.
pub struct TestEnv {
    project_root: TempDir,
    home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let project_root = TempDir::new().expect("failed to create project temp dir");
        let home_dir = TempDir::new().expect("failed to create home temp dir");
        std::fs::create_dir_all(home_dir.path().join(".config"))
            .expect("failed to create config dir");
        Self {
            project_root,
            home_dir,
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run groupsync with the given arguments.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run groupsync with extra environment variables set.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("failed to run groupsync");
        output_to_result(output)
    }

    /// Run groupsync and feed `input` to its stdin.
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn groupsync");
        child
            .stdin
            .as_mut()
            .expect("stdin not captured")
            .write_all(input.as_bytes())
            .expect("failed to write to stdin");
        let output = child
            .wait_with_output()
            .expect("failed to wait for groupsync");
        output_to_result(output)
    }

    fn command(&self, args: &[&str]) -> Command {
        let bin = env!("CARGO_BIN_EXE_groupsync");
        let mut cmd = Command::new(bin);
        cmd.args(args)
            .current_dir(self.project_root.path())
            .env("NO_COLOR", "1")
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"));
        // The host environment must not steer the run under test.
        for var in [
            "GROUPSYNC_TARGETS",
            "GROUPSYNC_GROUP",
            "GROUPSYNC_DIR",
            "GROUPSYNC_FILTER",
            "GROUPSYNC_VERBOSITY",
            "GROUPSYNC_COLOR",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Write a project document into `container` (e.g. "Demo.codeproj").
    pub fn write_project(&self, container: &str, project: &Project) {
        let dir = self.path(container);
        std::fs::create_dir_all(&dir).expect("failed to create project container");
        project
            .save_to(&dir.join("project.json"))
            .expect("failed to write project document");
    }

    /// Reopen a project document previously written into `container`.
    pub fn read_project(&self, container: &str) -> Project {
        Project::open(&self.path(container)).expect("failed to reopen project document")
    }

    /// Create `dir` and fill it with empty files.
    pub fn write_files(&self, dir: &str, names: &[&str]) {
        let dir = self.path(dir);
        std::fs::create_dir_all(&dir).expect("failed to create directory");
        for name in names {
            std::fs::write(dir.join(name), "").expect("failed to write file");
        }
    }

    /// Write a file at a path relative to the working directory.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent directory");
        }
        std::fs::write(&path, content).expect("failed to write file");
    }

    /// Remove a file at a path relative to the working directory.
    pub fn remove_file(&self, relative: &str) {
        std::fs::remove_file(self.path(relative)).expect("failed to remove file");
    }

    /// Write a user-level configuration file into the fake home.
    pub fn write_home_config(&self, content: &str) {
        let dir = self.home_dir.path().join(".config/groupsync");
        std::fs::create_dir_all(&dir).expect("failed to create user config dir");
        std::fs::write(dir.join("config.toml"), content).expect("failed to write user config");
    }

    /// Raw bytes of the project document inside `container`.
    pub fn document_bytes(&self, container: &str) -> Vec<u8> {
        std::fs::read(self.path(container).join("project.json"))
            .expect("failed to read project document")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: std::process::Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
