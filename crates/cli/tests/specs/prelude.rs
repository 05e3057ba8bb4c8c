//! Shared helpers for CLI specs.

use assert_cmd::Command;

const ISOLATED_VARS: &[&str] = &["MLWS_IGNORE_CASE", "MLWS_OUTPUT", "MLWS_LOG", "COLOR"];

/// Builder for one `mlws` invocation with a clean environment.
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

pub fn cli() -> CliBuilder {
    CliBuilder { args: Vec::new(), envs: Vec::new() }
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    fn run(self) -> RunAssert {
        let mut cmd = Command::cargo_bin("mlws").unwrap();
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        let output = cmd.args(&self.args).output().unwrap();
        RunAssert {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Run and assert exit code 0.
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Run and assert the given exit code.
    pub fn exits(self, code: i32) -> RunAssert {
        let run = self.run();
        assert_eq!(
            run.code,
            Some(code),
            "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            run.stdout,
            run.stderr
        );
        run
    }
}

/// Captured output of a finished invocation.
pub struct RunAssert {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

impl RunAssert {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}
