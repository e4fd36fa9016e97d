use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { _tmp: tmp, home }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("cifra").expect("binary under test");
        cmd.env("HOME", &self.home);
        cmd
    }

    #[allow(dead_code)]
    pub fn write_config(&self, contents: &str) {
        let dir = self.home.join(".config/cifra");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), contents).expect("write config");
    }

    #[allow(dead_code)]
    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
