#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Two players on a river; P0 holds the ace-high straight, P1 the queen-high.
pub const BROADWAY: &str = r#"{
    "street": "river",
    "pot": 200,
    "board": ["Qh", "Jh", "Th", "9s", "8c"],
    "players": [
        { "status": "active", "hole": ["Ah", "Kd"] },
        { "status": "active", "hole": ["2h", "3d"] }
    ]
}"#;

/// Both players play the same king-high hand for an odd pot; button on P0.
pub const TIED_ODD_POT: &str = r#"{
    "street": "river",
    "pot": 101,
    "button": 0,
    "board": ["2c", "7d", "9h", "Js", "Kc"],
    "players": [
        { "status": "active", "hole": ["3h", "4h"] },
        { "status": "active", "hole": ["3d", "4s"] }
    ]
}"#;

/// P0 folded after 30, P1 is all-in for 50 with aces, P2 put in 100 with queens.
pub const SIDE_POTS: &str = r#"{
    "street": "river",
    "pot": 180,
    "board": ["2c", "7d", "9h", "Js", "Kc"],
    "players": [
        { "status": "folded", "contribution": 30 },
        { "status": "all_in", "hole": ["Ac", "Ad"], "contribution": 50 },
        { "status": "active", "hole": ["Qs", "Qd"], "contribution": 100 }
    ]
}"#;

pub const FOLD_OUT: &str =
    r#"{"street":"preflop","pot":100,"players":[{"status":"active"},{"status":"folded"}]}"#;

/// Scratch directory for table files and hand histories.
#[derive(Debug)]
pub struct TableDir {
    dir: TempDir,
}

impl TableDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `content` to `name` and return the path as a CLI argument.
    pub fn write(&self, name: &str, content: &str) -> String {
        let path = self.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write table");
        path.to_string_lossy().into_owned()
    }

    pub fn arg(&self, name: &str) -> String {
        self.join(name).to_string_lossy().into_owned()
    }
}
