//! Embeds the commit and build time reported by `termprint --version`.
//!
//! Both can be pinned through the environment for reproducible builds.

use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const COMMIT_VAR: &str = "TERMPRINT_BUILD_GIT_HASH";
const TIMESTAMP_VAR: &str = "TERMPRINT_BUILD_TIMESTAMP";

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed={COMMIT_VAR}");
    println!("cargo:rerun-if-env-changed={TIMESTAMP_VAR}");

    let commit = env::var(COMMIT_VAR)
        .ok()
        .or_else(head_commit)
        .unwrap_or_else(|| "unknown".to_string());
    let built = env::var(TIMESTAMP_VAR).unwrap_or_else(|_| unix_timestamp());

    println!("cargo:rustc-env={COMMIT_VAR}={commit}");
    println!("cargo:rustc-env={TIMESTAMP_VAR}={built}");
}

fn head_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())?;
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}

fn unix_timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    format!("unix:{secs}")
}
