use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an output file: inputs and the transform chain.
pub struct Payload {
    pub params: Value,
    pub ops: Vec<String>,
}

impl Payload {
    pub fn new(params: Value, ops: Vec<String>) -> Self {
        Self { params, ops }
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    engine_version: &'static str,
    callsite: Callsite,
    ops: &'a [String],
    params: &'a Value,
    outputs: Vec<String>,
}

/// Write `<stem>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: &Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let callsite = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        engine_version: holefit::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        ops: &payload.ops,
        params: &payload.params,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("solution"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from `GIT_COMMIT` (build or run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_replaces_extension() {
        let derived = provenance_path(Path::new("/tmp/out/042.json"));
        assert_eq!(derived, Path::new("/tmp/out/042.provenance.json"));
    }

    #[test]
    fn sidecar_records_ops_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("sol.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new(
            json!({"problem": "p.json"}),
            vec!["translate=1,2".into(), "round".into()],
        );
        let path = write_sidecar(&artifact, &payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["ops"][1], "round");
        assert_eq!(parsed["params"]["problem"], "p.json");
        assert_eq!(parsed["engine_version"], holefit::VERSION);
    }
}
