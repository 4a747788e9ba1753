//! package.json amendments applied after `npm init`

use crate::error::ScaffoldError;
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

/// Module system declared in the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleType {
    Module,
    CommonJs,
}

impl ModuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleType::Module => "module",
            ModuleType::CommonJs => "commonjs",
        }
    }
}

/// Fields a template forces onto the generated package.json
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEdits {
    pub module_type: ModuleType,

    /// Value for `main`
    pub main: &'static str,

    /// Replacement for the whole `scripts` map; `None` keeps npm's defaults
    pub scripts: Option<&'static [(&'static str, &'static str)]>,
}

/// Build/dev/start scripts shared by every TypeScript template
pub const TYPESCRIPT_SCRIPTS: &[(&str, &str)] = &[
    ("build", "rimraf ./dist/ && tsc"),
    ("predev", "npm run build"),
    ("dev", "tsc -w & nodemon ./dist/index.js"),
    ("prestart", "npm run build"),
    ("start", "node ./dist/index.js"),
];

impl ManifestEdits {
    /// Apply the edits to a parsed manifest.
    ///
    /// Unrelated keys keep their value and position; applying twice is a no-op.
    pub fn apply(&self, manifest: &mut Map<String, Value>) {
        if let Some(scripts) = self.scripts {
            let scripts: Map<String, Value> = scripts
                .iter()
                .map(|(name, command)| (name.to_string(), Value::from(*command)))
                .collect();
            manifest.insert("scripts".to_string(), Value::Object(scripts));
        }

        manifest.insert("type".to_string(), Value::from(self.module_type.as_str()));
        manifest.insert("main".to_string(), Value::from(self.main));
    }
}

/// Parse manifest text into a JSON object
pub fn parse_manifest(path: &Path, content: &str) -> Result<Map<String, Value>, ScaffoldError> {
    let value: Value = serde_json::from_str(content).map_err(|e| ScaffoldError::ManifestParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ScaffoldError::ManifestParse {
            path: path.to_path_buf(),
            reason: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
    }
}

/// Read, amend and write back the manifest in place
pub async fn rewrite_manifest(path: &Path, edits: &ManifestEdits) -> Result<(), ScaffoldError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| ScaffoldError::fs("read", path, e))?;

    let mut manifest = parse_manifest(path, &content)?;
    edits.apply(&mut manifest);

    let mut rendered =
        serde_json::to_string_pretty(&manifest).map_err(|e| ScaffoldError::ManifestParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    rendered.push('\n');

    fs::write(path, rendered)
        .await
        .map_err(|e| ScaffoldError::fs("write", path, e))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
