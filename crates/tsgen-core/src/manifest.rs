//! Package manifest (`package.json`)
//!
//! npm creates the manifest and marks it as an ES module project; tsgen then
//! adds its run scripts directly to the JSON.

use crate::config::ScaffoldConfig;
use crate::process::Invocation;
use crate::types::InitMode;
use serde_json::{Map, Value};
use tracing::debug;

/// File name of the manifest
pub const PACKAGE_JSON: &str = "package.json";

/// Run scripts written into every manifest
pub const SCRIPTS: [(&str, &str); 3] = [
    ("dev", "nodemon"),
    ("build", "tsc"),
    ("start", "node dist/main.js"),
];

/// `npm init`, non-interactive unless the user asked to answer npm's questions
pub fn init_invocation(mode: InitMode, config: &ScaffoldConfig) -> Invocation {
    match mode {
        InitMode::Default => Invocation::new(&config.tools.package_manager, ["init", "-y"])
            .silent(config.silent.manifest_init),
        // npm needs the terminal to ask its questions
        InitMode::Interactive => {
            Invocation::new(&config.tools.package_manager, ["init"]).silent(false)
        }
    }
}

/// `npm pkg set type=module`
pub fn module_type_invocation(config: &ScaffoldConfig) -> Invocation {
    Invocation::new(&config.tools.package_manager, ["pkg", "set", "type=module"])
        .silent(config.silent.manifest_update)
}

/// Parse manifest text, treating a missing or unusable file as `{}`
pub fn load_manifest(text: Option<&str>) -> Map<String, Value> {
    match text.map(serde_json::from_str::<Value>) {
        Some(Ok(Value::Object(map))) => map,
        Some(_) => {
            debug!("{} is not a JSON object, starting from empty", PACKAGE_JSON);
            Map::new()
        }
        None => Map::new(),
    }
}

/// Set the tsgen run scripts, keeping any others
///
/// Existing `dev`, `build` and `start` entries are replaced.
pub fn inject_scripts(manifest: &mut Map<String, Value>) {
    let scripts = manifest
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    if !scripts.is_object() {
        *scripts = Value::Object(Map::new());
    }

    if let Value::Object(scripts) = scripts {
        for (name, command) in SCRIPTS {
            scripts.insert(name.to_string(), Value::String(command.to_string()));
        }
    }
}
