//! TypeScript compiler configuration (`tsconfig.json`)
//!
//! The generated config is a fixed canonical object. When a `tsconfig.json`
//! already exists (for example one written by `tsc --init`), its compiler
//! options are kept underneath the canonical ones: canonical keys always win,
//! keys tsgen does not manage survive unchanged. `include` and `exclude` are
//! never merged.
//!
//! Existing files are JSON with comments: `//` and `/* */` comments and
//! trailing commas are removed before parsing. A file that still fails to
//! parse is replaced by the canonical config and reported as a fallback.

use crate::error::Result;
use serde_json::{json, Map, Value};

/// File name of the compiler config
pub const TSCONFIG_FILE: &str = "tsconfig.json";

/// Compiler options tsgen enforces
pub fn canonical_compiler_options() -> Map<String, Value> {
    let mut options = Map::new();
    options.insert("module".into(), json!("NodeNext"));
    options.insert("target".into(), json!("ES2022"));
    options.insert("outDir".into(), json!("dist"));
    options.insert("rootDir".into(), json!("src"));
    options.insert("strict".into(), json!(true));
    options.insert("esModuleInterop".into(), json!(true));
    options.insert("moduleResolution".into(), json!("NodeNext"));
    options
}

/// The complete canonical `tsconfig.json`
pub fn canonical_config() -> Value {
    build_config(canonical_compiler_options())
}

fn build_config(compiler_options: Map<String, Value>) -> Value {
    json!({
        "compilerOptions": compiler_options,
        "include": ["src/**/*"],
        "exclude": ["node_modules", "dist"],
    })
}

/// Result of merging an existing config with the canonical one
#[derive(Debug, Clone, PartialEq)]
pub struct MergedConfig {
    /// Config to write
    pub config: Value,
    /// Why the existing file was ignored, if it was
    pub fallback_reason: Option<String>,
}

/// Merge the text of an existing `tsconfig.json` (if any) with the canonical config
pub fn merge_compiler_config(existing: Option<&str>) -> MergedConfig {
    let Some(text) = existing else {
        return MergedConfig {
            config: canonical_config(),
            fallback_reason: None,
        };
    };

    match existing_compiler_options(text) {
        Ok(mut options) => {
            for (key, value) in canonical_compiler_options() {
                options.insert(key, value);
            }
            MergedConfig {
                config: build_config(options),
                fallback_reason: None,
            }
        }
        Err(reason) => MergedConfig {
            config: canonical_config(),
            fallback_reason: Some(reason),
        },
    }
}

fn existing_compiler_options(text: &str) -> std::result::Result<Map<String, Value>, String> {
    let parsed = parse_jsonc(text).map_err(|e| e.to_string())?;
    let Value::Object(mut root) = parsed else {
        return Err("top-level value is not an object".to_string());
    };

    match root.remove("compilerOptions") {
        Some(Value::Object(options)) => Ok(options),
        None | Some(Value::Null) => Ok(Map::new()),
        Some(_) => Err("compilerOptions is not an object".to_string()),
    }
}

/// Parse JSON that may contain comments and trailing commas
pub fn parse_jsonc(text: &str) -> Result<Value> {
    let cleaned = strip_trailing_commas(&strip_comments(text));
    Ok(serde_json::from_str(&cleaned)?)
}

/// Remove `//` and `/* */` comments outside string literals
///
/// Line comments keep their terminating newline so line numbers in parse
/// errors still match the original text.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        let next = chars.peek().copied();
        match (c, next) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                    }
                    if prev == '*' && skipped == '/' {
                        break;
                    }
                    prev = skipped;
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Remove commas that directly precede `}` or `]`, ignoring whitespace
pub fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if in_string {
            out.push(c);
            if c == '\\' {
                if let Some(&escaped) = chars.get(i + 1) {
                    out.push(escaped);
                    i += 1;
                }
            } else if c == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if c == '"' {
            in_string = true;
        } else if c == ',' {
            let next = chars[i + 1..].iter().find(|ch| !ch.is_whitespace()).copied();
            if matches!(next, Some('}') | Some(']')) {
                i += 1;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TSC_INIT_STYLE: &str = r#"{
  // Visit https://aka.ms/tsconfig to read more about this file
  "compilerOptions": {
    /* Language and Environment */
    "target": "es2016",                                  /* Set the JavaScript language version. */
    "module": "commonjs",                                /* Specify what module code is generated. */
    // "rootDir": "./",
    "esModuleInterop": true,
    "forceConsistentCasingInFileNames": true,
    "skipLibCheck": true,
  },
}
"#;

    #[test]
    fn test_no_existing_file_gives_canonical() {
        let merged = merge_compiler_config(None);
        assert_eq!(merged.config, canonical_config());
        assert!(merged.fallback_reason.is_none());
    }

    #[test]
    fn test_canonical_keys_always_win() {
        let merged = merge_compiler_config(Some(TSC_INIT_STYLE));
        assert!(merged.fallback_reason.is_none());

        let options = merged.config["compilerOptions"].as_object().unwrap();
        for (key, value) in canonical_compiler_options() {
            assert_eq!(options.get(&key), Some(&value), "key {}", key);
        }
        assert_eq!(options["target"], "ES2022");
        assert_eq!(options["module"], "NodeNext");
    }

    #[test]
    fn test_unmanaged_keys_survive() {
        let merged = merge_compiler_config(Some(TSC_INIT_STYLE));
        let options = merged.config["compilerOptions"].as_object().unwrap();
        assert_eq!(options["skipLibCheck"], true);
        assert_eq!(options["forceConsistentCasingInFileNames"], true);
    }

    #[test]
    fn test_include_exclude_are_canonical() {
        let existing = r#"{
            "compilerOptions": { "noEmit": true },
            "include": ["lib/**/*"],
            "exclude": [],
            "files": ["index.ts"]
        }"#;
        let merged = merge_compiler_config(Some(existing));
        assert_eq!(merged.config["include"], json!(["src/**/*"]));
        assert_eq!(merged.config["exclude"], json!(["node_modules", "dist"]));
        assert!(merged.config.get("files").is_none());
        assert_eq!(merged.config["compilerOptions"]["noEmit"], true);
    }

    #[test]
    fn test_malformed_file_falls_back_to_canonical() {
        let truncated = r#"{ "compilerOptions": { "strict": false, "#;
        let merged = merge_compiler_config(Some(truncated));
        assert_eq!(merged.config, canonical_config());
        assert!(merged.fallback_reason.is_some());
    }

    #[test]
    fn test_non_object_falls_back_to_canonical() {
        let merged = merge_compiler_config(Some("[1, 2, 3]"));
        assert_eq!(merged.config, canonical_config());
        assert!(merged.fallback_reason.is_some());

        let merged = merge_compiler_config(Some(r#"{"compilerOptions": "strict"}"#));
        assert_eq!(merged.config, canonical_config());
        assert!(merged.fallback_reason.is_some());
    }

    #[test]
    fn test_merge_is_stable_on_second_pass() {
        let first = merge_compiler_config(Some(TSC_INIT_STYLE));
        let text = serde_json::to_string_pretty(&first.config).unwrap();
        let second = merge_compiler_config(Some(&text));
        assert_eq!(first.config, second.config);
    }

    #[test]
    fn test_strip_comments_keeps_string_contents() {
        let text = r#"{"url": "https://example.com/*path*/", "a": 1 // note
}"#;
        let value = parse_jsonc(text).unwrap();
        assert_eq!(value["url"], "https://example.com/*path*/");
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_strip_comments_handles_escaped_quotes() {
        let text = r#"{"q": "say \"//hi\"" /* gone */}"#;
        let value = parse_jsonc(text).unwrap();
        assert_eq!(value["q"], "say \"//hi\"");
    }

    #[test]
    fn test_strip_trailing_commas() {
        assert_eq!(strip_trailing_commas("[1, 2, ]"), "[1, 2 ]");
        assert_eq!(strip_trailing_commas("{\"a\": 1,\n}"), "{\"a\": 1\n}");
        assert_eq!(strip_trailing_commas("{\"a\": \",}\"}"), "{\"a\": \",}\"}");
    }

    #[test]
    fn test_block_comment_preserves_line_count() {
        let stripped = strip_comments("a/* one\ntwo */b");
        assert_eq!(stripped, "a\nb");
    }
}
