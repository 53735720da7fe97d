// src/env_file.rs

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Parse a flat key=value file. Blank lines, `#` comments and lines
/// without `=` are skipped; keys and values are trimmed.
pub fn parse_env(contents: &str) -> HashMap<String, String> {
    let mut out = HashMap::new();

    for line in contents.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() { continue; }
        if trimmed.starts_with('#') { continue; }

        let Some(eq) = trimmed.find('=') else { continue; };
        let (k, vraw) = trimmed.split_at(eq);
        out.insert(k.trim().to_string(), vraw[1..].trim().to_string());
    }

    out
}

pub fn load_env(path: &Path) -> Result<HashMap<String, String>> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!(
            "missing configuration file {} (create it with e.g. GOOGLE_MAPS_API_KEY=your_api_key_here)",
            path.display()
        )
    })?;
    Ok(parse_env(&contents))
}

/// Look up `name`, rejecting values that are empty or still the shipped
/// sample value.
pub fn require_value(vars: &HashMap<String, String>, name: &str, sentinel: &str) -> Result<String> {
    let Some(value) = vars.get(name) else {
        bail!("{name} not found in the configuration file");
    };
    if value.is_empty() || value == sentinel {
        bail!("{name} is not set (empty or left at \"{sentinel}\")");
    }
    Ok(value.clone())
}
