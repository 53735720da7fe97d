// src/commands/maps_keys.rs

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::defaults::Defaults;
use crate::env_file::{load_env, require_value};
use crate::inject::replace_placeholder;
use crate::util::{key_preview, write_atomic};

pub fn run(env_path: &Path, manifest_path: &Path, plist_path: &Path) -> Result<()> {
    let vars = load_env(env_path)?;
    let api_key = require_value(&vars, Defaults::MAPS_API_KEY_VAR, Defaults::MAPS_KEY_SENTINEL)?;
    println!(
        "Loaded {}: {}",
        Defaults::MAPS_API_KEY_VAR,
        key_preview(&api_key)
    );

    // Both targets are always attempted; either failing fails the run.
    let mut failed = false;
    for path in [manifest_path, plist_path] {
        if let Err(e) = inject_key(path, &api_key) {
            println!("✗ {e:#}");
            failed = true;
        }
    }

    if failed {
        bail!("could not update all platform configuration files");
    }
    println!("✓ Google Maps API key set for Android and iOS");
    Ok(())
}

fn inject_key(path: &Path, api_key: &str) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    match replace_placeholder(&content, Defaults::MAPS_KEY_PLACEHOLDER, api_key) {
        Some(updated) => {
            write_atomic(path, &updated)?;
            println!("✓ {} updated with the API key", path.display());
        }
        None => {
            // Rerun after a successful injection: the placeholder is gone.
            println!("✓ {} already carries a key, left unchanged", path.display());
        }
    }
    Ok(())
}
