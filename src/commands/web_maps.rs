// src/commands/web_maps.rs

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::defaults::Defaults;
use crate::env_file::{load_env, require_value};
use crate::inject::{upsert_maps_script, MapsScript};
use crate::util::{key_preview, write_atomic};

pub fn run(env_path: &Path, index_path: &Path) -> Result<()> {
    let vars = load_env(env_path)?;
    let api_key = require_value(&vars, Defaults::MAPS_API_KEY_VAR, Defaults::MAPS_KEY_SENTINEL)?;
    println!(
        "Loaded {}: {}",
        Defaults::MAPS_API_KEY_VAR,
        key_preview(&api_key)
    );

    let content = fs::read_to_string(index_path)
        .with_context(|| format!("reading {}", index_path.display()))?;

    let (updated, action) = upsert_maps_script(&content, &api_key)
        .with_context(|| format!("updating {}", index_path.display()))?;
    write_atomic(index_path, &updated)?;

    match action {
        MapsScript::Updated => {
            println!("✓ Existing Google Maps script refreshed with the new API key")
        }
        MapsScript::Inserted => {
            println!("✓ Google Maps script added to {}", index_path.display())
        }
    }
    Ok(())
}
