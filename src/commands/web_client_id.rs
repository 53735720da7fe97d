// src/commands/web_client_id.rs

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::defaults::Defaults;
use crate::env_file::{load_env, require_value};
use crate::inject::replace_placeholder;
use crate::util::write_atomic;

pub fn run(env_path: &Path, index_path: &Path) -> Result<()> {
    let vars = load_env(env_path)?;
    // An ID left at the placeholder string is as unusable as no ID.
    let client_id = require_value(
        &vars,
        Defaults::WEB_CLIENT_ID_VAR,
        Defaults::WEB_CLIENT_ID_PLACEHOLDER,
    )?;

    let content = fs::read_to_string(index_path)
        .with_context(|| format!("reading {}", index_path.display()))?;

    let Some(updated) = replace_placeholder(&content, Defaults::WEB_CLIENT_ID_PLACEHOLDER, &client_id)
    else {
        bail!(
            "{} does not contain {}, nothing to inject",
            index_path.display(),
            Defaults::WEB_CLIENT_ID_PLACEHOLDER
        );
    };

    write_atomic(index_path, &updated)?;
    println!(
        "✓ {} injected into {}",
        Defaults::WEB_CLIENT_ID_VAR,
        index_path.display()
    );
    Ok(())
}
