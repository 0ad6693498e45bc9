//! Writes TypeScript declarations for the `/api/...` JSON payloads, for front ends and
//! scripts that consume the assessment server's API.
//!
//! Usage: `generate_api_types [OUTPUT]`. Without `OUTPUT` the declarations go to stdout.

use shared_types::{generate_typescript_definitions, EXPORTED_TYPES};
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut output = generate_typescript_definitions(EXPORTED_TYPES)?;
    output.push('\n');

    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(output_path) => {
            if let Some(parent) = output_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(&output_path, output)?;
            eprintln!("Generated TypeScript types in {}", output_path.display());
        }
        None => print!("{output}"),
    }

    Ok(())
}
