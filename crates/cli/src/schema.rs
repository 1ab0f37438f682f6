use std::path::PathBuf;
use tracing::info;

pub fn run(output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let schema = bindscope_api::forest_schema();
    let json = serde_json::to_string_pretty(&schema)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            info!("Schema written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
