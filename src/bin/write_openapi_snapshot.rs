// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use shelf_core::config::AppConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = AppConfig::openapi_snapshot_path_from_env();
    shelf_core::presentation::http::openapi::write_openapi_snapshot(&output_path)?;
    println!("OpenAPI snapshot written to {}", output_path.display());
    Ok(())
}
