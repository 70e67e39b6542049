//! Startup configuration validation

use anyhow::Result;
use formdrop_core::Config;

/// Validate configuration before any service is constructed.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    // A missing form asset is not fatal (POST /submit still works), but it
    // turns every GET / into a 500, so call it out at startup.
    let form_asset = std::path::Path::new(config.static_dir()).join("form.html");
    if !form_asset.exists() {
        tracing::warn!(
            path = %form_asset.display(),
            "Form asset not found; GET / will fail until it exists"
        );
    }

    Ok(())
}
