//! Configuration module
//!
//! Environment-driven configuration for the API and storage backends.
//! Values come from the process environment (a `.env` file is loaded when
//! present); the bucket name and backend selection are deployment
//! configuration, never hardcoded.

use std::env;

use crate::storage_types::StorageBackend;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_KEY_PREFIX: &str = "responses";
const DEFAULT_STATIC_DIR: &str = "public";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, etc.)
    pub aws_region: Option<String>,
    pub local_storage_path: Option<String>,
    // Submission storage layout
    pub response_key_prefix: String,
    // Static asset directory for the form page
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let storage_backend = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "s3".to_string())
            .parse::<StorageBackend>()?;

        Ok(Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            storage_backend,
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION").ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            aws_region: env::var("AWS_REGION").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            response_key_prefix: env::var("RESPONSE_KEY_PREFIX")
                .unwrap_or_else(|_| DEFAULT_KEY_PREFIX.to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Fail fast on misconfiguration instead of discovering it per-request.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3_bucket.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_BUCKET must be set when using the s3 storage backend"
                    ));
                }
                if self.s3_region.is_none() && self.aws_region.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_REGION or AWS_REGION must be set when using the s3 storage backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set when using the local storage backend"
                    ));
                }
            }
            StorageBackend::Memory => {}
        }

        Ok(())
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage_backend
    }

    pub fn s3_bucket(&self) -> Option<&str> {
        self.s3_bucket.as_deref()
    }

    pub fn s3_region(&self) -> Option<&str> {
        self.s3_region.as_deref()
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.s3_endpoint.as_deref()
    }

    pub fn aws_region(&self) -> Option<&str> {
        self.aws_region.as_deref()
    }

    pub fn local_storage_path(&self) -> Option<&str> {
        self.local_storage_path.as_deref()
    }

    pub fn response_key_prefix(&self) -> &str {
        &self.response_key_prefix
    }

    pub fn static_dir(&self) -> &str {
        &self.static_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server_port: 3000,
            environment: "development".to_string(),
            cors_origins: vec!["*".to_string()],
            storage_backend: StorageBackend::Memory,
            s3_bucket: None,
            s3_region: None,
            s3_endpoint: None,
            aws_region: None,
            local_storage_path: None,
            response_key_prefix: "responses".to_string(),
            static_dir: "public".to_string(),
        }
    }

    #[test]
    fn s3_backend_requires_bucket_and_region() {
        let mut config = base_config();
        config.storage_backend = StorageBackend::S3;
        assert!(config.validate().is_err());

        config.s3_bucket = Some("forms".to_string());
        assert!(config.validate().is_err());

        config.aws_region = Some("eu-west-1".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn production_rejects_cors_wildcard() {
        let mut config = base_config();
        config.environment = "production".to_string();
        assert!(config.validate().is_err());

        config.cors_origins = vec!["https://forms.example.com".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn memory_backend_needs_no_extra_settings() {
        assert!(base_config().validate().is_ok());
    }
}
