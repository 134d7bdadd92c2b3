/// Configuration for the two inference providers.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the sentiment classifier service (TEI-style `/predict`).
    pub classifier_url: String,
    /// Base URL of the embedding service (TEI-style `/embed`).
    pub embedder_url: String,
}

impl ProviderConfig {
    /// Build config from environment variables.
    ///
    /// Returns an error string listing any missing variables.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any required env var is not set.
    pub fn from_env() -> Result<Self, String> {
        let mut missing = Vec::new();

        let classifier_url = std::env::var("REVDEX_CLASSIFIER_URL").ok();
        let embedder_url = std::env::var("REVDEX_EMBEDDER_URL").ok();

        if classifier_url.is_none() {
            missing.push("REVDEX_CLASSIFIER_URL");
        }
        if embedder_url.is_none() {
            missing.push("REVDEX_EMBEDDER_URL");
        }

        if !missing.is_empty() {
            return Err(format!("missing revdex env vars: {}", missing.join(", ")));
        }

        Ok(Self {
            classifier_url: classifier_url.unwrap_or_default(),
            embedder_url: embedder_url.unwrap_or_default(),
        })
    }
}
