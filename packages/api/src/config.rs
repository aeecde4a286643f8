/// Where the remote REST API lives.
///
/// A wasm client cannot read config files at runtime, so the base URL is
/// baked in at compile time: set `LIFTDESK_API_BASE` in the build
/// environment to point a bundle at another deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin plus path prefix, no trailing slash: "https://host/api".
    pub base_url: String,
}

const DEFAULT_BASE: &str = "https://localhost:5001/api";

impl ApiConfig {
    pub fn from_env() -> Self {
        let base = option_env!("LIFTDESK_API_BASE").unwrap_or(DEFAULT_BASE);
        Self {
            base_url: base.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
