use crate::model::overlay::RelabelPolicy;
use crate::server::error::config::ConfigError;

static DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8787";
static DEFAULT_DETECTION_API_URL: &str = "https://generativelanguage.googleapis.com";
static DEFAULT_DETECTION_MODEL: &str = "gemini-2.0-flash";

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub detection_api_url: String,
    pub detection_api_key: String,
    pub detection_model: String,
    /// URL prefix under which uploaded capture images are served.
    pub bucket_prefix: String,
    pub overlay_relabel_policy: RelabelPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            listen_addr: optional("LISTEN_ADDR", DEFAULT_LISTEN_ADDR),
            detection_api_url: optional("DETECTION_API_URL", DEFAULT_DETECTION_API_URL),
            detection_api_key: require("DETECTION_API_KEY")?,
            detection_model: optional("DETECTION_MODEL", DEFAULT_DETECTION_MODEL),
            bucket_prefix: require("BUCKET_PREFIX")?,
            overlay_relabel_policy: relabel_policy_from_env()?,
        })
    }
}

fn require(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

fn relabel_policy_from_env() -> Result<RelabelPolicy, ConfigError> {
    match std::env::var("OVERLAY_RELABEL_POLICY") {
        Err(_) => Ok(RelabelPolicy::default()),
        Ok(value) => match value.as_str() {
            "exclude" => Ok(RelabelPolicy::Exclude),
            "show" => Ok(RelabelPolicy::Show),
            _ => Err(ConfigError::InvalidEnvValue {
                var: "OVERLAY_RELABEL_POLICY".to_string(),
                reason: format!("expected \"exclude\" or \"show\", got {value:?}"),
            }),
        },
    }
}
