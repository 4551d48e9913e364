pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/";
pub const DEFAULT_MEDIA_ORIGIN: &str = "http://localhost:8000";
pub const DEFAULT_AVATAR_SERVICE: &str = "https://ui-avatars.com/api/";

/// Endpoints the client talks to, read from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    /// Origin prefixed to site-relative media paths.
    pub media_origin: String,
    pub avatar_service: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            media_origin: DEFAULT_MEDIA_ORIGIN.into(),
            avatar_service: DEFAULT_AVATAR_SERVICE.into(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        fn str_env(name: &str, default: &str) -> String {
            std::env::var(name).ok().filter(|v| !v.trim().is_empty()).unwrap_or_else(|| default.to_string())
        }
        Self {
            api_base: str_env("RECIPE_API_BASE", DEFAULT_API_BASE),
            media_origin: str_env("RECIPE_MEDIA_ORIGIN", DEFAULT_MEDIA_ORIGIN).trim_end_matches('/').to_string(),
            avatar_service: str_env("RECIPE_AVATAR_SERVICE", DEFAULT_AVATAR_SERVICE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn env_overrides_and_defaults() {
        std::env::set_var("RECIPE_API_BASE", "http://api.test/v2/");
        std::env::set_var("RECIPE_MEDIA_ORIGIN", "http://media.test/");
        std::env::remove_var("RECIPE_AVATAR_SERVICE");
        let cfg = ClientConfig::from_env();
        assert_eq!(cfg.api_base, "http://api.test/v2/");
        assert_eq!(cfg.media_origin, "http://media.test");
        assert_eq!(cfg.avatar_service, DEFAULT_AVATAR_SERVICE);
        std::env::remove_var("RECIPE_API_BASE");
        std::env::remove_var("RECIPE_MEDIA_ORIGIN");
        assert_eq!(ClientConfig::from_env(), ClientConfig::default());
    }
}
