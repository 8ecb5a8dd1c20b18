use crate::parse_or;

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            access_token_expiry: 3600,
        }
    }
}

impl JwtConfig {
    /// Reads `JWT_SECRET` and `JWT_ACCESS_EXPIRY`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            secret: lookup("JWT_SECRET").unwrap_or_else(|| DEFAULT_SECRET.to_string()),
            access_token_expiry: parse_or(&lookup, "JWT_ACCESS_EXPIRY", 3600), // 1 hour
        }
    }

    /// Whether the secret is still the shipped placeholder.
    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}
