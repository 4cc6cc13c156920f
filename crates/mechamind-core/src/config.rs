//! Store location and credential.
//!
//! Both values come from the process environment, optionally seeded from a
//! `.env` file in the working directory. Missing values are fatal.

use std::fmt;

use reqwest::Url;

use crate::error::ConfigError;

/// Environment variable holding the Supabase project URL.
pub const URL_VAR: &str = "SUPABASE_URL";
/// Environment variable holding the Supabase anon key.
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Where the `vehicle_data` table lives and how to authenticate.
#[derive(Clone)]
pub struct StoreConfig {
    url: Url,
    anon_key: String,
}

impl StoreConfig {
    /// Build from explicit values.
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ConfigError::Missing(URL_VAR));
        }
        let anon_key = anon_key.trim();
        if anon_key.is_empty() {
            return Err(ConfigError::Missing(ANON_KEY_VAR));
        }

        let url = Url::parse(url).map_err(|e| ConfigError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: url.to_string(),
                reason: "not a base URL".to_string(),
            });
        }

        Ok(Self {
            url,
            anon_key: anon_key.to_string(),
        })
    }

    /// Load `.env` (if present) and read both variables from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine; the variables may already be exported.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read both variables through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(URL_VAR).ok_or(ConfigError::Missing(URL_VAR))?;
        let anon_key = lookup(ANON_KEY_VAR).ok_or(ConfigError::Missing(ANON_KEY_VAR))?;
        Self::new(&url, &anon_key)
    }

    /// Project base URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// PostgREST endpoint for `table`: `<base>/rest/v1/<table>`.
    pub fn table_url(&self, table: &str) -> Url {
        let mut url = self.url.clone();
        // Url::join would drop the last segment of a base without a trailing slash.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["rest", "v1", table]);
        }
        url
    }
}

// The key is a credential; keep it out of logs.
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url.as_str())
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_reads_both_vars() {
        let cfg = StoreConfig::from_lookup(lookup_from(&[
            (URL_VAR, "https://demo.supabase.co"),
            (ANON_KEY_VAR, "anon-key"),
        ]))
        .unwrap();
        assert_eq!(cfg.url().host_str(), Some("demo.supabase.co"));
        assert_eq!(cfg.anon_key(), "anon-key");
    }

    #[test]
    fn test_missing_url_is_fatal() {
        let err = StoreConfig::from_lookup(lookup_from(&[(ANON_KEY_VAR, "k")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(URL_VAR)));
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let err = StoreConfig::from_lookup(lookup_from(&[(URL_VAR, "https://demo.supabase.co")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ANON_KEY_VAR)));
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let err = StoreConfig::new("  ", "key").unwrap_err();
        assert!(matches!(err, ConfigError::Missing(URL_VAR)));
        let err = StoreConfig::new("https://demo.supabase.co", "").unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ANON_KEY_VAR)));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = StoreConfig::new("not a url", "key").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
        let err = StoreConfig::new("mailto:ops@example.com", "key").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_table_url_with_and_without_trailing_slash() {
        let a = StoreConfig::new("https://demo.supabase.co/", "k").unwrap();
        let b = StoreConfig::new("https://demo.supabase.co", "k").unwrap();
        assert_eq!(
            a.table_url("vehicle_data").as_str(),
            "https://demo.supabase.co/rest/v1/vehicle_data"
        );
        assert_eq!(a.table_url("vehicle_data"), b.table_url("vehicle_data"));
    }

    #[test]
    fn test_table_url_keeps_base_path() {
        let cfg = StoreConfig::new("http://127.0.0.1:54321/project", "k").unwrap();
        assert_eq!(
            cfg.table_url("vehicle_data").as_str(),
            "http://127.0.0.1:54321/project/rest/v1/vehicle_data"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let cfg = StoreConfig::new("https://demo.supabase.co", "super-secret").unwrap();
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("super-secret"));
        assert!(dbg.contains("demo.supabase.co"));
    }
}
