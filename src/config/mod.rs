//! Configuration resolution for the command-line tools.
//!
//! Every tool resolves its connection settings the same way: a command-line
//! flag overrides an environment variable, which overrides a hardcoded
//! default. The precedence rule lives in one function, `resolve_setting`, so
//! it can be tested in isolation instead of being scattered across the
//! binaries as inline fallbacks.

use std::env;

/// Environment variable holding the search-engine base URL.
pub const ES_URL_ENV: &str = "ES_URL";

/// Environment variable holding the index name.
pub const INDEX_ENV: &str = "INDEX";

/// Base URL used when neither flag nor environment supplies one.
pub const DEFAULT_ES_URL: &str = "http://localhost:9200";

/// Index name used when neither flag nor environment supplies one.
pub const DEFAULT_INDEX: &str = "items";

/// Resolves one setting with flag > environment variable > default
/// precedence.
///
/// An environment variable that is set but empty is treated as unset, so an
/// accidental `ES_URL=` does not silently produce unusable URLs.
pub fn resolve_setting(flag: Option<&str>, env_var: &str, default: &str) -> String {
    if let Some(value) = flag {
        return value.to_string();
    }
    match env::var(env_var) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Resolved connection settings: where the search engine lives and which
/// index the operation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Base URL of the search engine, without a trailing slash.
    pub base_url: String,

    /// Name of the target index.
    pub index: String,
}

impl Connection {
    /// Resolves a connection from the optional `--es-url` and `--index`
    /// flags, falling back to `ES_URL`/`INDEX` and then the defaults.
    pub fn resolve(es_url_flag: Option<&str>, index_flag: Option<&str>) -> Self {
        let base_url = resolve_setting(es_url_flag, ES_URL_ENV, DEFAULT_ES_URL);
        let index = resolve_setting(index_flag, INDEX_ENV, DEFAULT_INDEX);
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            index,
        }
    }

    /// URL of the index itself: `{base}/{index}`.
    ///
    /// Target of the PUT that creates the index and the DELETE that clears it.
    pub fn index_url(&self) -> String {
        format!("{}/{}", self.base_url, self.index)
    }

    /// URL of the bulk endpoint: `{base}/{index}/_bulk?refresh=true`.
    ///
    /// `refresh=true` makes the loaded documents searchable as soon as the
    /// call returns.
    pub fn bulk_url(&self) -> String {
        format!("{}/{}/_bulk?refresh=true", self.base_url, self.index)
    }

    /// URL of the search endpoint: `{base}/{index}/_search`.
    pub fn search_url(&self) -> String {
        format!("{}/{}/_search", self.base_url, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_resolve_setting_flag_wins() {
        env::set_var("ES_TOOLS_TEST_VAR", "from-env");
        let value = resolve_setting(Some("from-flag"), "ES_TOOLS_TEST_VAR", "from-default");
        assert_eq!(value, "from-flag");
        env::remove_var("ES_TOOLS_TEST_VAR");
    }

    #[test]
    #[serial]
    fn test_resolve_setting_env_beats_default() {
        env::set_var("ES_TOOLS_TEST_VAR", "from-env");
        let value = resolve_setting(None, "ES_TOOLS_TEST_VAR", "from-default");
        assert_eq!(value, "from-env");
        env::remove_var("ES_TOOLS_TEST_VAR");
    }

    #[test]
    #[serial]
    fn test_resolve_setting_default_when_unset() {
        env::remove_var("ES_TOOLS_TEST_VAR");
        let value = resolve_setting(None, "ES_TOOLS_TEST_VAR", "from-default");
        assert_eq!(value, "from-default");
    }

    #[test]
    #[serial]
    fn test_resolve_setting_empty_env_treated_as_unset() {
        env::set_var("ES_TOOLS_TEST_VAR", "");
        let value = resolve_setting(None, "ES_TOOLS_TEST_VAR", "from-default");
        assert_eq!(value, "from-default");
        env::remove_var("ES_TOOLS_TEST_VAR");
    }

    #[test]
    #[serial]
    fn test_connection_resolve_defaults() {
        env::remove_var(ES_URL_ENV);
        env::remove_var(INDEX_ENV);

        let conn = Connection::resolve(None, None);
        assert_eq!(conn.base_url, DEFAULT_ES_URL);
        assert_eq!(conn.index, DEFAULT_INDEX);
    }

    #[test]
    #[serial]
    fn test_connection_resolve_from_env() {
        env::set_var(ES_URL_ENV, "http://search.internal:9200");
        env::set_var(INDEX_ENV, "products");

        let conn = Connection::resolve(None, None);
        assert_eq!(conn.base_url, "http://search.internal:9200");
        assert_eq!(conn.index, "products");

        env::remove_var(ES_URL_ENV);
        env::remove_var(INDEX_ENV);
    }

    #[test]
    #[serial]
    fn test_connection_resolve_flags_override_env() {
        env::set_var(ES_URL_ENV, "http://search.internal:9200");
        env::set_var(INDEX_ENV, "products");

        let conn = Connection::resolve(Some("http://localhost:9201"), Some("items-test"));
        assert_eq!(conn.base_url, "http://localhost:9201");
        assert_eq!(conn.index, "items-test");

        env::remove_var(ES_URL_ENV);
        env::remove_var(INDEX_ENV);
    }

    #[test]
    #[serial]
    fn test_connection_trims_trailing_slash() {
        let conn = Connection::resolve(Some("http://localhost:9200/"), Some("items"));
        assert_eq!(conn.index_url(), "http://localhost:9200/items");
    }

    #[test]
    #[serial]
    fn test_endpoint_urls() {
        let conn = Connection::resolve(Some("http://localhost:9200"), Some("items"));
        assert_eq!(conn.index_url(), "http://localhost:9200/items");
        assert_eq!(
            conn.bulk_url(),
            "http://localhost:9200/items/_bulk?refresh=true"
        );
        assert_eq!(conn.search_url(), "http://localhost:9200/items/_search");
    }
}
