use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use formats::SourcePaths;

/// Environment variable holding the maps-service API key. Required.
pub const MAPS_API_KEY_VAR: &str = "GMAPS_API_KEY";
/// Environment variable overriding the listen address.
pub const LISTEN_ADDR_VAR: &str = "DISTRICTS_ADDR";
/// Environment variable overriding the district data root.
pub const DATA_ROOT_VAR: &str = "DISTRICTS_DATA_ROOT";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8090";
const DEFAULT_DATA_ROOT: &str = "assets/geojson";

/// Process-wide configuration, loaded once at startup and passed into
/// handlers. Loading fails fast: no listener comes up from a
/// half-configured process.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Script URL for the external maps service, API key baked in.
    pub maps_link: String,
    /// Directory holding the two district collections.
    pub data_root: PathBuf,
    pub listen_addr: SocketAddr,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingMapsApiKey,
    InvalidListenAddr(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingMapsApiKey => {
                write!(
                    f,
                    "{MAPS_API_KEY_VAR} is not set; refusing to serve a broken map page"
                )
            }
            ConfigError::InvalidListenAddr(raw) => {
                write!(f, "invalid {LISTEN_ADDR_VAR} \"{raw}\"")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any variable lookup. `from_env` wires
    /// in the process environment; tests pass closures.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(MAPS_API_KEY_VAR).ok_or(ConfigError::MissingMapsApiKey)?;
        let raw_addr = lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidListenAddr(raw_addr))?;
        let data_root = lookup(DATA_ROOT_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_ROOT));

        Ok(ServerConfig {
            maps_link: maps_script_url(&api_key),
            data_root,
            listen_addr,
        })
    }

    pub fn source_paths(&self) -> SourcePaths {
        SourcePaths::under_root(&self.data_root)
    }

    /// URL under which a data-root file is served to the browser.
    pub fn asset_url(file_name: &str) -> String {
        format!("/assets/{file_name}")
    }
}

fn maps_script_url(api_key: &str) -> String {
    format!("https://maps.googleapis.com/maps/api/js?key={api_key}&callback=initMap")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{ConfigError, ServerConfig};

    fn lookup_from<'a>(
        pairs: &'a [(&'a str, &'a str)],
    ) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = ServerConfig::from_lookup(|_| None).expect_err("must fail without a key");
        assert!(matches!(err, ConfigError::MissingMapsApiKey));
        assert!(err.to_string().contains("GMAPS_API_KEY"));
    }

    #[test]
    fn defaults_apply_with_only_the_key_set() {
        let config = ServerConfig::from_lookup(lookup_from(&[("GMAPS_API_KEY", "k-123")]))
            .expect("load config");
        assert_eq!(config.listen_addr.port(), 8090);
        assert!(config.listen_addr.ip().is_unspecified());
        assert_eq!(config.data_root, PathBuf::from("assets/geojson"));
        assert!(config.maps_link.contains("key=k-123"));
        assert!(config.maps_link.contains("callback=initMap"));
    }

    #[test]
    fn overrides_win_over_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("GMAPS_API_KEY", "k"),
            ("DISTRICTS_ADDR", "127.0.0.1:9000"),
            ("DISTRICTS_DATA_ROOT", "/srv/districts"),
        ]))
        .expect("load config");
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(config.data_root, PathBuf::from("/srv/districts"));
    }

    #[test]
    fn bad_listen_addr_is_fatal() {
        let err = ServerConfig::from_lookup(lookup_from(&[
            ("GMAPS_API_KEY", "k"),
            ("DISTRICTS_ADDR", "not-an-addr"),
        ]))
        .expect_err("must fail on an unparseable address");
        assert!(matches!(err, ConfigError::InvalidListenAddr(_)));
        assert!(err.to_string().contains("not-an-addr"));
    }

    #[test]
    fn source_paths_live_under_the_data_root() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("GMAPS_API_KEY", "k"),
            ("DISTRICTS_DATA_ROOT", "/srv/districts"),
        ]))
        .expect("load config");
        let paths = config.source_paths();
        assert_eq!(
            paths.kmeans,
            PathBuf::from("/srv/districts/kmeans_districts.json")
        );
        assert_eq!(
            paths.sskmeans,
            PathBuf::from("/srv/districts/sskmeans_districts.json")
        );
    }

    #[test]
    fn asset_urls_live_under_the_mount() {
        assert_eq!(
            ServerConfig::asset_url("kmeans_districts.json"),
            "/assets/kmeans_districts.json"
        );
    }
}
