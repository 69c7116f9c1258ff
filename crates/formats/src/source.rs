use std::fs;
use std::path::{Path, PathBuf};

use crate::district::ClusterMethod;

/// File name of the naive k-means collection under the data root.
pub const KMEANS_FILE: &str = "kmeans_districts.json";
/// File name of the same-size k-means collection under the data root.
pub const SSKMEANS_FILE: &str = "sskmeans_districts.json";

/// Raw GeoJSON text handed to the client untouched.
///
/// Nothing is parsed or validated server-side; malformed content surfaces
/// only when the browser consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoSource {
    pub geojson: String,
}

impl GeoSource {
    pub fn new(geojson: impl Into<String>) -> Self {
        GeoSource {
            geojson: geojson.into(),
        }
    }
}

/// Filesystem locations of the two pre-computed district collections.
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub kmeans: PathBuf,
    pub sskmeans: PathBuf,
}

impl SourcePaths {
    /// The fixed file names resolved against a data root directory.
    pub fn under_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        SourcePaths {
            kmeans: root.join(KMEANS_FILE),
            sskmeans: root.join(SSKMEANS_FILE),
        }
    }

    pub fn for_method(&self, method: ClusterMethod) -> &Path {
        match method {
            ClusterMethod::KMeans => &self.kmeans,
            ClusterMethod::SameSizeKMeans => &self.sskmeans,
        }
    }
}

/// Both district collections, loaded for one request.
#[derive(Debug, Clone)]
pub struct DistrictSources {
    pub kmeans: GeoSource,
    pub sskmeans: GeoSource,
}

impl DistrictSources {
    pub fn by_method(&self, method: ClusterMethod) -> &GeoSource {
        match method {
            ClusterMethod::KMeans => &self.kmeans,
            ClusterMethod::SameSizeKMeans => &self.sskmeans,
        }
    }
}

#[derive(Debug)]
pub enum SourceLoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for SourceLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceLoadError::Io { path, source } => {
                write!(f, "failed to read district source {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SourceLoadError {}

/// Reads both collections from disk as UTF-8 text.
///
/// Called once per request; no cache sits in front of the disk, so a request
/// always serves whatever the files currently hold.
pub fn load_district_sources(paths: &SourcePaths) -> Result<DistrictSources, SourceLoadError> {
    Ok(DistrictSources {
        kmeans: read_source(&paths.kmeans)?,
        sskmeans: read_source(&paths.sskmeans)?,
    })
}

fn read_source(path: &Path) -> Result<GeoSource, SourceLoadError> {
    let geojson = fs::read_to_string(path).map_err(|e| SourceLoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(GeoSource::new(geojson))
}

#[cfg(test)]
mod tests {
    use super::{KMEANS_FILE, SourceLoadError, SourcePaths, load_district_sources};
    use crate::district::ClusterMethod;

    fn demo_root() -> std::path::PathBuf {
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../apps/server/assets/geojson")
    }

    #[test]
    fn loads_demo_collections() {
        let sources =
            load_district_sources(&SourcePaths::under_root(demo_root())).expect("load sources");
        for method in ClusterMethod::ALL {
            let source = sources.by_method(method);
            assert!(!source.geojson.is_empty());
            assert!(source.geojson.contains("FeatureCollection"));
        }
    }

    #[test]
    fn source_text_is_passed_through_verbatim() {
        let root = demo_root();
        let sources =
            load_district_sources(&SourcePaths::under_root(&root)).expect("load sources");
        let on_disk = std::fs::read_to_string(root.join(KMEANS_FILE)).expect("read demo file");
        assert_eq!(sources.kmeans.geojson, on_disk);
    }

    #[test]
    fn missing_file_reports_path() {
        let paths = SourcePaths::under_root("/nonexistent/districts");
        let err = load_district_sources(&paths).expect_err("missing files must fail");
        match &err {
            SourceLoadError::Io { path, .. } => assert!(path.ends_with(KMEANS_FILE)),
        }
        assert!(err.to_string().contains(KMEANS_FILE));
    }

    #[test]
    fn paths_resolve_fixed_file_names() {
        let paths = SourcePaths::under_root("/data");
        assert!(paths.for_method(ClusterMethod::KMeans).ends_with(KMEANS_FILE));
        assert!(
            paths
                .for_method(ClusterMethod::SameSizeKMeans)
                .ends_with(super::SSKMEANS_FILE)
        );
    }
}
