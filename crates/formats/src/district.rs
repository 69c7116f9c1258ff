//! District vocabulary shared by the figure and the server: which clustering
//! method produced a collection, and which per-feature property drives the
//! choropleth fill.

/// Clustering method that produced a district collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClusterMethod {
    /// Naive k-means districts.
    KMeans,
    /// Same-size k-means districts (roughly equal population per district).
    SameSizeKMeans,
}

impl ClusterMethod {
    /// Display order for dropdowns.
    pub const ALL: [ClusterMethod; 2] = [ClusterMethod::KMeans, ClusterMethod::SameSizeKMeans];

    /// Stable key used in file names, dropdown values and client scripts.
    pub fn key(&self) -> &'static str {
        match self {
            Self::KMeans => "kmeans",
            Self::SameSizeKMeans => "sskmeans",
        }
    }

    /// Human-readable dropdown label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::KMeans => "Naive KMeans",
            Self::SameSizeKMeans => "SameSizeKMeans",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "kmeans" => Some(Self::KMeans),
            "sskmeans" => Some(Self::SameSizeKMeans),
            _ => None,
        }
    }
}

/// Per-feature property the polygon fill color is read from.
///
/// The score-derived fields carry pre-computed color encodings, not raw
/// scores; the fill uses their values directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorField {
    /// Categorical district identity colors.
    DistrictId,
    /// Compactness-score color encoding.
    Compactness,
    /// Population-variance color encoding.
    PopulationVariance,
}

impl ColorField {
    /// Display order for dropdowns.
    pub const ALL: [ColorField; 3] = [
        ColorField::DistrictId,
        ColorField::Compactness,
        ColorField::PopulationVariance,
    ];

    /// GeoJSON property name holding the color value.
    pub fn key(&self) -> &'static str {
        match self {
            Self::DistrictId => "id_color",
            Self::Compactness => "cmpct_col",
            Self::PopulationVariance => "pdiff_col",
        }
    }

    /// Human-readable dropdown label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DistrictId => "Districts (Categorical)",
            Self::Compactness => "Compactness",
            Self::PopulationVariance => "Population Variance",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "id_color" => Some(Self::DistrictId),
            "cmpct_col" => Some(Self::Compactness),
            "pdiff_col" => Some(Self::PopulationVariance),
            _ => None,
        }
    }
}
