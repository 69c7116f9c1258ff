//! Page templates for the three routes. Plain `format!`-rendered HTML; no
//! template engine. The embeddable figure fragment comes ready-made from the
//! figure crate, pages here only wrap configuration values and that fragment
//! in page shells.

use figure::EmbedComponents;
use formats::KMEANS_FILE;
use foundation::WISCONSIN;

use crate::config::ServerConfig;

/// Landing page: a street-map overview of the naive k-means districts plus
/// links to the full map and the embeddable figure.
pub fn render_index(config: &ServerConfig) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Generated Wisconsin Districts</title>
<style>{css}</style>
</head>
<body>
<main class="shell">
<h1>Generated Wisconsin Districts</h1>
<p>Electoral district maps for Wisconsin drawn by two clustering runs: naive
k-means and a same-size variant that balances district populations. Districts
can be colored by identity, compactness or population variance.</p>
<nav class="links">
<a href="/map">Full map</a>
<a href="/embed">Embeddable figure</a>
</nav>
<div id="map" class="map-overview"></div>
<p class="fine">Boundaries drawn from <code>{kmeans_url}</code>; the
embeddable figure also carries the same-size run.</p>
</main>
<script>{map_script}</script>
<script src="{maps_link}" async defer></script>
</body>
</html>"##,
        css = page_style(),
        kmeans_url = ServerConfig::asset_url(KMEANS_FILE),
        map_script = district_map_script(),
        maps_link = config.maps_link,
    )
}

/// Full-page street map with the naive k-means districts drawn over it.
pub fn render_map(config: &ServerConfig) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Generated Wisconsin Districts</title>
<style>{css}</style>
</head>
<body>
<div id="map" class="map-full"></div>
<script>{map_script}</script>
<script src="{maps_link}" async defer></script>
</body>
</html>"##,
        css = page_style(),
        map_script = district_map_script(),
        maps_link = config.maps_link,
    )
}

/// The embeddable fragment: container first, then the script that mounts
/// into it. Served bare so the pair can be dropped into any host page.
pub fn render_embed_fragment(components: &EmbedComponents) -> String {
    format!("{}\n{}", components.container, components.script)
}

/// `initMap` callback invoked by the maps-service loader: centers on
/// Wisconsin and overlays the k-means districts fetched from the asset
/// mount, filled by their categorical colors.
fn district_map_script() -> String {
    format!(
        r##"
function initMap() {{
    var map = new google.maps.Map(document.getElementById('map'), {{
        center: {{ lat: {center_lat}, lng: {center_lon} }},
        zoom: 7,
        mapTypeControl: false,
        streetViewControl: false
    }});
    map.data.loadGeoJson('{kmeans_url}');
    map.data.setStyle(function(feature) {{
        return {{
            fillColor: feature.getProperty('id_color') || '#cccccc',
            fillOpacity: 0.55,
            strokeColor: '#000000',
            strokeWeight: 1
        }};
    }});
}}
"##,
        center_lat = (WISCONSIN.min_lat + WISCONSIN.max_lat) / 2.0,
        center_lon = (WISCONSIN.min_lon + WISCONSIN.max_lon) / 2.0,
        kmeans_url = ServerConfig::asset_url(KMEANS_FILE),
    )
}

fn page_style() -> &'static str {
    r##"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; color: #111827; }
.shell { max-width: 900px; margin: 0 auto; padding: 2rem; }
.shell h1 { font-size: 1.8rem; margin-bottom: 1rem; }
.shell p { margin-bottom: 1rem; line-height: 1.6; }
.links { display: flex; gap: 1rem; margin-bottom: 1.5rem; }
.links a { padding: 0.5rem 1rem; border: 1px solid #d1d5db; border-radius: 0.375rem; text-decoration: none; color: #1f2937; }
.links a:hover { background: #f3f4f6; }
.fine { color: #6b7280; font-size: 0.875rem; }
.map-overview { width: 100%; height: 420px; border: 1px solid #d1d5db; border-radius: 0.5rem; margin-bottom: 1.5rem; }
.map-full { position: fixed; inset: 0; }
"##
}

#[cfg(test)]
mod tests {
    use figure::{MapFigure, render_embed};
    use formats::{DistrictSources, GeoSource};

    use super::{render_embed_fragment, render_index, render_map};
    use crate::config::ServerConfig;

    fn test_config() -> ServerConfig {
        ServerConfig::from_lookup(|key| {
            (key == "GMAPS_API_KEY").then(|| "test-key".to_string())
        })
        .expect("test config")
    }

    #[test]
    fn index_uses_only_the_kmeans_asset_and_maps_link() {
        let page = render_index(&test_config());
        assert!(page.contains("/assets/kmeans_districts.json"));
        assert!(page.contains("key=test-key"));
        assert!(!page.contains("sskmeans"));
        assert!(page.contains(r#"<a href="/map">"#));
        assert!(page.contains(r#"<a href="/embed">"#));
    }

    #[test]
    fn map_page_wires_the_maps_callback() {
        let page = render_map(&test_config());
        assert!(page.contains("function initMap()"));
        assert!(page.contains("callback=initMap"));
        assert!(page.contains("loadGeoJson('/assets/kmeans_districts.json')"));
        assert!(!page.contains("sskmeans"));
    }

    #[test]
    fn embed_fragment_is_container_then_script() {
        let sources = DistrictSources {
            kmeans: GeoSource::new(r#"{"type":"FeatureCollection","features":[]}"#),
            sskmeans: GeoSource::new(r#"{"type":"FeatureCollection","features":[]}"#),
        };
        let components = render_embed(&MapFigure::wisconsin(), &sources);
        let fragment = render_embed_fragment(&components);
        assert!(fragment.starts_with("<div"));
        assert!(fragment.ends_with("</script>"));
        let container_at = fragment.find("district-map").expect("container present");
        let script_at = fragment.find("<script>").expect("script present");
        assert!(container_at < script_at);
    }
}
