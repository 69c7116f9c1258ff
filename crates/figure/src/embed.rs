//! Embeddable serialization of the district map.
//!
//! Produces the script/markup pair served by the embed route: one container
//! element holding the controls, title, drawing surface and toolbar, and one
//! script block carrying both district collections, the figure configuration
//! and the interaction logic. Everything the fragment needs ships inline.
//! Element ids are fixed, so a document holds at most one embed.

use formats::{ClusterMethod, DistrictSources};
use serde_json::json;

use crate::map::MapFigure;
use crate::view::ViewSelection;
use crate::widget::{FIELD_SELECT_ID, METHOD_SELECT_ID, field_select, html_escape, method_select};

/// DOM id of the embed container element.
pub const CONTAINER_ID: &str = "district-map";
/// DOM id of the drawing surface inside the container.
pub const CANVAS_ID: &str = "district-map-canvas";
/// DOM id of the reset button.
pub const RESET_ID: &str = "district-map-reset";

/// Fill used when a feature lacks the active color property.
const MISSING_FILL: &str = "#cccccc";

/// The embeddable pair: exactly one container element and exactly one
/// script block. The container must be in the document before the script
/// runs; the embed route emits them in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedComponents {
    pub container: String,
    pub script: String,
}

/// Serializes the figure plus both collections into the embeddable pair.
///
/// The collections go in untouched; a file that is not valid JSON breaks
/// only in the browser, never here.
pub fn render_embed(figure: &MapFigure, sources: &DistrictSources) -> EmbedComponents {
    let selection = ViewSelection {
        field: figure.fill_field,
        ..ViewSelection::default()
    };

    EmbedComponents {
        container: render_container(figure, selection),
        script: render_script(figure, selection, sources),
    }
}

fn render_container(figure: &MapFigure, selection: ViewSelection) -> String {
    format!(
        r##"<div class="district-map" id="{container}">
<style>{style}</style>
<div class="district-map-controls">{method}{field}</div>
<div class="district-map-title">{title}</div>
<svg class="district-map-canvas" id="{canvas}" width="{width}" height="{height}" viewBox="0 0 {width} {height}" style="border: {outline}px solid #000"></svg>
<div class="district-map-toolbar"><button type="button" id="{reset}">Reset view</button></div>
</div>"##,
        container = CONTAINER_ID,
        style = embed_style(),
        method = method_select(selection.method).render(),
        field = field_select(selection.field).render(),
        title = html_escape(&figure.title),
        canvas = CANVAS_ID,
        width = figure.width,
        height = figure.height,
        outline = figure.outline_width,
        reset = RESET_ID,
    )
}

fn render_script(
    figure: &MapFigure,
    selection: ViewSelection,
    sources: &DistrictSources,
) -> String {
    let config = json!({
        "canvas": CANVAS_ID,
        "reset": RESET_ID,
        "methodSelect": METHOD_SELECT_ID,
        "fieldSelect": FIELD_SELECT_ID,
        "width": figure.width,
        "height": figure.height,
        "xRange": range_json(&figure.x_range),
        "yRange": range_json(&figure.y_range),
        "lineColor": figure.line_color,
        "lineWidth": figure.line_width,
        "method": selection.method.key(),
        "fillField": selection.field.key(),
        "missingFill": MISSING_FILL,
    });

    let collections: String = ClusterMethod::ALL
        .iter()
        .map(|m| {
            format!(
                "\"{}\": {}",
                m.key(),
                escape_script_close(&sources.by_method(*m).geojson)
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "<script>\n(function() {{\nvar config = {config};\nvar sources = {{\n{collections}\n}};\n{logic}\n}})();\n</script>",
        config = config,
        collections = collections,
        logic = interaction_script(),
    )
}

fn range_json(range: &foundation::ViewRange) -> serde_json::Value {
    json!({
        "start": range.start,
        "end": range.end,
        "bounds": [range.bounds.0, range.bounds.1],
        "minSpan": range.min_span,
        "maxSpan": range.max_span,
    })
}

/// Escapes `</` so an embedded payload cannot terminate the surrounding
/// script element. `\/` is a valid JSON string escape, so valid payloads
/// stay valid.
fn escape_script_close(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn embed_style() -> &'static str {
    r##"
.district-map { display: inline-block; font-family: system-ui, sans-serif; color: #111827; }
.district-map-controls { display: flex; }
.district-map-select { display: flex; flex-direction: column; font-size: 0.85rem; color: #374151; }
.district-map-select select { padding: 0.3rem; border: 1px solid #d1d5db; border-radius: 0.25rem; font-size: 0.9rem; }
.district-map-title { font-size: 1.15rem; font-weight: 600; margin: 0.4rem 0; }
.district-map-canvas { display: block; background: #ffffff; cursor: grab; touch-action: none; }
.district-map-canvas:active { cursor: grabbing; }
.district-map-toolbar { display: flex; justify-content: flex-end; margin-top: 0.4rem; }
.district-map-toolbar button { padding: 0.25rem 0.75rem; border: 1px solid #d1d5db; border-radius: 0.25rem; background: #f9fafb; cursor: pointer; }
.district-map-toolbar button:hover { background: #e5e7eb; }
"##
}

/// The interaction logic bundled with every embed. Mirrors the
/// [`ViewSelection`] state machine: each dropdown changes exactly one half
/// of the state, then triggers a redraw of the active collection.
fn interaction_script() -> &'static str {
    r##"
var canvas = document.getElementById(config.canvas);
var width = config.width;
var height = config.height;
var state = { method: config.method, field: config.fillField };
var view = {
    x0: config.xRange.start, x1: config.xRange.end,
    y0: config.yRange.start, y1: config.yRange.end
};

function clampSpan(range, span) {
    if (range.maxSpan !== null && span > range.maxSpan) span = range.maxSpan;
    if (range.minSpan !== null && span < range.minSpan) span = range.minSpan;
    var boundsSpan = range.bounds[1] - range.bounds[0];
    if (span > boundsSpan) span = boundsSpan;
    return span;
}

function clampWindow(range, start, end) {
    var span = clampSpan(range, end - start);
    var half = span / 2;
    var lo = range.bounds[0] + half;
    var hi = range.bounds[1] - half;
    var center = (start + end) / 2;
    if (lo <= hi) center = Math.min(Math.max(center, lo), hi);
    else center = (range.bounds[0] + range.bounds[1]) / 2;
    return [center - half, center + half];
}

function setView(x0, x1, y0, y1) {
    var xw = clampWindow(config.xRange, x0, x1);
    var yw = clampWindow(config.yRange, y0, y1);
    view.x0 = xw[0]; view.x1 = xw[1];
    view.y0 = yw[0]; view.y1 = yw[1];
}

function toScreenX(lon) { return (lon - view.x0) / (view.x1 - view.x0) * width; }
function toScreenY(lat) { return height - (lat - view.y0) / (view.y1 - view.y0) * height; }

function ringPath(ring) {
    var d = '';
    for (var i = 0; i < ring.length; i++) {
        d += (i === 0 ? 'M' : 'L') + toScreenX(ring[i][0]).toFixed(2) + ' ' + toScreenY(ring[i][1]).toFixed(2);
    }
    return d + 'Z';
}

function featurePath(feature) {
    var geom = feature.geometry || {};
    var rings = [];
    if (geom.type === 'Polygon') {
        rings = geom.coordinates || [];
    } else if (geom.type === 'MultiPolygon') {
        var polys = geom.coordinates || [];
        for (var i = 0; i < polys.length; i++) rings = rings.concat(polys[i]);
    }
    var d = '';
    for (var j = 0; j < rings.length; j++) d += ringPath(rings[j]);
    return d;
}

function redraw() {
    var collection = sources[state.method] || {};
    var features = collection.features || [];
    while (canvas.firstChild) canvas.removeChild(canvas.firstChild);
    for (var i = 0; i < features.length; i++) {
        var d = featurePath(features[i]);
        if (!d) continue;
        var props = features[i].properties || {};
        var path = document.createElementNS('http://www.w3.org/2000/svg', 'path');
        path.setAttribute('d', d);
        path.setAttribute('fill', props[state.field] || config.missingFill);
        path.setAttribute('fill-rule', 'evenodd');
        path.setAttribute('stroke', config.lineColor);
        path.setAttribute('stroke-width', config.lineWidth);
        canvas.appendChild(path);
    }
}

// Each selector changes exactly one half of the state.
document.getElementById(config.methodSelect).addEventListener('change', function(e) {
    state.method = e.target.value;
    redraw();
});
document.getElementById(config.fieldSelect).addEventListener('change', function(e) {
    state.field = e.target.value;
    redraw();
});

// Drag to pan.
var drag = null;
canvas.addEventListener('pointerdown', function(e) {
    drag = { x: e.clientX, y: e.clientY, x0: view.x0, x1: view.x1, y0: view.y0, y1: view.y1 };
    canvas.setPointerCapture(e.pointerId);
});
canvas.addEventListener('pointermove', function(e) {
    if (!drag) return;
    var dx = (e.clientX - drag.x) / width * (drag.x1 - drag.x0);
    var dy = (e.clientY - drag.y) / height * (drag.y1 - drag.y0);
    setView(drag.x0 - dx, drag.x1 - dx, drag.y0 + dy, drag.y1 + dy);
    redraw();
});
canvas.addEventListener('pointerup', function() { drag = null; });
canvas.addEventListener('pointercancel', function() { drag = null; });

// Wheel to zoom about the cursor. The horizontal range carries the span
// clamps; the vertical span follows proportionally, then gets clamped to
// its own bounds.
canvas.addEventListener('wheel', function(e) {
    e.preventDefault();
    var factor = e.deltaY > 0 ? 1.1 : 1 / 1.1;
    var rect = canvas.getBoundingClientRect();
    var fx = (e.clientX - rect.left) / rect.width;
    var fy = 1 - (e.clientY - rect.top) / rect.height;
    var lon = view.x0 + fx * (view.x1 - view.x0);
    var lat = view.y0 + fy * (view.y1 - view.y0);
    var xSpan = clampSpan(config.xRange, (view.x1 - view.x0) * factor);
    var ySpan = (view.y1 - view.y0) * (xSpan / (view.x1 - view.x0));
    setView(lon - fx * xSpan, lon + (1 - fx) * xSpan, lat - fy * ySpan, lat + (1 - fy) * ySpan);
    redraw();
}, { passive: false });

document.getElementById(config.reset).addEventListener('click', function() {
    setView(config.xRange.start, config.xRange.end, config.yRange.start, config.yRange.end);
    redraw();
});

redraw();
"##
}
