use foundation::{GeoExtent, ViewRange, WISCONSIN};
use formats::ColorField;

/// Longitude buffer around the framed region, degrees.
pub const BOUNDS_BUFFER: f64 = 0.5;
/// Latitude buffer scale-down (rough aspect compensation, see
/// [`GeoExtent::buffered`]).
pub const LAT_BUFFER_SCALE: f64 = 3.0;
/// Zoom floor: the visible longitude span may shrink to 1/8 of its maximum.
pub const MIN_SPAN_DIVISOR: f64 = 8.0;

/// Description of the map figure: viewport ranges, box size, frame chrome
/// and polygon styling. Nothing here draws; the embed serializer turns it
/// into markup and script.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFigure {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x_range: ViewRange,
    pub y_range: ViewRange,
    /// Plot frame outline width, pixels.
    pub outline_width: u32,
    /// Polygon stroke color.
    pub line_color: String,
    /// Polygon stroke width, pixels.
    pub line_width: u32,
    /// Property driving the fill on first render.
    pub fill_field: ColorField,
}

impl MapFigure {
    /// The district map figure framed on Wisconsin.
    ///
    /// The horizontal range carries the zoom clamps: the visible longitude
    /// span stays between one eighth of the buffered region width and that
    /// full width. The vertical range is clamped to its bounds only.
    pub fn wisconsin() -> Self {
        Self::framed_on(WISCONSIN)
    }

    /// Frames an arbitrary region with the same buffering and clamp rules.
    pub fn framed_on(region: GeoExtent) -> Self {
        let framed = region.buffered(BOUNDS_BUFFER, LAT_BUFFER_SCALE);
        let max_span = region.lon_span() + BOUNDS_BUFFER;
        let x_range = ViewRange::bounded(framed.min_lon, framed.max_lon)
            .with_span_limits(max_span / MIN_SPAN_DIVISOR, max_span);
        let y_range = ViewRange::bounded(framed.min_lat, framed.max_lat);

        MapFigure {
            title: "Generated Wisconsin Districts".to_string(),
            width: 750,
            height: 750,
            x_range,
            y_range,
            outline_width: 3,
            line_color: "black".to_string(),
            line_width: 1,
            fill_field: ColorField::DistrictId,
        }
    }
}
