/// Geographic extent in plain lon/lat degrees (WGS84).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoExtent {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

/// Wisconsin bounding box (degrees).
pub const WISCONSIN: GeoExtent = GeoExtent {
    min_lon: -92.8894,
    max_lon: -86.764,
    min_lat: 42.4919,
    max_lat: 47.0808,
};

impl GeoExtent {
    pub fn new(min_lon: f64, max_lon: f64, min_lat: f64, max_lat: f64) -> Self {
        GeoExtent {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        }
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Expands by `lon_buffer` degrees on each longitude side and by
    /// `lon_buffer / lat_scale` on each latitude side.
    ///
    /// The scaled-down latitude buffer keeps the framed region roughly
    /// square on screen at mid-northern latitudes; it is not a
    /// projection-correct correction.
    pub fn buffered(&self, lon_buffer: f64, lat_scale: f64) -> GeoExtent {
        let lat_buffer = lon_buffer / lat_scale;
        GeoExtent {
            min_lon: self.min_lon - lon_buffer,
            max_lon: self.max_lon + lon_buffer,
            min_lat: self.min_lat - lat_buffer,
            max_lat: self.max_lat + lat_buffer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GeoExtent, WISCONSIN};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn wisconsin_is_well_formed() {
        assert!(WISCONSIN.min_lon < WISCONSIN.max_lon);
        assert!(WISCONSIN.min_lat < WISCONSIN.max_lat);
        assert!(WISCONSIN.lon_span() > 0.0);
        assert!(WISCONSIN.lat_span() > 0.0);
    }

    #[test]
    fn buffered_expands_lon_and_scaled_lat() {
        let base = GeoExtent::new(-10.0, 10.0, 40.0, 50.0);
        let buffered = base.buffered(0.5, 3.0);
        assert_close(buffered.min_lon, -10.5, 1e-12);
        assert_close(buffered.max_lon, 10.5, 1e-12);
        assert_close(buffered.min_lat, 40.0 - 0.5 / 3.0, 1e-12);
        assert_close(buffered.max_lat, 50.0 + 0.5 / 3.0, 1e-12);
    }

    #[test]
    fn zero_buffer_is_identity() {
        let buffered = WISCONSIN.buffered(0.0, 3.0);
        assert_eq!(buffered, WISCONSIN);
    }
}
