/// One axis of a pannable, zoomable view window.
///
/// `start`/`end` is the currently visible interval, `bounds` the hard pan
/// limit. `min_span`/`max_span`, when set, clamp how far the interval may
/// zoom in or out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewRange {
    pub start: f64,
    pub end: f64,
    pub bounds: (f64, f64),
    pub min_span: Option<f64>,
    pub max_span: Option<f64>,
}

impl ViewRange {
    /// A range showing `start..end`, pannable within those same values.
    pub fn bounded(start: f64, end: f64) -> Self {
        ViewRange {
            start,
            end,
            bounds: (start, end),
            min_span: None,
            max_span: None,
        }
    }

    pub fn with_span_limits(mut self, min_span: f64, max_span: f64) -> Self {
        self.min_span = Some(min_span);
        self.max_span = Some(max_span);
        self
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn bounds_span(&self) -> f64 {
        self.bounds.1 - self.bounds.0
    }

    /// Clamps a proposed span to the configured zoom limits.
    pub fn clamp_span(&self, span: f64) -> f64 {
        let mut span = span;
        if let Some(max) = self.max_span {
            span = span.min(max);
        }
        if let Some(min) = self.min_span {
            span = span.max(min);
        }
        span
    }

    /// Fits a proposed window into the range: the span is clamped to the
    /// zoom limits (and to the bounds width), then the window is shifted so
    /// it lies entirely inside `bounds`.
    pub fn clamp_window(&self, start: f64, end: f64) -> (f64, f64) {
        let (lo, hi) = self.bounds;
        let span = self.clamp_span(end - start).min(hi - lo);
        let half = span / 2.0;
        let min_center = lo + half;
        let max_center = hi - half;
        let center = (start + end) / 2.0;
        let center = if min_center <= max_center {
            center.clamp(min_center, max_center)
        } else {
            (lo + hi) / 2.0
        };
        (center - half, center + half)
    }
}
