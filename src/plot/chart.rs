use std::ops::Range;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("series '{label}': x has {x_len} values but y has {y_len}")]
    LengthMismatch {
        label: String,
        x_len: usize,
        y_len: usize,
    },
}

/// Fraction of the data span added on each side of an axis.
const AXIS_MARGIN: f64 = 0.05;

/// Axis ends are clamped to `±AXIS_LIMIT` so the span itself stays finite.
const AXIS_LIMIT: f64 = f64::MAX / 2.0;

// ---------------------------------------------------------------------------
// Series – one labeled polyline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Plot `ys` against consecutive integers starting at `first_x`.
    pub fn indexed(label: impl Into<String>, first_x: usize, ys: &[f64]) -> Self {
        Series {
            label: label.into(),
            points: ys
                .iter()
                .enumerate()
                .map(|(i, &y)| ((first_x + i) as f64, y))
                .collect(),
        }
    }

    /// Plot `ys` against `xs`; both must have the same length.
    pub fn paired(label: impl Into<String>, xs: &[f64], ys: &[f64]) -> Result<Self, ChartError> {
        let label = label.into();
        if xs.len() != ys.len() {
            return Err(ChartError::LengthMismatch {
                label,
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        Ok(Series {
            label,
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Runs of consecutive finite points. A non-finite sample breaks the line.
    pub fn finite_segments(&self) -> Vec<Vec<(f64, f64)>> {
        self.points
            .split(|(x, y)| !x.is_finite() || !y.is_finite())
            .filter(|run| !run.is_empty())
            .map(<[(f64, f64)]>::to_vec)
            .collect()
    }

    /// Segments to draw, never empty: a series with no finite samples yields
    /// a single empty run so it still gets a legend entry.
    pub fn drawable_segments(&self) -> Vec<Vec<(f64, f64)>> {
        let segments = self.finite_segments();
        if segments.is_empty() {
            vec![Vec::new()]
        } else {
            segments
        }
    }
}

// ---------------------------------------------------------------------------
// LineChart – a complete figure description
// ---------------------------------------------------------------------------

/// Everything needed to draw one figure. Building one never touches the
/// filesystem, so two charts built from the same data compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub legend: bool,
    pub grid: bool,
    /// Output size in pixels.
    pub size: (u32, u32),
    pub series: Vec<Series>,
}

impl LineChart {
    pub fn new(title: impl Into<String>, size: (u32, u32)) -> Self {
        LineChart {
            title: title.into(),
            x_label: None,
            y_label: None,
            legend: false,
            grid: false,
            size,
            series: Vec::new(),
        }
    }

    pub fn axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }

    pub fn with_grid(mut self) -> Self {
        self.grid = true;
        self
    }

    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Axis ranges covering every finite point, padded by [`AXIS_MARGIN`].
    pub fn bounds(&self) -> (Range<f64>, Range<f64>) {
        let finite = self
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite());

        let mut x_span: Option<(f64, f64)> = None;
        let mut y_span: Option<(f64, f64)> = None;
        for &(x, y) in finite {
            x_span = Some(widen(x_span, x));
            y_span = Some(widen(y_span, y));
        }
        (padded(x_span), padded(y_span))
    }
}

fn widen(span: Option<(f64, f64)>, v: f64) -> (f64, f64) {
    match span {
        Some((lo, hi)) => (lo.min(v), hi.max(v)),
        None => (v, v),
    }
}

fn padded(span: Option<(f64, f64)>) -> Range<f64> {
    match span {
        None => 0.0..1.0,
        Some((lo, hi)) if hi - lo < f64::EPSILON => {
            let pad = (hi.abs() * AXIS_MARGIN).max(0.5);
            clamped(lo - pad, hi + pad)
        }
        Some((lo, hi)) => {
            // scale before subtracting so extreme spans do not overflow
            let pad = hi * AXIS_MARGIN - lo * AXIS_MARGIN;
            clamped(lo - pad, hi + pad)
        }
    }
}

fn clamped(lo: f64, hi: f64) -> Range<f64> {
    let lo = lo.clamp(-AXIS_LIMIT, AXIS_LIMIT);
    let hi = hi.clamp(-AXIS_LIMIT, AXIS_LIMIT);
    if lo < hi {
        lo..hi
    } else if hi > 0.0 {
        // data sits entirely past the limit; keep a strip at that edge
        AXIS_LIMIT * (1.0 - AXIS_MARGIN)..AXIS_LIMIT
    } else {
        -AXIS_LIMIT..-AXIS_LIMIT * (1.0 - AXIS_MARGIN)
    }
}
