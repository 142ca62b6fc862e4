//! Geometry for the two inline SVG charts. Pure functions, so the
//! layout is testable without a browser.

use contracts::dashboards::d400_overview::ChartPoint;

/// Drawing area in SVG user units, before padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Left gutter for the y-axis labels.
    pub pad_left: f64,
    /// Bottom gutter for the x-axis labels.
    pub pad_bottom: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pad_left: 40.0,
            pad_bottom: 24.0,
        }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.pad_left).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.pad_bottom).max(0.0)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Baseline y for a value of zero.
    pub fn baseline(&self) -> f64 {
        self.plot_height()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Centre of the bar, where the x-axis label goes.
    pub label_x: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub y: f64,
    pub label: String,
}

/// Round `max` up to a 1/2/5 step so gridlines land on readable values.
pub fn nice_ceiling(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let normalized = max / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

fn scale_max(points: &[ChartPoint]) -> f64 {
    nice_ceiling(points.iter().map(|p| p.value).fold(0.0, f64::max))
}

fn scale_y(value: f64, max: f64, viewport: &Viewport) -> f64 {
    let ratio = (value / max).clamp(0.0, 1.0);
    viewport.baseline() - ratio * viewport.plot_height()
}

fn slot_width(count: usize, viewport: &Viewport) -> f64 {
    viewport.plot_width() / count.max(1) as f64
}

/// One bar per point, each taking 60% of its slot.
pub fn bar_layout(points: &[ChartPoint], viewport: &Viewport) -> Vec<Bar> {
    let max = scale_max(points);
    let slot = slot_width(points.len(), viewport);
    let width = slot * 0.6;

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let slot_x = viewport.pad_left + slot * i as f64;
            let y = scale_y(point.value, max, viewport);
            Bar {
                label: point.label.clone(),
                value: point.value,
                x: slot_x + (slot - width) / 2.0,
                y,
                width,
                height: viewport.baseline() - y,
                label_x: slot_x + slot / 2.0,
            }
        })
        .collect()
}

/// Vertices of the activity line, centred in their slots.
pub fn line_vertices(points: &[ChartPoint], viewport: &Viewport) -> Vec<(f64, f64)> {
    let max = scale_max(points);
    let slot = slot_width(points.len(), viewport);

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = viewport.pad_left + slot * i as f64 + slot / 2.0;
            (x, scale_y(point.value, max, viewport))
        })
        .collect()
}

/// `points` attribute of an SVG `<polyline>`.
pub fn polyline_points(vertices: &[(f64, f64)]) -> String {
    vertices
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed polygon under the line, for the gradient fill.
pub fn area_points(vertices: &[(f64, f64)], viewport: &Viewport) -> String {
    match (vertices.first(), vertices.last()) {
        (Some(&(first_x, _)), Some(&(last_x, _))) => {
            let base = viewport.baseline();
            let mut closed = vertices.to_vec();
            closed.push((last_x, base));
            closed.push((first_x, base));
            polyline_points(&closed)
        }
        _ => String::new(),
    }
}

/// Horizontal gridlines at quarters of the scale.
pub fn grid_lines(points: &[ChartPoint], viewport: &Viewport) -> Vec<GridLine> {
    let max = scale_max(points);
    (0..=4)
        .map(|step| {
            let value = max * step as f64 / 4.0;
            GridLine {
                y: scale_y(value, max, viewport),
                label: format!("{value:.0}"),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[f64]) -> Vec<ChartPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| ChartPoint {
                label: format!("D{i}"),
                value: *v,
            })
            .collect()
    }

    const VIEW: Viewport = Viewport::new(440.0, 224.0);

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(9800.0), 10000.0);
        assert_eq!(nice_ceiling(180.0), 200.0);
        assert_eq!(nice_ceiling(45.0), 50.0);
        assert_eq!(nice_ceiling(100.0), 100.0);
        assert_eq!(nice_ceiling(0.0), 1.0);
    }

    #[test]
    fn test_bars_fill_slots_and_scale() {
        let bars = bar_layout(&points(&[5000.0, 10000.0]), &VIEW);
        assert_eq!(bars.len(), 2);

        // plot is 400 wide, so each slot is 200 and each bar 120
        assert!((bars[0].width - 120.0).abs() < 1e-9);
        assert!((bars[0].x - 80.0).abs() < 1e-9);
        assert!((bars[1].label_x - 340.0).abs() < 1e-9);

        // tallest bar spans the full plot height
        assert!((bars[1].height - 200.0).abs() < 1e-9);
        assert!((bars[0].height - 100.0).abs() < 1e-9);
        assert!((bars[1].y).abs() < 1e-9);
    }

    #[test]
    fn test_empty_series() {
        assert!(bar_layout(&[], &VIEW).is_empty());
        assert!(line_vertices(&[], &VIEW).is_empty());
        assert_eq!(area_points(&[], &VIEW), "");
    }

    #[test]
    fn test_polyline_and_area() {
        let vertices = line_vertices(&points(&[0.0, 50.0]), &VIEW);
        assert_eq!(polyline_points(&vertices), "140.0,200.0 340.0,0.0");
        assert_eq!(
            area_points(&vertices, &VIEW),
            "140.0,200.0 340.0,0.0 340.0,200.0 140.0,200.0"
        );
    }

    #[test]
    fn test_grid_lines() {
        let lines = grid_lines(&points(&[9800.0]), &VIEW);
        let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "2500", "5000", "7500", "10000"]);
        assert!((lines[0].y - 200.0).abs() < 1e-9);
        assert!((lines[4].y).abs() < 1e-9);
    }
}
