use std::fmt::Write;

use v_htmlescape::escape;

use crate::analysis::Histogram;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 240.0;
const PAD_LEFT: f64 = 10.0;
const PAD_BOTTOM: f64 = 24.0;
const PAD_TOP: f64 = 10.0;

fn plot_height() -> f64 {
    HEIGHT - PAD_BOTTOM - PAD_TOP
}

fn svg_open(out: &mut String) {
    let _ = write!(
        out,
        r##"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" width="100%" role="img">"##
    );
}

fn max_value(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, f64::max)
}

/// Evenly spaced polyline with one labelled point per entry.
pub fn line_chart(points: &[(String, f64)]) -> String {
    if points.is_empty() {
        return r#"<p class="empty">No data to chart.</p>"#.to_string();
    }
    let max = max_value(points.iter().map(|(_, v)| *v));
    if max <= 0.0 {
        return r#"<p class="empty">No positive values to chart.</p>"#.to_string();
    }

    let step = (WIDTH - 2.0 * PAD_LEFT) / points.len() as f64;
    let mut coords = String::new();
    let mut labels = String::new();
    for (i, (label, value)) in points.iter().enumerate() {
        let x = PAD_LEFT + step * (i as f64 + 0.5);
        let y = PAD_TOP + plot_height() * (1.0 - (value.max(0.0) / max));
        let _ = write!(coords, "{x:.1},{y:.1} ");
        let _ = write!(
            labels,
            r##"<text x="{x:.1}" y="{ly:.1}" font-size="11" fill="#94a3b8" text-anchor="middle">{text}</text>"##,
            ly = HEIGHT - 6.0,
            text = escape(label),
        );
    }

    let mut out = String::new();
    svg_open(&mut out);
    let _ = write!(
        out,
        r##"<polyline points="{points}" fill="none" stroke="#38bdf8" stroke-width="2"/>"##,
        points = coords.trim_end(),
    );
    out.push_str(&labels);
    out.push_str("</svg>");
    out
}

/// Vertical bars with one labelled bar per entry.
pub fn bar_chart(bars: &[(String, f64)]) -> String {
    if bars.is_empty() {
        return r#"<p class="empty">No data to chart.</p>"#.to_string();
    }
    let max = max_value(bars.iter().map(|(_, v)| *v));
    if max <= 0.0 {
        return r#"<p class="empty">No positive values to chart.</p>"#.to_string();
    }

    let step = (WIDTH - 2.0 * PAD_LEFT) / bars.len() as f64;
    let bar_width = step * 0.7;
    let mut out = String::new();
    svg_open(&mut out);
    for (i, (label, value)) in bars.iter().enumerate() {
        let height = plot_height() * (value.max(0.0) / max);
        let x = PAD_LEFT + step * i as f64 + (step - bar_width) / 2.0;
        let y = PAD_TOP + plot_height() - height;
        let _ = write!(
            out,
            r##"<rect x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{height:.1}" rx="3" fill="#38bdf8"/>"##,
        );
        let _ = write!(
            out,
            r##"<text x="{cx:.1}" y="{ly:.1}" font-size="11" fill="#94a3b8" text-anchor="middle">{text}</text>"##,
            cx = x + bar_width / 2.0,
            ly = HEIGHT - 6.0,
            text = escape(label),
        );
    }
    out.push_str("</svg>");
    out
}

/// Histogram bars without gaps, labelled at the range edges.
pub fn histogram(histogram: &Histogram) -> String {
    if histogram.counts.is_empty() {
        return r#"<p class="empty">No rows in the selected range.</p>"#.to_string();
    }
    let max = max_value(histogram.counts.iter().map(|c| *c as f64));
    if max <= 0.0 {
        return r#"<p class="empty">No rows in the selected range.</p>"#.to_string();
    }

    let step = (WIDTH - 2.0 * PAD_LEFT) / histogram.counts.len() as f64;
    let mut out = String::new();
    svg_open(&mut out);
    for (i, count) in histogram.counts.iter().enumerate() {
        let height = plot_height() * (*count as f64 / max);
        let x = PAD_LEFT + step * i as f64;
        let y = PAD_TOP + plot_height() - height;
        let _ = write!(
            out,
            r##"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{height:.1}" fill="#38bdf8" stroke="#0f172a"/>"##,
            w = step,
        );
    }
    let _ = write!(
        out,
        r##"<text x="{PAD_LEFT}" y="{ly:.1}" font-size="11" fill="#94a3b8">{lo:.0}</text>"##,
        ly = HEIGHT - 6.0,
        lo = histogram.lo,
    );
    let _ = write!(
        out,
        r##"<text x="{rx:.1}" y="{ly:.1}" font-size="11" fill="#94a3b8" text-anchor="end">{hi:.0}</text>"##,
        rx = WIDTH - PAD_LEFT,
        ly = HEIGHT - 6.0,
        hi = histogram.hi,
    );
    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_render_an_empty_note() {
        assert!(line_chart(&[]).contains("No data"));
        assert!(bar_chart(&[]).contains("No data"));
    }

    #[test]
    fn bar_chart_renders_one_rect_per_bar() {
        let html = bar_chart(&[("A".into(), 10.0), ("B".into(), 5.0)]);
        assert_eq!(html.matches("<rect").count(), 2);
        assert!(html.contains(">A</text>"));
    }

    #[test]
    fn line_chart_labels_every_point() {
        let html = line_chart(&[("1".into(), 3.0), ("2".into(), 6.0), ("3".into(), 1.0)]);
        assert_eq!(html.matches("<text").count(), 3);
        assert!(html.contains("<polyline"));
    }

    #[test]
    fn histogram_renders_one_rect_per_bin() {
        let hist = Histogram::from_values(&[1.0, 2.0, 3.0, 4.0], 4);
        let html = histogram(&hist);
        assert_eq!(html.matches("<rect").count(), 4);
    }
}
