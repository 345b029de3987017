//! Inline SVG line chart of daily BMI points with band reference lines.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{
    BMI_OBESE_LIMIT, BMI_OVERWEIGHT_LIMIT, BMI_UNDERWEIGHT_LIMIT, COLOR_BMI_OBESE, COLOR_BMI_OVERWEIGHT,
    COLOR_BMI_UNDERWEIGHT, COLOR_CHART_GRID, COLOR_CHART_LINE, CSS_CARD, CSS_EMPTY_STATE,
};
use crate::dom_utils;
use crate::metrics::{daily_points, DailyPoint};
use crate::models::BmiRecord;
use crate::utils::{escape_html, format_decimal};

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const PAD_LEFT: f64 = 40.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 32.0;

const REFERENCE_LINES: [(f64, &str); 3] = [
    (BMI_UNDERWEIGHT_LIMIT, COLOR_BMI_UNDERWEIGHT),
    (BMI_OVERWEIGHT_LIMIT, COLOR_BMI_OVERWEIGHT),
    (BMI_OBESE_LIMIT, COLOR_BMI_OBESE),
];

/// Y range covering the data with one unit of headroom each side.
fn y_domain(points: &[DailyPoint]) -> (f64, f64) {
    let (lo, hi) = points.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p.bmi), hi.max(p.bmi)));
    ((lo - 1.0).floor(), (hi + 1.0).ceil())
}

/// SVG markup for the points. `None` when there is nothing to plot.
pub fn chart_svg(points: &[DailyPoint]) -> Option<String> {
    if points.is_empty() {
        return None;
    }

    let (y_min, y_max) = y_domain(points);
    let plot_w = WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_h = HEIGHT - PAD_TOP - PAD_BOTTOM;

    let x_at = |i: usize| -> f64 {
        if points.len() == 1 {
            PAD_LEFT + plot_w / 2.0
        } else {
            PAD_LEFT + plot_w * i as f64 / (points.len() - 1) as f64
        }
    };
    let y_at = |v: f64| -> f64 { PAD_TOP + plot_h * (y_max - v) / (y_max - y_min) };

    let mut svg = format!(
        r##"<svg class="bmi-chart" viewBox="0 0 {w} {h}" role="img" aria-label="Evolução do IMC">"##,
        w = WIDTH,
        h = HEIGHT
    );

    // Horizontal grid with y labels at the domain ends.
    for v in [y_min, (y_min + y_max) / 2.0, y_max] {
        let y = y_at(v);
        svg.push_str(&format!(
            r##"<line x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="{c}" stroke-width="1"/><text x="{tx:.1}" y="{ty:.1}" font-size="11" text-anchor="end" fill="#64748b">{label}</text>"##,
            x1 = PAD_LEFT,
            x2 = WIDTH - PAD_RIGHT,
            c = COLOR_CHART_GRID,
            tx = PAD_LEFT - 6.0,
            ty = y + 4.0,
            label = format_decimal(v, 1),
        ));
    }

    for (limit, color) in REFERENCE_LINES {
        if limit > y_min && limit < y_max {
            let y = y_at(limit);
            svg.push_str(&format!(
                r##"<line class="bmi-reference" x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="{color}" stroke-dasharray="2 2"/>"##,
                x1 = PAD_LEFT,
                x2 = WIDTH - PAD_RIGHT,
            ));
        }
    }

    let path: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", x_at(i), y_at(p.bmi)))
        .collect();
    svg.push_str(&format!(
        r##"<polyline fill="none" stroke="{}" stroke-width="2" points="{}"/>"##,
        COLOR_CHART_LINE,
        path.join(" ")
    ));

    for (i, p) in points.iter().enumerate() {
        let (x, y) = (x_at(i), y_at(p.bmi));
        svg.push_str(&format!(
            r##"<circle cx="{x:.1}" cy="{y:.1}" r="4" fill="{c}"><title>{label}: {v}</title></circle><text x="{x:.1}" y="{ly:.1}" font-size="11" text-anchor="middle" fill="#64748b">{label}</text>"##,
            c = COLOR_CHART_LINE,
            label = escape_html(&p.label),
            v = format_decimal(p.bmi, 1),
            ly = HEIGHT - 10.0,
        ));
    }

    svg.push_str("</svg>");
    Some(svg)
}

/// Card with the chart, or an empty-state line when there is no history.
pub fn render(document: &Document, history: &[BmiRecord]) -> Result<Element, JsValue> {
    let card = dom_utils::element(document, "section", CSS_CARD, None)?;
    dom_utils::append(&card, dom_utils::element(document, "h3", "", Some("Evolução do IMC"))?)?;

    match chart_svg(&daily_points(history)) {
        Some(svg) => {
            let holder = dom_utils::element(document, "div", "chart-holder", None)?;
            holder.set_inner_html(&svg);
            card.append_child(&holder)?;
        }
        None => {
            dom_utils::append(&card, dom_utils::element(
                document,
                "p",
                CSS_EMPTY_STATE,
                Some("Nenhum registro de IMC ainda. Calcule seu primeiro IMC!"),
            )?)?;
        }
    }
    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(day: u32, bmi: f64) -> DailyPoint {
        DailyPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            label: format!("{} de jan.", day),
            bmi,
        }
    }

    #[test]
    fn empty_history_has_no_chart() {
        assert!(chart_svg(&[]).is_none());
    }

    #[test]
    fn one_marker_per_point() {
        let svg = chart_svg(&[point(1, 24.0), point(2, 23.2), point(3, 22.9)]).unwrap();
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("2 de jan."));
    }

    #[test]
    fn reference_lines_only_inside_the_domain() {
        // Domain 21..26 contains 25 but neither 18.5 nor 30.
        let svg = chart_svg(&[point(1, 22.0), point(2, 24.6)]).unwrap();
        assert_eq!(svg.matches("bmi-reference").count(), 1);
        assert!(svg.contains(COLOR_BMI_OVERWEIGHT));

        let svg = chart_svg(&[point(1, 17.0), point(2, 31.0)]).unwrap();
        assert_eq!(svg.matches("bmi-reference").count(), 3);
    }

    #[test]
    fn single_point_is_centered() {
        let svg = chart_svg(&[point(5, 22.0)]).unwrap();
        let center = format!("cx=\"{:.1}\"", PAD_LEFT + (WIDTH - PAD_LEFT - PAD_RIGHT) / 2.0);
        assert!(svg.contains(&center));
    }
}
