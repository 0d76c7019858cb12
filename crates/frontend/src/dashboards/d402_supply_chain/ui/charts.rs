use contracts::dashboards::d402_supply_chain::{BoxGroup, BoxPlotSpec, LineChartSpec};
use leptos::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 48.0;
const Y_TICKS: usize = 5;

/// Линейное отображение значения из домена в пиксели
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Min/max of the values widened by 5% on each side; a flat series gets ±1.
pub fn padded_domain<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;
    if lo == hi {
        return Some((lo - 1.0, hi + 1.0));
    }
    let pad = (hi - lo) * 0.05;
    Some((lo - pad, hi + pad))
}

/// Round tick values (steps of 1, 2 or 5 times a power of ten) inside `[lo, hi]`.
pub fn nice_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    if hi <= lo || count == 0 {
        return Vec::new();
    }
    let raw = (hi - lo) / count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);

    let mut ticks = Vec::new();
    let mut tick = (lo / step).ceil() * step;
    while tick <= hi + step * 1e-9 {
        ticks.push(tick);
        tick += step;
    }
    ticks
}

/// SVG path data through the given pixel points
pub fn polyline_path(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{}{:.1},{:.1}", cmd, x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn px(v: f64) -> String {
    format!("{:.1}", v)
}

fn tick_label(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

fn y_scale(domain: (f64, f64)) -> LinearScale {
    LinearScale::new(domain, (HEIGHT - MARGIN_BOTTOM, MARGIN_TOP))
}

fn y_axis(scale: LinearScale, domain: (f64, f64), label: String) -> impl IntoView {
    let ticks = nice_ticks(domain.0, domain.1, Y_TICKS);
    let mid = (MARGIN_TOP + HEIGHT - MARGIN_BOTTOM) / 2.0;
    view! {
        <g class="chart__axis">
            <line
                x1=px(MARGIN_LEFT) y1=px(MARGIN_TOP)
                x2=px(MARGIN_LEFT) y2=px(HEIGHT - MARGIN_BOTTOM)
            />
            {ticks.into_iter().map(|t| {
                let y = scale.map(t);
                view! {
                    <line class="chart__grid" x1=px(MARGIN_LEFT) y1=px(y) x2=px(WIDTH - MARGIN_RIGHT) y2=px(y) />
                    <text x=px(MARGIN_LEFT - 6.0) y=px(y + 4.0) text-anchor="end">{tick_label(t)}</text>
                }
            }).collect_view()}
            <text
                class="chart__axis-label"
                text-anchor="middle"
                transform=format!("translate(14,{}) rotate(-90)", px(mid))
            >
                {label}
            </text>
        </g>
    }
}

fn empty_chart(title: String) -> AnyView {
    view! {
        <div class="chart">
            <div class="chart__title">{title}</div>
            <div class="chart__empty">"No data for the selected regions"</div>
        </div>
    }
    .into_any()
}

/// Delivery time over the date range
#[component]
pub fn LineChart(spec: LineChartSpec) -> impl IntoView {
    let LineChartSpec {
        title,
        x_label,
        y_label,
        points,
    } = spec;

    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return empty_chart(title);
    };
    let Some(y_domain) = padded_domain(points.iter().map(|p| p.value)) else {
        return empty_chart(title);
    };

    let first_date = first.date;
    let span = (last.date - first_date).num_days() as f64;
    let x = LinearScale::new((0.0, span), (MARGIN_LEFT, WIDTH - MARGIN_RIGHT));
    let y = y_scale(y_domain);

    let pixels: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (x.map((p.date - first_date).num_days() as f64), y.map(p.value)))
        .collect();
    let path = polyline_path(&pixels);

    let mut x_ticks = vec![first.date, last.date];
    if points.len() > 2 {
        x_ticks.insert(1, points[points.len() / 2].date);
    }
    x_ticks.dedup();

    let bottom = HEIGHT - MARGIN_BOTTOM;
    view! {
        <div class="chart">
            <div class="chart__title">{title}</div>
            <svg class="chart__svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="xMidYMid meet">
                {y_axis(y, y_domain, y_label)}
                <g class="chart__axis">
                    <line x1=px(MARGIN_LEFT) y1=px(bottom) x2=px(WIDTH - MARGIN_RIGHT) y2=px(bottom) />
                    {x_ticks.into_iter().map(|d| {
                        let tx = x.map((d - first_date).num_days() as f64);
                        view! {
                            <text x=px(tx) y=px(bottom + 18.0) text-anchor="middle">
                                {d.format("%Y-%m-%d").to_string()}
                            </text>
                        }
                    }).collect_view()}
                    <text class="chart__axis-label" x=px((MARGIN_LEFT + WIDTH - MARGIN_RIGHT) / 2.0) y=px(HEIGHT - 6.0) text-anchor="middle">
                        {x_label}
                    </text>
                </g>
                <path class="chart__line" d=path fill="none" />
            </svg>
        </div>
    }
    .into_any()
}

fn box_glyph(group: BoxGroup, center: f64, half_width: f64, y: LinearScale) -> impl IntoView {
    let s = group.stats;
    let left = center - half_width;
    let top = y.map(s.q3);
    let height = (y.map(s.q1) - top).max(1.0);
    view! {
        <g class="chart__box">
            <line x1=px(center) y1=px(y.map(s.upper_fence)) x2=px(center) y2=px(top) />
            <line x1=px(center) y1=px(y.map(s.q1)) x2=px(center) y2=px(y.map(s.lower_fence)) />
            <line x1=px(center - half_width / 2.0) y1=px(y.map(s.upper_fence)) x2=px(center + half_width / 2.0) y2=px(y.map(s.upper_fence)) />
            <line x1=px(center - half_width / 2.0) y1=px(y.map(s.lower_fence)) x2=px(center + half_width / 2.0) y2=px(y.map(s.lower_fence)) />
            <rect x=px(left) y=px(top) width=px(half_width * 2.0) height=px(height) />
            <line class="chart__median" x1=px(left) y1=px(y.map(s.median)) x2=px(left + half_width * 2.0) y2=px(y.map(s.median)) />
            {s.outliers.into_iter().map(|o| view! {
                <circle class="chart__outlier" cx=px(center) cy=px(y.map(o)) r="3" />
            }).collect_view()}
        </g>
    }
}

/// Delivery time distribution per region
#[component]
pub fn BoxPlot(spec: BoxPlotSpec) -> impl IntoView {
    let BoxPlotSpec {
        title,
        x_label,
        y_label,
        groups,
    } = spec;

    let Some(y_domain) = padded_domain(
        groups
            .iter()
            .flat_map(|g| [g.stats.min, g.stats.max]),
    ) else {
        return empty_chart(title);
    };
    let y = y_scale(y_domain);

    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let slot = plot_width / groups.len() as f64;
    let half_width = (slot * 0.3).min(40.0);
    let bottom = HEIGHT - MARGIN_BOTTOM;

    view! {
        <div class="chart">
            <div class="chart__title">{title}</div>
            <svg class="chart__svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="xMidYMid meet">
                {y_axis(y, y_domain, y_label)}
                <g class="chart__axis">
                    <line x1=px(MARGIN_LEFT) y1=px(bottom) x2=px(WIDTH - MARGIN_RIGHT) y2=px(bottom) />
                    <text class="chart__axis-label" x=px(MARGIN_LEFT + plot_width / 2.0) y=px(HEIGHT - 6.0) text-anchor="middle">
                        {x_label}
                    </text>
                </g>
                {groups.into_iter().enumerate().map(|(i, group)| {
                    let center = MARGIN_LEFT + slot * (i as f64 + 0.5);
                    let region = group.region.code();
                    view! {
                        <text class="chart__tick" x=px(center) y=px(bottom + 18.0) text-anchor="middle">{region}</text>
                        {box_glyph(group, center, half_width, y)}
                    }
                }).collect_view()}
            </svg>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let s = LinearScale::new((0.0, 10.0), (100.0, 0.0));
        assert_eq!(s.map(0.0), 100.0);
        assert_eq!(s.map(10.0), 0.0);
        assert_eq!(s.map(5.0), 50.0);

        let flat = LinearScale::new((3.0, 3.0), (0.0, 10.0));
        assert_eq!(flat.map(3.0), 5.0);
    }

    #[test]
    fn test_padded_domain() {
        assert_eq!(padded_domain(Vec::<f64>::new()), None);
        assert_eq!(padded_domain(vec![5.0]), Some((4.0, 6.0)));
        assert_eq!(padded_domain(vec![10.0, 0.0, 20.0]), Some((-1.0, 21.0)));
        assert_eq!(padded_domain(vec![f64::NAN, 2.0]), Some((1.0, 3.0)));
    }

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(13.0, 37.0, 5), vec![15.0, 20.0, 25.0, 30.0, 35.0]);
        assert!(nice_ticks(5.0, 5.0, 5).is_empty());
        assert!(nice_ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_polyline_path() {
        assert_eq!(polyline_path(&[]), "");
        assert_eq!(
            polyline_path(&[(0.0, 1.0), (2.5, 3.26)]),
            "M0.0,1.0 L2.5,3.3"
        );
    }
}
