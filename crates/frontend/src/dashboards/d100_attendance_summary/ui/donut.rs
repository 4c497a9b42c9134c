use contracts::dashboards::d100_attendance_summary::AttendanceSummary;
use leptos::prelude::*;

const PRESENT_COLOR: &str = "#4CAF50";
const ABSENT_COLOR: &str = "#F44336";
const EMPTY_COLOR: &str = "#E1E1E1";

const VIEW_SIZE: f64 = 100.0;
const OUTER_RADIUS: f64 = 45.0;
/// Inner hole as a share of the outer radius
const CUTOUT: f64 = 0.7;

/// One arc of the donut, drawn as a dashed circle stroke
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub label: &'static str,
    pub value: u32,
    pub percent: u32,
    pub color: &'static str,
    /// Stroke length of the arc
    pub length: f64,
    /// Stroke length covered by the arcs before this one
    pub offset: f64,
}

impl DonutSegment {
    pub fn legend_text(&self) -> String {
        format!("{}: {} ({}%)", self.label, self.value, self.percent)
    }
}

fn ring_radius() -> f64 {
    OUTER_RADIUS * (1.0 + CUTOUT) / 2.0
}

fn ring_width() -> f64 {
    OUTER_RADIUS * (1.0 - CUTOUT)
}

fn circumference() -> f64 {
    2.0 * std::f64::consts::PI * ring_radius()
}

/// Split the ring between present and absent
///
/// Legend entries are always returned; an empty summary gets zero-length arcs.
pub fn donut_segments(summary: &AttendanceSummary) -> Vec<DonutSegment> {
    let total = f64::from(summary.total());
    let full = circumference();
    let mut offset = 0.0;

    [
        ("Present", summary.present, summary.present_percent(), PRESENT_COLOR),
        ("Absent", summary.absent, summary.absent_percent(), ABSENT_COLOR),
    ]
    .into_iter()
    .map(|(label, value, percent, color)| {
        let length = if total > 0.0 {
            f64::from(value) / total * full
        } else {
            0.0
        };
        let segment = DonutSegment {
            label,
            value,
            percent,
            color,
            length,
            offset,
        };
        offset += length;
        segment
    })
    .collect()
}

/// Donut of present vs absent with the total in the middle
///
/// The SVG is rebuilt from scratch on every summary change.
#[component]
pub fn DonutChart(#[prop(into)] summary: Signal<AttendanceSummary>) -> impl IntoView {
    let center = (VIEW_SIZE / 2.0).to_string();
    let radius = ring_radius().to_string();
    let stroke_width = ring_width().to_string();
    let rotate = format!("rotate(-90 {} {})", VIEW_SIZE / 2.0, VIEW_SIZE / 2.0);
    let total_y = (VIEW_SIZE / 2.0 - 4.0).to_string();
    let label_y = (VIEW_SIZE / 2.0 + 8.0).to_string();
    let view_box = format!("0 0 {} {}", VIEW_SIZE, VIEW_SIZE);
    let full = circumference();

    move || {
        let current = summary.get();
        let segments = donut_segments(&current);

        let arcs = segments
            .iter()
            .filter(|s| s.length > 0.0)
            .map(|s| {
                view! {
                    <circle
                        cx=center.clone()
                        cy=center.clone()
                        r=radius.clone()
                        fill="none"
                        stroke=s.color
                        stroke-width=stroke_width.clone()
                        stroke-dasharray=format!("{} {}", s.length, full - s.length)
                        stroke-dashoffset=format!("{}", -s.offset)
                        transform=rotate.clone()
                    >
                        <title>{s.legend_text()}</title>
                    </circle>
                }
            })
            .collect_view();

        let legend = segments
            .iter()
            .map(|s| {
                view! {
                    <li class="donut-legend__item">
                        <span
                            class="donut-legend__swatch"
                            style=format!("background: {};", s.color)
                        ></span>
                        {s.legend_text()}
                    </li>
                }
            })
            .collect_view();

        view! {
            <div class="donut">
                <svg id="donut" viewBox=view_box.clone() role="img">
                    <circle
                        cx=center.clone()
                        cy=center.clone()
                        r=radius.clone()
                        fill="none"
                        stroke=EMPTY_COLOR
                        stroke-width=stroke_width.clone()
                    />
                    {arcs}
                    <text
                        x=center.clone()
                        y=total_y.clone()
                        text-anchor="middle"
                        dominant-baseline="middle"
                        style="font: bold 12px Roboto; fill: #1E1E1E;"
                    >
                        {current.total()}
                    </text>
                    <text
                        x=center.clone()
                        y=label_y.clone()
                        text-anchor="middle"
                        dominant-baseline="middle"
                        style="font: 6px Roboto; fill: #1E1E1ECC;"
                    >
                        "Total"
                    </text>
                </svg>
                <ul class="donut-legend">{legend}</ul>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_cover_whole_ring() {
        let segments = donut_segments(&AttendanceSummary::new(30, 10));
        let covered: f64 = segments.iter().map(|s| s.length).sum();
        assert!((covered - circumference()).abs() < 1e-9);
        assert_eq!(segments[1].offset, segments[0].length);
        assert_eq!(segments[0].legend_text(), "Present: 30 (75%)");
        assert_eq!(segments[1].legend_text(), "Absent: 10 (25%)");
    }

    #[test]
    fn test_empty_summary_has_no_arcs() {
        let segments = donut_segments(&AttendanceSummary::default());
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.length == 0.0));
        assert_eq!(segments[0].legend_text(), "Present: 0 (0%)");
    }

    #[test]
    fn test_ring_follows_cutout() {
        assert!((ring_radius() - ring_width() / 2.0 - OUTER_RADIUS * CUTOUT).abs() < 1e-9);
    }
}
