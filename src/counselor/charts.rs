use log::warn;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::components::variant::Accent;
use crate::data::{SkillTrend, CAREERS, SKILL_TRENDS};
use crate::error::ChartError;

const CANVAS_WIDTH: u32 = 600;
const CANVAS_HEIGHT: u32 = 320;

// Each skill takes three x slots: previous, current, gap.
const TREND_GROUP: usize = 3;

/// Top of the y axis: the largest value plus ten percent headroom.
fn y_ceiling(values: impl Iterator<Item = u32>) -> u32 {
    let max = values.max().unwrap_or(0);
    (max + max / 10).max(10)
}

/// `(x slot, value, colour)` for every bar of the trend chart.
fn trend_bars(trends: &[SkillTrend]) -> Vec<(usize, u32, Accent)> {
    trends
        .iter()
        .enumerate()
        .flat_map(|(i, trend)| {
            let x = i * TREND_GROUP;
            [
                (x, trend.previous, Accent::Gray),
                (x + 1, trend.current, Accent::Emerald),
            ]
        })
        .collect()
}

fn prepare_canvas(node: &NodeRef) -> Result<HtmlCanvasElement, ChartError> {
    let canvas = node
        .cast::<HtmlCanvasElement>()
        .ok_or(ChartError::CanvasMissing)?;
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);
    Ok(canvas)
}

fn draw_match_bars(canvas: HtmlCanvasElement, data: &[(&str, u32)]) -> Result<(), ChartError> {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or(ChartError::CanvasMissing)?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(ChartError::draw)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Career match (%)", ("sans-serif", 18))
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0..data.len(), 0..y_ceiling(data.iter().map(|(_, v)| *v)))
        .map_err(ChartError::draw)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(data.len())
        .x_label_formatter(&|x| {
            data.get(*x)
                .map(|(name, _)| name.to_string())
                .unwrap_or_default()
        })
        .draw()
        .map_err(ChartError::draw)?;

    let color = Accent::Emerald.chart_color();
    chart
        .draw_series(data.iter().enumerate().map(|(i, (_, value))| {
            Rectangle::new([(i, 0), (i + 1, *value)], color.filled())
        }))
        .map_err(ChartError::draw)?;

    root.present().map_err(ChartError::draw)
}

fn draw_trend_bars(canvas: HtmlCanvasElement, trends: &[SkillTrend]) -> Result<(), ChartError> {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or(ChartError::CanvasMissing)?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(ChartError::draw)?;

    let slots = trends.len() * TREND_GROUP;
    let ceiling = y_ceiling(trends.iter().flat_map(|t| [t.current, t.previous]));
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Skill demand: last year vs now", ("sans-serif", 18))
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0..slots, 0..ceiling)
        .map_err(ChartError::draw)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&|x| {
            if x % TREND_GROUP == 1 {
                trends
                    .get(x / TREND_GROUP)
                    .map(|t| t.name.to_string())
                    .unwrap_or_default()
            } else {
                String::new()
            }
        })
        .draw()
        .map_err(ChartError::draw)?;

    chart
        .draw_series(trend_bars(trends).into_iter().map(|(x, value, accent)| {
            Rectangle::new([(x, 0), (x + 1, value)], accent.chart_color().filled())
        }))
        .map_err(ChartError::draw)?;

    root.present().map_err(ChartError::draw)
}

#[function_component(CareerMatchChart)]
pub fn career_match_chart() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let data: Vec<(&str, u32)> = CAREERS.iter().map(|c| (c.title, c.match_pct)).collect();
                if let Err(err) = prepare_canvas(&canvas_ref).and_then(|c| draw_match_bars(c, &data)) {
                    warn!("career match chart skipped: {}", err);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="card chart">
            <h3>{"Career match"}</h3>
            <canvas ref={canvas_ref} width="600" height="320" style="max-width: 100%;" />
        </div>
    }
}

#[function_component(SkillTrendsChart)]
pub fn skill_trends_chart() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Err(err) = prepare_canvas(&canvas_ref).and_then(|c| draw_trend_bars(c, SKILL_TRENDS)) {
                    warn!("skill trends chart skipped: {}", err);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="card chart">
            <h3>{"Skill trends"}</h3>
            <canvas ref={canvas_ref} width="600" height="320" style="max-width: 100%;" />
            <div class="chart-legend">
                <span><i class={Accent::Gray.fill_class()}></i>{"Last year"}</span>
                <span><i class={Accent::Emerald.fill_class()}></i>{"Now"}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_adds_headroom() {
        assert_eq!(y_ceiling([91, 76, 62].into_iter()), 100);
        assert_eq!(y_ceiling([50].into_iter()), 55);
    }

    #[test]
    fn ceiling_has_a_floor_for_empty_data() {
        assert_eq!(y_ceiling(std::iter::empty()), 10);
    }

    #[test]
    fn trend_bars_pair_previous_then_current_per_skill() {
        let bars = trend_bars(SKILL_TRENDS);
        assert_eq!(bars.len(), SKILL_TRENDS.len() * 2);
        for (i, trend) in SKILL_TRENDS.iter().enumerate() {
            assert_eq!(bars[2 * i], (i * TREND_GROUP, trend.previous, Accent::Gray));
            assert_eq!(bars[2 * i + 1], (i * TREND_GROUP + 1, trend.current, Accent::Emerald));
        }
    }
}
