use std::f64::consts::PI;

use yew::prelude::*;

use crate::format_amount;
use crate::summary::ChartSlice;

const VIEW_SIZE: f64 = 200.0;
const RADIUS: f64 = 90.0;

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub slices: Vec<ChartSlice>,
}

/// Pie chart drawn as inline SVG: one circular sector per slice, plus a
/// legend. Slices start at 12 o'clock and run clockwise.
#[function_component(PieChart)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    let total: f64 = props.slices.iter().map(|s| s.amount).sum();
    if total <= 0.0 {
        return html! {};
    }

    let center = VIEW_SIZE / 2.0;
    let mut start = -PI / 2.0;
    let mut sectors: Vec<Html> = Vec::new();
    for slice in &props.slices {
        let sweep = slice.amount / total * 2.0 * PI;
        if sweep >= 2.0 * PI - 1e-9 {
            // a lone slice is a full disc, which an arc path cannot express
            sectors.push(html! {
                <circle cx={center.to_string()} cy={center.to_string()} r={RADIUS.to_string()} fill={slice.color} />
            });
        } else {
            sectors.push(html! {
                <path d={sector_path(center, center, RADIUS, start, start + sweep)} fill={slice.color} stroke="#ffffff" stroke-width="1" />
            });
        }
        start += sweep;
    }

    html! {
        <div class="flex flex-col items-center gap-4">
            <svg viewBox={format!("0 0 {} {}", VIEW_SIZE, VIEW_SIZE)} class="w-56 h-56">
                { for sectors }
            </svg>
            <ul class="space-y-1">
                { for props.slices.iter().map(|slice| html! {
                    <li class="flex items-center gap-2 text-sm">
                        <span class="w-3 h-3 rounded-sm inline-block" style={format!("background-color: {}", slice.color)}></span>
                        <span class="text-slate-500">{ slice.category.code() }</span>
                        <span class="font-semibold text-slate-700">{ format_amount(slice.amount) }</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}

fn point_on(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

fn sector_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let (x0, y0) = point_on(cx, cy, r, start);
    let (x1, y1) = point_on(cx, cy, r, end);
    let large_arc = if end - start > PI { 1 } else { 0 };
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z",
        cx, cy, x0, y0, r, r, large_arc, x1, y1
    )
}
