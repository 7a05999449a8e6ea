//! Horizontal bar chart drawn with plain divs

use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    /// Text shown at the end of the bar
    pub display: String,
}

/// Bar widths in percent of the largest value; all zero when nothing is positive.
pub fn bar_widths(values: &[f64]) -> Vec<f64> {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    values
        .iter()
        .map(|v| if max > 0.0 { (v.max(0.0) / max * 100.0).min(100.0) } else { 0.0 })
        .collect()
}

#[component]
pub fn BarChart(
    #[prop(into)]
    title: String,
    #[prop(into)]
    data: Signal<Vec<BarDatum>>,
) -> impl IntoView {
    let rows = move || {
        let data = data.get();
        if data.is_empty() {
            return view! { <div class="bar-chart__empty">"Sin datos para el período"</div> }.into_any();
        }
        let widths = bar_widths(&data.iter().map(|d| d.value).collect::<Vec<_>>());
        data.into_iter()
            .zip(widths)
            .map(|(datum, width)| {
                view! {
                    <div class="bar-chart__row">
                        <span class="bar-chart__label">{datum.label}</span>
                        <div class="bar-chart__track">
                            <div class="bar-chart__bar" style=format!("width: {:.1}%", width)></div>
                        </div>
                        <span class="bar-chart__value">{datum.display}</span>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="bar-chart">
            <h3 class="bar-chart__title">{title}</h3>
            {rows}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_widths() {
        assert_eq!(bar_widths(&[50.0, 100.0, 0.0]), vec![50.0, 100.0, 0.0]);
        assert_eq!(bar_widths(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(bar_widths(&[]).is_empty());
    }
}
