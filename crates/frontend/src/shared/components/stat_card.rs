use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual tone of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Error,
}

impl CardTone {
    fn class(&self) -> &'static str {
        match self {
            CardTone::Neutral => "stat-card",
            CardTone::Success => "stat-card stat-card--success",
            CardTone::Warning => "stat-card stat-card--warning",
            CardTone::Error => "stat-card stat-card--error",
        }
    }
}

/// Arrow and modifier for a trend percentage; changes under half a point are flat.
pub fn trend_marker(pct: f64) -> (&'static str, &'static str) {
    if pct > 0.5 {
        ("\u{2191}", "stat-card__change stat-card__change--up")
    } else if pct < -0.5 {
        ("\u{2193}", "stat-card__change stat-card__change--down")
    } else {
        ("", "stat-card__change stat-card__change--flat")
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    tone: CardTone,
    /// Change % relative to the previous period
    #[prop(into, optional)]
    change_percent: Signal<Option<f64>>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let change_view = move || {
        change_percent.get().map(|pct| {
            let (arrow, cls) = trend_marker(pct);
            let text = format!("{}{:.1}%", arrow, pct.abs());
            view! { <span class=cls>{text}</span> }
        })
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get()}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_marker() {
        assert_eq!(trend_marker(12.0).0, "\u{2191}");
        assert_eq!(trend_marker(-3.0).0, "\u{2193}");
        assert_eq!(trend_marker(0.2).0, "");
    }
}
