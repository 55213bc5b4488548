use dioxus::prelude::*;

/// Month-over-month change shown under a stat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub value: f64,
    pub is_positive: bool,
}

impl Trend {
    pub fn up(value: f64) -> Self {
        Self {
            value,
            is_positive: true,
        }
    }

    pub fn down(value: f64) -> Self {
        Self {
            value,
            is_positive: false,
        }
    }
}

pub fn format_trend(trend: Trend) -> String {
    if trend.is_positive {
        format!("↗ +{}%", trend.value)
    } else {
        format!("↘ {}%", trend.value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsVariant {
    #[default]
    Default,
    Gradient,
    Elevated,
}

impl StatsVariant {
    fn class(self) -> &'static str {
        match self {
            StatsVariant::Default => "card stats-card",
            StatsVariant::Gradient => "card stats-card stats-card-gradient",
            StatsVariant::Elevated => "card stats-card stats-card-elevated",
        }
    }
}

#[component]
pub fn StatsCard(
    #[props(into)] title: String,
    #[props(into)] value: String,
    #[props(into, default)] description: String,
    #[props(into, default)] icon: String,
    trend: Option<Trend>,
    #[props(default)] variant: StatsVariant,
) -> Element {
    rsx! {
        div { class: variant.class(),
            div { class: "stats-card-header",
                span { class: "stats-card-title", "{title}" }
                if !icon.is_empty() {
                    span { class: "stats-card-icon", "{icon}" }
                }
            }
            div { class: "stats-card-value", "{value}" }
            if !description.is_empty() {
                p { class: "stats-card-desc", "{description}" }
            }
            if let Some(trend) = trend {
                div { class: "stats-card-trend",
                    span { class: if trend.is_positive { "trend trend-up" } else { "trend trend-down" },
                        "{format_trend(trend)}"
                    }
                    span { class: "text-muted text-sm", "from last month" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_formatting() {
        assert_eq!(format_trend(Trend::up(12.0)), "↗ +12%");
        assert_eq!(format_trend(Trend::down(3.0)), "↘ 3%");
        assert_eq!(format_trend(Trend::up(2.5)), "↗ +2.5%");
    }
}
