use dioxus::prelude::*;
use jiff::civil::Time;

const MINUTE_STEP: u8 = 5;

/// Converts a 12-hour clock hour (1..=12) to 0..=23.
pub fn to_24h(hour: u8, is_am: bool) -> u8 {
    match (hour % 12, is_am) {
        (h, true) => h,
        (h, false) => h + 12,
    }
}

/// Converts 0..=23 to a 12-hour clock hour and an AM flag.
pub fn from_24h(hour: u8) -> (u8, bool) {
    let is_am = hour < 12;
    match hour % 12 {
        0 => (12, is_am),
        h => (h, is_am),
    }
}

pub fn clock_time(hour: u8, minute: u8, is_am: bool) -> Option<Time> {
    Time::new(to_24h(hour, is_am) as i8, minute as i8, 0, 0).ok()
}

pub fn format_time(time: Time) -> String {
    time.strftime("%I:%M %p").to_string()
}

#[component]
pub fn TimePicker(value: Option<Time>, on_change: EventHandler<Option<Time>>) -> Element {
    let (initial_hour, initial_am) = value.map(|t| from_24h(t.hour() as u8)).unwrap_or((12, true));
    let initial_minute = value.map(|t| t.minute() as u8).unwrap_or(0);
    let mut hour = use_signal(|| initial_hour);
    let mut minute = use_signal(|| initial_minute);
    let mut is_am = use_signal(|| initial_am);

    let preview = clock_time(hour(), minute(), is_am())
        .map(format_time)
        .unwrap_or_default();

    rsx! {
        div { class: "time-picker",
            div { class: "time-picker-preview", "{preview}" }
            div { class: "time-picker-columns",
                div { class: "time-picker-column",
                    for h in 1..=12u8 {
                        button {
                            key: "{h}",
                            class: if h == hour() { "time-option selected" } else { "time-option" },
                            onclick: move |_| hour.set(h),
                            "{h:02}"
                        }
                    }
                }
                div { class: "time-picker-column",
                    for m in (0..60u8).step_by(MINUTE_STEP as usize) {
                        button {
                            key: "{m}",
                            class: if m == minute() { "time-option selected" } else { "time-option" },
                            onclick: move |_| minute.set(m),
                            "{m:02}"
                        }
                    }
                }
                div { class: "time-picker-column",
                    button {
                        class: if is_am() { "time-option selected" } else { "time-option" },
                        onclick: move |_| is_am.set(true),
                        "AM"
                    }
                    button {
                        class: if !is_am() { "time-option selected" } else { "time-option" },
                        onclick: move |_| is_am.set(false),
                        "PM"
                    }
                }
            }
            div { class: "time-picker-footer",
                button {
                    class: "btn btn-sm btn-secondary",
                    onclick: move |_| on_change.call(None),
                    "Clear"
                }
                button {
                    class: "btn btn-sm btn-primary",
                    onclick: move |_| on_change.call(clock_time(hour(), minute(), is_am())),
                    "Set Time"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_hour_edges() {
        assert_eq!(to_24h(12, true), 0);
        assert_eq!(to_24h(12, false), 12);
        assert_eq!(to_24h(1, false), 13);
        assert_eq!(to_24h(11, true), 11);
    }

    #[test]
    fn conversions_round_trip_every_hour() {
        for hour in 0..24 {
            let (h, am) = from_24h(hour);
            assert!((1..=12).contains(&h));
            assert_eq!(to_24h(h, am), hour);
        }
    }

    #[test]
    fn formats_as_twelve_hour_clock() {
        let time = clock_time(2, 30, false).unwrap();
        assert_eq!(time, Time::new(14, 30, 0, 0).unwrap());
        assert_eq!(format_time(time), "02:30 PM");
        assert_eq!(format_time(clock_time(12, 5, true).unwrap()), "12:05 AM");
    }
}
