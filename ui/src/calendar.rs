use dioxus::prelude::*;
use jiff::{ToSpan, Zoned, civil::Date};

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// The layout of one month in a Sunday-first grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    first: Date,
}

impl MonthGrid {
    pub fn containing(date: Date) -> Self {
        Self {
            first: date.first_of_month(),
        }
    }

    pub fn first(&self) -> Date {
        self.first
    }

    /// Empty cells before the 1st.
    pub fn leading_blanks(&self) -> usize {
        self.first.weekday().to_sunday_zero_offset() as usize
    }

    pub fn days_in_month(&self) -> usize {
        self.first.days_in_month() as usize
    }

    /// Grid cells in reading order; `None` is a leading blank.
    pub fn cells(&self) -> Vec<Option<Date>> {
        let blanks = std::iter::repeat_n(None, self.leading_blanks());
        let days = (1..=self.first.days_in_month())
            .map(|day| Some(Date::new(self.first.year(), self.first.month(), day).unwrap_or(self.first)));
        blanks.chain(days).collect()
    }

    pub fn title(&self) -> String {
        self.first.strftime("%B %Y").to_string()
    }

    pub fn next(&self) -> Self {
        Self {
            first: self.first.checked_add(1.month()).unwrap_or(self.first),
        }
    }

    pub fn prev(&self) -> Self {
        Self {
            first: self.first.checked_sub(1.month()).unwrap_or(self.first),
        }
    }
}

pub fn today() -> Date {
    Zoned::now().date()
}

#[component]
pub fn Calendar(selected: Option<Date>, on_select: EventHandler<Date>) -> Element {
    let mut grid = use_signal(|| MonthGrid::containing(selected.unwrap_or_else(today)));
    let today = today();
    let shown = grid();

    rsx! {
        div { class: "calendar",
            div { class: "calendar-header",
                button {
                    class: "btn btn-sm btn-secondary",
                    title: "Previous month",
                    onclick: move |_| grid.set(shown.prev()),
                    "‹"
                }
                span { class: "calendar-title", "{shown.title()}" }
                button {
                    class: "btn btn-sm btn-secondary",
                    title: "Next month",
                    onclick: move |_| grid.set(shown.next()),
                    "›"
                }
            }
            div { class: "calendar-grid",
                for day in WEEKDAYS {
                    div { key: "{day}", class: "calendar-weekday", "{day}" }
                }
                for (i, cell) in shown.cells().into_iter().enumerate() {
                    {match cell {
                        None => rsx! {
                            div { key: "{i}", class: "calendar-blank" }
                        },
                        Some(date) => {
                            let mut class = String::from("calendar-day");
                            if Some(date) == selected {
                                class.push_str(" selected");
                            }
                            if date == today {
                                class.push_str(" today");
                            }
                            rsx! {
                                button {
                                    key: "{i}",
                                    class,
                                    onclick: move |_| on_select.call(date),
                                    "{date.day()}"
                                }
                            }
                        }
                    }}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn january_2024_starts_on_monday() {
        let grid = MonthGrid::containing(date(2024, 1, 17));
        assert_eq!(grid.leading_blanks(), 1);
        assert_eq!(grid.days_in_month(), 31);
        assert_eq!(grid.title(), "January 2024");
        let cells = grid.cells();
        assert_eq!(cells.len(), 32);
        assert_eq!(cells[0], None);
        assert_eq!(cells[1], Some(date(2024, 1, 1)));
    }

    #[test]
    fn leap_february() {
        let grid = MonthGrid::containing(date(2024, 2, 1));
        assert_eq!(grid.leading_blanks(), 4);
        assert_eq!(grid.days_in_month(), 29);
        assert_eq!(grid.cells().last(), Some(&Some(date(2024, 2, 29))));
    }

    #[test]
    fn months_wrap_across_years() {
        let dec = MonthGrid::containing(date(2023, 12, 31));
        assert_eq!(dec.next().first(), date(2024, 1, 1));
        assert_eq!(dec.next().prev(), dec);
    }
}
