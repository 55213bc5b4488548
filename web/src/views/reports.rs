use dioxus::prelude::*;
use jiff::civil::{Date, Time};
use tracing::info;
use types::Record;
use ui::calendar::today;
use ui::table::view::{SortConfig, SortDirection, ViewState, filter_and_sort};
use ui::time_picker::format_time;
use ui::{
    Accordion, AccordionItem, Calendar, Modal, ModalSize, SortOption, SortSelect, TimePicker, Tone,
};

use super::components::PageHeader;
use crate::data::use_store;
use crate::use_error;

#[derive(Debug, Clone, PartialEq)]
struct Schedule {
    report: String,
    when: String,
}

fn describe_schedule(date: Date, time: Time) -> String {
    format!("{} at {}", date.strftime("%b %d, %Y"), format_time(time))
}

fn default_schedules() -> Vec<Schedule> {
    vec![
        Schedule {
            report: "Weekly Sales Report".to_string(),
            when: "Every Monday at 9:00 AM".to_string(),
        },
        Schedule {
            report: "Monthly Analytics".to_string(),
            when: "1st of every month".to_string(),
        },
    ]
}

fn faq() -> Vec<AccordionItem> {
    vec![
        AccordionItem::new(
            "formats",
            "Which formats can reports be downloaded in?",
            "Reports are available as PDF and Excel files.",
        ),
        AccordionItem::new(
            "schedule",
            "How do scheduled reports work?",
            "Pick a report, a date and a time. The report is generated at that moment and listed under Recent Reports.",
        ),
        AccordionItem::new(
            "processing",
            "Why is a report still processing?",
            "Large reports such as inventory summaries can take a few minutes to generate.",
        ),
    ]
}

fn sort_options() -> Vec<SortOption> {
    vec![
        SortOption::new("name", "Name"),
        SortOption::new("lastGenerated", "Last generated"),
        SortOption::new("status", "Status"),
    ]
}

/// Display order of the report cards.
fn card_order(reports: &[Record], key: Option<String>, direction: SortDirection) -> Vec<usize> {
    let mut state = ViewState::default();
    state.set_sort(key.map(|key| SortConfig { key, direction }));
    filter_and_sort(reports, &state, &[])
}

fn status_tone(status: &str) -> Tone {
    match status {
        "Available" => Tone::Green,
        "Processing" => Tone::Yellow,
        _ => Tone::Gray,
    }
}

#[component]
pub fn Reports() -> Element {
    let store = use_store();
    let mut report_types = use_signal(|| store.fixed.read().report_types.clone());
    let recent_reports = store.fixed.read().recent_reports.clone();
    let mut schedules = use_signal(default_schedules);
    let mut show_schedule = use_signal(|| false);
    let mut sort_key = use_signal(|| None::<String>);
    let mut sort_direction = use_signal(|| SortDirection::Asc);

    let order = card_order(&report_types.read(), sort_key(), sort_direction());

    rsx! {
        div {
            PageHeader {
                title: "Reports",
                subtitle: "Generate and download various business reports and analytics.",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_schedule.set(true),
                    "📅 Schedule Report"
                }
            }

            if show_schedule() {
                ScheduleModal {
                    reports: report_types.read().iter().map(|r| r.text("name")).collect::<Vec<_>>(),
                    on_close: move |_| show_schedule.set(false),
                    on_schedule: move |schedule: Schedule| {
                        info!(report = %schedule.report, when = %schedule.when, "scheduled report");
                        schedules.write().push(schedule);
                        show_schedule.set(false);
                    },
                }
            }

            div { class: "section-toolbar",
                h2 { class: "section-title", "Report Types" }
                SortSelect {
                    options: sort_options(),
                    value: sort_key(),
                    direction: sort_direction(),
                    on_value_change: move |key: String| sort_key.set(Some(key)),
                    on_direction_change: move |direction: SortDirection| sort_direction.set(direction),
                }
            }

            div { class: "grid grid-cols-3",
                for i in order {
                    {
                        let report = report_types.read()[i].clone();
                        let status = report.text("status");
                        rsx! {
                            div { key: "{report.text(\"id\")}", class: "card report-card",
                                div { class: "report-card-header",
                                    span { class: "report-icon", "📄" }
                                    span { class: status_tone(&status).class(), span { class: "badge-dot" } "{status}" }
                                }
                                h3 { class: "card-title", "{report.text(\"name\")}" }
                                p { class: "text-muted text-sm", "{report.text(\"description\")}" }
                                p { class: "text-muted text-sm", "Last generated: {report.text(\"lastGenerated\")}" }
                                div { class: "report-card-actions",
                                    button {
                                        class: "btn btn-sm btn-primary",
                                        disabled: status == "Processing",
                                        onclick: move |_| {
                                            if let Some(record) = report_types.write().get_mut(i) {
                                                record.insert("lastGenerated", today().to_string());
                                                info!(report = %record.text("id"), "generated report");
                                            }
                                        },
                                        "Generate"
                                    }
                                    button { class: "btn btn-sm btn-secondary", title: "Download", "⬇" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Recent Reports" }
                }
                div { class: "report-list",
                    for report in recent_reports {
                        RecentReport { report }
                    }
                }
            }

            div { class: "grid grid-cols-2",
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Scheduled Reports" }
                    }
                    ul { class: "schedule-list",
                        for (i, schedule) in schedules.read().iter().enumerate() {
                            li { key: "{i}", class: "schedule-item",
                                p { "{schedule.report}" }
                                p { class: "text-muted text-sm", "{schedule.when}" }
                            }
                        }
                    }
                }
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Frequently Asked Questions" }
                    }
                    Accordion { items: faq() }
                }
            }
        }
    }
}

#[component]
fn RecentReport(report: Record) -> Element {
    rsx! {
        div { class: "report-row",
            div { class: "report-row-info",
                span { class: "report-icon", "📄" }
                div {
                    h4 { "{report.text(\"name\")}" }
                    p { class: "text-muted text-sm",
                        "{report.text(\"type\")} • Generated {report.text(\"generated\")}"
                    }
                }
            }
            div { class: "report-row-meta",
                div { class: "text-right",
                    p { class: "text-sm", "{report.text(\"size\")}" }
                    p { class: "text-muted text-sm", "{report.text(\"format\")}" }
                }
                button { class: "btn btn-sm btn-secondary", "⬇ Download" }
            }
        }
    }
}

#[component]
fn ScheduleModal(
    reports: Vec<String>,
    on_close: EventHandler<()>,
    on_schedule: EventHandler<Schedule>,
) -> Element {
    let mut error_state = use_error();
    let first = reports.first().cloned().unwrap_or_default();
    let mut report = use_signal(move || first);
    let mut date = use_signal(|| None::<Date>);
    let mut time = use_signal(|| Time::new(9, 0, 0, 0).ok());

    let summary = match (date(), time()) {
        (Some(d), Some(t)) => describe_schedule(d, t),
        (Some(d), None) => d.strftime("%b %d, %Y").to_string(),
        _ => "Pick a date".to_string(),
    };

    rsx! {
        Modal {
            title: "Schedule Report",
            size: ModalSize::Lg,
            on_close,
            footer: rsx! {
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    disabled: date().is_none() || time().is_none(),
                    onclick: move |_| {
                        let (Some(d), Some(t)) = (date(), time()) else {
                            return;
                        };
                        if d < today() {
                            error_state.set("A report cannot be scheduled in the past");
                            return;
                        }
                        error_state.clear();
                        on_schedule.call(Schedule {
                            report: report(),
                            when: describe_schedule(d, t),
                        });
                    },
                    "Schedule"
                }
            },
            div { class: "form-group",
                label { class: "form-label", r#for: "report", "Report" }
                select {
                    id: "report",
                    class: "form-input",
                    value: "{report}",
                    onchange: move |e| report.set(e.value()),
                    for name in reports {
                        option { key: "{name}", value: "{name}", selected: *report.read() == name, "{name}" }
                    }
                }
            }
            p { class: "schedule-summary", "{summary}" }
            div { class: "schedule-pickers",
                Calendar {
                    selected: date(),
                    on_select: move |d: Date| date.set(Some(d)),
                }
                TimePicker {
                    value: time(),
                    on_change: move |t: Option<Time>| time.set(t),
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
    fn schedule_description() {
        let when = describe_schedule(date(2024, 1, 15), Time::new(9, 30, 0, 0).unwrap());
        assert_eq!(when, "Jan 15, 2024 at 09:30 AM");
    }

    #[test]
    fn cards_follow_the_chosen_sort() {
        let reports = vec![
            Record::new().with("name", "Sales Report").with("lastGenerated", "2024-01-15"),
            Record::new().with("name", "Inventory Report").with("lastGenerated", "2024-01-14"),
            Record::new().with("name", "User Analytics").with("lastGenerated", "2024-01-16"),
        ];
        assert_eq!(card_order(&reports, None, SortDirection::Asc), vec![0, 1, 2]);
        assert_eq!(
            card_order(&reports, Some("name".to_string()), SortDirection::Asc),
            vec![1, 0, 2]
        );
        assert_eq!(
            card_order(&reports, Some("lastGenerated".to_string()), SortDirection::Desc),
            vec![2, 0, 1]
        );
    }

    #[test]
    fn report_status_tones() {
        assert_eq!(status_tone("Available"), Tone::Green);
        assert_eq!(status_tone("Processing"), Tone::Yellow);
        assert_eq!(status_tone("Archived"), Tone::Gray);
    }
}
