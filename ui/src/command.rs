use dioxus::prelude::*;
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// An entry in the command palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: String,
    pub label: String,
    pub group: String,
    pub shortcut: Option<String>,
}

impl Command {
    pub fn new(id: impl Into<String>, label: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            group: group.into(),
            shortcut: None,
        }
    }

    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }
}

/// Indices of the commands whose label fuzzy-matches `query`, best match
/// first. An empty query keeps every command in its original order.
pub fn filter_commands(query: &str, commands: &[Command]) -> Vec<usize> {
    let query = query.trim();
    if query.is_empty() {
        return (0..commands.len()).collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut scored: Vec<(usize, u32)> = commands
        .iter()
        .enumerate()
        .filter_map(|(index, command)| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(&command.label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| (index, score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(index, _)| index).collect()
}

/// Pairs each command with whether a group heading precedes it. A heading
/// starts the list and every change of group.
pub fn group_rows(commands: &[Command]) -> Vec<(Command, bool)> {
    commands
        .iter()
        .enumerate()
        .map(|(i, c)| (c.clone(), i == 0 || commands[i - 1].group != c.group))
        .collect()
}

/// Highlighted row of a list of `len` items, wrapping at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandSelection(usize);

impl CommandSelection {
    pub fn index(self) -> usize {
        self.0
    }

    pub fn next(self, len: usize) -> Self {
        match len {
            0 => Self(0),
            _ => Self((self.0 + 1) % len),
        }
    }

    pub fn prev(self, len: usize) -> Self {
        match len {
            0 => Self(0),
            _ => Self((self.0 + len - 1) % len),
        }
    }
}

#[component]
pub fn CommandPalette(
    commands: Vec<Command>,
    on_select: EventHandler<Command>,
    on_close: EventHandler<()>,
    #[props(into, default = "Type a command or search...".to_string())] placeholder: String,
) -> Element {
    let mut query = use_signal(String::new);
    let mut selection = use_signal(CommandSelection::default);

    let matches: Vec<Command> = filter_commands(&query.read(), &commands)
        .into_iter()
        .map(|i| commands[i].clone())
        .collect();
    let len = matches.len();
    let selected = selection().index().min(len.saturating_sub(1));
    let chosen = matches.get(selected).cloned();
    let rows = group_rows(&matches);

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal command-palette",
                onclick: move |e| e.stop_propagation(),
                input {
                    class: "form-input command-input",
                    r#type: "text",
                    autofocus: true,
                    placeholder: "{placeholder}",
                    value: "{query}",
                    oninput: move |e| {
                        query.set(e.value());
                        selection.set(CommandSelection::default());
                    },
                    onkeydown: move |e: KeyboardEvent| match e.key() {
                        Key::ArrowDown => {
                            e.prevent_default();
                            selection.set(CommandSelection(selected).next(len));
                        }
                        Key::ArrowUp => {
                            e.prevent_default();
                            selection.set(CommandSelection(selected).prev(len));
                        }
                        Key::Enter => {
                            if let Some(command) = chosen.clone() {
                                on_select.call(command);
                            }
                        }
                        Key::Escape => on_close.call(()),
                        _ => {}
                    },
                }
                div { class: "command-list",
                    if matches.is_empty() {
                        div { class: "command-empty text-muted", "No results found." }
                    }
                    for (i, (command, show_group)) in rows.into_iter().enumerate() {
                        {
                            let picked = command.clone();
                            rsx! {
                                div { key: "{command.id}", class: "command-row",
                                    if show_group {
                                        div { class: "command-group", "{command.group}" }
                                    }
                                    button {
                                        class: if i == selected { "command-item selected" } else { "command-item" },
                                        onmouseenter: move |_| selection.set(CommandSelection(i)),
                                        onclick: move |_| on_select.call(picked.clone()),
                                        span { "{command.label}" }
                                        if let Some(shortcut) = &command.shortcut {
                                            kbd { class: "command-shortcut", "{shortcut}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands() -> Vec<Command> {
        vec![
            Command::new("dashboard", "Go to Dashboard", "Navigation"),
            Command::new("users", "Go to Users", "Navigation"),
            Command::new("products", "Go to Products", "Navigation"),
            Command::new("theme", "Toggle Theme", "Settings").shortcut("⌘T"),
        ]
    }

    #[test]
    fn empty_query_keeps_order() {
        assert_eq!(filter_commands("", &commands()), vec![0, 1, 2, 3]);
        assert_eq!(filter_commands("   ", &commands()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn fuzzy_query_is_case_insensitive() {
        let cmds = commands();
        let hits = filter_commands("USR", &cmds);
        assert_eq!(hits.first(), Some(&1));
        assert!(!hits.contains(&3));
    }

    #[test]
    fn unmatched_query_is_empty() {
        assert!(filter_commands("zzzz", &commands()).is_empty());
    }

    #[test]
    fn headings_start_each_group() {
        let rows = group_rows(&commands());
        let headed: Vec<bool> = rows.iter().map(|(_, h)| *h).collect();
        assert_eq!(headed, vec![true, false, false, true]);
        assert!(group_rows(&[]).is_empty());
    }

    #[test]
    fn filtered_rows_regroup() {
        let cmds = commands();
        let matched: Vec<Command> = [3, 0].iter().map(|&i| cmds[i].clone()).collect();
        let rows = group_rows(&matched);
        assert_eq!(rows[0].0.id, "theme");
        assert!(rows[0].1 && rows[1].1);
    }

    #[test]
    fn selection_wraps() {
        let s = CommandSelection::default();
        assert_eq!(s.prev(3).index(), 2);
        assert_eq!(s.prev(3).next(3).index(), 0);
        assert_eq!(CommandSelection(2).next(3).index(), 0);
        assert_eq!(s.next(0).index(), 0);
    }
}
