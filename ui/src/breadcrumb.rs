use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

/// Crumbs for a route path, starting at the dashboard root.
///
/// Every crumb except the last links to its path prefix.
pub fn crumbs_for(path: &str) -> Vec<Crumb> {
    let segments: Vec<&str> = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    let mut crumbs = vec![Crumb {
        label: "Dashboard".to_string(),
        href: Some("/".to_string()),
    }];
    let mut prefix = String::new();
    for segment in segments {
        prefix.push('/');
        prefix.push_str(segment);
        crumbs.push(Crumb {
            label: title_case(segment),
            href: Some(prefix.clone()),
        });
    }
    if let Some(last) = crumbs.last_mut() {
        last.href = None;
    }
    crumbs
}

fn title_case(segment: &str) -> String {
    segment
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[component]
pub fn Breadcrumb(crumbs: Vec<Crumb>, on_navigate: EventHandler<String>) -> Element {
    let last = crumbs.len().saturating_sub(1);

    rsx! {
        nav { class: "breadcrumb", aria_label: "Breadcrumb",
            for (i, crumb) in crumbs.into_iter().enumerate() {
                span { key: "{i}", class: "breadcrumb-item",
                    {match crumb.href {
                        Some(href) => {
                            let target = href.clone();
                            rsx! {
                                a {
                                    class: "breadcrumb-link",
                                    href: "{href}",
                                    onclick: move |e| {
                                        e.prevent_default();
                                        on_navigate.call(target.clone());
                                    },
                                    "{crumb.label}"
                                }
                            }
                        }
                        None => rsx! {
                            span { class: "breadcrumb-current", "{crumb.label}" }
                        },
                    }}
                    if i < last {
                        span { class: "breadcrumb-separator", "›" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(crumbs: &[Crumb]) -> Vec<&str> {
        crumbs.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn root_is_just_the_dashboard() {
        let crumbs = crumbs_for("/");
        assert_eq!(labels(&crumbs), vec!["Dashboard"]);
        assert_eq!(crumbs[0].href, None);
    }

    #[test]
    fn nested_paths_link_every_prefix() {
        let crumbs = crumbs_for("/users/user-settings?tab=1");
        assert_eq!(labels(&crumbs), vec!["Dashboard", "Users", "User Settings"]);
        assert_eq!(crumbs[0].href.as_deref(), Some("/"));
        assert_eq!(crumbs[1].href.as_deref(), Some("/users"));
        assert_eq!(crumbs[2].href, None);
    }
}
