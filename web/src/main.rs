use dioxus::prelude::*;
use tracing::{info, warn};
use types::DashboardConfig;
use ui::{Breadcrumb, Command, CommandPalette, Popover, PopoverAlign, crumbs_for};

mod data;
mod views;

use data::{Datasets, Store};
use views::{Analytics, Dashboard, Orders, Products, Reports, Users};

const CONFIG: &str = include_str!("../assets/dashboard.toml");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DashboardLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/users")]
        Users {},
        #[route("/products")]
        Products {},
        #[route("/orders")]
        Orders {},
        #[route("/analytics")]
        Analytics {},
        #[route("/reports")]
        Reports {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

impl Route {
    fn commands() -> Vec<Command> {
        vec![
            Command::new("dashboard", "Go to Dashboard", "Navigation"),
            Command::new("users", "Go to Users", "Navigation"),
            Command::new("products", "Go to Products", "Navigation"),
            Command::new("orders", "Go to Orders", "Navigation"),
            Command::new("analytics", "Go to Analytics", "Navigation"),
            Command::new("reports", "Go to Reports", "Navigation"),
            Command::new("theme", "Toggle Theme", "Settings").shortcut("Ctrl+J"),
        ]
    }

    fn from_command(id: &str) -> Option<Self> {
        Some(match id {
            "dashboard" => Route::Dashboard {},
            "users" => Route::Users {},
            "products" => Route::Products {},
            "orders" => Route::Orders {},
            "analytics" => Route::Analytics {},
            "reports" => Route::Reports {},
            _ => return None,
        })
    }
}

fn main() {
    dioxus::launch(App);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Configuration and theme, shared with every page.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: Signal<DashboardConfig>,
    pub theme: Signal<Theme>,
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

fn load_config() -> DashboardConfig {
    match DashboardConfig::from_toml_str(CONFIG) {
        Ok(config) => {
            info!(title = %config.title, page_size = config.table.page_size.get(), "loaded dashboard configuration");
            config
        }
        Err(e) => {
            warn!(error = %e, "bundled configuration is invalid, using defaults");
            DashboardConfig::default()
        }
    }
}

fn load_datasets() -> types::Result<Datasets> {
    Datasets::bundled().inspect_err(|e| warn!(error = %e, "bundled datasets failed to parse"))
}

#[component]
fn App() -> Element {
    let loaded = use_hook(load_datasets);
    use_context_provider(|| ErrorState(Signal::new(loaded.as_ref().err().map(ErrorInfo::from_error))));
    use_context_provider(|| Store::new(loaded.clone().unwrap_or_default()));
    let app = use_context_provider(|| AppContext {
        config: Signal::new(load_config()),
        theme: Signal::new(Theme::default()),
    });
    let title = app.config.read().title.clone();

    rsx! {
        document::Title { "{title}" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, #[props(into)] icon: String, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            span { class: "nav-icon", "{icon}" }
            {children}
        }
    }
}

/// A failure shown in the layout banner, split into its context chain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorInfo {
    pub message: String,
    pub chain: Vec<String>,
}

impl ErrorInfo {
    /// Split an error's `outer: inner` message into its chain.
    pub fn from_error(err: &types::Error) -> Self {
        let chain: Vec<String> = err.message.split(": ").map(String::from).collect();
        Self {
            message: chain.first().cloned().unwrap_or_default(),
            chain,
        }
    }
}

/// Handle to the banner shown above every page.
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<ErrorInfo>>);

impl ErrorState {
    pub fn set(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.0.set(Some(ErrorInfo {
            chain: vec![message.clone()],
            message,
        }));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

#[component]
fn ErrorBanner() -> Element {
    let mut errors = use_error();
    let Some(info) = errors.0.read().clone() else {
        return rsx! {};
    };
    let causes = info.chain.get(1..).unwrap_or_default().to_vec();

    rsx! {
        div { class: "error-banner", role: "alert",
            div { class: "error-banner-header",
                span { class: "error-banner-message", "{info.message}" }
                button {
                    class: "error-banner-close",
                    title: "Dismiss",
                    onclick: move |_| errors.clear(),
                    "×"
                }
            }
            if !causes.is_empty() {
                details { class: "error-details",
                    summary { class: "error-section-title", "Caused by" }
                    ul { class: "error-chain-list",
                        for (i, cause) in causes.into_iter().enumerate() {
                            li { key: "{i}", class: "error-chain-item", "{cause}" }
                        }
                    }
                }
            }
        }
    }
}

fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect();
    match letters.is_empty() {
        true => "?".to_string(),
        false => letters.to_uppercase(),
    }
}

fn is_shortcut(e: &KeyboardEvent, letter: &str) -> bool {
    let modifiers = e.modifiers();
    let held = modifiers.contains(Modifiers::CONTROL) || modifiers.contains(Modifiers::META);
    held && matches!(e.key(), Key::Character(c) if c.eq_ignore_ascii_case(letter))
}

#[component]
fn DashboardLayout() -> Element {
    let app = use_app();
    let mut theme = app.theme;
    let mut palette_open = use_signal(|| false);
    let route: Route = use_route();

    let config = app.config.read().clone();
    let initial = initials(&config.admin.name);
    let crumbs = crumbs_for(&route.to_string());
    let theme_class = match theme() {
        Theme::Light => "app-layout",
        Theme::Dark => "app-layout theme-dark",
    };

    rsx! {
        div { class: theme_class,
            tabindex: "-1",
            onkeydown: move |e: KeyboardEvent| {
                if is_shortcut(&e, "k") {
                    e.prevent_default();
                    palette_open.toggle();
                } else if is_shortcut(&e, "j") {
                    e.prevent_default();
                    theme.set(theme().toggled());
                }
            },
            // Sidebar
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "{config.title}" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::Dashboard {}, icon: "▦", "Dashboard" }
                    NavLink { to: Route::Users {}, icon: "👥", "Users" }
                    NavLink { to: Route::Products {}, icon: "📦", "Products" }
                    NavLink { to: Route::Orders {}, icon: "🛒", "Orders" }
                    NavLink { to: Route::Analytics {}, icon: "📈", "Analytics" }
                    NavLink { to: Route::Reports {}, icon: "📄", "Reports" }
                }
                div { class: "sidebar-footer",
                    div { class: "sidebar-user",
                        div { class: "sidebar-avatar", "{initial}" }
                        div { class: "sidebar-user-info",
                            div { class: "sidebar-user-name", "{config.admin.name}" }
                            div { class: "sidebar-user-role", "{config.admin.email}" }
                        }
                    }
                }
            }
            // Main content
            div { class: "main-column",
                header { class: "topbar",
                    Breadcrumb {
                        crumbs,
                        on_navigate: move |href: String| {
                            if let Ok(target) = href.parse::<Route>() {
                                navigator().push(target);
                            }
                        },
                    }
                    div { class: "topbar-actions",
                        button {
                            class: "topbar-search",
                            onclick: move |_| palette_open.set(true),
                            span { "Search..." }
                            kbd { "Ctrl K" }
                        }
                        button {
                            class: "btn btn-sm btn-secondary",
                            title: "Toggle theme",
                            onclick: move |_| theme.set(theme().toggled()),
                            if theme() == Theme::Dark { "☀" } else { "☾" }
                        }
                        Popover {
                            align: PopoverAlign::End,
                            trigger: rsx! { div { class: "topbar-avatar", "{initial}" } },
                            div { class: "profile-card",
                                div { class: "sidebar-user-name", "{config.admin.name}" }
                                div { class: "text-muted text-sm", "{config.admin.email}" }
                                div { class: "profile-status", span { class: "badge-dot" } "Online" }
                            }
                        }
                    }
                }
                main { class: "main-content",
                    ErrorBanner {}
                    Outlet::<Route> {}
                }
            }
            if palette_open() {
                CommandPalette {
                    commands: Route::commands(),
                    on_close: move |_| palette_open.set(false),
                    on_select: move |command: Command| {
                        palette_open.set(false);
                        info!(command = %command.id, "running command");
                        match Route::from_command(&command.id) {
                            Some(target) => {
                                navigator().push(target);
                            }
                            None => theme.set(theme().toggled()),
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    warn!(%path, "no page for route");

    rsx! {
        div { class: "empty-state",
            h1 { class: "page-title", "Page not found" }
            p { class: "page-subtitle", "Nothing lives at /{path}." }
            Link { to: Route::Dashboard {}, class: "btn btn-primary", "Back to dashboard" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_is_valid() {
        let config = DashboardConfig::from_toml_str(CONFIG).unwrap();
        assert_eq!(config.table.page_size.get(), 10);
        assert_eq!(config.quick_filters.len(), 3);
    }

    #[test]
    fn initials_from_names() {
        assert_eq!(initials("Admin User"), "AU");
        assert_eq!(initials("jane"), "J");
        assert_eq!(initials("  "), "?");
    }

    #[test]
    fn every_navigation_command_has_a_route() {
        for command in Route::commands() {
            let routed = Route::from_command(&command.id).is_some();
            assert_eq!(routed, command.group == "Navigation", "{}", command.id);
        }
    }

    #[test]
    fn error_chain_splits_on_context() {
        let info = ErrorInfo::from_error(&types::Error::from("loading users: invalid JSON: eof"));
        assert_eq!(info.message, "loading users");
        assert_eq!(info.chain.len(), 3);
    }
}
