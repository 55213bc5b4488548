use dioxus::prelude::*;
use jiff::Zoned;
use tracing::info;
use types::{Column, ColumnFilter, Record};
use ui::Modal;

use super::components::{PageHeader, RecordTable};
use crate::data::{next_id, use_store};
use crate::use_app;

const ROLES: [&str; 3] = ["User", "Moderator", "Admin"];

fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "User ID"),
        Column::new("name", "Name"),
        Column::new("email", "Email").filter_by(ColumnFilter::Text),
        Column::new("role", "Role").filterable(true),
        Column::new("status", "Status"),
        Column::new("lastLogin", "Last Login"),
        Column::new("createdAt", "Created At"),
        Column::new("actions", "Actions").sortable(false),
    ]
}

#[component]
pub fn Users() -> Element {
    let app = use_app();
    let mut users = use_store().users;
    let mut show_create_form = use_signal(|| false);
    let quick_filters = app.config.read().quick_filters.clone();

    rsx! {
        div {
            PageHeader {
                title: "Users Management",
                subtitle: "Manage your application users and their permissions.",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_create_form.set(true),
                    "+ Add User"
                }
            }

            if *show_create_form.read() {
                CreateUserModal {
                    on_close: move |_| show_create_form.set(false),
                    on_created: move |user: Record| {
                        info!(id = %user.text("id"), "added user");
                        users.write().push(user);
                        show_create_form.set(false);
                    },
                }
            }

            RecordTable {
                title: "Users List",
                noun: "user",
                data: users,
                columns: columns(),
                quick_filters,
            }
        }
    }
}

fn new_user(existing: &[Record], name: &str, email: &str, role: &str) -> Record {
    Record::new()
        .with("id", next_id(existing, "USR"))
        .with("name", name.trim())
        .with("email", email.trim())
        .with("role", role)
        .with("status", "Active")
        .with("lastLogin", "Never")
        .with("createdAt", Zoned::now().date().to_string())
}

fn valid_email(email: &str) -> bool {
    let email = email.trim();
    email
        .split_once('@')
        .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'))
}

#[component]
fn CreateUserModal(on_close: EventHandler<()>, on_created: EventHandler<Record>) -> Element {
    let users = use_store().users;
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut role = use_signal(|| ROLES[0].to_string());

    let can_submit = !name.read().trim().is_empty() && valid_email(&email.read());

    rsx! {
        Modal {
            title: "Add User",
            on_close,
            footer: rsx! {
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    disabled: !can_submit,
                    onclick: move |_| {
                        let user = new_user(&users.read(), &name.read(), &email.read(), &role.read());
                        on_created.call(user);
                    },
                    "Create"
                }
            },
            div { class: "form-group",
                label { class: "form-label", r#for: "name", "Name *" }
                input {
                    id: "name",
                    class: "form-input",
                    r#type: "text",
                    placeholder: "e.g. John Smith",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "email", "Email *" }
                input {
                    id: "email",
                    class: "form-input",
                    r#type: "email",
                    placeholder: "e.g. jsmith@example.com",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "role", "Role" }
                select {
                    id: "role",
                    class: "form-input",
                    value: "{role}",
                    onchange: move |e| role.set(e.value()),
                    for r in ROLES {
                        option { key: "{r}", value: "{r}", selected: *role.read() == r, "{r}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_needs_user_and_domain() {
        assert!(valid_email("jsmith@example.com"));
        assert!(valid_email("  a@b.io "));
        assert!(!valid_email("jsmith"));
        assert!(!valid_email("@example.com"));
        assert!(!valid_email("jsmith@localhost"));
    }

    #[test]
    fn new_users_are_active_with_the_next_id() {
        let existing = vec![Record::new().with("id", "USR-004")];
        let user = new_user(&existing, " Dana Scully ", "dana@fbi.gov", "Moderator");
        assert_eq!(user.text("id"), "USR-005");
        assert_eq!(user.text("name"), "Dana Scully");
        assert_eq!(user.text("status"), "Active");
        assert_eq!(user.text("role"), "Moderator");
        assert_eq!(user.text("createdAt").len(), 10);
    }

    #[test]
    fn email_and_role_are_filterable() {
        let filters: Vec<(String, ColumnFilter)> = columns()
            .into_iter()
            .filter(|c| c.filterable)
            .map(|c| (c.key, c.filter))
            .collect();
        assert_eq!(
            filters,
            vec![
                ("email".to_string(), ColumnFilter::Text),
                ("role".to_string(), ColumnFilter::Select),
            ]
        );
    }
}
