use serde::{Deserialize, Serialize};

use crate::{PageSize, QuickFilter, Result, err};

/// Dashboard-wide settings, bundled with the app as TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    pub admin: AdminProfile,
    pub table: TableDefaults,
    pub quick_filters: Vec<QuickFilter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminProfile {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableDefaults {
    pub page_size: PageSize,
    pub page_size_options: Vec<usize>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "ShadnAdmin".to_string(),
            admin: AdminProfile::default(),
            table: TableDefaults::default(),
            quick_filters: QuickFilter::defaults(),
        }
    }
}

impl Default for AdminProfile {
    fn default() -> Self {
        Self {
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
        }
    }
}

impl Default for TableDefaults {
    fn default() -> Self {
        Self {
            page_size: PageSize::DEFAULT,
            page_size_options: vec![5, 10, 20, 50],
        }
    }
}

impl DashboardConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.table.page_size_options.is_empty() {
            return Err(err!("table.page_size_options must not be empty"));
        }
        if self.table.page_size_options.contains(&0) {
            return Err(err!("table.page_size_options must all be greater than zero"));
        }
        if let Some(tag) = duplicate_tag(&self.quick_filters) {
            return Err(err!("duplicate quick filter tag '{}'", tag));
        }
        Ok(())
    }
}

fn duplicate_tag(filters: &[QuickFilter]) -> Option<&str> {
    filters.iter().enumerate().find_map(|(i, f)| {
        filters[..i]
            .iter()
            .any(|prev| prev.tag == f.tag)
            .then_some(f.tag.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn reads_table_and_filters() {
        let config = DashboardConfig::from_toml_str(
            r#"
            title = "Acme Admin"

            [table]
            page_size = 20
            page_size_options = [10, 20]

            [[quick_filters]]
            tag = "all"
            label = "All"

            [[quick_filters]]
            tag = "shipped"
            label = "Shipped"
            field = "status"
            value = "Shipped"
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Acme Admin");
        assert_eq!(config.table.page_size.get(), 20);
        assert_eq!(config.quick_filters.len(), 2);
        assert_eq!(config.quick_filters[0].value, None);
        assert_eq!(config.quick_filters[1].value.as_deref(), Some("Shipped"));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = DashboardConfig::from_toml_str("[table]\npage_size = 0").unwrap_err();
        assert!(err.message.contains("page size must be greater than zero"));
    }

    #[test]
    fn bad_options_are_rejected() {
        assert!(DashboardConfig::from_toml_str("[table]\npage_size_options = []").is_err());
        assert!(DashboardConfig::from_toml_str("[table]\npage_size_options = [0, 5]").is_err());
    }

    #[test]
    fn duplicate_tags_are_rejected() {
        let err = DashboardConfig::from_toml_str(
            r#"
            [[quick_filters]]
            tag = "all"
            label = "All"

            [[quick_filters]]
            tag = "all"
            label = "Everything"
            "#,
        )
        .unwrap_err();
        assert_eq!(err.message, "duplicate quick filter tag 'all'");
    }
}
