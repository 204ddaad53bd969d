use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::matcher::{ExclusionRule, Interceptor, WILDCARD};

/// Exclusions declared in a TOML file rather than through tags, so
/// deployments can skip interceptors without touching controller code.
#[derive(Deserialize, Debug, Default)]
pub struct ExclusionsConfig {
    #[serde(default)]
    pub exclusions: Vec<StaticExclusion>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StaticExclusion {
    pub namespace: Option<String>,
    pub controller: String,
    /// Action name; omitted means every action of the controller.
    pub action: Option<String>,
}

impl StaticExclusion {
    fn to_rule(&self) -> ExclusionRule {
        ExclusionRule::new(
            self.namespace.clone(),
            self.controller.clone(),
            self.action.clone().unwrap_or_else(|| WILDCARD.to_string()),
        )
    }
}

/// Read and parse an exclusions file.
pub fn load_exclusions(path: &Path) -> Result<ExclusionsConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read exclusions file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("failed to parse exclusions file {}", path.display()))
}

/// Register every configured exclusion with every matcher of `interceptor`.
pub fn apply_exclusions(interceptor: &mut Interceptor, config: &ExclusionsConfig) {
    for exclusion in &config.exclusions {
        let rule = exclusion.to_rule();
        tracing::debug!(
            namespace = rule.namespace.as_deref().unwrap_or("<none>"),
            controller = %rule.controller,
            action = %rule.action,
            interceptor = interceptor.name(),
            "applying configured exclusion"
        );
        for matcher in interceptor.matchers_mut() {
            matcher.except(rule.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_entry() {
        let config: ExclusionsConfig = toml::from_str(
            r#"
            [[exclusions]]
            namespace = "admin"
            controller = "users"
            action = "delete"
            "#,
        )
        .unwrap();

        assert_eq!(config.exclusions.len(), 1);
        let entry = &config.exclusions[0];
        assert_eq!(entry.namespace.as_deref(), Some("admin"));
        assert_eq!(entry.controller, "users");
        assert_eq!(entry.action.as_deref(), Some("delete"));
    }

    #[test]
    fn test_omitted_action_becomes_wildcard() {
        let config: ExclusionsConfig = toml::from_str(
            r#"
            [[exclusions]]
            controller = "health"
            "#,
        )
        .unwrap();

        let rule = config.exclusions[0].to_rule();
        assert_eq!(rule.action, WILDCARD);
        assert!(rule.namespace.is_none());
    }

    #[test]
    fn test_empty_document_parses() {
        let config: ExclusionsConfig = toml::from_str("").unwrap();
        assert!(config.exclusions.is_empty());
    }

    #[test]
    fn test_apply_registers_with_every_matcher() {
        let config: ExclusionsConfig = toml::from_str(
            r#"
            [[exclusions]]
            controller = "health"

            [[exclusions]]
            namespace = "admin"
            controller = "users"
            action = "delete"
            "#,
        )
        .unwrap();

        let mut interceptor = Interceptor::new("audit");
        apply_exclusions(&mut interceptor, &config);

        let excepts = interceptor.matchers()[0].excepts();
        assert_eq!(excepts.len(), 2);
        assert!(!interceptor.should_intercept(None, "health", "ping"));
        assert!(!interceptor.should_intercept(Some("admin"), "users", "delete"));
        assert!(interceptor.should_intercept(Some("admin"), "users", "list"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [[exclusions]]
            controller = "reports"
            "#
        )
        .unwrap();

        let config = load_exclusions(file.path()).unwrap();
        assert_eq!(config.exclusions.len(), 1);
        assert_eq!(config.exclusions[0].controller, "reports");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = load_exclusions(Path::new("/nonexistent/exclusions.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[[exclusions]]\nnot valid").unwrap();
        assert!(load_exclusions(file.path()).is_err());
    }
}
