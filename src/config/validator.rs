//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - The namespace must not be empty
//! - Package locations should be well-formed dotted paths (warning)
//! - `order` entries should name declared providers (warning)
//! - `order` must not list a provider twice (warning)

use crate::config::schema::StowageConfig;
use crate::error::{Result, StowageError};
use crate::locator::PackageName;
use std::collections::HashSet;

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot be used.
    Error,
    /// The configuration works, but something will be skipped.
    Warning,
}

/// Validation finding with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable message
    pub message: String,
    /// Severity of the finding
    pub severity: Severity,
    /// Provider name if the finding is provider-specific
    pub provider: Option<String>,
}

/// Validate a configuration and return all findings.
///
/// This function collects every finding rather than stopping at the
/// first one, so users can fix multiple issues at once.
pub fn validate_config(config: &StowageConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.namespace.trim().is_empty() {
        errors.push(ValidationError {
            rule: "empty-namespace".to_string(),
            message: "'namespace' must not be empty".to_string(),
            severity: Severity::Error,
            provider: None,
        });
    }

    errors.extend(validate_packages(config));
    errors.extend(validate_order(config));

    errors
}

/// Validate declared package locations in every namespace.
fn validate_packages(config: &StowageConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (namespace, declared) in &config.providers {
        for (name, package) in declared {
            if let Err(e) = PackageName::parse(package) {
                errors.push(ValidationError {
                    rule: "invalid-package".to_string(),
                    message: format!(
                        "Provider '{}' in namespace '{}' has an invalid package '{}' and will be skipped: {}",
                        name, namespace, package, e
                    ),
                    severity: Severity::Warning,
                    provider: Some(name.clone()),
                });
            }
        }
    }

    errors
}

/// Validate the lookup order against the configured namespace.
fn validate_order(config: &StowageConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let declared = config.declared();
    let mut seen = HashSet::new();

    for name in &config.order {
        if !seen.insert(name.as_str()) {
            errors.push(ValidationError {
                rule: "duplicate-provider".to_string(),
                message: format!("Provider '{}' is listed more than once in 'order'", name),
                severity: Severity::Warning,
                provider: Some(name.clone()),
            });
            continue;
        }

        if !declared.is_some_and(|d| d.contains_key(name)) {
            errors.push(ValidationError {
                rule: "unknown-provider".to_string(),
                message: format!(
                    "Provider '{}' is not declared in namespace '{}' and will be skipped",
                    name, config.namespace
                ),
                severity: Severity::Warning,
                provider: Some(name.clone()),
            });
        }
    }

    errors
}

/// Validate a configuration, failing on any error-level finding.
///
/// Warnings are returned for the caller to display.
pub fn validate(config: &StowageConfig) -> Result<Vec<ValidationError>> {
    let (errors, warnings): (Vec<_>, Vec<_>) = validate_config(config)
        .into_iter()
        .partition(|e| e.severity == Severity::Error);

    if errors.is_empty() {
        Ok(warnings)
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(StowageError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
