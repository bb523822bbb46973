//! Provider handles.

use crate::error::Result;
use crate::locator::PackageName;
use serde::Serialize;

/// A declared template provider: a named package location within a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provider {
    /// Provider identifier (e.g., `client_custom`).
    pub name: String,
    /// Namespace the provider was declared in (e.g., `templates`).
    pub namespace: String,
    /// Package location holding the provider's templates.
    #[serde(serialize_with = "serialize_package")]
    pub package: PackageName,
}

impl Provider {
    /// Create a provider handle.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, package: PackageName) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            package,
        }
    }

    /// Target package for a subpackage suffix.
    ///
    /// With no suffix this is the provider's own package; otherwise the
    /// suffix is nested below it (`<package>.<suffix>`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidPackage` if the suffix has empty segments or path
    /// separators.
    pub fn target_package(&self, suffix: Option<&str>) -> Result<PackageName> {
        match suffix {
            Some(suffix) => self.package.join(suffix),
            None => Ok(self.package.clone()),
        }
    }
}

fn serialize_package<S: serde::Serializer>(
    package: &PackageName,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(package.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> Provider {
        Provider::new(
            "base",
            "templates",
            PackageName::parse("base_app.templates").unwrap(),
        )
    }

    #[test]
    fn target_package_without_suffix_is_provider_package() {
        let package = provider().target_package(None).unwrap();
        assert_eq!(package.as_str(), "base_app.templates");
    }

    #[test]
    fn target_package_nests_suffix() {
        let admin = provider().target_package(Some("admin")).unwrap();
        assert_eq!(admin.as_str(), "base_app.templates.admin");
        let nested = provider().target_package(Some("a.b")).unwrap();
        assert_eq!(nested.as_str(), "base_app.templates.a.b");
    }

    #[test]
    fn target_package_rejects_malformed_suffix() {
        let err = provider().target_package(Some("admin..x")).unwrap_err();
        assert!(matches!(err, crate::error::StowageError::InvalidPackage { .. }));
        assert!(provider().target_package(Some("a/b")).is_err());
    }

    #[test]
    fn serializes_package_as_string() {
        let json = serde_json::to_value(provider()).unwrap();
        assert_eq!(json["name"], "base");
        assert_eq!(json["namespace"], "templates");
        assert_eq!(json["package"], "base_app.templates");
    }
}
