//! Logical template names.

/// File extension every template carries.
pub const TEMPLATE_EXTENSION: &str = "html";

/// A logical template name split into subpackage suffix and base name.
///
/// The split happens at the last dot: `"admin.index"` has suffix
/// `"admin"` and base `"index"`, `"a.b.index"` has suffix `"a.b"`, and
/// `"index"` has no suffix. An empty suffix (`".index"`) counts as none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateName<'a> {
    suffix: Option<&'a str>,
    base: &'a str,
}

impl<'a> TemplateName<'a> {
    /// Split a logical template name.
    pub fn parse(name: &'a str) -> Self {
        match name.rsplit_once('.') {
            Some((suffix, base)) if !suffix.is_empty() => Self {
                suffix: Some(suffix),
                base,
            },
            Some((_, base)) => Self { suffix: None, base },
            None => Self {
                suffix: None,
                base: name,
            },
        }
    }

    /// Subpackage suffix, if any.
    pub fn suffix(&self) -> Option<&'a str> {
        self.suffix
    }

    /// Base file name without extension.
    pub fn base(&self) -> &'a str {
        self.base
    }

    /// Target file name, `<base>.html`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.base, TEMPLATE_EXTENSION)
    }
}
