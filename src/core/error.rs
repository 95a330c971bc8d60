use thiserror::Error;

use super::types::DocumentKind;

/// Errors that can occur while enriching, rendering or checking a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BajaError {
    /// One or more caller-supplied fields are missing or malformed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A catalog symbol is not registered in the code table.
    #[error("unknown catalog entry: {0}")]
    UnknownCatalogEntry(String),

    /// No template is registered for the requested document kind.
    #[error("no template registered for {0}")]
    TemplateNotFound(DocumentKind),

    /// The template needs a field that enrichment should have filled.
    #[error("cannot render {kind}: missing field `{field}`")]
    Rendering { kind: DocumentKind, field: String },

    /// XML generation or parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// Defaults could not be loaded.
    #[error("config error: {0}")]
    Config(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items[1].series").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Fold a list of validation errors into a single [`BajaError::Validation`].
pub(crate) fn into_validation_error(errors: &[ValidationError]) -> BajaError {
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    BajaError::Validation(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_joined() {
        let err = into_validation_error(&[
            ValidationError::new("items", "at least one item is required"),
            ValidationError::new("supplier", "supplier is required"),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: items: at least one item is required; supplier: supplier is required"
        );
    }

    #[test]
    fn rendering_error_names_field_and_kind() {
        let err = BajaError::Rendering {
            kind: DocumentKind::VoidedDocuments,
            field: "issue_date".into(),
        };
        assert_eq!(
            err.to_string(),
            "cannot render VoidedDocuments: missing field `issue_date`"
        );
    }
}
