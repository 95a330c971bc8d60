use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, CodeList, DocumentType};
use super::error::BajaError;

/// Configured fallbacks used by the enricher.
///
/// Values are catalog *symbols* (e.g. `"INVOICE"`), resolved to codes
/// against a [`Catalog`] when enrichment runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Document type assumed for voided items that carry no code.
    pub voided_document_type: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            voided_document_type: DocumentType::Invoice.symbol().to_string(),
        }
    }
}

/// [`Defaults`] with every symbol resolved to its code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDefaults {
    pub voided_document_type_code: String,
}

impl Defaults {
    /// Fails with [`BajaError::UnknownCatalogEntry`] when a symbol is not a
    /// Catálogo 01 document type, even if another code list knows it.
    pub fn resolve(&self, catalog: &Catalog) -> Result<ResolvedDefaults, BajaError> {
        Ok(ResolvedDefaults {
            voided_document_type_code: catalog
                .code_in(CodeList::DocumentType, &self.voided_document_type)?
                .to_string(),
        })
    }

    /// Parse defaults from a JSON document. Missing keys keep their default.
    #[cfg(feature = "config")]
    pub fn from_json_str(json: &str) -> Result<Self, BajaError> {
        serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "invalid defaults configuration");
            BajaError::Config(e.to_string())
        })
    }

    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, BajaError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "cannot read defaults file");
            BajaError::Config(format!("{}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::IdentityDocumentType;

    #[test]
    fn shipped_defaults_resolve() {
        let resolved = Defaults::default().resolve(Catalog::global()).unwrap();
        assert_eq!(resolved.voided_document_type_code, "01");
    }

    #[test]
    fn unknown_symbol_is_a_config_defect() {
        let defaults = Defaults {
            voided_document_type: "NOPE".into(),
        };
        assert!(matches!(
            defaults.resolve(Catalog::global()),
            Err(BajaError::UnknownCatalogEntry(_))
        ));
    }

    #[test]
    fn identity_symbol_is_not_a_document_type() {
        let defaults = Defaults {
            voided_document_type: IdentityDocumentType::Ruc.symbol().into(),
        };
        assert!(matches!(
            defaults.resolve(Catalog::global()),
            Err(BajaError::UnknownCatalogEntry(ref s)) if s == "RUC"
        ));
    }

    #[cfg(feature = "config")]
    #[test]
    fn json_overrides_default_type() {
        let defaults = Defaults::from_json_str(r#"{"voided_document_type":"SALE_RECEIPT"}"#).unwrap();
        assert_eq!(defaults.voided_document_type, "SALE_RECEIPT");
    }

    #[cfg(feature = "config")]
    #[test]
    fn empty_json_keeps_defaults() {
        assert_eq!(Defaults::from_json_str("{}").unwrap(), Defaults::default());
    }

    #[cfg(feature = "config")]
    #[test]
    fn malformed_json_is_config_error() {
        assert!(matches!(
            Defaults::from_json_str("{not json"),
            Err(BajaError::Config(_))
        ));
    }
}
