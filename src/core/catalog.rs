//! SUNAT code tables.
//!
//! Catálogo 01 identifies document kinds, Catálogo 06 identity document
//! kinds. [`Catalog`] maps the symbolic names used in configuration to the
//! codes SUNAT expects on the wire.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::error::BajaError;

/// Catálogo 01: Tipo de documento.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// 01: Factura.
    Invoice,
    /// 03: Boleta de venta.
    SaleReceipt,
    /// 07: Nota de crédito.
    CreditNote,
    /// 08: Nota de débito.
    DebitNote,
    /// 09: Guía de remisión remitente.
    DespatchAdvice,
    /// 20: Comprobante de retención.
    Retention,
    /// 40: Comprobante de percepción.
    Perception,
}

impl DocumentType {
    pub const ALL: [Self; 7] = [
        Self::Invoice,
        Self::SaleReceipt,
        Self::CreditNote,
        Self::DebitNote,
        Self::DespatchAdvice,
        Self::Retention,
        Self::Perception,
    ];

    /// Catálogo 01 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Invoice => "01",
            Self::SaleReceipt => "03",
            Self::CreditNote => "07",
            Self::DebitNote => "08",
            Self::DespatchAdvice => "09",
            Self::Retention => "20",
            Self::Perception => "40",
        }
    }

    /// Symbolic name used in configuration files.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Invoice => "INVOICE",
            Self::SaleReceipt => "SALE_RECEIPT",
            Self::CreditNote => "CREDIT_NOTE",
            Self::DebitNote => "DEBIT_NOTE",
            Self::DespatchAdvice => "DESPATCH_ADVICE",
            Self::Retention => "RETENTION",
            Self::Perception => "PERCEPTION",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.symbol() == symbol)
    }

    /// Retention and perception receipts are voided through an RR summary.
    pub fn is_reversal(&self) -> bool {
        matches!(self, Self::Retention | Self::Perception)
    }
}

/// Catálogo 06: Tipo de documento de identidad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentityDocumentType {
    /// 0: Doc. trib. no domiciliado sin RUC.
    NonResident,
    /// 1: DNI.
    Dni,
    /// 4: Carnet de extranjería.
    ForeignerCard,
    /// 6: RUC.
    Ruc,
    /// 7: Pasaporte.
    Passport,
}

impl IdentityDocumentType {
    pub const ALL: [Self; 5] = [
        Self::NonResident,
        Self::Dni,
        Self::ForeignerCard,
        Self::Ruc,
        Self::Passport,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::NonResident => "0",
            Self::Dni => "1",
            Self::ForeignerCard => "4",
            Self::Ruc => "6",
            Self::Passport => "7",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::NonResident => "NON_RESIDENT",
            Self::Dni => "DNI",
            Self::ForeignerCard => "FOREIGNER_CARD",
            Self::Ruc => "RUC",
            Self::Passport => "PASSPORT",
        }
    }
}

/// SUNAT code list a catalog entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeList {
    /// Catálogo 01.
    DocumentType,
    /// Catálogo 06.
    IdentityDocumentType,
}

/// Immutable symbol → code lookup table.
///
/// Each entry is tagged with its [`CodeList`], so a lookup that needs a
/// document type never yields an identity document code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, (CodeList, String)>,
}

impl Catalog {
    /// The shipped SUNAT table (Catálogo 01 and 06).
    pub fn sunat() -> Self {
        let document_types = DocumentType::ALL.iter().map(|t| (t.symbol(), t.code()));
        let identity_types = IdentityDocumentType::ALL
            .iter()
            .map(|t| (t.symbol(), t.code()));
        Self::from_entries(document_types)
            .with_entries(CodeList::IdentityDocumentType, identity_types)
    }

    /// Build a document type table from arbitrary `(symbol, code)` pairs.
    pub fn from_entries<S, C>(entries: impl IntoIterator<Item = (S, C)>) -> Self
    where
        S: Into<String>,
        C: Into<String>,
    {
        Self {
            entries: BTreeMap::new(),
        }
        .with_entries(CodeList::DocumentType, entries)
    }

    /// Add `(symbol, code)` pairs to `list`, replacing entries with the same symbol.
    pub fn with_entries<S, C>(
        mut self,
        list: CodeList,
        entries: impl IntoIterator<Item = (S, C)>,
    ) -> Self
    where
        S: Into<String>,
        C: Into<String>,
    {
        self.entries
            .extend(entries.into_iter().map(|(s, c)| (s.into(), (list, c.into()))));
        self
    }

    /// Process-wide SUNAT table, built on first use.
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Catalog::sunat)
    }

    /// Code for `symbol` in any code list.
    pub fn code_for(&self, symbol: &str) -> Result<&str, BajaError> {
        self.entries
            .get(symbol)
            .map(|(_, code)| code.as_str())
            .ok_or_else(|| BajaError::UnknownCatalogEntry(symbol.to_string()))
    }

    /// Code for `symbol`, which must belong to `list`.
    pub fn code_in(&self, list: CodeList, symbol: &str) -> Result<&str, BajaError> {
        match self.entries.get(symbol) {
            Some((l, code)) if *l == list => Ok(code.as_str()),
            _ => Err(BajaError::UnknownCatalogEntry(symbol.to_string())),
        }
    }

    /// Whether `code` is the value of any entry.
    pub fn contains_code(&self, code: &str) -> bool {
        self.entries.values().any(|(_, c)| c == code)
    }

    /// Whether `code` is the value of an entry in `list`.
    pub fn contains_code_in(&self, list: CodeList, code: &str) -> bool {
        self.entries.values().any(|(l, c)| *l == list && c == code)
    }
}

/// Look `symbol` up in the process-wide SUNAT table.
pub fn code_for(symbol: &str) -> Result<&'static str, BajaError> {
    Catalog::global().code_for(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_type_codes() {
        assert_eq!(DocumentType::Invoice.code(), "01");
        assert_eq!(DocumentType::SaleReceipt.code(), "03");
        assert_eq!(DocumentType::Retention.code(), "20");
        assert_eq!(DocumentType::from_code("07"), Some(DocumentType::CreditNote));
        assert_eq!(DocumentType::from_code("99"), None);
    }

    #[test]
    fn symbols_roundtrip() {
        for t in DocumentType::ALL {
            assert_eq!(DocumentType::from_symbol(t.symbol()), Some(t));
        }
    }

    #[test]
    fn sunat_table_lookup() {
        assert_eq!(code_for("INVOICE").unwrap(), "01");
        assert_eq!(code_for("RUC").unwrap(), "6");
        assert!(Catalog::global().contains_code("40"));
        assert!(!Catalog::global().contains_code("99"));
    }

    #[test]
    fn unknown_symbol_fails() {
        let err = code_for("FACTURITA").unwrap_err();
        assert!(matches!(err, BajaError::UnknownCatalogEntry(ref s) if s == "FACTURITA"));
    }

    #[test]
    fn substitute_table() {
        let catalog = Catalog::from_entries([("INVOICE", "XX")]);
        assert_eq!(catalog.code_for("INVOICE").unwrap(), "XX");
        assert!(catalog.code_for("RUC").is_err());
    }

    #[test]
    fn code_lists_stay_apart() {
        let catalog = Catalog::global();
        assert_eq!(catalog.code_in(CodeList::DocumentType, "INVOICE").unwrap(), "01");
        assert_eq!(catalog.code_in(CodeList::IdentityDocumentType, "RUC").unwrap(), "6");
        assert!(matches!(
            catalog.code_in(CodeList::DocumentType, "RUC"),
            Err(BajaError::UnknownCatalogEntry(ref s)) if s == "RUC"
        ));
        assert!(catalog.contains_code("6"));
        assert!(!catalog.contains_code_in(CodeList::DocumentType, "6"));
        assert!(catalog.contains_code_in(CodeList::IdentityDocumentType, "6"));
    }

    #[test]
    fn reversal_kinds() {
        assert!(DocumentType::Retention.is_reversal());
        assert!(DocumentType::Perception.is_reversal());
        assert!(!DocumentType::Invoice.is_reversal());
    }
}
