use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Comunicación de Baja: a submission voiding previously issued documents.
///
/// Optional fields are filled in by [`ContentEnricher`](super::ContentEnricher).
/// Fields the caller must supply are still `Option` here because they are
/// checked at the enrichment boundary, not at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoidedDocuments {
    /// Sequential number of this submission within the day's series.
    pub number: u32,
    /// Issue date of the submission. Defaults to "today" per the date provider.
    pub issue_date: Option<NaiveDate>,
    /// Issue date of the documents being voided.
    pub reference_issue_date: Option<NaiveDate>,
    /// Issuer of the voided documents.
    pub supplier: Option<Party>,
    /// Party that signs the submission. Defaults to the supplier.
    pub signer: Option<Signer>,
    /// Voided documents, rendered in insertion order.
    pub items: Vec<VoidedDocumentsItem>,
}

/// A single voided document reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoidedDocumentsItem {
    /// Series of the voided document (e.g. "F001").
    pub series: String,
    /// Correlative number within the series.
    pub number: u32,
    /// Catálogo 01 code of the voided document. Defaults to the configured type.
    pub document_type_code: Option<String>,
    /// Reason for voiding.
    pub description: String,
}

/// Supplier (emisor) of the voided documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// RUC, 11 digits.
    pub tax_id: String,
    /// Razón social.
    pub registered_name: String,
    /// Nombre comercial.
    pub trade_name: Option<String>,
}

/// Signatory of the submission (firmante).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    pub tax_id: String,
    pub name: String,
}

impl From<&Party> for Signer {
    fn from(party: &Party) -> Self {
        Self {
            tax_id: party.tax_id.clone(),
            name: party.registered_name.clone(),
        }
    }
}

/// Kinds of regulator message this crate can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DocumentKind {
    /// UBL 2.0 VoidedDocuments (RA / RR summaries).
    VoidedDocuments,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VoidedDocuments => f.write_str("VoidedDocuments"),
        }
    }
}
