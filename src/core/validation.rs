use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, CodeList, DocumentType};
use super::defaults::ResolvedDefaults;
use super::error::ValidationError;
use super::types::*;

/// Maximum number of voided documents in a single request.
pub const MAX_ITEMS: usize = 10_000;

/// Largest submission number; the correlative in the ID has at most five digits.
pub const MAX_SEQUENCE_NUMBER: u32 = 99_999;

/// Maximum length of a void reason (VoidReasonDescription).
pub const MAX_DESCRIPTION_CHARS: usize = 100;

/// Summary series a voiding request is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoidedSeries {
    /// RA: Comunicación de baja (invoices, receipts, notes).
    Ra,
    /// RR: Resumen de reversiones (retention and perception receipts).
    Rr,
}

impl VoidedSeries {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Ra => "RA",
            Self::Rr => "RR",
        }
    }

    /// Series for a set of item document type codes, or `None` if they mix
    /// reversal and non-reversal documents (or the set is empty).
    pub fn for_codes<'a>(codes: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let mut series = None;
        for code in codes {
            let reversal = DocumentType::from_code(code).is_some_and(|t| t.is_reversal());
            let this = if reversal { Self::Rr } else { Self::Ra };
            match series {
                None => series = Some(this),
                Some(s) if s != this => return None,
                Some(_) => {}
            }
        }
        series
    }
}

/// Validate the caller-mandatory parts of a voiding request.
/// Returns all validation errors found (not just the first).
///
/// Items without a document type code are checked as if they carried the
/// configured default.
pub fn validate_input(
    request: &VoidedDocuments,
    catalog: &Catalog,
    defaults: &ResolvedDefaults,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if request.number == 0 || request.number > MAX_SEQUENCE_NUMBER {
        errors.push(ValidationError::new(
            "number",
            format!("sequence number must be between 1 and {MAX_SEQUENCE_NUMBER}"),
        ));
    }

    if request.reference_issue_date.is_none() {
        errors.push(ValidationError::new(
            "reference_issue_date",
            "issue date of the voided documents is required",
        ));
    }

    match &request.supplier {
        None => errors.push(ValidationError::new("supplier", "supplier is required")),
        Some(supplier) => validate_supplier(supplier, &mut errors),
    }

    if let Some(signer) = &request.signer {
        if signer.tax_id.trim().is_empty() {
            errors.push(ValidationError::new(
                "signer.tax_id",
                "signer tax id must not be empty",
            ));
        }
        if signer.name.trim().is_empty() {
            errors.push(ValidationError::new(
                "signer.name",
                "signer name must not be empty",
            ));
        }
    }

    if request.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "at least one voided document is required",
        ));
        return errors;
    }
    if request.items.len() > MAX_ITEMS {
        errors.push(ValidationError::new(
            "items",
            format!("cannot void more than {MAX_ITEMS} documents in one request"),
        ));
    }

    let mut seen = HashSet::new();
    for (i, item) in request.items.iter().enumerate() {
        validate_item(item, i, catalog, &mut errors);
        if !seen.insert((item.series.as_str(), item.number)) {
            errors.push(ValidationError::new(
                format!("items[{i}]"),
                format!("duplicate voided document {}-{}", item.series, item.number),
            ));
        }
    }

    let codes = request.items.iter().map(|item| {
        item.document_type_code
            .as_deref()
            .unwrap_or(&defaults.voided_document_type_code)
    });
    if VoidedSeries::for_codes(codes).is_none() {
        errors.push(ValidationError::new(
            "items",
            "retention/perception receipts cannot be voided together with other documents",
        ));
    }

    errors
}

fn validate_supplier(supplier: &Party, errors: &mut Vec<ValidationError>) {
    if !is_valid_ruc(&supplier.tax_id) {
        errors.push(ValidationError::new(
            "supplier.tax_id",
            format!("'{}' is not an 11-digit RUC", supplier.tax_id),
        ));
    }
    if supplier.registered_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "supplier.registered_name",
            "registered name must not be empty",
        ));
    }
}

fn validate_item(
    item: &VoidedDocumentsItem,
    index: usize,
    catalog: &Catalog,
    errors: &mut Vec<ValidationError>,
) {
    let path = format!("items[{index}]");

    if item.series.is_empty()
        || item.series.len() > 4
        || !item.series.chars().all(|c| c.is_ascii_alphanumeric())
    {
        errors.push(ValidationError::new(
            format!("{path}.series"),
            format!("'{}' is not a 1-4 character alphanumeric series", item.series),
        ));
    }

    if item.number == 0 {
        errors.push(ValidationError::new(
            format!("{path}.number"),
            "document number must be at least 1",
        ));
    }

    if item.description.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{path}.description"),
            "void reason must not be empty",
        ));
    } else if item.description.chars().count() > MAX_DESCRIPTION_CHARS {
        errors.push(ValidationError::new(
            format!("{path}.description"),
            format!("void reason cannot exceed {MAX_DESCRIPTION_CHARS} characters"),
        ));
    }

    if let Some(code) = &item.document_type_code {
        if !catalog.contains_code_in(CodeList::DocumentType, code) {
            errors.push(ValidationError::new(
                format!("{path}.document_type_code"),
                format!("'{code}' is not a known document type code"),
            ));
        }
    }
}

/// RUC: exactly 11 ASCII digits.
pub fn is_valid_ruc(tax_id: &str) -> bool {
    tax_id.len() == 11 && tax_id.bytes().all(|b| b.is_ascii_digit())
}
