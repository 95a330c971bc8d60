use chrono::NaiveDate;

use super::types::*;

/// Builder for voiding requests.
///
/// `build()` never fails: required fields are checked when the document
/// is enriched, so a partially specified request can still be assembled.
///
/// ```
/// use baja::core::*;
/// use chrono::NaiveDate;
///
/// let request = VoidedDocumentsBuilder::new(1)
///     .issue_date(NaiveDate::from_ymd_opt(2022, 1, 31).unwrap())
///     .reference_issue_date(NaiveDate::from_ymd_opt(2022, 1, 29).unwrap())
///     .supplier(PartyBuilder::new("12345678912", "Softgreen S.A.C.").build())
///     .add_item(
///         VoidedDocumentsItemBuilder::new("F001", 1, "Mi sustento1")
///             .document_type_code(DocumentType::Invoice.code())
///             .build(),
///     )
///     .build();
///
/// assert_eq!(request.items.len(), 1);
/// ```
pub struct VoidedDocumentsBuilder {
    number: u32,
    issue_date: Option<NaiveDate>,
    reference_issue_date: Option<NaiveDate>,
    supplier: Option<Party>,
    signer: Option<Signer>,
    items: Vec<VoidedDocumentsItem>,
}

impl VoidedDocumentsBuilder {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            issue_date: None,
            reference_issue_date: None,
            supplier: None,
            signer: None,
            items: Vec::new(),
        }
    }

    pub fn issue_date(mut self, date: NaiveDate) -> Self {
        self.issue_date = Some(date);
        self
    }

    pub fn reference_issue_date(mut self, date: NaiveDate) -> Self {
        self.reference_issue_date = Some(date);
        self
    }

    pub fn supplier(mut self, party: Party) -> Self {
        self.supplier = Some(party);
        self
    }

    pub fn signer(mut self, signer: Signer) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn add_item(mut self, item: VoidedDocumentsItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn build(self) -> VoidedDocuments {
        VoidedDocuments {
            number: self.number,
            issue_date: self.issue_date,
            reference_issue_date: self.reference_issue_date,
            supplier: self.supplier,
            signer: self.signer,
            items: self.items,
        }
    }
}

/// Builder for a single voided document reference.
pub struct VoidedDocumentsItemBuilder {
    series: String,
    number: u32,
    document_type_code: Option<String>,
    description: String,
}

impl VoidedDocumentsItemBuilder {
    pub fn new(series: impl Into<String>, number: u32, description: impl Into<String>) -> Self {
        Self {
            series: series.into(),
            number,
            document_type_code: None,
            description: description.into(),
        }
    }

    /// Catálogo 01 code, e.g. `DocumentType::Invoice.code()`.
    pub fn document_type_code(mut self, code: impl Into<String>) -> Self {
        self.document_type_code = Some(code.into());
        self
    }

    pub fn build(self) -> VoidedDocumentsItem {
        VoidedDocumentsItem {
            series: self.series,
            number: self.number,
            document_type_code: self.document_type_code,
            description: self.description,
        }
    }
}

/// Builder for the supplier party.
pub struct PartyBuilder {
    tax_id: String,
    registered_name: String,
    trade_name: Option<String>,
}

impl PartyBuilder {
    pub fn new(tax_id: impl Into<String>, registered_name: impl Into<String>) -> Self {
        Self {
            tax_id: tax_id.into(),
            registered_name: registered_name.into(),
            trade_name: None,
        }
    }

    pub fn trade_name(mut self, name: impl Into<String>) -> Self {
        self.trade_name = Some(name.into());
        self
    }

    pub fn build(self) -> Party {
        Party {
            tax_id: self.tax_id,
            registered_name: self.registered_name,
            trade_name: self.trade_name,
        }
    }
}
