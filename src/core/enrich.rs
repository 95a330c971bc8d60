use super::catalog::Catalog;
use super::clock::DateProvider;
use super::defaults::Defaults;
use super::error::{BajaError, ValidationError, into_validation_error};
use super::types::*;
use super::validation;

/// Completes a partially specified [`VoidedDocuments`] so it can be rendered.
///
/// Rules only fill absent values:
/// - `issue_date` becomes the provider's `now()`
/// - each item's `document_type_code` becomes the configured default type
/// - `signer` is taken from the supplier
///
/// Caller-mandatory fields are validated first. On any error the request
/// is left untouched.
///
/// ```
/// use baja::core::*;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2019, 12, 24).unwrap();
/// let clock = FixedDateProvider(today);
/// let enricher = ContentEnricher::new(Defaults::default(), &clock);
///
/// let mut request = VoidedDocumentsBuilder::new(1)
///     .reference_issue_date(NaiveDate::from_ymd_opt(2019, 12, 22).unwrap())
///     .supplier(PartyBuilder::new("12345678912", "Softgreen S.A.C.").build())
///     .add_item(VoidedDocumentsItemBuilder::new("F001", 1, "Mi sustento1").build())
///     .build();
///
/// enricher.enrich(&mut request).unwrap();
/// assert_eq!(request.issue_date, Some(today));
/// assert_eq!(request.items[0].document_type_code.as_deref(), Some("01"));
/// ```
pub struct ContentEnricher<'a> {
    defaults: Defaults,
    date_provider: &'a dyn DateProvider,
    catalog: &'a Catalog,
}

impl<'a> ContentEnricher<'a> {
    pub fn new(defaults: Defaults, date_provider: &'a dyn DateProvider) -> Self {
        Self {
            defaults,
            date_provider,
            catalog: Catalog::global(),
        }
    }

    /// Resolve default symbols against `catalog` instead of the SUNAT table.
    pub fn with_catalog(mut self, catalog: &'a Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn enrich(&self, request: &mut VoidedDocuments) -> Result<(), BajaError> {
        let defaults = self.defaults.resolve(self.catalog).inspect_err(|e| {
            tracing::warn!(error = %e, "defaults do not resolve against the catalog");
        })?;

        let errors = validation::validate_input(request, self.catalog, &defaults);
        if !errors.is_empty() {
            return Err(into_validation_error(&errors));
        }

        let issue_date = request
            .issue_date
            .unwrap_or_else(|| self.date_provider.now());
        if let Some(reference) = request.reference_issue_date {
            if reference > issue_date {
                return Err(into_validation_error(&[ValidationError::new(
                    "reference_issue_date",
                    format!("voided documents date {reference} is after issue date {issue_date}"),
                )]));
            }
        }

        if request.issue_date.is_none() {
            tracing::debug!(%issue_date, "defaulting issue date from date provider");
            request.issue_date = Some(issue_date);
        }

        for (i, item) in request.items.iter_mut().enumerate() {
            if item.document_type_code.is_none() {
                tracing::debug!(
                    line = i + 1,
                    code = %defaults.voided_document_type_code,
                    "defaulting voided document type"
                );
                item.document_type_code = Some(defaults.voided_document_type_code.clone());
            }
        }

        if request.signer.is_none() {
            if let Some(supplier) = &request.supplier {
                tracing::debug!(tax_id = %supplier.tax_id, "defaulting signer to supplier");
                request.signer = Some(Signer::from(supplier));
            }
        }

        tracing::info!(
            number = request.number,
            %issue_date,
            items = request.items.len(),
            "voided documents enriched"
        );
        Ok(())
    }

    /// Enrich an owned request and return it.
    pub fn enriched(&self, mut request: VoidedDocuments) -> Result<VoidedDocuments, BajaError> {
        self.enrich(&mut request)?;
        Ok(request)
    }
}
