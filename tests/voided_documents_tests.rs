//! Reference scenarios: enrichment + rendering must reproduce the approved
//! snapshots and pass the structural schema check.

#![cfg(feature = "conformance")]

use baja::conformance::{from_voided_documents_xml, validate_voided_documents_xml};
use baja::core::*;
use baja::render;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Clock shared by all scenarios.
fn clock() -> FixedDateProvider {
    FixedDateProvider(date(2019, 12, 24))
}

fn supplier() -> Party {
    PartyBuilder::new("12345678912", "Softgreen S.A.C.").build()
}

fn item(number: u32, code: Option<DocumentType>) -> VoidedDocumentsItem {
    let builder =
        VoidedDocumentsItemBuilder::new("F001", number, format!("Mi sustento{number}"));
    match code {
        Some(t) => builder.document_type_code(t.code()).build(),
        None => builder.build(),
    }
}

fn enrich_and_render(mut request: VoidedDocuments) -> String {
    let clock = clock();
    ContentEnricher::new(Defaults::default(), &clock)
        .enrich(&mut request)
        .expect("valid request");
    let xml = render::render(DocumentKind::VoidedDocuments, &request).expect("renders");

    let errors = validate_voided_documents_xml(&xml);
    assert!(errors.is_empty(), "schema errors: {errors:?}");
    xml
}

#[test]
fn multiple_voided_documents() {
    let request = VoidedDocumentsBuilder::new(1)
        .issue_date(date(2022, 1, 31))
        .reference_issue_date(date(2022, 1, 29))
        .supplier(supplier())
        .add_item(item(1, Some(DocumentType::Invoice)))
        .add_item(item(2, Some(DocumentType::Invoice)))
        .build();

    let xml = enrich_and_render(request);
    insta::assert_snapshot!("voided_document", xml);
}

#[test]
fn multiple_voided_documents_auto_generated_issue_date() {
    let request = VoidedDocumentsBuilder::new(1)
        .reference_issue_date(clock().now() - chrono::Days::new(2))
        .supplier(supplier())
        .add_item(item(1, Some(DocumentType::Invoice)))
        .add_item(item(2, Some(DocumentType::Invoice)))
        .build();

    let xml = enrich_and_render(request);
    assert!(xml.contains("<cbc:IssueDate>2019-12-24</cbc:IssueDate>"));
    insta::assert_snapshot!("voided_document_auto_generated_issue_date", xml);
}

#[test]
fn multiple_voided_documents_auto_generated_document_type() {
    let request = VoidedDocumentsBuilder::new(1)
        .issue_date(date(2022, 1, 31))
        .reference_issue_date(date(2022, 1, 29))
        .supplier(supplier())
        .add_item(item(1, None))
        .add_item(item(2, None))
        .build();

    let xml = enrich_and_render(request);
    assert_eq!(
        xml.matches("<cbc:DocumentTypeCode>01</cbc:DocumentTypeCode>")
            .count(),
        2
    );
    insta::assert_snapshot!("voided_document_auto_generated_document_type", xml);
}

#[test]
fn defaulted_and_explicit_codes_render_identically() {
    let explicit = VoidedDocumentsBuilder::new(1)
        .issue_date(date(2022, 1, 31))
        .reference_issue_date(date(2022, 1, 29))
        .supplier(supplier())
        .add_item(item(1, Some(DocumentType::Invoice)))
        .build();
    let mut defaulted = explicit.clone();
    defaulted.items[0].document_type_code = None;

    assert_eq!(enrich_and_render(explicit), enrich_and_render(defaulted));
}

#[test]
fn rendered_message_parses_back() {
    let request = VoidedDocumentsBuilder::new(7)
        .issue_date(date(2022, 1, 31))
        .reference_issue_date(date(2022, 1, 29))
        .supplier(
            PartyBuilder::new("20601234567", "Comercial <Lima> & Cía")
                .trade_name("Comercial Lima")
                .build(),
        )
        .add_item(item(10, None))
        .add_item(item(3, Some(DocumentType::CreditNote)))
        .build();

    let clock = clock();
    let enriched = ContentEnricher::new(Defaults::default(), &clock)
        .enriched(request)
        .unwrap();
    let xml = render::render(DocumentKind::VoidedDocuments, &enriched).unwrap();
    assert!(xml.contains("<cbc:ID>RA-20220131-7</cbc:ID>"));

    let parsed = from_voided_documents_xml(&xml).unwrap();
    assert_eq!(parsed, enriched);
}

#[test]
fn retention_void_is_rr_summary() {
    let request = VoidedDocumentsBuilder::new(2)
        .issue_date(date(2022, 1, 31))
        .reference_issue_date(date(2022, 1, 29))
        .supplier(supplier())
        .add_item(
            VoidedDocumentsItemBuilder::new("R001", 5, "Error en importe")
                .document_type_code(DocumentType::Retention.code())
                .build(),
        )
        .build();

    let xml = enrich_and_render(request);
    assert!(xml.contains("<cbc:ID>RR-20220131-2</cbc:ID>"));
    assert!(xml.contains("<cbc:DocumentTypeCode>20</cbc:DocumentTypeCode>"));
}

#[test]
fn tampered_output_fails_schema_check() {
    let request = VoidedDocumentsBuilder::new(1)
        .issue_date(date(2022, 1, 31))
        .reference_issue_date(date(2022, 1, 29))
        .supplier(supplier())
        .add_item(item(1, None))
        .build();
    let xml = enrich_and_render(request);

    let no_lines = xml.replace("sac:VoidedDocumentsLine", "sac:Other");
    let errors = validate_voided_documents_xml(&no_lines);
    assert!(
        errors
            .iter()
            .any(|e| e.field == "VoidedDocuments/sac:VoidedDocumentsLine")
    );

    let wrong_id = xml.replace("RA-20220131-1", "RA-20220130-1");
    let errors = validate_voided_documents_xml(&wrong_id);
    assert!(errors.iter().any(|e| e.field == "cbc:ID"));
}

#[test]
fn schema_check_enforces_date_order_and_type_codes() {
    let request = VoidedDocumentsBuilder::new(1)
        .issue_date(date(2022, 1, 31))
        .reference_issue_date(date(2022, 1, 29))
        .supplier(supplier())
        .add_item(item(1, None))
        .build();
    let xml = enrich_and_render(request);

    let late_reference = xml.replace(
        "<cbc:ReferenceDate>2022-01-29</cbc:ReferenceDate>",
        "<cbc:ReferenceDate>2022-02-01</cbc:ReferenceDate>",
    );
    let errors = validate_voided_documents_xml(&late_reference);
    assert_eq!(errors.len(), 1, "{errors:?}");
    assert_eq!(errors[0].field, "cbc:ReferenceDate");

    let identity_code = xml.replace(
        "<cbc:DocumentTypeCode>01</cbc:DocumentTypeCode>",
        "<cbc:DocumentTypeCode>6</cbc:DocumentTypeCode>",
    );
    let errors = validate_voided_documents_xml(&identity_code);
    assert_eq!(errors.len(), 1, "{errors:?}");
    assert_eq!(
        errors[0].field,
        "sac:VoidedDocumentsLine[1]/cbc:DocumentTypeCode"
    );
}

#[test]
fn escaped_reason_keeps_surrounding_whitespace() {
    let request = VoidedDocumentsBuilder::new(1)
        .issue_date(date(2022, 1, 31))
        .reference_issue_date(date(2022, 1, 29))
        .supplier(supplier())
        .add_item(VoidedDocumentsItemBuilder::new("F001", 1, " a]]>b ").build())
        .add_item(VoidedDocumentsItemBuilder::new("F001", 2, "  sin cambios  ").build())
        .build();

    let clock = clock();
    let enriched = ContentEnricher::new(Defaults::default(), &clock)
        .enriched(request)
        .unwrap();
    let xml = render::render(DocumentKind::VoidedDocuments, &enriched).unwrap();
    assert!(validate_voided_documents_xml(&xml).is_empty());

    let parsed = from_voided_documents_xml(&xml).unwrap();
    assert_eq!(parsed.items[0].description, " a]]>b ");
    assert_eq!(parsed.items[1].description, "  sin cambios  ");
    assert_eq!(parsed, enriched);
}
