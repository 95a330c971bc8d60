use baja::conformance;
use baja::core::*;
use baja::render;
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Void two invoices issued on 2024-06-13; issue date and document type come from defaults
    let mut request = VoidedDocumentsBuilder::new(1)
        .reference_issue_date(NaiveDate::from_ymd_opt(2024, 6, 13).unwrap())
        .supplier(
            PartyBuilder::new("20601234567", "Comercial Andina S.A.C.")
                .trade_name("Andina")
                .build(),
        )
        .add_item(VoidedDocumentsItemBuilder::new("F001", 101, "Error en el RUC del cliente").build())
        .add_item(
            VoidedDocumentsItemBuilder::new("F001", 102, "Operación duplicada")
                .document_type_code("01")
                .build(),
        )
        .build();

    let clock = SystemDateProvider::default();
    ContentEnricher::new(Defaults::default(), &clock)
        .enrich(&mut request)
        .expect("request should be valid");

    let xml = render::render(DocumentKind::VoidedDocuments, &request).expect("render should succeed");
    let errors = conformance::validate_voided_documents_xml(&xml);

    println!("ID:      {}", render::document_id(&request).expect("enriched request has an id"));
    println!("Issued:  {}", request.issue_date.expect("issue date is set by enrichment"));
    println!("Lines:   {}", request.items.len());
    if errors.is_empty() {
        println!("Schema:  ok");
    } else {
        for e in &errors {
            println!("Schema:  {e}");
        }
    }
    println!("---");
    println!("{xml}");
}
