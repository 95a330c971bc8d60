#![no_main]

use baja::core::DocumentKind;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse → render → parse must not panic at any step.
        if let Ok(request) = baja::conformance::from_voided_documents_xml(s) {
            if let Ok(xml) = baja::render::render(DocumentKind::VoidedDocuments, &request) {
                let _ = baja::conformance::from_voided_documents_xml(&xml);
            }
        }
    }
});
