//! Acceptance checks for rendered output.
//!
//! Full XSD validation runs outside this crate against
//! [`VOIDED_DOCUMENTS_XSD`]. [`validate_voided_documents_xml`] checks the
//! same element sequence and value formats without a schema engine, and
//! [`from_voided_documents_xml`] reads a rendered message back into the
//! document model.

mod dom;
mod parse;
mod validate;

pub use parse::from_voided_documents_xml;
pub use validate::validate_voided_documents_xml;

/// Schema the VoidedDocuments message must validate against.
pub const VOIDED_DOCUMENTS_XSD: &str = "UBLPE-VoidedDocuments-1.0.xsd";
