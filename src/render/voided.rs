use crate::core::*;

use super::xml_utils::{XmlResult, XmlWriter};
use super::{CUSTOMIZATION_ID, SIGNATURE_URI, Template, UBL_VERSION_ID, ns};

const KIND: DocumentKind = DocumentKind::VoidedDocuments;

fn missing(field: impl Into<String>) -> BajaError {
    BajaError::Rendering {
        kind: KIND,
        field: field.into(),
    }
}

/// UBL 2.0 VoidedDocuments (Comunicación de Baja / Resumen de Reversiones).
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidedDocumentsTemplate;

impl Template for VoidedDocumentsTemplate {
    fn kind(&self) -> DocumentKind {
        KIND
    }

    fn render(&self, request: &VoidedDocuments) -> XmlResult {
        to_voided_documents_xml(request)
    }
}

/// Submission identifier, `{RA|RR}-{yyyyMMdd}-{number}`.
///
/// Needs an enriched request: the issue date and every item's document
/// type code must be present.
pub fn document_id(request: &VoidedDocuments) -> Result<String, BajaError> {
    let issue_date = request.issue_date.ok_or_else(|| missing("issue_date"))?;
    let codes = request
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.document_type_code
                .as_deref()
                .ok_or_else(|| missing(format!("items[{i}].document_type_code")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let series = VoidedSeries::for_codes(codes).ok_or_else(|| missing("items"))?;
    Ok(format!(
        "{}-{}-{}",
        series.prefix(),
        issue_date.format("%Y%m%d"),
        request.number
    ))
}

fn to_voided_documents_xml(request: &VoidedDocuments) -> XmlResult {
    let id = document_id(request)?;
    let issue_date = request.issue_date.ok_or_else(|| missing("issue_date"))?;
    let reference_date = request
        .reference_issue_date
        .ok_or_else(|| missing("reference_issue_date"))?;
    let supplier = request.supplier.as_ref().ok_or_else(|| missing("supplier"))?;
    let signer = request.signer.as_ref().ok_or_else(|| missing("signer"))?;

    let mut w = XmlWriter::new()?;
    w.start_element_with_attrs(
        "VoidedDocuments",
        &[
            ("xmlns", ns::VOIDED_DOCUMENTS),
            ("xmlns:cac", ns::CAC),
            ("xmlns:cbc", ns::CBC),
            ("xmlns:ds", ns::DS),
            ("xmlns:ext", ns::EXT),
            ("xmlns:sac", ns::SAC),
        ],
    )?;

    // Signature slot, filled by the signing step
    w.start_element("ext:UBLExtensions")?;
    w.start_element("ext:UBLExtension")?;
    w.empty_element("ext:ExtensionContent")?;
    w.end_element("ext:UBLExtension")?;
    w.end_element("ext:UBLExtensions")?;

    w.text_element("cbc:UBLVersionID", UBL_VERSION_ID)?;
    w.text_element("cbc:CustomizationID", CUSTOMIZATION_ID)?;
    w.text_element("cbc:ID", &id)?;
    w.text_element("cbc:ReferenceDate", &reference_date.to_string())?;
    w.text_element("cbc:IssueDate", &issue_date.to_string())?;

    write_signature(&mut w, signer)?;
    write_supplier(&mut w, supplier)?;

    for (i, item) in request.items.iter().enumerate() {
        let code = item
            .document_type_code
            .as_deref()
            .ok_or_else(|| missing(format!("items[{i}].document_type_code")))?;
        w.start_element("sac:VoidedDocumentsLine")?;
        w.text_element("cbc:LineID", &(i + 1).to_string())?;
        w.text_element("cbc:DocumentTypeCode", code)?;
        w.text_element("sac:DocumentSerialID", &item.series)?;
        w.text_element("sac:DocumentNumberID", &item.number.to_string())?;
        w.cdata_element("sac:VoidReasonDescription", &item.description)?;
        w.end_element("sac:VoidedDocumentsLine")?;
    }

    w.end_element("VoidedDocuments")?;
    w.into_string()
}

fn write_signature(w: &mut XmlWriter, signer: &Signer) -> Result<(), BajaError> {
    w.start_element("cac:Signature")?;
    w.text_element("cbc:ID", &signer.tax_id)?;
    w.start_element("cac:SignatoryParty")?;
    w.start_element("cac:PartyIdentification")?;
    w.text_element("cbc:ID", &signer.tax_id)?;
    w.end_element("cac:PartyIdentification")?;
    w.start_element("cac:PartyName")?;
    w.cdata_element("cbc:Name", &signer.name)?;
    w.end_element("cac:PartyName")?;
    w.end_element("cac:SignatoryParty")?;
    w.start_element("cac:DigitalSignatureAttachment")?;
    w.start_element("cac:ExternalReference")?;
    w.text_element("cbc:URI", SIGNATURE_URI)?;
    w.end_element("cac:ExternalReference")?;
    w.end_element("cac:DigitalSignatureAttachment")?;
    w.end_element("cac:Signature")?;
    Ok(())
}

fn write_supplier(w: &mut XmlWriter, supplier: &Party) -> Result<(), BajaError> {
    w.start_element("cac:AccountingSupplierParty")?;
    w.text_element("cbc:CustomerAssignedAccountID", &supplier.tax_id)?;
    w.text_element("cbc:AdditionalAccountID", IdentityDocumentType::Ruc.code())?;
    w.start_element("cac:Party")?;
    if let Some(trade_name) = &supplier.trade_name {
        w.start_element("cac:PartyName")?;
        w.cdata_element("cbc:Name", trade_name)?;
        w.end_element("cac:PartyName")?;
    }
    w.start_element("cac:PartyLegalEntity")?;
    w.cdata_element("cbc:RegistrationName", &supplier.registered_name)?;
    w.end_element("cac:PartyLegalEntity")?;
    w.end_element("cac:Party")?;
    w.end_element("cac:AccountingSupplierParty")?;
    Ok(())
}
