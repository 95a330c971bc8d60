use chrono::NaiveDate;

use super::dom::{self, Element};
use crate::core::*;

fn required<'a>(el: &'a Element, path: &[&str]) -> Result<&'a str, BajaError> {
    el.path_text(path)
        .ok_or_else(|| BajaError::Xml(format!("missing element {}", path.join("/"))))
}

fn parse_date(text: &str, field: &str) -> Result<NaiveDate, BajaError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| BajaError::Xml(format!("{field}: invalid date '{text}': {e}")))
}

fn parse_number(text: &str, field: &str) -> Result<u32, BajaError> {
    text.parse()
        .map_err(|e| BajaError::Xml(format!("{field}: invalid number '{text}': {e}")))
}

/// Parse a VoidedDocuments message back into the document model.
///
/// The result is a fully enriched request: every optional field that the
/// renderer writes is present.
pub fn from_voided_documents_xml(xml: &str) -> Result<VoidedDocuments, BajaError> {
    let root = dom::parse(xml)?;
    if root.name != "VoidedDocuments" {
        return Err(BajaError::Xml(format!(
            "expected <VoidedDocuments>, found <{}>",
            root.name
        )));
    }

    let id = required(&root, &["cbc:ID"])?;
    let number = id
        .rsplit('-')
        .next()
        .ok_or_else(|| BajaError::Xml(format!("cbc:ID: malformed '{id}'")))
        .and_then(|n| parse_number(n, "cbc:ID"))?;

    let issue_date = parse_date(required(&root, &["cbc:IssueDate"])?, "cbc:IssueDate")?;
    let reference_issue_date =
        parse_date(required(&root, &["cbc:ReferenceDate"])?, "cbc:ReferenceDate")?;

    let signer = match root.child("cac:Signature") {
        Some(sig) => Some(Signer {
            tax_id: required(sig, &["cbc:ID"])?.to_string(),
            name: required(sig, &["cac:SignatoryParty", "cac:PartyName", "cbc:Name"])?
                .to_string(),
        }),
        None => None,
    };

    let supplier_el = root
        .child("cac:AccountingSupplierParty")
        .ok_or_else(|| BajaError::Xml("missing element cac:AccountingSupplierParty".into()))?;
    let supplier = Party {
        tax_id: required(supplier_el, &["cbc:CustomerAssignedAccountID"])?.to_string(),
        registered_name: required(
            supplier_el,
            &["cac:Party", "cac:PartyLegalEntity", "cbc:RegistrationName"],
        )?
        .to_string(),
        trade_name: supplier_el
            .path_text(&["cac:Party", "cac:PartyName", "cbc:Name"])
            .map(str::to_string),
    };

    let items = root
        .children_named("sac:VoidedDocumentsLine")
        .map(|line| -> Result<VoidedDocumentsItem, BajaError> {
            Ok(VoidedDocumentsItem {
                series: required(line, &["sac:DocumentSerialID"])?.to_string(),
                number: parse_number(
                    required(line, &["sac:DocumentNumberID"])?,
                    "sac:DocumentNumberID",
                )?,
                document_type_code: Some(required(line, &["cbc:DocumentTypeCode"])?.to_string()),
                description: required(line, &["sac:VoidReasonDescription"])?.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(VoidedDocuments {
        number,
        issue_date: Some(issue_date),
        reference_issue_date: Some(reference_issue_date),
        supplier: Some(supplier),
        signer,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_other_roots() {
        let err = from_voided_documents_xml("<Invoice/>").unwrap_err();
        assert!(err.to_string().contains("<Invoice>"));
    }

    #[test]
    fn missing_id_is_reported() {
        let err = from_voided_documents_xml("<VoidedDocuments/>").unwrap_err();
        assert!(err.to_string().contains("cbc:ID"));
    }
}
