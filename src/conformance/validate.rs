use chrono::NaiveDate;

use super::dom::{self, Element};
use crate::core::*;
use crate::render::{CUSTOMIZATION_ID, UBL_VERSION_ID, ns};

/// Element sequence of the VoidedDocuments root: (name, min, max).
const ROOT_SEQUENCE: &[(&str, usize, usize)] = &[
    ("ext:UBLExtensions", 1, 1),
    ("cbc:UBLVersionID", 1, 1),
    ("cbc:CustomizationID", 1, 1),
    ("cbc:ID", 1, 1),
    ("cbc:ReferenceDate", 1, 1),
    ("cbc:IssueDate", 1, 1),
    ("cbc:Note", 0, usize::MAX),
    ("cac:Signature", 0, usize::MAX),
    ("cac:AccountingSupplierParty", 1, 1),
    ("sac:VoidedDocumentsLine", 1, usize::MAX),
];

const LINE_SEQUENCE: &[(&str, usize, usize)] = &[
    ("cbc:LineID", 1, 1),
    ("cbc:DocumentTypeCode", 1, 1),
    ("sac:DocumentSerialID", 1, 1),
    ("sac:DocumentNumberID", 1, 1),
    ("sac:VoidReasonDescription", 1, 1),
];

/// Structurally check a rendered VoidedDocuments message against the
/// element sequence and value formats of the SUNAT schema.
/// Returns all errors found (not just the first).
pub fn validate_voided_documents_xml(xml: &str) -> Vec<ValidationError> {
    let root = match dom::parse(xml) {
        Ok(root) => root,
        Err(e) => return vec![ValidationError::new("xml", e.to_string())],
    };
    let mut errors = Vec::new();

    if root.name != "VoidedDocuments" {
        errors.push(ValidationError::new(
            "VoidedDocuments",
            format!("root element is <{}>", root.name),
        ));
        return errors;
    }
    if root.attr("xmlns") != Some(ns::VOIDED_DOCUMENTS) {
        errors.push(ValidationError::new(
            "VoidedDocuments/@xmlns",
            "default namespace must be the VoidedDocuments-1 namespace",
        ));
    }

    check_sequence(&root, "VoidedDocuments", ROOT_SEQUENCE, &mut errors);

    expect_text(&root, "cbc:UBLVersionID", UBL_VERSION_ID, &mut errors);
    expect_text(&root, "cbc:CustomizationID", CUSTOMIZATION_ID, &mut errors);

    let issue_date = date_of(&root, "cbc:IssueDate", &mut errors);
    let reference_date = date_of(&root, "cbc:ReferenceDate", &mut errors);
    if let (Some(issue), Some(reference)) = (issue_date, reference_date) {
        if reference > issue {
            errors.push(ValidationError::new(
                "cbc:ReferenceDate",
                format!("{reference} is after IssueDate {issue}"),
            ));
        }
    }
    if let Some(id) = root.path_text(&["cbc:ID"]) {
        check_id(id, issue_date, &mut errors);
    }

    if let Some(supplier) = root.child("cac:AccountingSupplierParty") {
        for path in [
            &["cbc:CustomerAssignedAccountID"][..],
            &["cbc:AdditionalAccountID"][..],
            &["cac:Party", "cac:PartyLegalEntity", "cbc:RegistrationName"][..],
        ] {
            if supplier.path_text(path).is_none_or(|t| t.trim().is_empty()) {
                errors.push(ValidationError::new(
                    format!("cac:AccountingSupplierParty/{}", path.join("/")),
                    "required value is missing",
                ));
            }
        }
    }

    for (i, line) in root.children_named("sac:VoidedDocumentsLine").enumerate() {
        let at = format!("sac:VoidedDocumentsLine[{}]", i + 1);
        check_sequence(line, &at, LINE_SEQUENCE, &mut errors);
        if let Some(line_id) = line.path_text(&["cbc:LineID"]) {
            if line_id != (i + 1).to_string() {
                errors.push(ValidationError::new(
                    format!("{at}/cbc:LineID"),
                    format!("expected {}, found '{line_id}'", i + 1),
                ));
            }
        }
        if let Some(code) = line.path_text(&["cbc:DocumentTypeCode"]) {
            if DocumentType::from_code(code).is_none() {
                errors.push(ValidationError::new(
                    format!("{at}/cbc:DocumentTypeCode"),
                    format!("'{code}' is not a Catálogo 01 document type"),
                ));
            }
        }
        if let Some(number) = line.path_text(&["sac:DocumentNumberID"]) {
            if number.parse::<u32>().is_err() {
                errors.push(ValidationError::new(
                    format!("{at}/sac:DocumentNumberID"),
                    format!("'{number}' is not a number"),
                ));
            }
        }
    }

    errors
}

/// Match the children of `parent` against an ordered (name, min, max) list.
fn check_sequence(
    parent: &Element,
    at: &str,
    sequence: &[(&str, usize, usize)],
    errors: &mut Vec<ValidationError>,
) {
    let mut children = parent.children.iter().peekable();
    for &(name, min, max) in sequence {
        let mut count = 0;
        while children.peek().is_some_and(|c| c.name == name) {
            children.next();
            count += 1;
        }
        if count < min {
            errors.push(ValidationError::new(
                format!("{at}/{name}"),
                "required element is missing or out of order",
            ));
        } else if count > max {
            errors.push(ValidationError::new(
                format!("{at}/{name}"),
                format!("at most {max} occurrence(s) allowed, found {count}"),
            ));
        }
    }
    for extra in children {
        errors.push(ValidationError::new(
            format!("{at}/{}", extra.name),
            "unexpected element",
        ));
    }
}

fn expect_text(root: &Element, name: &str, expected: &str, errors: &mut Vec<ValidationError>) {
    if let Some(text) = root.path_text(&[name]) {
        if text != expected {
            errors.push(ValidationError::new(
                name,
                format!("expected '{expected}', found '{text}'"),
            ));
        }
    }
}

fn date_of(root: &Element, name: &str, errors: &mut Vec<ValidationError>) -> Option<NaiveDate> {
    let text = root.path_text(&[name])?;
    match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(ValidationError::new(
                name,
                format!("'{text}' is not an ISO date"),
            ));
            None
        }
    }
}

/// `R[AR]-YYYYMMDD-n`, with the date equal to the issue date.
fn check_id(id: &str, issue_date: Option<NaiveDate>, errors: &mut Vec<ValidationError>) {
    let parts: Vec<&str> = id.split('-').collect();
    let well_formed = matches!(parts.as_slice(), [prefix, date, number]
        if (*prefix == "RA" || *prefix == "RR")
            && date.len() == 8
            && NaiveDate::parse_from_str(date, "%Y%m%d").is_ok()
            && !number.is_empty()
            && number.len() <= 5
            && number.bytes().all(|b| b.is_ascii_digit()));
    if !well_formed {
        errors.push(ValidationError::new(
            "cbc:ID",
            format!("'{id}' does not match R[AR]-YYYYMMDD-n"),
        ));
        return;
    }
    if let Some(issue_date) = issue_date {
        if parts[1] != issue_date.format("%Y%m%d").to_string() {
            errors.push(ValidationError::new(
                "cbc:ID",
                format!("date in '{id}' differs from IssueDate {issue_date}"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(id: &str) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_id(id, NaiveDate::from_ymd_opt(2022, 1, 31), &mut errors);
        errors
    }

    #[test]
    fn id_formats() {
        assert!(ids("RA-20220131-1").is_empty());
        assert!(ids("RR-20220131-12345").is_empty());
        assert_eq!(ids("RC-20220131-1").len(), 1);
        assert_eq!(ids("RA-2022013-1").len(), 1);
        assert_eq!(ids("RA-20220131-").len(), 1);
        assert_eq!(ids("RA-20220130-1").len(), 1);
    }

    #[test]
    fn malformed_xml_reports_single_error() {
        let errors = validate_voided_documents_xml("<VoidedDocuments>");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "xml");
    }

    #[test]
    fn wrong_root_is_reported() {
        let errors = validate_voided_documents_xml("<SummaryDocuments/>");
        assert_eq!(errors[0].field, "VoidedDocuments");
    }

    #[test]
    fn sequence_detects_missing_and_unexpected() {
        let root = dom::parse("<l><cbc:LineID>1</cbc:LineID><x/></l>").unwrap();
        let mut errors = Vec::new();
        check_sequence(&root, "l", LINE_SEQUENCE, &mut errors);
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "l/cbc:DocumentTypeCode",
                "l/sac:DocumentSerialID",
                "l/sac:DocumentNumberID",
                "l/sac:VoidReasonDescription",
                "l/x",
            ]
        );
    }
}
