//! Rendering of enriched documents into SUNAT UBL XML.
//!
//! Templates are looked up by [`DocumentKind`] in a [`TemplateRegistry`].
//! The process-wide registry holds the shipped templates and is read-only
//! once built.
//!
//! # Example
//!
//! ```no_run
//! use baja::core::*;
//! use baja::render;
//!
//! let request: VoidedDocuments = todo!(); // enriched via ContentEnricher
//! let xml = render::render(DocumentKind::VoidedDocuments, &request).unwrap();
//! ```

mod voided;
pub(crate) mod xml_utils;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::core::{BajaError, DocumentKind, VoidedDocuments};

pub use voided::{VoidedDocumentsTemplate, document_id};
pub use xml_utils::XmlResult;

/// UBL version declared by SUNAT summary documents.
pub const UBL_VERSION_ID: &str = "2.0";

/// CustomizationID of the VoidedDocuments message.
pub const CUSTOMIZATION_ID: &str = "1.0";

/// Reference from `cac:Signature` to the XMLDSig signature in the extension slot.
pub const SIGNATURE_URI: &str = "#SUNAT-SIGN";

/// Namespace URIs used by SUNAT UBL 2.0 summary documents.
pub mod ns {
    pub const VOIDED_DOCUMENTS: &str =
        "urn:sunat:names:specification:ubl:peru:schema:xsd:VoidedDocuments-1";
    pub const CAC: &str =
        "urn:oasis:names:specification:ubl:schema:xsd:CommonAggregateComponents-2";
    pub const CBC: &str = "urn:oasis:names:specification:ubl:schema:xsd:CommonBasicComponents-2";
    pub const DS: &str = "http://www.w3.org/2000/09/xmldsig#";
    pub const EXT: &str =
        "urn:oasis:names:specification:ubl:schema:xsd:CommonExtensionComponents-2";
    pub const SAC: &str =
        "urn:sunat:names:specification:ubl:peru:schema:xsd:SunatAggregateComponents-1";
}

/// A renderer for one document kind.
pub trait Template: Send + Sync {
    fn kind(&self) -> DocumentKind;

    /// Render an enriched request. Fails with [`BajaError::Rendering`] when
    /// a field the template binds is still absent.
    fn render(&self, request: &VoidedDocuments) -> XmlResult;
}

/// Templates keyed by document kind.
#[derive(Default)]
pub struct TemplateRegistry {
    templates: HashMap<DocumentKind, Box<dyn Template>>,
}

impl TemplateRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every shipped template.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(VoidedDocumentsTemplate));
        registry
    }

    /// Process-wide registry built from [`TemplateRegistry::with_defaults`].
    pub fn global() -> &'static TemplateRegistry {
        static REGISTRY: OnceLock<TemplateRegistry> = OnceLock::new();
        REGISTRY.get_or_init(TemplateRegistry::with_defaults)
    }

    /// Register a template, replacing any previous one for the same kind.
    pub fn register(&mut self, template: Box<dyn Template>) {
        self.templates.insert(template.kind(), template);
    }

    pub fn get_template_for(&self, kind: DocumentKind) -> Result<&dyn Template, BajaError> {
        self.templates
            .get(&kind)
            .map(|t| t.as_ref())
            .ok_or(BajaError::TemplateNotFound(kind))
    }

    pub fn render(&self, kind: DocumentKind, request: &VoidedDocuments) -> XmlResult {
        let xml = self.get_template_for(kind)?.render(request)?;
        tracing::debug!(%kind, lines = request.items.len(), bytes = xml.len(), "rendered document");
        Ok(xml)
    }
}

/// Render `request` with the process-wide registry.
pub fn render(kind: DocumentKind, request: &VoidedDocuments) -> XmlResult {
    TemplateRegistry::global().render(kind, request)
}
