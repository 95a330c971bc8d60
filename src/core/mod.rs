//! Voided-documents model, SUNAT catalogs and the enrichment engine.
//!
//! A request is assembled with the builders, completed in place by
//! [`ContentEnricher`] and then handed to the renderer.

mod builder;
pub mod catalog;
mod clock;
mod defaults;
mod enrich;
mod error;
mod types;
mod validation;

pub use builder::*;
pub use catalog::{Catalog, CodeList, DocumentType, IdentityDocumentType, code_for};
pub use clock::*;
pub use defaults::*;
pub use enrich::*;
pub use error::*;
pub use types::*;
pub use validation::*;
