//! # baja
//!
//! SUNAT (Peru) voided-documents submissions, the *Comunicación de Baja*.
//!
//! The pipeline has three steps. First a partially specified
//! [`VoidedDocuments`](crate::core::VoidedDocuments) is completed by the
//! [`ContentEnricher`](crate::core::ContentEnricher) using an injected clock
//! and configured catalog defaults. The result is then rendered into UBL 2.0
//! XML through a template looked up by document kind. Finally the output can
//! be checked structurally against the VoidedDocuments schema.
//!
//! ## Quick Start
//!
//! ```rust
//! use baja::core::*;
//! use chrono::NaiveDate;
//!
//! let clock = FixedDateProvider(NaiveDate::from_ymd_opt(2022, 1, 31).unwrap());
//! let mut request = VoidedDocumentsBuilder::new(1)
//!     .reference_issue_date(NaiveDate::from_ymd_opt(2022, 1, 29).unwrap())
//!     .supplier(PartyBuilder::new("12345678912", "Softgreen S.A.C.").build())
//!     .add_item(VoidedDocumentsItemBuilder::new("F001", 1, "Mi sustento1").build())
//!     .build();
//!
//! ContentEnricher::new(Defaults::default(), &clock)
//!     .enrich(&mut request)
//!     .unwrap();
//!
//! assert_eq!(request.issue_date, NaiveDate::from_ymd_opt(2022, 1, 31));
//! assert_eq!(request.items[0].document_type_code.as_deref(), Some("01"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Document model, catalogs, clock, enrichment |
//! | `render` | Template registry and UBL VoidedDocuments XML |
//! | `conformance` | Structural schema check and XML parsing |
//! | `config` | Load defaults from JSON |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "render")]
pub mod render;

#[cfg(feature = "conformance")]
pub mod conformance;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
