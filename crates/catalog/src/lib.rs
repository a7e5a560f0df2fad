//! Reference course-catalog records.
//!
//! This crate holds the concrete record types the engine ships with: a
//! course unit ([`Fuc`], from "Ficha de Unidade Curricular") and its
//! evaluation components ([`ComponenteAvaliacao`]), plus their static
//! metadata tables, a process-wide [`registry`] carrying the built-in
//! transformer and adapter, and JSON input decoding for the harness.
//!
//! Both types construct through fallible factories that run validation,
//! so an invalid instance never exists:
//!
//! ```
//! use xmlforge_catalog::{ComponenteAvaliacao, Fuc};
//!
//! let quizzes = ComponenteAvaliacao::new("Quizzes", 20).unwrap();
//! let projeto = ComponenteAvaliacao::new("Projeto", 80).unwrap();
//! let fuc = Fuc::new(
//!     "M4310",
//!     "Programação Avançada",
//!     6.0,
//!     "N/A",
//!     vec![quizzes, projeto],
//! )
//! .unwrap();
//! assert_eq!(fuc.codigo(), "M4310");
//! ```

pub mod input;
pub mod types;

mod registry;

pub use input::{CatalogError, load_catalog};
pub use registry::registry;
pub use types::{COMPONENTE_METADATA, ComponenteAvaliacao, FUC_METADATA, Fuc};
