//! The process-wide registry for the catalog types.

use std::sync::LazyLock;

use xmlforge_xml::{AddPercentage, NoopAdapter, Registry};

use crate::types::{COMPONENTE_METADATA, FUC_METADATA};

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    Registry::builder()
        .transformer("percentage", AddPercentage)
        // Placeholder for emission-order corrections on course units.
        .adapter("fuc", NoopAdapter)
        .record_type(&FUC_METADATA)
        .record_type(&COMPONENTE_METADATA)
        .build()
        .expect("catalog metadata references must resolve")
});

/// The registry carrying the built-in transformer and adapter plus the
/// catalog metadata tables. Built once, on first use, and never mutated.
///
/// A dangling reference in the catalog metadata is a programming error and
/// aborts here, at registration time, rather than during serialization.
pub fn registry() -> &'static Registry {
    &REGISTRY
}
