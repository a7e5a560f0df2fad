//! Transformer and adapter registry.
//!
//! The registry is a read-only lookup table populated once at process
//! start. [`RegistryBuilder::build`] verifies every reference held by the
//! registered metadata tables, so a dangling transformer or adapter name
//! surfaces as a [`StructuralError`] at registration time instead of
//! failing in the middle of a serialization.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use xmlforge_record::TypeMetadata;

use crate::adapt::XmlAdapter;
use crate::error::StructuralError;
use crate::transform::XmlTransform;

/// Read-only lookup tables for transformers, adapters and type metadata.
pub struct Registry {
    transformers: HashMap<&'static str, Arc<dyn XmlTransform>>,
    adapters: HashMap<&'static str, Arc<dyn XmlAdapter>>,
    types: Vec<&'static TypeMetadata>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field(
                "transformers",
                &self.transformers.keys().collect::<Vec<_>>(),
            )
            .field("adapters", &self.adapters.keys().collect::<Vec<_>>())
            .field("types", &self.types.len())
            .finish()
    }
}

impl Registry {
    /// Starts building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            transformers: Vec::new(),
            adapters: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Resolves a transformer by name.
    pub fn transformer(&self, name: &str) -> Option<&dyn XmlTransform> {
        self.transformers.get(name).map(Arc::as_ref)
    }

    /// Resolves an adapter by name.
    pub fn adapter(&self, name: &str) -> Option<&dyn XmlAdapter> {
        self.adapters.get(name).map(Arc::as_ref)
    }

    /// The metadata tables registered with this registry.
    pub fn types(&self) -> &[&'static TypeMetadata] {
        &self.types
    }
}

/// Builder for a [`Registry`].
pub struct RegistryBuilder {
    transformers: Vec<(&'static str, Arc<dyn XmlTransform>)>,
    adapters: Vec<(&'static str, Arc<dyn XmlAdapter>)>,
    types: Vec<&'static TypeMetadata>,
}

impl RegistryBuilder {
    /// Registers a transformer under `name`.
    pub fn transformer(mut self, name: &'static str, t: impl XmlTransform + 'static) -> Self {
        self.transformers.push((name, Arc::new(t)));
        self
    }

    /// Registers an adapter under `name`.
    pub fn adapter(mut self, name: &'static str, a: impl XmlAdapter + 'static) -> Self {
        self.adapters.push((name, Arc::new(a)));
        self
    }

    /// Registers a record type's metadata table for verification.
    pub fn record_type(mut self, meta: &'static TypeMetadata) -> Self {
        self.types.push(meta);
        self
    }

    /// Builds the registry, verifying every metadata-held reference.
    pub fn build(self) -> Result<Registry, StructuralError> {
        let mut transformers: HashMap<&'static str, Arc<dyn XmlTransform>> = HashMap::new();
        for (name, t) in self.transformers {
            if transformers.insert(name, t).is_some() {
                return Err(StructuralError::DuplicateTransformer { name });
            }
        }

        let mut adapters: HashMap<&'static str, Arc<dyn XmlAdapter>> = HashMap::new();
        for (name, a) in self.adapters {
            if adapters.insert(name, a).is_some() {
                return Err(StructuralError::DuplicateAdapter { name });
            }
        }

        for meta in &self.types {
            if meta.item_name == meta.tag_name() {
                return Err(StructuralError::ItemTagCollision {
                    type_name: meta.name,
                    item_name: meta.item_name,
                });
            }

            if let Some(reference) = meta.adapter
                && !adapters.contains_key(reference)
            {
                return Err(StructuralError::UnknownAdapter {
                    type_name: meta.name,
                    reference,
                });
            }

            for field in meta.fields {
                if let Some(reference) = field.transform
                    && !transformers.contains_key(reference)
                {
                    return Err(StructuralError::UnknownTransformer {
                        type_name: meta.name,
                        field: field.ident,
                        reference,
                    });
                }
            }
        }

        debug!(
            transformers = transformers.len(),
            adapters = adapters.len(),
            types = self.types.len(),
            "registry built"
        );

        Ok(Registry {
            transformers,
            adapters,
            types: self.types,
        })
    }
}
