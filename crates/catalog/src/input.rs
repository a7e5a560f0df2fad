//! JSON input decoding for the harness.
//!
//! Raw input structs mirror the record types field-for-field but carry no
//! invariants; conversion into the real types goes through the validating
//! constructors, so JSON input cannot smuggle an invalid record past the
//! construction boundary.

use serde::Deserialize;
use thiserror::Error;
use xmlforge_record::ValidationError;

use crate::types::{ComponenteAvaliacao, Fuc};

/// A failure while loading a catalog from JSON.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The input was not valid JSON for the catalog shape.
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The input parsed but a record violated its constraints.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Top-level catalog input: a list of course units.
#[derive(Debug, Deserialize)]
pub struct CatalogInput {
    /// The course units to serialize.
    pub fucs: Vec<FucInput>,
}

/// Raw course-unit input, unvalidated.
#[derive(Debug, Deserialize)]
pub struct FucInput {
    pub codigo: String,
    pub nome: String,
    pub ects: f64,
    #[serde(default)]
    pub observacoes: String,
    pub avaliacao: Vec<ComponenteInput>,
}

/// Raw evaluation-component input, unvalidated.
#[derive(Debug, Deserialize)]
pub struct ComponenteInput {
    pub nome: String,
    pub peso: i64,
}

impl TryFrom<ComponenteInput> for ComponenteAvaliacao {
    type Error = ValidationError;

    fn try_from(input: ComponenteInput) -> Result<Self, Self::Error> {
        ComponenteAvaliacao::new(input.nome, input.peso)
    }
}

impl TryFrom<FucInput> for Fuc {
    type Error = ValidationError;

    fn try_from(input: FucInput) -> Result<Self, Self::Error> {
        let avaliacao = input
            .avaliacao
            .into_iter()
            .map(ComponenteAvaliacao::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Fuc::new(
            input.codigo,
            input.nome,
            input.ects,
            input.observacoes,
            avaliacao,
        )
    }
}

/// Parses a catalog from JSON text and validates every record.
pub fn load_catalog(json: &str) -> Result<Vec<Fuc>, CatalogError> {
    let input: CatalogInput = serde_json::from_str(json)?;
    let fucs = input
        .fucs
        .into_iter()
        .map(Fuc::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(fucs)
}
