//! The course-unit record types and their metadata tables.

use xmlforge_record::{
    Constraint, FieldMetadata, FieldRole, TypeMetadata, ValidationError, Value, XmlRecord,
    validate,
};

/// Metadata for [`ComponenteAvaliacao`]: both fields are attributes, the
/// weight runs through the percentage transformer, and list items use the
/// structural tag `componente`.
pub static COMPONENTE_METADATA: TypeMetadata = TypeMetadata {
    name: "ComponenteAvaliacao",
    item_name: "componente",
    adapter: None,
    element_order: &[],
    fields: &[
        FieldMetadata {
            ident: "nome",
            role: FieldRole::Attribute,
            rename: None,
            transform: None,
            constraints: &[Constraint::NotBlank],
        },
        FieldMetadata {
            ident: "peso",
            role: FieldRole::Attribute,
            rename: None,
            transform: Some("percentage"),
            constraints: &[Constraint::Positive],
        },
    ],
};

/// Metadata for [`Fuc`]: code as attribute, name/credits/components as
/// elements in that precedence order, observations excluded from output.
pub static FUC_METADATA: TypeMetadata = TypeMetadata {
    name: "Fuc",
    item_name: "unidade",
    adapter: Some("fuc"),
    element_order: &["nome", "ects", "avaliacao"],
    fields: &[
        FieldMetadata {
            ident: "codigo",
            role: FieldRole::Attribute,
            rename: None,
            transform: None,
            constraints: &[Constraint::NotBlank],
        },
        FieldMetadata {
            ident: "nome",
            role: FieldRole::Element,
            rename: None,
            transform: None,
            constraints: &[Constraint::NotBlank],
        },
        FieldMetadata {
            ident: "ects",
            role: FieldRole::Element,
            rename: None,
            transform: None,
            constraints: &[Constraint::Positive],
        },
        FieldMetadata {
            ident: "observacoes",
            role: FieldRole::Excluded,
            rename: None,
            transform: None,
            constraints: &[],
        },
        FieldMetadata {
            ident: "avaliacao",
            role: FieldRole::Element,
            rename: None,
            transform: None,
            constraints: &[Constraint::NotEmpty],
        },
    ],
};

/// One evaluation component of a course unit: a name and a weight.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponenteAvaliacao {
    nome: String,
    peso: i64,
}

impl ComponenteAvaliacao {
    /// Builds a component, rejecting blank names and non-positive weights.
    pub fn new(nome: impl Into<String>, peso: i64) -> Result<Self, ValidationError> {
        let componente = ComponenteAvaliacao {
            nome: nome.into(),
            peso,
        };
        validate(&componente)?;
        Ok(componente)
    }

    /// The component's name.
    pub fn nome(&self) -> &str {
        &self.nome
    }

    /// The component's weight.
    pub fn peso(&self) -> i64 {
        self.peso
    }
}

impl XmlRecord for ComponenteAvaliacao {
    fn metadata(&self) -> &'static TypeMetadata {
        &COMPONENTE_METADATA
    }

    fn values(&self) -> Vec<Value<'_>> {
        vec![Value::Text(&self.nome), Value::Int(self.peso)]
    }
}

/// A course unit: code, name, ECTS credits, internal observations and the
/// list of evaluation components.
#[derive(Debug, Clone, PartialEq)]
pub struct Fuc {
    codigo: String,
    nome: String,
    ects: f64,
    observacoes: String,
    avaliacao: Vec<ComponenteAvaliacao>,
}

impl Fuc {
    /// Builds a course unit, rejecting blank code or name, non-positive
    /// credits and an empty component list.
    pub fn new(
        codigo: impl Into<String>,
        nome: impl Into<String>,
        ects: f64,
        observacoes: impl Into<String>,
        avaliacao: Vec<ComponenteAvaliacao>,
    ) -> Result<Self, ValidationError> {
        let fuc = Fuc {
            codigo: codigo.into(),
            nome: nome.into(),
            ects,
            observacoes: observacoes.into(),
            avaliacao,
        };
        validate(&fuc)?;
        Ok(fuc)
    }

    /// The unit's code.
    pub fn codigo(&self) -> &str {
        &self.codigo
    }

    /// The unit's name.
    pub fn nome(&self) -> &str {
        &self.nome
    }

    /// The unit's ECTS credits.
    pub fn ects(&self) -> f64 {
        self.ects
    }

    /// Internal observations; never serialized.
    pub fn observacoes(&self) -> &str {
        &self.observacoes
    }

    /// The unit's evaluation components, in declaration order.
    pub fn avaliacao(&self) -> &[ComponenteAvaliacao] {
        &self.avaliacao
    }
}

impl XmlRecord for Fuc {
    fn metadata(&self) -> &'static TypeMetadata {
        &FUC_METADATA
    }

    fn values(&self) -> Vec<Value<'_>> {
        vec![
            Value::Text(&self.codigo),
            Value::Text(&self.nome),
            Value::Float(self.ects),
            Value::Text(&self.observacoes),
            Value::List(self.avaliacao.iter().map(|c| c as &dyn XmlRecord).collect()),
        ]
    }
}
