use xmlforge_record::{
    Constraint, FieldMetadata, FieldRole, TypeMetadata, ValidationError, Value, XmlRecord,
    validate,
};

static TURMA_METADATA: TypeMetadata = TypeMetadata {
    name: "Turma",
    item_name: "turma_item",
    adapter: None,
    element_order: &["nome"],
    fields: &[
        FieldMetadata {
            ident: "nome",
            role: FieldRole::Element,
            rename: None,
            transform: None,
            constraints: &[Constraint::NotBlank],
        },
        FieldMetadata {
            ident: "horas",
            role: FieldRole::Element,
            rename: None,
            transform: None,
            constraints: &[Constraint::Positive],
        },
        FieldMetadata {
            ident: "media",
            role: FieldRole::Element,
            rename: None,
            transform: None,
            constraints: &[Constraint::Positive],
        },
        FieldMetadata {
            ident: "alunos",
            role: FieldRole::Element,
            rename: None,
            transform: None,
            constraints: &[Constraint::NotEmpty],
        },
        FieldMetadata {
            ident: "notas",
            role: FieldRole::Plain,
            rename: None,
            transform: None,
            constraints: &[],
        },
    ],
};

static ALUNO_METADATA: TypeMetadata = TypeMetadata {
    name: "Aluno",
    item_name: "aluno",
    adapter: None,
    element_order: &[],
    fields: &[FieldMetadata {
        ident: "nome",
        role: FieldRole::Attribute,
        rename: None,
        transform: None,
        constraints: &[],
    }],
};

struct Aluno {
    nome: String,
}

impl XmlRecord for Aluno {
    fn metadata(&self) -> &'static TypeMetadata {
        &ALUNO_METADATA
    }

    fn values(&self) -> Vec<Value<'_>> {
        vec![Value::Text(&self.nome)]
    }
}

struct Turma {
    nome: String,
    horas: i64,
    media: f64,
    alunos: Vec<Aluno>,
    notas: String,
}

impl XmlRecord for Turma {
    fn metadata(&self) -> &'static TypeMetadata {
        &TURMA_METADATA
    }

    fn values(&self) -> Vec<Value<'_>> {
        vec![
            Value::Text(&self.nome),
            Value::Int(self.horas),
            Value::Float(self.media),
            Value::List(self.alunos.iter().map(|a| a as &dyn XmlRecord).collect()),
            Value::Text(&self.notas),
        ]
    }
}

fn sample_turma() -> Turma {
    Turma {
        nome: "Programação".to_string(),
        horas: 42,
        media: 14.5,
        alunos: vec![Aluno {
            nome: "Ana".to_string(),
        }],
        notas: String::new(),
    }
}

#[test]
fn test_valid_record_passes() {
    assert_eq!(validate(&sample_turma()), Ok(()));
}

#[test]
fn test_blank_text_is_rejected() {
    let mut turma = sample_turma();
    turma.nome = "   ".to_string();

    assert_eq!(
        validate(&turma),
        Err(ValidationError::Blank { field: "nome" })
    );
}

#[test]
fn test_zero_and_negative_numbers_are_rejected() {
    let mut turma = sample_turma();
    turma.horas = 0;
    assert_eq!(
        validate(&turma),
        Err(ValidationError::NotPositive {
            field: "horas",
            value: 0.0
        })
    );

    let mut turma = sample_turma();
    turma.media = -1.5;
    assert_eq!(
        validate(&turma),
        Err(ValidationError::NotPositive {
            field: "media",
            value: -1.5
        })
    );
}

#[test]
fn test_empty_list_is_rejected() {
    let mut turma = sample_turma();
    turma.alunos.clear();

    assert_eq!(
        validate(&turma),
        Err(ValidationError::Empty { field: "alunos" })
    );
}

#[test]
fn test_fail_fast_reports_first_violation_in_declaration_order() {
    let mut turma = sample_turma();
    turma.nome = String::new();
    turma.horas = -3;
    turma.alunos.clear();

    // `nome` is declared before `horas` and `alunos`, so it wins.
    assert_eq!(
        validate(&turma),
        Err(ValidationError::Blank { field: "nome" })
    );
}

#[test]
fn test_unconstrained_fields_are_never_inspected() {
    // `notas` is blank but carries no constraint.
    let turma = sample_turma();
    assert!(turma.notas.is_empty());
    assert_eq!(validate(&turma), Ok(()));
}

#[test]
fn test_misapplied_constraint_is_a_metadata_defect() {
    static BAD_METADATA: TypeMetadata = TypeMetadata {
        name: "Mau",
        item_name: "mau_item",
        adapter: None,
        element_order: &[],
        fields: &[FieldMetadata {
            ident: "nome",
            role: FieldRole::Element,
            rename: None,
            transform: None,
            constraints: &[Constraint::NotEmpty],
        }],
    };

    struct Mau {
        nome: String,
    }

    impl XmlRecord for Mau {
        fn metadata(&self) -> &'static TypeMetadata {
            &BAD_METADATA
        }

        fn values(&self) -> Vec<Value<'_>> {
            vec![Value::Text(&self.nome)]
        }
    }

    let mau = Mau {
        nome: "x".to_string(),
    };
    assert_eq!(
        validate(&mau),
        Err(ValidationError::Unsupported {
            field: "nome",
            constraint: Constraint::NotEmpty
        })
    );
}

#[test]
fn test_value_arity_mismatch_is_reported() {
    struct Curto;

    impl XmlRecord for Curto {
        fn metadata(&self) -> &'static TypeMetadata {
            &TURMA_METADATA
        }

        fn values(&self) -> Vec<Value<'_>> {
            vec![Value::Text("apenas um")]
        }
    }

    assert_eq!(
        validate(&Curto),
        Err(ValidationError::Arity {
            type_name: "Turma",
            expected: 5,
            actual: 1
        })
    );
}
