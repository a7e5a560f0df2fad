//! xmlforge demonstration harness.
//!
//! Builds a small course catalog (or loads one from JSON), serializes it
//! through the declarative engine and prints the XML or writes it to a
//! file.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use xmlforge_catalog::{ComponenteAvaliacao, Fuc, load_catalog, registry};
use xmlforge_record::XmlRecord;
use xmlforge_xml::to_xml_string_all;

#[derive(Parser)]
#[command(
    name = "xmlforge",
    about = "Serialize structured course-catalog records to XML",
    version
)]
struct Cli {
    /// Catalog JSON file to serialize. Uses built-in sample records when
    /// omitted.
    #[arg(long, env = "XMLFORGE_INPUT")]
    input: Option<PathBuf>,

    /// Write the XML here instead of printing to stdout.
    #[arg(long, env = "XMLFORGE_OUTPUT")]
    output: Option<PathBuf>,

    /// Log level filter.
    #[arg(long, default_value = "info", env = "XMLFORGE_LOG")]
    log_level: String,
}

fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("xmlforge={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// The built-in sample catalog: two course units with two evaluation
/// components each.
fn sample_catalog() -> anyhow::Result<Vec<Fuc>> {
    let fuc1 = Fuc::new(
        "M4310",
        "Programação Avançada",
        6.0,
        "N/A",
        vec![
            ComponenteAvaliacao::new("Quizzes", 20)?,
            ComponenteAvaliacao::new("Projeto", 80)?,
        ],
    )?;

    let fuc2 = Fuc::new(
        "M4311",
        "Estruturas de Dados",
        5.0,
        "N/A",
        vec![
            ComponenteAvaliacao::new("Exame", 50)?,
            ComponenteAvaliacao::new("Participação", 10)?,
        ],
    )?;

    Ok(vec![fuc1, fuc2])
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let fucs = match &cli.input {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog from {}", path.display()))?;
            let fucs = load_catalog(&json)
                .with_context(|| format!("invalid catalog in {}", path.display()))?;
            info!(path = %path.display(), units = fucs.len(), "loaded catalog");
            fucs
        }
        None => sample_catalog()?,
    };

    let records: Vec<&dyn XmlRecord> = fucs.iter().map(|f| f as &dyn XmlRecord).collect();
    let xml = to_xml_string_all(&records, registry(), 0)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &xml)
                .with_context(|| format!("failed to write XML to {}", path.display()))?;
            info!(path = %path.display(), units = records.len(), "wrote catalog XML");
        }
        None => print!("{xml}"),
    }

    Ok(())
}
