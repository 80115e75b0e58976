use super::CliError;
use super::helpers::*;
use anyhow::Context;
use gamess_core::domain::{BASIS_SET_OPTIONS, FormState, METHOD_OPTIONS, RunType, ScfType};
use gamess_core::session::BuilderSession;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(clap::Args)]
pub(super) struct DeckArgs {
    /// XYZ geometry file (atom count line, comment line, then `symbol x y z`)
    #[arg(value_name = "GEOMETRY")]
    geometry: Option<PathBuf>,

    #[command(flatten)]
    form_args: FormArgs,
}

/// Form fields; each one overrides the form file and the built-in default.
#[derive(clap::Args, Default)]
pub(super) struct FormArgs {
    /// JSON form file with any subset of the form fields
    #[arg(long, value_name = "PATH")]
    pub(super) form: Option<PathBuf>,

    /// Memory in megawords ($SYSTEM MWORDS)
    #[arg(long)]
    pub(super) memory_words: Option<u64>,

    /// Distributed memory ($SYSTEM MEMDDI)
    #[arg(long)]
    pub(super) memory_ddi: Option<u64>,

    /// Spin multiplicity ($CONTRL MULT)
    #[arg(long)]
    pub(super) spin: Option<u32>,

    /// Molecular charge ($CONTRL ICHARG)
    #[arg(long, allow_negative_numbers = true)]
    pub(super) charge: Option<i32>,

    /// Output file name, created in the current directory
    #[arg(long, short)]
    pub(super) output: Option<String>,

    /// Method: b3lyp, mp2, ump2, ccsd or uccsd
    #[arg(long, value_parser = parse_method)]
    pub(super) method: Option<String>,

    /// Run type: OPTIMIZE or ENERGY
    #[arg(long)]
    pub(super) run_type: Option<RunType>,

    /// SCF type: RHF, UHF or ROHF
    #[arg(long)]
    pub(super) scf_type: Option<ScfType>,

    /// Basis set, e.g. STO-3G or 6-311G**
    #[arg(long, value_parser = parse_basis_set)]
    pub(super) basis_set: Option<String>,
}

#[derive(clap::Args)]
pub(super) struct OptionsArgs {
    /// Print the option lists as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct OptionCatalog {
    methods: Vec<&'static str>,
    run_types: Vec<RunType>,
    scf_types: Vec<ScfType>,
    basis_sets: Vec<&'static str>,
    defaults: FormState,
}

pub(super) fn run_generate_command(args: DeckArgs) -> Result<i32, CliError> {
    let session = prepare_session(&args)?;
    let working_dir = current_working_dir()?;
    let output_path = session.generate(&working_dir)?;

    println!(
        "GAMESS input file '{}' created successfully!",
        output_path.display()
    );
    Ok(0)
}

pub(super) fn run_preview_command(args: DeckArgs) -> Result<i32, CliError> {
    let session = prepare_session(&args)?;
    let document = session.preview()?;
    println!("{}", document);
    Ok(0)
}

pub(super) fn run_options_command(args: OptionsArgs) -> Result<i32, CliError> {
    let catalog = OptionCatalog {
        methods: METHOD_OPTIONS.to_vec(),
        run_types: RunType::ALL.to_vec(),
        scf_types: ScfType::ALL.to_vec(),
        basis_sets: BASIS_SET_OPTIONS.to_vec(),
        defaults: FormState::default(),
    };

    if args.json {
        let rendered = serde_json::to_string_pretty(&catalog)
            .context("failed to serialize option catalog")?;
        println!("{}", rendered);
        return Ok(0);
    }

    println!("{}", render_option_catalog(&catalog));
    Ok(0)
}

fn prepare_session(args: &DeckArgs) -> Result<BuilderSession, CliError> {
    let form = resolve_form(&args.form_args)?;
    info!(
        method = %form.method,
        basis_set = %form.basis_set,
        output = %form.output_file,
        "resolved form"
    );

    let mut session = BuilderSession::new(form);
    if let Some(geometry_path) = &args.geometry {
        let summary = session.load_geometry(geometry_path)?;
        eprintln!(
            "Loaded {} atom(s) from '{}'",
            summary.atoms,
            geometry_path.display()
        );
    }
    Ok(session)
}

fn render_option_catalog(catalog: &OptionCatalog) -> String {
    let defaults = &catalog.defaults;
    let rows = [
        (
            "Method",
            catalog.methods.join(", "),
            defaults.method.clone(),
        ),
        (
            "Run type",
            join_display(&catalog.run_types),
            defaults.run_type.to_string(),
        ),
        (
            "SCF type",
            join_display(&catalog.scf_types),
            defaults.scf_type.to_string(),
        ),
        (
            "Basis set",
            catalog.basis_sets.join(", "),
            defaults.basis_set.clone(),
        ),
        (
            "Memory (MW)",
            "integer".to_string(),
            defaults.memory_words.to_string(),
        ),
        (
            "Memory DDI",
            "integer".to_string(),
            defaults.memory_ddi.to_string(),
        ),
        ("Spin", "integer".to_string(), defaults.spin.to_string()),
        ("Charge", "integer".to_string(), defaults.charge.to_string()),
        (
            "Output file",
            "file name".to_string(),
            defaults.output_file.clone(),
        ),
    ];

    rows.iter()
        .map(|(label, choices, default)| format!("{label:<12} {choices} [default: {default}]"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_display<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
