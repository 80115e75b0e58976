use super::CliError;
use super::commands::FormArgs;
use gamess_core::domain::{
    BASIS_SET_OPTIONS, BuilderError, BuilderResult, FormState, METHOD_OPTIONS, is_listed_basis_set,
    is_listed_method,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub(super) fn current_working_dir() -> BuilderResult<PathBuf> {
    std::env::current_dir().map_err(|source| {
        BuilderError::io_system(
            "IO.CLI_CURRENT_DIR",
            format!("failed to read current working directory: {}", source),
        )
    })
}

/// Accepts any casing of a listed method and keeps the text as typed.
pub(super) fn parse_method(value: &str) -> Result<String, String> {
    if is_listed_method(value) {
        Ok(value.to_string())
    } else {
        Err(format!("expected one of {}", METHOD_OPTIONS.join(", ")))
    }
}

pub(super) fn parse_basis_set(value: &str) -> Result<String, String> {
    if is_listed_basis_set(value) {
        Ok(value.to_string())
    } else {
        Err(format!("expected one of {}", BASIS_SET_OPTIONS.join(", ")))
    }
}

pub(super) fn read_form_file(path: &Path) -> BuilderResult<FormState> {
    let content = fs::read_to_string(path).map_err(|source| {
        BuilderError::io_system(
            "IO.FORM_READ",
            format!("failed to read form file '{}': {}", path.display(), source),
        )
    })?;
    FormState::from_json_str(&content)
}

/// Defaults, then the form file, then explicit flags.
pub(super) fn resolve_form(args: &FormArgs) -> Result<FormState, CliError> {
    let mut form = match &args.form {
        Some(path) => {
            debug!(path = %path.display(), "reading form file");
            read_form_file(path)?
        }
        None => FormState::default(),
    };

    if let Some(memory_words) = args.memory_words {
        form.memory_words = memory_words;
    }
    if let Some(memory_ddi) = args.memory_ddi {
        form.memory_ddi = memory_ddi;
    }
    if let Some(spin) = args.spin {
        form.spin = spin;
    }
    if let Some(charge) = args.charge {
        form.charge = charge;
    }
    if let Some(output) = &args.output {
        form.output_file = output.clone();
    }
    if let Some(method) = &args.method {
        form.method = method.clone();
    }
    if let Some(run_type) = args.run_type {
        form.run_type = run_type;
    }
    if let Some(scf_type) = args.scf_type {
        form.scf_type = scf_type;
    }
    if let Some(basis_set) = &args.basis_set {
        form.basis_set = basis_set.clone();
    }

    form.validate_choices()?;
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::{parse_basis_set, parse_method, resolve_form};
    use crate::cli::commands::FormArgs;
    use gamess_core::domain::{RunType, ScfType};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn method_parser_keeps_typed_casing() {
        assert_eq!(parse_method("MP2").as_deref(), Ok("MP2"));
        assert!(parse_method("hf").is_err());
    }

    #[test]
    fn basis_parser_is_exact() {
        assert_eq!(parse_basis_set("6-311+G**").as_deref(), Ok("6-311+G**"));
        assert!(parse_basis_set("sto-3g").is_err());
    }

    #[test]
    fn flags_override_form_file_values() {
        let temp = TempDir::new().expect("tempdir should be created");
        let form_path = temp.path().join("form.json");
        fs::write(
            &form_path,
            r#"{ "charge": 1, "spin": 2, "scf_type": "ROHF", "output_file": "from-file.inp" }"#,
        )
        .expect("form file should be written");

        let args = FormArgs {
            form: Some(form_path),
            spin: Some(3),
            run_type: Some(RunType::Energy),
            ..FormArgs::default()
        };
        let form = resolve_form(&args).expect("form should resolve");

        assert_eq!(form.charge, 1);
        assert_eq!(form.spin, 3);
        assert_eq!(form.scf_type, ScfType::Rohf);
        assert_eq!(form.run_type, RunType::Energy);
        assert_eq!(form.output_file, "from-file.inp");
        assert_eq!(form.memory_words, 50);
    }

    #[test]
    fn missing_form_file_is_an_io_error() {
        let temp = TempDir::new().expect("tempdir should be created");
        let args = FormArgs {
            form: Some(temp.path().join("absent.json")),
            ..FormArgs::default()
        };

        let error = resolve_form(&args).expect_err("missing form file should fail");
        let mapped = error.as_builder_error();
        assert_eq!(mapped.placeholder(), "IO.FORM_READ");
        assert_eq!(mapped.exit_code(), 3);
    }

    #[test]
    fn empty_output_name_is_rejected() {
        let args = FormArgs {
            output: Some(String::new()),
            ..FormArgs::default()
        };
        let error = resolve_form(&args).expect_err("empty output should fail");
        assert_eq!(error.as_builder_error().placeholder(), "INPUT.FORM_OUTPUT_FILE");

        let spaced = FormArgs {
            output: Some("  ".to_string()),
            ..FormArgs::default()
        };
        let form = resolve_form(&spaced).expect("whitespace name is a valid file name");
        assert_eq!(form.output_file, "  ");
    }
}
