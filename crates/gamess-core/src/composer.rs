//! GAMESS input deck composition.
//!
//! Keyword derivation and templating are pure; only [`write_document`] and
//! [`generate_input_file`] touch the filesystem.

use crate::domain::{BuilderError, FormState, GenerateResult};
use crate::geometry::GeometryText;
use crate::serialization::write_text_document;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const MP2_LEVEL_KEYWORD: &str = "MPLEVL=2";
pub const CCSD_LEVEL_KEYWORD: &str = "CCTYP=CCSD";

pub const EXPANDED_BASIS_SET: &str = "6-311G**";
pub const EXPANDED_BASIS_KEYWORD: &str = "GBASIS=N311 NGAUSS=6 NDFUNC=1 NPFUNC=1";

pub const MAX_SCF_ITERATIONS: u32 = 200;
pub const MAX_OPTIMIZATION_STEPS: u32 = 100;
pub const DATA_TITLE: &str = "optg and freq";
pub const POINT_GROUP: &str = "C1";
pub const SECTION_TERMINATOR: &str = "$END";

pub fn level_of_theory_keyword(method: &str) -> String {
    let lowered = method.to_ascii_lowercase();
    match lowered.as_str() {
        "mp2" | "ump2" => MP2_LEVEL_KEYWORD.to_string(),
        "ccsd" | "uccsd" => CCSD_LEVEL_KEYWORD.to_string(),
        _ => format!("DFTTYP={method}"),
    }
}

pub fn basis_keyword(basis_set: &str) -> String {
    if basis_set == EXPANDED_BASIS_SET {
        EXPANDED_BASIS_KEYWORD.to_string()
    } else {
        format!("GBASIS={basis_set}")
    }
}

/// Builds the full deck in memory.
///
/// Fails with `INPUT.GEOMETRY_EMPTY` when no geometry has been loaded.
pub fn compose_document(form: &FormState, geometry: &GeometryText) -> GenerateResult<String> {
    if geometry.is_empty() {
        return Err(BuilderError::input_validation(
            "INPUT.GEOMETRY_EMPTY",
            "no geometry data loaded; load a geometry file before generating the input file",
        ));
    }

    let level = level_of_theory_keyword(&form.method);
    let basis = basis_keyword(&form.basis_set);
    debug!(%level, %basis, "derived keywords");

    let sections = [
        format!(
            "$CONTRL SCFTYP={} {} RUNTYP={} ICHARG={}",
            form.scf_type, level, form.run_type, form.charge
        ),
        format!(
            "COORD=UNIQUE MULT={} MAXIT={MAX_SCF_ITERATIONS} ISPHER=1 {SECTION_TERMINATOR}",
            form.spin
        ),
        format!(
            "$SYSTEM MWORDS={} MEMDDI={} {SECTION_TERMINATOR}",
            form.memory_words, form.memory_ddi
        ),
        format!("$STATPT NSTEP={MAX_OPTIMIZATION_STEPS} HSSEND=.T. {SECTION_TERMINATOR}"),
        format!("$BASIS {basis} {SECTION_TERMINATOR}"),
        format!("$GUESS GUESS=HUCKEL {SECTION_TERMINATOR}"),
        "$DATA".to_string(),
        DATA_TITLE.to_string(),
        POINT_GROUP.to_string(),
        geometry.as_str().to_string(),
        SECTION_TERMINATOR.to_string(),
    ];

    Ok(sections.join("\n"))
}

pub fn output_path(working_dir: &Path, form: &FormState) -> PathBuf {
    working_dir.join(&form.output_file)
}

pub fn write_document(path: &Path, document: &str) -> GenerateResult<()> {
    write_text_document(path, document).map_err(|source| {
        BuilderError::io_system(
            "IO.INPUT_WRITE",
            format!(
                "failed to create input file '{}': {}",
                path.display(),
                source
            ),
        )
    })
}

/// Composes the deck and writes it to `working_dir/<output_file>`.
pub fn generate_input_file(
    form: &FormState,
    geometry: &GeometryText,
    working_dir: &Path,
) -> GenerateResult<PathBuf> {
    let document = compose_document(form, geometry)?;
    let path = output_path(working_dir, form);
    write_document(&path, &document)?;
    info!(path = %path.display(), bytes = document.len(), "wrote GAMESS input file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::{
        EXPANDED_BASIS_KEYWORD, basis_keyword, compose_document, generate_input_file,
        level_of_theory_keyword,
    };
    use crate::domain::{
        BASIS_SET_OPTIONS, BuilderErrorCategory, FormState, RunType, ScfType,
    };
    use crate::geometry::{GeometryText, parse_geometry_source};
    use tempfile::TempDir;

    fn water_fragment() -> GeometryText {
        parse_geometry_source("2\n\nH 0.0 0.0 0.0\nO 0.0 0.0 1.0\n").text
    }

    #[test]
    fn perturbation_methods_map_case_insensitively() {
        for method in ["mp2", "MP2", "ump2", "Ump2"] {
            assert_eq!(level_of_theory_keyword(method), "MPLEVL=2");
        }
    }

    #[test]
    fn coupled_cluster_methods_map_case_insensitively() {
        for method in ["ccsd", "CCSD", "uccsd", "UCCSD"] {
            assert_eq!(level_of_theory_keyword(method), "CCTYP=CCSD");
        }
    }

    #[test]
    fn other_methods_become_dft_keywords_with_casing_preserved() {
        assert_eq!(level_of_theory_keyword("b3lyp"), "DFTTYP=b3lyp");
        assert_eq!(level_of_theory_keyword("B3LYP"), "DFTTYP=B3LYP");
    }

    #[test]
    fn basis_keywords_follow_the_option_text() {
        assert_eq!(basis_keyword("6-311G**"), EXPANDED_BASIS_KEYWORD);
        for option in BASIS_SET_OPTIONS.iter().filter(|option| **option != "6-311G**") {
            assert_eq!(basis_keyword(option), format!("GBASIS={option}"));
        }
    }

    #[test]
    fn empty_geometry_is_rejected_for_any_form() {
        let forms = [
            FormState::default(),
            FormState {
                method: "ccsd".to_string(),
                scf_type: ScfType::Rohf,
                run_type: RunType::Energy,
                charge: -2,
                ..FormState::default()
            },
        ];

        for form in forms {
            let error = compose_document(&form, &GeometryText::default())
                .expect_err("empty geometry should fail");
            assert_eq!(error.category(), BuilderErrorCategory::InputValidationError);
            assert_eq!(error.placeholder(), "INPUT.GEOMETRY_EMPTY");
        }
    }

    #[test]
    fn composed_document_matches_expected_layout() {
        let form = FormState {
            basis_set: "STO-3G".to_string(),
            ..FormState::default()
        };
        let document = compose_document(&form, &water_fragment()).expect("deck should compose");

        let expected = "$CONTRL SCFTYP=RHF DFTTYP=b3lyp RUNTYP=OPTIMIZE ICHARG=0\n\
COORD=UNIQUE MULT=1 MAXIT=200 ISPHER=1 $END\n\
$SYSTEM MWORDS=50 MEMDDI=30 $END\n\
$STATPT NSTEP=100 HSSEND=.T. $END\n\
$BASIS GBASIS=STO-3G $END\n\
$GUESS GUESS=HUCKEL $END\n\
$DATA\n\
optg and freq\n\
C1\n\
H  1\t0.0\t0.0\t0.0\n\
O  8\t0.0\t0.0\t1.0\n\
$END";
        assert_eq!(document, expected);
    }

    #[test]
    fn scalar_fields_are_substituted_positionally() {
        let form = FormState {
            memory_words: 400,
            memory_ddi: 0,
            spin: 3,
            charge: -1,
            method: "UMP2".to_string(),
            run_type: RunType::Energy,
            scf_type: ScfType::Uhf,
            basis_set: "6-311G**".to_string(),
            ..FormState::default()
        };
        let document = compose_document(&form, &water_fragment()).expect("deck should compose");
        let lines = document.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "$CONTRL SCFTYP=UHF MPLEVL=2 RUNTYP=ENERGY ICHARG=-1");
        assert_eq!(lines[1], "COORD=UNIQUE MULT=3 MAXIT=200 ISPHER=1 $END");
        assert_eq!(lines[2], "$SYSTEM MWORDS=400 MEMDDI=0 $END");
        assert_eq!(
            lines[4],
            "$BASIS GBASIS=N311 NGAUSS=6 NDFUNC=1 NPFUNC=1 $END"
        );
    }

    #[test]
    fn generation_writes_into_working_directory_and_overwrites() {
        let temp = TempDir::new().expect("tempdir should be created");
        let form = FormState {
            output_file: "h2o.inp".to_string(),
            ..FormState::default()
        };
        std::fs::write(temp.path().join("h2o.inp"), "old deck").expect("seed should be written");

        let path = generate_input_file(&form, &water_fragment(), temp.path())
            .expect("generation should succeed");

        assert_eq!(path, temp.path().join("h2o.inp"));
        let written = std::fs::read_to_string(&path).expect("deck should be readable");
        assert!(written.starts_with("$CONTRL SCFTYP=RHF"));
        assert!(written.ends_with("$END"));
        assert!(!written.contains("old deck"));
    }

    #[test]
    fn failed_generation_leaves_no_file() {
        let temp = TempDir::new().expect("tempdir should be created");
        let form = FormState::default();

        generate_input_file(&form, &GeometryText::default(), temp.path())
            .expect_err("empty geometry should fail");
        assert!(!temp.path().join("optg.inp").exists());
    }

    #[test]
    fn unwritable_destination_reports_io_error() {
        let temp = TempDir::new().expect("tempdir should be created");
        let form = FormState {
            output_file: "missing-dir/deck.inp".to_string(),
            ..FormState::default()
        };

        let error = generate_input_file(&form, &water_fragment(), temp.path())
            .expect_err("write into missing directory should fail");
        assert_eq!(error.category(), BuilderErrorCategory::IoSystemError);
        assert_eq!(error.placeholder(), "IO.INPUT_WRITE");
    }
}
