pub mod errors;

pub use errors::{
    BuilderError, BuilderErrorCategory, BuilderResult, GenerateResult, LoadResult,
};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const METHOD_OPTIONS: [&str; 5] = ["b3lyp", "mp2", "ump2", "ccsd", "uccsd"];
pub const BASIS_SET_OPTIONS: [&str; 10] = [
    "AM1",
    "PM3",
    "PM6",
    "STO-3G",
    "3-21G",
    "6-31G*",
    "6-311G**",
    "6-311+G**",
    "aug-cc-pVDZ",
    "SPK-DZP",
];

pub const DEFAULT_OUTPUT_FILE: &str = "optg.inp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum RunType {
    #[default]
    Optimize,
    Energy,
}

impl RunType {
    pub const ALL: [RunType; 2] = [Self::Optimize, Self::Energy];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Optimize => "OPTIMIZE",
            Self::Energy => "ENERGY",
        }
    }
}

impl Display for RunType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for RunType {
    type Err = BuilderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| {
                BuilderError::input_validation(
                    "INPUT.RUN_TYPE",
                    format!(
                        "unsupported run type '{}'; expected one of {}",
                        value,
                        join_options(Self::ALL.iter().map(|run| run.as_str()))
                    ),
                )
            })
    }
}

impl TryFrom<String> for RunType {
    type Error = BuilderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum ScfType {
    #[default]
    Rhf,
    Uhf,
    Rohf,
}

impl ScfType {
    pub const ALL: [ScfType; 3] = [Self::Rhf, Self::Uhf, Self::Rohf];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rhf => "RHF",
            Self::Uhf => "UHF",
            Self::Rohf => "ROHF",
        }
    }
}

impl Display for ScfType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for ScfType {
    type Err = BuilderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| {
                BuilderError::input_validation(
                    "INPUT.SCF_TYPE",
                    format!(
                        "unsupported SCF type '{}'; expected one of {}",
                        value,
                        join_options(Self::ALL.iter().map(|scf| scf.as_str()))
                    ),
                )
            })
    }
}

impl TryFrom<String> for ScfType {
    type Error = BuilderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Every parameter the generated input deck needs apart from the geometry.
///
/// `method` and `basis_set` stay as the text the user picked: the method
/// casing flows into `DFTTYP=` and the basis name into `GBASIS=` unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormState {
    pub memory_words: u64,
    pub memory_ddi: u64,
    pub spin: u32,
    pub charge: i32,
    pub output_file: String,
    pub method: String,
    pub run_type: RunType,
    pub scf_type: ScfType,
    pub basis_set: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            memory_words: 50,
            memory_ddi: 30,
            spin: 1,
            charge: 0,
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            method: METHOD_OPTIONS[0].to_string(),
            run_type: RunType::default(),
            scf_type: ScfType::default(),
            basis_set: BASIS_SET_OPTIONS[0].to_string(),
        }
    }
}

impl FormState {
    /// Parses a JSON form file; keys that are absent keep their defaults.
    pub fn from_json_str(source: &str) -> BuilderResult<Self> {
        let form = serde_json::from_str::<Self>(source).map_err(|source| {
            BuilderError::input_validation(
                "INPUT.FORM_PARSE",
                format!("failed to parse form file: {}", source),
            )
        })?;
        form.validate_choices()?;
        Ok(form)
    }

    /// Rejects choices that are not on the method or basis-set option lists.
    pub fn validate_choices(&self) -> BuilderResult<()> {
        if !is_listed_method(&self.method) {
            return Err(BuilderError::input_validation(
                "INPUT.FORM_METHOD",
                format!(
                    "unsupported method '{}'; expected one of {}",
                    self.method,
                    join_options(METHOD_OPTIONS)
                ),
            ));
        }

        if !is_listed_basis_set(&self.basis_set) {
            return Err(BuilderError::input_validation(
                "INPUT.FORM_BASIS_SET",
                format!(
                    "unsupported basis set '{}'; expected one of {}",
                    self.basis_set,
                    join_options(BASIS_SET_OPTIONS)
                ),
            ));
        }

        if self.output_file.is_empty() {
            return Err(BuilderError::input_validation(
                "INPUT.FORM_OUTPUT_FILE",
                "output file name must not be empty",
            ));
        }

        Ok(())
    }
}

pub fn is_listed_method(method: &str) -> bool {
    METHOD_OPTIONS
        .iter()
        .any(|option| option.eq_ignore_ascii_case(method))
}

pub fn is_listed_basis_set(basis_set: &str) -> bool {
    BASIS_SET_OPTIONS.contains(&basis_set)
}

fn join_options<'a>(options: impl IntoIterator<Item = &'a str>) -> String {
    options.into_iter().collect::<Vec<_>>().join(", ")
}
