use crate::composer::{compose_document, generate_input_file};
use crate::domain::{FormState, GenerateResult, LoadResult};
use crate::geometry::{GeometrySummary, GeometryText, load_geometry_file};
use std::path::{Path, PathBuf};

/// Form values plus the most recently loaded geometry.
///
/// A failed load leaves the stored geometry untouched; a successful one
/// replaces it entirely.
#[derive(Debug, Clone, Default)]
pub struct BuilderSession {
    pub form: FormState,
    geometry: GeometryText,
}

impl BuilderSession {
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            geometry: GeometryText::default(),
        }
    }

    pub fn geometry(&self) -> &GeometryText {
        &self.geometry
    }

    pub fn load_geometry(&mut self, path: &Path) -> LoadResult<GeometrySummary> {
        let parsed = load_geometry_file(path)?;
        self.geometry = parsed.text;
        Ok(parsed.summary)
    }

    pub fn preview(&self) -> GenerateResult<String> {
        compose_document(&self.form, &self.geometry)
    }

    pub fn generate(&self, working_dir: &Path) -> GenerateResult<PathBuf> {
        generate_input_file(&self.form, &self.geometry, working_dir)
    }
}
