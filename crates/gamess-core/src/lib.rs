//! Building blocks for writing GAMESS input decks from an XYZ geometry.

pub mod composer;
pub mod domain;
pub mod elements;
pub mod geometry;
pub mod serialization;
pub mod session;

pub use composer::{
    basis_keyword, compose_document, generate_input_file, level_of_theory_keyword,
};
pub use domain::{BuilderError, BuilderErrorCategory, BuilderResult, FormState, RunType, ScfType};
pub use geometry::{
    GeometrySummary, GeometryText, ParsedGeometry, load_geometry_file, parse_geometry_source,
};
pub use session::BuilderSession;
