use thiserror::Error;

/// A caller supplied a value outside the bounds the composer accepts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("weight {weight} for term '{term}' is outside {min}..={max}")]
    WeightOutOfRange {
        term: String,
        weight: f64,
        min: f64,
        max: f64,
    },
    #[error("intensity {intensity} for reference image {index} is outside {min}..={max}")]
    IntensityOutOfRange {
        index: usize,
        intensity: f64,
        min: f64,
        max: f64,
    },
    #[error("weighted term is empty")]
    EmptyTerm,
    #[error("weighted term '{term}' contains reserved character '{character}'")]
    ReservedCharacter { term: String, character: char },
    #[error("malformed weighted token '{0}'")]
    MalformedToken(String),
}

/// The trait catalog cannot serve a draw or lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown world '{0}'")]
    UnknownWorld(String),
    #[error("no options available for '{category}'")]
    EmptyOptions { category: String },
    #[error("world '{world}' has an empty {table} list")]
    EmptyWorldTable { world: String, table: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComposeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type ComposeResult<T> = Result<T, ComposeError>;
