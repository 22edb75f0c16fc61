//! Top-level error type for end-to-end solving.

use remap_parse::ParseError;
use remap_pipeline::PipelineError;
use std::error::Error;
use std::fmt;

/// Errors from [`solve`](crate::solve).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemapError {
    /// The input text is malformed.
    Parse(ParseError),
    /// The parsed stages or seeds could not form a pipeline run.
    Pipeline(PipelineError),
}

impl fmt::Display for RemapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Pipeline(e) => write!(f, "pipeline: {e}"),
        }
    }
}

impl Error for RemapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Pipeline(e) => Some(e),
        }
    }
}

impl From<ParseError> for RemapError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<PipelineError> for RemapError {
    fn from(e: PipelineError) -> Self {
        Self::Pipeline(e)
    }
}
