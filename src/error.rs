//! Unified converter error type used across all phases.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Parse,
    Validate,
    Convert,
    Emit,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Parse => write!(f, "Parse"),
            Phase::Validate => write!(f, "Validate"),
            Phase::Convert => write!(f, "Convert"),
            Phase::Emit => write!(f, "Emit"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConverterError {
    pub code: String,
    pub phase: Phase,
    pub message: String,
    /// Identity of the offending legacy element, e.g. `block[3] (blocks_throttle)`.
    pub element: Option<String>,
}

impl std::fmt::Display for ConverterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.element {
            Some(el) => write!(
                f,
                "[{}:{}] {} (element '{}')",
                self.phase, self.code, self.message, el
            ),
            None => write!(f, "[{}:{}] {}", self.phase, self.code, self.message),
        }
    }
}

impl std::error::Error for ConverterError {}

impl ConverterError {
    pub fn parse(code: &str, message: impl Into<String>) -> Self {
        ConverterError {
            code: code.into(),
            phase: Phase::Parse,
            message: message.into(),
            element: None,
        }
    }

    pub fn validate(code: &str, message: impl Into<String>, element: Option<String>) -> Self {
        ConverterError {
            code: code.into(),
            phase: Phase::Validate,
            message: message.into(),
            element,
        }
    }

    pub fn convert(code: &str, message: impl Into<String>, element: Option<String>) -> Self {
        ConverterError {
            code: code.into(),
            phase: Phase::Convert,
            message: message.into(),
            element,
        }
    }

    pub fn emit(code: &str, message: impl Into<String>) -> Self {
        ConverterError {
            code: code.into(),
            phase: Phase::Emit,
            message: message.into(),
            element: None,
        }
    }
}

/// Low-level failures raised while reading a legacy document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read flow graph: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("unexpected flow graph layout: {0}")]
    De(#[from] quick_xml::DeError),
}

impl From<LoadError> for ConverterError {
    fn from(e: LoadError) -> Self {
        let code = match &e {
            LoadError::Io(_) => "P001",
            LoadError::Xml(_) | LoadError::De(quick_xml::DeError::InvalidXml(_)) => "P002",
            LoadError::De(_) => "P003",
        };
        ConverterError::parse(code, e.to_string())
    }
}
