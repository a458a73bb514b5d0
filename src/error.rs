use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxsvg operations
#[derive(Error, Diagnostic, Debug)]
pub enum PxError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pxsvg::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxsvg::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pxsvg::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(pxsvg::config))]
    InvalidConfiguration {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Block ({x}, {y}) is outside the {width}x{height} sampling area")]
    #[diagnostic(
        code(pxsvg::out_of_bounds),
        help("Grid dimensions must be floored to whole blocks before sampling")
    )]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    #[error("Failed to read source pixel ({x}, {y}): {message}")]
    #[diagnostic(code(pxsvg::source))]
    SourceRead { x: u32, y: u32, message: String },

    #[error("Build error: {message}")]
    #[diagnostic(code(pxsvg::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PxError>;
