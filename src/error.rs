use thiserror::Error;

/// The only failure the conversion pipeline can surface: the input could
/// not be read. Parsing and rendering themselves never fail; malformed
/// input degrades to a best-effort structure instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
