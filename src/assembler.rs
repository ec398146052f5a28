//! The external assembler seam.
//!
//! Turning assembly source into a listing is not done by this crate. The
//! surrounding page supplies the routine, and the crate only sees it through
//! the [`Assembler`] trait: source text in, listing text out.

use thiserror::Error;

/// Failure reported by an [`Assembler`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssembleError {
    /// The assembler rejected the source or threw while running.
    #[error("{0}")]
    Failed(String),

    /// The assembler returned something other than text.
    #[error("assembler returned a non-text value")]
    NonText,
}

/// Anything that can turn assembly source into listing text.
///
/// Closures implement it directly:
///
/// ```
/// use asm_listing_drop::{AssembleError, Assembler};
///
/// let upper = |source: &str| -> Result<String, AssembleError> { Ok(source.to_uppercase()) };
/// assert_eq!(upper.assemble("nop").unwrap(), "NOP");
/// ```
pub trait Assembler {
    /// Assemble `source` and return the listing text.
    fn assemble(&self, source: &str) -> Result<String, AssembleError>;
}

impl<F> Assembler for F
where
    F: Fn(&str) -> Result<String, AssembleError>,
{
    fn assemble(&self, source: &str) -> Result<String, AssembleError> {
        self(source)
    }
}
