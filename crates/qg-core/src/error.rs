use crate::branch::Branch;
use crate::input::Field;
use crate::stem::Stem;

/// Alias for `Result<T, QgError>`.
pub type QgResult<T> = Result<T, QgError>;

/// Errors raised when building stem-branch values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QgError {
    /// A string did not name a known stem or branch.
    #[error("unknown symbol: \"{0}\"")]
    UnknownSymbol(String),

    /// A numeric index was outside the symbol's range.
    #[error("index {index} out of range 0..{len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Size of the symbol set.
        len: usize,
    },

    /// A stem and branch of different polarity were paired.
    #[error("{stem}{branch} is not a sexagenary pair: polarities differ")]
    PolarityMismatch {
        /// The stem of the rejected pair.
        stem: Stem,
        /// The branch of the rejected pair.
        branch: Branch,
    },

    /// Four pillars were requested before every independent field was set.
    #[error("four pillars incomplete, missing: {}", format_fields(.0))]
    Incomplete(Vec<Field>),
}

fn format_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
