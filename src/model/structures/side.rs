use strum_macros::{Display, EnumIter};

/// The side a participant played on.
///
/// `Unknown` is deliberate: a participant id that resolves to neither
/// membership list must not be silently attributed to a side, because that
/// would fabricate a win or loss label for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Side {
    Blue,
    Red,
    Unknown
}
