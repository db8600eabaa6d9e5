use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use strum_macros::EnumIter;

/// Wire code for a reported match result. An unreported match carries no
/// code at all (`Option<MatchOutcome>::None` on the record).
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[repr(u8)]
pub enum MatchOutcome {
    Draw = 0,
    BlueWin = 1,
    RedWin = 2
}

impl TryFrom<i32> for MatchOutcome {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(MatchOutcome::Draw),
            1 => Ok(MatchOutcome::BlueWin),
            2 => Ok(MatchOutcome::RedWin),
            _ => Err(())
        }
    }
}
