use strum_macros::{Display, EnumIter};

/// A match result expressed relative to one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ResolvedOutcome {
    Win,
    Loss,
    Draw,
    Unreported
}

impl ResolvedOutcome {
    /// Row styling class used by the display layer.
    pub fn display_class(&self) -> &'static str {
        match self {
            ResolvedOutcome::Win => "win",
            ResolvedOutcome::Loss => "loss",
            ResolvedOutcome::Draw => "draw",
            ResolvedOutcome::Unreported => "unreported"
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::structures::resolved_outcome::ResolvedOutcome;

    #[test]
    fn test_display_labels() {
        assert_eq!(ResolvedOutcome::Win.to_string(), "Win");
        assert_eq!(ResolvedOutcome::Loss.to_string(), "Loss");
        assert_eq!(ResolvedOutcome::Draw.to_string(), "Draw");
        assert_eq!(ResolvedOutcome::Unreported.to_string(), "Unreported");
    }

    #[test]
    fn test_display_classes() {
        assert_eq!(ResolvedOutcome::Win.display_class(), "win");
        assert_eq!(ResolvedOutcome::Unreported.display_class(), "unreported");
    }
}
