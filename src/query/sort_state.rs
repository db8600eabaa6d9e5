use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SortDirection {
    Ascending,
    Descending
}

impl SortDirection {
    pub fn flipped(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending
        }
    }
}

/// The per-view sort state machine: one active key plus a direction.
///
/// Toggling the active key flips direction; selecting a different key resets
/// to `default_on_key_change`. The reset direction is an explicit parameter
/// because views legitimately differ (the leaderboard resets to descending,
/// the match-history table to ascending).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortState<K: Copy + PartialEq> {
    pub key: K,
    pub direction: SortDirection,
    default_on_key_change: SortDirection
}

impl<K: Copy + PartialEq> SortState<K> {
    pub fn new(key: K, direction: SortDirection, default_on_key_change: SortDirection) -> SortState<K> {
        SortState {
            key,
            direction,
            default_on_key_change
        }
    }

    pub fn toggle(&mut self, key: K) {
        if key == self.key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = self.default_on_key_change;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Field {
        Name,
        Rating
    }

    #[test]
    fn test_toggling_active_key_flips_direction() {
        let mut state = SortState::new(Field::Rating, SortDirection::Descending, SortDirection::Descending);

        state.toggle(Field::Rating);
        assert_eq!(state.direction, SortDirection::Ascending);

        state.toggle(Field::Rating);
        assert_eq!(state.direction, SortDirection::Descending);
    }

    #[test]
    fn test_new_key_resets_to_configured_default() {
        let mut state = SortState::new(Field::Rating, SortDirection::Ascending, SortDirection::Descending);

        state.toggle(Field::Name);
        assert_eq!(state.key, Field::Name);
        assert_eq!(state.direction, SortDirection::Descending);
    }

    #[test]
    fn test_ascending_reset_convention() {
        let mut state = SortState::new(Field::Rating, SortDirection::Descending, SortDirection::Ascending);

        state.toggle(Field::Name);
        assert_eq!(state.direction, SortDirection::Ascending);
    }
}
