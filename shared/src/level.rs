use serde::{Deserialize, Serialize};

/// One entry of the experience table. `exp` is the increment required to
/// advance from the previous level, not a cumulative threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLevel {
    pub level: u32,
    pub exp: i64,
}

/// Game metadata delivered by the reference-data endpoint. The level table
/// arrives sorted ascending by level; the walk below relies on that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameMetadata {
    pub player_levels: Vec<PlayerLevel>,
}

/// Map cumulative experience to a discrete level.
///
/// Walks the table accumulating increments: an exact hit returns that
/// entry's level, an overshoot returns the previous entry's level (the
/// overshot level has not been completed), and experience beyond the whole
/// table returns the final level. Zero experience is level 0 without
/// consulting the table; overshooting the very first entry is also level 0,
/// since no full level has been earned yet.
pub fn resolve_level(experience: i64, table: &[PlayerLevel]) -> u32 {
    if experience <= 0 {
        return 0;
    }
    let mut total = 0i64;
    for (idx, entry) in table.iter().enumerate() {
        total += entry.exp;
        if total == experience {
            return entry.level;
        }
        if total > experience {
            return match idx.checked_sub(1) {
                Some(prev) => table[prev].level,
                None => 0,
            };
        }
    }
    table.last().map(|entry| entry.level).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{PlayerLevel, resolve_level};

    fn two_tier_table() -> Vec<PlayerLevel> {
        vec![
            PlayerLevel { level: 1, exp: 100 },
            PlayerLevel { level: 2, exp: 200 },
        ]
    }

    #[test]
    fn zero_experience_is_level_zero() {
        assert_eq!(resolve_level(0, &two_tier_table()), 0);
    }

    #[test]
    fn exact_threshold_hits_that_level() {
        assert_eq!(resolve_level(100, &two_tier_table()), 1);
        assert_eq!(resolve_level(300, &two_tier_table()), 2);
    }

    #[test]
    fn mid_tier_overshoot_resolves_to_previous_level() {
        // 250 sits between the level-1 total (100) and the level-2 total (300).
        assert_eq!(resolve_level(250, &two_tier_table()), 1);
    }

    #[test]
    fn first_entry_overshoot_resolves_to_level_zero() {
        assert_eq!(resolve_level(50, &two_tier_table()), 0);
    }

    #[test]
    fn experience_beyond_table_caps_at_final_level() {
        assert_eq!(resolve_level(10_000, &two_tier_table()), 2);
    }

    #[test]
    fn empty_table_resolves_to_level_zero() {
        assert_eq!(resolve_level(500, &[]), 0);
    }
}
