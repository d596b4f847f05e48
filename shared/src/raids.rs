use serde::{Deserialize, Serialize};

use crate::profile::{CounterRecord, PlayerProfile, SideStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaidSide {
    Total,
    Pmc,
    Scav,
}

impl RaidSide {
    pub fn label(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Pmc => "PMC",
            Self::Scav => "Scav",
        }
    }
}

/// Raid outcome totals for one side, reshaped from the overall counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaidStatRow {
    pub side: RaidSide,
    pub raids: i64,
    pub survived: i64,
    pub runthrough: i64,
    pub mia: i64,
    pub kia: i64,
    pub kills: i64,
}

impl RaidStatRow {
    /// Kills per death as shown in the stats table. Zero deaths yields
    /// `inf` (or `NaN` for an all-zero row); callers format the IEEE value
    /// instead of guarding the division.
    pub fn kd_ratio(&self) -> f64 {
        self.kills as f64 / self.kia as f64
    }
}

/// Counter key fragments for each derived column, in column order:
/// raids, survived, runthrough, mia, kia, kills.
const STAT_KEYS: [&[&str]; 6] = [
    &["Sessions"],
    &["ExitStatus", "Survived"],
    &["ExitStatus", "Runner"],
    &["ExitStatus", "Left"],
    &["ExitStatus", "Killed"],
    &["Kills"],
];

/// A counter matches when every fragment appears among its key tags,
/// order-independent, extra tags allowed.
fn counter_matches(counter: &CounterRecord, fragments: &[&str]) -> bool {
    fragments
        .iter()
        .all(|fragment| counter.key.iter().any(|tag| tag == fragment))
}

fn side_totals(stats: &SideStats) -> [i64; 6] {
    let Some(eft) = stats.eft.as_ref() else {
        return [0; 6];
    };
    let counters = &eft.over_all_counters.items;
    let mut totals = [0i64; 6];
    for (slot, fragments) in STAT_KEYS.iter().enumerate() {
        totals[slot] = counters
            .iter()
            .find(|counter| counter_matches(counter, fragments))
            .map(|counter| counter.value)
            .unwrap_or(0);
    }
    totals
}

fn row_from_totals(side: RaidSide, totals: [i64; 6]) -> RaidStatRow {
    RaidStatRow {
        side,
        raids: totals[0],
        survived: totals[1],
        runthrough: totals[2],
        mia: totals[3],
        kia: totals[4],
        kills: totals[5],
    }
}

/// Flatten per-side overall counters into `[Total, PMC, Scav]` rows.
///
/// A profile without eft-format PMC stats yields no rows at all; a missing
/// scav side merely contributes zeros.
pub fn aggregate_raid_stats(profile: &PlayerProfile) -> Vec<RaidStatRow> {
    if profile.pmc_stats.eft.is_none() {
        return Vec::new();
    }
    let pmc = side_totals(&profile.pmc_stats);
    let scav = side_totals(&profile.scav_stats);
    let mut total = [0i64; 6];
    for slot in 0..total.len() {
        total[slot] = pmc[slot] + scav[slot];
    }
    vec![
        row_from_totals(RaidSide::Total, total),
        row_from_totals(RaidSide::Pmc, pmc),
        row_from_totals(RaidSide::Scav, scav),
    ]
}

#[cfg(test)]
mod tests {
    use super::{RaidSide, aggregate_raid_stats};
    use crate::profile::{
        CounterList, CounterRecord, EftStats, PlayerProfile, SideStats,
    };

    fn counter(key: &[&str], value: i64) -> CounterRecord {
        CounterRecord {
            key: key.iter().map(|tag| tag.to_string()).collect(),
            value,
        }
    }

    fn side_with_counters(items: Vec<CounterRecord>) -> SideStats {
        SideStats {
            eft: Some(EftStats {
                total_in_game_time: 0,
                over_all_counters: CounterList { items },
            }),
        }
    }

    #[test]
    fn returns_empty_without_eft_pmc_stats() {
        let profile = PlayerProfile::default();
        assert!(aggregate_raid_stats(&profile).is_empty());
    }

    #[test]
    fn zero_counters_produce_three_zero_rows() {
        let profile = PlayerProfile {
            pmc_stats: side_with_counters(Vec::new()),
            scav_stats: side_with_counters(Vec::new()),
            ..PlayerProfile::default()
        };

        let rows = aggregate_raid_stats(&profile);
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter().map(|r| r.side).collect::<Vec<_>>(),
            [RaidSide::Total, RaidSide::Pmc, RaidSide::Scav]
        );
        for row in rows {
            assert_eq!(
                (
                    row.raids,
                    row.survived,
                    row.runthrough,
                    row.mia,
                    row.kia,
                    row.kills
                ),
                (0, 0, 0, 0, 0, 0)
            );
        }
    }

    #[test]
    fn matches_counters_regardless_of_tag_order_and_extras() {
        let profile = PlayerProfile {
            pmc_stats: side_with_counters(vec![
                counter(&["Pmc", "Sessions"], 40),
                counter(&["Survived", "Pmc", "ExitStatus"], 25),
                counter(&["ExitStatus", "Killed", "Pmc"], 10),
                counter(&["Kills"], 120),
            ]),
            scav_stats: side_with_counters(vec![
                counter(&["Sessions", "Scav"], 15),
                counter(&["ExitStatus", "Runner", "Scav"], 3),
            ]),
            ..PlayerProfile::default()
        };

        let rows = aggregate_raid_stats(&profile);
        let pmc = rows[1];
        assert_eq!(pmc.raids, 40);
        assert_eq!(pmc.survived, 25);
        assert_eq!(pmc.kia, 10);
        assert_eq!(pmc.kills, 120);
        assert_eq!(pmc.runthrough, 0);

        let scav = rows[2];
        assert_eq!(scav.raids, 15);
        assert_eq!(scav.runthrough, 3);
    }

    #[test]
    fn total_row_is_elementwise_sum_of_both_sides() {
        let profile = PlayerProfile {
            pmc_stats: side_with_counters(vec![
                counter(&["Sessions"], 40),
                counter(&["ExitStatus", "Survived"], 25),
                counter(&["ExitStatus", "Left"], 2),
                counter(&["Kills"], 120),
            ]),
            scav_stats: side_with_counters(vec![
                counter(&["Sessions"], 15),
                counter(&["ExitStatus", "Survived"], 9),
                counter(&["Kills"], 31),
            ]),
            ..PlayerProfile::default()
        };

        let rows = aggregate_raid_stats(&profile);
        let (total, pmc, scav) = (rows[0], rows[1], rows[2]);
        assert_eq!(total.raids, pmc.raids + scav.raids);
        assert_eq!(total.survived, pmc.survived + scav.survived);
        assert_eq!(total.runthrough, pmc.runthrough + scav.runthrough);
        assert_eq!(total.mia, pmc.mia + scav.mia);
        assert_eq!(total.kia, pmc.kia + scav.kia);
        assert_eq!(total.kills, pmc.kills + scav.kills);
    }

    #[test]
    fn missing_scav_side_contributes_zeros() {
        let profile = PlayerProfile {
            pmc_stats: side_with_counters(vec![counter(&["Sessions"], 7)]),
            ..PlayerProfile::default()
        };

        let rows = aggregate_raid_stats(&profile);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].raids, 7);
        assert_eq!(rows[2].raids, 0);
    }

    #[test]
    fn kd_ratio_with_zero_deaths_is_non_finite_not_a_panic() {
        let profile = PlayerProfile {
            pmc_stats: side_with_counters(vec![counter(&["Kills"], 12)]),
            ..PlayerProfile::default()
        };

        let rows = aggregate_raid_stats(&profile);
        assert!(rows[1].kd_ratio().is_infinite());
        assert!(rows[2].kd_ratio().is_nan());
    }
}
