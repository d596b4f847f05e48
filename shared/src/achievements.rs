use serde::{Deserialize, Serialize};

use crate::profile::AchievementCompletionMap;

/// Achievement-catalog entry from the reference-data endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AchievementInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub players_completed_percent: f64,
}

/// A catalog achievement the player has completed.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedAchievement {
    pub info: AchievementInfo,
    /// Unix seconds at which the player completed it.
    pub completion_date: i64,
}

/// Join the achievement catalog against the profile's completion map,
/// preserving catalog order. Catalog entries the player has not completed
/// and profile ids unknown to the catalog are both dropped.
pub fn merge_achievements(
    catalog: &[AchievementInfo],
    completed: &AchievementCompletionMap,
) -> Vec<CompletedAchievement> {
    catalog
        .iter()
        .filter_map(|info| {
            let completion_date = *completed.get(&info.id)?;
            Some(CompletedAchievement {
                info: info.clone(),
                completion_date,
            })
        })
        .collect()
}
