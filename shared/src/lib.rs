pub mod achievements;
pub mod catalog;
pub mod duration;
pub mod level;
pub mod loadout;
pub mod profile;
pub mod raids;

pub use achievements::{AchievementInfo, CompletedAchievement, merge_achievements};
pub use catalog::{ItemCatalog, ItemRecord, index_items};
pub use duration::{Dhms, decompose_seconds};
pub use level::{GameMetadata, PlayerLevel, resolve_level};
pub use loadout::{LoadoutNode, build_loadout_tree};
pub use profile::*;
pub use raids::{RaidSide, RaidStatRow, aggregate_raid_stats};
