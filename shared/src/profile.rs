use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Achievement id → completion unix timestamp.
pub type AchievementCompletionMap = HashMap<String, i64>;

/// Root profile entity for one account, as delivered by the profile API.
///
/// Every field defaults so a still-loading placeholder can be constructed
/// with `PlayerProfile::default()` and flow through all derivations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    pub aid: u64,
    pub info: PlayerInfo,
    pub customization: serde_json::Value,
    pub skills: serde_json::Value,
    pub equipment: Equipment,
    pub achievements: AchievementCompletionMap,
    #[serde(rename = "favoriteItems")]
    pub favorite_items: Vec<EquipmentItem>,
    #[serde(rename = "pmcStats")]
    pub pmc_stats: SideStats,
    #[serde(rename = "scavStats")]
    pub scav_stats: SideStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerInfo {
    pub nickname: String,
    pub side: String,
    pub experience: i64,
    pub member_category: i32,
    pub banned_state: bool,
    pub banned_until: i64,
    /// Unix seconds of the account's current wipe registration.
    pub registration_date: i64,
}

/// Equipment block: declared root container id plus the flat item list.
/// `root_id` stays `None` until a real profile arrives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Equipment {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub root_id: Option<String>,
    #[serde(rename = "Items")]
    pub items: Vec<EquipmentItem>,
}

/// One inventory item. Items reference their container through `parent_id`,
/// forming a forest rooted at the equipment block's `root_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentItem {
    #[serde(rename = "_id")]
    pub id: String,
    /// Template (catalog) id of the item.
    #[serde(rename = "_tpl")]
    pub tpl: String,
    #[serde(rename = "parentId", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(rename = "slotId", skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upd: Option<ItemUpd>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemUpd {
    #[serde(rename = "StackObjectsCount", skip_serializing_if = "Option::is_none")]
    pub stack_objects_count: Option<i64>,
}

/// Per-side stats wrapper. Profiles predating the eft stats format carry no
/// `eft` object at all, so consumers must treat `None` as "no data".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eft: Option<EftStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EftStats {
    pub total_in_game_time: i64,
    pub over_all_counters: CounterList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterList {
    #[serde(rename = "Items")]
    pub items: Vec<CounterRecord>,
}

/// A single named counter. `key` is an ordered tag list identifying what the
/// counter measures; matching against it is order-independent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterRecord {
    #[serde(rename = "Key")]
    pub key: Vec<String>,
    #[serde(rename = "Value")]
    pub value: i64,
}

/// One hit from the name-search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSearchEntry {
    pub aid: u64,
    pub name: String,
}
