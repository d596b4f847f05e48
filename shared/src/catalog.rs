use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Item-catalog entry used for loadout and search lookups. Read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: String,
    pub name: String,
    pub icon_link: String,
}

pub type ItemCatalog = HashMap<String, ItemRecord>;

/// Key a flat catalog payload by item id for template lookups.
pub fn index_items(items: Vec<ItemRecord>) -> ItemCatalog {
    items
        .into_iter()
        .map(|item| (item.id.clone(), item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{ItemRecord, index_items};

    #[test]
    fn indexes_items_by_id() {
        let catalog = index_items(vec![
            ItemRecord {
                id: "tpl-a".into(),
                name: "Alpha".into(),
                icon_link: "/a.png".into(),
            },
            ItemRecord {
                id: "tpl-b".into(),
                name: "Beta".into(),
                icon_link: "/b.png".into(),
            },
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("tpl-b").map(|i| i.name.as_str()), Some("Beta"));
    }
}
