use crate::catalog::ItemCatalog;
use crate::profile::{Equipment, EquipmentItem};

/// Containment depth guard; the item list is externally supplied, so the
/// walk refuses to recurse past this even if the data loops.
const MAX_TREE_DEPTH: usize = 32;

/// One display node of the loadout tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadoutNode {
    pub id: String,
    pub name: String,
    pub icon_link: String,
    /// `"x {count}"`, present only for stacks of more than one.
    pub stack_label: Option<String>,
    pub children: Vec<LoadoutNode>,
}

/// Build the display tree rooted at the declared equipment container.
///
/// Returns `None` while the profile is still loading (no root id declared)
/// or when the declared root is missing from the item list. Child items
/// whose template is unknown to the catalog are skipped silently; the root
/// container itself is kept even when unresolvable, since it only frames
/// its children.
pub fn build_loadout_tree(equipment: &Equipment, catalog: &ItemCatalog) -> Option<LoadoutNode> {
    let root_id = equipment.root_id.as_deref()?;
    let root = equipment.items.iter().find(|item| item.id == root_id)?;
    let (name, icon_link) = catalog
        .get(&root.tpl)
        .map(|entry| (entry.name.clone(), entry.icon_link.clone()))
        .unwrap_or_default();
    Some(LoadoutNode {
        id: root.id.clone(),
        name,
        icon_link,
        stack_label: stack_label(root),
        children: child_nodes(&root.id, &equipment.items, catalog, 0),
    })
}

fn child_nodes(
    parent_id: &str,
    items: &[EquipmentItem],
    catalog: &ItemCatalog,
    depth: usize,
) -> Vec<LoadoutNode> {
    if depth >= MAX_TREE_DEPTH {
        return Vec::new();
    }
    items
        .iter()
        .filter(|item| item.parent_id.as_deref() == Some(parent_id))
        .filter_map(|item| {
            let entry = catalog.get(&item.tpl)?;
            Some(LoadoutNode {
                id: item.id.clone(),
                name: entry.name.clone(),
                icon_link: entry.icon_link.clone(),
                stack_label: stack_label(item),
                children: child_nodes(&item.id, items, catalog, depth + 1),
            })
        })
        .collect()
}

fn stack_label(item: &EquipmentItem) -> Option<String> {
    let count = item.upd.as_ref()?.stack_objects_count?;
    (count > 1).then(|| format!("x {count}"))
}

#[cfg(test)]
mod tests {
    use super::build_loadout_tree;
    use crate::catalog::{ItemCatalog, ItemRecord};
    use crate::profile::{Equipment, EquipmentItem, ItemUpd};

    fn item(id: &str, tpl: &str, parent: Option<&str>, stack: Option<i64>) -> EquipmentItem {
        EquipmentItem {
            id: id.to_string(),
            tpl: tpl.to_string(),
            parent_id: parent.map(str::to_string),
            slot_id: None,
            upd: stack.map(|count| ItemUpd {
                stack_objects_count: Some(count),
            }),
        }
    }

    fn catalog_of(tpls: &[(&str, &str)]) -> ItemCatalog {
        tpls.iter()
            .map(|(tpl, name)| {
                (
                    tpl.to_string(),
                    ItemRecord {
                        id: tpl.to_string(),
                        name: name.to_string(),
                        icon_link: format!("/icons/{tpl}.png"),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn loading_profile_has_no_tree() {
        let tree = build_loadout_tree(&Equipment::default(), &ItemCatalog::new());
        assert!(tree.is_none());
    }

    #[test]
    fn childless_root_yields_empty_children() {
        let equipment = Equipment {
            root_id: Some("root".into()),
            items: vec![item("root", "tpl-inv", None, None)],
        };
        let tree = build_loadout_tree(&equipment, &catalog_of(&[("tpl-inv", "Inventory")]))
            .expect("root should resolve");
        assert_eq!(tree.name, "Inventory");
        assert!(tree.children.is_empty());
    }

    #[test]
    fn nests_children_under_their_containers() {
        let equipment = Equipment {
            root_id: Some("root".into()),
            items: vec![
                item("root", "tpl-inv", None, None),
                item("rig", "tpl-rig", Some("root"), None),
                item("mag", "tpl-mag", Some("rig"), None),
                item("ammo", "tpl-ammo", Some("mag"), Some(30)),
            ],
        };
        let catalog = catalog_of(&[
            ("tpl-inv", "Inventory"),
            ("tpl-rig", "Chest rig"),
            ("tpl-mag", "Magazine"),
            ("tpl-ammo", "Cartridge"),
        ]);

        let tree = build_loadout_tree(&equipment, &catalog).expect("root should resolve");
        assert_eq!(tree.children.len(), 1);
        let rig = &tree.children[0];
        assert_eq!(rig.name, "Chest rig");
        let mag = &rig.children[0];
        assert_eq!(mag.name, "Magazine");
        let ammo = &mag.children[0];
        assert_eq!(ammo.name, "Cartridge");
        assert_eq!(ammo.stack_label.as_deref(), Some("x 30"));
        assert!(ammo.children.is_empty());
    }

    #[test]
    fn stack_label_only_for_stacks_above_one() {
        let equipment = Equipment {
            root_id: Some("root".into()),
            items: vec![
                item("root", "tpl-inv", None, None),
                item("single", "tpl-ammo", Some("root"), Some(1)),
                item("loose", "tpl-ammo", Some("root"), None),
                item("stack", "tpl-ammo", Some("root"), Some(3)),
            ],
        };
        let catalog = catalog_of(&[("tpl-inv", "Inventory"), ("tpl-ammo", "Cartridge")]);

        let tree = build_loadout_tree(&equipment, &catalog).expect("root should resolve");
        let labels: Vec<Option<&str>> = tree
            .children
            .iter()
            .map(|node| node.stack_label.as_deref())
            .collect();
        assert_eq!(labels, [None, None, Some("x 3")]);
    }

    #[test]
    fn skips_items_with_unknown_templates() {
        let equipment = Equipment {
            root_id: Some("root".into()),
            items: vec![
                item("root", "tpl-inv", None, None),
                item("known", "tpl-rig", Some("root"), None),
                item("unknown", "tpl-modded", Some("root"), None),
            ],
        };
        let catalog = catalog_of(&[("tpl-inv", "Inventory"), ("tpl-rig", "Chest rig")]);

        let tree = build_loadout_tree(&equipment, &catalog).expect("root should resolve");
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].id, "known");
    }

    #[test]
    fn self_referencing_item_cannot_recurse_forever() {
        let equipment = Equipment {
            root_id: Some("root".into()),
            items: vec![
                item("root", "tpl-inv", None, None),
                item("loop", "tpl-rig", Some("loop"), None),
            ],
        };
        let catalog = catalog_of(&[("tpl-inv", "Inventory"), ("tpl-rig", "Chest rig")]);

        // The self-parented item is unreachable from the root; the depth
        // guard keeps malformed parent chains bounded either way.
        let tree = build_loadout_tree(&equipment, &catalog).expect("root should resolve");
        assert!(tree.children.is_empty());
    }
}
