use serde::{Deserialize, Serialize};

/// An item stack shown by the inventory panel and hotbar.
///
/// The session only hands these out read-only; nothing in the kernel
/// changes inventory contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    /// Icon name resolved by the display layer.
    pub icon: String,
    pub count: u32,
}

impl InventoryItem {
    pub fn new(id: u32, name: &str, icon: &str, count: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            icon: icon.to_string(),
            count,
        }
    }
}

/// The items every new session starts with.
pub fn starter_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new(1, "Dirt Block", "square", 64),
        InventoryItem::new(2, "Wood", "leaf", 32),
        InventoryItem::new(3, "Pickaxe", "axe", 1),
        InventoryItem::new(4, "Sword", "sword", 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_inventory_contents() {
        let items = starter_inventory();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].count, 64);
        assert_eq!(items[1].icon, "leaf");
        let ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
