//! Slot layouts for the inventory panel and the hotbar.

use blockscape_kernel::InventoryItem;
use serde::Serialize;

/// Slots in the inventory panel: four rows of nine.
pub const INVENTORY_SLOTS: usize = 36;
/// Slots in the hotbar.
pub const HOTBAR_SLOTS: usize = 9;

/// One cell of a slot grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub index: usize,
    pub item: Option<SlotItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotItem {
    pub id: u32,
    pub name: String,
    pub icon: String,
    /// Shown only for stacks larger than one.
    pub count_label: Option<String>,
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }
}

impl From<&InventoryItem> for SlotItem {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            icon: item.icon.clone(),
            count_label: (item.count > 1).then(|| item.count.to_string()),
        }
    }
}

/// Items in list order, then empty slots, `len` in total. Items past `len`
/// are not shown.
fn layout(items: &[InventoryItem], len: usize) -> Vec<Slot> {
    (0..len)
        .map(|index| Slot {
            index,
            item: items.get(index).map(SlotItem::from),
        })
        .collect()
}

pub fn inventory_panel(items: &[InventoryItem]) -> Vec<Slot> {
    layout(items, INVENTORY_SLOTS)
}

pub fn hotbar(items: &[InventoryItem]) -> Vec<Slot> {
    layout(items, HOTBAR_SLOTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockscape_kernel::starter_inventory;

    #[test]
    fn panel_has_fixed_size() {
        let slots = inventory_panel(&starter_inventory());
        assert_eq!(slots.len(), INVENTORY_SLOTS);
        assert_eq!(slots.iter().filter(|s| !s.is_empty()).count(), 4);
        assert!(slots[4..].iter().all(Slot::is_empty));
        assert_eq!(inventory_panel(&[]).len(), INVENTORY_SLOTS);
    }

    #[test]
    fn hotbar_truncates_and_pads() {
        let many: Vec<InventoryItem> = (1..=12)
            .map(|id| InventoryItem::new(id, "Stone", "square", 2))
            .collect();
        let bar = hotbar(&many);
        assert_eq!(bar.len(), HOTBAR_SLOTS);
        assert_eq!(bar[8].item.as_ref().map(|i| i.id), Some(9));

        let bar = hotbar(&starter_inventory());
        assert_eq!(bar.len(), HOTBAR_SLOTS);
        assert_eq!(bar[0].item.as_ref().map(|i| i.icon.as_str()), Some("square"));
        assert!(bar[4].is_empty());
    }

    #[test]
    fn count_label_only_for_stacks() {
        let bar = hotbar(&starter_inventory());
        let labels: Vec<Option<&str>> = bar[..4]
            .iter()
            .map(|s| s.item.as_ref().and_then(|i| i.count_label.as_deref()))
            .collect();
        assert_eq!(labels, vec![Some("64"), Some("32"), None, None]);
    }
}
