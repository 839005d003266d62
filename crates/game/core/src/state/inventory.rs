//! Player inventory layout and slot lookup.

use std::fmt;

use arrayvec::ArrayVec;

use super::{ArmorSlot, ItemStack};

/// Addressable inventory slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventorySlot {
    /// Hotbar slot `0..9`.
    Hotbar(u8),
    /// Main storage slot `0..27` (above the hotbar).
    Main(u8),
    Armor(ArmorSlot),
    OffHand,
}

impl fmt::Display for InventorySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventorySlot::Hotbar(index) => write!(f, "hotbar[{index}]"),
            InventorySlot::Main(index) => write!(f, "main[{index}]"),
            InventorySlot::Armor(slot) => write!(f, "armor[{slot}]"),
            InventorySlot::OffHand => f.write_str("offhand"),
        }
    }
}

pub const HOTBAR_SIZE: usize = 9;
pub const MAIN_SIZE: usize = 27;

/// Snapshot of the player inventory taken at the start of an evaluation.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InventorySnapshot {
    pub hotbar: ArrayVec<ItemStack, HOTBAR_SIZE>,
    pub main: ArrayVec<ItemStack, MAIN_SIZE>,
    pub armor: [ItemStack; 4],
    pub offhand: ItemStack,
}

impl InventorySnapshot {
    /// Inventory with every slot present and empty.
    pub fn empty() -> Self {
        let mut hotbar = ArrayVec::new();
        hotbar.extend(core::iter::repeat_n(ItemStack::EMPTY, HOTBAR_SIZE));
        let mut main = ArrayVec::new();
        main.extend(core::iter::repeat_n(ItemStack::EMPTY, MAIN_SIZE));
        Self {
            hotbar,
            main,
            armor: [ItemStack::EMPTY; 4],
            offhand: ItemStack::EMPTY,
        }
    }

    /// Places `stack` in `slot`; slots beyond the stored rows are ignored.
    #[must_use]
    pub fn with(mut self, slot: InventorySlot, stack: ItemStack) -> Self {
        if let Some(target) = self.slot_mut(slot) {
            *target = stack;
        }
        self
    }

    pub fn get(&self, slot: InventorySlot) -> Option<ItemStack> {
        match slot {
            InventorySlot::Hotbar(index) => self.hotbar.get(index as usize).copied(),
            InventorySlot::Main(index) => self.main.get(index as usize).copied(),
            InventorySlot::Armor(piece) => Some(self.armor[piece.index()]),
            InventorySlot::OffHand => Some(self.offhand),
        }
    }

    fn slot_mut(&mut self, slot: InventorySlot) -> Option<&mut ItemStack> {
        match slot {
            InventorySlot::Hotbar(index) => self.hotbar.get_mut(index as usize),
            InventorySlot::Main(index) => self.main.get_mut(index as usize),
            InventorySlot::Armor(piece) => Some(&mut self.armor[piece.index()]),
            InventorySlot::OffHand => Some(&mut self.offhand),
        }
    }

    /// Hotbar then main storage, in slot order. Armor and off-hand are never sources.
    pub fn storage_slots(&self) -> impl Iterator<Item = (InventorySlot, ItemStack)> + '_ {
        let hotbar = self
            .hotbar
            .iter()
            .enumerate()
            .map(|(index, stack)| (InventorySlot::Hotbar(index as u8), *stack));
        let main = self
            .main
            .iter()
            .enumerate()
            .map(|(index, stack)| (InventorySlot::Main(index as u8), *stack));
        hotbar.chain(main)
    }

    /// First storage slot whose stack satisfies `predicate`.
    pub fn find_slot(&self, predicate: impl Fn(&ItemStack) -> bool) -> Option<InventorySlot> {
        self.storage_slots()
            .find(|(_, stack)| !stack.is_empty() && predicate(stack))
            .map(|(slot, _)| slot)
    }
}
