//! Item identities and stacks.

/// Item identities the module distinguishes between.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemKind {
    #[default]
    Empty,
    TotemOfUndying,
    Shield,
    GoldenApple,
    EndCrystal,
    Elytra,
    Helmet,
    Chestplate,
    Leggings,
    Boots,
    /// Any other item; only its presence matters.
    Other,
}

impl ItemKind {
    /// The totem-class protective item predicate.
    pub const fn is_totem(self) -> bool {
        matches!(self, ItemKind::TotemOfUndying)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub kind: ItemKind,
    pub count: u8,
}

impl ItemStack {
    pub const EMPTY: Self = Self {
        kind: ItemKind::Empty,
        count: 0,
    };

    pub const fn new(kind: ItemKind, count: u8) -> Self {
        Self { kind, count }
    }

    pub const fn single(kind: ItemKind) -> Self {
        Self::new(kind, 1)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self.kind, ItemKind::Empty) || self.count == 0
    }

    pub const fn is_totem(self) -> bool {
        !self.is_empty() && self.kind.is_totem()
    }
}
