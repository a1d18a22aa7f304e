pub use crate::catalog::{crystal, EQUIPS};
pub use crate::definition::{Crystal, EquipDefinition, LevelUpBonus};
pub use crate::stat::{Stat, StatBlock, StatRange};
