//! Read-only equip catalog.
//!
//! Wraps the equip definitions loaded at startup and answers lookups by code. The
//! catalog never changes at runtime; it is shared behind an `Arc` in `AppState`.

use equip::prelude::{EquipDefinition, EQUIPS};

use crate::error::session::SessionError;

/// Lookup over the equips users can scroll.
#[derive(Clone, Debug)]
pub struct EquipCatalog {
    /// Definitions in presentation order.
    equips: Vec<EquipDefinition>,
}

/// Entry shown when offering equips to users.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipChoice {
    pub code: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
}

impl EquipCatalog {
    /// Creates a catalog over the given definitions.
    ///
    /// # Arguments
    /// - `equips` - Definitions in the order they should be offered
    pub fn new(equips: Vec<EquipDefinition>) -> Self {
        Self { equips }
    }

    /// Creates a catalog over the built-in equip table.
    pub fn builtin() -> Self {
        Self::new(EQUIPS.to_vec())
    }

    /// Looks up an equip definition by code.
    ///
    /// # Arguments
    /// - `code` - Short code as sent by the slash command choice
    ///
    /// # Returns
    /// - `Ok(&EquipDefinition)` - The matching definition
    /// - `Err(SessionError::UnknownEquipCode)` - No equip has this code
    pub fn get(&self, code: &str) -> Result<&EquipDefinition, SessionError> {
        self.equips
            .iter()
            .find(|equip| equip.code == code)
            .ok_or_else(|| SessionError::UnknownEquipCode(code.to_string()))
    }

    /// Lists every equip as `(code, name, emoji)` in presentation order.
    pub fn choices(&self) -> impl Iterator<Item = EquipChoice> + '_ {
        self.equips.iter().map(|equip| EquipChoice {
            code: equip.code,
            name: equip.name,
            emoji: equip.emoji,
        })
    }

    pub fn len(&self) -> usize {
        self.equips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equips.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    #[test]
    fn finds_builtin_equip_by_code() {
        let catalog = EquipCatalog::builtin();

        let equip = catalog.get("bfc").unwrap();

        assert_eq!(equip.name, "Blackfist Cloak");
        assert_eq!(equip.slots, 7);
    }

    #[test]
    fn unknown_code_is_rejected() {
        let catalog = EquipCatalog::builtin();

        let result = catalog.get("zhelm");

        assert_eq!(
            result.unwrap_err(),
            SessionError::UnknownEquipCode("zhelm".to_string())
        );
    }

    #[test]
    fn choices_follow_catalog_order() {
        let catalog = EquipCatalog::new(vec![fixture::cloak(), fixture::two_slot_necklace()]);

        let codes: Vec<&str> = catalog.choices().map(|choice| choice.code).collect();

        assert_eq!(codes, vec!["cloak", "necklace"]);
    }

    /// Discord rejects commands with more than 25 choices on one option.
    #[test]
    fn builtin_catalog_fits_in_one_choice_list() {
        let catalog = EquipCatalog::builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.len() <= 25);
    }
}
