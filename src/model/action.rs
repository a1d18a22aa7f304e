/// Button custom IDs, kept stable because they are baked into posted messages.
pub mod custom_id {
    pub const UPGRADE: &str = "upgrade";
    pub const UPGRADE_DISABLED: &str = "upgrade_disabled";
    pub const RESTORE: &str = "restore";
    pub const RESTORE_DISABLED: &str = "restore_disabled";
    pub const RESTART: &str = "restart";
    pub const STOP: &str = "stop";
}

/// Action requested by the session owner through a button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAction {
    /// Use an upgrade scroll on the equip.
    Upgrade,
    /// Try to restore a consumed slot.
    Restore,
    /// Throw the equip away and start again from a fresh copy.
    Restart,
    /// End the session.
    Stop,
}

impl ScrollAction {
    /// Maps a button custom ID to an action.
    ///
    /// Disabled button variants cannot be pressed and are not actions.
    ///
    /// # Returns
    /// - `Some(ScrollAction)` - The ID belongs to an enabled session button
    /// - `None` - Any other ID
    pub fn from_custom_id(id: &str) -> Option<Self> {
        match id {
            custom_id::UPGRADE => Some(Self::Upgrade),
            custom_id::RESTORE => Some(Self::Restore),
            custom_id::RESTART => Some(Self::Restart),
            custom_id::STOP => Some(Self::Stop),
            _ => None,
        }
    }

    pub fn custom_id(&self) -> &'static str {
        match self {
            Self::Upgrade => custom_id::UPGRADE,
            Self::Restore => custom_id::RESTORE,
            Self::Restart => custom_id::RESTART,
            Self::Stop => custom_id::STOP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_ids_map_back_to_actions() {
        for action in [
            ScrollAction::Upgrade,
            ScrollAction::Restore,
            ScrollAction::Restart,
            ScrollAction::Stop,
        ] {
            assert_eq!(ScrollAction::from_custom_id(action.custom_id()), Some(action));
        }
    }

    #[test]
    fn disabled_buttons_are_not_actions() {
        assert_eq!(ScrollAction::from_custom_id(custom_id::UPGRADE_DISABLED), None);
        assert_eq!(ScrollAction::from_custom_id(custom_id::RESTORE_DISABLED), None);
        assert_eq!(ScrollAction::from_custom_id("invite"), None);
    }
}
