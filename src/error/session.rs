use thiserror::Error;

/// Errors raised while starting a scroll session.
///
/// Both variants are recoverable: the user gets an explanation and no session
/// state is created or modified.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The user already owns a live session.
    ///
    /// Carries the link to the existing session's message, or `None` while that
    /// session is still posting its first reply.
    #[error("User already has an active scroll session")]
    DuplicateSession {
        /// Link to the message hosting the existing session
        location: Option<String>,
    },

    /// The requested equip code is not in the catalog.
    #[error("Unknown equip code '{0}'")]
    UnknownEquipCode(String),
}
