//! Minimize bookkeeping across state-change notifications

/// What a minimize request still expects from upcoming notifications
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MinimizeIntent {
    #[default]
    None,
    /// Minimize requested; its own transient notification has not arrived
    Minimizing {
        /// The window was maximized when minimize was requested
        restore_maximized: bool,
    },
    /// Minimized from maximized; re-maximize when the window comes back
    PendingRestoreToMaximized,
}

/// How a state-change notification should be handled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateChangeAction {
    /// Window left minimized and must re-enter maximized
    Remaximize,
    /// Transient notification from minimizing; leave the glyph alone
    SuppressGlyph,
    /// Set the glyph from the current maximized state
    UpdateGlyph,
}

impl MinimizeIntent {
    /// Consume the intent for one state-change notification
    pub fn on_state_changed(&mut self, minimized: bool) -> StateChangeAction {
        match *self {
            MinimizeIntent::Minimizing { restore_maximized: true }
            | MinimizeIntent::PendingRestoreToMaximized
                if !minimized =>
            {
                *self = MinimizeIntent::None;
                StateChangeAction::Remaximize
            }
            MinimizeIntent::Minimizing { restore_maximized } => {
                *self = if restore_maximized {
                    MinimizeIntent::PendingRestoreToMaximized
                } else {
                    MinimizeIntent::None
                };
                StateChangeAction::SuppressGlyph
            }
            MinimizeIntent::PendingRestoreToMaximized | MinimizeIntent::None => {
                StateChangeAction::UpdateGlyph
            }
        }
    }
}
