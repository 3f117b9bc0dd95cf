//! State machine for a capture card: the panel opened by tapping a
//! detection or a logbook row. It serializes mutations so a card can
//! run at most one write at a time, and tracks whether the favorites
//! snapshot went stale underneath the caller.

/// What the card was opened on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardMode {
    /// A fresh detection, not yet in the logbook.
    NewDetection { label: String, image_url: String },
    /// An existing logbook row.
    ExistingCapture { capture_id: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Delete,
    Favorite,
    Unfavorite,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardState {
    Viewing,
    InFlight(Mutation),
    Closed,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    /// Another mutation is already in flight on this card.
    #[error("a mutation is already in flight")]
    Busy,
    /// The requested mutation does not apply to this card's mode.
    #[error("mutation not allowed for this card")]
    NotAllowed,
    /// The card has already been closed.
    #[error("card is closed")]
    Closed,
}

/// One open capture card.
#[derive(Clone, Debug)]
pub struct CaptureCard {
    mode: CardMode,
    state: CardState,
    last_error: Option<String>,
    favorites_stale: bool,
}

impl CaptureCard {
    pub fn open(mode: CardMode) -> Self {
        Self {
            mode,
            state: CardState::Viewing,
            last_error: None,
            favorites_stale: false,
        }
    }

    pub fn mode(&self) -> &CardMode {
        &self.mode
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Only a fresh detection can be added to the logbook.
    pub fn can_add(&self) -> bool {
        matches!(self.mode, CardMode::NewDetection { .. }) && self.state == CardState::Viewing
    }

    /// Only an existing logbook row can be deleted.
    pub fn can_delete(&self) -> bool {
        matches!(self.mode, CardMode::ExistingCapture { .. }) && self.state == CardState::Viewing
    }

    /// Favorite and unfavorite only apply to a saved capture.
    pub fn can_favorite(&self) -> bool {
        matches!(self.mode, CardMode::ExistingCapture { .. }) && self.state == CardState::Viewing
    }

    fn begin(&mut self, mutation: Mutation, allowed: bool) -> Result<(), LifecycleError> {
        match self.state {
            CardState::Closed => return Err(LifecycleError::Closed),
            CardState::InFlight(_) => return Err(LifecycleError::Busy),
            CardState::Viewing => {}
        }
        if !allowed {
            return Err(LifecycleError::NotAllowed);
        }
        self.last_error = None;
        self.state = CardState::InFlight(mutation);
        Ok(())
    }

    pub fn begin_create(&mut self) -> Result<(), LifecycleError> {
        let allowed = matches!(self.mode, CardMode::NewDetection { .. });
        self.begin(Mutation::Create, allowed)
    }

    pub fn begin_delete(&mut self) -> Result<(), LifecycleError> {
        let allowed = matches!(self.mode, CardMode::ExistingCapture { .. });
        self.begin(Mutation::Delete, allowed)
    }

    pub fn begin_favorite(&mut self) -> Result<(), LifecycleError> {
        let allowed = matches!(self.mode, CardMode::ExistingCapture { .. });
        self.begin(Mutation::Favorite, allowed)
    }

    pub fn begin_unfavorite(&mut self) -> Result<(), LifecycleError> {
        let allowed = matches!(self.mode, CardMode::ExistingCapture { .. });
        self.begin(Mutation::Unfavorite, allowed)
    }

    /// A successful create closes the card; a failure returns it to
    /// viewing so the user can retry.
    pub fn finish_create(&mut self, outcome: Result<(), String>) {
        debug_assert_eq!(self.state, CardState::InFlight(Mutation::Create));
        match outcome {
            Ok(()) => self.state = CardState::Closed,
            Err(message) => {
                self.last_error = Some(message);
                self.state = CardState::Viewing;
            }
        }
    }

    /// Same shape as [`finish_create`]: the row is gone on success, so
    /// the card closes.
    pub fn finish_delete(&mut self, outcome: Result<(), String>) {
        debug_assert_eq!(self.state, CardState::InFlight(Mutation::Delete));
        match outcome {
            Ok(()) => self.state = CardState::Closed,
            Err(message) => {
                self.last_error = Some(message);
                self.state = CardState::Viewing;
            }
        }
    }

    /// Favorite and unfavorite leave the card open either way, and the
    /// favorites snapshot held by the caller must be refetched whether
    /// the toggle succeeded or not: after a failure the store's actual
    /// state is unknown.
    pub fn finish_favorite(&mut self, outcome: Result<(), String>) {
        debug_assert!(matches!(
            self.state,
            CardState::InFlight(Mutation::Favorite) | CardState::InFlight(Mutation::Unfavorite)
        ));
        if let Err(message) = outcome {
            self.last_error = Some(message);
        }
        self.favorites_stale = true;
        self.state = CardState::Viewing;
    }

    pub fn close(&mut self) {
        self.state = CardState::Closed;
    }

    /// Reads and clears the stale flag, so one refetch services any
    /// number of favorite toggles.
    pub fn take_favorites_stale(&mut self) -> bool {
        std::mem::take(&mut self.favorites_stale)
    }
}
