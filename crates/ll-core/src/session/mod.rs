//! Session screen gate
//!
//! A three-state router deciding which top-level screen the app shows. The
//! gate starts in [`Screen::Unknown`] until the persisted onboarding flag has
//! been read; it resolves exactly once per session and only an explicit
//! logout ever sends a user back to onboarding.

/// Top-level screen selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Onboarding flag not read yet; a placeholder (splash) is shown.
    Unknown,
    /// First-run flow collecting the user's name and email.
    Onboarding,
    /// The menu home screen.
    Home,
}

/// State machine over [`Screen`].
///
/// Transitions outside the table below are ignored rather than rejected:
/// a late or duplicate event is a no-op, never an error.
///
/// - `Unknown -> Onboarding | Home` via [`resolve`](Self::resolve), once.
/// - `Onboarding -> Home` via [`complete_onboarding`](Self::complete_onboarding).
/// - `Home -> Onboarding` via [`logout`](Self::logout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionGate {
    screen: Screen,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self {
            screen: Screen::Unknown,
        }
    }
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Leave `Unknown` based on the persisted onboarding flag. The first call
    /// wins; the flag is never re-read within a session.
    pub fn resolve(&mut self, onboarded: bool) {
        if self.screen == Screen::Unknown {
            self.screen = if onboarded {
                Screen::Home
            } else {
                Screen::Onboarding
            };
        }
    }

    /// Onboarding finished and the flag was persisted.
    pub fn complete_onboarding(&mut self) {
        if self.screen == Screen::Onboarding {
            self.screen = Screen::Home;
        }
    }

    /// Explicit logout; the caller is responsible for wiping the preference
    /// store. There is no automatic session expiry.
    pub fn logout(&mut self) {
        if self.screen == Screen::Home {
            self.screen = Screen::Onboarding;
        }
    }
}
