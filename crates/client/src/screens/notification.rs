//! User-facing feedback: notifications and confirmation prompts.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

/// Outcome message that stays until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub text: String,
}

impl Notification {
    pub fn new(level: Level, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Level::Success, title, text)
    }

    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Level::Info, title, text)
    }

    pub fn warning(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Level::Warning, title, text)
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Level::Error, title, text)
    }
}

impl core::fmt::Display for Notification {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.title, self.text)
    }
}

/// A yes/no question put to the user before a destructive action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub text: String,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

/// Capability answering [`Confirmation`]s.
pub trait Confirm {
    fn confirm(&self, request: &Confirmation) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&Confirmation) -> bool,
{
    fn confirm(&self, request: &Confirmation) -> bool {
        self(request)
    }
}
