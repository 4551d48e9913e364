use std::fmt;

use tracing::warn;

/// Mutating actions gated on an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Like,
    Bookmark,
    Comment,
}

/// User-facing message raised by the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LoginRequired(Action),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LoginRequired(Action::Like) => f.write_str("Please log in to like recipes."),
            Notice::LoginRequired(Action::Bookmark) => f.write_str("Please log in to bookmark recipes."),
            Notice::LoginRequired(Action::Comment) => f.write_str("Please log in to comment."),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Sends notices to the log; for hosts without a UI surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        warn!(notice = %notice, "user notice");
    }
}
