//! State and actions behind one mounted recipe detail page.
//!
//! A `RecipeDetail` is created once per mount. Its loader re-runs whenever the
//! `(recipe id, session token)` pair changes; the like, bookmark and comment
//! actions only touch local state after the backend has answered.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{DetailError, DetailResult};
use crate::models::{Comment, Id, Recipe};
use crate::notify::{Action, Notice, Notifier};
use crate::services::Backend;
use crate::session::Session;

/// What happened to a user-initiated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Backend confirmed and local state was updated.
    Applied,
    /// No session; the user was notified and nothing was sent.
    Rejected,
    /// Nothing to do (blank comment).
    Skipped,
}

pub struct RecipeDetail {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    key: Option<(Id, Option<String>)>, // last (id, token) the loader ran for
    recipe: Option<Recipe>,
    comments: Vec<Comment>,
    comment_text: String,
    bookmark: Option<Id>, // Some(bookmark id) iff bookmarked
    likes_count: u64,
    liked: bool,
    view_counted: bool, // one-shot; reset only by constructing a new instance
}

impl RecipeDetail {
    pub fn new(backend: Arc<dyn Backend>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            backend,
            notifier,
            key: None,
            recipe: None,
            comments: Vec::new(),
            comment_text: String::new(),
            bookmark: None,
            likes_count: 0,
            liked: false,
            view_counted: false,
        }
    }

    // ---------------- accessors -----------------------------------

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn comment_text(&self) -> &str {
        &self.comment_text
    }

    pub fn bookmarked(&self) -> bool {
        self.bookmark.is_some()
    }

    pub fn bookmark_id(&self) -> Option<Id> {
        self.bookmark
    }

    pub fn likes_count(&self) -> u64 {
        self.likes_count
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn view_counted(&self) -> bool {
        self.view_counted
    }

    /// The page renders nothing but a loading indicator until a recipe is present.
    pub fn is_loading(&self) -> bool {
        self.recipe.is_none()
    }

    pub fn set_comment_text(&mut self, text: impl Into<String>) {
        self.comment_text = text.into();
    }

    // ---------------- loader --------------------------------------

    /// Re-run the load sequence if `id` or the session token changed since the
    /// last run. Returns `Ok(false)` when nothing changed.
    pub async fn sync(&mut self, id: Id, session: &Session) -> DetailResult<bool> {
        let key = (id, session.token().map(str::to_string));
        if self.key.as_ref() == Some(&key) {
            return Ok(false);
        }
        self.key = Some(key);
        self.load(id, session).await?;
        Ok(true)
    }

    /// Full load sequence. Steps run one after another; a failed read stops
    /// the sequence. Comments and bookmark state left over from a different
    /// recipe are dropped as soon as the new recipe arrives, so a failure after
    /// step 1 leaves them empty rather than pointing at the old recipe.
    pub async fn load(&mut self, id: Id, session: &Session) -> DetailResult<()> {
        debug!(recipe_id = id, authenticated = session.is_authenticated(), "loading recipe detail");

        let recipe = self.backend.detail(session, id).await?;
        if self.recipe.as_ref().map(|r| r.id) != Some(id) {
            self.comments.clear();
            self.bookmark = None;
        }
        self.likes_count = recipe.likes_count.unwrap_or(0);
        self.liked = recipe.liked;
        self.recipe = Some(recipe);

        self.fetch_comments(id, session).await?;
        self.fetch_bookmark(id, session).await?;

        if !self.view_counted {
            self.view_counted = true;
            match self.backend.view(session, id).await {
                Ok(v) => {
                    if let Some(r) = self.recipe.as_mut() {
                        r.views = v.views;
                    }
                }
                Err(e) => debug!(recipe_id = id, error = %e, "view increment failed (ignored)"),
            }
        }

        info!(recipe_id = id, comments = self.comments.len(), bookmarked = self.bookmarked(), "recipe detail loaded");
        Ok(())
    }

    /// Refetch only the comment list for the loaded recipe.
    pub async fn reload_comments(&mut self, session: &Session) -> DetailResult<()> {
        let id = self.loaded_id()?;
        self.fetch_comments(id, session).await
    }

    /// Refetch only the bookmark state for the loaded recipe.
    pub async fn reload_bookmark(&mut self, session: &Session) -> DetailResult<()> {
        let id = self.loaded_id()?;
        self.fetch_bookmark(id, session).await
    }

    async fn fetch_comments(&mut self, id: Id, session: &Session) -> DetailResult<()> {
        self.comments = self.backend.list_comments(session, id).await?;
        Ok(())
    }

    async fn fetch_bookmark(&mut self, id: Id, session: &Session) -> DetailResult<()> {
        if !session.is_authenticated() {
            // bookmarks belong to a session; none is visible without one
            self.bookmark = None;
            return Ok(());
        }
        let bookmarks = self.backend.list_bookmarks(session).await?;
        self.bookmark = bookmarks.iter().find(|b| b.recipe.id == id).map(|b| b.id);
        Ok(())
    }

    fn loaded_id(&self) -> DetailResult<Id> {
        self.recipe.as_ref().map(|r| r.id).ok_or(DetailError::NotLoaded)
    }

    fn reject(&self, action: Action) -> Outcome {
        self.notifier.notify(&Notice::LoginRequired(action));
        Outcome::Rejected
    }

    // ---------------- actions -------------------------------------

    pub async fn toggle_like(&mut self, session: &Session) -> DetailResult<Outcome> {
        if !session.is_authenticated() {
            return Ok(self.reject(Action::Like));
        }
        let id = self.loaded_id()?;
        let status = self.backend.like(session, id).await?;
        self.liked = status.liked;
        self.likes_count = status.likes_count;
        Ok(Outcome::Applied)
    }

    pub async fn toggle_bookmark(&mut self, session: &Session) -> DetailResult<Outcome> {
        if !session.is_authenticated() {
            return Ok(self.reject(Action::Bookmark));
        }
        let id = self.loaded_id()?;
        match self.bookmark {
            Some(bookmark_id) => {
                self.backend.remove_bookmark(session, bookmark_id).await?;
                self.bookmark = None;
            }
            None => {
                let created = self.backend.add_bookmark(session, id).await?;
                self.bookmark = Some(created.id);
            }
        }
        Ok(Outcome::Applied)
    }

    pub async fn submit_comment(&mut self, session: &Session) -> DetailResult<Outcome> {
        if !session.is_authenticated() {
            return Ok(self.reject(Action::Comment));
        }
        let text = self.comment_text.trim().to_string();
        if text.is_empty() {
            return Ok(Outcome::Skipped);
        }
        let id = self.loaded_id()?;
        let comment = self.backend.add_comment(session, id, &text).await?;
        self.comments.insert(0, comment);
        self.comment_text.clear();
        Ok(Outcome::Applied)
    }
}
