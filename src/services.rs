use async_trait::async_trait;

use crate::models::*;
use crate::session::Session;

#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error("not found")] NotFound,
    #[error("unauthorized")] Unauthorized,
    #[error("conflict")] Conflict,
    #[error("unexpected status {code}: {body}")] Status { code: u16, body: String },
    #[error("transport: {0}")] Transport(String),
    #[error("decode: {0}")] Decode(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[async_trait]
pub trait RecipeService: Send + Sync {
    async fn detail(&self, session: &Session, id: Id) -> ServiceResult<Recipe>;
    async fn view(&self, session: &Session, id: Id) -> ServiceResult<ViewCount>;
    async fn like(&self, session: &Session, id: Id) -> ServiceResult<LikeStatus>;
}

#[async_trait]
pub trait CommentService: Send + Sync {
    async fn list_comments(&self, session: &Session, recipe_id: Id) -> ServiceResult<Vec<Comment>>;
    async fn add_comment(&self, session: &Session, recipe_id: Id, text: &str) -> ServiceResult<Comment>;
}

#[async_trait]
pub trait BookmarkService: Send + Sync {
    /// Bookmarks owned by the session's user.
    async fn list_bookmarks(&self, session: &Session) -> ServiceResult<Vec<Bookmark>>;
    async fn add_bookmark(&self, session: &Session, recipe_id: Id) -> ServiceResult<CreatedBookmark>;
    async fn remove_bookmark(&self, session: &Session, bookmark_id: Id) -> ServiceResult<()>;
}

pub trait Backend: RecipeService + CommentService + BookmarkService {}

impl<T> Backend for T where T: RecipeService + CommentService + BookmarkService {}

#[cfg(feature = "inmem-store")]
pub mod inmem {
    use super::*;
    use chrono::Utc;
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

    #[derive(Default)]
    struct State {
        recipes: HashMap<Id, Recipe>,
        likes: HashMap<Id, HashSet<String>>, // recipe -> usernames
        comments: Vec<(Id, Comment)>,        // (recipe, comment)
        bookmarks: HashMap<Id, (String, Id)>, // bookmark -> (owner, recipe)
        bookmark_times: HashMap<Id, chrono::DateTime<Utc>>,
        users: HashMap<String, String>,      // token -> username
        next_id: Id,
    }

    /// Process-local backend with the REST API's server-side rules.
    #[derive(Clone, Default)]
    pub struct InMemBackend {
        state: Arc<RwLock<State>>,
    }

    impl InMemBackend {
        pub fn new() -> Self { Self::default() }

        fn read(&self) -> RwLockReadGuard<'_, State> {
            self.state.read().unwrap_or_else(|e| e.into_inner())
        }

        fn write(&self) -> RwLockWriteGuard<'_, State> {
            self.state.write().unwrap_or_else(|e| e.into_inner())
        }

        fn next_id(state: &mut State) -> Id {
            state.next_id += 1;
            state.next_id
        }

        /// Register a user reachable through `token`.
        pub fn add_user(&self, token: &str, username: &str) {
            self.write().users.insert(token.to_string(), username.to_string());
        }

        /// Store a recipe as-is. `liked`/`likes_count` are recomputed per caller on read.
        pub fn insert_recipe(&self, recipe: Recipe) -> Id {
            let mut s = self.write();
            let id = recipe.id;
            s.next_id = s.next_id.max(id);
            s.recipes.insert(id, recipe);
            id
        }

        fn username(state: &State, session: &Session) -> Option<String> {
            session.token().and_then(|t| state.users.get(t).cloned())
        }

        fn require_user(state: &State, session: &Session) -> ServiceResult<String> {
            Self::username(state, session).ok_or(ServiceError::Unauthorized)
        }

        fn present(state: &State, recipe: &Recipe, user: Option<&str>) -> Recipe {
            let likers = state.likes.get(&recipe.id);
            let mut out = recipe.clone();
            out.likes_count = Some(likers.map(|l| l.len() as u64).unwrap_or(0));
            out.liked = match (likers, user) {
                (Some(l), Some(u)) => l.contains(u),
                _ => false,
            };
            out
        }
    }

    #[async_trait]
    impl RecipeService for InMemBackend {
        async fn detail(&self, session: &Session, id: Id) -> ServiceResult<Recipe> {
            let s = self.read();
            let user = Self::username(&s, session);
            let recipe = s.recipes.get(&id).ok_or(ServiceError::NotFound)?;
            Ok(Self::present(&s, recipe, user.as_deref()))
        }

        async fn view(&self, _session: &Session, id: Id) -> ServiceResult<ViewCount> {
            let mut s = self.write();
            let recipe = s.recipes.get_mut(&id).ok_or(ServiceError::NotFound)?;
            recipe.views += 1;
            log::debug!("[inmem] recipe {id} views -> {}", recipe.views);
            Ok(ViewCount { views: recipe.views })
        }

        async fn like(&self, session: &Session, id: Id) -> ServiceResult<LikeStatus> {
            let mut s = self.write();
            let user = Self::require_user(&s, session)?;
            if !s.recipes.contains_key(&id) { return Err(ServiceError::NotFound); }
            let likers = s.likes.entry(id).or_default();
            let liked = if likers.remove(&user) { false } else { likers.insert(user); true };
            Ok(LikeStatus { liked, likes_count: likers.len() as u64 })
        }
    }

    #[async_trait]
    impl CommentService for InMemBackend {
        async fn list_comments(&self, _session: &Session, recipe_id: Id) -> ServiceResult<Vec<Comment>> {
            let s = self.read();
            if !s.recipes.contains_key(&recipe_id) { return Err(ServiceError::NotFound); }
            let mut v: Vec<_> = s.comments.iter()
                .filter(|(r, _)| *r == recipe_id)
                .map(|(_, c)| c.clone())
                .collect();
            v.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id))); // newest first
            Ok(v)
        }

        async fn add_comment(&self, session: &Session, recipe_id: Id, text: &str) -> ServiceResult<Comment> {
            let mut s = self.write();
            let author = Self::require_user(&s, session)?;
            if !s.recipes.contains_key(&recipe_id) { return Err(ServiceError::NotFound); }
            let id = Self::next_id(&mut s);
            let comment = Comment { id, author, text: text.to_string(), created_at: Some(Utc::now()) };
            s.comments.push((recipe_id, comment.clone()));
            Ok(comment)
        }
    }

    #[async_trait]
    impl BookmarkService for InMemBackend {
        async fn list_bookmarks(&self, session: &Session) -> ServiceResult<Vec<Bookmark>> {
            let s = self.read();
            let user = Self::require_user(&s, session)?;
            let mut v: Vec<Bookmark> = s.bookmarks.iter()
                .filter(|(_, (owner, _))| *owner == user)
                .filter_map(|(id, (_, recipe_id))| {
                    let recipe = s.recipes.get(recipe_id)?;
                    let summary = BookmarkedRecipe::from(&Self::present(&s, recipe, Some(user.as_str())));
                    Some(Bookmark { id: *id, recipe: summary, created_at: s.bookmark_times.get(id).copied() })
                })
                .collect();
            v.sort_by(|a, b| b.id.cmp(&a.id));
            Ok(v)
        }

        async fn add_bookmark(&self, session: &Session, recipe_id: Id) -> ServiceResult<CreatedBookmark> {
            let mut s = self.write();
            let user = Self::require_user(&s, session)?;
            if !s.recipes.contains_key(&recipe_id) { return Err(ServiceError::NotFound); }
            // one bookmark per (user, recipe)
            if s.bookmarks.values().any(|(owner, r)| *owner == user && *r == recipe_id) {
                return Err(ServiceError::Conflict);
            }
            let id = Self::next_id(&mut s);
            s.bookmarks.insert(id, (user, recipe_id));
            s.bookmark_times.insert(id, Utc::now());
            Ok(CreatedBookmark { id })
        }

        async fn remove_bookmark(&self, session: &Session, bookmark_id: Id) -> ServiceResult<()> {
            let mut s = self.write();
            let user = Self::require_user(&s, session)?;
            match s.bookmarks.get(&bookmark_id) {
                Some((owner, _)) if *owner == user => {}
                _ => return Err(ServiceError::NotFound),
            }
            s.bookmarks.remove(&bookmark_id);
            s.bookmark_times.remove(&bookmark_id);
            Ok(())
        }
    }
}
