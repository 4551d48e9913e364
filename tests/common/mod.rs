#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use recipe_detail::models::*;
use recipe_detail::notify::{Notice, Notifier};
use recipe_detail::services::inmem::InMemBackend;
use recipe_detail::services::{BookmarkService, CommentService, RecipeService, ServiceError, ServiceResult};
use recipe_detail::Session;

pub const TOKEN: &str = "abc";

/// Wraps the in-memory backend, records every call and can fail chosen ones.
#[derive(Default)]
pub struct CountingBackend {
    pub inner: InMemBackend,
    calls: Mutex<Vec<&'static str>>,
    failing: Mutex<HashSet<&'static str>>,
}

impl CountingBackend {
    pub fn calls(&self) -> Vec<&'static str> { self.calls.lock().unwrap().clone() }
    pub fn count(&self, name: &str) -> usize { self.calls().iter().filter(|c| **c == name).count() }
    pub fn fail(&self, name: &'static str) { self.failing.lock().unwrap().insert(name); }
    pub fn heal(&self, name: &'static str) { self.failing.lock().unwrap().remove(name); }

    fn hit(&self, name: &'static str) -> ServiceResult<()> {
        self.calls.lock().unwrap().push(name);
        if self.failing.lock().unwrap().contains(name) {
            return Err(ServiceError::Transport(format!("{name} unavailable")));
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeService for CountingBackend {
    async fn detail(&self, s: &Session, id: Id) -> ServiceResult<Recipe> { self.hit("detail")?; self.inner.detail(s, id).await }
    async fn view(&self, s: &Session, id: Id) -> ServiceResult<ViewCount> { self.hit("view")?; self.inner.view(s, id).await }
    async fn like(&self, s: &Session, id: Id) -> ServiceResult<LikeStatus> { self.hit("like")?; self.inner.like(s, id).await }
}

#[async_trait]
impl CommentService for CountingBackend {
    async fn list_comments(&self, s: &Session, id: Id) -> ServiceResult<Vec<Comment>> { self.hit("list_comments")?; self.inner.list_comments(s, id).await }
    async fn add_comment(&self, s: &Session, id: Id, text: &str) -> ServiceResult<Comment> { self.hit("add_comment")?; self.inner.add_comment(s, id, text).await }
}

#[async_trait]
impl BookmarkService for CountingBackend {
    async fn list_bookmarks(&self, s: &Session) -> ServiceResult<Vec<Bookmark>> { self.hit("list_bookmarks")?; self.inner.list_bookmarks(s).await }
    async fn add_bookmark(&self, s: &Session, id: Id) -> ServiceResult<CreatedBookmark> { self.hit("add_bookmark")?; self.inner.add_bookmark(s, id).await }
    async fn remove_bookmark(&self, s: &Session, id: Id) -> ServiceResult<()> { self.hit("remove_bookmark")?; self.inner.remove_bookmark(s, id).await }
}

#[derive(Default)]
pub struct RecordingNotifier { pub notices: Mutex<Vec<Notice>> }

impl RecordingNotifier {
    pub fn taken(&self) -> Vec<Notice> { std::mem::take(&mut *self.notices.lock().unwrap()) }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) { self.notices.lock().unwrap().push(notice.clone()); }
}

pub fn recipe(id: Id, views: u64) -> Recipe {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": format!("Recipe {id}"),
        "image": "/media/recipes/x.jpg",
        "cooking_time": 30,
        "servings": 2,
        "difficulty": "easy",
        "created_at": "2024-03-01T10:00:00Z",
        "views": views,
        "ingredients": [{"quantity": "2", "item": "eggs"}],
        "steps": ["Whisk", "Fry"]
    })).unwrap()
}

/// Backend holding recipe 5 (10 views) and recipe 6, with user "ann" behind TOKEN.
pub fn seeded() -> Arc<CountingBackend> {
    let b = CountingBackend::default();
    b.inner.add_user(TOKEN, "ann");
    b.inner.insert_recipe(recipe(5, 10));
    b.inner.insert_recipe(recipe(6, 0));
    Arc::new(b)
}

pub fn authed() -> Session { Session::with_token(TOKEN) }
