use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::models::*;
use crate::services::{BookmarkService, CommentService, RecipeService, ServiceError, ServiceResult};
use crate::session::Session;

/// REST backend talking to the recipe API over HTTP.
#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base: String, // always ends with '/'
}

impl HttpBackend {
    pub fn new(api_base: &str) -> Self {
        Self::with_client(reqwest::Client::new(), api_base)
    }

    pub fn with_client(client: reqwest::Client, api_base: &str) -> Self {
        let mut base = api_base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { client, base }
    }

    pub fn from_config(cfg: &ClientConfig) -> Self {
        Self::new(&cfg.api_base)
    }

    fn request(&self, method: Method, path: &str, session: &Session) -> RequestBuilder {
        let url = format!("{}{}", self.base, path);
        debug!(method = method.as_str(), url = url.as_str(), authenticated = session.is_authenticated(), "api request");
        let req = self.client.request(method, url);
        match session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(req: RequestBuilder) -> ServiceResult<Response> {
        let resp = req.send().await.map_err(|e| ServiceError::Transport(e.to_string()))?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        Err(match status {
            StatusCode::NOT_FOUND => ServiceError::NotFound,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ServiceError::Unauthorized,
            StatusCode::CONFLICT => ServiceError::Conflict,
            _ => ServiceError::Status {
                code: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            },
        })
    }

    async fn json<T: DeserializeOwned>(req: RequestBuilder) -> ServiceResult<T> {
        let resp = Self::send(req).await?;
        resp.json::<T>().await.map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RecipeService for HttpBackend {
    async fn detail(&self, session: &Session, id: Id) -> ServiceResult<Recipe> {
        Self::json(self.request(Method::GET, &format!("recipes/{id}/"), session)).await
    }

    async fn view(&self, session: &Session, id: Id) -> ServiceResult<ViewCount> {
        Self::json(self.request(Method::POST, &format!("recipes/{id}/view/"), session)).await
    }

    async fn like(&self, session: &Session, id: Id) -> ServiceResult<LikeStatus> {
        Self::json(self.request(Method::POST, &format!("recipes/{id}/like/"), session)).await
    }
}

#[async_trait]
impl CommentService for HttpBackend {
    async fn list_comments(&self, session: &Session, recipe_id: Id) -> ServiceResult<Vec<Comment>> {
        Self::json(self.request(Method::GET, &format!("recipes/{recipe_id}/comments/"), session)).await
    }

    async fn add_comment(&self, session: &Session, recipe_id: Id, text: &str) -> ServiceResult<Comment> {
        let body = NewComment { text: text.to_string() };
        let req = self.request(Method::POST, &format!("recipes/{recipe_id}/comments/"), session).json(&body);
        Self::json(req).await
    }
}

#[async_trait]
impl BookmarkService for HttpBackend {
    async fn list_bookmarks(&self, session: &Session) -> ServiceResult<Vec<Bookmark>> {
        Self::json(self.request(Method::GET, "bookmarks/", session)).await
    }

    async fn add_bookmark(&self, session: &Session, recipe_id: Id) -> ServiceResult<CreatedBookmark> {
        let req = self.request(Method::POST, "bookmarks/", session).json(&NewBookmark { recipe_id });
        Self::json(req).await
    }

    async fn remove_bookmark(&self, session: &Session, bookmark_id: Id) -> ServiceResult<()> {
        // 204 No Content; body ignored
        Self::send(self.request(Method::DELETE, &format!("bookmarks/{bookmark_id}/"), session)).await?;
        Ok(())
    }
}
