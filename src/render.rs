use askama::Template;
use chrono::{DateTime, Utc};

use crate::config::ClientConfig;
use crate::detail::RecipeDetail;
use crate::media::{avatar_url, resolve_image};
use crate::models::{Id, Ingredient};

pub const LOADING_HTML: &str = "<p>Loading...</p>";

fn short_date(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct CommentItem {
    pub id: Id,
    pub author: String,
    pub avatar: String,
    pub text: String,
    pub date: String,
}

/// Everything the detail template shows, already resolved and formatted.
#[derive(Debug, Clone, Template)]
#[template(path = "recipe_detail.html")]
pub struct DetailView {
    pub title: String,
    pub description: String,
    pub author: Option<String>,
    pub category: Option<&'static str>,
    pub date: String,
    pub image_url: Option<String>,
    pub cooking_time: u32,
    pub servings: u32,
    pub difficulty: String,
    pub views: u64,
    pub likes_count: u64,
    pub liked: bool,
    pub bookmarked: bool,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    pub comments: Vec<CommentItem>,
    pub comment_text: String,
}

impl DetailView {
    /// `None` while the page is still loading.
    pub fn build(detail: &RecipeDetail, cfg: &ClientConfig) -> Option<Self> {
        let recipe = detail.recipe()?;
        Some(Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            author: recipe.author.clone(),
            category: recipe.category.map(|c| c.label()),
            date: short_date(recipe.created_at),
            image_url: resolve_image(recipe.image.as_deref(), &cfg.media_origin),
            cooking_time: recipe.cooking_time,
            servings: recipe.servings,
            difficulty: recipe.difficulty.clone(),
            views: recipe.views,
            likes_count: detail.likes_count(),
            liked: detail.liked(),
            bookmarked: detail.bookmarked(),
            ingredients: recipe.ingredients.clone(),
            steps: recipe.steps.clone(),
            comments: detail.comments().iter().map(|c| CommentItem {
                id: c.id,
                author: c.author.clone(),
                avatar: avatar_url(&cfg.avatar_service, &c.author),
                text: c.text.clone(),
                date: short_date(c.created_at),
            }).collect(),
            comment_text: detail.comment_text().to_string(),
        })
    }
}

/// HTML for the page in its current state.
pub fn render_page(detail: &RecipeDetail, cfg: &ClientConfig) -> Result<String, askama::Error> {
    match DetailView::build(detail, cfg) {
        Some(view) => view.render(),
        None => Ok(LOADING_HTML.to_string()),
    }
}
