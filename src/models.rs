use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type Id = i64;

fn default_servings() -> u32 { 1 }
fn default_difficulty() -> String { "medium".into() }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dessert,
    Appetizer,
    Snack,
    Main,
    Beverage,
    Salad,
    Soup,
    #[serde(other)]
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Dessert => "Dessert",
            Category::Appetizer => "Appetizer",
            Category::Snack => "Snack",
            Category::Main => "Main course",
            Category::Beverage => "Beverage",
            Category::Salad => "Salad",
            Category::Soup => "Soup",
            Category::Other => "Other",
        }
    }
}

/// Ingredient quantities are free-form on the server: text, a bare number or null.
fn quantity_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Quantity {
        Text(String),
        Int(i64),
        Float(f64),
        Missing(()),
    }

    Ok(match Quantity::deserialize(deserializer)? {
        Quantity::Text(t) => t,
        Quantity::Int(n) => n.to_string(),
        Quantity::Float(f) => f.to_string(),
        Quantity::Missing(()) => String::new(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, deserialize_with = "quantity_text")]
    pub quantity: String,
    pub item: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: Option<String>, // display name, null for admin-seeded recipes
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub image: Option<String>, // absolute URL or site-relative path
    #[serde(default)]
    pub cooking_time: u32, // minutes
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes_count: Option<u64>,
    #[serde(default)]
    pub liked: bool, // relative to the requesting session
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Id,
    pub author: String,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Recipe summary nested inside a bookmark record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkedRecipe {
    pub id: Id,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub cooking_time: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub likes_count: Option<u64>,
    #[serde(default)]
    pub liked: bool,
}

impl From<&Recipe> for BookmarkedRecipe {
    fn from(r: &Recipe) -> Self {
        Self {
            id: r.id,
            title: r.title.clone(),
            image: r.image.clone(),
            difficulty: Some(r.difficulty.clone()),
            cooking_time: Some(r.cooking_time),
            servings: Some(r.servings),
            category: r.category,
            likes_count: r.likes_count,
            liked: r.liked,
        }
    }
}

/// A bookmark record. Its `id` is the bookmark's own id, distinct from the recipe id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: Id,
    pub recipe: BookmarkedRecipe,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Reply to the bookmark-create call; only the id is guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedBookmark {
    pub id: Id,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCount {
    pub views: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeStatus {
    pub liked: bool,
    pub likes_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBookmark {
    pub recipe_id: Id,
}
