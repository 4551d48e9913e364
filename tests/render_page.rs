#![cfg(feature = "inmem-store")]

mod common;

use std::sync::Arc;

use common::*;
use recipe_detail::render::{render_page, DetailView, LOADING_HTML};
use recipe_detail::services::CommentService;
use recipe_detail::{ClientConfig, RecipeDetail};

#[tokio::test]
async fn loading_then_full_page() {
    let backend = seeded();
    backend.inner.add_comment(&authed(), 5, "lovely").await.unwrap();
    let cfg = ClientConfig::default();
    let mut p = RecipeDetail::new(backend.clone(), Arc::new(RecordingNotifier::default()));

    assert_eq!(render_page(&p, &cfg).unwrap(), LOADING_HTML);
    assert!(DetailView::build(&p, &cfg).is_none());

    p.sync(5, &authed()).await.unwrap();
    p.toggle_bookmark(&authed()).await.unwrap();
    p.set_comment_text("draft");

    let view = DetailView::build(&p, &cfg).unwrap();
    assert_eq!(view.image_url.as_deref(), Some("http://localhost:8000/media/recipes/x.jpg"));
    assert_eq!(view.date, "2024-03-01");
    assert_eq!(view.views, 11);
    assert!(view.bookmarked);
    assert_eq!(view.comments[0].avatar, "https://ui-avatars.com/api/?name=ann");

    let html = render_page(&p, &cfg).unwrap();
    assert!(html.contains("<h1>Recipe 5</h1>"));
    assert!(html.contains(r#"class="bookmark active""#));
    assert!(html.contains(r#"value="draft""#));
    assert!(html.contains("<p>lovely</p>"));
    assert!(html.contains(r#"<span class="quantity">2</span> <span class="ingredient">eggs</span>"#));
}
