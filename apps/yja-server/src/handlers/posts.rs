//! Feed and admin handlers for posts.

use actix_web::{HttpResponse, web};

use yja_core::domain::{TITLE_MAX_CHARS, sanitize};
use yja_core::{Post, PostInput};
use yja_shared::ApiResponse;
use yja_shared::dto::{
    CreatePostRequest, DeletePostQuery, PostListQuery, PostListResponse, PostResponse,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const IMAGE_DATA_URL_PREFIX: &str = "data:image/";
const IMAGE_REQUIRED: &str = "Please choose an image file";

/// GET /api/posts?q=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner().q.unwrap_or_default();
    let store = state.store.lock().await;

    let posts = store.search(&query).iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostListResponse {
        posts,
        total: store.len(),
        query,
    })))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let store = state.store.lock().await;

    let post = store
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if !is_image_data_url(req.image.as_deref()) {
        return Err(AppError::BadRequest(IMAGE_REQUIRED.to_string()));
    }

    let new_post = to_input(req).into_new_post()?;

    let post = state.store.lock().await.create(new_post).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        to_response(&post),
        "Post created",
    )))
}

/// DELETE /api/posts/{id}?confirm=true
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<DeletePostQuery>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if !query.confirm {
        return Err(AppError::PreconditionRequired(
            "Delete this post? Repeat the request with confirm=true".to_string(),
        ));
    }

    state.store.lock().await.delete(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Uploads must be images, handed over as data URLs.
fn is_image_data_url(image: Option<&str>) -> bool {
    match image {
        None | Some("") => true,
        Some(image) => image
            .get(..IMAGE_DATA_URL_PREFIX.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(IMAGE_DATA_URL_PREFIX)),
    }
}

/// The admin form caps the title length; the validator does not.
fn to_input(req: CreatePostRequest) -> PostInput {
    PostInput {
        title: req.title.map(|t| t.chars().take(TITLE_MAX_CHARS).collect()),
        link: req.link,
        description: req.description,
        image: req.image,
        source: req.source,
    }
}

fn to_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id.clone(),
        title: post.title.clone(),
        link: post.link.clone(),
        href: sanitize(&post.link),
        description: post.description.clone(),
        image: post.image.clone(),
        source: post.source.clone(),
        created_at: post.created_at,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use yja_core::PostStore;
    use yja_core::store::DEFAULT_KEY;
    use yja_infra::{InMemoryKeyValueStore, RandomIdGenerator, SystemClock};

    use super::*;
    use crate::handlers::configure_routes;

    async fn seeded_state() -> AppState {
        let store = PostStore::load(
            DEFAULT_KEY,
            Arc::new(InMemoryKeyValueStore::new()),
            Arc::new(SystemClock),
            Arc::new(RandomIdGenerator),
        )
        .await;
        AppState::from_store(store)
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state.clone()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_list_returns_seed_posts() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["total"], 2);
        assert_eq!(body["data"]["posts"][0]["title"], "YJA Pathshala Spotlight");
        assert_eq!(body["data"]["posts"][0]["href"], "https://www.yja.org/education");
    }

    #[actix_web::test]
    async fn test_list_filters_by_query() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::get()
            .uri("/api/posts?q=COMMUNITY")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let posts = body["data"]["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["title"], "Community Service Recap");
        assert_eq!(body["data"]["total"], 2);
        assert_eq!(body["data"]["query"], "COMMUNITY");
    }

    #[actix_web::test]
    async fn test_create_prepends_post() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({
                "title": "  Youth Retreat  ",
                "link": "https://www.yja.org/retreat",
                "description": "Weekend retreat",
                "source": "education"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["title"], "Youth Retreat");
        assert_eq!(body["data"]["source"], "education");
        assert!(body["data"]["id"].as_str().unwrap().starts_with("p_"));

        let store = state.store.lock().await;
        assert_eq!(store.len(), 3);
        assert_eq!(store.posts()[0].title, "Youth Retreat");
    }

    #[actix_web::test]
    async fn test_create_truncates_long_title() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({
                "title": "t".repeat(TITLE_MAX_CHARS + 30),
                "link": "https://www.yja.org"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let store = state.store.lock().await;
        assert_eq!(store.posts()[0].title.chars().count(), TITLE_MAX_CHARS);
    }

    #[actix_web::test]
    async fn test_create_rejects_invalid_input() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": "", "link": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Title is required · Link is required");
        assert_eq!(body["errors"], json!(["Title is required", "Link is required"]));
        assert_eq!(state.store.lock().await.len(), 2);
    }

    #[actix_web::test]
    async fn test_unsafe_link_is_neutralized_in_feed() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": "Odd", "link": "https://exa mple.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["link"], "https://exa mple.com");
        assert_eq!(body["data"]["href"], "#");
    }

    #[actix_web::test]
    async fn test_delete_requires_confirmation() {
        let state = seeded_state().await;
        let app = app!(state);
        let id = state.store.lock().await.posts()[0].id.clone();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PRECONDITION_REQUIRED);
        assert_eq!(state.store.lock().await.len(), 2);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{id}?confirm=true"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let store = state.store.lock().await;
        assert_eq!(store.len(), 1);
        assert!(store.get(&id).is_none());
    }

    #[actix_web::test]
    async fn test_delete_unknown_id_is_no_content() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::delete()
            .uri("/api/posts/p_missing?confirm=true")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(state.store.lock().await.len(), 2);
    }

    #[actix_web::test]
    async fn test_get_post() {
        let state = seeded_state().await;
        let app = app!(state);
        let id = state.store.lock().await.posts()[1].id.clone();

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{id}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["title"], "Community Service Recap");

        let req = test::TestRequest::get().uri("/api/posts/p_missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ nope")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_create_accepts_image_data_url() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({
                "title": "With image",
                "link": "https://www.yja.org",
                "image": "data:image/png;base64,iVBORw0KGgo="
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["image"], "data:image/png;base64,iVBORw0KGgo=");
    }

    #[actix_web::test]
    async fn test_create_rejects_non_image_upload() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({
                "title": "With pdf",
                "link": "https://www.yja.org",
                "image": "data:application/pdf;base64,JVBERi0="
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], IMAGE_REQUIRED);
        assert_eq!(state.store.lock().await.len(), 2);
    }

    #[actix_web::test]
    async fn test_malformed_query_is_problem_json() {
        let state = seeded_state().await;
        let app = app!(state);
        let id = state.store.lock().await.posts()[0].id.clone();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{id}?confirm=yes"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert_eq!(state.store.lock().await.len(), 2);
    }
}
