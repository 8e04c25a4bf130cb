//! Drives `HttpRecipeStore` against an in-process axum backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use api::{ApiError, Credentials, FavoriteOutcome, HttpRecipeStore, RecipeStore};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use store::{Session, SessionHandle};
use tokio::sync::Notify;

#[derive(Clone, Default)]
struct Backend {
    seen: Arc<Mutex<Vec<(String, Option<String>)>>>,
    removal_started: Arc<Notify>,
    release_removal: Arc<Notify>,
}

impl Backend {
    fn record(&self, route: String, headers: &HeaderMap) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.seen.lock().unwrap().push((route, auth));
    }

    fn routes(&self) -> Vec<String> {
        self.seen.lock().unwrap().iter().map(|(r, _)| r.clone()).collect()
    }

    fn auths(&self) -> Vec<Option<String>> {
        self.seen.lock().unwrap().iter().map(|(_, a)| a.clone()).collect()
    }
}

async fn list_recipes(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let category = query.get("categoryId").cloned();
    backend.record(
        format!("GET /recipes?categoryId={}", category.clone().unwrap_or_default()),
        &headers,
    );
    let rows = vec![
        json!({"id": 1, "title": "Pancakes", "ingredients": "eggs, milk", "steps": "Mix. Fry.",
               "categoryId": 1, "author": {"id": 2, "name": "Ana"}}),
        json!({"id": 2, "title": "Carbonara", "ingredients": ["pasta", "egg"], "steps": "Boil.",
               "categoryId": 5, "author": {"id": 3, "name": "Ivo"}}),
    ];
    let rows: Vec<Value> = rows
        .into_iter()
        .filter(|r| match &category {
            Some(id) => r["categoryId"].to_string() == *id,
            None => true,
        })
        .collect();
    Json(Value::Array(rows))
}

async fn list_categories() -> &'static str {
    "<html>maintenance</html>"
}

async fn add_favorite(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    backend.record(format!("POST /recipes/favorite {}", body["recipeId"]), &headers);
    if body["recipeId"] == 7 {
        return (
            StatusCode::CONFLICT,
            Json(json!({"message": "Recipe already in favorites"})),
        );
    }
    (StatusCode::CREATED, Json(json!({"message": "Added"})))
}

async fn remove_favorite(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    backend.record(format!("DELETE /recipes/favorite {}", body["recipeId"]), &headers);
    backend.removal_started.notify_one();
    backend.release_removal.notified().await;
    Json(json!([]))
}

async fn delete_recipe(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> (StatusCode, Json<Value>) {
    backend.record(format!("DELETE /recipes/{id}"), &headers);
    (
        StatusCode::FORBIDDEN,
        Json(json!({"message": "You can only delete your own recipes"})),
    )
}

async fn login(State(backend): State<Backend>, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    backend.record(format!("POST /users/login {}", body["email"]), &headers);
    Json(json!({"jwtToken": "tok-9", "id": 4}))
}

async fn serve(backend: Backend) -> String {
    let app = Router::new()
        .route("/recipes", get(list_recipes))
        .route("/categories", get(list_categories))
        .route("/recipes/favorite", post(add_favorite).delete(remove_favorite))
        .route("/recipes/{id}", delete(delete_recipe))
        .route("/users/login", post(login))
        .with_state(backend);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn session_with(token: &str) -> SessionHandle {
    let session = SessionHandle::in_memory();
    session.login(Session {
        token: token.to_string(),
        user_id: 4,
    });
    session
}

#[tokio::test]
async fn test_category_listing_sends_query() {
    let backend = Backend::default();
    let base = serve(backend.clone()).await;
    let store = HttpRecipeStore::new(base, SessionHandle::in_memory());

    let all = store.list_recipes(None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].ingredient_list(), vec!["pasta", "egg"]);

    let pasta = store.list_recipes(Some(5)).await.unwrap();
    assert_eq!(pasta.len(), 1);
    assert_eq!(pasta[0].title, "Carbonara");

    assert_eq!(
        backend.routes(),
        vec!["GET /recipes?categoryId=", "GET /recipes?categoryId=5"]
    );
    // Public reads carry no token
    assert_eq!(backend.auths(), vec![None, None]);
}

#[tokio::test]
async fn test_bearer_read_at_call_time() {
    let backend = Backend::default();
    let base = serve(backend.clone()).await;
    let session = session_with("tok-1");
    let store = HttpRecipeStore::new(base, session.clone());

    assert_eq!(store.add_favorite(1).await, Ok(FavoriteOutcome::Added));
    session.login(Session {
        token: "tok-2".to_string(),
        user_id: 4,
    });
    assert_eq!(store.add_favorite(2).await, Ok(FavoriteOutcome::Added));

    assert_eq!(
        backend.auths(),
        vec![Some("Bearer tok-1".to_string()), Some("Bearer tok-2".to_string())]
    );
}

#[tokio::test]
async fn test_no_session_sends_nothing() {
    let backend = Backend::default();
    let base = serve(backend.clone()).await;
    let store = HttpRecipeStore::new(base, SessionHandle::in_memory());

    assert_eq!(store.add_favorite(1).await, Err(ApiError::AuthRequired));
    assert_eq!(store.remove_favorite(1).await, Err(ApiError::AuthRequired));
    assert_eq!(store.list_favorites().await, Err(ApiError::AuthRequired));
    assert!(backend.routes().is_empty());
}

#[tokio::test]
async fn test_conflict_is_already_favorited() {
    let backend = Backend::default();
    let base = serve(backend.clone()).await;
    let store = HttpRecipeStore::new(base, session_with("tok-1"));

    assert_eq!(
        store.add_favorite(7).await,
        Ok(FavoriteOutcome::AlreadyFavorited)
    );
}

#[tokio::test]
async fn test_server_message_surfaces() {
    let backend = Backend::default();
    let base = serve(backend.clone()).await;
    let store = HttpRecipeStore::new(base, session_with("tok-1"));

    let err = store.delete_recipe(3).await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.user_message(), "You can only delete your own recipes");
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let backend = Backend::default();
    let base = serve(backend.clone()).await;
    let store = HttpRecipeStore::new(base, SessionHandle::in_memory());

    assert!(matches!(
        store.list_categories().await,
        Err(ApiError::Decode(_))
    ));
}

#[tokio::test]
async fn test_unreachable_is_network_error() {
    let store = HttpRecipeStore::new("http://127.0.0.1:1", SessionHandle::in_memory());
    let err = store.list_recipes(None).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.user_message(), "Could not reach the server. Try again later.");
}

#[tokio::test]
async fn test_login_accepts_backend_spelling() {
    let backend = Backend::default();
    let base = serve(backend.clone()).await;
    let store = HttpRecipeStore::new(base, SessionHandle::in_memory());

    let session = store
        .login(&Credentials {
            email: "ana@example.com".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(session.token, "tok-9");
    assert_eq!(session.user_id, 4);
    // Installing the session is the caller's job
    assert!(!store.session().is_logged_in());
}

#[tokio::test]
async fn test_logout_does_not_cancel_inflight_removal() {
    let backend = Backend::default();
    let base = serve(backend.clone()).await;
    let session = session_with("tok-1");
    let store = HttpRecipeStore::new(base, session.clone());

    let interleave = async {
        backend.removal_started.notified().await;
        session.logout();
        backend.release_removal.notify_one();
    };
    let (result, ()) = tokio::join!(store.remove_favorite(9), interleave);

    assert_eq!(result, Ok(()));
    assert!(!session.is_logged_in());
    assert_eq!(backend.auths(), vec![Some("Bearer tok-1".to_string())]);
}
