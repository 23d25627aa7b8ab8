//! Integration tests for `ApiClient` against an in-process backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use api::models::phone_numbers::NewPhoneNumber;
use api::upload::REJECTED_MESSAGE;
use api::{ApiClient, ApiConfig, ApiError, SpreadsheetFile};
use axum::extract::{Multipart, RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use store::session::{TOKEN_KEY, USER_KEY};
use store::{FilterKey, KeyValueStore, MemoryStorage, ProductFilters, SessionStore};

const VALID_TOKEN: &str = "tok-123";

#[derive(Clone, Default)]
struct Recorded {
    auth: Arc<Mutex<Vec<Option<String>>>>,
    queries: Arc<Mutex<Vec<String>>>,
    upload_fields: Arc<Mutex<Vec<String>>>,
    uploads: Arc<AtomicUsize>,
}

impl Recorded {
    fn record_auth(&self, headers: &HeaderMap) -> Option<String> {
        let value = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.auth.lock().unwrap().push(value.clone());
        value
    }

    fn last_auth(&self) -> Option<String> {
        self.auth.lock().unwrap().last().cloned().flatten()
    }

    fn last_query(&self) -> String {
        self.queries.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

fn user_json() -> Value {
    json!({"id": 1, "name": "Admin", "email": "admin@akram.com", "role": "admin"})
}

async fn login(State(rec): State<Recorded>, Json(body): Json<Value>) -> Response {
    rec.auth.lock().unwrap().push(None);
    if body["password"] == "admin123" {
        Json(json!({"access_token": VALID_TOKEN, "token_type": "bearer", "user": user_json()}))
            .into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Email ou senha incorretos"})),
        )
            .into_response()
    }
}

async fn me(State(rec): State<Recorded>, headers: HeaderMap) -> Response {
    match rec.record_auth(&headers) {
        Some(value) if value == format!("Bearer {VALID_TOKEN}") => Json(user_json()).into_response(),
        _ => (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Not authenticated"}))).into_response(),
    }
}

async fn filter_options(State(rec): State<Recorded>, headers: HeaderMap) -> Json<Value> {
    rec.record_auth(&headers);
    Json(json!({"filiais": ["3B"], "classes": ["CRITICO"], "ufs": ["SP"], "compradores": []}))
}

async fn products(
    State(rec): State<Recorded>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Json<Value> {
    rec.record_auth(&headers);
    rec.queries.lock().unwrap().push(query.unwrap_or_default());
    Json(json!({"items": [], "total": 0, "page": 1, "total_pages": 0}))
}

async fn create_phone(State(rec): State<Recorded>, headers: HeaderMap) -> Response {
    rec.record_auth(&headers);
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"detail": "Número já cadastrado"})),
    )
        .into_response()
}

async fn upload(State(rec): State<Recorded>, mut multipart: Multipart) -> Json<Value> {
    rec.uploads.fetch_add(1, Ordering::SeqCst);
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        rec.upload_fields
            .lock()
            .unwrap()
            .push(format!("{name}:{file_name}"));
    }
    Json(json!({"message": "Arquivo processado"}))
}

async fn trigger(State(rec): State<Recorded>, RawQuery(query): RawQuery) -> Json<Value> {
    rec.queries.lock().unwrap().push(query.unwrap_or_default());
    Json(json!({"sent": 3, "skipped": 1, "errors": []}))
}

async fn spawn_backend() -> (String, Recorded) {
    let rec = Recorded::default();
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/products", get(products))
        .route("/api/products/filters", get(filter_options))
        .route("/api/phone-numbers", post(create_phone))
        .route("/api/uploads", post(upload))
        .route("/api/notifications/trigger", post(trigger))
        .with_state(rec.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), rec)
}

fn client_for(base_url: &str) -> (ApiClient, MemoryStorage) {
    let storage = MemoryStorage::new();
    let client = ApiClient::new(&ApiConfig::new(base_url), Arc::new(storage.clone()));
    (client, storage)
}

#[tokio::test]
async fn test_login_then_requests_carry_bearer_token() {
    let (base_url, rec) = spawn_backend().await;
    let (client, storage) = client_for(&base_url);
    let mut session = SessionStore::new(Arc::new(storage.clone()));

    let response = client.login("admin@akram.com", "admin123").await.unwrap();
    assert_eq!(response.access_token, VALID_TOKEN);
    session.set_auth(response.access_token.clone(), response.user);

    let user = client.me().await.unwrap();
    assert_eq!(user.email, "admin@akram.com");
    assert_eq!(rec.last_auth(), Some(format!("Bearer {}", response.access_token)));
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn test_login_failure_exposes_detail() {
    let (base_url, _rec) = spawn_backend().await;
    let (client, storage) = client_for(&base_url);

    let err = client.login("admin@akram.com", "wrong").await.unwrap_err();
    assert_eq!(err.user_message("Erro ao fazer login"), "Email ou senha incorretos");
    assert!(storage.get(TOKEN_KEY).is_none());
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_notifies() {
    let (base_url, rec) = spawn_backend().await;
    let (client, storage) = client_for(&base_url);
    storage.set(TOKEN_KEY, "stale");
    storage.set(USER_KEY, &user_json().to_string());
    let mut events = client.session_events();

    let err = client.me().await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(rec.last_auth().as_deref(), Some("Bearer stale"));

    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
    assert!(events.has_changed().unwrap());
    assert_eq!(*events.borrow_and_update(), 1);

    // The next request goes out anonymously.
    client.filter_options().await.unwrap();
    assert_eq!(rec.last_auth(), None);

    let mut session = SessionStore::new(Arc::new(storage.clone()));
    assert!(!session.load_from_storage().is_authenticated());
}

#[tokio::test]
async fn test_error_status_carries_detail() {
    let (base_url, _rec) = spawn_backend().await;
    let (client, _storage) = client_for(&base_url);

    let phone = NewPhoneNumber {
        number: "5511999999999".to_string(),
        name: None,
        notification_types: r#"["MUITO CRÍTICO"]"#.to_string(),
    };
    let err = client.create_phone_number(&phone).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 400,
            detail: Some("Número já cadastrado".to_string())
        }
    );
}

#[tokio::test]
async fn test_rejected_file_never_reaches_backend() {
    let (base_url, rec) = spawn_backend().await;
    let (client, _storage) = client_for(&base_url);

    let err = SpreadsheetFile::new("relatorio.pdf", b"%PDF".to_vec()).unwrap_err();
    assert_eq!(err.user_message("Erro ao processar arquivo"), REJECTED_MESSAGE);
    assert_eq!(rec.uploads.load(Ordering::SeqCst), 0);

    let file = SpreadsheetFile::new("estoque.csv", b"codigo;descricao\n1;Dipirona".to_vec()).unwrap();
    let response = client.upload_products(file).await.unwrap();
    assert_eq!(response.message, "Arquivo processado");
    assert_eq!(rec.uploads.load(Ordering::SeqCst), 1);
    assert_eq!(
        rec.upload_fields.lock().unwrap().as_slice(),
        ["file:estoque.csv".to_string()]
    );
}

#[tokio::test]
async fn test_trigger_summary_and_force_flag() {
    let (base_url, rec) = spawn_backend().await;
    let (client, _storage) = client_for(&base_url);

    let result = client.trigger_notifications(true).await.unwrap();
    assert_eq!(rec.last_query(), "force=true");
    let banner = result.summary();
    assert!(banner.contains("Enviado: 3"));
    assert!(banner.contains("Ignorado (já enviou): 1"));

    client.trigger_notifications(false).await.unwrap();
    assert_eq!(rec.last_query(), "force=false");
}

#[tokio::test]
async fn test_classe_change_on_page_three_queries_first_page() {
    let (base_url, rec) = spawn_backend().await;
    let (client, _storage) = client_for(&base_url);

    let mut filters = ProductFilters::default();
    filters.set_page(3);
    client.products(&filters, 30).await.unwrap();
    assert_eq!(rec.last_query(), "page=3&page_size=30");

    filters.set_filter(FilterKey::Classe, "CRITICO");
    client.products(&filters, 30).await.unwrap();
    let query = rec.last_query();
    assert!(query.contains("page=1"), "{query}");
    assert!(query.contains("classe=CRITICO"), "{query}");
    assert!(!query.contains("filial="), "{query}");
}
