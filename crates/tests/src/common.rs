//! In-process mock of the EduHub REST backend.
//!
//! Each test spawns its own instance on an ephemeral port and drives the
//! real `ApiClient` against it over HTTP, so the adapter's URL shapes,
//! bodies, and error mapping are exercised end to end.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use uuid::Uuid;

use client::ApiClient;

/// Backing state for the mock backend.
#[derive(Default)]
pub struct Db {
    pub users: Vec<Value>,
    pub classes: Vec<Value>,
    pub resources: Vec<Value>,
    pub groups: Vec<Value>,
    /// When set, list endpoints answer with a non-JSON body.
    pub broken: bool,
}

pub type Shared = Arc<Mutex<Db>>;

/// Spawn the mock backend and return a client pointed at it plus a handle
/// to the backing state for seeding and assertions.
pub async fn test_client() -> (ApiClient, Shared) {
    let state: Shared = Arc::new(Mutex::new(Db::default()));
    let router = api_router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve mock backend");
    });

    (ApiClient::new(format!("http://{addr}")), state)
}

/// Seed a user with the backend's password rule (`secret`) and return
/// the minted id.
pub fn seed_user(state: &Shared, name: &str, email: &str, role: &str) -> String {
    let id = Uuid::new_v4().to_string();
    state.lock().unwrap().users.push(json!({
        "id": id,
        "name": name,
        "email": email,
        "role": role,
    }));
    id
}

pub fn seed_group(state: &Shared, name: &str) -> String {
    let id = Uuid::new_v4().to_string();
    state.lock().unwrap().groups.push(json!({
        "id": id,
        "name": name,
        "users": [],
    }));
    id
}

fn api_router(state: Shared) -> Router {
    Router::new()
        .route("/api/admin/users", get(list_users))
        .route("/api/admin/users/{id}", delete(delete_user))
        .route("/api/admin/users/{id}/meeting", post(set_meeting_link))
        .route("/api/admin/classes", get(list_classes).post(create_class))
        .route("/api/admin/classes/{id}", delete(delete_class))
        .route("/api/admin/classes/{id}/assign", post(assign_users_to_class))
        .route(
            "/api/admin/classes/{id}/assign/{user_id}",
            post(assign_user_to_class),
        )
        .route(
            "/api/admin/resources",
            get(list_resources).post(create_resource),
        )
        .route("/api/admin/resources/{id}", delete(delete_resource))
        .route("/api/admin/groups", get(list_groups).post(create_group))
        .route("/api/admin/groups/{id}", delete(delete_group))
        .route("/api/admin/groups/{id}/assign", post(assign_users_to_group))
        .route("/auth/login", post(login))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/request-code", post(request_code))
        .with_state(state)
}

fn not_found(entity: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "status": "error", "message": format!("{entity} not found") })),
    )
        .into_response()
}

fn broken_body() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        "this is not json",
    )
        .into_response()
}

// ── Users ──

async fn list_users(State(state): State<Shared>) -> Response {
    let db = state.lock().unwrap();
    if db.broken {
        return broken_body();
    }
    Json(db.users.clone()).into_response()
}

async fn delete_user(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut db = state.lock().unwrap();
    let before = db.users.len();
    db.users.retain(|u| u["id"].as_str() != Some(id.as_str()));
    if db.users.len() < before {
        StatusCode::OK.into_response()
    } else {
        not_found("User")
    }
}

async fn set_meeting_link(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut db = state.lock().unwrap();
    match db
        .users
        .iter_mut()
        .find(|u| u["id"].as_str() == Some(id.as_str()))
    {
        Some(user) => {
            user["meetingLink"] = body["link"].clone();
            StatusCode::OK.into_response()
        }
        None => not_found("User"),
    }
}

// ── Classes ──

async fn list_classes(State(state): State<Shared>) -> Response {
    let db = state.lock().unwrap();
    if db.broken {
        return broken_body();
    }
    Json(db.classes.clone()).into_response()
}

async fn create_class(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut db = state.lock().unwrap();
    let group = body
        .get("groupId")
        .and_then(|g| g.as_str())
        .and_then(|gid| {
            db.groups
                .iter()
                .find(|g| g["id"].as_str() == Some(gid))
                .cloned()
        });
    let class = json!({
        "id": Uuid::new_v4().to_string(),
        "title": body["title"],
        "date": body["date"],
        "time": body["time"],
        "link": body.get("link").cloned().unwrap_or_else(|| json!("")),
        "groupId": body.get("groupId").cloned().unwrap_or(Value::Null),
        "users": [],
        "group": group.unwrap_or(Value::Null),
    });
    db.classes.push(class.clone());
    (StatusCode::CREATED, Json(class)).into_response()
}

async fn delete_class(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut db = state.lock().unwrap();
    let before = db.classes.len();
    db.classes.retain(|c| c["id"].as_str() != Some(id.as_str()));
    if db.classes.len() < before {
        StatusCode::OK.into_response()
    } else {
        not_found("Class")
    }
}

async fn assign_user_to_class(
    State(state): State<Shared>,
    Path((id, user_id)): Path<(String, String)>,
) -> Response {
    let mut db = state.lock().unwrap();
    let Some(user) = db
        .users
        .iter()
        .find(|u| u["id"].as_str() == Some(user_id.as_str()))
        .cloned()
    else {
        return not_found("User");
    };
    let Some(class) = db
        .classes
        .iter_mut()
        .find(|c| c["id"].as_str() == Some(id.as_str()))
    else {
        return not_found("Class");
    };
    class["users"].as_array_mut().unwrap().push(user);
    StatusCode::OK.into_response()
}

async fn assign_users_to_class(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut db = state.lock().unwrap();
    let ids: Vec<String> = body["userIds"]
        .as_array()
        .map(|a| {
            a.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    let members: Vec<Value> = db
        .users
        .iter()
        .filter(|u| {
            u["id"]
                .as_str()
                .map(|uid| ids.iter().any(|id| id == uid))
                .unwrap_or(false)
        })
        .cloned()
        .collect();
    let Some(class) = db
        .classes
        .iter_mut()
        .find(|c| c["id"].as_str() == Some(id.as_str()))
    else {
        return not_found("Class");
    };
    class["users"].as_array_mut().unwrap().extend(members);
    StatusCode::OK.into_response()
}

// ── Resources ──

async fn list_resources(State(state): State<Shared>) -> Response {
    let db = state.lock().unwrap();
    if db.broken {
        return broken_body();
    }
    Json(db.resources.clone()).into_response()
}

async fn create_resource(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut db = state.lock().unwrap();
    let resource = json!({
        "id": Uuid::new_v4().to_string(),
        "title": body["title"],
        "link": body["link"],
    });
    db.resources.push(resource.clone());
    (StatusCode::CREATED, Json(resource)).into_response()
}

async fn delete_resource(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut db = state.lock().unwrap();
    let before = db.resources.len();
    db.resources.retain(|r| r["id"].as_str() != Some(id.as_str()));
    if db.resources.len() < before {
        StatusCode::OK.into_response()
    } else {
        not_found("Resource")
    }
}

// ── Groups ──

async fn list_groups(State(state): State<Shared>) -> Response {
    let db = state.lock().unwrap();
    if db.broken {
        return broken_body();
    }
    Json(db.groups.clone()).into_response()
}

async fn create_group(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut db = state.lock().unwrap();
    let group = json!({
        "id": Uuid::new_v4().to_string(),
        "name": body["name"],
        "users": [],
    });
    db.groups.push(group.clone());
    (StatusCode::CREATED, Json(group)).into_response()
}

async fn delete_group(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut db = state.lock().unwrap();
    let before = db.groups.len();
    db.groups.retain(|g| g["id"].as_str() != Some(id.as_str()));
    if db.groups.len() < before {
        StatusCode::OK.into_response()
    } else {
        not_found("Group")
    }
}

async fn assign_users_to_group(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut db = state.lock().unwrap();
    let ids: Vec<String> = body["userIds"]
        .as_array()
        .map(|a| {
            a.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    let members: Vec<Value> = db
        .users
        .iter()
        .filter(|u| {
            u["id"]
                .as_str()
                .map(|uid| ids.iter().any(|id| id == uid))
                .unwrap_or(false)
        })
        .cloned()
        .collect();
    let Some(group) = db
        .groups
        .iter_mut()
        .find(|g| g["id"].as_str() == Some(id.as_str()))
    else {
        return not_found("Group");
    };
    group["users"].as_array_mut().unwrap().extend(members);
    StatusCode::OK.into_response()
}

// ── Auth ──

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    let db = state.lock().unwrap();
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    let user = db
        .users
        .iter()
        .find(|u| u["email"].as_str() == Some(email))
        .cloned();
    match user {
        Some(user) if password == "secret" => Json(json!({
            "status": "success",
            "message": "Login successful",
            "user": user,
        })),
        _ => Json(json!({ "status": "error", "message": "Invalid credentials" })),
    }
}

async fn signup(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    let mut db = state.lock().unwrap();
    let email = body["email"].as_str().unwrap_or_default().to_string();
    if db.users.iter().any(|u| u["email"].as_str() == Some(email.as_str())) {
        return Json(json!({ "status": "error", "message": "Email already registered" }));
    }
    db.users.push(json!({
        "id": Uuid::new_v4().to_string(),
        "name": body["name"],
        "email": email,
        "role": body["role"],
    }));
    Json(json!({ "status": "success", "message": "Signup successful" }))
}

async fn request_code(State(_state): State<Shared>) -> Json<Value> {
    Json(json!({ "status": "success", "message": "Verification code sent" }))
}
