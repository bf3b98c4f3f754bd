use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUser, DeletedUser, UpdateUser, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, update_user, delete_user),
    components(schemas(User, CreateUser, UpdateUser, DeletedUser)),
    tags(
        (name = "Usuarios", description = "User collection endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", put(update_user).delete(delete_user))
        .with_state(shared_service)
}

/// List every user
#[utoipa::path(
    get,
    path = "",
    tag = "Usuarios",
    responses(
        (status = 200, description = "All users, in storage order", body = Vec<User>),
        (status = 500, description = "Storage failure (plain text)")
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = "Usuarios",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 500, description = "Storage failure (plain text)")
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Json(input): Json<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace a user's fields
///
/// Full overwrite: fields omitted from the body are cleared, not preserved.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Usuarios",
    params(
        ("id" = String, Path, description = "User identifier")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "Usuario no encontrado (plain text)"),
        (status = 500, description = "Storage failure (plain text)")
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    Json(input): Json<UpdateUser>,
) -> UserResult<Json<User>> {
    let user = service.update_user(&id, input).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Usuarios",
    params(
        ("id" = String, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "User removed", body = DeletedUser),
        (status = 404, description = "Usuario no encontrado (plain text)"),
        (status = 500, description = "Storage failure (plain text)")
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<DeletedUser>> {
    let user = service.delete_user(&id).await?;
    Ok(Json(DeletedUser::new(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use crate::repository::MockUserRepository;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    fn app(repo: MockUserRepository) -> Router {
        router(UserService::new(repo))
    }

    async fn body_json(body: Body) -> Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(body: Body) -> String {
        let bytes = body.collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_201_and_echoes_fields() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().return_once(|input| Ok(User::new(input)));

        let request = json_request(
            "POST",
            "/",
            json!({ "nombre": "Ana", "edad": 30, "correo": "ana@x.com" }),
        );
        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["nombre"], json!("Ana"));
        assert_eq!(body["edad"], json!(30));
        assert_eq!(body["correo"], json!("ana@x.com"));
        assert!(!body["_id"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_200_with_users() {
        let user = User {
            id: Uuid::now_v7(),
            name: Some("Ana".to_string()),
            age: Some(30),
            email: Some("ana@x.com".to_string()),
        };
        let expected = vec![user.clone()];

        let mut repo = MockUserRepository::new();
        repo.expect_list().return_once(move || Ok(expected));

        let response = app(repo)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["correo"], json!("ana@x.com"));
    }

    #[tokio::test]
    async fn test_update_missing_id_returns_404_plain_text() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .return_once(|id, _| Err(UserError::NotFound(id)));

        let request = json_request(
            "PUT",
            &format!("/{}", Uuid::now_v7()),
            json!({ "nombre": "Ana" }),
        );
        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_text(response.into_body()).await,
            "Usuario no encontrado"
        );
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let id = Uuid::now_v7();

        let mut repo = MockUserRepository::new();
        repo.expect_update().return_once(move |id, input| {
            let mut user = User {
                id,
                name: Some("Ana".to_string()),
                age: Some(30),
                email: Some("ana@x.com".to_string()),
            };
            user.apply_update(input);
            Ok(user)
        });

        // Partial body: age and email must come back null
        let request = json_request("PUT", &format!("/{}", id), json!({ "nombre": "Ana María" }));
        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["nombre"], json!("Ana María"));
        assert_eq!(body["edad"], Value::Null);
        assert_eq!(body["correo"], Value::Null);
    }

    #[tokio::test]
    async fn test_delete_returns_confirmation_envelope() {
        let user = User {
            id: Uuid::now_v7(),
            name: Some("Ana".to_string()),
            age: Some(30),
            email: Some("ana@x.com".to_string()),
        };
        let id = user.id;

        let mut repo = MockUserRepository::new();
        repo.expect_delete().return_once(move |_| Ok(user));

        let response = app(repo)
            .oneshot(
                Request::delete(format!("/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["mensaje"], json!("Usuario eliminado"));
        assert_eq!(body["usuario"]["_id"], json!(id.to_string()));
    }

    #[tokio::test]
    async fn test_delete_malformed_id_returns_500() {
        // The repository is never reached: the identifier fails to parse
        let repo = MockUserRepository::new();

        let response = app(repo)
            .oneshot(
                Request::delete("/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_text(response.into_body()).await,
            "Error interno del servidor"
        );
    }

    #[tokio::test]
    async fn test_delete_missing_id_returns_404_plain_text() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .return_once(|id| Err(UserError::NotFound(id)));

        let response = app(repo)
            .oneshot(
                Request::delete(format!("/{}", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_text(response.into_body()).await,
            "Usuario no encontrado"
        );
    }
}
