use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User entity - document stored in the `usuarios` collection
///
/// Same posture as the product record: Spanish wire names, every field
/// beyond the identifier optional and unvalidated, absent fields persisted
/// as null. Email uniqueness is NOT enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Display name
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    /// Age in years
    #[serde(rename = "edad", default)]
    pub age: Option<i32>,
    /// Email address (no format check, no uniqueness constraint)
    #[serde(rename = "correo", default)]
    pub email: Option<String>,
}

/// DTO for creating a new user
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateUser {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "edad", default)]
    pub age: Option<i32>,
    #[serde(rename = "correo", default)]
    pub email: Option<String>,
}

/// DTO for replacing an existing user
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "edad", default)]
    pub age: Option<i32>,
    #[serde(rename = "correo", default)]
    pub email: Option<String>,
}

/// Confirmation payload returned after a successful delete
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeletedUser {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "usuario")]
    pub user: User,
}

impl User {
    /// Create a new user from a CreateUser DTO
    pub fn new(input: CreateUser) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            age: input.age,
            email: input.email,
        }
    }

    /// Replace every mutable field with the incoming value.
    ///
    /// This is a full overwrite: fields omitted from the request arrive as
    /// `None` and clear the stored value, they are NOT preserved.
    pub fn apply_update(&mut self, update: UpdateUser) {
        self.name = update.name;
        self.age = update.age;
        self.email = update.email;
    }
}

impl DeletedUser {
    pub fn new(user: User) -> Self {
        Self {
            message: "Usuario eliminado".to_string(),
            user,
        }
    }
}
