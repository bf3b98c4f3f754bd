use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Product entity - document stored in the `productos` collection
///
/// The wire format (JSON and BSON) uses the Spanish field names of the
/// public contract; absent fields persist as null. Nothing beyond the
/// identifier is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    /// Unit price
    #[serde(rename = "precio", default)]
    pub price: Option<f64>,
    /// Free-form description
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "precio", default)]
    pub price: Option<f64>,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}

/// DTO for replacing an existing product
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProduct {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "precio", default)]
    pub price: Option<f64>,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}

/// Confirmation payload returned after a successful delete
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeletedProduct {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "producto")]
    pub product: Product,
}

impl Product {
    /// Create a new product from a CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            price: input.price,
            description: input.description,
        }
    }

    /// Replace every mutable field with the incoming value.
    ///
    /// This is a full overwrite: fields omitted from the request arrive as
    /// `None` and clear the stored value, they are NOT preserved.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.price = update.price;
        self.description = update.description;
    }
}

impl DeletedProduct {
    pub fn new(product: Product) -> Self {
        Self {
            message: "Producto eliminado".to_string(),
            product,
        }
    }
}
