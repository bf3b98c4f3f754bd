use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{CreateProduct, DeletedProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, update_product, delete_product),
    components(schemas(Product, CreateProduct, UpdateProduct, DeletedProduct)),
    tags(
        (name = "Productos", description = "Product collection endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", put(update_product).delete(delete_product))
        .with_state(shared_service)
}

/// List every product
#[utoipa::path(
    get,
    path = "",
    tag = "Productos",
    responses(
        (status = 200, description = "All products, in storage order", body = Vec<Product>),
        (status = 500, description = "Storage failure (plain text)")
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Productos",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 500, description = "Storage failure (plain text)")
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Json(input): Json<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product's fields
///
/// Full overwrite: fields omitted from the body are cleared, not preserved.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Productos",
    params(
        ("id" = String, Path, description = "Product identifier")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 404, description = "Producto no encontrado (plain text)"),
        (status = 500, description = "Storage failure (plain text)")
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(&id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Productos",
    params(
        ("id" = String, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Product removed", body = DeletedProduct),
        (status = 404, description = "Producto no encontrado (plain text)"),
        (status = 500, description = "Storage failure (plain text)")
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<DeletedProduct>> {
    let product = service.delete_product(&id).await?;
    Ok(Json(DeletedProduct::new(product)))
}
