//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Tienda API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tienda API",
        version = "0.1.0",
        description = "CRUD REST API for the product and user collections",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    nest(
        (path = "/productos", api = domain_products::ApiDoc),
        (path = "/usuarios", api = domain_users::ApiDoc)
    ),
    tags(
        (name = "Productos", description = "Product collection endpoints"),
        (name = "Usuarios", description = "User collection endpoints")
    )
)]
pub struct ApiDoc;
