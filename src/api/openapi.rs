use crate::api::handlers::{health, signup};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(health::health, signup::signup),
    components(
        schemas(
            health::Health,
            signup::Account,
            signup::ErrorResponse,
            signup::RegistrationRequest,
            signup::SignupResponse,
        )
    ),
    tags(
        (name = "auth", description = "User registration API"),
        (name = "health", description = "Service health"),
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
