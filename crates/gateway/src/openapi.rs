//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use domain::UserSummary;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::user_handler::list_users_without_confirmation_mail),
    components(schemas(UserSummary)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Realm user directory queries"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_endpoint_and_security() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/users-without-confirmation-mail"));

        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
        assert!(components.schemas.contains_key("UserSummary"));
    }
}
