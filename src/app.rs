use crate::{modules, types::Context};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

pub fn get_router(ctx: Arc<Context>) -> Router {
    Router::new()
        .nest("/api", modules::get_router())
        .with_state(ctx.clone())
        .layer(Extension(ctx))
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(trace::TraceLayer::new_for_http())
        .layer(
            cors::CorsLayer::new()
                .allow_methods([
                    Method::OPTIONS,
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_origin(cors::Any),
        )
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = get_router(ctx.clone());

        Self { ctx, router }
    }

    pub async fn serve(self) {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = match TcpListener::bind(&address).await {
            Ok(listener) => listener,
            Err(err) => {
                tracing::error!("Failed to bind to {}: {}", address, err);
                return;
            }
        };

        tracing::info!(
            "App is running on {} ({:?})",
            self.ctx.app.url,
            self.ctx.app.environment
        );

        if let Err(err) = axum::serve(listener, self.router).await {
            tracing::error!("Server error: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::get_router;
    use crate::types::test_support::lazy_context;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router() -> Router {
        get_router(lazy_context())
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_check_responds() {
        let request = Request::builder().uri("/api").body(Body::empty()).unwrap();
        let (status, body) = send(router(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Welcome to Burger Lab API");
    }

    #[tokio::test]
    async fn cart_requires_a_session() {
        let request = Request::builder()
            .uri("/api/carts")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router(), request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid session token");
    }

    #[tokio::test]
    async fn placing_an_order_requires_a_session() {
        let request = json_request(
            Method::POST,
            "/api/orders",
            json!({
                "address": "12 Burger Street",
                "phone_number": "08012345678",
                "payment_method": "COD",
            }),
        );
        let (status, _) = send(router(), request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn sign_up_rejects_invalid_email_and_short_password() {
        let request = json_request(
            Method::POST,
            "/api/auth/sign-up",
            json!({
                "email": "not-an-email",
                "password": "123",
                "confirm_password": "123",
            }),
        );
        let (status, body) = send(router(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"].get("email").is_some());
        assert!(body["errors"].get("password").is_some());
    }

    #[tokio::test]
    async fn sign_up_rejects_mismatched_passwords() {
        let request = json_request(
            Method::POST,
            "/api/auth/sign-up",
            json!({
                "email": "jo@burgerlab.io",
                "password": "burger123",
                "confirm_password": "burger321",
            }),
        );
        let (status, body) = send(router(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Passwords do not match");
    }

    #[tokio::test]
    async fn sign_up_rejects_a_body_missing_fields_as_json() {
        let request = json_request(
            Method::POST,
            "/api/auth/sign-up",
            json!({ "email": "jo@burgerlab.io", "password": "burger123" }),
        );
        let (status, body) = send(router(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request body");
    }

    #[tokio::test]
    async fn refresh_rejects_a_body_that_is_not_json() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/auth/refresh")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("refresh_token=abc"))
            .unwrap();
        let (status, body) = send(router(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request body");
    }

    #[tokio::test]
    async fn sign_in_validates_before_looking_up_the_user() {
        let request = json_request(
            Method::POST,
            "/api/auth/sign-in",
            json!({ "email": "jo@burgerlab.io", "password": "abc" }),
        );
        let (status, body) = send(router(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"].get("password").is_some());
    }

    #[tokio::test]
    async fn search_requires_a_query() {
        let request = Request::builder()
            .uri("/api/search?query=%20%20")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(router(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"].get("query").is_some());
    }
}
