use crate::auth::identity::AuthenticatedUser;
use crate::config::AppConfig;
use crate::router::App;
use astra::{Body, Request};
use http::Method;

/// App wired to a loopback port nothing listens on: any handler that
/// would touch the network fails fast with a refused connection instead
/// of hanging the test.
pub fn test_app() -> App {
    let config = AppConfig {
        api_base_url: "http://127.0.0.1:9".to_string(),
        api_token: "test-token".to_string(),
        identity_base_url: "http://127.0.0.1:9/v1".to_string(),
        identity_api_key: "test-key".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
    };

    App::new(&config).expect("test app construction failed")
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn post_form(uri: &str, body: &str) -> Request {
    let mut req = Request::new(Body::from(body.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = uri.parse().unwrap();
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

/// Put a signed-in user straight into the session store and return the
/// cookie token, skipping the identity provider entirely.
pub fn signed_in_token(app: &App) -> String {
    let user = AuthenticatedUser {
        local_id: "uid-test".to_string(),
        email: "tester@example.com".to_string(),
        display_name: Some("Test User".to_string()),
        id_token: "provider-id-token".to_string(),
    };
    app.sessions.create(&user, chrono::Utc::now().timestamp())
}

pub fn with_session(mut req: Request, token: &str) -> Request {
    req.headers_mut().insert(
        "Cookie",
        format!("session={token}").parse().unwrap(),
    );
    req
}

pub fn location(resp: &astra::Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
