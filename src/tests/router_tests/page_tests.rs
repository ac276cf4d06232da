// src/tests/router_tests/page_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, test_app};

#[test]
fn unknown_route_is_not_found() {
    let app = test_app();
    let result = handle(get("/no-such-page"), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn login_page_renders_for_anonymous_visitor() {
    let app = test_app();
    let resp = handle(get("/login"), &app).unwrap();
    assert_eq!(resp.status(), 200);
}

#[test]
fn register_page_renders_for_anonymous_visitor() {
    let app = test_app();
    let resp = handle(get("/register"), &app).unwrap();
    assert_eq!(resp.status(), 200);
}

#[test]
fn inverted_price_bounds_are_rejected_before_any_fetch() {
    let app = test_app();
    // The query never reaches the (unreachable) API: validation runs first.
    let result = handle(get("/?price_min=300000&price_max=100000"), &app);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn home_surfaces_listing_fetch_failure_as_upstream_error() {
    let app = test_app();
    let result = handle(get("/"), &app);
    assert!(matches!(result, Err(ServerError::Upstream(_))));
}

#[test]
fn non_numeric_listing_id_is_not_found() {
    let app = test_app();
    let result = handle(get("/listing/abc"), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn listing_subroutes_other_than_delete_are_not_found() {
    let app = test_app();
    let result = handle(get("/listing/5/edit"), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
}
