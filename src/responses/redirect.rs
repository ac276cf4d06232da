use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// 302 to a local path.
pub fn redirect(location: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .body(Body::empty())
        .unwrap();

    Ok(resp)
}

/// 302 that also sets or clears the session cookie.
pub fn redirect_with_cookie(location: &str, set_cookie: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .header("Set-Cookie", set_cookie)
        .body(Body::empty())
        .unwrap();

    Ok(resp)
}
