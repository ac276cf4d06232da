use crate::auth::sessions::{self, SessionStore};
use crate::auth::{IdentityClient, Session};
use crate::config::AppConfig;
use crate::domain::{similar_listings, FilterCriteria, ListingFilter};
use crate::errors::ServerError;
use crate::forms::agent_form::AgentDraft;
use crate::forms::listing_form::ListingDraft;
use crate::forms::register_form::RegisterDraft;
use crate::forms::FieldErrors;
use crate::responses::{html_response, redirect, redirect_with_cookie, ResultResp};
use crate::services::{AgentsApi, ApiClient, GeoApi, ListingsApi};
use crate::templates::pages;
use astra::Request;
use chrono::Utc;
use std::collections::HashMap;
use std::io::Read;

// Urlencoded bodies carry the selected image as a data URL, so they can
// legitimately run a few MB. Anything bigger than this is not ours.
const MAX_FORM_BYTES: u64 = 8 * 1024 * 1024;

/// Everything a request handler needs, built once at startup and passed
/// explicitly. No ambient lookups.
pub struct App {
    pub listings: ListingsApi,
    pub geo: GeoApi,
    pub agents: AgentsApi,
    pub identity: IdentityClient,
    pub sessions: SessionStore,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, ServerError> {
        let api = ApiClient::new(&config.api_base_url, &config.api_token)?;
        let identity = IdentityClient::new(&config.identity_base_url, &config.identity_api_key)
            .map_err(|e| ServerError::Upstream(e.to_string()))?;

        Ok(Self {
            listings: ListingsApi::new(api.clone()),
            geo: GeoApi::new(api.clone()),
            agents: AgentsApi::new(api),
            identity,
            sessions: SessionStore::new(),
        })
    }
}

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(&req, app),

        ("GET", "/login") => login_form(&req, app),
        ("POST", "/login") => login_submit(&mut req, app),
        ("GET", "/register") => register_form(&req, app),
        ("POST", "/register") => register_submit(&mut req, app),
        ("POST", "/logout") => logout(&req, app),

        ("GET", "/add-listing") => add_listing_form(&req, app),
        ("POST", "/add-listing") => add_listing_submit(&mut req, app),
        ("GET", "/add-agent") => add_agent_form(&req, app),
        ("POST", "/add-agent") => add_agent_submit(&mut req, app),

        _ => listing_routes(&method, &path, &mut req, app),
    }
}

/// `/listing/{id}` and `/listing/{id}/delete`.
fn listing_routes(method: &str, path: &str, req: &mut Request, app: &App) -> ResultResp {
    let Some(rest) = path.strip_prefix("/listing/") else {
        return Err(ServerError::NotFound);
    };

    match (method, rest.split_once('/')) {
        ("GET", None) => {
            let id = rest.parse::<i64>().map_err(|_| ServerError::NotFound)?;
            listing_details(req, app, id)
        }
        ("POST", Some((id, "delete"))) => {
            let id = id.parse::<i64>().map_err(|_| ServerError::NotFound)?;
            delete_listing(req, app, id)
        }
        _ => Err(ServerError::NotFound),
    }
}

// ---------- listings ----------

fn home(req: &Request, app: &App) -> ResultResp {
    let session = current_session(req, app);

    // Reject inverted bounds here, before the engine ever sees them.
    let criteria = FilterCriteria::from_query(req.uri().query().unwrap_or(""))?;

    let listings = app.listings.get_all()?;
    let regions = app.geo.regions().unwrap_or_else(|e| {
        eprintln!("Error loading regions: {e}");
        Vec::new()
    });

    let mut engine = ListingFilter::new();
    engine.set_listings(listings);
    engine.set_criteria(criteria.clone());
    let visible = engine.filtered();

    html_response(pages::home_page(
        session.as_ref(),
        &regions,
        criteria.as_ref(),
        &visible,
    ))
}

fn listing_details(req: &Request, app: &App, id: i64) -> ResultResp {
    let session = current_session(req, app);
    let listing = app.listings.get_by_id(id)?;

    // The carousel is best-effort: a failed collection fetch only costs
    // us the "similar" strip, not the page.
    let all = app.listings.get_all().unwrap_or_else(|e| {
        eprintln!("Error loading listings for carousel: {e}");
        Vec::new()
    });
    let similar = similar_listings(&all, &listing);

    html_response(pages::listing_details_page(
        session.as_ref(),
        &listing,
        &similar,
    ))
}

fn delete_listing(req: &Request, app: &App, id: i64) -> ResultResp {
    if current_session(req, app).is_none() {
        return redirect("/login");
    }

    app.listings.delete(id)?;
    redirect("/")
}

// ---------- create listing ----------

fn add_listing_form(req: &Request, app: &App) -> ResultResp {
    let Some(session) = current_session(req, app) else {
        return redirect("/login");
    };

    render_add_listing(app, &session, &ListingDraft::default(), None, None)
}

fn add_listing_submit(req: &mut Request, app: &App) -> ResultResp {
    let Some(session) = current_session(req, app) else {
        return redirect("/login");
    };

    let form = parse_form(req)?;
    let draft = ListingDraft::from_form(&form);

    let submission = match draft.validate() {
        Ok(submission) => submission,
        Err(errors) => return render_add_listing(app, &session, &draft, Some(&errors), None),
    };

    match app.listings.create(&submission) {
        Ok(created) => {
            println!("Listing created: id={}", created.id);
            redirect("/")
        }
        Err(e) => {
            eprintln!("Error creating listing: {e}");
            render_add_listing(
                app,
                &session,
                &draft,
                None,
                Some("Could not create the listing. Please try again."),
            )
        }
    }
}

fn render_add_listing(
    app: &App,
    session: &Session,
    draft: &ListingDraft,
    errors: Option<&FieldErrors>,
    submit_error: Option<&str>,
) -> ResultResp {
    // Dropdown data is best-effort: a failed lookup logs and leaves the
    // list empty rather than killing the form.
    let regions = app.geo.regions().unwrap_or_else(|e| {
        eprintln!("Error loading regions: {e}");
        Vec::new()
    });
    let cities = app.geo.cities().unwrap_or_else(|e| {
        eprintln!("Error loading cities: {e}");
        Vec::new()
    });
    let agents = app.agents.list().unwrap_or_else(|e| {
        eprintln!("Error loading agents: {e}");
        Vec::new()
    });

    html_response(pages::add_listing_page(
        Some(session),
        &regions,
        &cities,
        &agents,
        draft,
        errors,
        submit_error,
    ))
}

// ---------- create agent ----------

fn add_agent_form(req: &Request, app: &App) -> ResultResp {
    let Some(session) = current_session(req, app) else {
        return redirect("/login");
    };

    html_response(pages::add_agent_page(
        Some(&session),
        &AgentDraft::default(),
        None,
        None,
    ))
}

fn add_agent_submit(req: &mut Request, app: &App) -> ResultResp {
    let Some(session) = current_session(req, app) else {
        return redirect("/login");
    };

    let form = parse_form(req)?;
    let draft = AgentDraft::from_form(&form);

    let submission = match draft.validate() {
        Ok(submission) => submission,
        Err(errors) => {
            return html_response(pages::add_agent_page(
                Some(&session),
                &draft,
                Some(&errors),
                None,
            ))
        }
    };

    match app.agents.create(&submission) {
        Ok(created) => {
            println!("Agent created: id={}", created.id);
            redirect("/add-listing")
        }
        Err(e) => {
            eprintln!("Error creating agent: {e}");
            html_response(pages::add_agent_page(
                Some(&session),
                &draft,
                None,
                Some("Failed to create agent. Please try again."),
            ))
        }
    }
}

// ---------- auth ----------

fn register_form(req: &Request, app: &App) -> ResultResp {
    if current_session(req, app).is_some() {
        return redirect("/");
    }
    html_response(pages::register_page(&RegisterDraft::default(), None, None))
}

fn register_submit(req: &mut Request, app: &App) -> ResultResp {
    let form = parse_form(req)?;
    let draft = RegisterDraft::from_form(&form);

    let submission = match draft.validate() {
        Ok(submission) => submission,
        Err(errors) => return html_response(pages::register_page(&draft, Some(&errors), None)),
    };

    match app.identity.register(
        &submission.email,
        &submission.password,
        &submission.display_name(),
    ) {
        Ok(_) => redirect("/login"),
        Err(e) => {
            eprintln!("Registration error: {e}");
            html_response(pages::register_page(&draft, None, Some(e.user_message())))
        }
    }
}

fn login_form(req: &Request, app: &App) -> ResultResp {
    if current_session(req, app).is_some() {
        return redirect("/");
    }
    html_response(pages::login_page("", None))
}

fn login_submit(req: &mut Request, app: &App) -> ResultResp {
    let form = parse_form(req)?;
    let email = form.get("email").map(String::as_str).unwrap_or("").trim();
    let password = form.get("password").map(String::as_str).unwrap_or("");

    if email.is_empty() || password.is_empty() {
        return html_response(pages::login_page(email, Some("Incorrect email or password")));
    }

    match app.identity.sign_in(email, password) {
        Ok(user) => {
            let now = Utc::now().timestamp();
            let token = app.sessions.create(&user, now);
            redirect_with_cookie("/", &sessions::session_cookie(&token))
        }
        Err(e) => {
            eprintln!("Login error: {e}");
            html_response(pages::login_page(email, Some(e.user_message())))
        }
    }
}

fn logout(req: &Request, app: &App) -> ResultResp {
    if let Some(token) = raw_cookie_token(req) {
        app.sessions.revoke(&token);
    }
    redirect_with_cookie("/login", &sessions::clear_session_cookie())
}

// ---------- helpers ----------

fn raw_cookie_token(req: &Request) -> Option<String> {
    let header = req.headers().get("Cookie")?.to_str().ok()?;
    sessions::cookie_token(header).map(str::to_string)
}

fn current_session(req: &Request, app: &App) -> Option<Session> {
    let token = raw_cookie_token(req)?;
    app.sessions.get(&token, Utc::now().timestamp())
}

/// Read and decode an `application/x-www-form-urlencoded` request body.
fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    if body.len() as u64 >= MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }

    let mut map = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
        map.insert(key.into_owned(), value.into_owned());
    }
    Ok(map)
}
