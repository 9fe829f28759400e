//! Serve command - runs the tracker web interface.

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tokio::{
    signal::unix::{SignalKind, signal},
    sync::Mutex,
};
use tower_cookies::{Cookie, CookieManagerLayer, Cookies};
use tracker::{
    OwnerMode, SessionHandle, SessionManager,
    record::{ApplicationForm, DATE_FORMAT},
};

use crate::cli::ServeArgs;
use crate::manager::create_manager;
use crate::session::{SessionStore, SharedHandle};
use crate::templates::{self, DashboardView};

const SESSION_COOKIE: &str = "tracker_session";

/// Shared application state
#[derive(Clone)]
struct AppState {
    manager: Arc<SessionManager>,
    sessions: SessionStore,
    /// The global handle, present only in single-owner mode
    global: Option<SharedHandle>,
}

/// Login form data
#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

/// Registration form data
#[derive(Deserialize)]
struct RegisterForm {
    username: String,
    #[serde(default)]
    email: String,
    password: String,
    password_confirm: String,
}

/// Delete form data
#[derive(Deserialize)]
struct DeleteForm {
    row: String,
}

/// Run the tracker web server
pub async fn run(args: &ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let manager = Arc::new(create_manager(&args.store));

    let global = match manager.config().owner_mode {
        OwnerMode::Single => {
            let manager = manager.clone();
            let handle = tokio::task::spawn_blocking(move || manager.open_global()).await??;
            Some(Arc::new(Mutex::new(handle)))
        }
        OwnerMode::Multi => None,
    };

    let app_state = AppState {
        manager: manager.clone(),
        sessions: SessionStore::new(),
        global,
    };

    let app = router(app_state);

    // Bind server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    println!("Internship tracker running");
    println!();
    println!("  Web interface:  http://localhost:{}", local_addr.port());
    println!("  Data directory: {}", manager.config().data_dir().display());
    println!("  Mode:           {}", manager.config().owner_mode);
    println!();
    println!("Press Ctrl+C to shutdown");

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = sigterm.recv() => tracing::info!("Received SIGTERM, initiating graceful shutdown..."),
                _ = sigint.recv() => tracing::info!("Received SIGINT, initiating graceful shutdown..."),
            }
        })
        .await?;

    println!("Server shut down");
    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_root_request))
        .route("/health", get(handle_health_endpoint))
        .route("/login", get(handle_login_page).post(handle_login_submit))
        .route(
            "/register",
            get(handle_register_page).post(handle_register_submit),
        )
        .route("/logout", post(handle_logout))
        .route("/dashboard", get(handle_dashboard))
        .route("/dashboard/add", post(handle_add_record))
        .route("/dashboard/delete", post(handle_delete_record))
        .route("/dashboard/export", get(handle_export))
        .layer(CookieManagerLayer::new())
        .with_state(state)
}

impl AppState {
    /// The handle a request acts on: the global one in single-owner mode,
    /// otherwise the one named by the session cookie.
    async fn current_handle(&self, cookies: &Cookies) -> Option<SharedHandle> {
        if let Some(global) = &self.global {
            return Some(global.clone());
        }
        let cookie = cookies.get(SESSION_COOKIE)?;
        self.sessions.get_handle(cookie.value()).await
    }

    /// Run a blocking library call against a handle on the blocking pool.
    async fn with_handle<T, F>(&self, handle: SharedHandle, f: F) -> Result<T, Response>
    where
        F: FnOnce(&SessionManager, &mut SessionHandle) -> T + Send + 'static,
        T: Send + 'static,
    {
        let manager = self.manager.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = handle.blocking_lock();
            f(manager.as_ref(), &mut *guard)
        })
        .await
        .map_err(|e| {
            tracing::error!("Blocking task failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
        })
    }

    /// Run a blocking call against the manager alone.
    async fn with_manager<T, F>(&self, f: F) -> Result<T, Response>
    where
        F: FnOnce(&SessionManager) -> T + Send + 'static,
        T: Send + 'static,
    {
        let manager = self.manager.clone();
        tokio::task::spawn_blocking(move || f(manager.as_ref()))
            .await
            .map_err(|e| {
                tracing::error!("Blocking task failed: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            })
    }

    fn is_multi_user(&self) -> bool {
        self.global.is_none()
    }
}

fn today() -> String {
    chrono::Local::now()
        .date_naive()
        .format(DATE_FORMAT)
        .to_string()
}

/// The dashboard, re-rendered with an error message.
async fn dashboard_with_error(state: &AppState, handle: SharedHandle, error: String) -> Response {
    let view = match state
        .with_handle(handle, |manager, handle| DashboardView::from_handle(manager, handle))
        .await
    {
        Ok(view) => view,
        Err(response) => return response,
    };
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(templates::dashboard_page(&view, &today(), Some(&error))),
    )
        .into_response()
}

// ============================================================================
// Authentication Handlers
// ============================================================================

/// Handler for GET / - Root redirect
async fn handle_root_request(State(state): State<AppState>, cookies: Cookies) -> Redirect {
    if state.current_handle(&cookies).await.is_some() {
        return Redirect::to("/dashboard");
    }
    Redirect::to("/login")
}

/// Handler for GET /login - Show login page
async fn handle_login_page(State(state): State<AppState>, cookies: Cookies) -> Response {
    if state.current_handle(&cookies).await.is_some() {
        return Redirect::to("/dashboard").into_response();
    }

    Html(templates::login_page(None, None)).into_response()
}

/// Handler for POST /login - Process login
async fn handle_login_submit(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<LoginForm>,
) -> Response {
    if !state.is_multi_user() {
        return Redirect::to("/dashboard").into_response();
    }

    let result = state
        .with_manager(move |manager| manager.log_in(&form.username, &form.password))
        .await;

    match result {
        Ok(Ok(handle)) => {
            let token = state.sessions.create_session(handle).await;
            let mut cookie = Cookie::new(SESSION_COOKIE, token);
            cookie.set_http_only(true);
            cookie.set_path("/");
            cookies.add(cookie);
            Redirect::to("/dashboard").into_response()
        }
        Ok(Err(e)) => (
            StatusCode::UNAUTHORIZED,
            Html(templates::login_page(Some(&e.to_string()), None)),
        )
            .into_response(),
        Err(response) => response,
    }
}

/// Handler for POST /logout - Logout and destroy session
async fn handle_logout(State(state): State<AppState>, cookies: Cookies) -> Redirect {
    if !state.is_multi_user() {
        return Redirect::to("/dashboard");
    }

    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        if let Some(shared) = state.sessions.destroy_session(cookie.value()).await {
            // Another request may still hold the handle; it drops on its own.
            if let Ok(mutex) = Arc::try_unwrap(shared) {
                state.manager.log_out(mutex.into_inner());
            }
        }
        cookies.remove(Cookie::from(SESSION_COOKIE));
    }
    Redirect::to("/login")
}

/// Handler for GET /register - Show registration page
async fn handle_register_page(State(state): State<AppState>, cookies: Cookies) -> Response {
    if state.current_handle(&cookies).await.is_some() {
        return Redirect::to("/dashboard").into_response();
    }

    Html(templates::register_page(None)).into_response()
}

/// Handler for POST /register - Process registration
///
/// Registration does not log in; the user is sent to the login page.
async fn handle_register_submit(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Response {
    if !state.is_multi_user() {
        return Redirect::to("/dashboard").into_response();
    }

    let username = form.username.clone();
    let result = state
        .with_manager(move |manager| {
            manager.sign_up(
                &form.username,
                &form.password,
                &form.password_confirm,
                &form.email,
            )
        })
        .await;

    match result {
        Ok(Ok(())) => {
            tracing::info!("Created new user: {}", username);
            Html(templates::login_page(
                None,
                Some("Account created. Please log in."),
            ))
            .into_response()
        }
        Ok(Err(e)) => {
            let status = if e.is_conflict() {
                StatusCode::CONFLICT
            } else {
                StatusCode::UNPROCESSABLE_ENTITY
            };
            (status, Html(templates::register_page(Some(&e.to_string())))).into_response()
        }
        Err(response) => response,
    }
}

// ============================================================================
// Dashboard Handlers
// ============================================================================

/// Handler for GET /dashboard - Show the records of the session
async fn handle_dashboard(State(state): State<AppState>, cookies: Cookies) -> Response {
    let Some(handle) = state.current_handle(&cookies).await else {
        return Redirect::to("/login").into_response();
    };

    match state
        .with_handle(handle, |manager, handle| DashboardView::from_handle(manager, handle))
        .await
    {
        Ok(view) => Html(templates::dashboard_page(&view, &today(), None)).into_response(),
        Err(response) => response,
    }
}

/// Handler for POST /dashboard/add - Add an application
async fn handle_add_record(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<ApplicationForm>,
) -> Response {
    let Some(handle) = state.current_handle(&cookies).await else {
        return Redirect::to("/login").into_response();
    };

    let result = state
        .with_handle(handle.clone(), move |manager, handle| {
            manager.add_record(handle, form)
        })
        .await;

    match result {
        Ok(Ok(_)) => Redirect::to("/dashboard").into_response(),
        Ok(Err(e)) => dashboard_with_error(&state, handle, e.to_string()).await,
        Err(response) => response,
    }
}

/// Handler for POST /dashboard/delete - Delete an application by row
async fn handle_delete_record(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<DeleteForm>,
) -> Response {
    let Some(handle) = state.current_handle(&cookies).await else {
        return Redirect::to("/login").into_response();
    };

    let Ok(row) = form.row.trim().parse::<usize>() else {
        let error = format!("Row must be a number, got '{}'", form.row);
        return dashboard_with_error(&state, handle, error).await;
    };

    let result = state
        .with_handle(handle.clone(), move |manager, handle| {
            manager.delete_record(handle, row)
        })
        .await;

    match result {
        Ok(Ok(_)) => Redirect::to("/dashboard").into_response(),
        Ok(Err(e)) => dashboard_with_error(&state, handle, e.to_string()).await,
        Err(response) => response,
    }
}

/// Handler for GET /dashboard/export - Download the record file
async fn handle_export(State(state): State<AppState>, cookies: Cookies) -> Response {
    let Some(handle) = state.current_handle(&cookies).await else {
        return Redirect::to("/login").into_response();
    };

    let result = state
        .with_handle(handle, |manager, handle| {
            manager
                .export_records(handle)
                .map(|bytes| (manager.export_file_name(handle), bytes))
        })
        .await;

    match result {
        Ok(Ok((name, bytes))) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{name}\""),
                ),
            ],
            bytes,
        )
            .into_response(),
        Ok(Err(e)) => {
            tracing::error!("Export failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
        Err(response) => response,
    }
}

// ============================================================================
// Health Handler
// ============================================================================

/// Health check response
#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    mode: &'static str,
    sessions: usize,
}

/// Handler for GET /health - Health check endpoint
async fn handle_health_endpoint(State(state): State<AppState>) -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "healthy",
        mode: state.manager.config().owner_mode.as_str(),
        sessions: state.sessions.session_count().await,
    })
}
