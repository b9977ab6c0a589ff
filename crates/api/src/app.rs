use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::media::MediaStore;
use crate::middleware::{require_admin, trace_id};
use crate::routes::{
    admin_users, announcements, auth, contact, events, gallery, health, media, prayer_times,
    profile, ramadan, services, team,
};
use shared::session::SessionKeys;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub session_keys: SessionKeys,
    pub media: MediaStore,
}

/// Request body cap, sized above the per-file media limit so an oversize
/// upload still reaches the media store's own check and gets a 413 rather
/// than dying inside the multipart parser.
fn request_body_limit(max_upload_bytes: usize) -> usize {
    max_upload_bytes.saturating_mul(2)
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let session_keys = SessionKeys::with_leeway(
        &config.session.secret,
        config.session.expiry_secs,
        config.session.leeway_secs,
    );
    let media_store = MediaStore::new(&config.media);
    let media_root = media_store.root().to_path_buf();
    let request_timeout = config.server.request_timeout_secs;
    let body_limit = request_body_limit(config.media.max_upload_bytes);

    let state = AppState {
        pool,
        config: Arc::new(config),
        session_keys,
        media: media_store,
    };

    // CORS: locked to configured origins, open in development when none set
    let cors = if state.config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = state
            .config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public routes (no authentication)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/live", get(health::live))
        .route("/api/health/ready", get(health::ready))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/profile", get(profile::get_public_profile))
        .route("/api/v1/prayer-times", get(prayer_times::get_prayer_times))
        .route("/api/v1/events", get(events::list_published))
        .route("/api/v1/events/:slug", get(events::get_by_slug))
        .route("/api/v1/events/:slug/calendar.ics", get(events::calendar))
        .route("/api/v1/announcements", get(announcements::list_published))
        .route("/api/v1/gallery", get(gallery::list_albums))
        .route("/api/v1/gallery/:slug", get(gallery::get_album))
        .route("/api/v1/team", get(team::list))
        .route("/api/v1/services", get(services::list))
        .route("/api/v1/ramadan", get(ramadan::list_public))
        .route("/api/v1/contact", post(contact::submit));

    // Admin routes (valid session required; role gates inside handlers)
    let admin_routes = Router::new()
        .route("/api/v1/auth/session", get(auth::session))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/admin/profile", get(profile::get_admin_profile))
        .route("/api/v1/admin/profile", put(profile::upsert_profile))
        .route(
            "/api/v1/admin/prayer-times",
            put(prayer_times::upsert_prayer_times),
        )
        .route("/api/v1/admin/events", get(events::list_all))
        .route("/api/v1/admin/events", post(events::create))
        .route("/api/v1/admin/events/:id", put(events::update))
        .route("/api/v1/admin/events/:id", delete(events::remove))
        .route("/api/v1/admin/announcements", get(announcements::list_all))
        .route("/api/v1/admin/announcements", post(announcements::create))
        .route(
            "/api/v1/admin/announcements/:id",
            put(announcements::update),
        )
        .route(
            "/api/v1/admin/announcements/:id",
            delete(announcements::remove),
        )
        .route("/api/v1/admin/gallery", post(gallery::create_album))
        .route("/api/v1/admin/gallery/:id", put(gallery::update_album))
        .route("/api/v1/admin/gallery/:id", delete(gallery::delete_album))
        .route(
            "/api/v1/admin/gallery/:id/photos",
            post(gallery::add_photos),
        )
        .route(
            "/api/v1/admin/gallery/:id/photos/:photo_id",
            delete(gallery::delete_photo),
        )
        .route("/api/v1/admin/team", post(team::create))
        .route("/api/v1/admin/team/:id", put(team::update))
        .route("/api/v1/admin/team/:id", delete(team::remove))
        .route("/api/v1/admin/services", post(services::create))
        .route("/api/v1/admin/services/:id", put(services::update))
        .route("/api/v1/admin/services/:id", delete(services::remove))
        .route("/api/v1/admin/ramadan", get(ramadan::list_admin))
        .route(
            "/api/v1/admin/ramadan/regenerate",
            post(ramadan::regenerate),
        )
        .route("/api/v1/admin/ramadan/days/:day", put(ramadan::update_day))
        .route("/api/v1/admin/contact-messages", get(contact::list))
        .route(
            "/api/v1/admin/contact-messages/:id/read",
            post(contact::mark_read),
        )
        .route(
            "/api/v1/admin/contact-messages/:id",
            delete(contact::remove),
        )
        .route("/api/v1/admin/users", get(admin_users::list))
        .route("/api/v1/admin/users", post(admin_users::create))
        .route("/api/v1/admin/users/:id", delete(admin_users::remove))
        .route("/api/v1/admin/media", post(media::upload))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .nest_service("/media", ServeDir::new(media_root))
        // Global middleware (order matters: bottom layers run first)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(request_timeout)))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_limit_admits_files_above_the_media_cap() {
        let cap = 5 * 1024 * 1024;
        // A 6 MB file must get through the body parser so the store can
        // reject it with its own size error.
        assert!(request_body_limit(cap) > 6 * 1000 * 1000);
    }

    #[test]
    fn test_body_limit_never_overflows() {
        assert_eq!(request_body_limit(usize::MAX), usize::MAX);
    }
}
