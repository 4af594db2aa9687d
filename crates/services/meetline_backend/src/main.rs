// File: services/meetline_backend/src/main.rs
use axum::{routing::get, Router};
use chrono::NaiveTime;
use meetline_config::load_config;
use meetline_scheduling::memory::InMemoryScheduleStore;
use meetline_scheduling::routes as scheduling_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

/// Seed the in-memory store with demo data so the API is usable out of the
/// box. A real deployment replaces this store with a persistent
/// implementation of the collaborator traits.
fn seed_demo_store() -> Arc<InMemoryScheduleStore> {
    let store = Arc::new(InMemoryScheduleStore::new());
    let host = store.add_host("jane-doe", "Jane Doe");
    store.add_event_type(host.id, "intro-call", "Intro Call", 30, true);
    store.add_event_type(host.id, "deep-dive", "Deep Dive", 60, true);

    let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    let seventeen = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
    // Monday through Friday in the 0=Sunday civil week.
    for day_of_week in 1..=5 {
        store.add_rule(host.id, day_of_week, nine, seventeen);
    }
    store
}

#[tokio::main]
async fn main() {
    meetline_common::logging::init();
    let config = Arc::new(load_config().expect("Failed to load config"));

    let store = seed_demo_store();
    info!("Seeded in-memory schedule store with demo host 'jane-doe'");

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to Meetline API!" }))
        .merge(scheduling_routes::routes(config.clone(), store));

    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use meetline_scheduling::doc::SchedulingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Meetline API",
                version = "0.1.0",
                description = "Meetline Scheduling API Docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Meetline", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(SchedulingApiDoc::openapi());
        println!("📖 Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Serve the marketing site's static build in dev mode
    if cfg!(debug_assertions) {
        println!("Running in development mode, serving static files from ../../dist");
        let static_router = Router::new().nest_service("/static", ServeDir::new("../../dist"));
        app = app.merge(static_router);
        app = app.fallback_service(ServeDir::new("../dist"));
    }

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    println!("Starting server at http://{}", addr);
    println!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
