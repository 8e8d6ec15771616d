#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use diix_academy::app::*;
    use diix_academy::core::config::Config;
    use diix_academy::core::submission::{SubmissionApiState, submission_api_router};
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    tracing::info!(
        "Config loaded: strict_signup={}, accept_submissions={}",
        config.has_strict_signup(),
        config.accept_submissions
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var
    let conf = match get_configuration(None) {
        Ok(conf) => conf,
        Err(err) => {
            tracing::error!("Invalid leptos configuration: {}", err);
            std::process::exit(1);
        }
    };
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let routes = generate_route_list(App);

    // Serves .br and .gz variants when present
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let submission_api = submission_api_router(SubmissionApiState { config });

    let app = Router::new()
        // POST /api/auth/login, /api/auth/signup, /api/contact
        .merge(submission_api)
        .merge(leptos_router)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };
    tracing::info!("listening on http://{}", &addr);

    if let Err(err) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server error: {}", err);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
