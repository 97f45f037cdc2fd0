use modal_system::client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use modal_system::server::{config::Config, router, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        tracing::info!(
            "Starting mock API (latency: {}, upload limit: {} bytes)",
            config.latency,
            config.upload_limit_bytes
        );

        let mut router = dioxus::server::router(App);
        let server_routes = router::router(&config).with_state(AppState::new(config));
        router = router.merge(server_routes);

        Ok(router)
    })
}
