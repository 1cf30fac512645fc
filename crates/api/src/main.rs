use sqlx::SqlitePool;

#[tokio::main]
async fn main() {
    stockroom_observability::init();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        tracing::warn!("DATABASE_URL not set; using local file stockroom.db");
        "sqlite://stockroom.db?mode=rwc".to_string()
    });

    let pool = SqlitePool::connect(&database_url)
        .await
        .expect("failed to open database");

    let app = stockroom_api::app::build_app(pool).await;

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
