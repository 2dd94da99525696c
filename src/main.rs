use hello_axum::{
    settings::Settings,
    telemetry::{get_tracing_subscriber, init_tracing_subscriber},
};
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let tracing_subscriber = get_tracing_subscriber(LevelFilter::INFO, std::io::stdout);
    init_tracing_subscriber(tracing_subscriber);
    // 구성을 읽을 수 없으면 패닉에 빠진다.
    let settings = Settings::get_settings().expect("Failed to read configuration.");
    // 바인딩 주소를 하드 코딩하지 않는다.
    // 해당 값은 세팅에서 얻는다.
    let tcp_listener = settings
        .application
        .get_listener()
        .await
        .expect("Failed to get a TCP listener.");

    tracing::info!("Starting Server");
    hello_axum::startup::run(tcp_listener).await
}
