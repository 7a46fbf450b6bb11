#[tokio::main]
async fn main() {
    if let Err(e) = circuit_mock_lib::run().await {
        tracing::error!("{e}");
        eprintln!("circuit-mock: {e}");
        std::process::exit(1);
    }
}
