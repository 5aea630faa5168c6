#[tokio::main]
async fn main() -> anyhow::Result<()> {
    socialyze_server::start().await
}
