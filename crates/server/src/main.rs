#[tokio::main]
async fn main() -> anyhow::Result<()> {
    brs_server::start().await
}
