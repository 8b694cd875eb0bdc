#[tokio::main]
async fn main() -> anyhow::Result<()> {
    streakcard_lib::run().await
}
