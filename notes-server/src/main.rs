#[tokio::main]
async fn main() -> anyhow::Result<()> {
    notes_server_lib::run().await?;
    Ok(())
}
