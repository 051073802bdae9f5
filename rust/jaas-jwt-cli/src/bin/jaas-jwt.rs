#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    jaas_jwt_cli::native::main().await?;
    Ok(())
}
