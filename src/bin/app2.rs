use anyhow::Result;
use instrumented_apps::{serve, ServiceVariant};

#[tokio::main]
async fn main() -> Result<()> {
    serve(ServiceVariant::App2).await
}
