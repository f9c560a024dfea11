use prometheus::{Encoder, Registry, TextEncoder};

/// Render every family gathered from `registry` in Prometheus text format.
pub fn render_registry(registry: &Registry) -> anyhow::Result<String> {
    // ---
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer)?;

    Ok(String::from_utf8(buffer)?)
}
