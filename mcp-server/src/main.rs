//! MediBook MCP Server
//!
//! This MCP server lets an assistant book doctor appointments on a user's behalf.
//! It talks to the MediBook REST backend configured via environment variables and
//! exposes tools for:
//! - Registering and signing in
//! - Browsing doctors and their working hours
//! - Checking a slot's availability
//! - Booking an appointment

mod server;

use anyhow::Result;
use rmcp::ServiceExt;
use server::MediBookServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is used for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting MediBook MCP server");

    let server = MediBookServer::from_env()?;

    // Serve over stdio - pass as tuple (stdin, stdout)
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let service = server.serve(transport).await?;

    // Wait for shutdown
    service.waiting().await?;

    Ok(())
}
