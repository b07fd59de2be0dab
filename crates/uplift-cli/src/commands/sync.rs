use anyhow::bail;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SyncResponse {
    synced: bool,
}

/// Handle `upl sync`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !ctx.store.is_synced_replica() {
        bail!("sync requires a Turso embedded replica — configure [turso] url, auth_token, and local_replica_path");
    }

    ctx.store.sync().await?;
    output(&SyncResponse { synced: true }, flags.format)
}
