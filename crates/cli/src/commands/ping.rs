//! Health-check pools against the live database.

use storekeeper_db::{PoolRole, RolePools};

use super::CliError;

/// Ping one pool, or all five when `role` is `None`.
///
/// Every pool is tried even after a failure, so the log shows each outcome.
pub async fn run(role: Option<PoolRole>) -> Result<(), CliError> {
    let pools = RolePools::from_env();

    let results = match role {
        Some(role) => vec![(role, pools.ping(role).await)],
        None => pools.ping_all().await,
    };
    pools.close().await;

    report(results)
}

/// Log each outcome once and fail if any pool did not respond.
fn report(results: Vec<(PoolRole, Result<(), sqlx::Error>)>) -> Result<(), CliError> {
    let total = results.len();
    let mut failed = 0;
    for (role, result) in results {
        match result {
            Ok(()) => tracing::info!(role = %role, "Pool responded"),
            Err(e) => {
                tracing::error!(role = %role, error = %e, "Pool did not respond");
                failed += 1;
            }
        }
    }

    if failed == 0 {
        Ok(())
    } else {
        Err(CliError::PingFailed { failed, total })
    }
}
