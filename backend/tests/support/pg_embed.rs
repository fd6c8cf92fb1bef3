//! Starts the embedded PostgreSQL cluster backing the customer store tests.
//!
//! When `PG_RUNTIME_DIR` or `PG_DATA_DIR` is unset, both point at a fresh
//! scratch directory under `target/customer-store-pg` while the cluster
//! starts, so runners that forbid writes to `/var/tmp` still work.

use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use env_lock::EnvGuard;
use pg_embedded_setup_unpriv::TestCluster;
use uuid::Uuid;

/// Serialises cluster start-up; the bootstrap mutates process environment.
static STARTUP: Mutex<()> = Mutex::new(());

/// Start attempts made before giving up on a flaky download.
const START_ATTEMPTS: u32 = 4;

/// Wait before the second attempt; doubled for each later attempt.
const FIRST_BACKOFF: Duration = Duration::from_millis(500);

/// Fragments of bootstrap errors worth retrying.
const RETRYABLE: [&str; 6] = [
    "error decoding response body",
    "connection reset",
    "connection refused",
    "timed out",
    "temporarily unavailable",
    "dns error",
];

fn scratch_root() -> PathBuf {
    std::env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../target"))
        .join("customer-store-pg")
}

/// Point the cluster at scratch directories unless both are already set.
fn scratch_dirs_guard() -> Result<Option<EnvGuard<'static>>, String> {
    let configured =
        std::env::var_os("PG_RUNTIME_DIR").is_some() && std::env::var_os("PG_DATA_DIR").is_some();
    if configured {
        return Ok(None);
    }

    let run = scratch_root().join(format!("run-{}-{}", std::process::id(), Uuid::new_v4()));
    let install = run.join("install");
    let data = run.join("data");
    for dir in [&install, &data] {
        std::fs::create_dir_all(dir)
            .map_err(|err| format!("create {}: {err}", dir.display()))?;
    }

    Ok(Some(env_lock::lock_env([
        ("PG_RUNTIME_DIR", Some(install.to_string_lossy().into_owned())),
        ("PG_DATA_DIR", Some(data.to_string_lossy().into_owned())),
    ])))
}

fn is_retryable(message: &str) -> bool {
    let message = message.to_lowercase();
    RETRYABLE.iter().any(|fragment| message.contains(fragment))
}

/// Start a [`TestCluster`], backing off and retrying while the failure looks
/// like a network hiccup during the PostgreSQL download.
pub fn test_cluster() -> Result<TestCluster, String> {
    let _startup = STARTUP.lock().unwrap_or_else(|err| err.into_inner());
    let _dirs = scratch_dirs_guard()?;

    let mut backoff = FIRST_BACKOFF;
    let mut attempt = 1;
    loop {
        let message = match TestCluster::new() {
            Ok(cluster) => return Ok(cluster),
            Err(err) => format!("{err:?}"),
        };
        if attempt == START_ATTEMPTS || !is_retryable(&message) {
            return Err(message);
        }
        eprintln!(
            "customer store cluster: attempt {attempt}/{START_ATTEMPTS} failed, \
             retrying in {backoff:?}: {message}"
        );
        std::thread::sleep(backoff);
        backoff *= 2;
        attempt += 1;
    }
}
