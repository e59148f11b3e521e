use crate::record::Invocation;

/// Target carried by every event this crate emits. Hosts can filter on it
/// (e.g. `RUST_LOG=autolog=info`).
pub const TARGET: &str = "autolog";

// The library never installs a subscriber; that is the host's call.
pub(crate) fn emit(record: &Invocation) {
    tracing::info!(target: TARGET, "{}", record);
}
