//! Per-node diagnostics for fixture creation.

use specimen_path::Entry;
use specimen_value::TypeTag;

/// Receives every node visited while a fixture is created.
///
/// This is the seam where per-node processing plugs in. Implementations must
/// be shareable across threads because [`Fixtures`](crate::Fixtures) is.
pub trait Observer: Send + Sync {
    /// Called once per visited entry, in walk order, with the entry's tag.
    fn observe(&self, fixture: &str, entry: &Entry<'_>, tag: TypeTag);
}

/// Emits one TRACE event per visited node. The default observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn observe(&self, fixture: &str, entry: &Entry<'_>, tag: TypeTag) {
        tracing::trace!(
            fixture,
            key = entry.key(),
            path = entry.dotted_path(),
            %tag,
            value = %entry.value(),
            "visit"
        );
    }
}

/// Discards every node.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn observe(&self, _fixture: &str, _entry: &Entry<'_>, _tag: TypeTag) {}
}
