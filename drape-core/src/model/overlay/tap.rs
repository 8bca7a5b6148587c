use std::sync::Arc;

/// an opaque tap callback supplied by the embedding application. the host
/// invokes it when an overlay that consumes tap events is tapped.
///
/// equality is reference identity: two handlers are equal only when they
/// share the same underlying callback allocation (clones of one handler
/// compare equal, independently built handlers over identical closures do
/// not). callbacks never appear in wire snapshots.
#[derive(Clone)]
pub struct TapHandler(Arc<dyn Fn() + Send + Sync>);

impl TapHandler {
    pub fn new<F>(callback: F) -> TapHandler
    where
        F: Fn() + Send + Sync + 'static,
    {
        TapHandler(Arc::new(callback))
    }

    /// run the callback. synchronous, fire-and-forget, no return value.
    pub fn invoke(&self) {
        (self.0)()
    }
}

impl PartialEq for TapHandler {
    fn eq(&self, other: &TapHandler) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for TapHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TapHandler(<callback>)")
    }
}
