use async_trait::async_trait;

/// Liveness probe against the backing store.
#[async_trait]
pub trait StoreHealth: Send + Sync + 'static {
    /// True when the store answers a trivial query.
    async fn ping(&self) -> bool;
}
