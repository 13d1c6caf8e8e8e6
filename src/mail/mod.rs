pub mod notifier;

use anyhow::Result;
use async_trait::async_trait;

/// Delivery boundary for "slots were found". The watch loop only needs to
/// fire a notification once and does not care about the transport behind it.
#[async_trait]
pub trait Notify {
    async fn notify(&self, slots: &[String]) -> Result<()>;
}
