use async_trait::async_trait;

use staybook_shared::NotificationRequest;

/// Notification delivery seam. The channel backends (email, SMS, Telegram)
/// live behind the delivery service.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(
        &self,
        request: &NotificationRequest,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
