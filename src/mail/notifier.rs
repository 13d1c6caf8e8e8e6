use crate::mail::Notify;
use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

// The sender address is required to live on this relay's provider.
pub const SMTP_RELAY: &str = "smtp.gmail.com";

/// Sends the one notification mail through the provider relay, STARTTLS on
/// the submission port. The SMTP credential is handed in at construction and
/// lives nowhere else.
pub struct MailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    recipient: Mailbox,
    booking_url: String,
}

impl MailNotifier {
    pub fn new(
        sender: &str,
        password: String,
        recipient: &str,
        booking_url: &str,
    ) -> Result<Self> {
        let sender_mailbox: Mailbox = sender
            .parse()
            .with_context(|| format!("invalid sender address {sender:?}"))?;
        let recipient_mailbox: Mailbox = recipient
            .parse()
            .with_context(|| format!("invalid recipient address {recipient:?}"))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(SMTP_RELAY)
            .context("failed to set up SMTP transport")?
            .credentials(Credentials::new(sender.to_string(), password))
            .build();

        Ok(MailNotifier {
            transport,
            sender: sender_mailbox,
            recipient: recipient_mailbox,
            booking_url: booking_url.to_string(),
        })
    }
}

#[async_trait]
impl Notify for MailNotifier {
    async fn notify(&self, slots: &[String]) -> Result<()> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(self.recipient.clone())
            .subject("New appointment slots available")
            .header(ContentType::TEXT_PLAIN)
            .body(message_body(slots, &self.booking_url))
            .context("failed to build notification mail")?;

        self.transport
            .send(message)
            .await
            .context("failed to send notification mail")?;
        info!("successfully sent email");
        Ok(())
    }
}

fn message_body(slots: &[String], booking_url: &str) -> String {
    format!(
        "New doctor appointment slots on {booking_url}: {slots:?}, please go immediately and book them"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_names_booking_url_and_slots() {
        let body = message_body(
            &["03.07. 10:00".to_string(), "04.07. 09:30".to_string()],
            "https://www.doctolib.de",
        );
        assert!(body.contains("https://www.doctolib.de"));
        assert!(body.contains("03.07. 10:00"));
        assert!(body.contains("04.07. 09:30"));
    }

    #[test]
    fn rejects_malformed_sender() {
        assert!(MailNotifier::new("not-an-address", "pw".into(), "to@gmail.com", "url").is_err());
    }

    #[test]
    fn builds_with_valid_addresses() {
        let notifier = MailNotifier::new(
            "from@gmail.com",
            "pw".into(),
            "to@example.org",
            "https://www.doctolib.de",
        );
        assert!(notifier.is_ok());
    }
}
