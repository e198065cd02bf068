use super::{MailRelay, RelayError};
use crate::config::MailConfig;
use common::requests::ContactRequest;
use futures_util::future::BoxFuture;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::{info, warn};

const SENDER_NAME: &str = "ZenFlora Contact";
const SUBJECT_PREFIX: &str = "ZenFlora Contact: ";

/// Relays contact messages through an authenticated SMTP submission server.
pub struct SmtpRelay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    admin: Mailbox,
}

impl SmtpRelay {
    pub fn new(config: &MailConfig) -> Result<Self, RelayError> {
        let sender_address: Address = config.user.parse()?;
        let admin: Mailbox = config.admin_email.parse()?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .credentials(Credentials::new(
                config.user.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            sender: Mailbox::new(Some(SENDER_NAME.to_string()), sender_address),
            admin,
        })
    }
}

impl MailRelay for SmtpRelay {
    fn send<'a>(&'a self, request: &'a ContactRequest) -> BoxFuture<'a, Result<(), RelayError>> {
        Box::pin(async move {
            let message = build_message(&self.sender, &self.admin, request)?;
            self.transport.send(message).await?;
            info!("Contact message from {} relayed", request.email);
            Ok(())
        })
    }
}

/// Builds the administrator notification for one contact request.
///
/// Replies go to the visitor. An address that does not parse is left out of
/// `Reply-To` rather than failing the delivery.
pub fn build_message(
    sender: &Mailbox,
    admin: &Mailbox,
    request: &ContactRequest,
) -> Result<Message, RelayError> {
    let mut builder = Message::builder()
        .from(sender.clone())
        .to(admin.clone())
        .subject(format!("{}{}", SUBJECT_PREFIX, request.subject.trim()))
        .header(ContentType::TEXT_HTML);

    match request.email.trim().parse::<Mailbox>() {
        Ok(reply_to) => builder = builder.reply_to(reply_to),
        Err(e) => warn!("Skipping Reply-To for {:?}: {}", request.email, e),
    }

    Ok(builder.body(render_body(request))?)
}

pub fn render_body(request: &ContactRequest) -> String {
    format!(
        "<h3>New message from {}</h3>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{}</p>\n",
        escape_html(&request.name),
        escape_html(&request.email),
        escape_html(&request.message).replace('\n', "<br>"),
    )
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str) -> ContactRequest {
        ContactRequest {
            name: "Ivy <Admin>".into(),
            email: email.into(),
            subject: "Repotting".into(),
            message: "When should I repot?\nThanks & bye".into(),
        }
    }

    fn mailboxes() -> (Mailbox, Mailbox) {
        let sender = Mailbox::new(
            Some(SENDER_NAME.to_string()),
            "site@example.com".parse().unwrap(),
        );
        (sender, "admin@example.com".parse().unwrap())
    }

    #[test]
    fn body_escapes_visitor_input() {
        let body = render_body(&request("ivy@example.com"));
        assert!(body.contains("<h3>New message from Ivy &lt;Admin&gt;</h3>"));
        assert!(body.contains("When should I repot?<br>Thanks &amp; bye"));
    }

    #[test]
    fn message_is_addressed_to_admin_with_reply_to_visitor() {
        let (sender, admin) = mailboxes();
        let message = build_message(&sender, &admin, &request("ivy@example.com")).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("Subject: ZenFlora Contact: Repotting"));
        assert!(raw.contains("To: admin@example.com"));
        assert!(raw.contains("Reply-To: ivy@example.com"));
        assert!(raw.contains("text/html"));
    }

    #[test]
    fn unparsable_visitor_address_skips_reply_to() {
        let (sender, admin) = mailboxes();
        let message = build_message(&sender, &admin, &request("not an address")).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(!raw.contains("Reply-To"));
    }
}
