//! Report email dispatch through an HTTP email provider.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub mod handlers;

const EMAIL_API_URL: &str = "https://api.resend.com/emails";
pub const REPORT_FILENAME: &str = "career-report.pdf";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Email provider rejected the message (status {status}): {message}")]
    Provider { status: u16, message: String },

    #[error("Email delivery is not configured")]
    NotConfigured,
}

/// A rendered report email ready to hand to the provider.
#[derive(Debug, Clone)]
pub struct ReportEmail<'a> {
    pub to: &'a str,
    pub name: Option<&'a str>,
    pub score: Option<f64>,
    /// Already validated, without any `data:` prefix.
    pub pdf_base64: &'a str,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: String,
    attachments: Vec<Attachment<'a>>,
}

#[derive(Debug, Serialize)]
struct Attachment<'a> {
    filename: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

#[derive(Clone)]
pub struct MailClient {
    client: Client,
    api_key: String,
    from: String,
}

impl MailClient {
    pub fn new(api_key: String, from: String) -> Result<Self, MailError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            api_key,
            from,
        })
    }

    pub async fn send_report(&self, email: &ReportEmail<'_>) -> Result<(), MailError> {
        let request = SendRequest {
            from: &self.from,
            to: vec![email.to],
            subject: "Your Career Assessment Report",
            html: render_body(email.name, email.score),
            attachments: vec![Attachment {
                filename: REPORT_FILENAME,
                content: email.pdf_base64,
            }],
        };

        let response = self
            .client
            .post(EMAIL_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ProviderError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(MailError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        info!("Report email sent to {}", email.to);
        Ok(())
    }
}

fn render_body(name: Option<&str>, score: Option<f64>) -> String {
    let greeting = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(escape_html)
        .unwrap_or_else(|| "there".to_string());
    let score_line = match score {
        Some(score) => format!("<p>Your overall score: <strong>{score:.0}</strong></p>"),
        None => String::new(),
    };
    format!(
        "<p>Hi {greeting},</p>\
         <p>Thank you for completing the career assessment. \
         Your detailed report is attached to this email.</p>\
         {score_line}"
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_greets_by_name_and_quotes_score() {
        let body = render_body(Some("Asha"), Some(78.4));
        assert!(body.contains("Hi Asha,"));
        assert!(body.contains("<strong>78</strong>"));
    }

    #[test]
    fn test_body_without_name_or_score() {
        let body = render_body(Some("  "), None);
        assert!(body.contains("Hi there,"));
        assert!(!body.contains("overall score"));
    }

    #[test]
    fn test_body_escapes_markup_in_name() {
        let body = render_body(Some(r#"<a href="https://evil.example">Tom & 'Jerry'</a>"#), None);
        assert!(!body.contains("<a href"));
        assert!(body.contains("Hi &lt;a href=&quot;https://evil.example&quot;&gt;"));
        assert!(body.contains("Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;,"));
    }

    #[test]
    fn test_send_request_shape() {
        let request = SendRequest {
            from: "Reports <r@example.com>",
            to: vec!["a@example.com"],
            subject: "s",
            html: "<p>x</p>".to_string(),
            attachments: vec![Attachment {
                filename: REPORT_FILENAME,
                content: "JVBERi0=",
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["to"][0], "a@example.com");
        assert_eq!(value["attachments"][0]["filename"], "career-report.pdf");
        assert_eq!(value["attachments"][0]["content"], "JVBERi0=");
    }
}
