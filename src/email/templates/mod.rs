//! OTP email composition
//!
//! Message text is selected by a fixed purpose-keyed table and rendered
//! through simple `{{variable}}` substitution. Composition is deterministic:
//! the same (purpose, code, name) always produces the same payload.

use crate::config::BrandingConfig;
use crate::domain::{OneTimeCode, OtpPurpose};
use std::collections::HashMap;

/// Greeting name used when the recipient name is absent or blank
const DEFAULT_RECIPIENT_NAME: &str = "User";

/// Per-purpose message copy.
///
/// Strings may reference `{{app_name}}`; they are rendered before being
/// inserted into the page template.
struct PurposeCopy {
    subject: &'static str,
    heading: &'static str,
    intro: &'static str,
    code_label: &'static str,
    disclaimer: &'static str,
}

fn copy_for(purpose: OtpPurpose) -> PurposeCopy {
    match purpose {
        OtpPurpose::Signup => PurposeCopy {
            subject: "Verify Your Account - OTP Code",
            heading: "Welcome to {{app_name}}!",
            intro: "Thank you for joining our community! Please verify your email \
                    address by entering the following 6-digit code:",
            code_label: "Your Verification Code",
            disclaimer: "If you did not create an account with {{app_name}}, please \
                         ignore this email. This verification code will expire \
                         automatically.",
        },
        OtpPurpose::PasswordReset => PurposeCopy {
            subject: "Reset Your Password - OTP Code",
            heading: "Password Reset Request",
            intro: "We received a request to reset your password. Please use the \
                    following code to reset your password:",
            code_label: "Your Password Reset Code",
            disclaimer: "If you did not request a password reset, please ignore this \
                         email. Your password will remain unchanged.",
        },
        OtpPurpose::ProfileVerification => PurposeCopy {
            subject: "Verify Profile Update",
            heading: "Profile Update Verification",
            intro: "To confirm your profile changes, please verify your email address \
                    using the following 6-digit code:",
            code_label: "Your Profile Verification Code",
            disclaimer: "If you did not request a profile update, please ignore this \
                         email. This verification code will expire automatically.",
        },
    }
}

/// Template rendering engine with variable substitution
#[derive(Debug, Default)]
pub struct TemplateEngine {
    variables: HashMap<String, String>,
}

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Render a template string, replacing {{variable}} with values
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        result
    }
}

/// Rendered email with all variables substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// Compose the notification payload for one OTP email.
///
/// A `None` or blank `recipient_name` resolves to "User".
pub fn compose(
    purpose: OtpPurpose,
    code: &OneTimeCode,
    recipient_name: Option<&str>,
    branding: &BrandingConfig,
) -> RenderedEmail {
    let copy = copy_for(purpose);
    let name = recipient_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_RECIPIENT_NAME);

    let mut engine = TemplateEngine::new();
    engine
        .set("app_name", &branding.app_name)
        .set("tagline", &branding.tagline)
        .set("support_email", &branding.support_email)
        .set("name", name)
        .set("code", code.as_str())
        .set("year", chrono::Utc::now().format("%Y").to_string());

    // Copy strings are rendered first so the page template only ever
    // substitutes fully resolved values.
    let heading = engine.render(copy.heading);
    let disclaimer = engine.render(copy.disclaimer);
    engine
        .set("heading", heading)
        .set("intro", copy.intro)
        .set("code_label", copy.code_label)
        .set("disclaimer", disclaimer);

    RenderedEmail {
        subject: copy.subject.to_string(),
        html_body: engine.render(OTP_TEMPLATE),
        text_body: engine.render(OTP_TEMPLATE_TEXT),
    }
}

// ============================================================================
// Email Templates
// ============================================================================

const OTP_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{heading}}</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 0; background-color: #f8fafc; }
        .container { max-width: 600px; margin: 40px auto; padding: 20px; }
        .header { background: linear-gradient(135deg, #0f172a 0%, #7c3aed 100%); padding: 30px; border-radius: 16px; text-align: center; margin-bottom: 30px; }
        .header h1 { color: #ffffff; margin: 0; font-size: 26px; }
        .header p { color: #e2e8f0; margin: 10px 0 0 0; font-size: 15px; }
        .content { background: #ffffff; padding: 40px; border-radius: 12px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        .code-box { background: linear-gradient(135deg, #10b981 0%, #059669 100%); padding: 25px; border-radius: 12px; text-align: center; margin: 30px 0; }
        .code-box p { color: #ffffff; margin: 0 0 10px 0; font-size: 14px; font-weight: 500; }
        .code-box h1 { color: #ffffff; margin: 0; font-size: 36px; letter-spacing: 8px; font-family: 'Courier New', monospace; }
        .notice { background-color: #fef3c7; border: 1px solid #f59e0b; padding: 16px; border-radius: 8px; margin: 30px 0; text-align: center; color: #92400e; font-size: 14px; }
        .disclaimer { color: #64748b; font-size: 14px; margin-bottom: 0; }
        .footer { text-align: center; font-size: 13px; color: #94a3b8; margin-top: 30px; padding: 20px; }
        .footer a { color: #10b981; text-decoration: none; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{{heading}}</h1>
            <p>{{tagline}}</p>
        </div>
        <div class="content">
            <h2>Hi {{name}},</h2>
            <p>{{intro}}</p>
            <div class="code-box">
                <p>{{code_label}}</p>
                <h1>{{code}}</h1>
            </div>
            <div class="notice">
                This code will expire in <strong>10 minutes</strong>.
            </div>
            <p class="disclaimer">{{disclaimer}}</p>
        </div>
        <div class="footer">
            <p>Need help? Contact us at <a href="mailto:{{support_email}}">{{support_email}}</a></p>
            <p>&copy; {{year}} {{app_name}}. All rights reserved.</p>
        </div>
    </div>
</body>
</html>"#;

const OTP_TEMPLATE_TEXT: &str = r#"{{heading}}

Hi {{name}},

{{intro}}

{{code_label}}: {{code}}

This code will expire in 10 minutes.

{{disclaimer}}

Need help? Contact us at {{support_email}}

(c) {{year}} {{app_name}}"#;
