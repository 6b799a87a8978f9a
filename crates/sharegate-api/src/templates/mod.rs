//! Embedded HTML pages.

const ADMIN_FORM: &str = include_str!("admin_form.html");
const ADMIN_LINK: &str = include_str!("admin_link.html");
const COUNTDOWN: &str = include_str!("countdown.html");

/// The token issuance form.
pub fn admin_form() -> &'static str {
    ADMIN_FORM
}

/// The page showing a freshly minted access link.
pub fn admin_link(link: &str) -> String {
    ADMIN_LINK.replace("{{link}}", &escape(link))
}

/// The waiting page shown until a token becomes valid.
pub fn countdown(location: &str, unix_seconds: i64) -> String {
    COUNTDOWN
        .replace("{{location}}", &escape(location))
        .replace("{{unix_seconds}}", &unix_seconds.to_string())
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
