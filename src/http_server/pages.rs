//! Server-rendered HTML pages
//!
//! Every user-supplied value goes through [`escape_html`] before it lands
//! in markup.

use crate::contact::{messages_for, Field, FieldIssue, FormConfig, RawSubmission};

const SITE_TITLE: &str = "mister deejay";
const SITE_DESCRIPTION: &str = "Put a record on with mister deejay 📀";
const SOURCE_URL: &str = "https://github.com/CodingZeal/nextjs-server-action-validation";

/// What the contact form shows: previous input and its issues
#[derive(Debug, Default)]
pub struct FormView<'a> {
    pub values: Option<&'a RawSubmission>,
    pub issues: &'a [FieldIssue],
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="{description}">
<title>{title} | {site}</title>
</head>
<body>
<main>
<nav>
<a class="brand" href="/">{site}</a>
<ul>
<li><a href="/">Home</a></li>
<li><a href="/contact">Contact</a></li>
</ul>
</nav>
<section>
{body}
</section>
</main>
<footer>
<small>Copyright © {year}. All Rights Reserved.</small>
<small><a href="{source}" target="_blank">Source Code</a></small>
</footer>
</body>
</html>
"#,
        description = escape_html(SITE_DESCRIPTION),
        title = escape_html(title),
        site = SITE_TITLE,
        year = chrono::Utc::now().format("%Y"),
        source = SOURCE_URL,
        body = body,
    )
}

/// `GET /`
pub fn home_page() -> String {
    layout(
        "Home",
        r#"<h1>Home</h1>
<p>Hey there mister deejay. <a href="/contact">Put a record on.</a></p>"#,
    )
}

fn error_messages(issues: &[FieldIssue], field: Field) -> String {
    format!(
        r#"<div class="errors" id="{field}-errors">{text}</div>"#,
        field = field,
        text = escape_html(&messages_for(issues, field)),
    )
}

fn previous(values: Option<&RawSubmission>, field: Field) -> String {
    let value = values.and_then(|raw| match field {
        Field::Name => raw.name.as_deref(),
        Field::Email => raw.email.as_deref(),
        Field::Message => raw.message.as_deref(),
    });
    escape_html(value.unwrap_or_default())
}

/// `GET /contact`, and the re-render after a rejected submission
pub fn contact_page(config: &FormConfig, view: &FormView<'_>) -> String {
    let body = format!(
        r#"<h1>Contact Us</h1>
<form method="post" action="/contact">
<div>
<label for="name"><span>Name</span>
<input id="name" type="text" name="name" value="{name}">
</label>
{name_errors}
</div>
<div>
<label for="email"><span>Email</span>
<input id="email" type="text" name="email" value="{email}">
</label>
{email_errors}
</div>
<label for="message">
<span>Which record should we play for you? <span class="hint">(min {min} characters, max {max} characters)</span></span>
<textarea id="message" name="message">{message}</textarea>
</label>
{message_errors}
<button type="submit">Mix that Tape</button>
</form>"#,
        name = previous(view.values, Field::Name),
        email = previous(view.values, Field::Email),
        message = previous(view.values, Field::Message),
        name_errors = error_messages(view.issues, Field::Name),
        email_errors = error_messages(view.issues, Field::Email),
        message_errors = error_messages(view.issues, Field::Message),
        min = config.message.min,
        max = config.message.max,
    );
    layout("Contact", &body)
}

/// Generic failure page for store errors
pub fn error_page() -> String {
    layout(
        "Error",
        r#"<h1>Something went wrong</h1>
<p>We could not save your request. Please try again later.</p>"#,
    )
}
