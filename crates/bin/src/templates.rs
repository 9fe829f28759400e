//! HTML templates for web interface
//!
//! Simple inline HTML templates without a template engine.

use tracker::{
    SessionHandle, SessionManager,
    record::{ApplicationRecord, DATE_FORMAT, Location, Mode, ModeSummary, Status},
};

/// Common CSS styles for all pages
const COMMON_STYLES: &str = r#"
    body {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
        max-width: 1100px;
        margin: 40px auto;
        padding: 0 20px;
        background: #f5f5f5;
    }
    .container {
        background: white;
        padding: 30px;
        border-radius: 8px;
        box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    }
    h1 {
        color: #333;
        border-bottom: 2px solid #1E90FF;
        padding-bottom: 10px;
    }
    h2 {
        color: #555;
        margin-top: 30px;
    }
    .form-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
        gap: 12px 20px;
    }
    .form-group {
        margin: 15px 0;
    }
    label {
        display: block;
        font-weight: bold;
        margin-bottom: 5px;
        color: #333;
    }
    input[type="text"],
    input[type="password"],
    input[type="email"],
    input[type="date"],
    input[type="number"],
    input[type="url"],
    select {
        width: 100%;
        padding: 10px;
        border: 1px solid #ddd;
        border-radius: 4px;
        font-size: 14px;
        box-sizing: border-box;
    }
    button {
        background: #1E90FF;
        color: white;
        padding: 10px 20px;
        border: none;
        border-radius: 4px;
        cursor: pointer;
        font-size: 14px;
        font-weight: bold;
    }
    button:hover {
        background: #1873cc;
    }
    .logout-btn {
        background: #999;
        float: right;
    }
    .danger-btn {
        background: #DC143C;
    }
    table {
        width: 100%;
        border-collapse: collapse;
        margin: 20px 0;
    }
    th, td {
        text-align: left;
        padding: 10px;
        border-bottom: 1px solid #ddd;
    }
    th {
        background: #f0f0f0;
        color: #333;
    }
    .error {
        color: #d9534f;
        background: #f2dede;
        padding: 10px;
        border-radius: 4px;
        margin: 10px 0;
    }
    .notice {
        color: #2e7d32;
        background: #e8f5e9;
        padding: 10px;
        border-radius: 4px;
        margin: 10px 0;
    }
    .chart-row {
        display: flex;
        align-items: center;
        margin: 6px 0;
    }
    .chart-label {
        width: 100px;
        font-weight: bold;
        color: #555;
    }
    .chart-bar {
        height: 24px;
        border-radius: 3px;
        margin-right: 8px;
    }
    .muted {
        color: #666;
        font-style: italic;
    }
"#;

/// Bar colour of a mode in the dashboard chart.
pub fn mode_colour(mode: Mode) -> &'static str {
    match mode {
        Mode::Online => "#1E90FF",
        Mode::Hybrid => "#DC143C",
        Mode::InPerson => "#FFA500",
    }
}

/// Everything the dashboard shows, captured from a session handle.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// `None` in single-owner mode; hides the logout button
    pub username: Option<String>,
    pub records: Vec<ApplicationRecord>,
    pub summary: ModeSummary,
    pub export_name: String,
}

impl DashboardView {
    pub fn from_handle(manager: &SessionManager, handle: &SessionHandle) -> Self {
        Self {
            username: handle.username().map(String::from),
            records: manager
                .current_records(handle)
                .iter()
                .map(|e| e.record.clone())
                .collect(),
            summary: manager.summarize_by_mode(handle),
            export_name: manager.export_file_name(handle),
        }
    }
}

fn message_html(class: &str, message: Option<&str>) -> String {
    message.map_or(String::new(), |m| {
        format!(r#"<div class="{class}">{}</div>"#, html_escape(m))
    })
}

/// Render the login page
pub fn login_page(error: Option<&str>, notice: Option<&str>) -> String {
    let error_html = message_html("error", error);
    let notice_html = message_html("notice", notice);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Internship Tracker - Login</title>
    <style>{COMMON_STYLES}</style>
</head>
<body>
    <div class="container">
        <h1>Internship Application Tracker</h1>
        <h2>Login</h2>
        {notice_html}
        {error_html}
        <form method="POST" action="/login">
            <div class="form-group">
                <label for="username">Username:</label>
                <input type="text" id="username" name="username" required autofocus>
            </div>
            <div class="form-group">
                <label for="password">Password:</label>
                <input type="password" id="password" name="password" required>
            </div>
            <button type="submit">Login</button>
        </form>
        <p style="margin-top: 20px; text-align: center;">
            Don't have an account? <a href="/register">Sign up here</a>
        </p>
    </div>
</body>
</html>"#
    )
}

/// Render the registration page
pub fn register_page(error: Option<&str>) -> String {
    let error_html = message_html("error", error);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Internship Tracker - Sign Up</title>
    <style>{COMMON_STYLES}</style>
</head>
<body>
    <div class="container">
        <h1>Internship Application Tracker</h1>
        <h2>Create Account</h2>
        {error_html}
        <form method="POST" action="/register">
            <div class="form-group">
                <label for="username">Username:</label>
                <input type="text" id="username" name="username" required autofocus
                       pattern="[a-zA-Z0-9_-]+"
                       title="Username must contain only letters, numbers, underscores, and hyphens">
                <small style="color: #666;">Letters, numbers, underscores, and hyphens only</small>
            </div>
            <div class="form-group">
                <label for="email">Email:</label>
                <input type="email" id="email" name="email">
            </div>
            <div class="form-group">
                <label for="password">Password:</label>
                <input type="password" id="password" name="password" required>
                <small style="color: #666;">At least 6 characters</small>
            </div>
            <div class="form-group">
                <label for="password_confirm">Confirm Password:</label>
                <input type="password" id="password_confirm" name="password_confirm" required>
            </div>
            <button type="submit">Sign Up</button>
        </form>
        <p style="margin-top: 20px; text-align: center;">
            Already have an account? <a href="/login">Login here</a>
        </p>
    </div>
</body>
</html>"#
    )
}

/// `<option>` elements for a closed set, with `selected` on one value.
fn options_html<T: Copy + PartialEq + std::fmt::Display>(values: &[T], selected: T) -> String {
    values
        .iter()
        .map(|v| {
            let text = html_escape(&v.to_string());
            let marker = if *v == selected { " selected" } else { "" };
            format!(r#"<option value="{text}"{marker}>{text}</option>"#)
        })
        .collect()
}

fn records_table_html(records: &[ApplicationRecord]) -> String {
    if records.is_empty() {
        return r#"<p class="muted">No applications recorded yet.</p>"#.to_string();
    }

    let mut rows = String::new();
    for (i, record) in records.iter().enumerate() {
        rows.push_str(&format!(
            r#"<tr>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
            </tr>"#,
            i + 1,
            html_escape(&record.company),
            html_escape(&record.role),
            html_escape(record.location.as_str()),
            record.date.format(DATE_FORMAT),
            html_escape(record.status.as_str()),
            html_escape(record.mode.as_str()),
            link_html(&record.link)
        ));
    }

    format!(
        r#"<table>
            <tr>
                <th>#</th>
                <th>Company</th>
                <th>Role</th>
                <th>Location</th>
                <th>Date</th>
                <th>Status</th>
                <th>Mode</th>
                <th>Link</th>
            </tr>
            {rows}
        </table>"#
    )
}

/// An anchor for http(s) links; anything else is shown as plain text.
fn link_html(link: &str) -> String {
    let text = html_escape(link);
    if is_web_link(link) {
        format!(r#"<a href="{text}" rel="noopener noreferrer" target="_blank">{text}</a>"#)
    } else {
        text
    }
}

fn is_web_link(link: &str) -> bool {
    let lower = link.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Horizontal bars, one per mode that has records.
fn chart_html(summary: &ModeSummary) -> String {
    let Some(max) = summary.values().copied().max() else {
        return r#"<p class="muted">The chart appears once an application is recorded.</p>"#
            .to_string();
    };

    summary
        .iter()
        .map(|(mode, &count)| {
            let percent = count * 100 / max.max(1);
            format!(
                r#"<div class="chart-row">
                <span class="chart-label">{}</span>
                <span class="chart-bar" style="width: {percent}%; background: {};"></span>
                <span>{count}</span>
            </div>"#,
                html_escape(mode.as_str()),
                mode_colour(*mode)
            )
        })
        .collect()
}

/// Render the dashboard page
pub fn dashboard_page(view: &DashboardView, today: &str, error: Option<&str>) -> String {
    let error_html = message_html("error", error);

    let header_html = match &view.username {
        Some(username) => format!(
            r#"<form method="POST" action="/logout" style="display: inline;">
                <button type="submit" class="logout-btn">Logout</button>
            </form>
            <p>Logged in as <strong>{}</strong></p>"#,
            html_escape(username)
        ),
        None => String::new(),
    };

    let delete_html = if view.records.is_empty() {
        String::new()
    } else {
        format!(
            r#"<h2>Delete an Application</h2>
        <form method="POST" action="/dashboard/delete">
            <div class="form-group">
                <label for="row">Row number:</label>
                <input type="number" id="row" name="row" min="1" max="{}" required>
            </div>
            <button type="submit" class="danger-btn">Delete</button>
        </form>"#,
            view.records.len()
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Internship Tracker - Dashboard</title>
    <style>{styles}</style>
</head>
<body>
    <div class="container">
        <h1>Internship Application Tracker</h1>
        {header_html}
        {error_html}

        <h2>Add an Application</h2>
        <form method="POST" action="/dashboard/add">
            <div class="form-grid">
                <div>
                    <label for="company">Company:</label>
                    <input type="text" id="company" name="company" required>
                </div>
                <div>
                    <label for="role">Role:</label>
                    <input type="text" id="role" name="role" required>
                </div>
                <div>
                    <label for="location">Location:</label>
                    <select id="location" name="location">{locations}</select>
                </div>
                <div>
                    <label for="date">Date Applied:</label>
                    <input type="date" id="date" name="date" value="{today}" required>
                </div>
                <div>
                    <label for="status">Status:</label>
                    <select id="status" name="status">{statuses}</select>
                </div>
                <div>
                    <label for="mode">Mode:</label>
                    <select id="mode" name="mode">{modes}</select>
                </div>
                <div>
                    <label for="link">Link:</label>
                    <input type="url" id="link" name="link">
                </div>
            </div>
            <div class="form-group">
                <button type="submit">Add Application</button>
            </div>
        </form>

        <h2>Your Applications</h2>
        {table}
        <p><a href="/dashboard/export" download="{export_name}">Download {export_name}</a></p>

        {delete_html}

        <h2>Applications by Mode</h2>
        {chart}
    </div>
</body>
</html>"#,
        styles = COMMON_STYLES,
        locations = options_html(Location::ALL, Location::Remote),
        statuses = options_html(Status::ALL, Status::default()),
        modes = options_html(Mode::ALL, Mode::default()),
        today = html_escape(today),
        table = records_table_html(&view.records),
        export_name = html_escape(&view.export_name),
        chart = chart_html(&view.summary),
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
