//! Health check command - checks a running tracker server.

use std::time::Duration;

use crate::cli::HealthArgs;

/// The `/health` endpoint for a base URL.
fn health_url(base: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.ends_with("/health") {
        base.to_string()
    } else {
        format!("{base}/health")
    }
}

/// Summarizes a `/health` body, or says why the server is not healthy.
fn describe(body: &serde_json::Value) -> Result<String, String> {
    let status = body.get("status").and_then(|s| s.as_str()).unwrap_or("missing");
    if status != "healthy" {
        return Err(format!("server returned status {status}"));
    }
    let Some(mode) = body.get("mode").and_then(|m| m.as_str()) else {
        return Err("response has no owner mode".to_string());
    };
    let sessions = body.get("sessions").and_then(|s| s.as_u64()).unwrap_or(0);
    Ok(match mode {
        "multi" => format!("healthy: multi-user mode, {sessions} active sessions"),
        mode => format!("healthy: {mode} owner mode"),
    })
}

/// Run the health check command
pub async fn run(args: &HealthArgs) -> Result<(), Box<dyn std::error::Error>> {
    let url = health_url(&args.url);
    let timeout = Duration::from_secs(args.timeout);

    let client = reqwest::Client::builder().timeout(timeout).build()?;

    match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => {
            let body: serde_json::Value = response.json().await?;
            match describe(&body) {
                Ok(summary) => {
                    println!("{summary}");
                    Ok(())
                }
                Err(reason) => {
                    eprintln!("unhealthy: {reason}");
                    std::process::exit(1);
                }
            }
        }
        Ok(response) => {
            eprintln!("unhealthy: server returned HTTP status {}", response.status());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("unhealthy: failed to connect to {url}: {e}");
            std::process::exit(1);
        }
    }
}
