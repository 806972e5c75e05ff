//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `crmdesk_core` linkage.
//! - Print the seeded pipeline so store wiring can be checked by eye.

use crmdesk_core::{init_logging, logging_status, Crm, CrmConfig, Labeled, LATENCY_ENV_VAR};
use log::error;
use std::process::ExitCode;

const LOG_DIR_ENV_VAR: &str = "CRMDESK_LOG_DIR";

#[tokio::main]
async fn main() -> ExitCode {
    println!("crmdesk_core ping={}", crmdesk_core::ping());
    println!("crmdesk_core version={}", crmdesk_core::core_version());

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            report_failure(&message);
            ExitCode::FAILURE
        }
    }
}

/// Prints the failure and, once file logging is running, records it there too.
fn report_failure(message: &str) -> bool {
    eprintln!("crmdesk: {message}");
    if logging_status().is_none() {
        return false;
    }
    error!("event=cli_failed module=cli status=error error={message}");
    true
}

async fn run() -> Result<(), String> {
    let latency = std::env::var(LATENCY_ENV_VAR).ok();
    let config = CrmConfig::from_env_value(latency.as_deref()).map_err(|err| err.to_string())?;

    if let Ok(dir) = std::env::var(LOG_DIR_ENV_VAR) {
        init_logging(config.log_level, &dir).map_err(|err| err.to_string())?;
    }

    let crm = Crm::seeded(config).map_err(|err| err.to_string())?;
    let board = crm
        .pipeline()
        .load_board()
        .await
        .map_err(|err| err.to_string())?;

    for column in &board.columns {
        println!(
            "stage={} deals={} value={}",
            column.stage.label(),
            column.count(),
            column.total_value
        );
    }
    println!("total deals={} value={}", board.deal_count(), board.total_value());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::report_failure;

    #[test]
    fn failure_is_not_logged_before_logging_starts() {
        assert!(!report_failure("seed data unavailable"));
    }
}
