//! Command dispatch and handlers.

pub mod build;
pub mod execute;
pub mod robot_state;
pub mod robots;
pub mod run;
pub mod status;
pub mod submit;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::{Cli, Command};
use crate::config::{ServiceConfig, BASE_URL_VAR, TOKEN_VAR};
use crate::context::ServiceContext;
use crate::ports::Page;
use crate::watch::PollPolicy;

/// Environment variable naming a cassette file to record the session into.
pub const RECORD_VAR: &str = "ROBOTASK_RECORD";

/// Dispatch a parsed command to its handler.
///
/// Service commands run against `--replay <cassette>` when given, otherwise the
/// live service. When `ROBOTASK_RECORD` is set to a file path, live calls are
/// also recorded to that cassette.
///
/// # Errors
///
/// Returns an error string if configuration is incomplete or the command fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let command = match &cli.command {
        Command::Build { route } => return build::run(route),
        command => command,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;
    // Declared after the runtime so the client and any recording drop first.
    let ctx = service_context(cli)?;

    runtime.block_on(dispatch_with_context(command, &ctx))
}

/// Dispatch a service command with the given context.
async fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Build { route } => build::run(route),
        Command::Submit { route, execute } => submit::run(ctx, route, *execute).await,
        Command::Execute { task_id } => execute::run(ctx, task_id).await,
        Command::Status { task_id } => status::run(ctx, task_id).await,
        Command::Robots { page_size, page } => {
            robots::run(ctx, Page { page_size: *page_size, page_num: *page }).await
        }
        Command::RobotState { robot_id } => robot_state::run(ctx, robot_id).await,
        Command::Run { route, interval_secs, max_failures, max_polls } => {
            let policy = PollPolicy {
                interval: Duration::from_secs(*interval_secs),
                max_consecutive_failures: *max_failures,
                max_polls: *max_polls,
            };
            run::run(ctx, route, policy).await
        }
    }
}

/// Pick replaying, recording or live wiring for the task service.
fn service_context(cli: &Cli) -> Result<ServiceContext, String> {
    if let Some(cassette) = &cli.replay {
        return ServiceContext::replaying(cassette);
    }

    let config = ServiceConfig::from_env_overriding(|key| match key {
        BASE_URL_VAR => cli.base_url.clone(),
        TOKEN_VAR => cli.token.clone(),
        _ => None,
    })
    .map_err(|e| format!("Incomplete service configuration: {e}"))?;

    match env::var(RECORD_VAR) {
        Ok(path) if !path.is_empty() => ServiceContext::recording(config, &PathBuf::from(path)),
        _ => ServiceContext::live(config),
    }
}
