use lambda_runtime::{service_fn, Error, LambdaEvent};
use sf_core::config::ConnectionParameters;
use sf_lambda::envelope::{respond, InvocationResponse};
use sf_lambda::handler::{run_migrations, DEFAULT_MIGRATIONS_PATH};
use std::path::PathBuf;

async fn handle_request(_event: LambdaEvent<serde_json::Value>) -> Result<InvocationResponse, Error> {
    // Every failure category maps onto the 500 envelope rather than a
    // runtime error, so the invoker always sees the wire contract.
    let params = match ConnectionParameters::from_env() {
        Ok(params) => params,
        Err(err) => return Ok(InvocationResponse::error(err)),
    };

    let migrations_path = std::env::var("MIGRATIONS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_MIGRATIONS_PATH));

    let outcome = run_migrations(&params, &migrations_path).await;
    Ok(respond(&outcome))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    lambda_runtime::run(service_fn(handle_request)).await
}
