mod cli;
mod commands;
mod infra;
mod page;
mod routes;
mod server;

use discharge_counter::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
