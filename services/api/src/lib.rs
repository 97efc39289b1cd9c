mod assessment;
mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use esgen::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
