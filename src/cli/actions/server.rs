use crate::api;
use crate::cli::actions::Action;
use anyhow::Result;

/// Handle the server action
///
/// # Errors
///
/// Returns an error if the server fails to start
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            dsn,
            base_url,
        } => {
            api::new(port, dsn, base_url).await?;
        }
    }

    Ok(())
}
