use iocraft::prelude::*;

use crate::config::Config;
use crate::error::{Result, StargazeError};
use crate::remote::GitHubSearchClient;
use crate::tui::{BrowseApp, BrowseSettings};

/// Full-screen repository browser
pub async fn cmd_browse(config: &Config) -> Result<()> {
    let client = GitHubSearchClient::from_config(config)?;
    let settings = BrowseSettings::from_config(config);
    tracing::info!(
        query = %client.query().predicate(),
        api_url = %config.api_url,
        "starting browse view"
    );

    element!(BrowseApp(
        client: Some(client),
        settings: Some(settings),
    ))
    .fullscreen()
    .await
    .map_err(|e| StargazeError::Tui(e.to_string()))
}
