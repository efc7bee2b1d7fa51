use crate::api::{Endpoint, HarvardClient};
use crate::cache::CategoryCache;
use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::error::Result;

pub mod browse;
pub mod cache;
pub mod categories;
pub mod facet;
pub mod search;

/// サブコマンド共通の実行環境
pub struct Context {
    settings: Settings,
}

impl Context {
    pub fn load(cli: &Cli) -> Result<Self> {
        let settings = Settings::load(cli.config.as_deref())?;
        tracing::debug!(
            cache_dir = %settings.cache_dir.display(),
            timeout = ?settings.http.timeout,
            "settings resolved"
        );
        Ok(Self { settings })
    }

    pub fn endpoint(&self) -> Result<Endpoint> {
        let endpoint = Endpoint::new(&self.settings.base_url, self.settings.api_key.clone())?;
        tracing::debug!(base_url = endpoint.base_url(), "endpoint ready");
        if !endpoint.has_api_key() {
            tracing::warn!("no API key configured; set HARVARD_API_KEY or api_key in config.toml");
        }
        Ok(endpoint)
    }

    pub fn client(&self) -> HarvardClient {
        HarvardClient::new(&self.settings.http)
    }

    pub fn cache(&self) -> Result<CategoryCache> {
        CategoryCache::with_cache_dir(self.settings.cache_dir.clone())
    }
}

pub async fn dispatch(cli: Cli) -> Result<()> {
    let context = Context::load(&cli)?;

    match cli.command {
        Command::Categories(args) => categories::run(&context, args).await,
        Command::Search(args) => search::run(&context, args).await,
        Command::Facet(args) => facet::run(&context, args).await,
        Command::Cache(args) => cache::run(&context, args),
        Command::Browse(args) => browse::run(&context, args).await,
    }
}
