//! Catalog access: the trait the loaders depend on, and the PokeAPI client

use std::future::Future;

use duel_battle::{Combatant, Move, MoveRef};
use duel_protocol::{catalog_key, parse_move, parse_pokemon};
use reqwest::StatusCode;

use crate::config::CatalogConfig;
use crate::error::CatalogError;

/// Source of combatant and move records
pub trait Catalog {
    /// Look up a combatant by name (case and surrounding whitespace ignored)
    fn fetch_combatant(&self, name: &str)
    -> impl Future<Output = Result<Combatant, CatalogError>> + Send;

    /// Resolve one of a combatant's move references
    fn fetch_move(&self, move_ref: &MoveRef)
    -> impl Future<Output = Result<Move, CatalogError>> + Send;
}

/// HTTP catalog backed by PokeAPI (or anything serving the same documents)
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl PokeApiClient {
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Document URL for a combatant
    pub fn combatant_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url(), catalog_key(name))
    }

    /// Document URL for a move reference, derived from its name when the
    /// reference carries no URL
    pub fn move_url(&self, move_ref: &MoveRef) -> String {
        if move_ref.url.is_empty() {
            format!("{}/move/{}", self.base_url(), catalog_key(&move_ref.name))
        } else {
            move_ref.url.clone()
        }
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// GET a document body, retrying per the configured policy
    async fn get_text(&self, url: &str, what: &str) -> Result<String, CatalogError> {
        let policy = &self.config.retry;
        let mut delay = policy.initial_delay;
        let mut attempt = 1;

        loop {
            match self.try_get(url, what).await {
                Ok(body) => return Ok(body),
                Err(e) if e.is_retryable() && attempt < policy.max_attempts => {
                    tracing::warn!(
                        attempt = attempt,
                        max_attempts = policy.max_attempts,
                        url = %url,
                        error = %e,
                        "Catalog request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay = policy.next_delay(delay);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_get(&self, url: &str, what: &str) -> Result<String, CatalogError> {
        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(what.to_string()));
        }
        let body = response.error_for_status()?.text().await?;
        Ok(body)
    }
}

impl Catalog for PokeApiClient {
    async fn fetch_combatant(&self, name: &str) -> Result<Combatant, CatalogError> {
        let key = catalog_key(name);
        if key.is_empty() {
            return Err(CatalogError::NotFound(name.to_string()));
        }

        let body = self.get_text(&self.combatant_url(&key), &key).await?;
        let record = parse_pokemon(&body).map_err(CatalogError::Decode)?;
        tracing::debug!(name = %record.name, moves = record.moves.len(), "Combatant fetched");
        Ok(Combatant::from_protocol(&record))
    }

    async fn fetch_move(&self, move_ref: &MoveRef) -> Result<Move, CatalogError> {
        let body = self.get_text(&self.move_url(move_ref), &move_ref.name).await?;
        let record = parse_move(&body).map_err(CatalogError::Decode)?;
        Ok(Move::from_protocol(&record)?)
    }
}
