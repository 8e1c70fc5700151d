use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use typedex_matchup::{AttackType, TypeRelations};

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::model::{PokemonResponse, TypeResponse};
use crate::name::Identifier;
use crate::provider::{DataProvider, PokemonEntry};

/// [`DataProvider`] backed by the PokeAPI REST endpoints.
///
/// Each call performs a single GET; failures are reported, never retried.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpProvider {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T>(&self, resource: &str, key: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = resource_url(&self.config.base_url, resource, key);
        tracing::debug!(url = %url, "Fetching resource");

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Request failed");
            FetchError::Http(e)
        })?;

        check_status(response.status(), &url, key)?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// 404 is `NotFound`, any other non-success status is `Status`
fn check_status(status: StatusCode, url: &str, key: &str) -> Result<(), FetchError> {
    if status == StatusCode::NOT_FOUND {
        tracing::debug!(url = %url, "Resource not found");
        return Err(FetchError::NotFound(key.to_string()));
    }
    if !status.is_success() {
        tracing::warn!(url = %url, status = status.as_u16(), "Unexpected response status");
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(())
}

/// Relations from a `/type` response, which must describe the requested type
fn requested_relations(
    response: &TypeResponse,
    defending: AttackType,
) -> Result<TypeRelations, FetchError> {
    let returned = response.attack_type()?;
    if returned != defending {
        return Err(FetchError::UnknownType(format!(
            "requested {defending}, received {returned}"
        )));
    }

    Ok(response.damage_relations.to_type_relations())
}

/// Build `{base}/{resource}/{key}/`
fn resource_url(base_url: &str, resource: &str, key: &str) -> String {
    format!("{}/{}/{}/", base_url.trim_end_matches('/'), resource, key)
}

#[async_trait]
impl DataProvider for HttpProvider {
    async fn type_relations(&self, defending: AttackType) -> Result<TypeRelations, FetchError> {
        let response: TypeResponse = self.get_json("type", defending.as_str()).await?;
        requested_relations(&response, defending)
    }

    async fn pokemon(&self, identifier: &Identifier) -> Result<PokemonEntry, FetchError> {
        let response: PokemonResponse = self
            .get_json("pokemon", &identifier.path_segment())
            .await?;
        PokemonEntry::from_response(&response)
    }
}
