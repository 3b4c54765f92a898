// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

//! Offering source backed by the Atlas Admin API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, header::ACCEPT};
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use url::Url;

use crate::catalog::backends::error::OfferingSourceError;
use crate::catalog::types::*;
use crate::config::Config;

const ATLAS_MEDIA_TYPE: &str = "application/vnd.atlas.2023-01-01+json";

/// Tokens are renewed this long before Atlas considers them expired.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Clone, Debug, Default)]
pub struct AtlasBackend {
    config: Config,
    client: Client,
    token: Arc<Mutex<Option<AccessToken>>>,
}

#[derive(Clone)]
struct AccessToken {
    value: String,
    expires_at: Instant,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderRegionsPage {
    #[serde(default)]
    results: Vec<ProviderRegions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderRegions {
    provider: String,
    #[serde(default)]
    instance_sizes: Vec<AtlasInstanceSize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AtlasInstanceSize {
    name: String,
    #[serde(default)]
    available_regions: Vec<AtlasRegion>,
}

#[derive(Debug, Deserialize)]
struct AtlasRegion {
    name: String,
}

impl TryFrom<ProviderRegions> for Offering {
    type Error = OfferingSourceError;

    fn try_from(value: ProviderRegions) -> Result<Self, Self::Error> {
        let mut instance_sizes = Vec::with_capacity(value.instance_sizes.len());
        for size in value.instance_sizes {
            instance_sizes.push(
                InstanceSizeBuilder::default()
                    .name(size.name)
                    .available_regions(
                        size.available_regions
                            .into_iter()
                            .map(|region| region.name)
                            .collect::<Vec<_>>(),
                    )
                    .build()?,
            );
        }
        Ok(OfferingBuilder::default()
            .name(value.provider)
            .instance_sizes(instance_sizes)
            .build()?)
    }
}

impl AtlasBackend {
    fn base_url(&self) -> Result<Url, OfferingSourceError> {
        let mut url = Url::parse(&self.config.atlas.base_url)?;
        // keep any path prefix of the configured url when joining
        if !url.path().ends_with('/') {
            url.set_path(&format!("{}/", url.path()));
        }
        Ok(url)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.atlas.timeout)
    }

    /// Attach service account credentials to the request when configured.
    async fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, OfferingSourceError> {
        if self.config.atlas.client_id.is_empty() {
            return Ok(request);
        }

        let mut token = self.token.lock().await;
        if let Some(current) = token.as_ref().filter(|t| t.expires_at > Instant::now()) {
            return Ok(request.bearer_auth(&current.value));
        }

        let url = self.base_url()?.join("api/oauth/token")?;
        debug!(%url, "requesting Atlas access token");
        let response = self
            .client
            .post(url)
            .basic_auth(
                &self.config.atlas.client_id,
                Some(&self.config.atlas.client_secret),
            )
            .header(ACCEPT, "application/json")
            .form(&[("grant_type", "client_credentials")])
            .timeout(self.timeout())
            .send()
            .await?;
        if !response.status().is_success() {
            warn!(status = %response.status(), "Atlas token request rejected");
            return Err(OfferingSourceError::Authentication(response.status()));
        }
        let issued: TokenResponse = response.json().await?;
        let current = AccessToken {
            value: issued.access_token,
            expires_at: Instant::now()
                + Duration::from_secs(issued.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN),
        };
        let request = request.bearer_auth(&current.value);
        *token = Some(current);
        Ok(request)
    }
}

#[async_trait]
impl OfferingBackend for AtlasBackend {
    /// Set config
    fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Fetch instance sizes of the provider from the project's provider regions
    #[tracing::instrument(level = "debug", skip(self))]
    async fn get_offering(&self, provider: CloudProvider) -> Result<Offering, OfferingSourceError> {
        let url = self.base_url()?.join(&format!(
            "api/atlas/v2/groups/{}/clusters/provider/regions",
            self.config.atlas.group_id
        ))?;
        debug!(%url, "fetching provider regions");

        let request = self
            .client
            .get(url)
            .query(&[("providers", provider.as_str())])
            .header(ACCEPT, ATLAS_MEDIA_TYPE)
            .timeout(self.timeout());
        let response = self.authorize(request).await?.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    debug!(%err, "failed to read Atlas error response body");
                    String::new()
                }
            };
            warn!(%status, "Atlas API request failed");
            return Err(OfferingSourceError::Status { status, body });
        }

        let page: ProviderRegionsPage = response.json().await?;
        page.results
            .into_iter()
            .find(|entry| {
                entry
                    .provider
                    .parse::<CloudProvider>()
                    .is_ok_and(|reported| reported == provider)
            })
            .ok_or_else(|| OfferingSourceError::ProviderMissing(provider.to_string()))?
            .try_into()
    }
}
