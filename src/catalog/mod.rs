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

//! Service catalog.
//!
//! Services and plans are generated from the offerings the backend currently
//! reports: one service per [`CloudProvider`], one plan per instance size.
//! Nothing is cached, every call queries the backend again.

use async_trait::async_trait;
#[cfg(test)]
use mockall::mock;

pub mod backends;
pub mod error;
pub mod ids;
mod marketplace;
pub mod types;

use crate::catalog::backends::atlas::AtlasBackend;
use crate::catalog::backends::error::OfferingSourceError;
use crate::catalog::error::CatalogProviderError;
use crate::catalog::types::{
    CloudProvider, InstanceSize, MarketplaceService, OfferingBackend,
};
use crate::config::Config;
use crate::plugin_manager::PluginManager;

#[derive(Clone, Debug)]
pub struct CatalogProvider {
    backend_driver: Box<dyn OfferingBackend>,
}

#[async_trait]
pub trait CatalogApi: Send + Sync + Clone {
    async fn list_marketplace_offerings(
        &self,
    ) -> Result<Vec<MarketplaceService>, CatalogProviderError>;

    async fn resolve_offering<'a>(
        &self,
        service_id: &'a str,
        plan_id: &'a str,
    ) -> Result<(CloudProvider, InstanceSize), CatalogProviderError>;
}

#[cfg(test)]
mock! {
    pub CatalogProvider {
        pub fn new(cfg: &Config, plugin_manager: &PluginManager) -> Result<Self, CatalogProviderError>;
    }

    #[async_trait]
    impl CatalogApi for CatalogProvider {
        async fn list_marketplace_offerings(
            &self,
        ) -> Result<Vec<MarketplaceService>, CatalogProviderError>;

        async fn resolve_offering<'a>(
            &self,
            service_id: &'a str,
            plan_id: &'a str,
        ) -> Result<(CloudProvider, InstanceSize), CatalogProviderError>;
    }

    impl Clone for CatalogProvider {
        fn clone(&self) -> Self;
    }
}

impl CatalogProvider {
    pub fn new(
        config: &Config,
        plugin_manager: &PluginManager,
    ) -> Result<Self, CatalogProviderError> {
        let mut backend_driver = if let Some(driver) =
            plugin_manager.get_offering_backend(config.catalog.driver.clone())
        {
            driver.clone()
        } else {
            match config.catalog.driver.as_str() {
                "atlas" => Box::new(AtlasBackend::default()),
                _ => {
                    return Err(CatalogProviderError::UnsupportedDriver(
                        config.catalog.driver.clone(),
                    ));
                }
            }
        };
        backend_driver.set_config(config.clone());
        Ok(Self { backend_driver })
    }
}

#[async_trait]
impl CatalogApi for CatalogProvider {
    /// Build the service catalog.
    ///
    /// Providers are queried one after another in [`CloudProvider::ALL`] order.
    /// The first failure aborts the build and nothing gathered so far is
    /// returned.
    #[tracing::instrument(level = "info", skip(self))]
    async fn list_marketplace_offerings(
        &self,
    ) -> Result<Vec<MarketplaceService>, CatalogProviderError> {
        let mut services = Vec::with_capacity(CloudProvider::ALL.len());
        for provider in CloudProvider::ALL {
            let offering = self.backend_driver.get_offering(provider).await?;
            services.push(marketplace::service_for_offering(provider, &offering)?);
        }
        Ok(services)
    }

    /// Find the provider and instance size matching service and plan ID.
    ///
    /// Only the provider owning the service ID is queried, so a failure of
    /// any other provider does not affect the result. IDs of sizes or
    /// providers no longer offered end in
    /// [`CatalogProviderError::UnknownOffering`].
    #[tracing::instrument(level = "info", skip(self))]
    async fn resolve_offering<'a>(
        &self,
        service_id: &'a str,
        plan_id: &'a str,
    ) -> Result<(CloudProvider, InstanceSize), CatalogProviderError> {
        for provider in CloudProvider::ALL {
            if ids::service_id(provider) != service_id {
                continue;
            }
            let offering = match self.backend_driver.get_offering(provider).await {
                Ok(offering) => offering,
                Err(OfferingSourceError::ProviderMissing(_)) => break,
                Err(err) => return Err(err.into()),
            };
            if let Some(instance_size) =
                marketplace::find_instance_size(provider, offering, plan_id)?
            {
                return Ok((provider, instance_size));
            }
        }
        Err(CatalogProviderError::unknown_offering(service_id, plan_id))
    }
}
