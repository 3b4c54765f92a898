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

#[cfg(test)]
use crate::catalog::MockCatalogProvider;
use crate::catalog::{CatalogApi, CatalogProvider};
use crate::config::Config;
use crate::error::BrokerError;
use crate::plugin_manager::PluginManager;

pub trait Provider: Clone + Send + Sync {
    fn get_catalog_provider(&self) -> &impl CatalogApi;
}

#[derive(Clone)]
pub struct ProviderApi {
    pub config: Config,
    catalog: CatalogProvider,
}

impl ProviderApi {
    pub fn new(cfg: Config, plugin_manager: PluginManager) -> Result<Self, BrokerError> {
        let catalog_provider = CatalogProvider::new(&cfg, &plugin_manager)?;

        Ok(Self {
            config: cfg,
            catalog: catalog_provider,
        })
    }
}

impl Provider for ProviderApi {
    fn get_catalog_provider(&self) -> &impl CatalogApi {
        &self.catalog
    }
}

#[cfg(test)]
#[derive(Clone)]
pub struct FakeProviderApi {
    pub config: Config,
    catalog: MockCatalogProvider,
}

#[cfg(test)]
impl FakeProviderApi {
    pub fn new(cfg: Config, catalog: MockCatalogProvider) -> Result<Self, BrokerError> {
        Ok(Self {
            config: cfg,
            catalog,
        })
    }
}

#[cfg(test)]
impl Provider for FakeProviderApi {
    fn get_catalog_provider(&self) -> &impl CatalogApi {
        &self.catalog
    }
}
