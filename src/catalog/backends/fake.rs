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

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::backends::error::OfferingSourceError;
use crate::catalog::types::*;
use crate::config::Config;

/// In-memory offering source.
///
/// Clones share the same offerings, so a handle kept by the caller can change
/// what the catalog sees after the backend has been handed to a provider.
#[derive(Clone, Debug, Default)]
pub struct FakeBackend {
    pub config: Config,
    state: Arc<RwLock<FakeState>>,
}

#[derive(Debug, Default)]
struct FakeState {
    offerings: HashMap<CloudProvider, Offering>,
    failures: HashMap<CloudProvider, String>,
    requests: Vec<CloudProvider>,
}

impl FakeBackend {
    pub fn with_offering(self, provider: CloudProvider, offering: Offering) -> Self {
        self.set_offering(provider, offering);
        self
    }

    pub fn set_offering(&self, provider: CloudProvider, offering: Offering) {
        self.write().offerings.insert(provider, offering);
    }

    pub fn remove_offering(&self, provider: CloudProvider) {
        self.write().offerings.remove(&provider);
    }

    /// Make every following request for the provider fail
    pub fn fail<S: Into<String>>(&self, provider: CloudProvider, message: S) {
        self.write().failures.insert(provider, message.into());
    }

    pub fn recover(&self, provider: CloudProvider) {
        self.write().failures.remove(&provider);
    }

    /// Providers requested so far, in request order
    pub fn requests(&self) -> Vec<CloudProvider> {
        self.read().requests.clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, FakeState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FakeState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl OfferingBackend for FakeBackend {
    /// Set config
    fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    async fn get_offering(&self, provider: CloudProvider) -> Result<Offering, OfferingSourceError> {
        let mut state = self.write();
        state.requests.push(provider);
        if let Some(message) = state.failures.get(&provider) {
            return Err(OfferingSourceError::Unavailable(message.clone()));
        }
        state
            .offerings
            .get(&provider)
            .cloned()
            .ok_or_else(|| OfferingSourceError::ProviderMissing(provider.to_string()))
    }
}
