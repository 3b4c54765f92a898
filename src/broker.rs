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

use tracing::info;

use crate::config::Config;
use crate::error::BrokerError;
use crate::provider::Provider;

pub struct ServiceState<P> {
    pub config: Config,
    pub provider: P,
}

impl<P> ServiceState<P>
where
    P: Provider,
{
    pub fn new(cfg: Config, provider: P) -> Result<Self, BrokerError> {
        Ok(Self {
            config: cfg,
            provider,
        })
    }

    pub async fn terminate(&self) -> Result<(), BrokerError> {
        info!("Terminating broker");
        Ok(())
    }
}
