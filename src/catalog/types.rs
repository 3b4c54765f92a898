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

pub mod marketplace;
pub mod offering;

use async_trait::async_trait;
use dyn_clone::DynClone;

use crate::catalog::backends::error::OfferingSourceError;
use crate::config::Config;

pub use crate::catalog::types::marketplace::{MarketplacePlan, MarketplaceService};
pub use crate::catalog::types::offering::{
    CloudProvider, InstanceSize, InstanceSizeBuilder, InstanceSizeBuilderError, Offering,
    OfferingBuilder, OfferingBuilderError,
};

/// Source of the currently purchasable offerings of a cloud provider.
#[async_trait]
pub trait OfferingBackend: DynClone + Send + Sync + std::fmt::Debug {
    /// Set config
    fn set_config(&mut self, config: Config);

    /// Fetch the current offering of a single cloud provider
    async fn get_offering(&self, provider: CloudProvider) -> Result<Offering, OfferingSourceError>;
}

dyn_clone::clone_trait_object!(OfferingBackend);
