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

use serde::{Deserialize, Serialize};

/// Catalog entry for a single cloud provider.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MarketplaceService {
    pub id: String,

    /// CLI friendly name shown in the marketplace
    pub name: String,

    pub description: String,

    pub bindable: bool,

    pub instances_retrievable: bool,

    pub bindings_retrievable: bool,

    pub plan_updateable: bool,

    pub plans: Vec<MarketplacePlan>,
}

/// Catalog entry for a single instance size.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MarketplacePlan {
    pub id: String,
    pub name: String,
    pub description: String,
}
