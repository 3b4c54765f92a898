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

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::types;

/// Service offered by the broker
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct Service {
    /// Service ID. Stable across catalog fetches.
    pub id: String,
    /// CLI friendly service name
    pub name: String,
    /// Service description
    pub description: String,
    /// Whether instances of the service can be bound
    pub bindable: bool,
    pub instances_retrievable: bool,
    pub bindings_retrievable: bool,
    /// Whether instances can change their plan
    pub plan_updateable: bool,
    /// Plans of the service
    pub plans: Vec<Plan>,
}

/// Plan of a service
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct Plan {
    /// Plan ID. Stable across catalog fetches.
    pub id: String,
    /// Instance size name
    pub name: String,
    pub description: String,
}

/// Service catalog
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize, ToSchema)]
pub struct Catalog {
    /// Collection of services
    pub services: Vec<Service>,
}

impl From<types::MarketplacePlan> for Plan {
    fn from(value: types::MarketplacePlan) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
        }
    }
}

impl From<types::MarketplaceService> for Service {
    fn from(value: types::MarketplaceService) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            bindable: value.bindable,
            instances_retrievable: value.instances_retrievable,
            bindings_retrievable: value.bindings_retrievable,
            plan_updateable: value.plan_updateable,
            plans: value.plans.into_iter().map(Plan::from).collect(),
        }
    }
}

impl From<Vec<types::MarketplaceService>> for Catalog {
    fn from(value: Vec<types::MarketplaceService>) -> Self {
        let objects: Vec<Service> = value.into_iter().map(Service::from).collect();
        Self { services: objects }
    }
}

impl IntoResponse for Catalog {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
