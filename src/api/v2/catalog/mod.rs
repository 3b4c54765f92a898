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

use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::api::error::BrokerApiError;
use crate::broker::ServiceState;
use crate::catalog::CatalogApi;
use crate::provider::Provider;
use types::Catalog;

pub mod types;

pub(super) fn openapi_router<P>() -> OpenApiRouter<Arc<ServiceState<P>>>
where
    P: Provider + 'static,
{
    OpenApiRouter::new().routes(routes!(show))
}

/// Get the service catalog
#[utoipa::path(
    get,
    path = "/catalog",
    description = "Services and plans currently offered by the broker",
    responses(
        (status = OK, description = "Service catalog", body = Catalog),
        (status = 503, description = "Atlas API unavailable"),
        (status = 500, description = "Internal error")
    ),
    tag="catalog"
)]
#[tracing::instrument(name = "api::catalog_get", level = "debug", skip(state))]
async fn show<P>(
    State(state): State<Arc<ServiceState<P>>>,
) -> Result<impl IntoResponse, BrokerApiError>
where
    P: Provider,
{
    let catalog: Catalog = state
        .provider
        .get_catalog_provider()
        .list_marketplace_offerings()
        .await
        .map_err(BrokerApiError::catalog)?
        .into();
    Ok(catalog)
}
