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
use serde_json::json;
use thiserror::Error;

use crate::catalog::error::CatalogProviderError;

/// Broker API operation errors
#[derive(Debug, Error)]
pub enum BrokerApiError {
    #[error("invalid service {service_id} or plan {plan_id}")]
    InvalidOffering { service_id: String, plan_id: String },

    #[error("offering source unavailable: {0}")]
    ServiceUnavailable(String),

    #[error(transparent)]
    CatalogError { source: CatalogProviderError },
}

impl BrokerApiError {
    /// Body in the format mandated by the service broker API
    fn body(&self, error: &str) -> Json<serde_json::Value> {
        Json(json!({"error": error, "description": self.to_string()}))
    }
}

impl IntoResponse for BrokerApiError {
    fn into_response(self) -> Response {
        match self {
            BrokerApiError::InvalidOffering { .. } => {
                (StatusCode::BAD_REQUEST, self.body("InvalidOffering")).into_response()
            }
            BrokerApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, self.body("ServiceUnavailable")).into_response()
            }
            BrokerApiError::CatalogError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.body("InternalError")).into_response()
            }
        }
    }
}

impl BrokerApiError {
    pub fn catalog(source: CatalogProviderError) -> Self {
        match source {
            CatalogProviderError::UnknownOffering {
                service_id,
                plan_id,
            } => Self::InvalidOffering {
                service_id,
                plan_id,
            },
            CatalogProviderError::UpstreamUnavailable { .. } => {
                Self::ServiceUnavailable(source.to_string())
            }
            _ => Self::CatalogError { source },
        }
    }
}
