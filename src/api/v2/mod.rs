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

//! Service broker API v2
//!
//! - Catalog
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

use crate::broker::ServiceState;
use crate::provider::Provider;

pub mod catalog;

pub(super) fn openapi_router<P>() -> OpenApiRouter<Arc<ServiceState<P>>>
where
    P: Provider + 'static,
{
    OpenApiRouter::new().merge(catalog::openapi_router())
}
