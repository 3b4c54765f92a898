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

use thiserror::Error;

use crate::catalog::backends::error::*;

#[derive(Error, Debug)]
pub enum CatalogProviderError {
    /// Unsupported driver
    #[error("unsupported driver {0}")]
    UnsupportedDriver(String),

    #[error("unsupported cloud provider {0}")]
    UnsupportedProvider(String),

    /// Offering source failed. Transient from the consumer point of view.
    #[error("offering source unavailable: {source}")]
    UpstreamUnavailable {
        #[from]
        source: OfferingSourceError,
    },

    /// Service and plan ID do not match anything currently offered
    #[error("no offering matches service {service_id} and plan {plan_id}")]
    UnknownOffering { service_id: String, plan_id: String },

    #[error(transparent)]
    Identifier {
        #[from]
        source: IdentifierError,
    },

    /// Two instance sizes of one provider map to the same plan ID
    #[error("instance sizes {first:?} and {second:?} of {provider} map to the same plan {plan_id}")]
    AmbiguousInstanceSize {
        provider: String,
        first: String,
        second: String,
        plan_id: String,
    },
}

impl CatalogProviderError {
    pub fn unknown_offering<S: AsRef<str>, P: AsRef<str>>(service_id: S, plan_id: P) -> Self {
        Self::UnknownOffering {
            service_id: service_id.as_ref().into(),
            plan_id: plan_id.as_ref().into(),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum IdentifierError {
    #[error("instance size name must not be empty")]
    EmptyName,

    #[error("instance size name {name:?} contains reserved character {character:?}")]
    ReservedCharacter { name: String, character: char },
}
