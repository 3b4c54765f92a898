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

use reqwest::StatusCode;
use thiserror::Error;

use crate::catalog::types::{InstanceSizeBuilderError, OfferingBuilderError};

#[derive(Error, Debug)]
pub enum OfferingSourceError {
    #[error("request to the Atlas API failed")]
    Request {
        #[from]
        source: reqwest::Error,
    },

    #[error("invalid Atlas API url")]
    Url {
        #[from]
        source: url::ParseError,
    },

    #[error("Atlas API responded with {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("authentication against the Atlas API failed with {0}")]
    Authentication(StatusCode),

    #[error("offering of provider {0} not reported")]
    ProviderMissing(String),

    #[error("{0}")]
    Unavailable(String),

    #[error("building offering data")]
    OfferingBuilder {
        #[from]
        source: OfferingBuilderError,
    },

    #[error("building instance size data")]
    InstanceSizeBuilder {
        #[from]
        source: InstanceSizeBuilderError,
    },
}
