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

//! Service and plan identifiers.
//!
//! Identifiers are persisted by platform consumers, so the format must stay
//! byte-stable: `aosb-cluster-service-<provider>` and
//! `aosb-cluster-plan-<provider>-<instance size>`, both components lower-cased.
//! Nothing parses them back; resolution recomputes them from current offerings
//! and compares.

use crate::catalog::error::IdentifierError;
use crate::catalog::types::CloudProvider;

/// Prepended to every service and plan ID.
pub const ID_PREFIX: &str = "aosb-cluster";

/// Joins ID components. Never part of a provider name and rejected in
/// instance size names.
pub const SEPARATOR: char = '-';

/// Globally unique ID of the service representing a cloud provider.
pub fn service_id(provider: CloudProvider) -> String {
    format!(
        "{ID_PREFIX}{SEPARATOR}service{SEPARATOR}{}",
        provider.as_str().to_lowercase()
    )
}

/// Globally unique ID of the plan representing an instance size of a cloud provider.
pub fn plan_id<S: AsRef<str>>(
    provider: CloudProvider,
    instance_size: S,
) -> Result<String, IdentifierError> {
    let instance_size = validate_component(instance_size.as_ref())?;
    Ok(format!(
        "{ID_PREFIX}{SEPARATOR}plan{SEPARATOR}{}{SEPARATOR}{}",
        provider.as_str().to_lowercase(),
        instance_size.to_lowercase()
    ))
}

/// Marketplace name of the service, e.g. `mongodb-atlas-aws`.
pub fn catalog_name(provider: CloudProvider) -> String {
    format!("mongodb-atlas-{}", provider.as_str().to_lowercase())
}

fn validate_component(name: &str) -> Result<&str, IdentifierError> {
    if name.is_empty() {
        return Err(IdentifierError::EmptyName);
    }
    if let Some(character) = name
        .chars()
        .find(|c| *c == SEPARATOR || c.is_whitespace() || c.is_control())
    {
        return Err(IdentifierError::ReservedCharacter {
            name: name.into(),
            character,
        });
    }
    Ok(name)
}
