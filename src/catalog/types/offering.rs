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

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::error::CatalogProviderError;

/// Cloud providers clusters may be provisioned on.
///
/// The order of [`CloudProvider::ALL`] is the order services appear in the
/// catalog.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum CloudProvider {
    #[serde(rename = "AWS")]
    Aws,
    #[serde(rename = "GCP")]
    Gcp,
    #[serde(rename = "AZURE")]
    Azure,
}

impl CloudProvider {
    pub const ALL: [CloudProvider; 3] = [Self::Aws, Self::Gcp, Self::Azure];

    /// Canonical provider name as used by the Atlas API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "AWS",
            Self::Gcp => "GCP",
            Self::Azure => "AZURE",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudProvider {
    type Err = CatalogProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogProviderError::UnsupportedProvider(s.into()))
    }
}

/// Offering of a single cloud provider as currently reported upstream.
#[derive(Builder, Clone, Debug, Deserialize, PartialEq, Serialize)]
#[builder(setter(into))]
pub struct Offering {
    /// Provider name as reported by the offering source
    pub name: String,

    /// Instance sizes in upstream order
    #[builder(default)]
    pub instance_sizes: Vec<InstanceSize>,
}

#[derive(Builder, Clone, Debug, Deserialize, PartialEq, Serialize)]
#[builder(setter(into))]
pub struct InstanceSize {
    /// Instance size name, e.g. `M10`. Unique within its provider only.
    pub name: String,

    #[builder(default)]
    pub available_regions: Vec<String>,
}

impl Offering {
    pub fn new<N: Into<String>, I: IntoIterator<Item = S>, S: Into<String>>(
        name: N,
        instance_sizes: I,
    ) -> Self {
        Self {
            name: name.into(),
            instance_sizes: instance_sizes
                .into_iter()
                .map(|size| InstanceSize {
                    name: size.into(),
                    available_regions: Vec::new(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_str() {
        assert_eq!(CloudProvider::Aws, "AWS".parse().unwrap());
        assert_eq!(CloudProvider::Gcp, "gcp".parse().unwrap());
        assert_eq!(CloudProvider::Azure, "Azure".parse().unwrap());
        match "TENCENT".parse::<CloudProvider>() {
            Err(CatalogProviderError::UnsupportedProvider(name)) => assert_eq!("TENCENT", name),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_provider_serde() {
        assert_eq!(
            "\"AZURE\"",
            serde_json::to_string(&CloudProvider::Azure).unwrap()
        );
        assert_eq!(
            CloudProvider::Gcp,
            serde_json::from_str::<CloudProvider>("\"GCP\"").unwrap()
        );
    }

    #[test]
    fn test_offering_builder() {
        let sot = OfferingBuilder::default()
            .name("AWS")
            .instance_sizes(vec![
                InstanceSizeBuilder::default()
                    .name("M10")
                    .available_regions(vec!["US_EAST_1".to_string()])
                    .build()
                    .unwrap(),
            ])
            .build()
            .unwrap();
        assert_eq!("AWS", sot.name);
        assert_eq!(vec!["US_EAST_1".to_string()], sot.instance_sizes[0].available_regions);
        assert!(OfferingBuilder::default().build().is_err());
    }
}
