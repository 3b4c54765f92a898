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

use std::collections::HashMap;

use crate::catalog::error::CatalogProviderError;
use crate::catalog::ids;
use crate::catalog::types::*;

/// Convert the current offering of a provider into its marketplace service.
pub(super) fn service_for_offering(
    provider: CloudProvider,
    offering: &Offering,
) -> Result<MarketplaceService, CatalogProviderError> {
    let plans = plan_ids(provider, offering)?
        .into_iter()
        .map(|(id, instance_size)| MarketplacePlan {
            id,
            name: instance_size.name.clone(),
            description: format!("Instance size \"{}\"", instance_size.name),
        })
        .collect();

    Ok(MarketplaceService {
        id: ids::service_id(provider),
        name: ids::catalog_name(provider),
        description: format!("Atlas cluster hosted on \"{}\"", offering.name),
        bindable: true,
        instances_retrievable: false,
        bindings_retrievable: false,
        plan_updateable: true,
        plans,
    })
}

/// Find the instance size of the offering whose plan ID matches.
pub(super) fn find_instance_size(
    provider: CloudProvider,
    offering: Offering,
    plan_id: &str,
) -> Result<Option<InstanceSize>, CatalogProviderError> {
    let position = plan_ids(provider, &offering)?
        .into_iter()
        .position(|(id, _)| id == plan_id);
    Ok(position.and_then(|idx| offering.instance_sizes.into_iter().nth(idx)))
}

/// Plan IDs of all instance sizes in upstream order.
///
/// Fails when two sizes fold onto the same ID since neither of them could be
/// resolved unambiguously afterwards.
fn plan_ids(
    provider: CloudProvider,
    offering: &Offering,
) -> Result<Vec<(String, &InstanceSize)>, CatalogProviderError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut result = Vec::with_capacity(offering.instance_sizes.len());
    for instance_size in &offering.instance_sizes {
        let id = ids::plan_id(provider, &instance_size.name)?;
        if let Some(first) = seen.insert(id.clone(), &instance_size.name) {
            return Err(CatalogProviderError::AmbiguousInstanceSize {
                provider: provider.to_string(),
                first: first.into(),
                second: instance_size.name.clone(),
                plan_id: id,
            });
        }
        result.push((id, instance_size));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_for_offering() {
        let sot =
            service_for_offering(CloudProvider::Aws, &Offering::new("AWS", ["M10", "M20"])).unwrap();
        assert_eq!(
            MarketplaceService {
                id: "aosb-cluster-service-aws".into(),
                name: "mongodb-atlas-aws".into(),
                description: "Atlas cluster hosted on \"AWS\"".into(),
                bindable: true,
                instances_retrievable: false,
                bindings_retrievable: false,
                plan_updateable: true,
                plans: vec![
                    MarketplacePlan {
                        id: "aosb-cluster-plan-aws-m10".into(),
                        name: "M10".into(),
                        description: "Instance size \"M10\"".into(),
                    },
                    MarketplacePlan {
                        id: "aosb-cluster-plan-aws-m20".into(),
                        name: "M20".into(),
                        description: "Instance size \"M20\"".into(),
                    },
                ],
            },
            sot
        );
    }

    #[test]
    fn test_service_without_sizes() {
        let sot = service_for_offering(
            CloudProvider::Azure,
            &Offering::new("AZURE", Vec::<&str>::new()),
        )
        .unwrap();
        assert!(sot.plans.is_empty());
    }

    #[test]
    fn test_plan_order_follows_upstream() {
        let sot = service_for_offering(
            CloudProvider::Gcp,
            &Offering::new("GCP", ["M30", "M10", "M20"]),
        )
        .unwrap();
        let names: Vec<&str> = sot.plans.iter().map(|plan| plan.name.as_str()).collect();
        assert_eq!(vec!["M30", "M10", "M20"], names);
    }

    #[test]
    fn test_case_variants_are_ambiguous() {
        match service_for_offering(CloudProvider::Aws, &Offering::new("AWS", ["M10", "m10"])) {
            Err(CatalogProviderError::AmbiguousInstanceSize {
                first,
                second,
                plan_id,
                ..
            }) => {
                assert_eq!("M10", first);
                assert_eq!("m10", second);
                assert_eq!("aosb-cluster-plan-aws-m10", plan_id);
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert!(
            find_instance_size(
                CloudProvider::Aws,
                Offering::new("AWS", ["M10", "m10"]),
                "aosb-cluster-plan-aws-m10"
            )
            .is_err()
        );
    }

    #[test]
    fn test_invalid_size_name() {
        assert!(matches!(
            service_for_offering(CloudProvider::Aws, &Offering::new("AWS", ["M10", "M-20"])),
            Err(CatalogProviderError::Identifier { .. })
        ));
    }

    #[test]
    fn test_find_instance_size() {
        let offering = Offering::new("GCP", ["M10", "M20"]);
        assert_eq!(
            Some("M20".to_string()),
            find_instance_size(CloudProvider::Gcp, offering.clone(), "aosb-cluster-plan-gcp-m20")
                .unwrap()
                .map(|size| size.name)
        );
        assert_eq!(
            None,
            find_instance_size(CloudProvider::Gcp, offering, "aosb-cluster-plan-aws-m20").unwrap()
        );
    }
}
