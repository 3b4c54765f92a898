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
//! Catalog generation and offering resolution through the public provider API.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use atlas_service_broker::catalog::CatalogApi;
use atlas_service_broker::catalog::backends::fake::FakeBackend;
use atlas_service_broker::catalog::error::CatalogProviderError;
use atlas_service_broker::catalog::ids;
use atlas_service_broker::catalog::types::{CloudProvider, Offering};
use atlas_service_broker::config::Config;
use atlas_service_broker::plugin_manager::PluginManager;
use atlas_service_broker::provider::{Provider, ProviderApi};

fn get_provider(backend: &FakeBackend) -> ProviderApi {
    let mut config = Config::default();
    config.catalog.driver = "memory".into();
    let mut plugin_manager = PluginManager::default();
    plugin_manager.register_offering_backend("memory", Box::new(backend.clone()));
    ProviderApi::new(config, plugin_manager).unwrap()
}

/// AWS offers M10 and M20, GCP only M10, AZURE nothing.
fn get_backend() -> FakeBackend {
    FakeBackend::default()
        .with_offering(CloudProvider::Aws, Offering::new("AWS", ["M10", "M20"]))
        .with_offering(CloudProvider::Gcp, Offering::new("GCP", ["M10"]))
        .with_offering(CloudProvider::Azure, Offering::new("AZURE", Vec::<&str>::new()))
}

#[tokio::test]
async fn test_same_size_on_two_providers() {
    let backend = get_backend();
    let provider = get_provider(&backend);
    let catalog = provider.get_catalog_provider();

    let services = catalog.list_marketplace_offerings().await.unwrap();
    assert_eq!(3, services.len());
    assert!(services[2].plans.is_empty());

    let aws_m10 = &services[0].plans[0];
    let gcp_m10 = &services[1].plans[0];
    assert_eq!(aws_m10.name, gcp_m10.name);
    assert_ne!(aws_m10.id, gcp_m10.id);

    let (resolved_provider, instance_size) = catalog
        .resolve_offering(&services[1].id, &gcp_m10.id)
        .await
        .unwrap();
    assert_eq!(CloudProvider::Gcp, resolved_provider);
    assert_eq!("M10", instance_size.name);
}

#[tokio::test]
async fn test_ids_match_codec() {
    let provider = get_provider(&get_backend());
    let services = provider
        .get_catalog_provider()
        .list_marketplace_offerings()
        .await
        .unwrap();

    for (cloud, service) in CloudProvider::ALL.into_iter().zip(&services) {
        assert_eq!(ids::service_id(cloud), service.id);
        for plan in &service.plans {
            assert_eq!(ids::plan_id(cloud, &plan.name).unwrap(), plan.id);
        }
    }
}

#[tokio::test]
async fn test_fail_fast_discards_partial_catalog() {
    let backend = get_backend();
    backend.fail(CloudProvider::Gcp, "503 from upstream");
    let provider = get_provider(&backend);

    let result = provider
        .get_catalog_provider()
        .list_marketplace_offerings()
        .await;
    assert!(matches!(
        result,
        Err(CatalogProviderError::UpstreamUnavailable { .. })
    ));
    assert_eq!(
        vec![CloudProvider::Aws, CloudProvider::Gcp],
        backend.requests()
    );

    backend.recover(CloudProvider::Gcp);
    assert!(
        provider
            .get_catalog_provider()
            .list_marketplace_offerings()
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_bogus_ids() {
    let provider = get_provider(&get_backend());

    assert!(matches!(
        provider
            .get_catalog_provider()
            .resolve_offering("bogus-service", "bogus-plan")
            .await,
        Err(CatalogProviderError::UnknownOffering { .. })
    ));
}

#[tokio::test]
async fn test_provider_dropped_upstream() {
    let backend = get_backend();
    let provider = get_provider(&backend);
    let services = provider
        .get_catalog_provider()
        .list_marketplace_offerings()
        .await
        .unwrap();
    let gcp = &services[1];

    backend.remove_offering(CloudProvider::Gcp);

    assert!(matches!(
        provider
            .get_catalog_provider()
            .resolve_offering(&gcp.id, &gcp.plans[0].id)
            .await,
        Err(CatalogProviderError::UnknownOffering { .. })
    ));
    // sizes of the remaining providers still resolve
    let aws = &services[0];
    assert!(
        provider
            .get_catalog_provider()
            .resolve_offering(&aws.id, &aws.plans[0].id)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_atlas_driver() {
    let server = MockServer::start().await;
    for (name, sizes) in [
        ("AWS", json!([{"name": "M10"}, {"name": "M20"}])),
        ("GCP", json!([{"name": "M10"}])),
        ("AZURE", json!([{"name": "M30"}])),
    ] {
        Mock::given(method("GET"))
            .and(path("/api/atlas/v2/groups/grp/clusters/provider/regions"))
            .and(query_param("providers", name))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"provider": name, "instanceSizes": sizes}],
                "totalCount": 1
            })))
            .mount(&server)
            .await;
    }

    let mut config = Config::default();
    config.atlas.base_url = server.uri();
    config.atlas.group_id = "grp".into();
    let provider = ProviderApi::new(config, PluginManager::default()).unwrap();
    let catalog = provider.get_catalog_provider();

    let services = catalog.list_marketplace_offerings().await.unwrap();
    let plans: Vec<&str> = services
        .iter()
        .flat_map(|srv| srv.plans.iter().map(|plan| plan.id.as_str()))
        .collect();
    assert_eq!(
        vec![
            "aosb-cluster-plan-aws-m10",
            "aosb-cluster-plan-aws-m20",
            "aosb-cluster-plan-gcp-m10",
            "aosb-cluster-plan-azure-m30",
        ],
        plans
    );

    let (cloud, instance_size) = catalog
        .resolve_offering("aosb-cluster-service-azure", "aosb-cluster-plan-azure-m30")
        .await
        .unwrap();
    assert_eq!(CloudProvider::Azure, cloud);
    assert_eq!("M30", instance_size.name);
}
