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

use config::{Environment, File, FileFormat};
use eyre::Report;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Config {
    /// Broker API listener
    #[serde(default)]
    pub api: ApiSection,

    /// Offering source selection
    #[serde(default)]
    pub catalog: CatalogSection,

    /// Atlas Admin API access
    #[serde(default)]
    pub atlas: AtlasSection,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSection {
    /// Address the broker API listens on
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogSection {
    #[serde(default = "default_catalog_driver")]
    pub driver: String,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            driver: default_catalog_driver(),
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct AtlasSection {
    #[serde(default = "default_atlas_base_url")]
    pub base_url: String,

    /// Atlas project the broker provisions clusters in
    #[serde(default)]
    pub group_id: String,

    /// Service account client ID. Requests are sent unauthenticated when empty.
    #[serde(default)]
    pub client_id: String,

    #[serde(default)]
    pub client_secret: String,

    /// Upstream request timeout in seconds
    #[serde(default = "default_atlas_timeout")]
    pub timeout: u64,
}

impl Default for AtlasSection {
    fn default() -> Self {
        Self {
            base_url: default_atlas_base_url(),
            group_id: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            timeout: default_atlas_timeout(),
        }
    }
}

impl fmt::Debug for AtlasSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtlasSection")
            .field("base_url", &self.base_url)
            .field("group_id", &self.group_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn default_bind_address() -> String {
    "127.0.0.1:4000".into()
}

fn default_catalog_driver() -> String {
    "atlas".into()
}

fn default_atlas_base_url() -> String {
    "https://cloud.mongodb.com".into()
}

fn default_atlas_timeout() -> u64 {
    30
}

impl Config {
    pub fn new(path: PathBuf) -> Result<Self, Report> {
        let mut builder = config::Config::builder();

        if std::path::Path::new(&path).is_file() {
            builder = builder.add_source(File::from(path).format(FileFormat::Ini));
        }
        builder = builder.add_source(
            Environment::with_prefix("ATLAS_BROKER")
                .prefix_separator("_")
                .separator("__"),
        );

        Ok(builder.build()?.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let sot = Config::new(PathBuf::from("/nonexistent/broker.conf")).unwrap();
        assert_eq!("127.0.0.1:4000", sot.api.bind_address);
        assert_eq!("atlas", sot.catalog.driver);
        assert_eq!("https://cloud.mongodb.com", sot.atlas.base_url);
        assert_eq!(30, sot.atlas.timeout);
    }

    #[test]
    fn test_ini() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[api]
bind_address = 0.0.0.0:8080

[catalog]
driver = fake

[atlas]
base_url = http://localhost:9000
group_id = 5e2211c17a3e5a48f5497de3
client_id = mdb_sa_id
client_secret = s3cr3t
timeout = 5
"#
        )
        .unwrap();
        let sot = Config::new(file.path().into()).unwrap();
        assert_eq!("0.0.0.0:8080", sot.api.bind_address);
        assert_eq!("fake", sot.catalog.driver);
        assert_eq!("http://localhost:9000", sot.atlas.base_url);
        assert_eq!("5e2211c17a3e5a48f5497de3", sot.atlas.group_id);
        assert_eq!(5, sot.atlas.timeout);
        assert!(!format!("{:?}", sot.atlas).contains("s3cr3t"));
    }
}
