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

use crate::catalog::types::OfferingBackend;

/// Plugin manager allowing to pass custom offering source plugins implementing required trait
/// during the service start
#[derive(Clone, Debug, Default)]
pub struct PluginManager {
    /// Offering backend plugins
    offering_backends: HashMap<String, Box<dyn OfferingBackend>>,
}

impl PluginManager {
    /// Register offering backend
    pub fn register_offering_backend<S: AsRef<str>>(
        &mut self,
        name: S,
        plugin: Box<dyn OfferingBackend>,
    ) {
        self.offering_backends
            .insert(name.as_ref().to_string(), plugin);
    }

    /// Get registered offering backend
    #[allow(clippy::borrowed_box)]
    pub fn get_offering_backend<S: AsRef<str>>(
        &self,
        name: S,
    ) -> Option<&Box<dyn OfferingBackend>> {
        self.offering_backends.get(name.as_ref())
    }
}
