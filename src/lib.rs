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

//! Open Service Broker exposing MongoDB Atlas clusters.
//!
//! The catalog of services and plans is generated from the instance sizes
//! Atlas currently offers per cloud provider, see [`catalog`].

pub mod api;
pub mod broker;
pub mod catalog;
pub mod config;
pub mod error;
pub mod plugin_manager;
pub mod provider;

#[cfg(test)]
mod tests;
