// Copyright 2025 eraflo
//
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

//! # Eikona Agents
//!
//! The control plane of the asset pipeline. Agents schedule the CPU lanes
//! from `eikona-lanes` over async I/O: one agent loads and scales a single
//! image end to end, another runs a whole batch concurrently and resolves
//! exactly once behind a completion barrier.

pub mod load_agent;
