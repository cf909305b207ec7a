// Copyright (C) 2017 1aim GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Per-territory phone number metadata: the data the kernel is driven by.
//!
//! The metadata source itself — parsing an on-disk blob into these types —
//! is an external collaborator. This module only defines the shapes and the
//! immutable, concurrently-readable store that holds them once loaded.

mod descriptor;
pub use self::descriptor::Descriptor;

mod format;
pub use self::format::Format;

mod metadata;
pub use self::metadata::{Descriptors, Metadata};

mod store;
pub use self::store::Store;

pub mod builtin;
pub use self::builtin::DATABASE;
