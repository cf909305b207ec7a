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

use crate::consts::NANPA_COUNTRY_CODE;
use crate::metadata::Metadata;
use fnv::FnvHashMap;
use regex_cache::{CachedRegex, CachedRegexBuilder, RegexCache};
use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

/// An immutable-after-load, concurrently readable collection of territory
/// metadata: region id -> `Metadata`, country calling code -> candidate
/// regions, plus the regex cache shared by every pattern compiled for the
/// metadata it holds.
///
/// Construction (`from_metadata`/`insert`) is the only mutating phase;
/// once built, a `Store` is read through shared references only, so it may
/// be handed to any number of threads without further coordination.
#[derive(Clone, Debug)]
pub struct Store {
    cache: Arc<Mutex<RegexCache>>,
    by_id: FnvHashMap<String, Arc<Metadata>>,
    by_code: FnvHashMap<u16, Vec<Arc<Metadata>>>,
    regions: FnvHashMap<u16, Vec<String>>,
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Store {
            cache: Arc::new(Mutex::new(RegexCache::new(100))),
            by_id: FnvHashMap::default(),
            by_code: FnvHashMap::default(),
            regions: FnvHashMap::default(),
        }
    }

    /// Build a store from a list of already-parsed territory metadata.
    /// This is the entry point a real metadata loader (not part of this
    /// kernel) is expected to use.
    pub fn from_metadata(data: Vec<Metadata>) -> Self {
        let mut store = Store::new();
        for meta in data {
            store.insert(meta);
        }
        store
    }

    /// Compile `pattern` against this store's shared regex cache. The
    /// cache is keyed by pattern string; compiling the same pattern twice
    /// (including across territories) reuses the existing entry.
    pub fn regex(&self, pattern: &str) -> CachedRegex {
        CachedRegexBuilder::new(self.cache.clone(), pattern)
            .ignore_whitespace(true)
            .build_unchecked()
    }

    /// Add one territory's metadata to the store.
    pub fn insert(&mut self, meta: Metadata) {
        let meta = Arc::new(meta);

        self.by_id.insert(meta.id.clone(), meta.clone());

        let by_code = self.by_code.entry(meta.country_code).or_insert_with(Vec::new);
        let regions = self.regions.entry(meta.country_code).or_insert_with(Vec::new);

        if meta.main_country_for_code {
            by_code.insert(0, meta.clone());
            regions.insert(0, meta.id.clone());
        } else {
            by_code.push(meta.clone());
            regions.push(meta.id.clone());
        }
    }

    /// Get a metadata entry by region id, e.g. `"NZ"`.
    pub fn by_id<Q>(&self, key: &Q) -> Option<&Metadata>
    where
        Q: ?Sized + Hash + Eq,
        String: Borrow<Q>,
    {
        self.by_id.get(key).map(AsRef::as_ref)
    }

    /// Get every metadata entry sharing a country calling code, main
    /// territory first.
    pub fn by_code(&self, key: u16) -> Option<Vec<&Metadata>> {
        self.by_code
            .get(&key)
            .map(|m| m.iter().map(AsRef::as_ref).collect())
    }

    /// Get all region ids sharing a country calling code, main territory
    /// first.
    pub fn region(&self, code: u16) -> Option<Vec<&str>> {
        self.regions.get(&code).map(|m| m.iter().map(AsRef::as_ref).collect())
    }

    /// The country calling code registered for a region, if any.
    pub fn country_code(&self, region: &str) -> Option<u16> {
        self.by_id(region).map(Metadata::country_code)
    }

    /// Every region sharing the North American Numbering Plan's country
    /// calling code (1).
    pub fn nanpa_regions(&self) -> Vec<&str> {
        self.region(NANPA_COUNTRY_CODE).unwrap_or_default()
    }

    pub fn is_nanpa_region(&self, region: &str) -> bool {
        self.nanpa_regions().iter().any(|&r| r == region)
    }
}
