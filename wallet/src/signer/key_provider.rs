// Copyright (c) 2021-2025 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{collections::BTreeMap, sync::Arc};

use zeroize::Zeroizing;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyProviderError {
    #[error("No key for account {account}, index {index}, external {external}")]
    KeyNotFound {
        account: u32,
        index: u32,
        external: bool,
    },
    #[error("Key storage error: {0}")]
    Storage(String),
}

/// Access to the wallet's private keys by derivation coordinates.
pub trait PrivateKeyProvider {
    fn private_key_data(
        &self,
        account: u32,
        index: u32,
        external: bool,
    ) -> Result<Zeroizing<Vec<u8>>, KeyProviderError>;
}

impl<T: PrivateKeyProvider + ?Sized> PrivateKeyProvider for Arc<T> {
    fn private_key_data(
        &self,
        account: u32,
        index: u32,
        external: bool,
    ) -> Result<Zeroizing<Vec<u8>>, KeyProviderError> {
        self.as_ref().private_key_data(account, index, external)
    }
}

/// Raw secret keys held in memory, for callers that already have them.
#[derive(Default)]
pub struct InMemoryKeyProvider {
    keys: BTreeMap<(u32, u32, bool), Zeroizing<Vec<u8>>>,
}

impl InMemoryKeyProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, account: u32, index: u32, external: bool, secret: Vec<u8>) {
        self.keys.insert((account, index, external), Zeroizing::new(secret));
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl PrivateKeyProvider for InMemoryKeyProvider {
    fn private_key_data(
        &self,
        account: u32,
        index: u32,
        external: bool,
    ) -> Result<Zeroizing<Vec<u8>>, KeyProviderError> {
        self.keys
            .get(&(account, index, external))
            .cloned()
            .ok_or(KeyProviderError::KeyNotFound {
                account,
                index,
                external,
            })
    }
}

impl std::fmt::Debug for InMemoryKeyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryKeyProvider").field("keys", &self.keys.len()).finish()
    }
}
