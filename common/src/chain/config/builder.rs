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

use crate::{
    chain::{config::ChainConfig, config::ChainType, signature::sighashtype::SigHashType},
    primitives::Amount,
};

/// Builder for [ChainConfig]
#[derive(Clone)]
pub struct Builder {
    chain_type: ChainType,
    sighash_type: SigHashType,
    dust_threshold: Amount,
    default_transaction_version: u32,
}

impl Builder {
    /// A new chain config builder, with given chain type as a basis
    pub fn new(chain_type: ChainType) -> Self {
        Self {
            chain_type,
            sighash_type: chain_type.default_sighash_type(),
            dust_threshold: chain_type.default_dust_threshold(),
            default_transaction_version: super::DEFAULT_TRANSACTION_VERSION,
        }
    }

    /// Build the chain config
    pub fn build(self) -> ChainConfig {
        let Self {
            chain_type,
            sighash_type,
            dust_threshold,
            default_transaction_version,
        } = self;

        ChainConfig {
            chain_type,
            sighash_type,
            dust_threshold,
            default_transaction_version,
        }
    }
}

macro_rules! builder_method {
    ($name:ident: $type:ty) => {
        #[doc = concat!("Set the `", stringify!($name), "` field.")]
        #[must_use = "chain::config::Builder dropped prematurely"]
        pub fn $name(mut self, $name: $type) -> Self {
            self.$name = $name;
            self
        }
    };
}

impl Builder {
    builder_method!(sighash_type: SigHashType);
    builder_method!(dust_threshold: Amount);
    builder_method!(default_transaction_version: u32);
}
