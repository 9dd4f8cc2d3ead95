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

mod builder;

pub use builder::Builder;

use crate::chain::signature::sighashtype::SigHashType;
use crate::primitives::Amount;

/// Outputs below this value are rejected by relay policy on Bitcoin networks.
pub const DEFAULT_DUST_THRESHOLD: Amount = 546;
pub const DEFAULT_TRANSACTION_VERSION: u32 = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChainType {
    Mainnet,
    Testnet,
    Regtest,
    Signet,
    BitcoinCash,
}

impl ChainType {
    pub const fn name(&self) -> &'static str {
        match self {
            ChainType::Mainnet => "mainnet",
            ChainType::Testnet => "testnet",
            ChainType::Regtest => "regtest",
            ChainType::Signet => "signet",
            ChainType::BitcoinCash => "bitcoincash",
        }
    }

    pub const fn default_sighash_type(&self) -> SigHashType {
        match self {
            ChainType::Mainnet | ChainType::Testnet | ChainType::Regtest | ChainType::Signet => {
                SigHashType::all()
            }
            ChainType::BitcoinCash => SigHashType::all_forked(),
        }
    }

    const fn default_dust_threshold(&self) -> Amount {
        DEFAULT_DUST_THRESHOLD
    }
}

impl std::fmt::Display for ChainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Network parameters the signing core depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    chain_type: ChainType,
    sighash_type: SigHashType,
    dust_threshold: Amount,
    default_transaction_version: u32,
}

impl ChainConfig {
    pub fn chain_type(&self) -> &ChainType {
        &self.chain_type
    }

    pub fn sighash_type(&self) -> SigHashType {
        self.sighash_type
    }

    pub fn dust_threshold(&self) -> Amount {
        self.dust_threshold
    }

    pub fn default_transaction_version(&self) -> u32 {
        self.default_transaction_version
    }
}

pub fn create_mainnet() -> ChainConfig {
    Builder::new(ChainType::Mainnet).build()
}

pub fn create_regtest() -> ChainConfig {
    Builder::new(ChainType::Regtest).build()
}

pub fn create_bitcoin_cash() -> ChainConfig {
    Builder::new(ChainType::BitcoinCash).build()
}
