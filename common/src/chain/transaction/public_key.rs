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

use crypto::key::{KeyError, Secp256k1PublicKey};

use super::TxOutput;
use crate::primitives::H256;

/// Wallet public key that locks a previous output, with its derivation coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyInfo {
    pub account: u32,
    pub index: u32,
    pub external: bool,
    /// Compressed SEC1 encoding.
    pub raw: Vec<u8>,
    pub key_hash: [u8; 20],
}

impl PublicKeyInfo {
    pub fn new(account: u32, index: u32, external: bool, raw: Vec<u8>) -> Self {
        let key_hash = crypto::hash::hash160(&raw);
        Self {
            account,
            index,
            external,
            raw,
            key_hash,
        }
    }

    pub fn to_secp256k1(&self) -> Result<Secp256k1PublicKey, KeyError> {
        Secp256k1PublicKey::from_slice(&self.raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnspentOutput {
    pub output: TxOutput,
    pub public_key: PublicKeyInfo,
    pub transaction_hash: H256,
    pub block_height: Option<u32>,
}

impl UnspentOutput {
    pub fn new(output: TxOutput, public_key: PublicKeyInfo, block_height: Option<u32>) -> Self {
        let transaction_hash = output.transaction_hash;
        Self {
            output,
            public_key,
            transaction_hash,
            block_height,
        }
    }
}
