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

use crate::primitives::H256;

/// Sequence number signalling BIP125 replaceability.
pub const SEQUENCE_RBF_ENABLED: u32 = 0xffff_fffd;
pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OutPoint {
    /// Hash of the previous transaction, in serialization byte order.
    pub tx_hash: H256,
    pub index: u32,
}

impl OutPoint {
    pub fn new(tx_hash: H256, index: u32) -> Self {
        Self { tx_hash, index }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxInput {
    pub previous_output: OutPoint,
    pub signature_script: Vec<u8>,
    pub sequence: u32,
    pub witness: Vec<Vec<u8>>,
}

impl TxInput {
    pub fn new(previous_output: OutPoint, sequence: u32) -> Self {
        Self {
            previous_output,
            signature_script: Vec::new(),
            sequence,
            witness: Vec::new(),
        }
    }

    pub fn with_rbf(previous_output: OutPoint, rbf_enabled: bool) -> Self {
        let sequence = if rbf_enabled {
            SEQUENCE_RBF_ENABLED
        } else {
            SEQUENCE_FINAL
        };
        Self::new(previous_output, sequence)
    }

    pub fn is_unlocked(&self) -> bool {
        !self.signature_script.is_empty() || !self.witness.is_empty()
    }
}
