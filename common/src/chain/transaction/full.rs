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

use super::{Transaction, TxInput, TxOutput};
use crate::chain::encoding;
use crate::primitives::H256;

/// A finished transaction, ready for broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullTransaction {
    pub header: Transaction,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub txid: H256,
    pub is_outgoing: bool,
}

impl FullTransaction {
    pub fn new(
        header: Transaction,
        inputs: Vec<TxInput>,
        outputs: Vec<TxOutput>,
        is_outgoing: bool,
    ) -> Self {
        let txid = encoding::compute_txid(&header, &inputs, &outputs);
        Self {
            header,
            inputs,
            outputs,
            txid,
            is_outgoing,
        }
    }
}
