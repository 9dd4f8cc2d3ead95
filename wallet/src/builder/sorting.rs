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

use itertools::Itertools;

use common::chain::{MutableTransaction, TxOutput};
use randomness::seq::SliceRandom;

use super::{OutputSetter, TransactionDataSortType};

/// Orders the outputs already placed on the transaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortingOutputSetter;

impl SortingOutputSetter {
    pub fn sorted(outputs: Vec<TxOutput>, sort_type: TransactionDataSortType) -> Vec<TxOutput> {
        match sort_type {
            TransactionDataSortType::None => outputs,
            TransactionDataSortType::Shuffle => {
                let mut outputs = outputs;
                outputs.shuffle(&mut randomness::make_true_rng());
                outputs
            }
            // BIP69: ascending value, then locking script bytes
            TransactionDataSortType::Bip69 => outputs
                .into_iter()
                .sorted_by(|a, b| {
                    a.value.cmp(&b.value).then_with(|| a.locking_script.cmp(&b.locking_script))
                })
                .collect(),
        }
    }
}

impl OutputSetter for SortingOutputSetter {
    fn set_outputs(&self, tx: &mut MutableTransaction, sort_type: TransactionDataSortType) {
        let outputs = Self::sorted(tx.outputs().to_vec(), sort_type);
        tx.set_outputs(outputs);
    }
}
