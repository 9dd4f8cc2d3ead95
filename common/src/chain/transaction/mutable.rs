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

use std::collections::BTreeMap;

use super::{FullTransaction, OutPoint, PublicKeyInfo, TxInput, TxOutput, UnspentOutput};
use crate::chain::config::DEFAULT_TRANSACTION_VERSION;
use crate::primitives::Amount;

/// Transaction header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub version: u32,
    pub lock_time: u32,
    /// Serialize with BIP144 marker, flag and witnesses.
    pub segwit: bool,
}

impl Transaction {
    pub fn new(version: u32) -> Self {
        Self {
            version,
            lock_time: 0,
            segwit: false,
        }
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSACTION_VERSION)
    }
}

/// An input together with everything needed to sign it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputToSign {
    pub input: TxInput,
    pub previous_output: TxOutput,
    pub previous_output_public_key: PublicKeyInfo,
}

impl InputToSign {
    pub fn new(
        input: TxInput,
        previous_output: TxOutput,
        previous_output_public_key: PublicKeyInfo,
    ) -> Self {
        Self {
            input,
            previous_output,
            previous_output_public_key,
        }
    }

    pub fn from_unspent_output(unspent_output: &UnspentOutput, rbf_enabled: bool) -> Self {
        let outpoint = OutPoint::new(unspent_output.transaction_hash, unspent_output.output.index);
        Self {
            input: TxInput::with_rbf(outpoint, rbf_enabled),
            previous_output: unspent_output.output.clone(),
            previous_output_public_key: unspent_output.public_key.clone(),
        }
    }
}

/// A transaction under construction.
///
/// Inputs can only be appended, so once signing starts every signature hash stays
/// aligned with the input it was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutableTransaction {
    pub transaction: Transaction,
    inputs_to_sign: Vec<InputToSign>,
    outputs: Vec<TxOutput>,
    pub outgoing: bool,
    pub recipient_address: Option<String>,
    pub recipient_value: Amount,
    pub change_address: Option<String>,
    pub change_value: Amount,
    pub memo: Option<String>,
    plugin_data: BTreeMap<u8, Vec<u8>>,
}

impl MutableTransaction {
    pub fn new(outgoing: bool) -> Self {
        Self {
            outgoing,
            ..Self::default()
        }
    }

    pub fn with_version(outgoing: bool, version: u32) -> Self {
        Self {
            transaction: Transaction::new(version),
            ..Self::new(outgoing)
        }
    }

    pub fn inputs_to_sign(&self) -> &[InputToSign] {
        &self.inputs_to_sign
    }

    pub fn input_to_sign_mut(&mut self, index: usize) -> Option<&mut InputToSign> {
        self.inputs_to_sign.get_mut(index)
    }

    pub fn add_input(&mut self, input: InputToSign) {
        self.inputs_to_sign.push(input);
    }

    pub fn inputs(&self) -> impl ExactSizeIterator<Item = &TxInput> {
        self.inputs_to_sign.iter().map(|i| &i.input)
    }

    pub fn outputs(&self) -> &[TxOutput] {
        &self.outputs
    }

    /// Replaces the outputs; output indices are renumbered to match the new order.
    pub fn set_outputs(&mut self, outputs: Vec<TxOutput>) {
        self.outputs = outputs
            .into_iter()
            .zip(0u32..)
            .map(|(mut output, index)| {
                output.index = index;
                output
            })
            .collect();
    }

    pub fn plugin_data(&self) -> &BTreeMap<u8, Vec<u8>> {
        &self.plugin_data
    }

    pub fn add_plugin_data(&mut self, plugin_id: u8, data: Vec<u8>) {
        self.plugin_data.insert(plugin_id, data);
    }

    pub fn build(self) -> FullTransaction {
        let inputs = self.inputs_to_sign.into_iter().map(|i| i.input).collect();
        FullTransaction::new(self.transaction, inputs, self.outputs, self.outgoing)
    }
}
