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

use common::{
    chain::{MutableTransaction, UnspentOutput},
    primitives::Amount,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TransactionDataSortType {
    #[default]
    None,
    Shuffle,
    Bip69,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipientError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Value {value} is below the dust threshold {threshold}")]
    DustValue { value: Amount, threshold: Amount },
    #[error("Plugin data rejected: {0}")]
    PluginDataRejected(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputSelectionError {
    #[error("Not enough funds: {available} available, {required} required")]
    NotEnoughFunds { available: Amount, required: Amount },
    #[error("No unspent outputs to spend")]
    NoUnspentOutputs,
    #[error("Fee calculation overflowed")]
    FeeOverflow,
}

/// Records the recipient (address, value, memo, plugin data) on the transaction.
pub trait RecipientSetter {
    fn set_recipient(
        &self,
        tx: &mut MutableTransaction,
        address: &str,
        memo: Option<&str>,
        value: Amount,
        plugin_data: &BTreeMap<u8, Vec<u8>>,
        skip_checks: bool,
    ) -> Result<(), RecipientError>;
}

/// Coin selection and fee calculation.
pub trait InputSetter {
    fn set_inputs(
        &self,
        tx: &mut MutableTransaction,
        fee_rate: u64,
        sender_pay: bool,
        unspent_outputs: Option<&[UnspentOutput]>,
        sort_type: TransactionDataSortType,
        rbf_enabled: bool,
    ) -> Result<(), InputSelectionError>;

    fn set_inputs_from_unspent_output(
        &self,
        tx: &mut MutableTransaction,
        unspent_output: &UnspentOutput,
        fee_rate: u64,
        rbf_enabled: bool,
    ) -> Result<(), InputSelectionError>;
}

pub trait LockTimeSetter {
    fn set_lock_time(&self, tx: &mut MutableTransaction);
}

pub trait OutputSetter {
    fn set_outputs(&self, tx: &mut MutableTransaction, sort_type: TransactionDataSortType);
}
