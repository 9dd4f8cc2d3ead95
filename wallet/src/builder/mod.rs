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

//! Assembles transactions phase by phase: recipient, inputs, lock time, outputs.
//! Each phase is delegated to a collaborator; the builder only sequences them.

mod setters;
mod sorting;


pub use setters::{
    InputSelectionError, InputSetter, LockTimeSetter, OutputSetter, RecipientError,
    RecipientSetter, TransactionDataSortType,
};
pub use sorting::SortingOutputSetter;

use std::{collections::BTreeMap, sync::Arc};

use common::{
    chain::{ChainConfig, FullTransaction, MutableTransaction, UnspentOutput},
    primitives::Amount,
};
use logging::log;

use crate::{
    signer::{InputSigner, SignatureHasher, TransactionSigner},
    WalletResult,
};

/// Everything needed to build an outgoing payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendParams {
    pub address: String,
    pub memo: Option<String>,
    pub value: Amount,
    pub fee_rate: u64,
    pub sender_pay: bool,
    pub sort_type: TransactionDataSortType,
    pub rbf_enabled: bool,
    /// Coins to spend; the input setter selects from the wallet when `None`.
    pub unspent_outputs: Option<Vec<UnspentOutput>>,
    pub plugin_data: BTreeMap<u8, Vec<u8>>,
}

impl SendParams {
    pub fn new(address: impl Into<String>, value: Amount, fee_rate: u64) -> Self {
        Self {
            address: address.into(),
            memo: None,
            value,
            fee_rate,
            sender_pay: true,
            sort_type: TransactionDataSortType::default(),
            rbf_enabled: true,
            unspent_outputs: None,
            plugin_data: BTreeMap::new(),
        }
    }
}

/// Builder state without signing capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSigner;

pub struct TransactionBuilder<S> {
    chain_config: Arc<ChainConfig>,
    recipient_setter: Arc<dyn RecipientSetter + Send + Sync>,
    input_setter: Arc<dyn InputSetter + Send + Sync>,
    lock_time_setter: Arc<dyn LockTimeSetter + Send + Sync>,
    output_setter: Arc<dyn OutputSetter + Send + Sync>,
    signer: S,
}

impl TransactionBuilder<NoSigner> {
    pub fn new(
        chain_config: Arc<ChainConfig>,
        recipient_setter: Arc<dyn RecipientSetter + Send + Sync>,
        input_setter: Arc<dyn InputSetter + Send + Sync>,
        lock_time_setter: Arc<dyn LockTimeSetter + Send + Sync>,
        output_setter: Arc<dyn OutputSetter + Send + Sync>,
    ) -> Self {
        Self {
            chain_config,
            recipient_setter,
            input_setter,
            lock_time_setter,
            output_setter,
            signer: NoSigner,
        }
    }

    pub fn with_signer<I: SignatureHasher>(
        self,
        signer: TransactionSigner<I>,
    ) -> TransactionBuilder<TransactionSigner<I>> {
        TransactionBuilder {
            chain_config: self.chain_config,
            recipient_setter: self.recipient_setter,
            input_setter: self.input_setter,
            lock_time_setter: self.lock_time_setter,
            output_setter: self.output_setter,
            signer,
        }
    }
}

impl<S> TransactionBuilder<S> {
    pub fn chain_config(&self) -> &Arc<ChainConfig> {
        &self.chain_config
    }

    fn new_transaction(&self, outgoing: bool) -> MutableTransaction {
        MutableTransaction::with_version(outgoing, self.chain_config.default_transaction_version())
    }

    fn set_recipient(
        &self,
        mut tx: MutableTransaction,
        address: &str,
        memo: Option<&str>,
        value: Amount,
        plugin_data: &BTreeMap<u8, Vec<u8>>,
    ) -> WalletResult<MutableTransaction> {
        log::debug!("Setting recipient {address} for {value} sat");
        self.recipient_setter.set_recipient(&mut tx, address, memo, value, plugin_data, false)?;
        Ok(tx)
    }

    fn set_inputs(
        &self,
        mut tx: MutableTransaction,
        params: &SendParams,
    ) -> WalletResult<MutableTransaction> {
        log::debug!("Selecting inputs at fee rate {}", params.fee_rate);
        self.input_setter.set_inputs(
            &mut tx,
            params.fee_rate,
            params.sender_pay,
            params.unspent_outputs.as_deref(),
            params.sort_type,
            params.rbf_enabled,
        )?;
        log::debug!("Selected {} inputs", tx.inputs_to_sign().len());
        Ok(tx)
    }

    fn set_lock_time(&self, mut tx: MutableTransaction) -> MutableTransaction {
        self.lock_time_setter.set_lock_time(&mut tx);
        log::debug!("Lock time set to {}", tx.transaction.lock_time);
        tx
    }

    fn set_outputs(
        &self,
        mut tx: MutableTransaction,
        sort_type: TransactionDataSortType,
    ) -> MutableTransaction {
        self.output_setter.set_outputs(&mut tx, sort_type);
        log::debug!("Outputs set: {} outputs, sort {sort_type:?}", tx.outputs().len());
        tx
    }

    /// Unsigned outgoing transaction for `params`.
    pub fn build_transaction(&self, params: &SendParams) -> WalletResult<MutableTransaction> {
        let tx = self.new_transaction(true);
        let tx = self.set_recipient(
            tx,
            &params.address,
            params.memo.as_deref(),
            params.value,
            &params.plugin_data,
        )?;
        let tx = self.set_inputs(tx, params)?;
        let tx = self.set_lock_time(tx);
        Ok(self.set_outputs(tx, params.sort_type))
    }

    /// Unsigned transaction sweeping a single coin to `address`.
    pub fn build_transaction_from_unspent_output(
        &self,
        unspent_output: &UnspentOutput,
        address: &str,
        memo: Option<&str>,
        fee_rate: u64,
        sort_type: TransactionDataSortType,
        rbf_enabled: bool,
    ) -> WalletResult<MutableTransaction> {
        let tx = self.new_transaction(false);
        let mut tx = self.set_recipient(
            tx,
            address,
            memo,
            unspent_output.output.value,
            &BTreeMap::new(),
        )?;

        log::debug!(
            "Spending single unspent output {}:{}",
            unspent_output.transaction_hash.as_bitcoin_uint256_hex(),
            unspent_output.output.index
        );
        self.input_setter.set_inputs_from_unspent_output(
            &mut tx,
            unspent_output,
            fee_rate,
            rbf_enabled,
        )?;

        let tx = self.set_lock_time(tx);
        Ok(self.set_outputs(tx, sort_type))
    }
}

impl<I: SignatureHasher> TransactionBuilder<TransactionSigner<I>> {
    pub fn signer(&self) -> &TransactionSigner<I> {
        &self.signer
    }

    /// Unsigned transaction plus the hashes an external signer has to sign, in input order.
    pub fn build_unsigned_mutable_transaction(
        &self,
        params: &SendParams,
    ) -> WalletResult<(MutableTransaction, Vec<Vec<u8>>)> {
        let tx = self.build_transaction(params)?;
        let hashes = self.signer.data_to_sign(&tx)?;
        Ok((tx, hashes))
    }

    pub fn finalize_transaction(
        &self,
        mut tx: MutableTransaction,
        signatures: &[Vec<u8>],
    ) -> WalletResult<FullTransaction> {
        self.signer.sign_with_signature_data(&mut tx, signatures)?;
        Ok(tx.build())
    }
}

impl<I: InputSigner> TransactionBuilder<TransactionSigner<I>> {
    pub fn sign_and_build(&self, mut tx: MutableTransaction) -> WalletResult<FullTransaction> {
        self.signer.sign(&mut tx)?;
        Ok(tx.build())
    }

    pub fn build_signed_transaction(&self, params: &SendParams) -> WalletResult<FullTransaction> {
        let tx = self.build_transaction(params)?;
        self.sign_and_build(tx)
    }
}
