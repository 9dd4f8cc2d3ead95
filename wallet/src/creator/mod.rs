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

//! Turns built transactions into sent ones: signs, registers with the wallet and hands
//! them to the network.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use common::{
    chain::{
        signature::TransactionSerializer, FullTransaction, MutableTransaction, UnspentOutput,
    },
    primitives::H256,
};
use logging::log;

use crate::{
    builder::{SendParams, TransactionBuilder, TransactionDataSortType},
    signer::{InputSigner, SignatureHasher, TransactionSigner},
    WalletResult,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("No connected peers")]
    NoConnectedPeers,
    #[error("Wallet is not synced")]
    NotSynced,
    #[error("Transaction rejected: {0}")]
    Rejected(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessCreatedError {
    /// The bloom filter no longer covers the wallet's scripts; regenerate it and carry on.
    #[error("Bloom filter expired")]
    BloomFilterExpired,
    #[error("Transaction {} already exists", .0.as_bitcoin_uint256_hex())]
    TransactionAlreadyExists(H256),
    #[error("Storage error: {0}")]
    Storage(String),
}

pub trait TransactionSender {
    /// Fails when the transaction could not be broadcast right now.
    fn verify_can_send(&self) -> Result<(), SendError>;

    fn send(&self, tx: &FullTransaction) -> Result<(), SendError>;
}

/// Registers a wallet-created transaction as pending.
pub trait PendingTransactionProcessor {
    fn process_created(&self, tx: &FullTransaction) -> Result<(), ProcessCreatedError>;
}

pub trait BloomFilterManager {
    fn regenerate_bloom_filter(&self);
}

pub struct TransactionCreator<I> {
    builder: TransactionBuilder<TransactionSigner<I>>,
    serializer: Arc<dyn TransactionSerializer + Send + Sync>,
    sender: Arc<dyn TransactionSender + Send + Sync>,
    pending_processor: Arc<dyn PendingTransactionProcessor + Send + Sync>,
    bloom_filter_manager: Arc<dyn BloomFilterManager + Send + Sync>,
}

impl<I> TransactionCreator<I> {
    pub fn new(
        builder: TransactionBuilder<TransactionSigner<I>>,
        serializer: Arc<dyn TransactionSerializer + Send + Sync>,
        sender: Arc<dyn TransactionSender + Send + Sync>,
        pending_processor: Arc<dyn PendingTransactionProcessor + Send + Sync>,
        bloom_filter_manager: Arc<dyn BloomFilterManager + Send + Sync>,
    ) -> Self {
        Self {
            builder,
            serializer,
            sender,
            pending_processor,
            bloom_filter_manager,
        }
    }

    pub fn builder(&self) -> &TransactionBuilder<TransactionSigner<I>> {
        &self.builder
    }

    /// Registers `tx` with the wallet and broadcasts it. Nothing is registered when the
    /// sender is not ready.
    pub fn process_and_send(&self, tx: &FullTransaction) -> WalletResult<()> {
        let txid = tx.txid.as_bitcoin_uint256_hex();
        self.sender.verify_can_send()?;

        match self.pending_processor.process_created(tx) {
            Ok(()) => {}
            Err(ProcessCreatedError::BloomFilterExpired) => {
                log::warn!("Bloom filter expired while registering {txid}, regenerating");
                self.bloom_filter_manager.regenerate_bloom_filter();
            }
            Err(e) => return Err(e.into()),
        }

        self.sender.send(tx)?;
        log::info!("Transaction {txid} handed to the network");
        Ok(())
    }
}

impl<I: SignatureHasher> TransactionCreator<I> {
    /// Unsigned transaction plus its signature hashes, for an external signer.
    pub fn build(&self, params: &SendParams) -> WalletResult<(MutableTransaction, Vec<Vec<u8>>)> {
        self.builder.build_unsigned_mutable_transaction(params)
    }

    /// Completes a transaction from [Self::build] with external signatures and sends it.
    pub fn finalize(
        &self,
        tx: MutableTransaction,
        signatures: &[Vec<u8>],
    ) -> WalletResult<FullTransaction> {
        let tx = self.builder.finalize_transaction(tx, signatures)?;
        self.process_and_send(&tx)?;
        Ok(tx)
    }
}

impl<I: InputSigner> TransactionCreator<I> {
    pub fn create(&self, params: &SendParams) -> WalletResult<FullTransaction> {
        let tx = self.builder.build_signed_transaction(params)?;
        self.process_and_send(&tx)?;
        Ok(tx)
    }

    pub fn create_from_unspent_output(
        &self,
        unspent_output: &UnspentOutput,
        address: &str,
        memo: Option<&str>,
        fee_rate: u64,
        sort_type: TransactionDataSortType,
        rbf_enabled: bool,
    ) -> WalletResult<FullTransaction> {
        let tx = self.builder.build_transaction_from_unspent_output(
            unspent_output,
            address,
            memo,
            fee_rate,
            sort_type,
            rbf_enabled,
        )?;
        self.create_from_mutable_transaction(tx)
    }

    pub fn create_from_mutable_transaction(
        &self,
        tx: MutableTransaction,
    ) -> WalletResult<FullTransaction> {
        let tx = self.builder.sign_and_build(tx)?;
        self.process_and_send(&tx)?;
        Ok(tx)
    }

    /// Signed network serialization of the transaction; nothing is registered or sent.
    pub fn create_raw_transaction(&self, params: &SendParams) -> WalletResult<Vec<u8>> {
        let tx = self.builder.build_signed_transaction(params)?;
        Ok(self.serializer.serialize(&tx))
    }
}
