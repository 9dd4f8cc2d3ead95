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

//! Signature pre-images. The signing core treats [TransactionSerializer] as a black box;
//! [StandardSerializer] implements the consensus rules.

mod serializer;
pub mod sighashtype;


pub use serializer::StandardSerializer;

use crate::chain::{FullTransaction, InputToSign, Transaction, TxOutput};

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum TransactionSigError {
    #[error("Invalid input index was provided (provided: `{0}` vs available: `{1}`)")]
    InvalidInputIndex(usize, usize),
    #[error("Invalid signature hash type: {0:#04x}")]
    InvalidSigHashValue(u8),
    #[error("Script-hash input is missing its redeem script")]
    MissingRedeemScript,
    #[error("Witness key-hash input is missing a 20-byte key hash")]
    MissingKeyHash,
    #[error("Unsupported signature hash request: {0}")]
    Unsupported(&'static str),
}

pub trait TransactionSerializer {
    /// Legacy (`forked == false`) or BIP143 (`forked == true`) pre-image of one input,
    /// without the trailing sighash type.
    fn serialized_for_signature(
        &self,
        tx: &Transaction,
        inputs: &[InputToSign],
        outputs: &[TxOutput],
        input_index: usize,
        forked: bool,
    ) -> Result<Vec<u8>, TransactionSigError>;

    /// BIP341 key-path pre-image (`SIGHASH_DEFAULT`, no annex), starting with the epoch byte.
    fn serialized_for_taproot_signature(
        &self,
        tx: &Transaction,
        inputs: &[InputToSign],
        outputs: &[TxOutput],
        input_index: usize,
    ) -> Result<Vec<u8>, TransactionSigError>;

    /// Network serialization.
    fn serialize(&self, tx: &FullTransaction) -> Vec<u8>;
}
