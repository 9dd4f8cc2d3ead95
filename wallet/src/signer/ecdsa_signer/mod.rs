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

use std::sync::Arc;

use common::chain::{
    signature::{StandardSerializer, TransactionSerializer},
    ChainConfig, InputToSign, MutableTransaction, ScriptType,
};

use super::{
    input_at, signing_key, InputSigner, NoKeys, PrivateKeyProvider, SignatureHasher,
    SignerError, SignerResult, UnlockData,
};

/// ECDSA signatures over legacy or BIP143 pre-images.
pub struct EcdsaInputSigner<K> {
    chain_config: Arc<ChainConfig>,
    serializer: Arc<dyn TransactionSerializer + Send + Sync>,
    key_provider: K,
}

impl EcdsaInputSigner<NoKeys> {
    pub fn hash_only(chain_config: Arc<ChainConfig>) -> Self {
        Self::with_keys(chain_config, NoKeys)
    }
}

impl<P: PrivateKeyProvider> EcdsaInputSigner<P> {
    pub fn new(chain_config: Arc<ChainConfig>, key_provider: P) -> Self {
        Self::with_keys(chain_config, key_provider)
    }
}

impl<K> EcdsaInputSigner<K> {
    fn with_keys(chain_config: Arc<ChainConfig>, key_provider: K) -> Self {
        let serializer = Arc::new(StandardSerializer::new(chain_config.sighash_type()));
        Self {
            chain_config,
            serializer,
            key_provider,
        }
    }

    pub fn with_serializer(
        mut self,
        serializer: Arc<dyn TransactionSerializer + Send + Sync>,
    ) -> Self {
        self.serializer = serializer;
        self
    }

    fn digest(&self, tx: &MutableTransaction, index: usize) -> SignerResult<[u8; 32]> {
        let input = input_at(tx, index)?;
        // Same error as the assembly step, whichever signing path is taken.
        utils::ensure!(
            input.previous_output.script_type != ScriptType::P2sh
                || input.previous_output.redeem_script.is_some(),
            SignerError::NoRedeemScript
        );
        let sighash_type = self.chain_config.sighash_type();
        let forked = input.previous_output.script_type.is_ecdsa_witness() || sighash_type.forked();

        let mut preimage = self.serializer.serialized_for_signature(
            &tx.transaction,
            tx.inputs_to_sign(),
            tx.outputs(),
            index,
            forked,
        )?;
        preimage.extend_from_slice(&u32::from(sighash_type.get()).to_le_bytes());
        Ok(crypto::hash::sha256d(preimage))
    }

    /// Signature (already carrying the sighash byte) plus the public key unless spending P2PK.
    fn unlock_data_for(input: &InputToSign, signature: Vec<u8>) -> UnlockData {
        match input.previous_output.script_type {
            ScriptType::P2pk => vec![signature],
            _ => vec![signature, input.previous_output_public_key.raw.clone()],
        }
    }
}

impl<K> SignatureHasher for EcdsaInputSigner<K> {
    fn signature_hash(&self, tx: &MutableTransaction, index: usize) -> SignerResult<Vec<u8>> {
        Ok(self.digest(tx, index)?.to_vec())
    }

    fn unlock_data_from_signature(
        &self,
        tx: &MutableTransaction,
        index: usize,
        signatures: &[Vec<u8>],
    ) -> SignerResult<UnlockData> {
        let input = input_at(tx, index)?;
        let mut signature =
            signatures.get(index).cloned().ok_or(SignerError::MissingSignature(index))?;
        signature.push(self.chain_config.sighash_type().get());
        Ok(Self::unlock_data_for(input, signature))
    }
}

impl<P: PrivateKeyProvider> InputSigner for EcdsaInputSigner<P> {
    fn unlock_data(&self, tx: &MutableTransaction, index: usize) -> SignerResult<UnlockData> {
        let input = input_at(tx, index)?;
        let digest = self.digest(tx, index)?;
        let private_key = signing_key(&self.key_provider, input)?;

        let mut signature = private_key.sign_ecdsa(&digest);
        signature.push(self.chain_config.sighash_type().get());
        Ok(Self::unlock_data_for(input, signature))
    }
}

#[cfg(test)]
mod tests;
