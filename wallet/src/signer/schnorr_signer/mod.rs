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

use parking_lot::Mutex;

use common::chain::{
    signature::{StandardSerializer, TransactionSerializer},
    ChainConfig, MutableTransaction, ScriptType,
};
use crypto::key::{RandomSigAuxDataProvider, SigAuxDataProvider};

use super::{
    input_at, signing_key, InputSigner, NoKeys, PrivateKeyProvider, SignatureHasher,
    SignerError, SignerResult, UnlockData,
};

const TAP_SIGHASH_TAG: &str = "TapSighash";

/// BIP340 signatures for taproot key-path spends.
pub struct SchnorrInputSigner<K> {
    serializer: Arc<dyn TransactionSerializer + Send + Sync>,
    aux_data_provider: Mutex<Box<dyn SigAuxDataProvider + Send>>,
    key_provider: K,
}

impl SchnorrInputSigner<NoKeys> {
    pub fn hash_only(chain_config: Arc<ChainConfig>) -> Self {
        Self::with_keys(&chain_config, NoKeys)
    }
}

impl<P: PrivateKeyProvider> SchnorrInputSigner<P> {
    pub fn new(chain_config: Arc<ChainConfig>, key_provider: P) -> Self {
        Self::with_keys(&chain_config, key_provider)
    }
}

impl<K> SchnorrInputSigner<K> {
    fn with_keys(chain_config: &ChainConfig, key_provider: K) -> Self {
        Self {
            serializer: Arc::new(StandardSerializer::new(chain_config.sighash_type())),
            aux_data_provider: Mutex::new(Box::new(RandomSigAuxDataProvider)),
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

    pub fn with_aux_data_provider<A: SigAuxDataProvider + Send + 'static>(
        self,
        provider: A,
    ) -> Self {
        *self.aux_data_provider.lock() = Box::new(provider);
        self
    }

    fn digest(&self, tx: &MutableTransaction, index: usize) -> SignerResult<[u8; 32]> {
        let preimage = self.serializer.serialized_for_taproot_signature(
            &tx.transaction,
            tx.inputs_to_sign(),
            tx.outputs(),
            index,
        )?;
        Ok(crypto::hash::tagged_hash(TAP_SIGHASH_TAG, preimage))
    }
}

impl<K> SignatureHasher for SchnorrInputSigner<K> {
    fn signature_hash(&self, _tx: &MutableTransaction, _index: usize) -> SignerResult<Vec<u8>> {
        Err(SignerError::ExternalSigningUnsupported(ScriptType::P2tr))
    }

    fn unlock_data_from_signature(
        &self,
        _tx: &MutableTransaction,
        _index: usize,
        _signatures: &[Vec<u8>],
    ) -> SignerResult<UnlockData> {
        Err(SignerError::ExternalSigningUnsupported(ScriptType::P2tr))
    }
}

impl<P: PrivateKeyProvider> InputSigner for SchnorrInputSigner<P> {
    fn unlock_data(&self, tx: &MutableTransaction, index: usize) -> SignerResult<UnlockData> {
        let input = input_at(tx, index)?;
        let digest = self.digest(tx, index)?;
        let private_key = signing_key(&self.key_provider, input)?;

        let mut aux_data_provider = self.aux_data_provider.lock();
        let signature = private_key.sign_schnorr_taproot(&digest, &mut **aux_data_provider)?;
        Ok(vec![signature.to_vec()])
    }
}
