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

use common::chain::{ChainConfig, MutableTransaction, ScriptType};
use crypto::key::SigAuxDataProvider;

use super::{
    input_at, EcdsaInputSigner, InputSigner, NoKeys, PrivateKeyProvider, SchnorrInputSigner,
    SignatureHasher, SignerResult, UnlockData,
};

/// Routes taproot inputs to the Schnorr signer and every other input to the ECDSA signer.
pub struct ScriptTypeInputSigner<K> {
    ecdsa: EcdsaInputSigner<K>,
    schnorr: SchnorrInputSigner<K>,
}

impl ScriptTypeInputSigner<NoKeys> {
    pub fn hash_only(chain_config: Arc<ChainConfig>) -> Self {
        Self {
            ecdsa: EcdsaInputSigner::hash_only(Arc::clone(&chain_config)),
            schnorr: SchnorrInputSigner::hash_only(chain_config),
        }
    }
}

impl<P: PrivateKeyProvider + Clone> ScriptTypeInputSigner<P> {
    pub fn new(chain_config: Arc<ChainConfig>, key_provider: P) -> Self {
        Self {
            ecdsa: EcdsaInputSigner::new(Arc::clone(&chain_config), key_provider.clone()),
            schnorr: SchnorrInputSigner::new(chain_config, key_provider),
        }
    }
}

impl<K> ScriptTypeInputSigner<K> {
    pub fn from_parts(ecdsa: EcdsaInputSigner<K>, schnorr: SchnorrInputSigner<K>) -> Self {
        Self { ecdsa, schnorr }
    }

    pub fn with_aux_data_provider<A: SigAuxDataProvider + Send + 'static>(
        self,
        provider: A,
    ) -> Self {
        Self {
            ecdsa: self.ecdsa,
            schnorr: self.schnorr.with_aux_data_provider(provider),
        }
    }

    fn route(&self, tx: &MutableTransaction, index: usize) -> SignerResult<&dyn SignatureHasher> {
        let input = input_at(tx, index)?;
        let signer: &dyn SignatureHasher = match input.previous_output.script_type {
            ScriptType::P2tr => &self.schnorr,
            _ => &self.ecdsa,
        };
        Ok(signer)
    }
}

impl<K> SignatureHasher for ScriptTypeInputSigner<K> {
    fn signature_hash(&self, tx: &MutableTransaction, index: usize) -> SignerResult<Vec<u8>> {
        self.route(tx, index)?.signature_hash(tx, index)
    }

    fn unlock_data_from_signature(
        &self,
        tx: &MutableTransaction,
        index: usize,
        signatures: &[Vec<u8>],
    ) -> SignerResult<UnlockData> {
        self.route(tx, index)?.unlock_data_from_signature(tx, index, signatures)
    }
}

impl<P: PrivateKeyProvider> InputSigner for ScriptTypeInputSigner<P> {
    fn unlock_data(&self, tx: &MutableTransaction, index: usize) -> SignerResult<UnlockData> {
        match input_at(tx, index)?.previous_output.script_type {
            ScriptType::P2tr => self.schnorr.unlock_data(tx, index),
            _ => self.ecdsa.unlock_data(tx, index),
        }
    }
}
