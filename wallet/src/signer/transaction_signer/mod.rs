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

use common::chain::{InputToSign, MutableTransaction, ScriptType};
use logging::log;
use script::templates;

use super::{input_at, InputSigner, SignatureHasher, SignerError, SignerResult, UnlockData};

/// Unlock fields computed for one input before anything is written to the transaction.
struct InputUnlock {
    signature_script: Vec<u8>,
    witness: Vec<Vec<u8>>,
    segwit: bool,
}

impl InputUnlock {
    fn script(signature_script: Vec<u8>) -> Self {
        Self {
            signature_script,
            witness: Vec::new(),
            segwit: false,
        }
    }

    fn witness(signature_script: Vec<u8>, witness: Vec<Vec<u8>>) -> Self {
        Self {
            signature_script,
            witness,
            segwit: true,
        }
    }
}

fn input_unlock(input: &InputToSign, unlock_data: UnlockData) -> SignerResult<InputUnlock> {
    let previous_output = &input.previous_output;
    let unlock = match previous_output.script_type {
        ScriptType::P2pkh | ScriptType::P2pk => {
            InputUnlock::script(templates::push_only(&unlock_data).into_bytes())
        }
        ScriptType::P2wpkh => InputUnlock::witness(Vec::new(), unlock_data),
        ScriptType::P2wpkhSh => {
            let program = templates::p2wpkh(&input.previous_output_public_key.key_hash);
            let signature_script = templates::push_only(&[program]).into_bytes();
            InputUnlock::witness(signature_script, unlock_data)
        }
        ScriptType::P2sh => {
            let redeem_script =
                previous_output.redeem_script.as_ref().ok_or(SignerError::NoRedeemScript)?;
            let signature_script = match &previous_output.signature_script_fn {
                Some(f) => f.call(&unlock_data),
                None => {
                    let mut items = unlock_data;
                    items.push(redeem_script.clone());
                    templates::push_only(&items).into_bytes()
                }
            };
            InputUnlock::script(signature_script)
        }
        ScriptType::P2tr => InputUnlock::witness(Vec::new(), unlock_data),
        script_type @ (ScriptType::Unknown
        | ScriptType::P2multi
        | ScriptType::P2wsh
        | ScriptType::NullData) => return Err(SignerError::NotSupportedScriptType(script_type)),
    };
    Ok(unlock)
}

/// Places unlock data into the inputs of a transaction.
pub struct TransactionSigner<S> {
    input_signer: S,
}

impl<S> TransactionSigner<S> {
    pub fn new(input_signer: S) -> Self {
        Self { input_signer }
    }

    pub fn input_signer(&self) -> &S {
        &self.input_signer
    }

    fn assemble(
        tx: &mut MutableTransaction,
        index: usize,
        unlock_data: UnlockData,
    ) -> SignerResult<()> {
        let unlock = input_unlock(input_at(tx, index)?, unlock_data)?;

        if unlock.segwit {
            tx.transaction.segwit = true;
        }
        if let Some(input) = tx.input_to_sign_mut(index) {
            log::debug!(
                "Unlocking input {index} ({}): {} signature script bytes, {} witness items",
                input.previous_output.script_type,
                unlock.signature_script.len(),
                unlock.witness.len(),
            );
            input.input.signature_script = unlock.signature_script;
            input.input.witness = unlock.witness;
        }
        Ok(())
    }
}

impl<S: SignatureHasher> TransactionSigner<S> {
    /// One signature hash per input, in input order.
    pub fn data_to_sign(&self, tx: &MutableTransaction) -> SignerResult<Vec<Vec<u8>>> {
        (0..tx.inputs_to_sign().len())
            .map(|index| self.input_signer.signature_hash(tx, index))
            .collect()
    }

    /// Completes `tx` with signatures produced outside of the wallet, index-aligned with
    /// the hashes from [Self::data_to_sign].
    pub fn sign_with_signature_data(
        &self,
        tx: &mut MutableTransaction,
        signatures: &[Vec<u8>],
    ) -> SignerResult<()> {
        for index in 0..tx.inputs_to_sign().len() {
            let unlock_data = self.input_signer.unlock_data_from_signature(tx, index, signatures)?;
            Self::assemble(tx, index, unlock_data)?;
        }
        Ok(())
    }
}

impl<S: InputSigner> TransactionSigner<S> {
    pub fn sign(&self, tx: &mut MutableTransaction) -> SignerResult<()> {
        for index in 0..tx.inputs_to_sign().len() {
            let unlock_data = self.input_signer.unlock_data(tx, index)?;
            Self::assemble(tx, index, unlock_data)?;
        }
        Ok(())
    }
}
