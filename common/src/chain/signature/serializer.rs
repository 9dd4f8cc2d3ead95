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

use crypto::hash::{sha256, sha256d};
use utils::ensure;

use super::sighashtype::{InputsMode, OutputsMode, SigHashType};
use super::{TransactionSerializer, TransactionSigError};
use crate::chain::encoding::{
    serialize_transaction, write_compact_size, write_input_with_script, write_outpoint,
    write_output, write_var_bytes,
};
use crate::chain::{FullTransaction, InputToSign, ScriptType, Transaction, TxOutput};

const TAPROOT_EPOCH: u8 = 0x00;
const SIGHASH_DEFAULT: u8 = 0x00;
const KEY_PATH_SPEND_NO_ANNEX: u8 = 0x00;

/// Value committed to for outputs blanked out by `SIGHASH_SINGLE` in legacy pre-images.
const BLANK_OUTPUT_VALUE: u64 = u64::MAX;

/// Consensus pre-images for one signature hash type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardSerializer {
    sighash_type: SigHashType,
}

impl StandardSerializer {
    pub fn new(sighash_type: SigHashType) -> Self {
        Self { sighash_type }
    }

    pub fn sighash_type(&self) -> SigHashType {
        self.sighash_type
    }

    fn legacy(
        &self,
        tx: &Transaction,
        inputs: &[InputToSign],
        outputs: &[TxOutput],
        input_index: usize,
        script_code: &[u8],
    ) -> Result<Vec<u8>, TransactionSigError> {
        let inputs_mode = self.sighash_type.inputs_mode();
        let outputs_mode = self.sighash_type.outputs_mode();
        if outputs_mode == OutputsMode::Single {
            ensure!(
                input_index < outputs.len(),
                TransactionSigError::Unsupported("SIGHASH_SINGLE without a matching output")
            );
        }

        let mut buf = Vec::new();
        buf.extend_from_slice(&tx.version.to_le_bytes());

        match inputs_mode {
            InputsMode::AnyoneCanPay => {
                write_compact_size(&mut buf, 1);
                write_input_with_script(&mut buf, &inputs[input_index].input, script_code);
            }
            InputsMode::CommitWhoPays => {
                write_compact_size(&mut buf, inputs.len() as u64);
                for (i, input_to_sign) in inputs.iter().enumerate() {
                    let mut input = input_to_sign.input.clone();
                    if i != input_index && outputs_mode != OutputsMode::All {
                        input.sequence = 0;
                    }
                    let script: &[u8] = if i == input_index { script_code } else { &[] };
                    write_input_with_script(&mut buf, &input, script);
                }
            }
        }

        match outputs_mode {
            OutputsMode::All => {
                write_compact_size(&mut buf, outputs.len() as u64);
                for output in outputs {
                    write_output(&mut buf, output.value, &output.locking_script);
                }
            }
            OutputsMode::None => write_compact_size(&mut buf, 0),
            OutputsMode::Single => {
                write_compact_size(&mut buf, input_index as u64 + 1);
                for _ in 0..input_index {
                    write_output(&mut buf, BLANK_OUTPUT_VALUE, &[]);
                }
                let output = &outputs[input_index];
                write_output(&mut buf, output.value, &output.locking_script);
            }
        }

        buf.extend_from_slice(&tx.lock_time.to_le_bytes());
        Ok(buf)
    }

    fn bip143(
        &self,
        tx: &Transaction,
        inputs: &[InputToSign],
        outputs: &[TxOutput],
        input_index: usize,
        script_code: &[u8],
    ) -> Vec<u8> {
        let inputs_mode = self.sighash_type.inputs_mode();
        let outputs_mode = self.sighash_type.outputs_mode();
        let signed = &inputs[input_index];

        let hash_prevouts = match inputs_mode {
            InputsMode::CommitWhoPays => {
                let mut data = Vec::new();
                for i in inputs {
                    write_outpoint(&mut data, &i.input.previous_output);
                }
                sha256d(data)
            }
            InputsMode::AnyoneCanPay => [0; 32],
        };

        let hash_sequence = match (inputs_mode, outputs_mode) {
            (InputsMode::CommitWhoPays, OutputsMode::All) => {
                let data: Vec<u8> =
                    inputs.iter().flat_map(|i| i.input.sequence.to_le_bytes()).collect();
                sha256d(data)
            }
            _ => [0; 32],
        };

        let hash_outputs = match outputs_mode {
            OutputsMode::All => sha256d(serialize_outputs(outputs)),
            OutputsMode::Single if input_index < outputs.len() => {
                sha256d(serialize_outputs(&outputs[input_index..=input_index]))
            }
            OutputsMode::Single | OutputsMode::None => [0; 32],
        };

        let mut buf = Vec::new();
        buf.extend_from_slice(&tx.version.to_le_bytes());
        buf.extend_from_slice(&hash_prevouts);
        buf.extend_from_slice(&hash_sequence);
        write_outpoint(&mut buf, &signed.input.previous_output);
        write_var_bytes(&mut buf, script_code);
        buf.extend_from_slice(&signed.previous_output.value.to_le_bytes());
        buf.extend_from_slice(&signed.input.sequence.to_le_bytes());
        buf.extend_from_slice(&hash_outputs);
        buf.extend_from_slice(&tx.lock_time.to_le_bytes());
        buf
    }
}

fn serialize_outputs(outputs: &[TxOutput]) -> Vec<u8> {
    let mut buf = Vec::new();
    for output in outputs {
        write_output(&mut buf, output.value, &output.locking_script);
    }
    buf
}

fn check_index(inputs: &[InputToSign], input_index: usize) -> Result<(), TransactionSigError> {
    ensure!(
        input_index < inputs.len(),
        TransactionSigError::InvalidInputIndex(input_index, inputs.len())
    );
    Ok(())
}

/// The script a signature commits to for the given input.
pub fn script_code(input: &InputToSign) -> Result<Vec<u8>, TransactionSigError> {
    let output = &input.previous_output;
    match output.script_type {
        ScriptType::P2wpkh | ScriptType::P2wpkhSh => {
            let key_hash: [u8; 20] = output
                .key_hash
                .as_deref()
                .and_then(|h| h.try_into().ok())
                .ok_or(TransactionSigError::MissingKeyHash)?;
            Ok(script::templates::p2pkh(&key_hash).into_bytes())
        }
        ScriptType::P2sh => {
            output.redeem_script.clone().ok_or(TransactionSigError::MissingRedeemScript)
        }
        ScriptType::Unknown
        | ScriptType::P2pkh
        | ScriptType::P2pk
        | ScriptType::P2multi
        | ScriptType::P2wsh
        | ScriptType::P2tr
        | ScriptType::NullData => Ok(output.locking_script.clone()),
    }
}

impl TransactionSerializer for StandardSerializer {
    fn serialized_for_signature(
        &self,
        tx: &Transaction,
        inputs: &[InputToSign],
        outputs: &[TxOutput],
        input_index: usize,
        forked: bool,
    ) -> Result<Vec<u8>, TransactionSigError> {
        check_index(inputs, input_index)?;
        let script_code = script_code(&inputs[input_index])?;
        if forked {
            Ok(self.bip143(tx, inputs, outputs, input_index, &script_code))
        } else {
            self.legacy(tx, inputs, outputs, input_index, &script_code)
        }
    }

    fn serialized_for_taproot_signature(
        &self,
        tx: &Transaction,
        inputs: &[InputToSign],
        outputs: &[TxOutput],
        input_index: usize,
    ) -> Result<Vec<u8>, TransactionSigError> {
        check_index(inputs, input_index)?;

        let mut prevouts = Vec::new();
        let mut amounts = Vec::new();
        let mut script_pubkeys = Vec::new();
        let mut sequences = Vec::new();
        for i in inputs {
            write_outpoint(&mut prevouts, &i.input.previous_output);
            amounts.extend_from_slice(&i.previous_output.value.to_le_bytes());
            write_var_bytes(&mut script_pubkeys, &i.previous_output.locking_script);
            sequences.extend_from_slice(&i.input.sequence.to_le_bytes());
        }

        let mut buf = Vec::with_capacity(175);
        buf.push(TAPROOT_EPOCH);
        buf.push(SIGHASH_DEFAULT);
        buf.extend_from_slice(&tx.version.to_le_bytes());
        buf.extend_from_slice(&tx.lock_time.to_le_bytes());
        buf.extend_from_slice(&sha256(prevouts));
        buf.extend_from_slice(&sha256(amounts));
        buf.extend_from_slice(&sha256(script_pubkeys));
        buf.extend_from_slice(&sha256(sequences));
        buf.extend_from_slice(&sha256(serialize_outputs(outputs)));
        buf.push(KEY_PATH_SPEND_NO_ANNEX);
        buf.extend_from_slice(&(input_index as u32).to_le_bytes());
        Ok(buf)
    }

    fn serialize(&self, tx: &FullTransaction) -> Vec<u8> {
        serialize_transaction(&tx.header, &tx.inputs, &tx.outputs, true)
    }
}
