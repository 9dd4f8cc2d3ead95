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

//! Bitcoin consensus encoding of transactions and their parts.

use crate::chain::{OutPoint, Transaction, TxInput, TxOutput};
use crate::primitives::{Amount, H256};

const SEGWIT_MARKER: u8 = 0x00;
const SEGWIT_FLAG: u8 = 0x01;

pub fn write_compact_size(buf: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => buf.push(n as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Length-prefixed byte string.
pub fn write_var_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(buf, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

pub fn write_outpoint(buf: &mut Vec<u8>, outpoint: &OutPoint) {
    buf.extend_from_slice(outpoint.tx_hash.as_bytes());
    buf.extend_from_slice(&outpoint.index.to_le_bytes());
}

/// Writes an input with an explicit script in place of its signature script.
pub fn write_input_with_script(buf: &mut Vec<u8>, input: &TxInput, script: &[u8]) {
    write_outpoint(buf, &input.previous_output);
    write_var_bytes(buf, script);
    buf.extend_from_slice(&input.sequence.to_le_bytes());
}

pub fn write_output(buf: &mut Vec<u8>, value: Amount, locking_script: &[u8]) {
    buf.extend_from_slice(&value.to_le_bytes());
    write_var_bytes(buf, locking_script);
}

pub fn write_witness(buf: &mut Vec<u8>, witness: &[Vec<u8>]) {
    write_compact_size(buf, witness.len() as u64);
    for item in witness {
        write_var_bytes(buf, item);
    }
}

pub fn serialize_transaction(
    header: &Transaction,
    inputs: &[TxInput],
    outputs: &[TxOutput],
    with_witness: bool,
) -> Vec<u8> {
    let with_witness = with_witness && header.segwit;
    let mut buf = Vec::new();
    buf.extend_from_slice(&header.version.to_le_bytes());
    if with_witness {
        buf.push(SEGWIT_MARKER);
        buf.push(SEGWIT_FLAG);
    }
    write_compact_size(&mut buf, inputs.len() as u64);
    for input in inputs {
        write_input_with_script(&mut buf, input, &input.signature_script);
    }
    write_compact_size(&mut buf, outputs.len() as u64);
    for output in outputs {
        write_output(&mut buf, output.value, &output.locking_script);
    }
    if with_witness {
        for input in inputs {
            write_witness(&mut buf, &input.witness);
        }
    }
    buf.extend_from_slice(&header.lock_time.to_le_bytes());
    buf
}

/// Double SHA256 of the serialization without witness data.
pub fn compute_txid(header: &Transaction, inputs: &[TxInput], outputs: &[TxOutput]) -> H256 {
    H256(crypto::hash::sha256d(serialize_transaction(
        header, inputs, outputs, false,
    )))
}
