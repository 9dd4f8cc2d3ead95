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

//! Standard output scripts and the script-code forms used in signature pre-images.

use crate::opcodes::all as opc;
use crate::{Builder, Script};

/// `OP_DUP OP_HASH160 <key hash> OP_EQUALVERIFY OP_CHECKSIG`
pub fn p2pkh(key_hash: &[u8; 20]) -> Script {
    Builder::new()
        .push_opcode(opc::OP_DUP)
        .push_opcode(opc::OP_HASH160)
        .push_slice(key_hash)
        .push_opcode(opc::OP_EQUALVERIFY)
        .push_opcode(opc::OP_CHECKSIG)
        .into_script()
}

pub fn p2pk(public_key: &[u8]) -> Script {
    Builder::new().push_slice(public_key).push_opcode(opc::OP_CHECKSIG).into_script()
}

/// `OP_HASH160 <script hash> OP_EQUAL`
pub fn p2sh(script_hash: &[u8; 20]) -> Script {
    Builder::new()
        .push_opcode(opc::OP_HASH160)
        .push_slice(script_hash)
        .push_opcode(opc::OP_EQUAL)
        .into_script()
}

/// Version 0 witness program. Also the redeem script of a P2WPKH-in-P2SH output.
pub fn p2wpkh(key_hash: &[u8; 20]) -> Script {
    Builder::new().push_opcode(opc::OP_0).push_slice(key_hash).into_script()
}

/// Version 1 witness program committing to a tweaked x-only key.
pub fn p2tr(output_key: &[u8; 32]) -> Script {
    Builder::new().push_opcode(opc::OP_1).push_slice(output_key).into_script()
}

pub fn null_data(data: &[u8]) -> Script {
    Builder::new().push_opcode(opc::OP_RETURN).push_slice(data).into_script()
}

/// Signature script made of one minimal push per item.
pub fn push_only<T: AsRef<[u8]>>(items: &[T]) -> Script {
    items
        .iter()
        .fold(Builder::new(), |builder, item| builder.push_slice(item.as_ref()))
        .into_script()
}
