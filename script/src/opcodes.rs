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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Opcode(u8);

impl Opcode {
    pub const fn to_u8(self) -> u8 {
        self.0
    }
}

impl From<u8> for Opcode {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

/// The opcodes used by the standard script templates.
pub mod all {
    use super::Opcode;

    pub const OP_0: Opcode = Opcode(0x00);
    pub const OP_PUSHBYTES_20: Opcode = Opcode(0x14);
    pub const OP_PUSHBYTES_32: Opcode = Opcode(0x20);
    pub const OP_PUSHBYTES_33: Opcode = Opcode(0x21);
    pub const OP_PUSHBYTES_75: Opcode = Opcode(0x4b);
    pub const OP_PUSHDATA1: Opcode = Opcode(0x4c);
    pub const OP_PUSHDATA2: Opcode = Opcode(0x4d);
    pub const OP_PUSHDATA4: Opcode = Opcode(0x4e);
    pub const OP_1NEGATE: Opcode = Opcode(0x4f);
    pub const OP_1: Opcode = Opcode(0x51);
    pub const OP_16: Opcode = Opcode(0x60);
    pub const OP_RETURN: Opcode = Opcode(0x6a);
    pub const OP_DUP: Opcode = Opcode(0x76);
    pub const OP_EQUAL: Opcode = Opcode(0x87);
    pub const OP_EQUALVERIFY: Opcode = Opcode(0x88);
    pub const OP_HASH160: Opcode = Opcode(0xa9);
    pub const OP_CHECKSIG: Opcode = Opcode(0xac);
    pub const OP_CHECKMULTISIG: Opcode = Opcode(0xae);
}
