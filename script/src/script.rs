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

use crate::opcodes::{all as opc, Opcode};
use crate::{Error, Result};

/// Serialized script bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits a push-only script into the data it pushes.
    pub fn push_data_items(&self) -> Result<Vec<Vec<u8>>> {
        let mut items = Vec::new();
        let mut rest = self.as_bytes();
        while let Some((&op, tail)) = rest.split_first() {
            let (len, tail) = match op {
                0x00..=0x4b => (op as usize, tail),
                0x4c => read_len(tail, 1)?,
                0x4d => read_len(tail, 2)?,
                0x4e => read_len(tail, 4)?,
                _ => return Err(Error::NotPushOnly(op)),
            };
            if tail.len() < len {
                return Err(Error::TruncatedPush(len));
            }
            let (data, tail) = tail.split_at(len);
            items.push(data.to_vec());
            rest = tail;
        }
        Ok(items)
    }
}

fn read_len(bytes: &[u8], width: usize) -> Result<(usize, &[u8])> {
    if bytes.len() < width {
        return Err(Error::TruncatedPush(width));
    }
    let (len_bytes, tail) = bytes.split_at(width);
    let len = len_bytes.iter().rev().fold(0usize, |acc, b| (acc << 8) | *b as usize);
    Ok((len, tail))
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Incremental script construction. Data is always pushed with the smallest push opcode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Builder(Vec<u8>);

impl Builder {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push_opcode(mut self, opcode: Opcode) -> Self {
        self.0.push(opcode.to_u8());
        self
    }

    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len <= opc::OP_PUSHBYTES_75.to_u8() as usize {
            self.0.push(len as u8);
        } else if len <= u8::MAX as usize {
            self.0.push(opc::OP_PUSHDATA1.to_u8());
            self.0.push(len as u8);
        } else if len <= u16::MAX as usize {
            self.0.push(opc::OP_PUSHDATA2.to_u8());
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(opc::OP_PUSHDATA4.to_u8());
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Appends already-serialized script bytes verbatim.
    pub fn push_raw(mut self, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(bytes);
        self
    }

    pub fn into_script(self) -> Script {
        Script(self.0)
    }
}
