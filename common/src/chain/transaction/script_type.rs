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

/// Classification of an output's locking script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScriptType {
    Unknown,
    P2pkh,
    P2pk,
    P2multi,
    P2sh,
    P2wsh,
    P2wpkh,
    P2wpkhSh,
    P2tr,
    NullData,
}

impl ScriptType {
    /// Spending this type puts unlock data into the witness.
    pub fn is_witness(&self) -> bool {
        match self {
            ScriptType::P2wpkh | ScriptType::P2wpkhSh | ScriptType::P2wsh | ScriptType::P2tr => {
                true
            }
            ScriptType::Unknown
            | ScriptType::P2pkh
            | ScriptType::P2pk
            | ScriptType::P2multi
            | ScriptType::P2sh
            | ScriptType::NullData => false,
        }
    }

    /// Witness types signed with ECDSA over a BIP143 pre-image.
    pub fn is_ecdsa_witness(&self) -> bool {
        matches!(self, ScriptType::P2wpkh | ScriptType::P2wpkhSh)
    }
}

impl std::fmt::Display for ScriptType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScriptType::Unknown => "unknown",
            ScriptType::P2pkh => "p2pkh",
            ScriptType::P2pk => "p2pk",
            ScriptType::P2multi => "p2multi",
            ScriptType::P2sh => "p2sh",
            ScriptType::P2wsh => "p2wsh",
            ScriptType::P2wpkh => "p2wpkh",
            ScriptType::P2wpkhSh => "p2wpkhSh",
            ScriptType::P2tr => "p2tr",
            ScriptType::NullData => "nullData",
        };
        f.write_str(name)
    }
}
