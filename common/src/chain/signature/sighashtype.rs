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

use super::TransactionSigError;

/// Specifies which parts of the transaction a signature commits to.
///
/// The values of the flags are the same as in Bitcoin, plus the replay-protection
/// `FORKID` bit used by Bitcoin Cash.
#[derive(Eq, PartialEq, Clone, Copy, Debug, Ord, PartialOrd, Hash)]
pub struct SigHashType(u8);

impl SigHashType {
    pub const ALL: u8 = 0x01;
    pub const NONE: u8 = 0x02;
    pub const SINGLE: u8 = 0x03;
    pub const FORKID: u8 = 0x40;
    pub const ANYONECANPAY: u8 = 0x80;

    const MASK_BASE: u8 = 0x1f;

    pub const fn all() -> Self {
        Self(Self::ALL)
    }

    pub const fn all_forked() -> Self {
        Self(Self::ALL | Self::FORKID)
    }

    pub fn inputs_mode(&self) -> InputsMode {
        match self.0 & Self::ANYONECANPAY {
            Self::ANYONECANPAY => InputsMode::AnyoneCanPay,
            _ => InputsMode::CommitWhoPays,
        }
    }

    pub fn outputs_mode(&self) -> OutputsMode {
        match self.0 & Self::MASK_BASE {
            Self::NONE => OutputsMode::None,
            Self::SINGLE => OutputsMode::Single,
            _ => OutputsMode::All,
        }
    }

    /// Signatures use the BIP143 pre-image regardless of the script type.
    pub fn forked(&self) -> bool {
        self.0 & Self::FORKID != 0
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SigHashType {
    type Error = TransactionSigError;

    fn try_from(sighash_byte: u8) -> Result<Self, Self::Error> {
        let ok = sighash_byte & !(Self::MASK_BASE | Self::FORKID | Self::ANYONECANPAY) == 0
            && matches!(
                sighash_byte & Self::MASK_BASE,
                Self::ALL | Self::NONE | Self::SINGLE
            );
        ok.then_some(Self(sighash_byte))
            .ok_or(TransactionSigError::InvalidSigHashValue(sighash_byte))
    }
}

impl Default for SigHashType {
    fn default() -> Self {
        Self::all()
    }
}

/// How inputs should be hashed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputsMode {
    /// Commit to all inputs
    CommitWhoPays,
    /// Commit to the current input only
    AnyoneCanPay,
}

/// How outputs should be hashed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputsMode {
    /// Commit to all outputs
    All,
    /// Don't commit to any outputs
    None,
    /// Commit to the output corresponding to the current input
    Single,
}
