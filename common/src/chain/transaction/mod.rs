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

mod full;
mod input;
mod mutable;
mod output;
mod public_key;
mod script_type;

pub use full::FullTransaction;
pub use input::{OutPoint, TxInput, SEQUENCE_FINAL, SEQUENCE_RBF_ENABLED};
pub use mutable::{InputToSign, MutableTransaction, Transaction};
pub use output::{SignatureScriptFn, TxOutput};
pub use public_key::{PublicKeyInfo, UnspentOutput};
pub use script_type::ScriptType;
