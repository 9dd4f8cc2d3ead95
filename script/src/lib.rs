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

//! Construction of Bitcoin scripts: opcodes, a builder that always emits minimal data
//! pushes, and the standard locking/unlocking templates used when spending and paying.
//!
//! ## Example
//!
//! ```
//! use script::{Builder, opcodes::all as opc};
//!
//! let key_hash = [0x11u8; 20];
//! let script = Builder::new()
//!     .push_opcode(opc::OP_DUP)
//!     .push_opcode(opc::OP_HASH160)
//!     .push_slice(&key_hash)
//!     .push_opcode(opc::OP_EQUALVERIFY)
//!     .push_opcode(opc::OP_CHECKSIG)
//!     .into_script();
//!
//! assert_eq!(script, script::templates::p2pkh(&key_hash));
//! ```

mod error;
pub mod opcodes;
pub mod script;
pub mod templates;

pub use crate::script::{Builder, Script};
pub use error::{Error, Result};
