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

//! Signing core of the wallet: per-input signers, the transaction signer that assembles
//! unlock data, the phase-by-phase transaction builder and the creator that hands finished
//! transactions to the network.

pub mod builder;
pub mod creator;
pub mod error;
pub mod signer;

#[cfg(test)]
mod test_helpers;

pub use error::{WalletError, WalletResult};
