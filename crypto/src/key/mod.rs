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

pub mod secp256k1;
mod sig_aux_data;

pub use self::secp256k1::{Secp256k1PrivateKey, Secp256k1PublicKey};
pub use sig_aux_data::{PredefinedSigAuxDataProvider, RandomSigAuxDataProvider, SigAuxDataProvider};

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum KeyError {
    #[error("Invalid secret key data")]
    InvalidSecretKey,
    #[error("Invalid public key data")]
    InvalidPublicKey,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum SignatureError {
    #[error("Data conversion error: {0}")]
    DataConversionError(String),
    #[error("Taproot tweak of the key failed")]
    TweakFailed,
}
