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

//! Input signers produce the unlock data of one input; [TransactionSigner] places it into
//! the transaction according to the script type being spent.
//!
//! Capabilities are split in two traits. [SignatureHasher] needs no key material and backs
//! the external signing workflow: hashes go out to a device and the returned signatures
//! come back through [SignatureHasher::unlock_data_from_signature]. [InputSigner] signs
//! in-process and is only implemented by signers constructed with a key provider.

mod ecdsa_signer;
mod key_provider;
mod schnorr_signer;
mod script_type_signer;
mod transaction_signer;

pub use ecdsa_signer::EcdsaInputSigner;
pub use key_provider::{InMemoryKeyProvider, KeyProviderError, PrivateKeyProvider};
pub use schnorr_signer::SchnorrInputSigner;
pub use script_type_signer::ScriptTypeInputSigner;
pub use transaction_signer::TransactionSigner;

use common::chain::{signature::TransactionSigError, MutableTransaction, ScriptType};
use crypto::key::SignatureError;

/// Items pushed into the signature script or witness of one input.
pub type UnlockData = Vec<Vec<u8>>;

/// Marker for signers built without access to private keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoKeys;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SignerError {
    #[error("No private key available for the input")]
    NoPrivateKey,
    #[error("Previous output of the input is unknown")]
    NoPreviousOutput,
    #[error("Previous output has no address")]
    NoPreviousOutputAddress,
    #[error("Script-hash input has no redeem script")]
    NoRedeemScript,
    #[error("Script type {0} cannot be signed")]
    NotSupportedScriptType(ScriptType),
    #[error("External signing is not supported for {0} inputs")]
    ExternalSigningUnsupported(ScriptType),
    #[error("No signature supplied for input {0}")]
    MissingSignature(usize),
    #[error("Previous output public key doesn't match the signing key")]
    InvalidPublicKey,
    #[error("Signature hash error: {0}")]
    SigningError(#[from] TransactionSigError),
    #[error("Signature error: {0}")]
    SignatureError(#[from] SignatureError),
}

pub type SignerResult<T> = Result<T, SignerError>;

/// Signature hashes and assembly of externally produced signatures.
pub trait SignatureHasher {
    /// Digest the signature of input `index` commits to.
    fn signature_hash(&self, tx: &MutableTransaction, index: usize) -> SignerResult<Vec<u8>>;

    /// Unlock data of input `index` built from `signatures[index]`, without recomputing
    /// the digest.
    fn unlock_data_from_signature(
        &self,
        tx: &MutableTransaction,
        index: usize,
        signatures: &[Vec<u8>],
    ) -> SignerResult<UnlockData>;
}

pub trait InputSigner: SignatureHasher {
    fn unlock_data(&self, tx: &MutableTransaction, index: usize) -> SignerResult<UnlockData>;
}

fn input_at(
    tx: &MutableTransaction,
    index: usize,
) -> SignerResult<&common::chain::InputToSign> {
    let inputs = tx.inputs_to_sign();
    inputs
        .get(index)
        .ok_or_else(|| TransactionSigError::InvalidInputIndex(index, inputs.len()).into())
}

/// Private key for the input's public key; any provider failure means the wallet can't sign.
fn signing_key<P: PrivateKeyProvider>(
    key_provider: &P,
    input: &common::chain::InputToSign,
) -> SignerResult<crypto::key::Secp256k1PrivateKey> {
    let key_info = &input.previous_output_public_key;
    let secret = key_provider
        .private_key_data(key_info.account, key_info.index, key_info.external)
        .map_err(|_| SignerError::NoPrivateKey)?;
    let private_key = crypto::key::Secp256k1PrivateKey::from_slice(&secret)
        .map_err(|_| SignerError::NoPrivateKey)?;
    // Compared as points, so inputs recorded with an uncompressed key still match.
    let expected_key = crypto::key::Secp256k1PublicKey::from_slice(&key_info.raw)
        .map_err(|_| SignerError::InvalidPublicKey)?;
    utils::ensure!(private_key.public_key() == expected_key, SignerError::InvalidPublicKey);
    Ok(private_key)
}
