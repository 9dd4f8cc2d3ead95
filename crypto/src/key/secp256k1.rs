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

use secp256k1::{ecdsa, schnorr, Keypair, Message, Scalar, XOnlyPublicKey, SECP256K1};
use zeroize::Zeroizing;

use super::{KeyError, SigAuxDataProvider, SignatureError};
use crate::hash;

const TAP_TWEAK_TAG: &str = "TapTweak";

pub const SECRET_KEY_SIZE: usize = secp256k1::constants::SECRET_KEY_SIZE;
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = secp256k1::constants::PUBLIC_KEY_SIZE;
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = secp256k1::constants::UNCOMPRESSED_PUBLIC_KEY_SIZE;
pub const SCHNORR_SIGNATURE_SIZE: usize = secp256k1::constants::SCHNORR_SIGNATURE_SIZE;

#[derive(Clone, PartialEq, Eq)]
pub struct Secp256k1PrivateKey {
    data: secp256k1::SecretKey,
}

impl std::fmt::Debug for Secp256k1PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secp256k1PrivateKey(<hidden>)")
    }
}

impl From<secp256k1::SecretKey> for Secp256k1PrivateKey {
    fn from(data: secp256k1::SecretKey) -> Self {
        Self { data }
    }
}

impl Secp256k1PrivateKey {
    pub fn new<R: randomness::Rng + randomness::CryptoRng>(rng: &mut R) -> Self {
        loop {
            let bytes = Zeroizing::new(rng.gen::<[u8; SECRET_KEY_SIZE]>());
            if let Ok(data) = secp256k1::SecretKey::from_slice(bytes.as_ref()) {
                return Self { data };
            }
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, KeyError> {
        secp256k1::SecretKey::from_slice(bytes)
            .map(|data| Self { data })
            .map_err(|_| KeyError::InvalidSecretKey)
    }

    pub fn secret_bytes(&self) -> Zeroizing<[u8; SECRET_KEY_SIZE]> {
        Zeroizing::new(self.data.secret_bytes())
    }

    pub fn public_key(&self) -> Secp256k1PublicKey {
        Secp256k1PublicKey {
            data: secp256k1::PublicKey::from_secret_key(SECP256K1, &self.data),
        }
    }

    /// RFC6979 deterministic ECDSA over a 32-byte digest, DER encoded.
    pub fn sign_ecdsa(&self, digest: &[u8; 32]) -> Vec<u8> {
        let msg = Message::from_digest(*digest);
        SECP256K1.sign_ecdsa(&msg, &self.data).serialize_der().to_vec()
    }

    /// BIP340 signature with the key tweaked for a script-less taproot output (BIP86).
    pub fn sign_schnorr_taproot<A: SigAuxDataProvider + ?Sized>(
        &self,
        digest: &[u8; 32],
        aux_data_provider: &mut A,
    ) -> Result<[u8; SCHNORR_SIGNATURE_SIZE], SignatureError> {
        let keypair = Keypair::from_secret_key(SECP256K1, &self.data);
        let (internal_key, _parity) = keypair.x_only_public_key();
        let tweak = tap_tweak_scalar(&internal_key)?;
        let tweaked = keypair
            .add_xonly_tweak(SECP256K1, &tweak)
            .map_err(|_| SignatureError::TweakFailed)?;

        let msg = Message::from_digest(*digest);
        let aux = aux_data_provider.get_secp256k1_schnorr_aux_data();
        let sig = SECP256K1.sign_schnorr_with_aux_rand(&msg, &tweaked, &aux);
        Ok(sig.serialize())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secp256k1PublicKey {
    data: secp256k1::PublicKey,
}

impl Secp256k1PublicKey {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, KeyError> {
        secp256k1::PublicKey::from_slice(bytes)
            .map(|data| Self { data })
            .map_err(|_| KeyError::InvalidPublicKey)
    }

    pub fn serialize(&self) -> [u8; COMPRESSED_PUBLIC_KEY_SIZE] {
        self.data.serialize()
    }

    /// Legacy 65-byte encoding, still found on old P2PK and P2PKH outputs.
    pub fn serialize_uncompressed(&self) -> [u8; UNCOMPRESSED_PUBLIC_KEY_SIZE] {
        self.data.serialize_uncompressed()
    }

    pub fn x_only(&self) -> [u8; 32] {
        self.data.x_only_public_key().0.serialize()
    }

    /// RIPEMD160(SHA256(compressed key)), the payload of P2PKH and P2WPKH scripts.
    pub fn hash160(&self) -> [u8; 20] {
        hash::hash160(self.serialize())
    }

    /// X-only output key of a BIP86 taproot output committing to no script tree.
    pub fn taproot_output_key(&self) -> Result<[u8; 32], SignatureError> {
        let (internal_key, _parity) = self.data.x_only_public_key();
        let tweak = tap_tweak_scalar(&internal_key)?;
        let (output_key, _parity) = internal_key
            .add_tweak(SECP256K1, &tweak)
            .map_err(|_| SignatureError::TweakFailed)?;
        Ok(output_key.serialize())
    }

    pub fn verify_ecdsa(&self, digest: &[u8; 32], der_signature: &[u8]) -> bool {
        let sig = match ecdsa::Signature::from_der(der_signature) {
            Ok(sig) => sig,
            Err(_) => return false,
        };
        let msg = Message::from_digest(*digest);
        SECP256K1.verify_ecdsa(&msg, &sig, &self.data).is_ok()
    }

    /// Verifies a signature made by [`Secp256k1PrivateKey::sign_schnorr_taproot`].
    pub fn verify_schnorr_taproot(&self, digest: &[u8; 32], signature: &[u8]) -> bool {
        let sig = match schnorr::Signature::from_slice(signature) {
            Ok(sig) => sig,
            Err(_) => return false,
        };
        let output_key = match self
            .taproot_output_key()
            .ok()
            .and_then(|key| XOnlyPublicKey::from_slice(&key).ok())
        {
            Some(key) => key,
            None => return false,
        };
        let msg = Message::from_digest(*digest);
        SECP256K1.verify_schnorr(&sig, &msg, &output_key).is_ok()
    }
}

fn tap_tweak_scalar(internal_key: &XOnlyPublicKey) -> Result<Scalar, SignatureError> {
    let tweak = hash::tagged_hash(TAP_TWEAK_TAG, internal_key.serialize());
    Scalar::from_be_bytes(tweak).map_err(|_| SignatureError::TweakFailed)
}
