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

use std::sync::Arc;

use rstest::rstest;

use common::chain::{
    config::create_bitcoin_cash,
    signature::{StandardSerializer, TransactionSerializer, TransactionSigError},
    ScriptType,
};
use crypto::key::Secp256k1PublicKey;
use randomness::Rng;
use test_utils::random::{make_seedable_rng, Seed};

use super::*;
use crate::signer::{InMemoryKeyProvider, KeyProviderError};
use crate::test_helpers::{make_key, make_transaction, regtest, ALL_SIGNABLE};

mockall::mock! {
    pub KeyProvider {}

    impl PrivateKeyProvider for KeyProvider {
        fn private_key_data(
            &self,
            account: u32,
            index: u32,
            external: bool,
        ) -> Result<zeroize::Zeroizing<Vec<u8>>, KeyProviderError>;
    }
}

const ECDSA_TYPES: [ScriptType; 5] = [
    ScriptType::P2pkh,
    ScriptType::P2pk,
    ScriptType::P2wpkh,
    ScriptType::P2wpkhSh,
    ScriptType::P2sh,
];

fn expected_digest(
    chain_config: &ChainConfig,
    tx: &MutableTransaction,
    index: usize,
    forked: bool,
) -> [u8; 32] {
    let serializer = StandardSerializer::new(chain_config.sighash_type());
    let mut preimage = serializer
        .serialized_for_signature(&tx.transaction, tx.inputs_to_sign(), tx.outputs(), index, forked)
        .unwrap();
    preimage.extend_from_slice(&u32::from(chain_config.sighash_type().get()).to_le_bytes());
    crypto::hash::sha256d(preimage)
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn unlock_data_arity_and_signature(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let (tx, keys) = make_transaction(&mut rng, &ECDSA_TYPES);
    let signer = EcdsaInputSigner::new(regtest(), keys);

    for (index, input) in tx.inputs_to_sign().iter().enumerate() {
        let unlock = signer.unlock_data(&tx, index).unwrap();
        let signature = &unlock[0];
        assert_eq!(signature[0], 0x30);
        assert_eq!(*signature.last().unwrap(), 0x01);

        match input.previous_output.script_type {
            ScriptType::P2pk => assert_eq!(unlock.len(), 1),
            _ => {
                assert_eq!(unlock.len(), 2);
                assert_eq!(unlock[1], input.previous_output_public_key.raw);
            }
        }

        let digest: [u8; 32] = signer.signature_hash(&tx, index).unwrap().try_into().unwrap();
        let public_key =
            Secp256k1PublicKey::from_slice(&input.previous_output_public_key.raw).unwrap();
        assert!(public_key.verify_ecdsa(&digest, &signature[..signature.len() - 1]));
    }
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn witness_inputs_use_bip143(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let chain_config = regtest();
    let (tx, _keys) = make_transaction(&mut rng, &ECDSA_TYPES);
    let signer = EcdsaInputSigner::hash_only(Arc::clone(&chain_config));

    for (index, input) in tx.inputs_to_sign().iter().enumerate() {
        let forked = input.previous_output.script_type.is_ecdsa_witness();
        assert_eq!(
            signer.signature_hash(&tx, index).unwrap(),
            expected_digest(&chain_config, &tx, index, forked).to_vec()
        );
    }
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn forked_chain_always_uses_bip143(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let chain_config = Arc::new(create_bitcoin_cash());
    let (tx, keys) = make_transaction(&mut rng, &[ScriptType::P2pkh, ScriptType::P2pk]);
    let signer = EcdsaInputSigner::new(Arc::clone(&chain_config), keys);

    for index in 0..tx.inputs_to_sign().len() {
        assert_eq!(
            signer.signature_hash(&tx, index).unwrap(),
            expected_digest(&chain_config, &tx, index, true).to_vec()
        );
        let unlock = signer.unlock_data(&tx, index).unwrap();
        assert_eq!(*unlock[0].last().unwrap(), 0x41);
    }
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn direct_and_external_signatures_match(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let script_type = ECDSA_TYPES[rng.gen_range(0..ECDSA_TYPES.len())];
    let key = make_key(&mut rng, 0, 0);
    let (mut tx, _) = make_transaction(&mut rng, &[script_type]);

    // Re-key the input so the test holds the private key directly.
    let mut keys = InMemoryKeyProvider::new();
    keys.insert(0, 0, true, key.private_key.secret_bytes().to_vec());
    let input = tx.input_to_sign_mut(0).unwrap();
    input.previous_output = crate::test_helpers::locked_output(script_type, &key, 50_000, 0);
    input.previous_output_public_key = key.info.clone();

    let signer = EcdsaInputSigner::new(regtest(), keys);
    let digest: [u8; 32] = signer.signature_hash(&tx, 0).unwrap().try_into().unwrap();
    let external = vec![key.private_key.sign_ecdsa(&digest)];

    assert_eq!(
        signer.unlock_data_from_signature(&tx, 0, &external).unwrap(),
        signer.unlock_data(&tx, 0).unwrap()
    );
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn missing_or_wrong_key(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let (tx, _keys) = make_transaction(&mut rng, &[ScriptType::P2pkh]);

    let signer = EcdsaInputSigner::new(regtest(), InMemoryKeyProvider::new());
    assert_eq!(signer.unlock_data(&tx, 0), Err(SignerError::NoPrivateKey));

    let mut wrong_keys = InMemoryKeyProvider::new();
    wrong_keys.insert(0, 0, true, make_key(&mut rng, 0, 0).private_key.secret_bytes().to_vec());
    let signer = EcdsaInputSigner::new(regtest(), wrong_keys);
    assert_eq!(signer.unlock_data(&tx, 0), Err(SignerError::InvalidPublicKey));

    let mut garbage_keys = InMemoryKeyProvider::new();
    garbage_keys.insert(0, 0, true, vec![0; 32]);
    let signer = EcdsaInputSigner::new(regtest(), garbage_keys);
    assert_eq!(signer.unlock_data(&tx, 0), Err(SignerError::NoPrivateKey));

    let mut locked_storage = MockKeyProvider::new();
    locked_storage
        .expect_private_key_data()
        .withf(|account, index, external| (*account, *index, *external) == (0, 0, true))
        .times(1)
        .returning(|_, _, _| Err(KeyProviderError::Storage("keystore locked".to_owned())));
    let signer = EcdsaInputSigner::new(regtest(), locked_storage);
    assert_eq!(signer.unlock_data(&tx, 0), Err(SignerError::NoPrivateKey));
}

#[rstest]
#[trace]
#[case(Seed::from_entropy(), ScriptType::P2pkh)]
#[trace]
#[case(Seed::from_entropy(), ScriptType::P2pk)]
fn uncompressed_key_is_accepted(#[case] seed: Seed, #[case] script_type: ScriptType) {
    let mut rng = make_seedable_rng(seed);
    let (mut tx, keys) = make_transaction(&mut rng, &[script_type]);
    let input = tx.input_to_sign_mut(0).unwrap();
    let uncompressed = Secp256k1PublicKey::from_slice(&input.previous_output_public_key.raw)
        .unwrap()
        .serialize_uncompressed()
        .to_vec();
    input.previous_output_public_key =
        common::chain::PublicKeyInfo::new(0, 0, true, uncompressed.clone());

    let signer = EcdsaInputSigner::new(regtest(), keys);
    let unlock_data = signer.unlock_data(&tx, 0).unwrap();
    match script_type {
        ScriptType::P2pkh => assert_eq!(unlock_data[1], uncompressed),
        _ => assert_eq!(unlock_data.len(), 1),
    }
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn missing_signature_and_bad_index(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let (tx, keys) = make_transaction(&mut rng, &[ScriptType::P2pkh, ScriptType::P2wpkh]);
    let signer = EcdsaInputSigner::new(regtest(), keys);

    assert_eq!(
        signer.unlock_data_from_signature(&tx, 1, &[vec![0x30]]),
        Err(SignerError::MissingSignature(1))
    );
    assert_eq!(
        signer.signature_hash(&tx, 2),
        Err(SignerError::SigningError(TransactionSigError::InvalidInputIndex(2, 2)))
    );
    assert_eq!(
        signer.unlock_data(&tx, 7),
        Err(SignerError::SigningError(TransactionSigError::InvalidInputIndex(7, 2)))
    );
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn hash_only_matches_keyed_signer(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let (tx, keys) = make_transaction(&mut rng, &ALL_SIGNABLE[..5]);
    let keyed = EcdsaInputSigner::new(regtest(), keys);
    let hash_only = EcdsaInputSigner::hash_only(regtest());

    for index in 0..tx.inputs_to_sign().len() {
        let hash = hash_only.signature_hash(&tx, index).unwrap();
        assert_eq!(hash.len(), 32);
        assert_eq!(hash, keyed.signature_hash(&tx, index).unwrap());
        assert_eq!(hash, hash_only.signature_hash(&tx, index).unwrap());
    }
}
