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

//! Keys, outputs and transactions for the wallet unit tests.

use std::{collections::BTreeMap, sync::Arc};

use common::{
    chain::{
        config::create_regtest, ChainConfig, InputToSign, MutableTransaction, OutPoint,
        PublicKeyInfo, ScriptType, TxInput, TxOutput, UnspentOutput, SEQUENCE_FINAL,
    },
    primitives::H256,
};
use crypto::key::Secp256k1PrivateKey;
use randomness::{CryptoRng, Rng};
use script::templates;

use crate::{
    builder::{
        InputSelectionError, InputSetter, LockTimeSetter, NoSigner, OutputSetter,
        RecipientError, RecipientSetter, TransactionBuilder, TransactionDataSortType,
    },
    signer::InMemoryKeyProvider,
};

#[ctor::ctor]
fn init() {
    logging::init_logging();
}

pub fn regtest() -> Arc<ChainConfig> {
    Arc::new(create_regtest())
}

pub struct TestKey {
    pub private_key: Secp256k1PrivateKey,
    pub info: PublicKeyInfo,
}

pub fn make_key(rng: &mut (impl Rng + CryptoRng), account: u32, index: u32) -> TestKey {
    let private_key = Secp256k1PrivateKey::new(rng);
    let raw = private_key.public_key().serialize().to_vec();
    TestKey {
        private_key,
        info: PublicKeyInfo::new(account, index, true, raw),
    }
}

/// A previous output locked to `key` the way a wallet would record it.
pub fn locked_output(script_type: ScriptType, key: &TestKey, value: u64, index: u32) -> TxOutput {
    let key_hash = key.info.key_hash;
    let output =
        |script: script::Script| TxOutput::new(value, index, script.into_bytes(), script_type);
    match script_type {
        ScriptType::P2pkh => output(templates::p2pkh(&key_hash)).with_key_hash(key_hash.to_vec()),
        ScriptType::P2pk => output(templates::p2pk(&key.info.raw)),
        ScriptType::P2wpkh => output(templates::p2wpkh(&key_hash)).with_key_hash(key_hash.to_vec()),
        ScriptType::P2wpkhSh => {
            let redeem = templates::p2wpkh(&key_hash);
            output(templates::p2sh(&crypto::hash::hash160(&redeem)))
                .with_key_hash(key_hash.to_vec())
                .with_redeem_script(redeem.into_bytes())
        }
        ScriptType::P2sh => {
            let redeem = templates::p2pk(&key.info.raw);
            output(templates::p2sh(&crypto::hash::hash160(&redeem)))
                .with_redeem_script(redeem.into_bytes())
        }
        ScriptType::P2tr => {
            let output_key = key
                .private_key
                .public_key()
                .taproot_output_key()
                .expect("tweak of a random key");
            output(templates::p2tr(&output_key)).with_key_hash(output_key.to_vec())
        }
        ScriptType::Unknown | ScriptType::P2multi | ScriptType::P2wsh | ScriptType::NullData => {
            TxOutput::new(value, index, vec![0x51], script_type)
        }
    }
}

pub fn make_unspent(
    rng: &mut (impl Rng + CryptoRng),
    script_type: ScriptType,
    key: &TestKey,
) -> UnspentOutput {
    let value = rng.gen_range(10_000..1_000_000);
    let output = locked_output(script_type, key, value, rng.gen_range(0..4))
        .with_transaction_hash(H256(rng.gen()));
    UnspentOutput::new(output, key.info.clone(), Some(rng.gen_range(1..800_000)))
}

/// A transaction spending one input of each given type, plus the keys that can sign it.
pub fn make_transaction(
    rng: &mut (impl Rng + CryptoRng),
    script_types: &[ScriptType],
) -> (MutableTransaction, InMemoryKeyProvider) {
    let mut key_provider = InMemoryKeyProvider::new();
    let mut tx = MutableTransaction::new(true);

    for (index, script_type) in (0u32..).zip(script_types) {
        let key = make_key(rng, 0, index);
        key_provider.insert(0, index, true, key.private_key.secret_bytes().to_vec());
        let previous_output =
            locked_output(*script_type, &key, rng.gen_range(10_000..1_000_000), 0);
        let outpoint = OutPoint::new(H256(rng.gen()), rng.gen_range(0..4));
        tx.add_input(InputToSign::new(
            TxInput::new(outpoint, SEQUENCE_FINAL),
            previous_output,
            key.info,
        ));
    }

    let recipient = make_key(rng, 1, 0);
    tx.set_outputs(vec![
        locked_output(ScriptType::P2wpkh, &recipient, rng.gen_range(1_000..10_000), 0),
        locked_output(ScriptType::P2pkh, &recipient, rng.gen_range(1_000..10_000), 1),
    ]);
    tx.transaction.lock_time = rng.gen_range(0..500_000);
    (tx, key_provider)
}

pub const ALL_SIGNABLE: [ScriptType; 6] = [
    ScriptType::P2pkh,
    ScriptType::P2pk,
    ScriptType::P2wpkh,
    ScriptType::P2wpkhSh,
    ScriptType::P2sh,
    ScriptType::P2tr,
];

pub const STUB_CHANGE_ADDRESS: &str = "bcrt1qchange";

/// Fee-less setters for a straightforward build: every given coin is spent, the recipient
/// gets a P2PKH output carrying the first plugin entry, and whatever is left goes to change.
pub struct StubSetters;

impl RecipientSetter for StubSetters {
    fn set_recipient(
        &self,
        tx: &mut MutableTransaction,
        address: &str,
        memo: Option<&str>,
        value: u64,
        plugin_data: &BTreeMap<u8, Vec<u8>>,
        _skip_checks: bool,
    ) -> Result<(), RecipientError> {
        tx.recipient_address = Some(address.to_owned());
        tx.recipient_value = value;
        tx.memo = memo.map(str::to_owned);
        for (plugin_id, data) in plugin_data {
            tx.add_plugin_data(*plugin_id, data.clone());
        }
        Ok(())
    }
}

impl InputSetter for StubSetters {
    fn set_inputs(
        &self,
        tx: &mut MutableTransaction,
        _fee_rate: u64,
        _sender_pay: bool,
        unspent_outputs: Option<&[UnspentOutput]>,
        _sort_type: TransactionDataSortType,
        rbf_enabled: bool,
    ) -> Result<(), InputSelectionError> {
        let unspent_outputs = unspent_outputs.ok_or(InputSelectionError::NoUnspentOutputs)?;
        for unspent_output in unspent_outputs {
            tx.add_input(InputToSign::from_unspent_output(unspent_output, rbf_enabled));
        }
        let available: u64 = unspent_outputs.iter().map(|u| u.output.value).sum();
        let change = available.checked_sub(tx.recipient_value).ok_or(
            InputSelectionError::NotEnoughFunds {
                available,
                required: tx.recipient_value,
            },
        )?;
        if change > 0 {
            tx.change_address = Some(STUB_CHANGE_ADDRESS.to_owned());
            tx.change_value = change;
        }
        Ok(())
    }

    fn set_inputs_from_unspent_output(
        &self,
        tx: &mut MutableTransaction,
        unspent_output: &UnspentOutput,
        _fee_rate: u64,
        rbf_enabled: bool,
    ) -> Result<(), InputSelectionError> {
        tx.add_input(InputToSign::from_unspent_output(unspent_output, rbf_enabled));
        Ok(())
    }
}

impl LockTimeSetter for StubSetters {
    fn set_lock_time(&self, _tx: &mut MutableTransaction) {}
}

impl OutputSetter for StubSetters {
    fn set_outputs(&self, tx: &mut MutableTransaction, _sort_type: TransactionDataSortType) {
        let script = templates::p2pkh(&[0x42; 20]).into_bytes();
        let mut recipient = TxOutput::new(tx.recipient_value, 0, script, ScriptType::P2pkh);
        if let Some((plugin_id, data)) = tx.plugin_data().first_key_value() {
            recipient = recipient.with_plugin(*plugin_id, data.clone());
        }

        let mut outputs = vec![recipient];
        if tx.change_address.is_some() {
            let script = templates::p2wpkh(&[0x43; 20]).into_bytes();
            outputs.push(TxOutput::new(tx.change_value, 1, script, ScriptType::P2wpkh));
        }
        tx.set_outputs(outputs);
    }
}

pub fn stub_builder() -> TransactionBuilder<NoSigner> {
    let setters = Arc::new(StubSetters);
    TransactionBuilder::new(
        regtest(),
        setters.clone(),
        setters.clone(),
        setters.clone(),
        setters,
    )
}

/// Unspent outputs of the given types plus the keys that can spend them.
pub fn make_coins(
    rng: &mut (impl Rng + CryptoRng),
    script_types: &[ScriptType],
) -> (Vec<UnspentOutput>, InMemoryKeyProvider) {
    let mut key_provider = InMemoryKeyProvider::new();
    let unspent_outputs = (0u32..)
        .zip(script_types)
        .map(|(index, script_type)| {
            let key = make_key(rng, 0, index);
            key_provider.insert(0, index, true, key.private_key.secret_bytes().to_vec());
            make_unspent(rng, *script_type, &key)
        })
        .collect();
    (unspent_outputs, key_provider)
}
