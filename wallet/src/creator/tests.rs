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

use rstest::rstest;

use common::chain::{signature::StandardSerializer, ScriptType};
use randomness::Rng;
use test_utils::random::{make_seedable_rng, Seed};

use super::*;
use crate::{
    signer::{InMemoryKeyProvider, PrivateKeyProvider, ScriptTypeInputSigner, SignerError},
    test_helpers::{make_coins, regtest, stub_builder},
    WalletError,
};

mockall::mock! {
    pub Sender {}

    impl TransactionSender for Sender {
        fn verify_can_send(&self) -> Result<(), SendError>;
        fn send(&self, tx: &FullTransaction) -> Result<(), SendError>;
    }
}

mockall::mock! {
    pub Processor {}

    impl PendingTransactionProcessor for Processor {
        fn process_created(&self, tx: &FullTransaction) -> Result<(), ProcessCreatedError>;
    }
}

mockall::mock! {
    pub BloomFilter {}

    impl BloomFilterManager for BloomFilter {
        fn regenerate_bloom_filter(&self);
    }
}

type TestCreator = TransactionCreator<ScriptTypeInputSigner<Arc<InMemoryKeyProvider>>>;

fn creator(
    keys: InMemoryKeyProvider,
    sender: MockSender,
    processor: MockProcessor,
    bloom_filter: MockBloomFilter,
) -> TestCreator {
    let signer = TransactionSigner::new(ScriptTypeInputSigner::new(regtest(), Arc::new(keys)));
    TransactionCreator::new(
        stub_builder().with_signer(signer),
        Arc::new(StandardSerializer::default()),
        Arc::new(sender),
        Arc::new(processor),
        Arc::new(bloom_filter),
    )
}

fn params(rng: &mut impl Rng, unspent_outputs: Vec<UnspentOutput>) -> SendParams {
    let mut params = SendParams::new("bcrt1qrecipient", rng.gen_range(1_000..10_000), 2);
    params.unspent_outputs = Some(unspent_outputs);
    params
}

/// Sender and processor expecting one full hand-off, in order.
fn expect_hand_off(seq: &mut mockall::Sequence) -> (MockSender, MockProcessor) {
    let mut sender = MockSender::new();
    let mut processor = MockProcessor::new();
    sender.expect_verify_can_send().times(1).in_sequence(seq).returning(|| Ok(()));
    processor.expect_process_created().times(1).in_sequence(seq).returning(|_| Ok(()));
    sender.expect_send().times(1).in_sequence(seq).returning(|_| Ok(()));
    (sender, processor)
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn create_signs_registers_and_sends(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let (unspent, keys) = make_coins(&mut rng, &[ScriptType::P2wpkh, ScriptType::P2tr]);
    let available: u64 = unspent.iter().map(|u| u.output.value).sum();
    let mut params = params(&mut rng, unspent);
    let plugin_data = test_utils::random_bytes(&mut rng, 8);
    params.plugin_data.insert(3, plugin_data.clone());

    let mut seq = mockall::Sequence::new();
    let (sender, processor) = expect_hand_off(&mut seq);
    let creator = creator(keys, sender, processor, MockBloomFilter::new());

    let tx = creator.create(&params).unwrap();
    assert!(tx.is_outgoing);
    assert_eq!(tx.inputs.len(), 2);
    assert!(tx.inputs.iter().all(|input| input.is_unlocked()));
    assert!(tx.header.segwit);

    assert_eq!(tx.outputs.len(), 2);
    assert_eq!(tx.outputs[0].value, params.value);
    assert_eq!(tx.outputs[0].plugin_id, Some(3));
    assert_eq!(tx.outputs[0].plugin_data, Some(plugin_data));
    assert_eq!(tx.outputs[1].value, available - params.value);
    assert_eq!(tx.outputs[1].index, 1);
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn sender_not_ready_registers_nothing(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let (unspent, keys) = make_coins(&mut rng, &[ScriptType::P2pkh]);
    let params = params(&mut rng, unspent);

    let mut sender = MockSender::new();
    sender.expect_verify_can_send().times(1).returning(|| Err(SendError::NotSynced));
    let creator = creator(keys, sender, MockProcessor::new(), MockBloomFilter::new());

    assert_eq!(
        creator.create(&params),
        Err(WalletError::Send(SendError::NotSynced))
    );
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn expired_bloom_filter_is_regenerated(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let (unspent, keys) = make_coins(&mut rng, &[ScriptType::P2wpkhSh]);
    let params = params(&mut rng, unspent);

    let mut seq = mockall::Sequence::new();
    let mut sender = MockSender::new();
    let mut processor = MockProcessor::new();
    let mut bloom_filter = MockBloomFilter::new();
    sender.expect_verify_can_send().times(1).in_sequence(&mut seq).returning(|| Ok(()));
    processor
        .expect_process_created()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(ProcessCreatedError::BloomFilterExpired));
    bloom_filter
        .expect_regenerate_bloom_filter()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| ());
    sender.expect_send().times(1).in_sequence(&mut seq).returning(|_| Ok(()));

    let creator = creator(keys, sender, processor, bloom_filter);
    assert!(creator.create(&params).is_ok());
}

#[rstest]
#[trace]
#[case(Seed::from_entropy(), ProcessCreatedError::TransactionAlreadyExists(H256::repeat_byte(9)))]
#[trace]
#[case(Seed::from_entropy(), ProcessCreatedError::Storage("disk full".to_owned()))]
fn other_registration_errors_stop_the_send(
    #[case] seed: Seed,
    #[case] registration_error: ProcessCreatedError,
) {
    let mut rng = make_seedable_rng(seed);
    let (unspent, keys) = make_coins(&mut rng, &[ScriptType::P2pkh]);
    let params = params(&mut rng, unspent);

    let mut sender = MockSender::new();
    let mut processor = MockProcessor::new();
    sender.expect_verify_can_send().times(1).returning(|| Ok(()));
    let returned_error = registration_error.clone();
    processor
        .expect_process_created()
        .times(1)
        .returning(move |_| Err(returned_error.clone()));

    let creator = creator(keys, sender, processor, MockBloomFilter::new());
    assert_eq!(
        creator.create(&params),
        Err(WalletError::ProcessCreated(registration_error))
    );
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn send_failure_is_reported(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let (unspent, keys) = make_coins(&mut rng, &[ScriptType::P2wpkh]);
    let params = params(&mut rng, unspent);

    let mut sender = MockSender::new();
    let mut processor = MockProcessor::new();
    sender.expect_verify_can_send().returning(|| Ok(()));
    processor.expect_process_created().returning(|_| Ok(()));
    sender
        .expect_send()
        .times(1)
        .returning(|_| Err(SendError::Rejected("min relay fee not met".to_owned())));

    let creator = creator(keys, sender, processor, MockBloomFilter::new());
    assert_eq!(
        creator.create(&params),
        Err(WalletError::Send(SendError::Rejected(
            "min relay fee not met".to_owned()
        )))
    );
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn raw_transaction_is_not_sent(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let (unspent, keys) = make_coins(&mut rng, &[ScriptType::P2pkh, ScriptType::P2wpkh]);
    let params = params(&mut rng, unspent);

    let creator = creator(keys, MockSender::new(), MockProcessor::new(), MockBloomFilter::new());
    let raw = creator.create_raw_transaction(&params).unwrap();

    let signed = creator.builder().build_signed_transaction(&params).unwrap();
    assert_eq!(raw, StandardSerializer::default().serialize(&signed));
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn sweep_spends_single_output(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let (unspent, keys) = make_coins(&mut rng, &[ScriptType::P2wpkh]);

    let mut seq = mockall::Sequence::new();
    let (sender, processor) = expect_hand_off(&mut seq);
    let creator = creator(keys, sender, processor, MockBloomFilter::new());

    let tx = creator
        .create_from_unspent_output(
            &unspent[0],
            "bcrt1qsweep",
            None,
            1,
            TransactionDataSortType::None,
            false,
        )
        .unwrap();
    assert!(!tx.is_outgoing);
    assert_eq!(tx.inputs.len(), 1);
    assert_eq!(tx.outputs[0].value, unspent[0].output.value);
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn externally_signed_transaction_is_sent(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let (unspent, keys) = make_coins(&mut rng, &[ScriptType::P2pkh]);
    let params = params(&mut rng, unspent);
    let secret = keys.private_key_data(0, 0, true).unwrap();

    let mut seq = mockall::Sequence::new();
    let (sender, processor) = expect_hand_off(&mut seq);
    let creator = creator(keys, sender, processor, MockBloomFilter::new());

    let (tx, hashes) = creator.build(&params).unwrap();
    let key = crypto::key::Secp256k1PrivateKey::from_slice(&secret).unwrap();
    let digest: [u8; 32] = hashes[0].as_slice().try_into().unwrap();
    let sent = creator.finalize(tx, &[key.sign_ecdsa(&digest)]).unwrap();
    assert!(sent.inputs[0].is_unlocked());
}

#[rstest]
#[trace]
#[case(Seed::from_entropy())]
fn finalize_without_signatures_sends_nothing(#[case] seed: Seed) {
    let mut rng = make_seedable_rng(seed);
    let (unspent, keys) = make_coins(&mut rng, &[ScriptType::P2wpkh]);
    let params = params(&mut rng, unspent);

    let creator = creator(keys, MockSender::new(), MockProcessor::new(), MockBloomFilter::new());
    let (tx, _) = creator.build(&params).unwrap();

    assert_eq!(
        creator.finalize(tx, &[]),
        Err(WalletError::Signer(SignerError::MissingSignature(0)))
    );
}
