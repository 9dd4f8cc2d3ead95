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

use randomness::Rng;

/// Source of the auxiliary randomness mixed into BIP340 signatures.
pub trait SigAuxDataProvider {
    fn get_secp256k1_schnorr_aux_data(&mut self) -> [u8; 32];
}

/// Fresh randomness for every signature; the default for real signing.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSigAuxDataProvider;

impl SigAuxDataProvider for RandomSigAuxDataProvider {
    fn get_secp256k1_schnorr_aux_data(&mut self) -> [u8; 32] {
        randomness::make_true_rng().gen::<[u8; 32]>()
    }
}

/// Always all-zero aux data, which makes Schnorr signatures reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct PredefinedSigAuxDataProvider;

impl SigAuxDataProvider for PredefinedSigAuxDataProvider {
    fn get_secp256k1_schnorr_aux_data(&mut self) -> [u8; 32] {
        [0; 32]
    }
}
