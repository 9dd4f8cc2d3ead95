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

//! Hash functions used by Bitcoin transaction signing.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

pub const SHA256_OUTPUT_SIZE: usize = 32;
pub const HASH160_OUTPUT_SIZE: usize = 20;

pub fn sha256<T: AsRef<[u8]>>(data: T) -> [u8; SHA256_OUTPUT_SIZE] {
    Sha256::digest(data.as_ref()).into()
}

/// SHA256 applied twice, the digest used by legacy and segwit v0 signature hashes and txids.
pub fn sha256d<T: AsRef<[u8]>>(data: T) -> [u8; SHA256_OUTPUT_SIZE] {
    sha256(sha256(data))
}

/// RIPEMD160(SHA256(data)), the key hash committed to by P2PKH and P2WPKH outputs.
pub fn hash160<T: AsRef<[u8]>>(data: T) -> [u8; HASH160_OUTPUT_SIZE] {
    Ripemd160::digest(sha256(data)).into()
}

/// BIP340 tagged hash: `SHA256(SHA256(tag) || SHA256(tag) || data)`.
pub fn tagged_hash<T: AsRef<[u8]>>(tag: &str, data: T) -> [u8; SHA256_OUTPUT_SIZE] {
    let tag_hash = sha256(tag.as_bytes());
    let mut hasher = StreamHasher::new();
    hasher.write(tag_hash);
    hasher.write(tag_hash);
    hasher.write(data);
    hasher.finalize()
}

/// Incremental SHA256, for pre-images assembled piecewise.
#[derive(Clone, Default)]
pub struct StreamHasher {
    hasher: Sha256,
}

impl StreamHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write<T: AsRef<[u8]>>(&mut self, in_bytes: T) -> &mut Self {
        self.hasher.update(in_bytes);
        self
    }

    pub fn finalize(&mut self) -> [u8; SHA256_OUTPUT_SIZE] {
        self.hasher.finalize_reset().into()
    }
}
