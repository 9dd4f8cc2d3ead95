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

use super::ScriptType;
use crate::primitives::{Amount, H256};

/// Assembles a custom P2SH signature script from the input's unlock data.
#[derive(Clone)]
pub struct SignatureScriptFn(Arc<dyn Fn(&[Vec<u8>]) -> Vec<u8> + Send + Sync>);

impl SignatureScriptFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Vec<u8>]) -> Vec<u8> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, unlock_data: &[Vec<u8>]) -> Vec<u8> {
        (self.0)(unlock_data)
    }
}

impl std::fmt::Debug for SignatureScriptFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SignatureScriptFn(..)")
    }
}

/// Two functions are equal only if they are the same shared instance.
impl PartialEq for SignatureScriptFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for SignatureScriptFn {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutput {
    pub value: Amount,
    pub index: u32,
    pub locking_script: Vec<u8>,
    pub script_type: ScriptType,
    pub redeem_script: Option<Vec<u8>>,
    pub signature_script_fn: Option<SignatureScriptFn>,
    /// Public key hash for key-hash types, output key for P2TR.
    pub key_hash: Option<Vec<u8>>,
    pub transaction_hash: H256,
    pub plugin_id: Option<u8>,
    pub plugin_data: Option<Vec<u8>>,
}

impl TxOutput {
    pub fn new(
        value: Amount,
        index: u32,
        locking_script: Vec<u8>,
        script_type: ScriptType,
    ) -> Self {
        Self {
            value,
            index,
            locking_script,
            script_type,
            redeem_script: None,
            signature_script_fn: None,
            key_hash: None,
            transaction_hash: H256::zero(),
            plugin_id: None,
            plugin_data: None,
        }
    }

    pub fn with_key_hash(mut self, key_hash: Vec<u8>) -> Self {
        self.key_hash = Some(key_hash);
        self
    }

    pub fn with_redeem_script(mut self, redeem_script: Vec<u8>) -> Self {
        self.redeem_script = Some(redeem_script);
        self
    }

    pub fn with_signature_script_fn(mut self, f: SignatureScriptFn) -> Self {
        self.signature_script_fn = Some(f);
        self
    }

    pub fn with_transaction_hash(mut self, transaction_hash: H256) -> Self {
        self.transaction_hash = transaction_hash;
        self
    }

    pub fn with_plugin(mut self, plugin_id: u8, plugin_data: Vec<u8>) -> Self {
        self.plugin_id = Some(plugin_id);
        self.plugin_data = Some(plugin_data);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_script_fn_identity() {
        let f = SignatureScriptFn::new(|items| items.concat());
        let g = SignatureScriptFn::new(|items| items.concat());
        assert_eq!(f, f.clone());
        assert_ne!(f, g);
        assert_eq!(f.call(&[vec![1], vec![2, 3]]), vec![1, 2, 3]);
        assert_eq!(format!("{f:?}"), "SignatureScriptFn(..)");
    }
}
