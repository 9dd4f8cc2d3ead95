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

use common::chain::signature::TransactionSigError;

use crate::{
    builder::{InputSelectionError, RecipientError},
    creator::{ProcessCreatedError, SendError},
    signer::SignerError,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Recipient error: {0}")]
    Recipient(#[from] RecipientError),
    #[error("Input selection error: {0}")]
    InputSelection(#[from] InputSelectionError),
    #[error("Signer error: {0}")]
    Signer(#[from] SignerError),
    #[error("Send error: {0}")]
    Send(#[from] SendError),
    #[error("Failed to register created transaction: {0}")]
    ProcessCreated(#[from] ProcessCreatedError),
    #[error("Transaction signature error: {0}")]
    TransactionSig(#[from] TransactionSigError),
}

pub type WalletResult<T> = Result<T, WalletError>;
