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

//! Tools for interrupting function flow unless some condition holds.

/// Early exit if given condition is not satisfied.
///
/// There are two variants:
/// * `ensure!(cond)` returns from the enclosing function with [`None`] if `cond` fails
/// * `ensure!(cond, err)` returns from the function with [`Err`]`(err)` if `cond` fails
///
/// Example with [Option]:
/// ```
/// # use utils::ensure;
/// fn input_at(inputs: &[u32], index: usize) -> Option<u32> {
///     ensure!(index < inputs.len());
///     Some(inputs[index])
/// }
///
/// assert_eq!(input_at(&[7, 8], 1), Some(8));
/// assert_eq!(input_at(&[7, 8], 2), None);
/// ```
///
/// Example with [Result]:
/// ```
/// # use utils::ensure;
/// # #[derive(PartialEq, Eq, Debug)]
/// enum ScriptError {
///     Empty,
///     TooLong,
/// }
///
/// fn check_script(script: &[u8]) -> Result<usize, ScriptError> {
///     ensure!(!script.is_empty(), ScriptError::Empty);
///     ensure!(script.len() <= 10_000, ScriptError::TooLong);
///     Ok(script.len())
/// }
///
/// assert_eq!(check_script(&[0x51]), Ok(1));
/// assert_eq!(check_script(&[]), Err(ScriptError::Empty));
/// assert_eq!(check_script(&[0; 10_001]), Err(ScriptError::TooLong));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        $cond.then(|| ())?
    };
    ($cond:expr, $err:expr $(,)?) => {
        $cond.then(|| ()).ok_or_else(|| $err)?
    };
}
