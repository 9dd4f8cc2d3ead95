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

mod log_style;
mod utils;

use std::io::Write;

pub use log;

pub use log_style::{get_log_style_from_env, LogStyle, LogStyleParseError, TextColoring};
pub use utils::{get_from_env, GetFromEnvError};

/// Env var that selects the output format, see [LogStyle::parse] for the accepted values.
pub const LOG_STYLE_ENV_VAR: &str = "SIGNER_LOG_STYLE";

/// Env var with the `env_logger` filter directives, e.g. `wallet=debug`.
pub const LOG_FILTER_ENV_VAR: &str = "SIGNER_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

static INITIALIZE_LOGGER_ONCE_FLAG: std::sync::Once = std::sync::Once::new();

/// Initialize the global logger. Calling it more than once is harmless; only the first call
/// has an effect.
pub fn init_logging() {
    INITIALIZE_LOGGER_ONCE_FLAG.call_once(|| {
        // A malformed style must not prevent logging from working at all.
        let style = match get_log_style_from_env(LOG_STYLE_ENV_VAR) {
            Ok(style) => style.unwrap_or(LogStyle::Text(TextColoring::Auto)),
            Err(err) => {
                eprintln!("Ignoring {LOG_STYLE_ENV_VAR}: {err}");
                LogStyle::Text(TextColoring::Auto)
            }
        };

        let mut builder = env_logger::Builder::from_env(
            env_logger::Env::default().filter_or(LOG_FILTER_ENV_VAR, DEFAULT_LOG_FILTER),
        );

        match style {
            LogStyle::Text(coloring) => {
                builder.write_style(match coloring {
                    TextColoring::On => env_logger::WriteStyle::Always,
                    TextColoring::Off => env_logger::WriteStyle::Never,
                    TextColoring::Auto => env_logger::WriteStyle::Auto,
                });
            }
            LogStyle::Json => {
                builder.format(|buf, record| {
                    let line = serde_json::json!({
                        "timestamp": buf.timestamp_millis().to_string(),
                        "level": record.level().as_str(),
                        "target": record.target(),
                        "message": record.args().to_string(),
                    });
                    writeln!(buf, "{line}")
                });
            }
        }

        // Somebody else (e.g. the embedding application) may have installed a logger already.
        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_twice() {
        init_logging();
        init_logging();
        log::info!("logger initialized");
    }
}
