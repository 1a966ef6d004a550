/* Copyright © 2025 cnb-rates contributors
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
pub mod config_file;

use crate::config::config_file::Config;
use anyhow::{anyhow, Error};
use dirs::home_dir;
use std::fs;
use std::fs::File;
use std::path::PathBuf;

/// Fetches the config from the given path, or the default path if
/// none. The default config file is created empty on first use so a
/// fresh install runs with built-in defaults.
pub fn load(custom_config_path: Option<&String>) -> Result<Config, Error> {
	let config_path = match &custom_config_path {
		None => {
			let home_dir = home_dir().ok_or_else(|| {
				anyhow!("Unable to determine home directory")
			})?;
			home_dir.join(".config/cnb-rates/config.toml")
		},
		Some(p) => PathBuf::from(p),
	};

	// create empty config file if it doesn't exist
	if !config_path.exists() && custom_config_path.is_none() {
		if let Some(parent) = config_path.parent() {
			fs::create_dir_all(parent)?;
		}
		File::create(config_path.clone())?;
	}

	let content = fs::read_to_string(config_path)?;
	let config: Config = toml::from_str(&content)
		.map_err(|e| anyhow!("failed to parse config: {}", e))?;

	Ok(config)
}
