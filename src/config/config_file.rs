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
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	pub imports: Option<Imports>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Imports {
	pub cnb: Option<Cnb>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Cnb {
	pub feed_url: Option<String>,
	pub timeout_secs: Option<u64>,

	/// Target currency codes to build conversion columns for.
	pub currencies: Option<Vec<String>>,

	/// Currencies to convert from. The feed is koruna-relative, so
	/// anything other than CZK here makes a run abort with a
	/// diagnostic.
	pub base_currencies: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_config_parses() {
		let config: Config = toml::from_str("").unwrap();
		assert!(config.imports.is_none());
	}

	#[test]
	fn test_full_cnb_table_parses() {
		let config: Config = toml::from_str(
			r#"
			[imports.cnb]
			feed_url = "https://example.org/denni_kurz.txt"
			timeout_secs = 30
			currencies = ["CZK", "EUR", "USD"]
			base_currencies = ["CZK"]
			"#,
		)
		.unwrap();

		let cnb = config.imports.unwrap().cnb.unwrap();
		assert_eq!(cnb.timeout_secs, Some(30));
		assert_eq!(
			cnb.currencies,
			Some(vec![
				"CZK".to_string(),
				"EUR".to_string(),
				"USD".to_string()
			])
		);
	}
}
