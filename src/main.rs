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
use anyhow::Error;
use clap::Parser;
use cnb_rates::config;
use cnb_rates::import::cnb::core::{
	CnbImporter, FileSource, HttpSource, CNB_FEED_URL, DEFAULT_TIMEOUT_SECS,
	NATIVE_CURRENCY,
};
use std::time::Duration;

#[derive(Parser)]
#[command(
	name = "cnb-rates",
	version,
	about = "Czech National Bank daily rate import tool"
)]
struct Cli {
	/// Target currency code to convert into; repeatable. Overrides the
	/// configured list.
	#[arg(short, long = "currency")]
	currencies: Vec<String>,

	/// Read the feed from a local file instead of the bank endpoint
	#[arg(short, long)]
	file: Option<String>,

	/// Custom config file location (default: ~/.config/cnb-rates/config.toml)
	#[arg(long)]
	config: Option<String>,
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();

	let config = config::load(args.config.as_ref())?;
	let cnb = config.imports.unwrap_or_default().cnb.unwrap_or_default();

	let targets = if args.currencies.is_empty() {
		cnb.currencies.unwrap_or_default()
	} else {
		args.currencies
	};

	// Absent explicit configuration the base set is the native
	// currency itself, which is the only base the feed can serve.
	let bases = cnb
		.base_currencies
		.unwrap_or_else(|| vec![NATIVE_CURRENCY.to_string()]);

	let result = match &args.file {
		Some(path) => {
			CnbImporter::new(FileSource::new(path)).run(&bases, &targets)
		},
		None => {
			let url = cnb.feed_url.unwrap_or_else(|| CNB_FEED_URL.to_string());
			let timeout =
				Duration::from_secs(cnb.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

			let source = HttpSource::new(&url, timeout)?;
			CnbImporter::new(source).run(&bases, &targets)
		},
	};

	for message in &result.messages {
		println!("{}", message);
	}
	println!("{}", serde_json::to_string_pretty(&result)?);

	Ok(())
}
