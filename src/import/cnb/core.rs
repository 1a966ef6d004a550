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
use crate::import::cnb::feed;
use crate::import::http::Client;
use crate::rates::conversion::NativeRelativeConversion;
use crate::rates::matrix::{self, ConversionMatrix};
use anyhow::Error;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::time::Duration;

pub const CNB_FEED_URL: &str = "https://www.cnb.cz/cs/financni-trhy/devizovy-trh/kurzy-devizoveho-trhu/kurzy-devizoveho-trhu/denni_kurz.txt";

/// Every rate in the feed is quoted against the koruna, so it is the
/// only permissible base currency.
pub const NATIVE_CURRENCY: &str = "CZK";

pub const DEFAULT_TIMEOUT_SECS: u64 = 100;

/// One initial fetch plus exactly one retry.
const MAX_FETCH_ATTEMPTS: u32 = 2;

/// Where the raw feed text comes from. The live endpoint is one
/// implementation; a saved file is another, for offline replay and
/// tests.
pub trait FeedSource {
	fn fetch(&self) -> Result<String, Error>;
}

pub struct HttpSource {
	http: Client,
	url: String,
}

impl HttpSource {
	pub fn new(url: &str, timeout: Duration) -> Result<Self, Error> {
		Ok(Self {
			http: Client::new(timeout)?,
			url: url.to_string(),
		})
	}
}

impl FeedSource for HttpSource {
	fn fetch(&self) -> Result<String, Error> {
		self.http.get_text(&self.url)
	}
}

pub struct FileSource {
	path: String,
}

impl FileSource {
	pub fn new(path: &str) -> Self {
		Self {
			path: path.to_string(),
		}
	}
}

impl FeedSource for FileSource {
	fn fetch(&self) -> Result<String, Error> {
		Ok(fs::read_to_string(&self.path)?)
	}
}

/// What one pipeline run hands back to the caller. An empty matrix
/// alongside messages means no update was performed; a matrix with
/// null cells means a partial update, with one message per failed
/// pair.
#[derive(Debug, Default, Serialize)]
pub struct ImportResult {
	/// Publication date from the feed header, when present.
	pub date: Option<NaiveDate>,
	pub matrix: ConversionMatrix,
	pub messages: Vec<String>,
}

impl ImportResult {
	fn aborted(messages: Vec<String>) -> Self {
		Self {
			date: None,
			matrix: Default::default(),
			messages,
		}
	}
}

/// Runs the feed-to-matrix pipeline against the Czech National Bank
/// daily feed: validate the configured bases, fetch, parse, build.
pub struct CnbImporter<S: FeedSource> {
	source: S,
}

impl<S: FeedSource> CnbImporter<S> {
	pub fn new(source: S) -> Self {
		Self { source }
	}

	/// Executes one run. Never fails outright; anything that stops or
	/// degrades the run is reported through the returned messages, and
	/// an abort still hands back whatever messages accumulated.
	pub fn run(&self, bases: &[String], targets: &[String]) -> ImportResult {
		let mut messages = Vec::new();

		if bases.is_empty() {
			messages.push("Default currency not set".to_string());
			return ImportResult::aborted(messages);
		}

		for base in bases {
			if base != NATIVE_CURRENCY {
				messages.push(format!(
					"Default currency should be {}",
					NATIVE_CURRENCY
				));
				return ImportResult::aborted(messages);
			}
		}

		let raw = self.fetch_feed();
		if raw.is_empty() {
			messages.push(
				"Convert data from the CZ bank has not been received"
					.to_string(),
			);
			return ImportResult::aborted(messages);
		}

		// An empty table is not an abort; it surfaces below as one
		// missing-quote message per requested target.
		let parsed = feed::parse(&raw);

		let (matrix, mut build_messages) = matrix::build(
			bases,
			targets,
			&parsed.rates,
			&NativeRelativeConversion,
		);
		messages.append(&mut build_messages);

		ImportResult {
			date: parsed.date,
			matrix,
			messages,
		}
	}

	/// One fetch with a bounded retry budget. Total failure is an
	/// empty body, so the caller surfaces a single diagnostic instead
	/// of a propagated error.
	fn fetch_feed(&self) -> String {
		for attempt in 1..=MAX_FETCH_ATTEMPTS {
			match self.source.fetch() {
				Ok(body) => return body,
				Err(e) => {
					println!("feed fetch attempt {} failed: {}", attempt, e);
				},
			}
		}

		String::new()
	}
}
