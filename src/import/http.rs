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
use anyhow::{bail, Error};
use std::time::Duration;

/// Thin wrapper over a blocking HTTP client. The feed needs no auth,
/// cookies, or redirects; a plain GET with a bounded timeout covers it.
pub struct Client {
	client: reqwest::blocking::Client,
}

impl Client {
	pub fn new(timeout: Duration) -> Result<Self, Error> {
		Ok(Client {
			client: reqwest::blocking::Client::builder()
				.timeout(timeout)
				.build()?,
		})
	}

	/// Sends a GET and returns the response body as text. Errors on
	/// non-2xx response codes.
	pub fn get_text(&self, url: &str) -> Result<String, Error> {
		println!("Sending GET to {}", url);
		let response = self.client.get(url).send()?;

		if !response.status().is_success() {
			bail!("Request failed with status: {}", response.status());
		}

		Ok(response.text()?)
	}
}
