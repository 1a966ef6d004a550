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
use crate::rates::matrix::UnitRateTable;

/// Strategy for resolving the rate between a currency pair out of a
/// unit table. The matrix builder only speaks to this trait, so a feed
/// that one day quotes true bilateral rates can plug in its own
/// implementation without the builder changing.
pub trait Conversion {
	/// Units of `to` obtainable for one unit of `from`, when known.
	fn rate(&self, from: &str, to: &str, rates: &UnitRateTable)
		-> Option<f64>;
}

/// Every quote in the CNB feed is expressed relative to the bank's
/// native currency, so converting from it to a target is the target's
/// unit rate verbatim. A zero entry counts as no quote.
pub struct NativeRelativeConversion;

impl Conversion for NativeRelativeConversion {
	fn rate(
		&self,
		_from: &str,
		to: &str,
		rates: &UnitRateTable,
	) -> Option<f64> {
		rates.get(to).copied().filter(|rate| *rate != 0.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_known_code_resolves() {
		let mut rates = UnitRateTable::new();
		rates.insert("EUR".to_string(), 25.0);

		let conversion = NativeRelativeConversion;
		assert_eq!(conversion.rate("CZK", "EUR", &rates), Some(25.0));
	}

	#[test]
	fn test_unknown_code_is_none() {
		let rates = UnitRateTable::new();

		let conversion = NativeRelativeConversion;
		assert_eq!(conversion.rate("CZK", "USD", &rates), None);
	}

	#[test]
	fn test_zero_rate_counts_as_missing() {
		let mut rates = UnitRateTable::new();
		rates.insert("XXX".to_string(), 0.0);

		let conversion = NativeRelativeConversion;
		assert_eq!(conversion.rate("CZK", "XXX", &rates), None);
	}
}
