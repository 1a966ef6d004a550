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
use crate::rates::conversion::Conversion;
use std::collections::BTreeMap;

/// Decimal places kept for every stored rate.
pub const RATE_PRECISION: i32 = 6;

/// Currency code to units of the bank's native currency equivalent to
/// one unit of that code. Built once per run, never mutated afterward.
pub type UnitRateTable = BTreeMap<String, f64>;

/// Source currency to target currency to rate. A None cell marks a pair
/// the feed had no usable quote for; the builder records one diagnostic
/// message per such cell.
pub type ConversionMatrix = BTreeMap<String, BTreeMap<String, Option<f64>>>;

/// Rounds a rate to the standard precision so every matrix cell shares
/// one numeric representation.
pub fn normalize(rate: f64) -> f64 {
	let scale = 10f64.powi(RATE_PRECISION);
	(rate * scale).round() / scale
}

/// Builds the full source-by-target matrix from the unit table. Bases
/// are iterated in caller order; BTreeMap keeps each row's target keys
/// in ascending code order. Identical source and target always convert
/// at exactly 1.
pub fn build(
	bases: &[String],
	targets: &[String],
	rates: &UnitRateTable,
	conversion: &impl Conversion,
) -> (ConversionMatrix, Vec<String>) {
	let mut matrix = ConversionMatrix::new();
	let mut messages = Vec::new();

	for base in bases {
		let row = matrix.entry(base.clone()).or_default();

		for target in targets {
			if target == base {
				row.insert(target.clone(), Some(normalize(1.0)));
				continue;
			}

			match conversion.rate(base, target, rates) {
				Some(rate) => {
					row.insert(target.clone(), Some(normalize(rate)));
				},
				None => {
					row.insert(target.clone(), None);
					messages.push(format!(
						"We can't retrieve a rate from {} for {}.",
						base, target
					));
				},
			}
		}
	}

	(matrix, messages)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rates::conversion::NativeRelativeConversion;

	fn codes(list: &[&str]) -> Vec<String> {
		list.iter().map(|s| s.to_string()).collect()
	}

	fn table(pairs: &[(&str, f64)]) -> UnitRateTable {
		pairs
			.iter()
			.map(|(code, rate)| (code.to_string(), *rate))
			.collect()
	}

	#[test]
	fn test_identity_rate_is_exactly_one() {
		let (matrix, messages) = build(
			&codes(&["CZK"]),
			&codes(&["CZK"]),
			&table(&[]),
			&NativeRelativeConversion,
		);

		assert_eq!(matrix["CZK"]["CZK"], Some(1.0));
		assert!(messages.is_empty());
	}

	#[test]
	fn test_missing_target_yields_null_and_one_message() {
		let (matrix, messages) = build(
			&codes(&["CZK"]),
			&codes(&["CZK", "USD"]),
			&table(&[]),
			&NativeRelativeConversion,
		);

		assert_eq!(matrix["CZK"]["USD"], None);
		assert_eq!(
			messages,
			vec!["We can't retrieve a rate from CZK for USD."]
		);
	}

	#[test]
	fn test_known_target_uses_unit_rate() {
		let (matrix, messages) = build(
			&codes(&["CZK"]),
			&codes(&["CZK", "EUR"]),
			&table(&[("EUR", 25.0)]),
			&NativeRelativeConversion,
		);

		assert_eq!(matrix["CZK"]["EUR"], Some(25.0));
		assert!(messages.is_empty());
	}

	#[test]
	fn test_row_keys_are_sorted_ascending() {
		let (matrix, _) = build(
			&codes(&["CZK"]),
			&codes(&["USD", "EUR", "CZK", "GBP"]),
			&table(&[("USD", 22.0), ("EUR", 25.0), ("GBP", 29.0)]),
			&NativeRelativeConversion,
		);

		let keys: Vec<&String> = matrix["CZK"].keys().collect();
		assert_eq!(keys, vec!["CZK", "EUR", "GBP", "USD"]);
	}

	#[test]
	fn test_builder_is_idempotent() {
		let bases = codes(&["CZK"]);
		let targets = codes(&["CZK", "EUR", "XAU"]);
		let rates = table(&[("EUR", 25.0)]);

		let first = build(&bases, &targets, &rates, &NativeRelativeConversion);
		let second = build(&bases, &targets, &rates, &NativeRelativeConversion);

		assert_eq!(first.0, second.0);
		assert_eq!(first.1, second.1);
	}

	#[test]
	fn test_normalize_rounds_to_rate_precision() {
		assert_eq!(normalize(1.0), 1.0);
		assert_eq!(normalize(25.123_456_7), 25.123_457);
		assert_eq!(normalize(0.0631), 0.0631);
	}
}
