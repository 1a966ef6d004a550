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
use chrono::NaiveDate;

/// Number of leading metadata records: the publication date line and
/// the column header line.
const HEADER_LINES: usize = 2;

const FIELD_AMOUNT: usize = 2;
const FIELD_CODE: usize = 3;
const FIELD_RATE: usize = 4;

/// Outcome of parsing one daily feed.
#[derive(Debug, Default)]
pub struct ParsedFeed {
	/// Publication date from the first header line, when it parses.
	pub date: Option<NaiveDate>,
	pub rates: UnitRateTable,
}

/// Parses the bank's daily feed: newline-separated records, the first
/// two being metadata, the rest pipe-delimited as
/// country|name|amount|code|rate. Records missing a code or a usable
/// rate contribute nothing; the feed carries boilerplate, so they are
/// skipped without comment. Rates quoted per `amount` units are
/// divided down to unit rates.
pub fn parse(raw: &str) -> ParsedFeed {
	let mut out = ParsedFeed::default();

	for (i, line) in raw.lines().enumerate() {
		if i == 0 {
			out.date = parse_feed_date(line);
			continue;
		}
		if i < HEADER_LINES {
			continue;
		}

		let fields: Vec<&str> = line.split('|').collect();

		let amount = field(&fields, FIELD_AMOUNT).and_then(parse_number);
		let code = field(&fields, FIELD_CODE).unwrap_or("").trim();
		let rate = field(&fields, FIELD_RATE).and_then(parse_number);

		let rate = match (amount, rate) {
			(Some(amount), Some(rate)) if amount > 1.0 => rate / amount,
			(_, Some(rate)) => rate,
			_ => continue,
		};

		// Zero signals "no quote" in this feed, not a free currency
		if code.is_empty() || rate == 0.0 {
			continue;
		}

		out.rates.insert(code.to_string(), rate);
	}

	out
}

fn field<'a>(fields: &[&'a str], index: usize) -> Option<&'a str> {
	fields.get(index).copied()
}

/// The bank publishes decimals with a comma; a dot is accepted as well
/// so normalized samples behave identically. Anything unparsable is
/// absent rather than an error.
fn parse_number(field: &str) -> Option<f64> {
	let cleaned = field.trim().replace(',', ".");
	match cleaned.parse::<f64>() {
		Ok(value) if value.is_finite() => Some(value),
		_ => None,
	}
}

/// The first feed line looks like "17.03.2023 #54".
fn parse_feed_date(line: &str) -> Option<NaiveDate> {
	let token = line.split_whitespace().next()?;
	NaiveDate::parse_from_str(token, "%d.%m.%Y").ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: &str = "17.03.2023 #54\n\
		země|měna|množství|kód|kurz\n\
		EMU|euro|1|EUR|23,805\n\
		Japonsko|jen|100|JPY|17,854\n\
		USA|dolar|1|USD|22,376\n";

	#[test]
	fn test_header_lines_are_skipped() {
		let parsed = parse(SAMPLE);
		assert_eq!(parsed.rates.len(), 3);
		assert!(!parsed.rates.contains_key("kód"));
	}

	#[test]
	fn test_feed_date_is_captured() {
		let parsed = parse(SAMPLE);
		assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2023, 3, 17));
	}

	#[test]
	fn test_comma_decimal_convention() {
		let parsed = parse(SAMPLE);
		assert_eq!(parsed.rates["EUR"], 23.805);
	}

	#[test]
	fn test_amount_above_one_is_normalized() {
		let parsed = parse("..\n..\n..|..|100|JPY|150.0\n");
		assert_eq!(parsed.rates["JPY"], 1.5);
	}

	#[test]
	fn test_amount_of_one_leaves_rate_unchanged() {
		let parsed = parse("..\n..\n..|..|1|EUR|25.0\n");
		assert_eq!(parsed.rates["EUR"], 25.0);
	}

	#[test]
	fn test_missing_amount_leaves_rate_unchanged() {
		let parsed = parse("..\n..\n..|..||EUR|25,0\n");
		assert_eq!(parsed.rates["EUR"], 25.0);
	}

	#[test]
	fn test_zero_rate_is_treated_as_absent() {
		let parsed = parse("..\n..\nRusko|rubl|1|RUB|0\n");
		assert!(parsed.rates.is_empty());
	}

	#[test]
	fn test_record_without_code_is_discarded() {
		let parsed = parse("..\n..\n..|..|1||25,0\n");
		assert!(parsed.rates.is_empty());
	}

	#[test]
	fn test_record_with_unparsable_rate_is_discarded() {
		let parsed = parse("..\n..\n..|..|1|EUR|n/a\n");
		assert!(parsed.rates.is_empty());
	}

	#[test]
	fn test_short_record_is_discarded() {
		let parsed = parse("..\n..\njust some boilerplate\n");
		assert!(parsed.rates.is_empty());
	}

	#[test]
	fn test_empty_input_yields_empty_table() {
		let parsed = parse("");
		assert!(parsed.rates.is_empty());
		assert_eq!(parsed.date, None);
	}

	#[test]
	fn test_crlf_records_parse() {
		let parsed = parse("..\r\n..\r\nEMU|euro|1|EUR|23,805\r\n");
		assert_eq!(parsed.rates["EUR"], 23.805);
	}
}
