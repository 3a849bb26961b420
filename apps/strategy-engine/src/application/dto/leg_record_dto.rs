//! Leg Record DTO
//!
//! One row of a broker position export. Cells arrive as JSON strings or
//! numbers and are parsed leniently: unparseable numbers become zero and
//! unparseable dates become absent.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::position::{AssetKind, Leg, LegGreeks, OptionSide, PositionError};

/// Accepted date layouts, tried in order.
/// Largest magnitude accepted from a numeric cell. Anything above is treated
/// as garbage so portfolio sums stay far from `Decimal` overflow.
const MAX_CELL_MAGNITUDE: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y", "%b %d %Y", "%b %d, %Y"];

/// Raw position row keyed by the broker's column headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegRecordDto {
    /// Symbol.
    #[serde(rename = "Symbol", default, deserialize_with = "cell")]
    pub symbol: String,
    /// Instrument type ("Stock", "Option", ...).
    #[serde(rename = "Type", default, deserialize_with = "cell")]
    pub asset_type: String,
    /// Signed quantity.
    #[serde(rename = "Quantity", default, deserialize_with = "cell")]
    pub quantity: String,
    /// Strike price.
    #[serde(rename = "Strike Price", default, deserialize_with = "cell")]
    pub strike_price: String,
    /// Call or put.
    #[serde(rename = "Call/Put", default, deserialize_with = "cell")]
    pub call_put: String,
    /// Expiration date.
    #[serde(rename = "Exp Date", default, deserialize_with = "cell")]
    pub exp_date: String,
    /// Last price of the underlying.
    #[serde(rename = "Underlying Last Price", default, deserialize_with = "cell")]
    pub underlying_last_price: String,
    /// Cost basis; negative for a credit received.
    #[serde(rename = "Cost", default, deserialize_with = "cell")]
    pub cost: String,
    /// Open profit/loss.
    #[serde(rename = "P/L Open", default, deserialize_with = "cell")]
    pub pnl_open: String,
    /// Delta.
    #[serde(rename = "Delta", default, deserialize_with = "cell")]
    pub delta: String,
    /// Beta-weighted delta.
    #[serde(rename = "Beta Weighted Delta", default, deserialize_with = "cell")]
    pub beta_weighted_delta: String,
    /// Theta.
    #[serde(rename = "Theta", default, deserialize_with = "cell")]
    pub theta: String,
    /// Gamma.
    #[serde(rename = "Gamma", default, deserialize_with = "cell")]
    pub gamma: String,
    /// Vega.
    #[serde(rename = "Vega", default, deserialize_with = "cell")]
    pub vega: String,
    /// Bid.
    #[serde(rename = "Bid", default, deserialize_with = "cell")]
    pub bid: String,
    /// Ask.
    #[serde(rename = "Ask", default, deserialize_with = "cell")]
    pub ask: String,
    /// Date the position was opened.
    #[serde(rename = "Open Date", default, deserialize_with = "cell")]
    pub open_date: String,
}

impl LegRecordDto {
    /// Convert to a domain leg.
    ///
    /// # Errors
    ///
    /// Returns `PositionError::MissingSymbol` if the symbol cell is blank.
    pub fn to_leg(&self, row: usize) -> Result<Leg, PositionError> {
        if self.symbol.trim().is_empty() {
            return Err(PositionError::MissingSymbol { row });
        }

        let quantity = parse_decimal(&self.quantity);
        let leg = match AssetKind::from_type_label(&self.asset_type) {
            AssetKind::Stock => Leg::stock(self.symbol.as_str(), quantity),
            AssetKind::Option => Leg::option(
                self.symbol.as_str(),
                OptionSide::parse(&self.call_put),
                quantity,
                parse_decimal(&self.strike_price),
                parse_date(&self.exp_date),
            ),
        };

        Ok(leg
            .with_open_date(parse_date(&self.open_date))
            .with_underlying_price(parse_decimal(&self.underlying_last_price))
            .with_cost(parse_decimal(&self.cost))
            .with_pnl_open(parse_decimal(&self.pnl_open))
            .with_greeks(LegGreeks {
                delta: parse_decimal(&self.delta),
                beta_delta: parse_decimal(&self.beta_weighted_delta),
                gamma: parse_decimal(&self.gamma),
                theta: parse_decimal(&self.theta),
                vega: parse_decimal(&self.vega),
            })
            .with_quote(parse_decimal(&self.bid), parse_decimal(&self.ask)))
    }
}

/// Read a cell that may be a string, a number or missing.
fn cell<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    })
}

/// Parse a broker number.
///
/// Strips `$`, `,`, whitespace and a leading `+`; `(x)` is `-x`.
/// Anything unparseable, or larger in magnitude than 1e15, is zero.
#[must_use]
pub fn parse_decimal(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();

    let (negated, body) = match cleaned.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) => (true, inner),
        None => (false, cleaned.as_str()),
    };
    let body = body.strip_prefix('+').unwrap_or(body);

    let value = body
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(body))
        .ok()
        .filter(|value| value.abs() <= MAX_CELL_MAGNITUDE)
        .unwrap_or(Decimal::ZERO);

    if negated { -value } else { value }
}

/// Parse a broker date in any accepted layout.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}
