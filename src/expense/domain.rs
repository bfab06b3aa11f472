//! Core expense domain types.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, UtcOffset,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

use crate::{
    Error,
    category::CategoryName,
    database_id::{CategoryId, ExpenseId},
};

/// The number of decimal places kept for amounts of money.
pub const AMOUNT_SCALE: u32 = 2;

/// The largest amount in cents, so that amounts fit 18 digits with two
/// decimal places.
const MAX_AMOUNT_CENTS: i64 = 999_999_999_999_999_999;

/// A positive amount of money with exactly two decimal places.
///
/// Amounts are kept as fixed-point decimals all the way from the request
/// body to the database, so sums never pick up floating point error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Create an amount from `value`, rounded to cents (half away from zero).
    ///
    /// # Errors
    ///
    /// This function will return an [Error::Validation] if the rounded amount
    /// is zero or negative, or larger than 9,999,999,999,999,999.99.
    pub fn new(value: Decimal) -> Result<Self, Error> {
        let value = to_cents(value);

        if value <= Decimal::ZERO {
            Err(Error::validation("Amount must be greater than zero.", "amount"))
        } else if value > Decimal::new(MAX_AMOUNT_CENTS, AMOUNT_SCALE) {
            Err(Error::validation(
                "Amount must be at most 9999999999999999.99.",
                "amount",
            ))
        } else {
            Ok(Self(value))
        }
    }

    /// Create an amount without checking that it is positive.
    ///
    /// The value is still rounded to cents. Use this for amounts read back
    /// from the database.
    pub fn new_unchecked(value: Decimal) -> Self {
        Self(to_cents(value))
    }

    /// The amount as a decimal number.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

fn to_cents(value: Decimal) -> Decimal {
    let mut value = value.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(AMOUNT_SCALE);
    value
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ToSql for Amount {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.to_string()))
    }
}

impl FromSql for Amount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;

        Decimal::from_str(text)
            .map(Amount::new_unchecked)
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// A single dated expense linked to one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// The ID of the category the expense belongs to.
    pub category_id: CategoryId,
    /// The name of the linked category at read time.
    ///
    /// This is `None` if the category could not be found.
    #[serde(serialize_with = "serialize_category_name")]
    pub category_name: Option<CategoryName>,
    /// How much money was spent.
    pub amount: Amount,
    /// The day the money was spent.
    pub expense_date: Date,
}

fn serialize_category_name<S>(name: &Option<CategoryName>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(name.as_ref().map_or("", |name| name.as_ref()))
}

/// A validated expense that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// The ID of an existing category.
    pub category_id: CategoryId,
    /// How much money was spent.
    pub amount: Amount,
    /// The day the money was spent, no later than today.
    pub expense_date: Date,
}

/// Request body for adding an expense.
///
/// The fields are not validated yet, see [crate::expense::add_expense].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseData {
    /// The ID of the category to file the expense under.
    pub category_id: CategoryId,
    /// The amount as sent by the client, as a JSON number or string.
    pub amount: Decimal,
    /// The date of the expense with any time of day discarded.
    #[serde(deserialize_with = "deserialize_expense_date")]
    pub expense_date: Date,
}

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const DATE_TIME_FORMAT: &[BorrowedFormatItem<'_>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
);

/// Parse the date of an expense.
///
/// Accepts a plain date (`2025-03-14`), an RFC 3339 date-time which is
/// converted to UTC before the time of day is dropped
/// (`2025-03-14T23:30:00+13:00` is the 14th of March in UTC), or a date-time
/// without an offset which is taken to be UTC (`2025-03-14T08:15:00`).
pub fn parse_expense_date(text: &str) -> Result<Date, time::error::Parse> {
    let text = text.trim();

    Date::parse(text, DATE_FORMAT)
        .or_else(|_| {
            OffsetDateTime::parse(text, &Rfc3339)
                .map(|date_time| date_time.to_offset(UtcOffset::UTC).date())
        })
        .or_else(|_| PrimitiveDateTime::parse(text, DATE_TIME_FORMAT).map(|date_time| date_time.date()))
}

fn deserialize_expense_date<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;

    parse_expense_date(&text)
        .map_err(|error| serde::de::Error::custom(format!("invalid date \"{text}\": {error}")))
}

#[cfg(test)]
mod amount_tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{Error, expense::Amount};

    #[test]
    fn new_fails_on_zero() {
        assert_eq!(
            Amount::new(Decimal::ZERO),
            Err(Error::validation("Amount must be greater than zero.", "amount"))
        );
    }

    #[test]
    fn new_fails_on_negative_amount() {
        assert!(matches!(
            Amount::new(dec!(-45.99)),
            Err(Error::Validation {
                param: Some("amount"),
                ..
            })
        ));
    }

    #[test]
    fn new_fails_when_amount_rounds_to_zero() {
        assert!(Amount::new(dec!(0.004)).is_err());
    }

    #[test]
    fn new_rounds_to_cents() {
        assert_eq!(Amount::new(dec!(0.005)).unwrap().value(), dec!(0.01));
        assert_eq!(Amount::new(dec!(10.994)).unwrap().value(), dec!(10.99));
    }

    #[test]
    fn amounts_always_have_two_decimal_places() {
        assert_eq!(Amount::new(dec!(12.5)).unwrap().to_string(), "12.50");
        assert_eq!(Amount::new(dec!(7)).unwrap().to_string(), "7.00");
    }

    #[test]
    fn new_fails_on_amount_with_more_than_eighteen_digits() {
        assert_eq!(
            Amount::new(dec!(10000000000000000)),
            Err(Error::validation(
                "Amount must be at most 9999999999999999.99.",
                "amount"
            ))
        );
        assert!(Amount::new(dec!(50000000000000000000000000000)).is_err());
        // Rounds up past the limit.
        assert!(Amount::new(dec!(9999999999999999.995)).is_err());
    }

    #[test]
    fn largest_amount_keeps_two_decimal_places() {
        assert_eq!(
            Amount::new(dec!(9999999999999999.99)).unwrap().to_string(),
            "9999999999999999.99"
        );
        assert_eq!(
            Amount::new(dec!(9999999999999999)).unwrap().to_string(),
            "9999999999999999.00"
        );
    }

    #[test]
    fn serializes_as_string() {
        let amount = Amount::new(dec!(19.75)).unwrap();

        assert_eq!(serde_json::to_value(amount).unwrap(), serde_json::json!("19.75"));
    }
}
