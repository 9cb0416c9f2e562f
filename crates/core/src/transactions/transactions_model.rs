//! Recorded transaction models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A loan disbursed on `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuanceEvent {
    pub id: Option<i32>,
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// A payment received on `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEvent {
    pub id: Option<i32>,
    pub date: NaiveDate,
    pub amount: Decimal,
}

impl IssuanceEvent {
    pub fn new(date: NaiveDate, amount: Decimal) -> Self {
        IssuanceEvent {
            id: None,
            date,
            amount,
        }
    }
}

impl CollectionEvent {
    pub fn new(date: NaiveDate, amount: Decimal) -> Self {
        CollectionEvent {
            id: None,
            date,
            amount,
        }
    }
}

/// Common view over recorded events so both kinds fold the same way.
pub trait DatedAmount {
    fn date(&self) -> NaiveDate;
    fn amount(&self) -> Decimal;
}

impl DatedAmount for IssuanceEvent {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl DatedAmount for CollectionEvent {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}
