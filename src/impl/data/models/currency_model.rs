use std::str::FromStr;

use fractic_server_error::ServerError;
use iso_currency::Currency;
use serde::Deserialize;

use crate::errors::InvalidIsoCurrencyCode;

#[derive(Debug)]
pub(crate) struct CurrencyModel(Currency);
impl FromStr for CurrencyModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s.trim())
            .map(CurrencyModel)
            .ok_or_else(|| InvalidIsoCurrencyCode::new(s))
    }
}
impl<'de> Deserialize<'de> for CurrencyModel {
    fn deserialize<D>(deserializer: D) -> Result<CurrencyModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CurrencyModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Into<Currency> for CurrencyModel {
    fn into(self) -> Currency {
        self.0
    }
}
