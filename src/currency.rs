//! Steam wallet currency codes
//!
//! The market API takes the numeric wallet code in its `currency` query
//! parameter; price texts come back formatted for that currency.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Currencies the Steam wallet supports, by ISO code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrencyCode {
    USD, GBP, EUR, CHF, RUB, PLN, BRL, JPY,
    NOK, IDR, MYR, PHP, SGD, THB, VND, KRW,
    TRY, UAH, MXN, CAD, AUD, NZD, CNY, INR,
    CLP, PEN, COP, ZAR, HKD, TWD, SAR, AED,
    ARS, ILS, KZT, KWD, QAR, CRC, UYU,
}

impl CurrencyCode {
    /// Numeric wallet code used by the market endpoints
    pub fn code(&self) -> u32 {
        match self {
            CurrencyCode::USD => 1,
            CurrencyCode::GBP => 2,
            CurrencyCode::EUR => 3,
            CurrencyCode::CHF => 4,
            CurrencyCode::RUB => 5,
            CurrencyCode::PLN => 6,
            CurrencyCode::BRL => 7,
            CurrencyCode::JPY => 8,
            CurrencyCode::NOK => 9,
            CurrencyCode::IDR => 10,
            CurrencyCode::MYR => 11,
            CurrencyCode::PHP => 12,
            CurrencyCode::SGD => 13,
            CurrencyCode::THB => 14,
            CurrencyCode::VND => 15,
            CurrencyCode::KRW => 16,
            CurrencyCode::TRY => 17,
            CurrencyCode::UAH => 18,
            CurrencyCode::MXN => 19,
            CurrencyCode::CAD => 20,
            CurrencyCode::AUD => 21,
            CurrencyCode::NZD => 22,
            CurrencyCode::CNY => 23,
            CurrencyCode::INR => 24,
            CurrencyCode::CLP => 25,
            CurrencyCode::PEN => 26,
            CurrencyCode::COP => 27,
            CurrencyCode::ZAR => 28,
            CurrencyCode::HKD => 29,
            CurrencyCode::TWD => 30,
            CurrencyCode::SAR => 31,
            CurrencyCode::AED => 32,
            CurrencyCode::ARS => 34,
            CurrencyCode::ILS => 35,
            CurrencyCode::KZT => 37,
            CurrencyCode::KWD => 38,
            CurrencyCode::QAR => 39,
            CurrencyCode::CRC => 40,
            CurrencyCode::UYU => 41,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "USD", CurrencyCode::GBP => "GBP", CurrencyCode::EUR => "EUR",
            CurrencyCode::CHF => "CHF", CurrencyCode::RUB => "RUB", CurrencyCode::PLN => "PLN",
            CurrencyCode::BRL => "BRL", CurrencyCode::JPY => "JPY", CurrencyCode::NOK => "NOK",
            CurrencyCode::IDR => "IDR", CurrencyCode::MYR => "MYR", CurrencyCode::PHP => "PHP",
            CurrencyCode::SGD => "SGD", CurrencyCode::THB => "THB", CurrencyCode::VND => "VND",
            CurrencyCode::KRW => "KRW", CurrencyCode::TRY => "TRY", CurrencyCode::UAH => "UAH",
            CurrencyCode::MXN => "MXN", CurrencyCode::CAD => "CAD", CurrencyCode::AUD => "AUD",
            CurrencyCode::NZD => "NZD", CurrencyCode::CNY => "CNY", CurrencyCode::INR => "INR",
            CurrencyCode::CLP => "CLP", CurrencyCode::PEN => "PEN", CurrencyCode::COP => "COP",
            CurrencyCode::ZAR => "ZAR", CurrencyCode::HKD => "HKD", CurrencyCode::TWD => "TWD",
            CurrencyCode::SAR => "SAR", CurrencyCode::AED => "AED", CurrencyCode::ARS => "ARS",
            CurrencyCode::ILS => "ILS", CurrencyCode::KZT => "KZT", CurrencyCode::KWD => "KWD",
            CurrencyCode::QAR => "QAR", CurrencyCode::CRC => "CRC", CurrencyCode::UYU => "UYU",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::USD), "GBP" => Ok(Self::GBP), "EUR" => Ok(Self::EUR),
            "CHF" => Ok(Self::CHF), "RUB" => Ok(Self::RUB), "PLN" => Ok(Self::PLN),
            "BRL" => Ok(Self::BRL), "JPY" => Ok(Self::JPY), "NOK" => Ok(Self::NOK),
            "IDR" => Ok(Self::IDR), "MYR" => Ok(Self::MYR), "PHP" => Ok(Self::PHP),
            "SGD" => Ok(Self::SGD), "THB" => Ok(Self::THB), "VND" => Ok(Self::VND),
            "KRW" => Ok(Self::KRW), "TRY" => Ok(Self::TRY), "UAH" => Ok(Self::UAH),
            "MXN" => Ok(Self::MXN), "CAD" => Ok(Self::CAD), "AUD" => Ok(Self::AUD),
            "NZD" => Ok(Self::NZD), "CNY" => Ok(Self::CNY), "INR" => Ok(Self::INR),
            "CLP" => Ok(Self::CLP), "PEN" => Ok(Self::PEN), "COP" => Ok(Self::COP),
            "ZAR" => Ok(Self::ZAR), "HKD" => Ok(Self::HKD), "TWD" => Ok(Self::TWD),
            "SAR" => Ok(Self::SAR), "AED" => Ok(Self::AED), "ARS" => Ok(Self::ARS),
            "ILS" => Ok(Self::ILS), "KZT" => Ok(Self::KZT), "KWD" => Ok(Self::KWD),
            "QAR" => Ok(Self::QAR), "CRC" => Ok(Self::CRC), "UYU" => Ok(Self::UYU),
            _ => Err(format!("{} is not a supported wallet currency", s)),
        }
    }
}
