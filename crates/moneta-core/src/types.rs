//! Wallet domain types shared across the RPC layer and the CLI.
//!
//! Monetary values are carried as [`Amount`]: whole piconero (atomic
//! units), never floating point. The daemon speaks piconero on the wire, so
//! the newtype is serde-transparent over `u64`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Piconero per XMR (1e12).
pub const PICO_PER_XMR: u64 = 1_000_000_000_000;

/// A failure parsing a decimal XMR amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("invalid amount `{0}`: expected a decimal number of XMR")]
    Invalid(String),

    #[error("amount `{0}` has more than 12 fractional digits")]
    TooPrecise(String),

    #[error("amount `{0}` does not fit the 64-bit piconero range")]
    OutOfRange(String),
}

/// A monetary value in piconero (atomic units).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_pico(pico: u64) -> Self {
        Self(pico)
    }

    pub const fn as_pico(self) -> u64 {
        self.0
    }

    /// Parse a decimal XMR string (e.g. `"1.337"`) without going through
    /// floating point. At most 12 fractional digits are representable.
    pub fn from_xmr_str(s: &str) -> Result<Self, AmountError> {
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(AmountError::Invalid(s.to_owned()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(AmountError::Invalid(s.to_owned()));
        }
        if frac.len() > 12 {
            return Err(AmountError::TooPrecise(s.to_owned()));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| AmountError::OutOfRange(s.to_owned()))?
        };
        let frac_pico: u64 = if frac.is_empty() {
            0
        } else {
            let scale = 10u64.pow(12 - frac.len() as u32);
            frac.parse::<u64>()
                .map_err(|_| AmountError::Invalid(s.to_owned()))?
                * scale
        };

        whole
            .checked_mul(PICO_PER_XMR)
            .and_then(|p| p.checked_add(frac_pico))
            .map(Amount)
            .ok_or_else(|| AmountError::OutOfRange(s.to_owned()))
    }

    /// Render as a decimal XMR string, trimming trailing fractional zeros.
    pub fn to_xmr_string(self) -> String {
        let whole = self.0 / PICO_PER_XMR;
        let frac = self.0 % PICO_PER_XMR;
        if frac == 0 {
            return whole.to_string();
        }
        let frac = format!("{frac:012}");
        format!("{whole}.{}", frac.trim_end_matches('0'))
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_xmr_str(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} XMR", self.to_xmr_string())
    }
}

/// One recipient of a transfer: an address and the amount it receives.
#[derive(Debug, Clone, Serialize)]
pub struct TransferDestination {
    pub address: String,
    pub amount: Amount,
}

impl TransferDestination {
    pub fn new(address: impl Into<String>, amount: Amount) -> Self {
        Self {
            address: address.into(),
            amount,
        }
    }
}

/// Fee priority for outgoing transfers, serialized as the daemon's integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum TransferPriority {
    /// Let the wallet choose.
    Default = 0,
    Unimportant = 1,
    #[default]
    Normal = 2,
    Elevated = 3,
}

impl Serialize for TransferPriority {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl FromStr for TransferPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "unimportant" => Ok(Self::Unimportant),
            "normal" => Ok(Self::Normal),
            "elevated" => Ok(Self::Elevated),
            other => Err(format!(
                "unknown priority `{other}` (default, unimportant, normal, elevated)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_xmr() {
        assert_eq!(Amount::from_xmr_str("0").unwrap(), Amount::ZERO);
        assert_eq!(
            Amount::from_xmr_str("1").unwrap(),
            Amount::from_pico(PICO_PER_XMR)
        );
        assert_eq!(
            Amount::from_xmr_str("1.337").unwrap(),
            Amount::from_pico(1_337_000_000_000)
        );
        assert_eq!(
            Amount::from_xmr_str(".5").unwrap(),
            Amount::from_pico(500_000_000_000)
        );
        assert_eq!(
            Amount::from_xmr_str("0.000000000001").unwrap(),
            Amount::from_pico(1)
        );
    }

    #[test]
    fn rejects_bad_amounts() {
        assert!(matches!(
            Amount::from_xmr_str("").unwrap_err(),
            AmountError::Invalid(_)
        ));
        assert!(matches!(
            Amount::from_xmr_str("1.2.3").unwrap_err(),
            AmountError::Invalid(_)
        ));
        assert!(matches!(
            Amount::from_xmr_str("-1").unwrap_err(),
            AmountError::Invalid(_)
        ));
        assert!(matches!(
            Amount::from_xmr_str("0.0000000000001").unwrap_err(),
            AmountError::TooPrecise(_)
        ));
        assert!(matches!(
            Amount::from_xmr_str("99999999999999").unwrap_err(),
            AmountError::OutOfRange(_)
        ));
    }

    #[test]
    fn renders_trimmed_decimal() {
        assert_eq!(Amount::from_pico(0).to_xmr_string(), "0");
        assert_eq!(Amount::from_pico(PICO_PER_XMR).to_xmr_string(), "1");
        assert_eq!(
            Amount::from_pico(1_337_000_000_000).to_xmr_string(),
            "1.337"
        );
        assert_eq!(Amount::from_pico(1).to_xmr_string(), "0.000000000001");
    }

    #[test]
    fn round_trips_decimal_strings() {
        for s in ["0.5", "123.000000000456", "4", "0.000000000001"] {
            assert_eq!(Amount::from_xmr_str(s).unwrap().to_xmr_string(), s);
        }
    }

    #[test]
    fn destination_serializes_pico_on_the_wire() {
        let dest = TransferDestination::new("44abc", Amount::from_xmr_str("2.5").unwrap());
        let json = serde_json::to_value(&dest).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"address": "44abc", "amount": 2_500_000_000_000u64})
        );
    }

    #[test]
    fn priority_serializes_as_integer() {
        let json = serde_json::to_value(TransferPriority::Elevated).unwrap();
        assert_eq!(json, serde_json::json!(3));
        assert_eq!(
            "normal".parse::<TransferPriority>().unwrap(),
            TransferPriority::Normal
        );
        assert!("urgent".parse::<TransferPriority>().is_err());
    }
}
