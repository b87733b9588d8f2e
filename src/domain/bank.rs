use crate::domain::errors::PredictionError;
use std::fmt;
use std::str::FromStr;

/// Identifier selecting which bank's scaler/model pair is loaded.
///
/// Restricted to ASCII letters, digits, `_` and `-` so it always maps to a
/// file inside the artifact directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BankCode(String);

impl BankCode {
    pub fn parse(raw: &str) -> Result<Self, PredictionError> {
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(PredictionError::InvalidBankCode {
                bank_code: raw.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn scaler_file_name(&self) -> String {
        format!("{}{}", self.0, SCALER_SUFFIX)
    }

    pub fn model_file_name(&self) -> String {
        format!("{}{}", self.0, MODEL_SUFFIX)
    }
}

pub const SCALER_SUFFIX: &str = "_scaler.json";
pub const MODEL_SUFFIX: &str = "_model.json";

impl FromStr for BankCode {
    type Err = PredictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BankCode::parse(s)
    }
}

impl fmt::Display for BankCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_codes() {
        for raw in ["KBANK", "SCB", "bbl_v2", "KTB-2024"] {
            let code = BankCode::parse(raw).unwrap();
            assert_eq!(code.as_str(), raw);
        }
    }

    #[test]
    fn test_rejects_empty_and_path_like_codes() {
        for raw in ["", "../etc/passwd", "KBANK/model", "K BANK", "KBANK.json"] {
            assert!(
                matches!(
                    BankCode::parse(raw),
                    Err(PredictionError::InvalidBankCode { .. })
                ),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_artifact_file_names() {
        let code: BankCode = "KBANK".parse().unwrap();
        assert_eq!(code.scaler_file_name(), "KBANK_scaler.json");
        assert_eq!(code.model_file_name(), "KBANK_model.json");
    }
}
