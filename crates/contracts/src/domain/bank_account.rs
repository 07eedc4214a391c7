use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountRow {
    pub id: i64,
    pub bank_name: String,
    pub holder_name: String,
    pub iban: String,
    pub currency: String,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

/// Create/update payload of the bank account form. The id travels in
/// the path, not the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountForm {
    pub bank_name: String,
    pub holder_name: String,
    pub iban: String,
    pub currency: String,
}

impl BankAccountForm {
    pub fn from_row(row: &BankAccountRow) -> Self {
        Self {
            bank_name: row.bank_name.clone(),
            holder_name: row.holder_name.clone(),
            iban: row.iban.clone(),
            currency: row.currency.clone(),
        }
    }

    /// Client-side completeness check before submit.
    pub fn validate(&self) -> Result<(), String> {
        if self.bank_name.trim().is_empty() {
            return Err("Bank name is required".into());
        }
        if self.holder_name.trim().is_empty() {
            return Err("Account holder is required".into());
        }
        let iban: String = self.iban.chars().filter(|c| !c.is_whitespace()).collect();
        if iban.len() < 15 || iban.len() > 34 {
            return Err("IBAN must be between 15 and 34 characters".into());
        }
        if self.currency.trim().is_empty() {
            return Err("Currency is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> BankAccountForm {
        BankAccountForm {
            bank_name: "N26".to_string(),
            holder_name: "Acme Logistics GmbH".to_string(),
            iban: "DE89 3704 0044 0532 0130 00".to_string(),
            currency: "EUR".to_string(),
        }
    }

    #[test]
    fn filled_form_passes() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn short_iban_is_rejected() {
        let mut form = filled_form();
        form.iban = "DE89".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn blank_bank_name_is_rejected() {
        let mut form = filled_form();
        form.bank_name = "  ".to_string();
        assert!(form.validate().is_err());
    }
}
