#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use crate::net::types::{NewTransaction, TransactionKind};

/// Raw values of the add-transaction form, as bound to the inputs.
#[derive(Clone, Debug, Default)]
pub struct TransactionForm {
    pub portfolio_id: String,
    pub kind: String,
    pub asset: String,
    pub quantity: String,
    pub unit_price: String,
    pub fees: String,
    pub executed_at: String,
}

impl TransactionForm {
    /// Validate the form into a creation payload. Empty fees default to zero.
    ///
    /// # Errors
    ///
    /// Returns the message to display next to the form.
    pub fn validate(&self) -> Result<NewTransaction, String> {
        if self.portfolio_id.is_empty() {
            return Err("Sélectionnez un portefeuille".to_owned());
        }
        let Some(kind) = TransactionKind::parse(&self.kind) else {
            return Err("Type d'opération invalide".to_owned());
        };
        let asset = self.asset.trim();
        if asset.is_empty() {
            return Err("L'actif est requis".to_owned());
        }
        let Ok(quantity) = self.quantity.trim().parse::<f64>() else {
            return Err("Quantité invalide".to_owned());
        };
        if quantity <= 0.0 {
            return Err("Quantité invalide".to_owned());
        }
        let Ok(unit_price) = self.unit_price.trim().parse::<f64>() else {
            return Err("Prix unitaire invalide".to_owned());
        };
        if unit_price < 0.0 {
            return Err("Prix unitaire invalide".to_owned());
        }
        let fees = if self.fees.trim().is_empty() {
            0.0
        } else {
            match self.fees.trim().parse::<f64>() {
                Ok(fees) if fees >= 0.0 => fees,
                _ => return Err("Frais invalides".to_owned()),
            }
        };
        if self.executed_at.is_empty() {
            return Err("La date est requise".to_owned());
        }

        Ok(NewTransaction {
            portfolio_id: self.portfolio_id.clone(),
            kind,
            asset: asset.to_owned(),
            quantity,
            unit_price,
            fees,
            executed_at: self.executed_at.clone(),
        })
    }
}
