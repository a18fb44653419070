use super::*;

fn valid_form() -> TransactionForm {
    TransactionForm {
        portfolio_id: "p-1".to_owned(),
        kind: "buy".to_owned(),
        asset: " MSFT ".to_owned(),
        quantity: "2.5".to_owned(),
        unit_price: "310.40".to_owned(),
        fees: "".to_owned(),
        executed_at: "2024-03-14".to_owned(),
    }
}

#[test]
fn validate_accepts_complete_form() {
    let tx = valid_form().validate().expect("form should validate");

    assert_eq!(tx.kind, TransactionKind::Buy);
    assert_eq!(tx.asset, "MSFT");
    assert_eq!(tx.quantity, 2.5);
    assert_eq!(tx.unit_price, 310.40);
    assert_eq!(tx.executed_at, "2024-03-14");
}

#[test]
fn validate_defaults_empty_fees_to_zero() {
    let tx = valid_form().validate().expect("form should validate");
    assert_eq!(tx.fees, 0.0);
}

#[test]
fn validate_rejects_missing_portfolio() {
    let mut form = valid_form();
    form.portfolio_id.clear();
    assert!(form.validate().is_err());
}

#[test]
fn validate_rejects_unknown_kind() {
    let mut form = valid_form();
    form.kind = "short".to_owned();
    assert!(form.validate().is_err());
}

#[test]
fn validate_rejects_blank_asset() {
    let mut form = valid_form();
    form.asset = "   ".to_owned();
    assert!(form.validate().is_err());
}

#[test]
fn validate_rejects_non_positive_quantity() {
    let mut form = valid_form();
    form.quantity = "0".to_owned();
    assert!(form.validate().is_err());

    form.quantity = "abc".to_owned();
    assert!(form.validate().is_err());
}

#[test]
fn validate_rejects_negative_fees() {
    let mut form = valid_form();
    form.fees = "-1".to_owned();
    assert!(form.validate().is_err());
}
