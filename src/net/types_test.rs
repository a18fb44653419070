use super::*;

// =============================================================
// Wire mapping
// =============================================================

#[test]
fn user_profile_maps_camel_case_fields() {
    let profile: UserProfile = serde_json::from_str(
        r#"{
            "id": "u-1",
            "email": "ada@investai.fr",
            "role": "admin",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "mfaEnabled": true
        }"#,
    )
    .expect("profile should deserialize");

    assert_eq!(profile.role, Role::Admin);
    assert_eq!(profile.first_name, "Ada");
    assert_eq!(profile.last_name, "Lovelace");
    assert!(profile.mfa_enabled);
    assert_eq!(profile.full_name(), "Ada Lovelace");
}

#[test]
fn token_pair_maps_camel_case_fields() {
    let pair: TokenPair =
        serde_json::from_str(r#"{"accessToken":"a-1","refreshToken":"r-1"}"#)
            .expect("pair should deserialize");

    assert_eq!(pair.access_token, "a-1");
    assert_eq!(pair.refresh_token, "r-1");
}

#[test]
fn verified_tokens_allow_missing_pair() {
    let verified: VerifiedTokens =
        serde_json::from_str("{}").expect("empty body should deserialize");

    assert!(verified.access_token.is_none());
    assert!(verified.refresh_token.is_none());
}

// =============================================================
// TransactionKind
// =============================================================

#[test]
fn transaction_kind_parses_wire_values() {
    for kind in TransactionKind::ALL {
        assert_eq!(TransactionKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(TransactionKind::parse("short"), None);
}

#[test]
fn portfolio_gain_is_value_minus_invested() {
    let summary = PortfolioSummary {
        id: "p-1".to_owned(),
        name: "PEA".to_owned(),
        platform: "Boursorama".to_owned(),
        current_value: 1500.0,
        total_invested: 1200.0,
    };
    assert_eq!(summary.gain(), 300.0);
}
