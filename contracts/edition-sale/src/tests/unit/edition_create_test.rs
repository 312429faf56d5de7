use crate::tests::test_utils::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

// --- create_edition ---

#[test]
fn creates_sequential_editions() {
    let mut contract = new_contract();
    assert_eq!(create_edition(&mut contract, public_config(1)), 1);
    assert_eq!(create_edition(&mut contract, public_config(2)), 2);
    assert_eq!(contract.get_edition_count(), 2);

    let edition = contract.get_edition(1).unwrap();
    assert_eq!(edition.funding_recipient, recipient());
    assert_eq!(edition.price, U128(PRICE));
    assert_eq!(edition.num_sold, 0);
    assert_eq!(edition.balance, U128(0));
}

#[test]
fn rejects_wrong_edition_id() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());

    let err = contract.create_edition(public_config(2)).unwrap_err();
    assert!(err.to_string().contains("expected 1"));

    create_edition(&mut contract, public_config(1));
    let err = contract.create_edition(public_config(1)).unwrap_err();
    assert!(err.to_string().contains("expected 2"));
}

#[test]
fn rejects_zero_quantity() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let mut config = public_config(1);
    config.quantity = 0;
    let err = contract.create_edition(config).unwrap_err();
    assert!(err.to_string().contains("Quantity"));
}

#[test]
fn rejects_royalty_above_full_basis() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let mut config = public_config(1);
    config.royalty_bps = 10_001;
    assert!(contract.create_edition(config).is_err());
}

#[test]
fn rejects_inverted_time_window() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let mut config = public_config(1);
    config.start_time = NOW_SEC + 100;
    config.end_time = NOW_SEC + 100;
    let err = contract.create_edition(config).unwrap_err();
    assert!(err.to_string().contains("End time"));
}

#[test]
fn permissioned_edition_requires_signer_key() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let mut config = presale_config(1, 3);
    config.signer_key = None;
    let err = contract.create_edition(config).unwrap_err();
    assert!(err.to_string().contains("signer key"));
}

#[test]
fn permissioned_quantity_may_exceed_quantity() {
    // An open presale-only edition allocates more signed tickets than
    // units; `quantity` still caps actual sales.
    let mut contract = new_contract();
    let id = create_edition(&mut contract, presale_config(1, 100));
    let edition = contract.get_edition(id).unwrap();
    assert_eq!(edition.quantity, 5);
    assert_eq!(edition.permissioned_quantity, 100);
}

#[test]
fn rejects_non_admin_caller() {
    let mut contract = new_contract();
    testing_env!(context(buyer()).build());
    let err = contract.create_edition(public_config(1)).unwrap_err();
    assert!(err.to_string().contains("Unauthorized"));
    assert_eq!(contract.get_edition_count(), 0);
}

#[test]
fn admin_can_create_editions() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.grant_admin(buyer()).unwrap();

    testing_env!(context(buyer()).build());
    assert_eq!(contract.create_edition(public_config(1)).unwrap(), 1);
}

#[test]
fn rejects_oversized_base_uri() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let mut config = public_config(1);
    config.base_uri = Some("x".repeat(257));
    assert!(contract.create_edition(config).is_err());
}
