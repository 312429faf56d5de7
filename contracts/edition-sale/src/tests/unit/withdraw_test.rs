use crate::tests::test_utils::*;
use crate::*;
use near_sdk::PromiseOrValue;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

// --- withdraw_funds ---

#[test]
fn withdraw_zeroes_balance_and_transfers() {
    let mut contract = new_contract();
    create_edition(&mut contract, public_config(1));

    testing_env!(context_with_deposit(buyer(), PRICE).build());
    contract.buy_edition(1, None, None).unwrap();
    testing_env!(context_with_deposit(recipient(), PRICE).build());
    contract.buy_edition(1, None, None).unwrap();
    assert_eq!(contract.get_edition(1).unwrap().balance, U128(2 * PRICE));

    // Callable by anyone; funds can only reach the fixed recipient.
    testing_env!(context(buyer()).build());
    let result = contract.withdraw_funds(1).unwrap();
    assert!(matches!(result, PromiseOrValue::Promise(_)));
    assert_eq!(contract.get_edition(1).unwrap().balance, U128(0));
}

#[test]
fn withdraw_with_zero_balance_is_a_noop() {
    let mut contract = new_contract();
    create_edition(&mut contract, public_config(1));

    testing_env!(context(buyer()).build());
    let result = contract.withdraw_funds(1).unwrap();
    assert!(matches!(result, PromiseOrValue::Value(())));
}

#[test]
fn repeat_withdraw_finds_nothing() {
    let mut contract = new_contract();
    create_edition(&mut contract, public_config(1));

    testing_env!(context_with_deposit(buyer(), PRICE).build());
    contract.buy_edition(1, None, None).unwrap();

    testing_env!(context(buyer()).build());
    assert!(matches!(
        contract.withdraw_funds(1).unwrap(),
        PromiseOrValue::Promise(_)
    ));
    assert!(matches!(
        contract.withdraw_funds(1).unwrap(),
        PromiseOrValue::Value(())
    ));
}

#[test]
fn withdraw_requires_existing_edition() {
    let mut contract = new_contract();
    testing_env!(context(buyer()).build());
    assert!(matches!(
        contract.withdraw_funds(9),
        Err(EditionError::NotFound(_))
    ));
}

#[test]
fn balances_accrue_per_edition() {
    let mut contract = new_contract();
    create_edition(&mut contract, public_config(1));
    create_edition(&mut contract, public_config(2));

    testing_env!(context_with_deposit(buyer(), PRICE).build());
    contract.buy_edition(1, None, None).unwrap();

    testing_env!(context(buyer()).build());
    contract.withdraw_funds(1).unwrap();

    assert_eq!(contract.get_edition(1).unwrap().balance, U128(0));
    // Edition 2 never sold; its balance is untouched by the withdraw.
    assert_eq!(contract.get_edition(2).unwrap().balance, U128(0));

    testing_env!(context_with_deposit(buyer(), PRICE).build());
    contract.buy_edition(2, None, None).unwrap();
    assert_eq!(contract.get_edition(2).unwrap().balance, U128(PRICE));
    assert_eq!(contract.get_edition(1).unwrap().balance, U128(0));
}
