use crate::tests::test_utils::*;
use crate::*;
use ed25519_dalek::{Signer, SigningKey};
use near_sdk::json_types::Base64VecU8;
use near_sdk::testing_env;

// --- presale purchases ---

#[test]
fn presale_mint_with_valid_signature() {
    let mut contract = new_contract();
    create_edition(&mut contract, presale_config(1, 3));

    testing_env!(context_with_deposit(buyer(), PRICE).build());
    let item = contract
        .buy_edition(1, Some(presale_signature(1, 5, &buyer())), Some(5))
        .unwrap();

    assert_eq!(contract.get_item(item).unwrap().owner_id, buyer());
    assert_eq!(contract.get_edition(1).unwrap().num_sold, 1);
    assert_eq!(contract.check_ticket_numbers(1, vec![5]).unwrap(), vec![true]);
}

#[test]
fn ticket_zero_is_a_valid_ticket() {
    let mut contract = new_contract();
    create_edition(&mut contract, presale_config(1, 3));

    testing_env!(context_with_deposit(buyer(), PRICE).build());
    contract
        .buy_edition(1, Some(presale_signature(1, 0, &buyer())), Some(0))
        .unwrap();
    assert_eq!(contract.check_ticket_numbers(1, vec![0]).unwrap(), vec![true]);

    // An omitted ticket number defaults to 0, which is now consumed.
    testing_env!(context_with_deposit(recipient(), PRICE).build());
    let err = contract
        .buy_edition(1, Some(presale_signature(1, 0, &recipient())), None)
        .unwrap_err();
    assert!(err.to_string().contains("already used"));
}

#[test]
fn presale_requires_signature() {
    let mut contract = new_contract();
    create_edition(&mut contract, presale_config(1, 3));

    testing_env!(context_with_deposit(buyer(), PRICE).build());
    let err = contract.buy_edition(1, None, Some(1)).unwrap_err();
    assert!(matches!(err, EditionError::SignatureInvalid(_)));
}

#[test]
fn presale_rejects_wrong_signer() {
    let mut contract = new_contract();
    create_edition(&mut contract, presale_config(1, 3));

    let rogue = SigningKey::from_bytes(&[99u8; 32]);
    let payload =
        edition_auth::presale_approval_payload(&collection_account(), 1, 1, &buyer());
    let hash = near_sdk::env::sha256_array(&payload);
    let signature = Base64VecU8(rogue.sign(&hash).to_bytes().to_vec());

    testing_env!(context_with_deposit(buyer(), PRICE).build());
    let err = contract.buy_edition(1, Some(signature), Some(1)).unwrap_err();
    assert!(matches!(err, EditionError::SignatureInvalid(_)));
}

#[test]
fn presale_signature_is_bound_to_buyer() {
    let mut contract = new_contract();
    create_edition(&mut contract, presale_config(1, 3));

    // Signature approves buyer(); recipient() tries to spend it.
    testing_env!(context_with_deposit(recipient(), PRICE).build());
    let err = contract
        .buy_edition(1, Some(presale_signature(1, 1, &buyer())), Some(1))
        .unwrap_err();
    assert!(matches!(err, EditionError::SignatureInvalid(_)));
}

#[test]
fn presale_signature_is_bound_to_ticket() {
    let mut contract = new_contract();
    create_edition(&mut contract, presale_config(1, 3));

    testing_env!(context_with_deposit(buyer(), PRICE).build());
    let err = contract
        .buy_edition(1, Some(presale_signature(1, 1, &buyer())), Some(2))
        .unwrap_err();
    assert!(matches!(err, EditionError::SignatureInvalid(_)));
}

#[test]
fn ticket_cannot_be_replayed() {
    let mut contract = new_contract();
    create_edition(&mut contract, presale_config(1, 3));

    testing_env!(context_with_deposit(buyer(), PRICE).build());
    contract
        .buy_edition(1, Some(presale_signature(1, 7, &buyer())), Some(7))
        .unwrap();

    // A second buyer with a fresh signature over the same ticket fails.
    testing_env!(context_with_deposit(recipient(), PRICE).build());
    let err = contract
        .buy_edition(1, Some(presale_signature(1, 7, &recipient())), Some(7))
        .unwrap_err();
    assert!(err.to_string().contains("already used"));
    assert_eq!(contract.get_edition(1).unwrap().num_sold, 1);
}

#[test]
fn tickets_are_scoped_per_edition() {
    let mut contract = new_contract();
    create_edition(&mut contract, presale_config(1, 3));
    create_edition(&mut contract, presale_config(2, 3));

    testing_env!(context_with_deposit(buyer(), PRICE).build());
    contract
        .buy_edition(1, Some(presale_signature(1, 7, &buyer())), Some(7))
        .unwrap();
    // Same number, different edition: independent bitmap.
    testing_env!(context_with_deposit(buyer(), PRICE).build());
    contract
        .buy_edition(2, Some(presale_signature(2, 7, &buyer())), Some(7))
        .unwrap();

    assert_eq!(contract.check_ticket_numbers(1, vec![7]).unwrap(), vec![true]);
    assert_eq!(contract.check_ticket_numbers(2, vec![7]).unwrap(), vec![true]);
}

#[test]
fn presale_allocation_exhausts_before_quantity() {
    let mut contract = new_contract();
    create_edition(&mut contract, presale_config(1, 1));

    testing_env!(context_with_deposit(buyer(), PRICE).build());
    contract
        .buy_edition(1, Some(presale_signature(1, 1, &buyer())), Some(1))
        .unwrap();

    // quantity=5 but the presale allocation of 1 is spent.
    testing_env!(context_with_deposit(recipient(), PRICE).build());
    let err = contract
        .buy_edition(1, Some(presale_signature(1, 2, &recipient())), Some(2))
        .unwrap_err();
    assert!(err.to_string().contains("exhausted"));
}

#[test]
fn presale_requires_exact_payment_too() {
    let mut contract = new_contract();
    create_edition(&mut contract, presale_config(1, 3));

    testing_env!(context_with_deposit(buyer(), PRICE - 1).build());
    let err = contract
        .buy_edition(1, Some(presale_signature(1, 1, &buyer())), Some(1))
        .unwrap_err();
    assert!(matches!(err, EditionError::IncorrectPayment(_)));
    // A failed payment check must not burn the ticket.
    assert_eq!(contract.check_ticket_numbers(1, vec![1]).unwrap(), vec![false]);
}

#[test]
fn presale_ends_when_public_window_opens() {
    let mut contract = new_contract();
    create_edition(&mut contract, presale_config(1, 3));

    // At start_time the signature requirement disappears.
    testing_env!(
        context_at(buyer(), NOW_SEC + 1000)
            .attached_deposit(near_sdk::NearToken::from_yoctonear(PRICE))
            .build()
    );
    contract.buy_edition(1, None, None).unwrap();
}
