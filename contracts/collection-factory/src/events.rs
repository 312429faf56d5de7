use near_sdk::{AccountId, NearToken, PublicKey, near};

#[near(event_json(standard = "nep297"))]
pub enum FactoryEvent {
    #[event_version("1.0.0")]
    CollectionCreated {
        collection_id: AccountId,
        creator_id: AccountId,
        symbol: String,
        implementation_version: u32,
    },
    #[event_version("1.0.0")]
    CollectionCreateFailed {
        collection_id: AccountId,
        creator_id: AccountId,
        refund: NearToken,
    },
    #[event_version("1.0.0")]
    ImplementationPublished {
        implementation_version: u32,
        code_len: u64,
    },
    #[event_version("1.0.0")]
    PlatformKeySet { platform_key: PublicKey },
    #[event_version("1.0.0")]
    OwnerTransferred {
        old_owner: AccountId,
        new_owner: AccountId,
    },
}
