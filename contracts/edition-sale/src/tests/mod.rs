
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod edition_create_test;
    pub mod edition_manage_test;
    pub mod metadata_test;
    pub mod presale_test;
    pub mod purchase_test;
    pub mod royalty_test;
    pub mod ticket_test;
    pub mod upgrade_test;
    pub mod views_test;
    pub mod withdraw_test;
}
