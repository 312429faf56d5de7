use crate::*;

// Used-ticket bitmap: one u64 word per 64 ticket numbers per edition.
// Ticket numbers are caller-chosen and unbounded, so words are allocated
// lazily; an absent word means none of its 64 tickets were consumed.

fn ticket_key(edition_id: u64, ticket_number: u64) -> String {
    format!("{}:{}", edition_id, ticket_number >> 6)
}

fn ticket_bit(ticket_number: u64) -> u64 {
    1u64 << (ticket_number & 63)
}

impl Contract {
    pub(crate) fn is_ticket_used(&self, edition_id: u64, ticket_number: u64) -> bool {
        let word = self
            .used_tickets
            .get(&ticket_key(edition_id, ticket_number))
            .copied()
            .unwrap_or(0);
        word & ticket_bit(ticket_number) != 0
    }

    pub(crate) fn mark_ticket_used(&mut self, edition_id: u64, ticket_number: u64) {
        let key = ticket_key(edition_id, ticket_number);
        let word = self.used_tickets.get(&key).copied().unwrap_or(0);
        self.used_tickets.insert(key, word | ticket_bit(ticket_number));
    }
}

#[near]
impl Contract {
    /// Whether each ticket number has been consumed for the edition.
    /// Total over its input: unknown numbers are simply `false`.
    #[handle_result]
    pub fn check_ticket_numbers(
        &self,
        edition_id: u64,
        ticket_numbers: Vec<u64>,
    ) -> Result<Vec<bool>, EditionError> {
        if ticket_numbers.len() > MAX_BATCH_QUERY {
            return Err(EditionError::InvalidInput(format!(
                "At most {} ticket numbers per call",
                MAX_BATCH_QUERY
            )));
        }
        Ok(ticket_numbers
            .iter()
            .map(|n| self.is_ticket_used(edition_id, *n))
            .collect())
    }
}
