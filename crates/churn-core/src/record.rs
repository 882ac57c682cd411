//! The customer record collected for a single prediction request.

use serde::{Deserialize, Serialize};

/// Raw field values for one bank customer, as collected by the input
/// surface.
///
/// A record is created per prediction request and discarded immediately
/// after. The numeric ranges shown on the form (age 18-92, tenure 0-10,
/// products 1-4, 0/1 indicators) are enforced by the input surface, not
/// here: the core accepts out-of-range values unvalidated.
///
/// `gender` and `geography` are free-form strings at this level; they
/// must be members of the category sets the corresponding encoders were
/// fitted on, which is checked at encoding time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Credit score.
    pub credit_score: i64,

    /// Gender label, one of the gender encoder's known classes.
    pub gender: String,

    /// Age in years.
    pub age: i64,

    /// Years with the bank.
    pub tenure: i64,

    /// Account balance.
    pub balance: f32,

    /// Number of bank products held.
    pub num_of_products: i64,

    /// Whether the customer holds a credit card (0/1).
    pub has_cr_card: i64,

    /// Whether the customer is an active member (0/1).
    pub is_active_member: i64,

    /// Estimated yearly salary.
    pub estimated_salary: f32,

    /// Geography label, one of the geography encoder's known categories.
    pub geography: String,
}
