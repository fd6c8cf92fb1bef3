//! Customer aggregate and its identifier.
//!
//! A customer is identified by a store-assigned integer and carries a name,
//! an email address and an optional age. The identifier is fixed once the
//! store has assigned it; only [`CustomerDetails`] change over the record's
//! lifetime.

use std::fmt;

/// Store-assigned customer identifier.
///
/// # Examples
/// ```
/// use customer_api::domain::CustomerId;
///
/// let id = CustomerId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(i32);

impl CustomerId {
    /// Wrap a raw identifier value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Return the raw identifier value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for CustomerId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutable customer fields shared by create and update requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

impl CustomerDetails {
    /// Build a details value from its parts.
    ///
    /// # Examples
    /// ```
    /// use customer_api::domain::CustomerDetails;
    ///
    /// let details = CustomerDetails::new("Abdi Ali", "AbdiAli@example.com", Some(30));
    /// assert_eq!(details.age, Some(30));
    /// ```
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: Option<i32>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

/// Persisted customer record.
///
/// ## Invariants
/// - `id` is assigned by the store and never changes; [`Customer::with_details`]
///   replaces the field set while keeping the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    details: CustomerDetails,
}

impl Customer {
    /// Assemble a customer from a stored identity and its fields.
    #[must_use]
    pub fn new(id: CustomerId, details: CustomerDetails) -> Self {
        Self { id, details }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// Current field values.
    #[must_use]
    pub fn details(&self) -> &CustomerDetails {
        &self.details
    }

    /// Replace every mutable field, keeping the identifier.
    ///
    /// # Examples
    /// ```
    /// use customer_api::domain::{Customer, CustomerDetails, CustomerId};
    ///
    /// let james = Customer::new(
    ///     CustomerId::new(2),
    ///     CustomerDetails::new("james", "james@gmail.com", Some(14)),
    /// );
    /// let alice = james.with_details(CustomerDetails::new("alice", "alice@gmail.com", Some(20)));
    /// assert_eq!(alice.id(), CustomerId::new(2));
    /// assert_eq!(alice.details().name, "alice");
    /// ```
    #[must_use]
    pub fn with_details(self, details: CustomerDetails) -> Self {
        Self {
            id: self.id,
            details,
        }
    }

    /// Split the customer into identifier and fields.
    #[must_use]
    pub fn into_parts(self) -> (CustomerId, CustomerDetails) {
        (self.id, self.details)
    }
}

/// Write request handed to the repository's `save` operation.
///
/// A draft without an identifier is inserted and receives a new id from the
/// store; a draft carrying an identifier overwrites the matching row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    id: Option<CustomerId>,
    details: CustomerDetails,
}

impl CustomerDraft {
    /// Draft a brand new customer; the store assigns the identifier.
    #[must_use]
    pub fn new(details: CustomerDetails) -> Self {
        Self { id: None, details }
    }

    /// Identifier of the row to overwrite, if any.
    #[must_use]
    pub fn id(&self) -> Option<CustomerId> {
        self.id
    }

    /// Field values to persist.
    #[must_use]
    pub fn details(&self) -> &CustomerDetails {
        &self.details
    }
}

impl From<Customer> for CustomerDraft {
    fn from(customer: Customer) -> Self {
        Self {
            id: Some(customer.id),
            details: customer.details,
        }
    }
}
