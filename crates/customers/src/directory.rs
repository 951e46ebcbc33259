use serde::{Deserialize, Serialize};
use thiserror::Error;

use pepstock_core::{Entity, EntityId, IdAllocator, find_by_id};

/// Customer identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub EntityId);

impl CustomerId {
    /// The blank-picker placeholder; never allocated to a customer.
    pub const UNSET: CustomerId = CustomerId(EntityId::UNSET);

    pub fn new(id: EntityId) -> Self {
        Self(id)
    }

    pub fn is_set(&self) -> bool {
        self.0.is_set()
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A customer record. Contact fields are free-form strings; nothing beyond
/// the presence checks at add time is ever validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
    phone: String,
    address: String,
}

impl Customer {
    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> CustomerId {
        self.id
    }
}

/// The customer fields open to inline edits, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Name,
    Email,
    Phone,
    Address,
}

/// Why an add was declined. The directory is unchanged in every case.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CustomerRejection {
    #[error("customer name cannot be empty")]
    EmptyName,
    #[error("customer email cannot be empty")]
    EmptyEmail,
}

/// The customer roster, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
    ids: IdAllocator,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self {
            customers: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Directory with a caller-chosen allocator (deterministic ids for tests
    /// and seeded states).
    pub fn with_allocator(ids: IdAllocator) -> Self {
        Self {
            customers: Vec::new(),
            ids,
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn get(&self, id: CustomerId) -> Option<&Customer> {
        find_by_id(&self.customers, id)
    }

    /// Name lookup for rendering; a dangling id is `None`.
    pub fn name_of(&self, id: CustomerId) -> Option<&str> {
        self.get(id).map(Customer::name)
    }

    /// Register a customer. Name and email must be non-empty (unvalidated
    /// otherwise); phone and address may be blank.
    pub fn add(
        &mut self,
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
    ) -> Result<CustomerId, CustomerRejection> {
        if name.is_empty() {
            return Err(CustomerRejection::EmptyName);
        }
        if email.is_empty() {
            return Err(CustomerRejection::EmptyEmail);
        }

        let id = CustomerId::new(self.ids.allocate());
        self.customers.push(Customer {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        });
        Ok(id)
    }

    /// Overwrite one field in place. Any value is accepted, including empty
    /// strings for name and email. Unknown ids are a no-op.
    pub fn update(&mut self, id: CustomerId, field: CustomerField, value: &str) {
        let Some(customer) = self.customers.iter_mut().find(|c| c.id == id) else {
            return;
        };
        let slot = match field {
            CustomerField::Name => &mut customer.name,
            CustomerField::Email => &mut customer.email,
            CustomerField::Phone => &mut customer.phone,
            CustomerField::Address => &mut customer.address,
        };
        *slot = value.to_string();
    }

    /// Delete unconditionally; orders referencing the customer keep their id
    /// and dangle.
    pub fn remove(&mut self, id: CustomerId) {
        self.customers.retain(|c| c.id != id);
    }
}

impl Default for CustomerDirectory {
    fn default() -> Self {
        Self::new()
    }
}
