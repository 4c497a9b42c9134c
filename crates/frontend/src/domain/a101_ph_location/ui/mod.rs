mod address_fields;

pub use address_fields::AddressFields;
