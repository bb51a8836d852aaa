//! Domain entities and the value types they are built from.

pub mod athlete;
pub mod contract;
pub mod organization;
pub mod values;

pub use athlete::{Athlete, AthleteKey};
pub use contract::{Contract, ContractDetails};
pub use organization::Organization;
pub use values::{Age, Amount, Date8, Email, Name, OrganizationName, Phone, Sport};
