//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod complaint_id_generator;
mod complaint_repository;
mod identity_provider;

#[cfg(test)]
pub use complaint_id_generator::MockComplaintIdGenerator;
pub use complaint_id_generator::{ComplaintIdGenerator, UuidComplaintIdGenerator};
#[cfg(test)]
pub use complaint_repository::MockComplaintRepository;
pub use complaint_repository::{
    ComplaintRepository, ComplaintRepositoryError, FixtureComplaintRepository,
};
#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
pub use identity_provider::{FormIdentityProvider, IdentityProvider};
