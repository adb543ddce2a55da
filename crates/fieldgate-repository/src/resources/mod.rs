//! Per-resource repository bindings.
//!
//! Each module supplies one [`RemoteResource`](crate::RemoteResource)
//! implementation: the wire record, the domain model, the search criteria,
//! the entity mapper, and the parameters factory for that resource type.
//! The repositories themselves are aliases over the generic
//! [`ResourceRepository`](crate::ResourceRepository).

mod appointment;
mod contract;
mod customer;
mod document;
mod employee;
mod genericflag;
mod note;
mod payment;
mod payment_profile;
mod route;
mod service_type;
mod subscription;
mod ticket;

pub use appointment::*;
pub use contract::*;
pub use customer::*;
pub use document::*;
pub use employee::*;
pub use genericflag::*;
pub use note::*;
pub use payment::*;
pub use payment_profile::*;
pub use route::*;
pub use service_type::*;
pub use subscription::*;
pub use ticket::*;

use crate::ResourceRepository;

/// Repository for appointments.
pub type AppointmentRepository<C> = ResourceRepository<Appointment, C>;
/// Repository for customers.
pub type CustomerRepository<C> = ResourceRepository<Customer, C>;
/// Repository for payments.
pub type PaymentRepository<C> = ResourceRepository<Payment, C>;
/// Repository for stored payment profiles.
pub type PaymentProfileRepository<C> = ResourceRepository<PaymentProfile, C>;
/// Repository for service subscriptions.
pub type SubscriptionRepository<C> = ResourceRepository<Subscription, C>;
/// Repository for service tickets (invoices).
pub type TicketRepository<C> = ResourceRepository<Ticket, C>;
/// Repository for service types.
pub type ServiceTypeRepository<C> = ResourceRepository<ServiceType, C>;
/// Repository for employees.
pub type EmployeeRepository<C> = ResourceRepository<Employee, C>;
/// Repository for routes.
pub type RouteRepository<C> = ResourceRepository<Route, C>;
/// Repository for generic flags.
pub type GenericFlagRepository<C> = ResourceRepository<GenericFlag, C>;
/// Repository for documents (lookup only).
pub type DocumentRepository<C> = ResourceRepository<Document, C>;
/// Repository for contracts (lookup only).
pub type ContractRepository<C> = ResourceRepository<Contract, C>;
/// Repository for notes (lookup only).
pub type NoteRepository<C> = ResourceRepository<Note, C>;
