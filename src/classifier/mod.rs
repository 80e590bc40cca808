//! Schema-driven classification of customer support messages.
//!
//! The pipeline is stateless per request: the inbound text is cleaned up,
//! an extraction prompt is built from the read-only attribute schema, the
//! retrying chat client produces a typed attribute mapping, and the
//! validator decides which declared attributes are present, normalizing
//! each value on the way. A missing attribute is a normal outcome, not an
//! error; the compensating behavior is an optional generated reply asking
//! the customer for exactly what is absent.

pub mod dto;
pub mod normalize;
pub mod schema;
pub mod service;
pub mod validate;

pub use self::dto::{AttributePair, ClassifiedMessage, ClassifyRequest, SchemaResponse};
pub use self::schema::{AttributeDefinition, SCHEMA};
pub use self::service::{ClassifierService, ClassifyError};
pub use self::validate::{RawAttributes, ValidationOutcome, validate_attributes};
