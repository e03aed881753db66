//! CloudFormation custom resource that manages one SSM parameter

pub mod arn;
pub mod callback;
pub mod handler;
pub mod model;
pub mod store;

// Re-export the main types for convenience
pub use callback::{HttpResponseSink, ResponseSink};
pub use handler::{CustomResourceHandler, ParameterIdentity, function_handler, resolve_identity};
pub use model::{CloudFormationRequest, RequestType, ResponseEnvelope, ResponseStatus};
pub use store::{ParameterStore, SsmParameterStore};
