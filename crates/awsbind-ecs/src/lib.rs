//! # awsbind-ecs
//!
//! Blocking bindings for Amazon Elastic Container Service (API version
//! 2014-11-13, awsJson 1.1).
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | `client`    | [`EcsClient`], one method per operation           |
//! | `request`   | request shapes                                    |
//! | `response`  | response shapes                                   |
//! | `model`     | shapes shared by both, wire enums                 |
//! | `error`     | [`EcsErrorKind`] and its unmarshalling chain      |
//! | `operation` | binding of each request to its wire operation     |
//! | `actions`   | [`EcsActions`] for IAM policies                   |

pub mod actions;
pub mod client;
pub mod error;
pub mod model;
pub mod operation;
pub mod request;
pub mod response;

pub use actions::EcsActions;
pub use client::EcsClient;
pub use error::{EcsError, EcsErrorKind, EcsResult};
pub use model::*;
pub use operation::{EcsOperation, OPERATION_NAMES};
pub use request::*;
pub use response::*;
