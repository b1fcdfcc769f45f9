//! # awsbind-quicksight
//!
//! Blocking bindings for Amazon QuickSight (API version 2018-04-01,
//! restJson1).
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | `client`    | [`QuickSightClient`], one method per operation         |
//! | `request`   | request shapes; path and query members never hit the body |
//! | `response`  | response shapes, each with `status` and `request_id`   |
//! | `model`     | dashboards, data sets, data sources, templates, users  |
//! | `error`     | [`QuickSightErrorKind`] and its unmarshalling chain    |
//! | `operation` | route of each request (method, path, query, body)      |
//! | `actions`   | [`QuickSightActions`] for IAM policies                 |

pub mod actions;
pub mod client;
pub mod error;
pub mod model;
pub mod operation;
pub mod request;
pub mod response;

pub use actions::QuickSightActions;
pub use client::QuickSightClient;
pub use error::{QuickSightError, QuickSightErrorKind, QuickSightResult};
pub use model::*;
pub use operation::{QuickSightOperation, OPERATION_NAMES};
pub use request::*;
pub use response::*;
