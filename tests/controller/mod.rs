//! Tests for HTTP controller endpoints.
//!
//! Verifies request handling, response formatting and error mapping for the payment, customer
//! and catalog endpoints.

mod customer;
mod item;
mod router;
mod swatch;

use mbm::server::model::app::AppState;
use mbm_test_utils::prelude::*;

use crate::util::body_string;
