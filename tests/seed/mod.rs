//! Tests for the demo data loader.

mod initialise;

use mbm_test_utils::prelude::*;
