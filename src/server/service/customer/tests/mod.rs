use mbm_test_utils::prelude::*;

mod get_customer_from_principal;
