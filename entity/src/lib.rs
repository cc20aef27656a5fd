//! SeaORM entities for the merchant backend schema.

pub mod prelude;

pub mod mbm_customer;
pub mod mbm_item;
pub mod mbm_item_field_detail;
pub mod mbm_role;
pub mod mbm_role_authority;
pub mod mbm_user;
pub mod mbm_user_contact_method;
pub mod sea_orm_active_enums;
