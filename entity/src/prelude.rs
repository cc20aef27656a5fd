pub use super::mbm_customer::Entity as MbmCustomer;
pub use super::mbm_item::Entity as MbmItem;
pub use super::mbm_item_field_detail::Entity as MbmItemFieldDetail;
pub use super::mbm_role::Entity as MbmRole;
pub use super::mbm_role_authority::Entity as MbmRoleAuthority;
pub use super::mbm_user::Entity as MbmUser;
pub use super::mbm_user_contact_method::Entity as MbmUserContactMethod;
