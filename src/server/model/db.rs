//! Database model type aliases.
//!
//! These aliases give the rest of the server a single point of reference for the SeaORM
//! models generated in the `entity` crate.

/// A named permission bundle.
///
/// # Fields (from `entity::mbm_role::Model`)
/// - `id` - Primary key
/// - `name` - Unique canonical name such as `ROLE_ADMIN`
/// - `description` - Human readable description
/// - `created_at` / `updated_at` - Record timestamps
pub type RoleModel = entity::mbm_role::Model;

/// A customer of the store.
///
/// # Fields (from `entity::mbm_customer::Model`)
/// - `id` - Primary key
/// - `open_id` - External OpenID identity, unique when present
/// - `email_address` - Filled in lazily from the identity assertion
/// - `created_at` / `updated_at` - Record timestamps
pub type CustomerModel = entity::mbm_customer::Model;

/// A user account holding credentials and exactly one role.
///
/// # Fields (from `entity::mbm_user::Model`)
/// - `id` - Primary key
/// - `username` - Unique login name
/// - `password` - Opaque credential
/// - `api_key` / `secret_key` - API credentials
/// - `role_id` - Foreign key to the user's role
/// - `customer_id` - Optional foreign key to the linked customer
/// - `created_at` / `updated_at` - Record timestamps
pub type UserModel = entity::mbm_user::Model;

/// A contact detail of a user, one per contact method.
pub type UserContactMethodModel = entity::mbm_user_contact_method::Model;

/// A catalog item identified by its SKU.
pub type ItemModel = entity::mbm_item::Model;

/// The primary localized value of an item field.
pub type ItemFieldDetailModel = entity::mbm_item_field_detail::Model;
