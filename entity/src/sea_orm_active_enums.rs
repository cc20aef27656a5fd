use sea_orm::entity::prelude::*;

/// A single permission grant held by a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum Authority {
    #[sea_orm(string_value = "ROLE_ADMIN")]
    RoleAdmin,
    #[sea_orm(string_value = "ROLE_CUSTOMER")]
    RoleCustomer,
    #[sea_orm(string_value = "ROLE_CLIENT")]
    RoleClient,
    #[sea_orm(string_value = "CRUD_USERS")]
    CrudUsers,
    #[sea_orm(string_value = "CRUD_ROLES")]
    CrudRoles,
    #[sea_orm(string_value = "CRUD_CUSTOMERS")]
    CrudCustomers,
    #[sea_orm(string_value = "CRUD_ITEMS")]
    CrudItems,
    #[sea_orm(string_value = "CRUD_CARTS")]
    CrudCarts,
    #[sea_orm(string_value = "VIEW_CATALOG")]
    ViewCatalog,
    #[sea_orm(string_value = "MANAGE_OWN_CART")]
    ManageOwnCart,
    #[sea_orm(string_value = "MANAGE_OWN_PROFILE")]
    ManageOwnProfile,
    #[sea_orm(string_value = "ACT_FOR_CUSTOMER")]
    ActForCustomer,
}

/// The kind of contact detail stored against a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum ContactMethod {
    #[sea_orm(string_value = "NAMES")]
    Names,
    #[sea_orm(string_value = "LAST_NAME")]
    LastName,
    #[sea_orm(string_value = "EMAIL")]
    Email,
}

/// Localizable catalog item fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum ItemField {
    #[sea_orm(string_value = "TITLE")]
    Title,
    #[sea_orm(string_value = "AUTHOR")]
    Author,
    #[sea_orm(string_value = "SUMMARY")]
    Summary,
    #[sea_orm(string_value = "DESCRIPTION")]
    Description,
    #[sea_orm(string_value = "PUBLISHER")]
    Publisher,
    #[sea_orm(string_value = "FORMAT")]
    Format,
    #[sea_orm(string_value = "PAGE_COUNT")]
    PageCount,
    #[sea_orm(string_value = "GENRE")]
    Genre,
    #[sea_orm(string_value = "SIZE")]
    Size,
    #[sea_orm(string_value = "IMAGE_THUMBNAIL_URI")]
    ImageThumbnailUri,
}
