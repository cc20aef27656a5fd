use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CustomerDto {
    pub id: i32,
    pub open_id: Option<String>,
    pub email_address: Option<String>,
}
