//! Client Model
//!
//! The insured party / vehicle owner attached to an assignment.

use serde::{Deserialize, Serialize};

use super::{Audit, Status};

/// Client entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_1: Option<String>,
    #[serde(default)]
    pub phone_2: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(flatten)]
    pub audit: Audit,
}

/// Create client payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientCreate {
    pub name: String,
    pub email: Option<String>,
    pub phone_1: Option<String>,
    pub phone_2: Option<String>,
    pub address: Option<String>,
}

/// Update client payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

crate::impl_record!(Client);
