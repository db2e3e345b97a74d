//! Building blocks shared by every entity: status, user references, audit trail

use serde::{Deserialize, Serialize};

/// Status code carried by `status.code`
///
/// The backend uses a small closed set. Anything else is kept as
/// `Unknown` so that a new code never breaks list deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCode {
    #[default]
    Active,
    Inactive,
    Pending,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl StatusCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Active => "active",
            StatusCode::Inactive => "inactive",
            StatusCode::Pending => "pending",
            StatusCode::Rejected => "rejected",
            StatusCode::Unknown => "unknown",
        }
    }

    /// Parse a code typed by a user (case-insensitive)
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => Some(StatusCode::Active),
            "inactive" => Some(StatusCode::Inactive),
            "pending" => Some(StatusCode::Pending),
            "rejected" => Some(StatusCode::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nested status object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub id: i64,
    pub code: StatusCode,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// User reference used in `created_by` / `updated_by` / `deleted_by`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserRef {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

/// Lightweight reference to a related entity (client, brand, insurer...)
///
/// Related resources are embedded with varying shapes; only the id is
/// guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub id: i64,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub license_plate: Option<String>,
}

impl Reference {
    /// Best human-readable label for the reference
    pub fn display_label(&self) -> String {
        [&self.label, &self.name, &self.license_plate, &self.code]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

/// Audit trail flattened into every entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Audit {
    #[serde(default)]
    pub created_by: Option<UserRef>,
    #[serde(default)]
    pub updated_by: Option<UserRef>,
    #[serde(default)]
    pub deleted_by: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Soft deletion marker
    #[serde(default)]
    pub deleted_at: Option<String>,
}

/// Behaviour common to all entities rendered by the back-office
pub trait Record: Clone + std::fmt::Debug + Send + Sync + 'static {
    fn id(&self) -> i64;

    fn status(&self) -> Option<&Status>;

    fn audit(&self) -> &Audit;

    /// Soft-deleted entities stay in lists with a non-null `deleted_at`
    fn is_deleted(&self) -> bool {
        self.audit().deleted_at.is_some()
    }

    fn status_code(&self) -> Option<StatusCode> {
        self.status().map(|s| s.code)
    }
}

/// Implement [`Record`] for a struct with `id`, `status` and a flattened `audit`
#[macro_export]
macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::models::Record for $ty {
                fn id(&self) -> i64 {
                    self.id
                }

                fn status(&self) -> Option<&$crate::models::Status> {
                    self.status.as_ref()
                }

                fn audit(&self) -> &$crate::models::Audit {
                    &self.audit
                }
            }
        )+
    };
}
