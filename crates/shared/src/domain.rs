use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_newtype!(FunctionId);
id_newtype!(CategoryId);

/// Immutable framework catalog: a version label and its ordered functions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Framework {
    pub version: String,
    pub functions: Vec<Function>,
}

impl Framework {
    /// Framework with no functions; what the checklist falls back to when the
    /// catalog cannot be obtained.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn category_count(&self) -> usize {
        self.functions.iter().map(|f| f.categories.len()).sum()
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.functions.iter().flat_map(|f| f.categories.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub id: FunctionId,
    pub name: String,
    pub description: String,
    #[serde(rename = "Categories")]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

/// Assessment answer for one category.
///
/// `Unrecognized` keeps any answer outside the three selectable values
/// verbatim; it counts as pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ComplianceStatus {
    #[default]
    Pending,
    Met,
    NotMet,
    NotApplicable,
    Unrecognized(String),
}

impl ComplianceStatus {
    /// The three answers offered by the editor, in display order.
    pub const SELECTABLE: [ComplianceStatus; 3] = [
        ComplianceStatus::Met,
        ComplianceStatus::NotMet,
        ComplianceStatus::NotApplicable,
    ];

    pub fn from_answer(answer: &str) -> Self {
        match answer {
            "" => Self::Pending,
            "Yes" => Self::Met,
            "No" => Self::NotMet,
            "N/A" => Self::NotApplicable,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_answer(&self) -> &str {
        match self {
            Self::Pending => "",
            Self::Met => "Yes",
            Self::NotMet => "No",
            Self::NotApplicable => "N/A",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Text shown on report badges.
    pub fn badge_label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            other => other.as_answer(),
        }
    }
}

/// Category in its working form: catalog fields plus the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceCategory {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub status: ComplianceStatus,
    pub notes: String,
}

impl From<&Category> for ComplianceCategory {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            description: category.description.clone(),
            status: ComplianceStatus::Pending,
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceFunction {
    pub id: FunctionId,
    pub name: String,
    pub description: String,
    pub categories: Vec<ComplianceCategory>,
}

impl From<&Function> for ComplianceFunction {
    fn from(function: &Function) -> Self {
        Self {
            id: function.id.clone(),
            name: function.name.clone(),
            description: function.description.clone(),
            categories: function
                .categories
                .iter()
                .map(ComplianceCategory::from)
                .collect(),
        }
    }
}

/// A single edit to one field of a working category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Status(ComplianceStatus),
    Notes(String),
}

impl FieldUpdate {
    /// Builds an update from a raw field name (`"status"` or `"notes"`).
    /// Values are taken verbatim; unknown field names yield `None`.
    pub fn from_raw(field: &str, value: &str) -> Option<Self> {
        match field {
            "status" => Some(Self::Status(ComplianceStatus::from_answer(value))),
            "notes" => Some(Self::Notes(value.to_string())),
            _ => None,
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Status(_) => "status",
            Self::Notes(_) => "notes",
        }
    }
}
