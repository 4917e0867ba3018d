//! Request payload validation
//!
//! Each resource declares its required and updatable fields once, as a
//! schema, and services check payloads against it before touching the store.

use crate::error::AppError;

/// Payloads that can report which named fields they carry
///
/// A field counts as present only when it was supplied with a non-null value.
pub trait Fields {
    /// Whether `field` is present in the payload
    fn is_present(&self, field: &str) -> bool;
}

/// A required field and the message reported when it is missing
#[derive(Debug, Clone, Copy)]
pub struct Requirement {
    /// Field name as it appears in the request body
    pub field: &'static str,
    /// Client-facing message when the field is missing
    pub message: &'static str,
}

/// Schema for create payloads: every listed field must be present
#[derive(Debug, Clone, Copy)]
pub struct CreateSchema {
    /// Required fields, checked in order
    pub required: &'static [Requirement],
}

impl CreateSchema {
    /// Fail with the message of the first missing field
    pub fn check(&self, payload: &impl Fields) -> Result<(), AppError> {
        match self.required.iter().find(|r| !payload.is_present(r.field)) {
            Some(missing) => Err(AppError::Validation(missing.message.to_string())),
            None => Ok(()),
        }
    }
}

/// Schema for patch payloads: at least one updatable field must be present
#[derive(Debug, Clone, Copy)]
pub struct PatchSchema {
    /// Fields a patch may update
    pub fields: &'static [&'static str],
    /// Client-facing message when none of them is present
    pub message: &'static str,
}

impl PatchSchema {
    /// Fail when the payload carries none of the updatable fields
    pub fn check(&self, payload: &impl Fields) -> Result<(), AppError> {
        if self.fields.iter().any(|field| payload.is_present(field)) {
            Ok(())
        } else {
            Err(AppError::Validation(self.message.to_string()))
        }
    }
}

/// Folder creation
pub const FOLDER_CREATE: CreateSchema = CreateSchema {
    required: &[Requirement {
        field: "title",
        message: "Missing a title",
    }],
};

/// Folder update
pub const FOLDER_PATCH: PatchSchema = PatchSchema {
    fields: &["title"],
    message: "Request body must contain a title",
};

/// Note creation
pub const NOTE_CREATE: CreateSchema = CreateSchema {
    required: &[
        Requirement {
            field: "title",
            message: "Missing title",
        },
        Requirement {
            field: "content",
            message: "Missing content",
        },
        Requirement {
            field: "folder_id",
            message: "Missing folder_id",
        },
    ],
};

/// Note update
pub const NOTE_PATCH: PatchSchema = PatchSchema {
    fields: &["title", "content", "folder_id"],
    message: "Request body must contain title, content, or folder_id",
};
