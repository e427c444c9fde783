//! Document classification for project uploads

use serde::{Deserialize, Serialize};

/// MIME types accepted for document uploads
pub const ALLOWED_MIME_TYPES: [&str; 7] = [
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/msword",
    "text/csv",
    "text/plain",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// Whether an upload's MIME type is one of the default allowed types
pub fn is_valid_file_type(mime_type: &str) -> bool {
    is_allowed_file_type(mime_type, &ALLOWED_MIME_TYPES)
}

/// Whether `mime_type` is in `allowed`; matching is exact
pub fn is_allowed_file_type(mime_type: &str, allowed: &[&str]) -> bool {
    allowed.contains(&mime_type)
}

/// Category a project document is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    Technical,
    Environmental,
    Contract,
    Financial,
    Regulatory,
    Legal,
    Misc,
}

impl DocumentCategory {
    /// Parse the stored category value, e.g. `"contract"`
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "technical" => Some(DocumentCategory::Technical),
            "environmental" => Some(DocumentCategory::Environmental),
            "contract" => Some(DocumentCategory::Contract),
            "financial" => Some(DocumentCategory::Financial),
            "regulatory" => Some(DocumentCategory::Regulatory),
            "legal" => Some(DocumentCategory::Legal),
            "misc" => Some(DocumentCategory::Misc),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentCategory::Technical => "Technical Document",
            DocumentCategory::Environmental => "Environmental Document",
            DocumentCategory::Contract => "Contract Document",
            DocumentCategory::Financial => "Financial Document",
            DocumentCategory::Regulatory => "Regulatory Document",
            DocumentCategory::Legal => "Legal Document",
            DocumentCategory::Misc => "Miscellaneous",
        }
    }
}

/// Display label for a stored category value; unknown values read "Document"
pub fn category_label(value: &str) -> &'static str {
    DocumentCategory::from_value(value).map_or("Document", |c| c.label())
}

/// Broad file kind, derived from the extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Pdf,
    Word,
    Spreadsheet,
    Text,
    Presentation,
    Image,
    Archive,
    Other,
}

impl DocumentKind {
    pub fn from_file_name(file_name: &str) -> Self {
        let extension = match file_name.rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => return DocumentKind::Other,
        };

        match extension.as_str() {
            "pdf" => DocumentKind::Pdf,
            "doc" | "docx" => DocumentKind::Word,
            "csv" | "xls" | "xlsx" => DocumentKind::Spreadsheet,
            "txt" => DocumentKind::Text,
            "ppt" | "pptx" => DocumentKind::Presentation,
            "jpg" | "jpeg" | "png" | "gif" => DocumentKind::Image,
            "zip" | "rar" => DocumentKind::Archive,
            _ => DocumentKind::Other,
        }
    }
}
