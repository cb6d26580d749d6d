//! # Document Type Codes
//!
//! The circuit checks an optional document type code in `1..=99`. Codes
//! 1 through 9 have names; 99 is the "Other" sentinel used when no type is
//! declared. Any other code in range is accepted as an unnamed type.

use serde::{Deserialize, Serialize};

use crate::error::DocumentTypeError;

/// Named document kinds understood by the circuit.
///
/// | Code | Kind |
/// |------|------|
/// |  1 | Incorporation Certificate |
/// |  2 | Business License |
/// |  3 | Tax Certificate |
/// |  4 | Audit Report |
/// |  5 | Financial Statement |
/// |  6 | Compliance Certificate |
/// |  7 | Registration Form |
/// |  8 | Identity Document |
/// |  9 | Ownership Proof |
/// | 99 | Other |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    IncorporationCert,
    BusinessLicense,
    TaxCertificate,
    AuditReport,
    FinancialStatement,
    ComplianceCert,
    RegistrationForm,
    IdentityDocument,
    OwnershipProof,
    Other,
}

impl DocumentKind {
    /// All named kinds in code order.
    pub fn all() -> &'static [DocumentKind] {
        &[
            Self::IncorporationCert,
            Self::BusinessLicense,
            Self::TaxCertificate,
            Self::AuditReport,
            Self::FinancialStatement,
            Self::ComplianceCert,
            Self::RegistrationForm,
            Self::IdentityDocument,
            Self::OwnershipProof,
            Self::Other,
        ]
    }

    /// The numeric code for this kind.
    pub fn code(&self) -> DocumentTypeCode {
        let raw = match self {
            Self::IncorporationCert => 1,
            Self::BusinessLicense => 2,
            Self::TaxCertificate => 3,
            Self::AuditReport => 4,
            Self::FinancialStatement => 5,
            Self::ComplianceCert => 6,
            Self::RegistrationForm => 7,
            Self::IdentityDocument => 8,
            Self::OwnershipProof => 9,
            Self::Other => 99,
        };
        DocumentTypeCode(raw)
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::IncorporationCert => "Incorporation Certificate",
            Self::BusinessLicense => "Business License",
            Self::TaxCertificate => "Tax Certificate",
            Self::AuditReport => "Audit Report",
            Self::FinancialStatement => "Financial Statement",
            Self::ComplianceCert => "Compliance Certificate",
            Self::RegistrationForm => "Registration Form",
            Self::IdentityDocument => "Identity Document",
            Self::OwnershipProof => "Ownership Proof",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A validated document type code in `1..=99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct DocumentTypeCode(u8);

impl DocumentTypeCode {
    /// The "Other" sentinel, used when no type is declared.
    pub const OTHER: Self = Self(99);

    /// Smallest valid code.
    pub const MIN: u8 = 1;

    /// Largest valid code.
    pub const MAX: u8 = 99;

    /// Validate a raw code.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentTypeError::OutOfRange`] outside `1..=99`.
    pub fn new(code: i64) -> Result<Self, DocumentTypeError> {
        match u8::try_from(code) {
            Ok(c) if (Self::MIN..=Self::MAX).contains(&c) => Ok(Self(c)),
            _ => Err(DocumentTypeError::OutOfRange(code)),
        }
    }

    /// The raw code.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// The named kind for this code, if it has one.
    pub fn kind(&self) -> Option<DocumentKind> {
        DocumentKind::all()
            .iter()
            .copied()
            .find(|k| k.code() == *self)
    }

    /// Human-readable name, `"Unknown"` for unnamed codes.
    pub fn display_name(&self) -> &'static str {
        self.kind().map_or("Unknown", |k| k.display_name())
    }
}

impl TryFrom<i64> for DocumentTypeCode {
    type Error = DocumentTypeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DocumentTypeCode> for u8 {
    fn from(code: DocumentTypeCode) -> Self {
        code.0
    }
}

impl From<DocumentKind> for DocumentTypeCode {
    fn from(kind: DocumentKind) -> Self {
        kind.code()
    }
}

impl std::fmt::Display for DocumentTypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
