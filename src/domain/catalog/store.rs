//! The document knowledge store.
//!
//! A fixed, ordered table of [`DocumentRecord`]s. Iteration order is the
//! definition order below and is part of the matching contract: the first
//! record that matches wins.

use once_cell::sync::Lazy;
use thiserror::Error;

use super::record::{normalize, DocumentCategory, DocumentRecord};

/// Number of templates advertised by the document library.
pub const TOTAL_TEMPLATES: u32 = 170;

/// Sample of canonical names suggested when a lookup misses.
pub const LOOKUP_SUGGESTION: &str =
    "Try searching for: NDA, Lease Agreement, LLC Operating Agreement, Power of Attorney";

const DOCUMENTS: [DocumentRecord; 5] = [
    DocumentRecord {
        key: "nda",
        full_name: "Non-Disclosure Agreement",
        category: "Business Security",
        description: "Protects confidential business information shared between parties.",
        use_cases: &[
            "Sharing business secrets with potential partners",
            "Hiring contractors who will access proprietary data",
            "Discussing merger/acquisition opportunities",
        ],
        key_clauses: &[
            "Definition of Confidential Information",
            "Obligations of Receiving Party",
            "Duration of Confidentiality",
            "Permitted Disclosures",
            "Remedies for Breach",
        ],
        sales_pitch: "Our NDA is attorney-reviewed and covers all 50 states. Unlike free templates, ours includes mutual protection clauses and specific remedies.",
    },
    DocumentRecord {
        key: "lease agreement",
        full_name: "Residential Lease Agreement",
        category: "Property Matters",
        description: "A legally binding contract between landlord and tenant for rental property.",
        use_cases: &[
            "Renting out a residential property",
            "Establishing tenant rights and responsibilities",
            "Setting rental payment terms",
        ],
        key_clauses: &[
            "Rent Amount and Due Date",
            "Security Deposit Terms",
            "Maintenance Responsibilities",
            "Termination Conditions",
            "Pet Policy",
        ],
        sales_pitch: "Our Lease Agreement is compliant with state-specific landlord-tenant laws. It includes addendums for pets, utilities, and move-in checklists.",
    },
    DocumentRecord {
        key: "llc operating agreement",
        full_name: "LLC Operating Agreement",
        category: "Business Security",
        description: "Establishes the ownership structure and operating procedures of an LLC.",
        use_cases: &[
            "Forming a new Limited Liability Company",
            "Defining member ownership percentages",
            "Setting profit distribution rules",
        ],
        key_clauses: &[
            "Member Contributions",
            "Profit/Loss Allocation",
            "Voting Rights",
            "Management Structure",
            "Dissolution Procedures",
        ],
        sales_pitch: "Our Operating Agreement protects your personal assets and is accepted by banks for business accounts. Includes single-member and multi-member versions.",
    },
    DocumentRecord {
        key: "power of attorney",
        full_name: "General Power of Attorney",
        category: "Family Protection",
        description: "Authorizes someone to act on your behalf for financial and legal matters.",
        use_cases: &[
            "Traveling abroad and need someone to handle affairs",
            "Elderly parents need help managing finances",
            "Business owner needs someone to sign documents",
        ],
        key_clauses: &[
            "Scope of Authority",
            "Effective Date",
            "Revocation Terms",
            "Agent Responsibilities",
            "Compensation (if any)",
        ],
        sales_pitch: "Our POA meets notarization requirements and includes specific powers you can customize. Accepted by banks and government agencies.",
    },
    DocumentRecord {
        key: "employment agreement",
        full_name: "Employment Agreement",
        category: "Business Security",
        description: "Formal contract between employer and employee defining terms of employment.",
        use_cases: &[
            "Hiring a new full-time employee",
            "Promoting an employee to a new role",
            "Establishing executive compensation",
        ],
        key_clauses: &[
            "Job Title and Duties",
            "Compensation and Benefits",
            "Non-Compete Clause",
            "Termination Conditions",
            "Intellectual Property Assignment",
        ],
        sales_pitch: "Our Employment Agreement protects both parties and includes optional non-compete and confidentiality clauses. State-law compliant.",
    },
];

const CATEGORIES: [DocumentCategory; 4] = [
    DocumentCategory {
        name: "Family Protection",
        documents: &[
            "Living Will",
            "Power of Attorney",
            "Healthcare POA",
            "Prenuptial Agreement",
            "Parenting Plan",
            "Child Care Authorization",
        ],
    },
    DocumentCategory {
        name: "Business Security",
        documents: &[
            "NDA",
            "LLC Operating Agreement",
            "Employment Agreement",
            "Independent Contractor",
            "Partnership Agreement",
            "Consulting Agreement",
        ],
    },
    DocumentCategory {
        name: "Property Matters",
        documents: &[
            "Lease Agreement",
            "Commercial Lease",
            "Bill of Sale",
            "Sublease",
            "Eviction Notice",
            "Roommate Agreement",
        ],
    },
    DocumentCategory {
        name: "Legal Services",
        documents: &[
            "Attorney Engagement Letter",
            "Legal Services Agreement",
            "Retainer Agreement",
            "Limited Scope Representation",
        ],
    },
];

static STANDARD: Lazy<DocumentStore> =
    Lazy::new(|| DocumentStore::new(DOCUMENTS.to_vec(), CATEGORIES.to_vec()));

/// A detail lookup that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Document '{name}' not found in database.")]
pub struct DocumentNotFound {
    /// The name as the caller supplied it.
    pub name: String,
    /// Canonical names worth trying instead.
    pub suggestion: &'static str,
}

/// Read-only, ordered document table.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    records: Vec<IndexedRecord>,
    categories: Vec<DocumentCategory>,
}

#[derive(Debug, Clone)]
struct IndexedRecord {
    record: DocumentRecord,
    lowered_name: String,
    normalized_name: String,
}

impl DocumentStore {
    /// Builds a store from records in their matching order.
    pub fn new(records: Vec<DocumentRecord>, categories: Vec<DocumentCategory>) -> Self {
        let records = records
            .into_iter()
            .map(|record| IndexedRecord {
                lowered_name: record.full_name.to_lowercase(),
                normalized_name: record.normalized_name(),
                record,
            })
            .collect();
        Self {
            records,
            categories,
        }
    }

    /// The built-in Legalgram catalogue.
    pub fn standard() -> &'static DocumentStore {
        &STANDARD
    }

    /// Records in store order.
    pub fn records(&self) -> impl Iterator<Item = &DocumentRecord> {
        self.records.iter().map(|r| &r.record)
    }

    /// Browse categories for the library listing.
    pub fn categories(&self) -> &[DocumentCategory] {
        &self.categories
    }

    /// First record whose key or lowercased display name occurs in `text`.
    pub fn find_by_key_or_substring(&self, text: &str) -> Option<&DocumentRecord> {
        let lowered = text.to_lowercase();
        self.records
            .iter()
            .find(|r| lowered.contains(r.record.key) || lowered.contains(&r.lowered_name))
            .map(|r| &r.record)
    }

    /// Resolves a document by name for the detail endpoint.
    ///
    /// Exact key match first, then the first record (in store order) whose key
    /// or normalized display name contains, or is contained in, the
    /// normalized query.
    pub fn find_details(&self, name: &str) -> Result<&DocumentRecord, DocumentNotFound> {
        let query = normalize(name);
        let not_found = || DocumentNotFound {
            name: name.to_string(),
            suggestion: LOOKUP_SUGGESTION,
        };

        if query.is_empty() {
            return Err(not_found());
        }

        if let Some(exact) = self.records.iter().find(|r| r.record.key == query) {
            return Ok(&exact.record);
        }

        self.records
            .iter()
            .find(|r| {
                let key = r.record.key;
                let full = r.normalized_name.as_str();
                query.contains(key) || key.contains(&query) || full.contains(&query) || query.contains(full)
            })
            .map(|r| &r.record)
            .ok_or_else(not_found)
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        DocumentStore::standard().clone()
    }
}
