/// Source page tag stored when the submission does not carry one.
pub const DEFAULT_SOURCE_PAGE: &str = "homepage";

/// Every field a lead submission may carry.
///
/// The variant order is the column order of the `leads` table. Each field knows
/// its JSON key (camelCase, as posted by the form), its SQLite column and the
/// maximum number of characters kept after sanitization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    Name,
    Phone,
    Email,
    City,
    ExpectedReturnDate,
    CleaningPlan,
    ProfessionalCleaningClause,
    SourcePage,
}

impl LeadField {
    pub const ALL: [LeadField; 8] = [
        LeadField::Name,
        LeadField::Phone,
        LeadField::Email,
        LeadField::City,
        LeadField::ExpectedReturnDate,
        LeadField::CleaningPlan,
        LeadField::ProfessionalCleaningClause,
        LeadField::SourcePage,
    ];

    /// Key used in the JSON payload and as the form input `name`.
    pub fn key(self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Phone => "phone",
            LeadField::Email => "email",
            LeadField::City => "city",
            LeadField::ExpectedReturnDate => "expectedReturnDate",
            LeadField::CleaningPlan => "cleaningPlan",
            LeadField::ProfessionalCleaningClause => "professionalCleaningClause",
            LeadField::SourcePage => "sourcePage",
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Phone => "phone",
            LeadField::Email => "email",
            LeadField::City => "city",
            LeadField::ExpectedReturnDate => "expected_return_date",
            LeadField::CleaningPlan => "cleaning_plan",
            LeadField::ProfessionalCleaningClause => "professional_cleaning_clause",
            LeadField::SourcePage => "source_page",
        }
    }

    /// Maximum length in characters; longer input is truncated, not rejected.
    pub fn max_len(self) -> usize {
        match self {
            LeadField::Name => 200,
            LeadField::Phone => 30,
            LeadField::Email => 254,
            LeadField::City => 100,
            LeadField::ExpectedReturnDate => 20,
            LeadField::CleaningPlan => 100,
            LeadField::ProfessionalCleaningClause => 20,
            LeadField::SourcePage => 50,
        }
    }

    /// Name and phone are the only fields the server insists on.
    pub fn is_required(self) -> bool {
        matches!(self, LeadField::Name | LeadField::Phone)
    }
}
