//! Required columns of the claims export

use serde::Serialize;
use std::fmt;

/// A required column of the input dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Column {
    #[serde(rename = "Claim_No")]
    ClaimNo,
    #[serde(rename = "Claim_Type")]
    ClaimType,
    #[serde(rename = "Relation")]
    Relation,
    #[serde(rename = "Age")]
    Age,
    #[serde(rename = "Claimed_Amount")]
    ClaimedAmount,
    #[serde(rename = "Incurred_Amount")]
    IncurredAmount,
    #[serde(rename = "Date_of_Admission")]
    DateOfAdmission,
    #[serde(rename = "Date_of_Discharge")]
    DateOfDischarge,
    #[serde(rename = "City_Name")]
    CityName,
    #[serde(rename = "Hospital_Name")]
    HospitalName,
}

impl Column {
    /// Every required column, in export order
    pub const ALL: [Column; 10] = [
        Column::ClaimNo,
        Column::ClaimType,
        Column::Relation,
        Column::Age,
        Column::ClaimedAmount,
        Column::IncurredAmount,
        Column::DateOfAdmission,
        Column::DateOfDischarge,
        Column::CityName,
        Column::HospitalName,
    ];

    /// Returns the header text used in the export
    pub fn header(&self) -> &'static str {
        match self {
            Column::ClaimNo => "Claim_No",
            Column::ClaimType => "Claim_Type",
            Column::Relation => "Relation",
            Column::Age => "Age",
            Column::ClaimedAmount => "Claimed_Amount",
            Column::IncurredAmount => "Incurred_Amount",
            Column::DateOfAdmission => "Date_of_Admission",
            Column::DateOfDischarge => "Date_of_Discharge",
            Column::CityName => "City_Name",
            Column::HospitalName => "Hospital_Name",
        }
    }

    /// Looks a column up by header text
    pub fn from_header(header: &str) -> Option<Column> {
        let header = header.trim();
        Column::ALL.into_iter().find(|c| c.header() == header)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
