//! Claim record

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::temporal::days_between;
use core_kernel::ClaimNo;
use crate::column::Column;
use crate::error::ClaimError;

/// Why a field of a record is unavailable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FieldErrorKind {
    /// The column is absent from the dataset
    MissingColumn,
    /// The cell is blank
    Blank,
    /// The cell could not be parsed as the expected type
    Unparseable(String),
}

/// A field that failed to load, kept on the record until a report reads it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub column: Column,
    pub row: usize,
    pub value: String,
    pub kind: FieldErrorKind,
}

impl From<FieldError> for ClaimError {
    fn from(err: FieldError) -> Self {
        match err.kind {
            FieldErrorKind::MissingColumn => ClaimError::MissingColumn(err.column),
            FieldErrorKind::Blank => ClaimError::MalformedValue {
                column: err.column,
                row: err.row,
                value: err.value,
                reason: "value is blank".to_string(),
            },
            FieldErrorKind::Unparseable(reason) => ClaimError::MalformedValue {
                column: err.column,
                row: err.row,
                value: err.value,
                reason,
            },
        }
    }
}

type Field<T> = Result<T, FieldError>;

/// One row of the claims export
///
/// Records are immutable once loaded. Typed accessors return the parsed
/// value or the reason it could not be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimRecord {
    row: usize,
    claim_no: Option<ClaimNo>,
    claim_type: Field<String>,
    relation: Field<String>,
    age: Field<u32>,
    claimed_amount: Field<Decimal>,
    incurred_amount: Field<Decimal>,
    admission_date: Field<NaiveDate>,
    discharge_date: Field<NaiveDate>,
    city_name: Field<String>,
    hospital_name: Field<String>,
}

impl ClaimRecord {
    /// Creates a builder for the given 1-based data row
    pub fn builder(row: usize) -> ClaimRecordBuilder {
        ClaimRecordBuilder::new(row)
    }

    /// 1-based data row number in the source file
    pub fn row(&self) -> usize {
        self.row
    }

    /// Claim number, `None` when the cell was blank
    pub fn claim_no(&self) -> Option<&ClaimNo> {
        self.claim_no.as_ref()
    }

    /// Claim mode, e.g. Cashless or Reimbursement
    pub fn claim_type(&self) -> Result<&str, ClaimError> {
        read_text(&self.claim_type)
    }

    /// Relationship of the patient to the employee
    pub fn relation(&self) -> Result<&str, ClaimError> {
        read_text(&self.relation)
    }

    /// Patient age in years
    pub fn age(&self) -> Result<u32, ClaimError> {
        read_copy(&self.age)
    }

    pub fn claimed_amount(&self) -> Result<Decimal, ClaimError> {
        read_copy(&self.claimed_amount)
    }

    pub fn incurred_amount(&self) -> Result<Decimal, ClaimError> {
        read_copy(&self.incurred_amount)
    }

    pub fn admission_date(&self) -> Result<NaiveDate, ClaimError> {
        read_copy(&self.admission_date)
    }

    pub fn discharge_date(&self) -> Result<NaiveDate, ClaimError> {
        read_copy(&self.discharge_date)
    }

    pub fn city_name(&self) -> Result<&str, ClaimError> {
        read_text(&self.city_name)
    }

    pub fn hospital_name(&self) -> Result<&str, ClaimError> {
        read_text(&self.hospital_name)
    }

    /// Days between admission and discharge; negative if discharge precedes admission
    pub fn stay_days(&self) -> Result<i64, ClaimError> {
        Ok(days_between(self.admission_date()?, self.discharge_date()?))
    }

    /// Returns every field failure carried by this record
    pub fn field_errors(&self) -> Vec<&FieldError> {
        [
            self.claim_type.as_ref().err(),
            self.relation.as_ref().err(),
            self.age.as_ref().err(),
            self.claimed_amount.as_ref().err(),
            self.incurred_amount.as_ref().err(),
            self.admission_date.as_ref().err(),
            self.discharge_date.as_ref().err(),
            self.city_name.as_ref().err(),
            self.hospital_name.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

fn read_text(field: &Field<String>) -> Result<&str, ClaimError> {
    field.as_deref().map_err(|e| e.clone().into())
}

fn read_copy<T: Copy>(field: &Field<T>) -> Result<T, ClaimError> {
    field.as_ref().copied().map_err(|e| e.clone().into())
}

/// Builder for claim records
///
/// Every field starts out as a missing column; ingestion and tests set the
/// fields they have.
#[derive(Debug, Clone)]
pub struct ClaimRecordBuilder {
    record: ClaimRecord,
}

impl ClaimRecordBuilder {
    /// Creates a builder whose fields are all unset
    pub fn new(row: usize) -> Self {
        let missing = |column| FieldError {
            column,
            row,
            value: String::new(),
            kind: FieldErrorKind::MissingColumn,
        };
        Self {
            record: ClaimRecord {
                row,
                claim_no: None,
                claim_type: Err(missing(Column::ClaimType)),
                relation: Err(missing(Column::Relation)),
                age: Err(missing(Column::Age)),
                claimed_amount: Err(missing(Column::ClaimedAmount)),
                incurred_amount: Err(missing(Column::IncurredAmount)),
                admission_date: Err(missing(Column::DateOfAdmission)),
                discharge_date: Err(missing(Column::DateOfDischarge)),
                city_name: Err(missing(Column::CityName)),
                hospital_name: Err(missing(Column::HospitalName)),
            },
        }
    }

    pub fn claim_no(mut self, claim_no: Option<ClaimNo>) -> Self {
        self.record.claim_no = claim_no;
        self
    }

    pub fn claim_type(mut self, claim_type: impl Into<String>) -> Self {
        self.record.claim_type = Ok(claim_type.into());
        self
    }

    pub fn relation(mut self, relation: impl Into<String>) -> Self {
        self.record.relation = Ok(relation.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.record.age = Ok(age);
        self
    }

    pub fn claimed_amount(mut self, amount: Decimal) -> Self {
        self.record.claimed_amount = Ok(amount);
        self
    }

    pub fn incurred_amount(mut self, amount: Decimal) -> Self {
        self.record.incurred_amount = Ok(amount);
        self
    }

    pub fn admission_date(mut self, date: NaiveDate) -> Self {
        self.record.admission_date = Ok(date);
        self
    }

    pub fn discharge_date(mut self, date: NaiveDate) -> Self {
        self.record.discharge_date = Ok(date);
        self
    }

    pub fn city_name(mut self, city: impl Into<String>) -> Self {
        self.record.city_name = Ok(city.into());
        self
    }

    pub fn hospital_name(mut self, hospital: impl Into<String>) -> Self {
        self.record.hospital_name = Ok(hospital.into());
        self
    }

    /// Marks a field as failed to load
    pub fn field_error(mut self, error: FieldError) -> Self {
        let r = &mut self.record;
        match error.column {
            Column::ClaimNo => r.claim_no = None,
            Column::ClaimType => r.claim_type = Err(error),
            Column::Relation => r.relation = Err(error),
            Column::Age => r.age = Err(error),
            Column::ClaimedAmount => r.claimed_amount = Err(error),
            Column::IncurredAmount => r.incurred_amount = Err(error),
            Column::DateOfAdmission => r.admission_date = Err(error),
            Column::DateOfDischarge => r.discharge_date = Err(error),
            Column::CityName => r.city_name = Err(error),
            Column::HospitalName => r.hospital_name = Err(error),
        }
        self
    }

    pub fn build(self) -> ClaimRecord {
        self.record
    }
}
