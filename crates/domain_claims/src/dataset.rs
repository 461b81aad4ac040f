//! Claims dataset and CSV ingestion

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, instrument, warn};

use core_kernel::money::{parse_non_negative_amount, parse_whole_number};
use core_kernel::temporal::parse_calendar_date;
use core_kernel::{ClaimNo, DateOrder};
use crate::claim::{ClaimRecord, ClaimRecordBuilder, FieldError, FieldErrorKind};
use crate::column::Column;
use crate::error::ClaimError;

/// Options controlling how cells are interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOptions {
    /// How to read numeric dates such as `04/03/2024`
    pub date_order: DateOrder,
}

/// An immutable, fully loaded claims dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimsDataset {
    records: Vec<ClaimRecord>,
    missing_columns: Vec<Column>,
}

impl ClaimsDataset {
    /// Creates a dataset from already-built records
    pub fn new(records: Vec<ClaimRecord>) -> Self {
        Self {
            records,
            missing_columns: Vec::new(),
        }
    }

    /// Reads a dataset from a CSV file
    pub fn from_path(path: impl AsRef<Path>, options: IngestOptions) -> Result<Self, ClaimError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file, options)
    }

    /// Reads a dataset from CSV text with a header row
    ///
    /// Unknown columns are ignored. Missing required columns and unparseable
    /// cells are recorded on each record rather than failing the load.
    #[instrument(skip(reader))]
    pub fn from_reader<R: Read>(reader: R, options: IngestOptions) -> Result<Self, ClaimError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let positions: HashMap<Column, usize> = rdr
            .headers()?
            .iter()
            .enumerate()
            .filter_map(|(idx, header)| Column::from_header(header).map(|c| (c, idx)))
            .collect();

        let missing_columns: Vec<Column> = Column::ALL
            .into_iter()
            .filter(|c| !positions.contains_key(c))
            .collect();
        if !missing_columns.is_empty() {
            warn!(?missing_columns, "Dataset is missing required columns");
        }

        let mut records = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let row = result?;
            records.push(parse_row(idx + 1, &row, &positions, options));
        }

        let malformed = records.iter().map(|r| r.field_errors().len()).sum::<usize>();
        if malformed > 0 {
            warn!(malformed, "Dataset contains unreadable cells");
        }
        debug!(rows = records.len(), "Claims dataset loaded");

        Ok(Self {
            records,
            missing_columns,
        })
    }

    /// Returns all records in file order
    pub fn records(&self) -> &[ClaimRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Required columns that were absent from the source file
    pub fn missing_columns(&self) -> &[Column] {
        &self.missing_columns
    }

    /// Fails with the first of `columns` that the source file lacked
    pub fn require_columns(&self, columns: &[Column]) -> Result<(), ClaimError> {
        match columns.iter().find(|c| self.missing_columns.contains(c)) {
            Some(column) => Err(ClaimError::MissingColumn(*column)),
            None => Ok(()),
        }
    }
}

fn parse_row(
    row: usize,
    record: &StringRecord,
    positions: &HashMap<Column, usize>,
    options: IngestOptions,
) -> ClaimRecord {
    let cell = |column: Column| read_cell(record, positions, row, column);

    let unparseable = |column: Column, value: &str, reason: String| FieldError {
        column,
        row,
        value: value.to_string(),
        kind: FieldErrorKind::Unparseable(reason),
    };

    let mut builder = ClaimRecordBuilder::new(row)
        .claim_no(cell(Column::ClaimNo).ok().and_then(ClaimNo::parse));

    builder = match cell(Column::ClaimType) {
        Ok(v) => builder.claim_type(v),
        Err(e) => builder.field_error(e),
    };
    builder = match cell(Column::Relation) {
        Ok(v) => builder.relation(v),
        Err(e) => builder.field_error(e),
    };
    builder = match cell(Column::CityName) {
        Ok(v) => builder.city_name(v),
        Err(e) => builder.field_error(e),
    };
    builder = match cell(Column::HospitalName) {
        Ok(v) => builder.hospital_name(v),
        Err(e) => builder.field_error(e),
    };

    builder = match cell(Column::Age) {
        Ok(v) => match parse_whole_number(v) {
            Ok(age) => builder.age(age),
            Err(e) => builder.field_error(unparseable(Column::Age, v, e.to_string())),
        },
        Err(e) => builder.field_error(e),
    };

    for column in [Column::ClaimedAmount, Column::IncurredAmount] {
        builder = match cell(column) {
            Ok(v) => match (parse_non_negative_amount(v), column) {
                (Ok(amount), Column::ClaimedAmount) => builder.claimed_amount(amount),
                (Ok(amount), _) => builder.incurred_amount(amount),
                (Err(e), _) => builder.field_error(unparseable(column, v, e.to_string())),
            },
            Err(e) => builder.field_error(e),
        };
    }

    for column in [Column::DateOfAdmission, Column::DateOfDischarge] {
        builder = match cell(column) {
            Ok(v) => match (parse_calendar_date(v, options.date_order), column) {
                (Ok(date), Column::DateOfAdmission) => builder.admission_date(date),
                (Ok(date), _) => builder.discharge_date(date),
                (Err(e), _) => builder.field_error(unparseable(column, v, e.to_string())),
            },
            Err(e) => builder.field_error(e),
        };
    }

    builder.build()
}

fn read_cell<'a>(
    record: &'a StringRecord,
    positions: &HashMap<Column, usize>,
    row: usize,
    column: Column,
) -> Result<&'a str, FieldError> {
    let failure = |kind| FieldError {
        column,
        row,
        value: String::new(),
        kind,
    };

    let idx = positions
        .get(&column)
        .ok_or_else(|| failure(FieldErrorKind::MissingColumn))?;
    match record.get(*idx).unwrap_or("") {
        "" => Err(failure(FieldErrorKind::Blank)),
        value => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const HEADER: &str = "Claim_No,Claim_Type,Relation,Age,Claimed_Amount,Incurred_Amount,\
Date_of_Admission,Date_of_Discharge,City_Name,Hospital_Name\n";

    #[test]
    fn test_reads_well_formed_row() {
        let csv = format!(
            "{HEADER}C1,Cashless,Self,34,\"1,200\",1000.50,2024-01-01,2024-01-04,Pune,City Care\n"
        );
        let dataset = ClaimsDataset::from_reader(csv.as_bytes(), IngestOptions::default()).unwrap();

        assert_eq!(dataset.len(), 1);
        assert!(dataset.missing_columns().is_empty());
        let record = &dataset.records()[0];
        assert_eq!(record.claim_no().unwrap().as_str(), "C1");
        assert_eq!(record.claimed_amount().unwrap(), dec!(1200));
        assert_eq!(record.incurred_amount().unwrap(), dec!(1000.50));
        assert_eq!(record.stay_days().unwrap(), 3);
        assert_eq!(record.hospital_name().unwrap(), "City Care");
    }

    #[test]
    fn test_bad_cell_is_kept_on_record() {
        let csv = format!("{HEADER}C1,Cashless,Self,abc,100,100,2024-01-01,2024-01-02,Pune,H1\n");
        let dataset = ClaimsDataset::from_reader(csv.as_bytes(), IngestOptions::default()).unwrap();
        let record = &dataset.records()[0];

        assert!(matches!(
            record.age(),
            Err(ClaimError::MalformedValue { column: Column::Age, row: 1, .. })
        ));
        assert_eq!(record.incurred_amount().unwrap(), dec!(100));
    }

    #[test]
    fn test_missing_column_is_recorded() {
        let csv = "Claim_No,Claim_Type,Claimed_Amount\nC1,Cashless,100\n";
        let dataset = ClaimsDataset::from_reader(csv.as_bytes(), IngestOptions::default()).unwrap();

        assert!(dataset.missing_columns().contains(&Column::CityName));
        assert!(dataset.require_columns(&[Column::ClaimType, Column::ClaimedAmount]).is_ok());
        assert!(matches!(
            dataset.require_columns(&[Column::CityName]),
            Err(ClaimError::MissingColumn(Column::CityName))
        ));
    }

    #[test]
    fn test_blank_claim_no_is_none() {
        let csv = format!("{HEADER},Cashless,Self,34,100,100,2024-01-01,2024-01-02,Pune,H1\n");
        let dataset = ClaimsDataset::from_reader(csv.as_bytes(), IngestOptions::default()).unwrap();
        assert!(dataset.records()[0].claim_no().is_none());
    }
}
