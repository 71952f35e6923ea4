use crate::models::{DashboardOptions, OptionDefaults, SalaryRecord};
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the historical dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset contains no salary records")]
    Empty,

    #[error("Invalid salary at row {row}: {value}")]
    InvalidSalary { row: usize, value: f64 },
}

/// Immutable historical salary dataset
///
/// Loaded once at start-up and shared read-only between workers.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<SalaryRecord>,
    min_salary: f64,
    max_salary: f64,
}

impl Dataset {
    /// Load the dataset from a CSV file with a header row
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path.as_ref())?;
        let dataset = Self::from_reader(file)?;

        tracing::info!(
            "Loaded {} salary records from {}",
            dataset.len(),
            path.as_ref().display()
        );

        Ok(dataset)
    }

    /// Parse CSV records from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (row, result) in csv_reader.deserialize::<SalaryRecord>().enumerate() {
            let record = result?;
            if !record.salary_in_usd.is_finite() {
                return Err(DatasetError::InvalidSalary {
                    row: row + 1,
                    value: record.salary_in_usd,
                });
            }
            records.push(record);
        }

        Self::from_records(records)
    }

    /// Build a dataset from already parsed records
    pub fn from_records(records: Vec<SalaryRecord>) -> Result<Self, DatasetError> {
        let mut salaries = records.iter().map(|r| r.salary_in_usd);
        let first = salaries.next().ok_or(DatasetError::Empty)?;
        let (min_salary, max_salary) =
            salaries.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s)));

        Ok(Self {
            records,
            min_salary,
            max_salary,
        })
    }

    pub fn records(&self) -> &[SalaryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed `(min, max)` salary in USD
    pub fn salary_bounds(&self) -> (f64, f64) {
        (self.min_salary, self.max_salary)
    }

    /// Distinct dropdown values, sorted
    pub fn options(&self) -> DashboardOptions {
        DashboardOptions {
            job_titles: self.distinct(|r| &r.job_title),
            experience_levels: self.distinct(|r| &r.experience_level),
            employee_countries: self.distinct(|r| &r.employee_country),
            company_countries: self.distinct(|r| &r.company_country),
            defaults: OptionDefaults::default(),
        }
    }

    fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&SalaryRecord) -> &String,
    {
        self.records
            .iter()
            .map(|r| field(r).as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
