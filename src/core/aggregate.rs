use crate::core::color::ColorScale;
use crate::models::{ChartPoint, ChartSeries, GroupKey, GroupMedian, SalaryCharts, SalaryRecord};
use std::collections::BTreeMap;

/// Median of a set of values
///
/// Even-length input yields the mean of the two middle values.
/// Returns `None` for empty input.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Median salary per group for records with the given job title, sorted by group
pub fn median_by(records: &[SalaryRecord], job_title: &str, key: GroupKey) -> Vec<GroupMedian> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();

    for record in records.iter().filter(|r| r.job_title == job_title) {
        groups
            .entry(key.value(record))
            .or_default()
            .push(record.salary_in_usd);
    }

    groups
        .into_iter()
        .filter_map(|(group, salaries)| {
            median(&salaries).map(|m| GroupMedian {
                group: group.to_string(),
                median_salary_usd: m,
            })
        })
        .collect()
}

/// Color each group median against the series' own min/max
pub fn style_series(title: String, medians: Vec<GroupMedian>, scale: &ColorScale) -> ChartSeries {
    let min = medians
        .iter()
        .map(|m| m.median_salary_usd)
        .fold(f64::INFINITY, f64::min);
    let max = medians
        .iter()
        .map(|m| m.median_salary_usd)
        .fold(f64::NEG_INFINITY, f64::max);

    let points = medians
        .into_iter()
        .map(|m| ChartPoint {
            color: scale.color_for(m.median_salary_usd, min, max).to_string(),
            label: m.group,
            median_salary_usd: m.median_salary_usd,
        })
        .collect();

    ChartSeries { title, points }
}

/// Build the map (by employee country) and bar (by residence region) charts
pub fn build_charts(records: &[SalaryRecord], job_title: &str) -> SalaryCharts {
    let scale = ColorScale::viridis();

    let by_country = median_by(records, job_title, GroupKey::EmployeeCountry);
    let by_region = median_by(records, job_title, GroupKey::EmployeeResidence);

    tracing::debug!(
        "Charts for {}: {} countries, {} regions",
        job_title,
        by_country.len(),
        by_region.len()
    );

    SalaryCharts {
        job_title: job_title.to_string(),
        map: style_series(
            format!("Median salary by country - Position: {}", job_title),
            by_country,
            &scale,
        ),
        bar: style_series(
            format!("Median salary by region - Position: {}", job_title),
            by_region,
            &scale,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(job: &str, region: &str, country: &str, salary: f64) -> SalaryRecord {
        SalaryRecord {
            job_title: job.to_string(),
            experience_level: "Mid_level".to_string(),
            employee_residence: region.to_string(),
            employee_country: country.to_string(),
            company_country: country.to_string(),
            salary_in_usd: salary,
        }
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_median_by_filters_job_title() {
        let records = vec![
            record("Data Scientist", "Europe", "Spain", 50_000.0),
            record("Data Scientist", "Europe", "Spain", 70_000.0),
            record("Data Scientist", "North America", "Canada", 90_000.0),
            record("Software Engineer", "Europe", "Spain", 1_000_000.0),
        ];

        let medians = median_by(&records, "Data Scientist", GroupKey::EmployeeCountry);

        assert_eq!(
            medians,
            vec![
                GroupMedian { group: "Canada".to_string(), median_salary_usd: 90_000.0 },
                GroupMedian { group: "Spain".to_string(), median_salary_usd: 60_000.0 },
            ]
        );
    }

    #[test]
    fn test_build_charts_colors_extremes() {
        let records = vec![
            record("ML Engineer", "Asia", "India", 30_000.0),
            record("ML Engineer", "Europe", "Germany", 80_000.0),
            record("ML Engineer", "North America", "United States", 150_000.0),
        ];

        let charts = build_charts(&records, "ML Engineer");

        assert_eq!(charts.bar.points.len(), 3);
        assert_eq!(charts.bar.points[0].label, "Asia");
        assert_eq!(charts.bar.points[0].color, "#440154");
        assert_eq!(charts.bar.points[2].color, "#fde725");
        assert!(charts.map.title.contains("ML Engineer"));
    }

    #[test]
    fn test_build_charts_unknown_job() {
        let records = vec![record("ML Engineer", "Asia", "India", 30_000.0)];
        let charts = build_charts(&records, "Astronaut");

        assert!(charts.map.points.is_empty());
        assert!(charts.bar.points.is_empty());
    }
}
