// Unit tests for Salary Dash

use salary_dash::core::{
    aggregate::{build_charts, median},
    color::{scale_index, ColorScale},
    ranges::{build_ranges, bucket_for, format_thousands, RangeError, SalaryRange},
};
use salary_dash::models::{JobAttributes, PredictionResult, SalaryRecord};
use salary_dash::services::{CacheKey, Dataset, PredictionCache};

fn record(job: &str, region: &str, country: &str, salary: f64) -> SalaryRecord {
    SalaryRecord {
        job_title: job.to_string(),
        experience_level: "Senior".to_string(),
        employee_residence: region.to_string(),
        employee_country: country.to_string(),
        company_country: country.to_string(),
        salary_in_usd: salary,
    }
}

#[test]
fn test_bucket_count_matches_request() {
    for count in [1, 2, 7, 25, 100] {
        let table = build_ranges(12_345.0, 987_654.0, count).unwrap();
        assert_eq!(table.len(), count);
    }
}

#[test]
fn test_ranges_cover_domain_without_gaps() {
    let table = build_ranges(20_000.0, 450_000.0, 13).unwrap();
    let ranges = table.ranges();

    assert_eq!(ranges.first().unwrap().lower, 20_000);
    assert_eq!(ranges.last().unwrap().upper, 450_000);

    for pair in ranges.windows(2) {
        assert_eq!(pair[0].upper, pair[1].lower);
        assert!(pair[0].lower < pair[0].upper);
    }
}

#[test]
fn test_every_value_in_domain_has_exactly_one_bucket() {
    let table = build_ranges(30_000.0, 280_000.0, 25).unwrap();

    let mut value = 30_000.0;
    while value < 280_000.0 {
        let matching = table.ranges().iter().filter(|r| r.contains(value)).count();
        assert_eq!(matching, 1, "value {} matched {} buckets", value, matching);
        value += 777.7;
    }
}

#[test]
fn test_concrete_bucket_scenario() {
    let table = build_ranges(30_000.0, 280_000.0, 25).unwrap();

    let bucket = bucket_for(105_000.0, table.ranges()).unwrap();
    assert_eq!(bucket, SalaryRange { lower: 100_000, upper: 110_000 });
    assert_eq!(bucket.to_string(), "100,000 - 110,000");
}

#[test]
fn test_values_outside_domain_have_no_bucket() {
    let table = build_ranges(30_000.0, 280_000.0, 25).unwrap();

    assert_eq!(table.bucket_for(29_999.0), None);
    // Top edge is exclusive
    assert_eq!(table.bucket_for(280_000.0), None);
    assert_eq!(table.bucket_for(1_000_000.0), None);
    assert_eq!(table.bucket_for(-1.0), None);
}

#[test]
fn test_fractional_bounds_are_floored() {
    let table = build_ranges(1_000.9, 2_000.9, 4).unwrap();

    assert_eq!(table.lower_bound(), Some(1_000));
    assert_eq!(table.upper_bound(), Some(2_000));
    assert_eq!(table.ranges()[1], SalaryRange { lower: 1_250, upper: 1_500 });
}

#[test]
fn test_degenerate_domains_rejected() {
    assert_eq!(build_ranges(1.0, 2.0, 0), Err(RangeError::InvalidBucketCount(0)));
    assert!(matches!(build_ranges(5.0, 5.0, 3), Err(RangeError::EmptyDomain { .. })));
    assert!(matches!(
        build_ranges(0.0, f64::INFINITY, 3),
        Err(RangeError::NonFinite { .. })
    ));
}

#[test]
fn test_large_salary_formatting() {
    assert_eq!(format_thousands(12_500_000), "12,500,000");
    let range = SalaryRange { lower: 950_000, upper: 1_050_000 };
    assert_eq!(range.to_string(), "950,000 - 1,050,000");
}

#[test]
fn test_color_scale_positions() {
    let scale = ColorScale::viridis();

    assert_eq!(scale_index(50.0, 0.0, 100.0, scale.len()), 4);
    assert_eq!(scale.color_for(100.0, 0.0, 100.0), "#fde725");
    assert_eq!(scale.color_for(42.0, 42.0, 42.0), "#440154");
}

#[test]
fn test_median_unsorted_input() {
    assert_eq!(median(&[90.0, 10.0, 50.0, 30.0]), Some(40.0));
    assert_eq!(median(&[7.0]), Some(7.0));
}

#[test]
fn test_charts_group_by_country_and_region() {
    let records = vec![
        record("Data Engineer", "Europe", "Spain", 40_000.0),
        record("Data Engineer", "Europe", "France", 60_000.0),
        record("Data Engineer", "North America", "United States", 150_000.0),
        record("Data Engineer", "North America", "United States", 130_000.0),
        record("Data Analyst", "Europe", "Spain", 30_000.0),
    ];

    let charts = build_charts(&records, "Data Engineer");

    let countries: Vec<&str> = charts.map.points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(countries, vec!["France", "Spain", "United States"]);
    assert_eq!(charts.map.points[2].median_salary_usd, 140_000.0);

    assert_eq!(charts.bar.points.len(), 2);
    assert_eq!(charts.bar.points[0].label, "Europe");
    assert_eq!(charts.bar.points[0].median_salary_usd, 50_000.0);
    assert_eq!(charts.bar.points[0].color, "#440154");
    assert_eq!(charts.bar.points[1].color, "#fde725");
}

#[test]
fn test_dataset_drives_range_table() {
    let csv = "\
job_title,experience_level,employee_residence,employee_country,company_country,salary_in_usd
Data Scientist,Senior,Europe,Spain,Spain,30000
Data Scientist,Senior,North America,Canada,Canada,280000
Data Scientist,Mid_level,Europe,Spain,Spain,105000
";
    let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
    let (min, max) = dataset.salary_bounds();
    let table = build_ranges(min, max, 25).unwrap();

    assert_eq!(
        table.bucket_for(105_000.0).map(|r| r.to_string()),
        Some("100,000 - 110,000".to_string())
    );
}

#[test]
fn test_prediction_cache_distinguishes_casing() {
    let cache = PredictionCache::new(10, 60);
    let attributes = |job: &str| JobAttributes {
        job_title: job.to_string(),
        experience_level: "Senior".to_string(),
        employee_country: "Spain".to_string(),
        company_country: "Spain".to_string(),
    };
    let result = PredictionResult {
        predicted_salary: 64_000.0,
        predicted_range: None,
    };

    tokio_test::block_on(async {
        cache
            .insert(CacheKey::prediction(&attributes("Data Scientist")), result.clone())
            .await;

        let exact = cache.get(&CacheKey::prediction(&attributes("Data Scientist"))).await;
        assert_eq!(exact, Some(result));

        let other_casing = cache.get(&CacheKey::prediction(&attributes("data scientist"))).await;
        assert_eq!(other_casing, None);
    });
}
