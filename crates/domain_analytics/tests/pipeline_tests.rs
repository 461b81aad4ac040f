//! Comprehensive tests for domain_analytics

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::money::format_grouped;
use domain_analytics::{Recipe, ReportError, ReportPipeline, ReportTable, OTHERS_LABEL};
use domain_claims::{ClaimError, ClaimsDataset, Column, IngestOptions};
use test_utils::{
    assert_averages_reconcile, assert_percentages_sum_to_100, assert_total_row, dataset_of,
    CsvFixtures, DatasetFixtures, TestClaimBuilder,
};

fn run(dataset: &ClaimsDataset, recipe: Recipe) -> ReportTable {
    ReportPipeline::default()
        .run(dataset, recipe)
        .unwrap_or_else(|e| panic!("{recipe} should succeed: {e}"))
}

fn labels(table: &ReportTable) -> Vec<&str> {
    table.rows().iter().map(|r| r.bucket_label.as_str()).collect()
}

fn load(csv: &str) -> ClaimsDataset {
    ClaimsDataset::from_reader(csv.as_bytes(), IngestOptions::default()).unwrap()
}

// ============================================================================
// Claim Mode Tests
// ============================================================================

mod claim_mode_tests {
    use super::*;

    #[test]
    fn test_claim_mode_worked_example() {
        let table = run(&DatasetFixtures::claim_mode_example(), Recipe::ClaimMode);

        assert_eq!(labels(&table), vec!["Cashless", "Reimbursement"]);

        let cashless = table.row("Cashless").unwrap();
        assert_eq!(cashless.total_amount, dec!(3000));
        assert_eq!(cashless.claim_count, 2);
        assert_eq!(cashless.avg_claim_size, dec!(1500));
        assert_eq!(cashless.pct_of_total_amount.value().round_dp(1), dec!(85.7));

        let reimbursement = table.row("Reimbursement").unwrap();
        assert_eq!(reimbursement.total_amount, dec!(500));
        assert_eq!(reimbursement.claim_count, 1);
        assert_eq!(reimbursement.avg_claim_size, dec!(500));
        assert_eq!(reimbursement.pct_of_total_amount.value().round_dp(1), dec!(14.3));

        let total = table.total();
        assert_eq!(total.bucket_label, "Total Claims");
        assert_eq!(total.total_amount, dec!(3500));
        assert_eq!(total.claim_count, 3);
        assert_eq!(total.avg_claim_size.round_dp(2), dec!(1166.67));
        assert_eq!(format_grouped(total.avg_claim_size), "1,167");
    }

    #[test]
    fn test_claim_mode_sums_claimed_amount() {
        let table = run(&DatasetFixtures::sample(), Recipe::ClaimMode);

        assert_eq!(table.row("Cashless").unwrap().total_amount, dec!(209200));
        assert_eq!(table.row("Cashless").unwrap().claim_count, 4);
        assert_eq!(table.row("Reimbursement").unwrap().total_amount, dec!(24000));
        assert_total_row(&table, "Total Claims");
        assert_eq!(table.total().claim_count, 6);
    }
}

// ============================================================================
// Relationship Tests
// ============================================================================

mod relationship_tests {
    use super::*;

    #[test]
    fn test_remap_groups_children_and_parents() {
        let dataset = dataset_of(
            ["Son", "Daughter", "Mother"]
                .into_iter()
                .map(|r| TestClaimBuilder::default().with_relation(r)),
        );
        let table = run(&dataset, Recipe::Relationship);

        assert_eq!(labels(&table), vec!["Child", "Parents"]);
        assert_eq!(table.row("Child").unwrap().claim_count, 2);
        assert_eq!(table.row("Parents").unwrap().claim_count, 1);
        assert_total_row(&table, "Total");
    }

    #[test]
    fn test_relationship_rows_follow_group_order() {
        let table = run(&DatasetFixtures::sample(), Recipe::Relationship);

        assert_eq!(labels(&table), vec!["Employee", "Spouse", "Child", "Parents"]);
        assert_eq!(table.row("Child").unwrap().total_amount, dec!(26500));
        assert_eq!(table.row("Parents").unwrap().total_amount, dec!(140000));
    }

    #[test]
    fn test_unmapped_relation_fails_loudly() {
        let dataset = dataset_of([
            TestClaimBuilder::default().with_relation("Self"),
            TestClaimBuilder::default().with_relation("Cousin"),
        ]);

        let result = ReportPipeline::default().run(&dataset, Recipe::Relationship);

        match result {
            Err(ReportError::UnmappedCategory { column, row, value }) => {
                assert_eq!(column, Column::Relation);
                assert_eq!(row, 2);
                assert_eq!(value, "Cousin");
            }
            other => panic!("Expected UnmappedCategory, got {:?}", other),
        }
    }

    #[test]
    fn test_parents_slice_is_highlighted() {
        let chart = run(&DatasetFixtures::sample(), Recipe::Relationship).chart_data();
        assert_eq!(chart.highlight.as_deref(), Some("Parents"));
        assert_eq!(chart.labels.len(), 4);
    }
}

// ============================================================================
// Banded Report Tests
// ============================================================================

mod band_tests {
    use super::*;

    #[test]
    fn test_age_bands_count_claim_numbers() {
        let table = run(&DatasetFixtures::sample(), Recipe::AgeBand);

        assert_eq!(labels(&table), vec!["0-18", "26-35", "66-70", "71-75"]);
        let children = table.row("0-18").unwrap();
        assert_eq!(children.total_amount, dec!(26500));
        assert_eq!(children.claim_count, 1);
        assert_total_row(&table, "Grand Total");
        assert_eq!(table.total().claim_count, 5);
    }

    #[test]
    fn test_amount_bands() {
        let table = run(&DatasetFixtures::sample(), Recipe::AmountBand);

        assert_eq!(labels(&table), vec!["0", "1-25000", "50001-75000", "100001-150000"]);
        assert_eq!(table.row("0").unwrap().claim_count, 1);
        assert_eq!(table.row("1-25000").unwrap().total_amount, dec!(27500));
    }

    #[test]
    fn test_amount_band_chart_excludes_total() {
        let table = run(&DatasetFixtures::sample(), Recipe::AmountBand);
        let chart = table.chart_data();

        assert_eq!(chart.labels.len(), table.rows().len());
        assert!(!chart.labels.iter().any(|l| l == "Grand Total"));
    }

    #[test]
    fn test_stay_bands_worked_example() {
        let table = run(&DatasetFixtures::stay_example(), Recipe::StayLength);

        assert_eq!(labels(&table), vec!["<1", "1", "2", "4-7", "Above 7"]);
        assert!(table.rows().iter().all(|r| r.claim_count == 1));
    }

    #[test]
    fn test_stay_chart_overlays_average() {
        let chart = run(&DatasetFixtures::stay_example(), Recipe::StayLength).chart_data();
        assert_eq!(chart.averages.map(|a| a.len()), Some(5));
    }

    #[test]
    fn test_negative_stay_fails_only_stay_report() {
        let dataset = dataset_of([
            TestClaimBuilder::default().with_stay_days(2),
            TestClaimBuilder::default().with_stay_days(-3),
        ]);

        let outcomes = ReportPipeline::default().run_all(&dataset);

        for outcome in &outcomes {
            if outcome.recipe == Recipe::StayLength {
                assert!(matches!(
                    outcome.result,
                    Err(ReportError::NegativeDerivedDuration { row: 2, days: -3, .. })
                ));
            } else {
                assert!(outcome.is_ok(), "{} should not fail", outcome.recipe);
            }
        }
    }
}

// ============================================================================
// Top-N Tests
// ============================================================================

mod top_n_tests {
    use super::*;

    #[test]
    fn test_ten_cities_have_no_others() {
        let table = run(&DatasetFixtures::cities(10), Recipe::City);

        assert_eq!(table.rows().len(), 10);
        assert!(table.others().is_none());
        assert_eq!(labels(&table)[0], "City10");
    }

    #[test]
    fn test_tail_beyond_ten_folds_into_others() {
        let table = run(&DatasetFixtures::cities(13), Recipe::City);

        assert_eq!(table.rows().len(), 11);
        assert_eq!(labels(&table)[0], "City13");
        let others = table.others().unwrap();
        assert_eq!(others.total_amount, dec!(6000));
        assert_eq!(others.claim_count, 3);
        assert_eq!(others.avg_claim_size, dec!(2000));
        assert_eq!(table.rows().last().unwrap().bucket_label, OTHERS_LABEL);

        assert_total_row(&table, "Grand Total");
        assert_eq!(table.total().total_amount, Decimal::from(91_000));
        assert_percentages_sum_to_100(&table);
    }

    #[test]
    fn test_top_n_is_configurable() {
        let table = ReportPipeline::new()
            .with_top_n(3)
            .run(&DatasetFixtures::cities(5), Recipe::City)
            .unwrap();

        assert_eq!(labels(&table), vec!["City05", "City04", "City03", OTHERS_LABEL]);
        assert_eq!(table.others().unwrap().total_amount, dec!(3000));
    }

    #[test]
    fn test_city_chart_shows_top_five_without_others() {
        let chart = run(&DatasetFixtures::cities(13), Recipe::City).chart_data();
        assert_eq!(chart.labels, vec!["City13", "City12", "City11", "City10", "City09"]);
    }

    #[test]
    fn test_city_named_others_stays_separate_from_rollup() {
        let dataset = dataset_of(
            (1..=12)
                .map(|i| {
                    TestClaimBuilder::new(i)
                        .with_city(format!("City{i:02}"))
                        .with_incurred_amount(Decimal::from(i as u64 * 1000))
                })
                .chain([TestClaimBuilder::default()
                    .with_city(OTHERS_LABEL)
                    .with_incurred_amount(dec!(99000))]),
        );

        let table = run(&dataset, Recipe::City);

        assert_eq!(table.rows().len(), 11);
        assert_eq!(labels(&table)[0], OTHERS_LABEL);
        assert!(!table.rows()[0].rollup);
        let rollup = table.others().unwrap();
        assert_eq!(rollup.total_amount, dec!(6000));
        assert_eq!(table.rows().iter().filter(|r| r.rollup).count(), 1);

        let chart = table.chart_data();
        assert_eq!(chart.labels, vec![OTHERS_LABEL, "City12", "City11", "City10", "City09"]);
        assert_eq!(chart.amounts[0], dec!(99000));
    }

    #[test]
    fn test_hospital_chart_excludes_others() {
        let dataset = dataset_of((1..=12).map(|i| {
            TestClaimBuilder::new(i)
                .with_hospital(format!("Hospital{i:02}"))
                .with_incurred_amount(Decimal::from(i as u64))
        }));
        let table = run(&dataset, Recipe::Hospital);
        let chart = table.chart_data();

        assert!(table.others().is_some());
        assert_eq!(chart.labels.len(), 10);
        assert!(chart.averages.is_some());
    }

    #[test]
    fn test_hospital_ranked_by_amount() {
        let table = run(&DatasetFixtures::sample(), Recipe::Hospital);
        assert_eq!(labels(&table), vec!["Apex Heart", "City Care", "Sunrise"]);
    }
}

// ============================================================================
// Failure Isolation Tests
// ============================================================================

mod failure_tests {
    use super::*;

    #[test]
    fn test_missing_column_fails_only_reports_reading_it() {
        let dataset = load(&CsvFixtures::export_without_hospital());

        let outcomes = ReportPipeline::default().run_all(&dataset);

        assert_eq!(outcomes.len(), 7);
        for outcome in &outcomes {
            if outcome.recipe == Recipe::Hospital {
                assert!(matches!(
                    outcome.result,
                    Err(ReportError::MalformedInput(ClaimError::MissingColumn(Column::HospitalName)))
                ));
            } else {
                assert!(outcome.is_ok(), "{} should not fail", outcome.recipe);
            }
        }
    }

    #[test]
    fn test_malformed_amount_fails_reports_summing_it() {
        let csv = format!(
            "{}\nC1,Cashless,Self,30,100,abc,2024-01-01,2024-01-02,Pune,H1",
            test_utils::CLAIMS_HEADER
        );
        let dataset = load(&csv);

        let claim_mode = ReportPipeline::default().run(&dataset, Recipe::ClaimMode);
        assert!(claim_mode.is_ok());

        let city = ReportPipeline::default().run(&dataset, Recipe::City);
        match city {
            Err(ReportError::MalformedInput(ClaimError::MalformedValue { column, row, value, .. })) => {
                assert_eq!(column, Column::IncurredAmount);
                assert_eq!(row, 1);
                assert_eq!(value, "abc");
            }
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_date_fails_only_stay_report() {
        let csv = format!(
            "{}\nC1,Cashless,Self,30,100,100,not-a-date,2024-01-02,Pune,H1",
            test_utils::CLAIMS_HEADER
        );
        let outcomes = ReportPipeline::default().run_all(&load(&csv));

        let failed: Vec<Recipe> = outcomes
            .iter()
            .filter(|o| !o.is_ok())
            .map(|o| o.recipe)
            .collect();
        assert_eq!(failed, vec![Recipe::StayLength]);
    }

    #[test]
    fn test_amount_overflow_fails_only_reports_summing_it() {
        let csv = format!(
            "{0}\nC1,Cashless,Self,30,5e28,100,2024-01-01,2024-01-02,Pune,H1\n\
             C2,Cashless,Self,40,5e28,200,2024-01-01,2024-01-02,Pune,H1",
            test_utils::CLAIMS_HEADER
        );
        let outcomes = ReportPipeline::default().run_all(&load(&csv));

        assert_eq!(outcomes.len(), 7);
        for outcome in &outcomes {
            if outcome.recipe == Recipe::ClaimMode {
                assert!(matches!(
                    outcome.result,
                    Err(ReportError::AmountOverflow { column: Column::ClaimedAmount, row: 2 })
                ));
            } else {
                assert!(outcome.is_ok(), "{} should not fail", outcome.recipe);
            }
        }
    }

    #[test]
    fn test_amount_near_decimal_max_still_reports() {
        let csv = format!(
            "{}\nC1,Cashless,Self,30,1e27,1e27,2024-01-01,2024-01-02,Pune,H1",
            test_utils::CLAIMS_HEADER
        );
        let dataset = load(&csv);

        for recipe in Recipe::ALL {
            let table = run(&dataset, recipe);
            assert_eq!(table.rows()[0].pct_of_total_amount.rounded(), dec!(100));
        }
    }

    #[test]
    fn test_negative_age_is_malformed() {
        let csv = format!(
            "{}\nC1,Cashless,Self,-4,100,100,2024-01-01,2024-01-02,Pune,H1",
            test_utils::CLAIMS_HEADER
        );
        let result = ReportPipeline::default().run(&load(&csv), Recipe::AgeBand);
        assert!(matches!(
            result,
            Err(ReportError::MalformedInput(ClaimError::MalformedValue { column: Column::Age, .. }))
        ));
    }
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

mod degenerate_tests {
    use super::*;

    #[test]
    fn test_empty_dataset_yields_total_only() {
        let dataset = load(&CsvFixtures::empty_export());

        for outcome in ReportPipeline::default().run_all(&dataset) {
            let table = outcome.result.unwrap();
            assert!(table.rows().is_empty());
            assert_eq!(table.total().claim_count, 0);
            assert_eq!(table.total().avg_claim_size, Decimal::ZERO);
        }
    }

    #[test]
    fn test_zero_amounts_give_zero_amount_shares() {
        let dataset = dataset_of([
            TestClaimBuilder::default().with_city("Pune").with_amount(Decimal::ZERO),
            TestClaimBuilder::default().with_city("Goa").with_amount(Decimal::ZERO),
        ]);
        let table = run(&dataset, Recipe::City);

        assert!(table.rows().iter().all(|r| r.pct_of_total_amount.value().is_zero()));
        assert!(table.rows().iter().all(|r| r.avg_claim_size.is_zero()));
        assert_eq!(table.total().claim_count, 2);
    }

    #[test]
    fn test_blank_claim_numbers_leave_no_claims_to_count() {
        let dataset = dataset_of([TestClaimBuilder::default().without_claim_no()]);

        let city = run(&dataset, Recipe::City);
        assert!(city.rows().is_empty());

        let claim_mode = run(&dataset, Recipe::ClaimMode);
        assert_eq!(claim_mode.total().claim_count, 1);
    }
}

// ============================================================================
// Determinism Tests
// ============================================================================

mod determinism_tests {
    use super::*;

    #[test]
    fn test_reruns_serialize_identically() {
        let dataset = DatasetFixtures::sample();
        let pipeline = ReportPipeline::default();

        for recipe in Recipe::ALL {
            let first = serde_json::to_string(&pipeline.run(&dataset, recipe).unwrap()).unwrap();
            let second = serde_json::to_string(&pipeline.run(&dataset, recipe).unwrap()).unwrap();
            assert_eq!(first, second, "{recipe} is not deterministic");
        }
    }

    #[test]
    fn test_every_report_satisfies_invariants() {
        let dataset = DatasetFixtures::sample();

        for outcome in ReportPipeline::default().run_all(&dataset) {
            let label = outcome.recipe.definition().total_label;
            let table = outcome.result.unwrap();
            assert_percentages_sum_to_100(&table);
            assert_averages_reconcile(&table);
            assert_total_row(&table, label);
        }
    }
}
