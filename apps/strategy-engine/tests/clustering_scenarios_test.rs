//! End-to-end scenarios: broker records in, named and mapped clusters out.

use std::sync::Arc;

use serde_json::{Value, json};
use strategy_engine::{
    AnalyzePositionsUseCase, ClassifierChain, ClusterDto, ClusteringOptions, StrategyIdMapper,
};

const EXP_A: &str = "2025-01-17";
const EXP_B: &str = "2025-02-21";

fn option(side: &str, qty: i64, strike: i64, exp: &str) -> Value {
    json!({
        "Symbol": format!("XYZ {exp} {strike} {side}"),
        "Type": "Option",
        "Quantity": qty,
        "Strike Price": strike,
        "Call/Put": side,
        "Exp Date": exp,
        "Underlying Last Price": "100.00"
    })
}

fn stock(qty: i64) -> Value {
    json!({"Symbol": "XYZ", "Type": "Stock", "Quantity": qty, "Underlying Last Price": "100.00"})
}

fn analyze(records: Vec<Value>) -> Vec<ClusterDto> {
    let use_case = AnalyzePositionsUseCase::new(
        Arc::new(ClassifierChain::standard()),
        StrategyIdMapper::standard(),
        ClusteringOptions::default(),
    );
    match use_case.execute_json(&Value::Array(records)) {
        Ok(clusters) => clusters,
        Err(e) => panic!("analysis failed: {e}"),
    }
}

fn names(records: Vec<Value>) -> Vec<String> {
    analyze(records).into_iter().map(|c| c.strategy).collect()
}

#[test]
fn test_short_strangle_and_straddle() {
    assert_eq!(
        names(vec![option("Call", -1, 110, EXP_A), option("Put", -1, 90, EXP_A)]),
        vec!["Short Strangle"]
    );
    assert_eq!(
        names(vec![option("Call", -1, 100, EXP_A), option("Put", -1, 100, EXP_A)]),
        vec!["Short Straddle"]
    );
}

#[test]
fn test_iron_condor_and_iron_fly() {
    assert_eq!(
        names(vec![
            option("Call", -1, 110, EXP_A),
            option("Call", 1, 120, EXP_A),
            option("Put", -1, 90, EXP_A),
            option("Put", 1, 80, EXP_A),
        ]),
        vec!["Iron Condor"]
    );
    assert_eq!(
        names(vec![
            option("Call", -1, 100, EXP_A),
            option("Call", 1, 110, EXP_A),
            option("Put", -1, 100, EXP_A),
            option("Put", 1, 90, EXP_A),
        ]),
        vec!["Iron Fly"]
    );
}

#[test]
fn test_covered_call() {
    let clusters = analyze(vec![stock(100), option("Call", -1, 110, EXP_A)]);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].strategy, "Covered Call");
    assert_eq!(clusters[0].strategy_id.as_deref(), Some("covered_call"));
}

#[test]
fn test_jade_lizard() {
    let clusters = analyze(vec![
        option("Put", -1, 90, EXP_A),
        option("Call", -1, 110, EXP_A),
        option("Call", 1, 120, EXP_A),
    ]);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].strategy, "Jade Lizard");
    assert_eq!(clusters[0].strategy_id.as_deref(), Some("jade_lizard"));
}

#[test]
fn test_single_long_call() {
    let clusters = analyze(vec![option("Call", 1, 100, EXP_A)]);
    assert_eq!(clusters[0].strategy, "Long Call");
    assert_eq!(clusters[0].strategy_id.as_deref(), Some("long_call"));
}

#[test]
fn test_calendar_and_diagonal() {
    assert_eq!(
        names(vec![option("Call", -1, 100, EXP_A), option("Call", 1, 100, EXP_B)]),
        vec!["Calendar Spread (Call)"]
    );
    assert_eq!(
        names(vec![option("Call", -1, 105, EXP_A), option("Call", 1, 100, EXP_B)]),
        vec!["Diagonal Spread (Call)"]
    );
}

#[test]
fn test_mixed_book_partitions_every_leg() {
    let records = vec![
        stock(100),
        option("Call", -1, 115, EXP_A),
        option("Put", -1, 90, EXP_A),
        option("Put", 1, 85, EXP_A),
        option("Call", 1, 120, EXP_B),
        option("Call", -1, 130, EXP_B),
        option("Put", 1, 70, EXP_B),
    ];
    let total = records.len();

    let clusters = analyze(records);
    let legs: usize = clusters.iter().map(|c| c.legs.len()).sum();
    assert_eq!(legs, total);
    assert!(clusters.iter().all(|c| c.root == "XYZ"));
}

#[test]
fn test_roots_do_not_mix() {
    let mut abc = option("Put", -1, 90, EXP_A);
    abc["Symbol"] = json!("ABC 250117P90");

    let clusters = analyze(vec![option("Call", -1, 110, EXP_A), abc]);
    let roots: Vec<&str> = clusters.iter().map(|c| c.root.as_str()).collect();
    assert_eq!(roots, vec!["ABC", "XYZ"]);
    assert_eq!(clusters[0].strategy, "Short Put");
    assert_eq!(clusters[1].strategy, "Short Call");
}
