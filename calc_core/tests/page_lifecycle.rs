//! End-to-end page lifecycle: skeleton, render, bind, and input events.

use calc_core::calculations::transfer::RiskLevel;
use calc_core::calculations::{CalculationResult, CalculatorKind};
use calc_core::render::render_timeline;
use calc_core::{initialize_page, skeleton, Page, PageConfig};

fn zeroed_page() -> Page {
    Page::load(&PageConfig::empty())
}

#[test]
fn budget_worked_example() {
    let mut page = zeroed_page();
    for (field, value) in [
        ("base", "50"),
        ("tickets", "10"),
        ("media", "5"),
        ("boosters", "3"),
        ("units", "2"),
        ("debt", "4"),
        ("staffing", "6"),
    ] {
        page.set_field(CalculatorKind::Budget, field, value).unwrap();
    }
    assert_eq!(
        page.output_text(CalculatorKind::Budget).as_deref(),
        Some("Estimated Budget: $60.0M")
    );
}

#[test]
fn transfer_worked_example() {
    let mut page = zeroed_page();
    let mut last = None;
    for (field, value) in [
        ("minutes", "80"),
        ("nil", "50"),
        ("trust", "40"),
        ("style", "30"),
        ("losing", "20"),
        ("academic", "60"),
        ("peer", "10"),
    ] {
        last = Some(page.set_field(CalculatorKind::Transfer, field, value).unwrap());
    }

    match last {
        Some(CalculationResult::Transfer(result)) => {
            assert!((result.score - 51.5).abs() < 1e-9);
            assert_eq!(result.risk, RiskLevel::High);
        }
        other => panic!("expected transfer result, got {:?}", other),
    }
    assert_eq!(
        page.output_text(CalculatorKind::Transfer).as_deref(),
        Some("Pressure Score: 51.5 / 100 (High Risk)")
    );
}

#[test]
fn non_numeric_budget_text_counts_as_zero() {
    let mut page = zeroed_page();
    page.set_field(CalculatorKind::Budget, "base", "20").unwrap();
    page.set_field(CalculatorKind::Budget, "tickets", "twelve").unwrap();
    page.set_field(CalculatorKind::Budget, "media", "").unwrap();
    assert_eq!(
        page.output_text(CalculatorKind::Budget).as_deref(),
        Some("Estimated Budget: $20.0M")
    );
}

#[test]
fn second_render_doubles_timeline() {
    let mut doc = skeleton(&PageConfig::default());
    render_timeline(&mut doc).unwrap();
    let page = initialize_page(doc);

    let doc = page.document();
    let timeline = doc.query_selector(".timeline").unwrap();
    let items = doc.children(timeline);
    assert_eq!(items.len(), 22);

    let numbers: Vec<String> = items
        .iter()
        .map(|id| doc.text_content(doc.query_selector_within(*id, ".num").unwrap()))
        .collect();
    assert_eq!(numbers[0], "1");
    assert_eq!(numbers[10], "11");
    assert_eq!(numbers[11], "1");
}

#[test]
fn config_seeds_first_output() {
    let config = PageConfig::from_json(r#"{ "budget": { "base": 12.5, "debt": 2.0 } }"#).unwrap();
    let page = Page::load(&config);
    assert_eq!(
        page.output_text(CalculatorKind::Budget).as_deref(),
        Some("Estimated Budget: $10.5M")
    );
}
