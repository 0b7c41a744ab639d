//! Property-based tests for document totals.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::currency::{round_half_up, Currency};
use crate::document::{
    Document, DocumentKind, LineItem, Surcharge, TaxMode, TaxRate, SURCHARGE_SLOTS,
};

use super::builder::TotalsBuilder;
use super::line::{tax_amount, LineCalculator};

/// Strategy to generate money amounts (0.00 to 100,000.00).
fn money() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate quantities (0.00 to 100.00).
fn quantity() -> impl Strategy<Value = Decimal> {
    (0i64..10_000).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// Strategy to generate tax rates (0.00% to 50.00%).
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..5_000).prop_map(|bps| Decimal::new(bps, 2))
}

/// Strategy to generate discount percentages (0.00 to 100.00).
fn percentage() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000).prop_map(|bps| Decimal::new(bps, 2))
}

/// Strategy to generate line items with an optional single tax slot.
fn line_item() -> impl Strategy<Value = LineItem> {
    (
        quantity(),
        money(),
        percentage(),
        any::<bool>(),
        proptest::option::of(rate()),
    )
        .prop_map(|(quantity, unit_cost, discount, is_amount, tax)| LineItem {
            quantity,
            unit_cost,
            discount,
            is_amount_discount: is_amount,
            tax_rates: tax.map(|r| vec![TaxRate::new("VAT", r)]).unwrap_or_default(),
            line_total: Decimal::ZERO,
        })
}

/// Strategy to generate whole documents.
fn document() -> impl Strategy<Value = Document> {
    (
        proptest::collection::vec(line_item(), 0..6),
        percentage(),
        any::<bool>(),
        proptest::option::of(rate()),
        money(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(lines, discount, is_amount, doc_rate, surcharge, taxable, inclusive)| {
                let mut surcharges = [Surcharge::default(); SURCHARGE_SLOTS];
                surcharges[0] = Surcharge::new(surcharge, taxable);
                Document {
                    id: Uuid::new_v4(),
                    kind: DocumentKind::Invoice,
                    date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
                    line_items: lines,
                    discount,
                    is_amount_discount: is_amount,
                    tax_rates: doc_rate
                        .map(|r| vec![TaxRate::new("Sales", r)])
                        .unwrap_or_default(),
                    surcharges,
                    uses_inclusive_taxes: inclusive,
                    exchange_rate: Decimal::ONE,
                    paid_to_date: None,
                }
            },
        )
}

/// Returns true if a value carries at most `dp` decimal places.
fn scale_at_most(value: Decimal, dp: u32) -> bool {
    let scaled = value * Decimal::from(10u64.pow(dp));
    scaled == scaled.round()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Building the same snapshot twice produces the same result.
    #[test]
    fn prop_build_is_deterministic(doc in document()) {
        let usd = Currency::new("USD", 2);
        let first = TotalsBuilder::build(doc.clone(), &usd).unwrap();
        let second = TotalsBuilder::build(doc, &usd).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Feeding the returned line items back in changes nothing; the
    /// populated `line_total` is an output, never an input.
    #[test]
    fn prop_rebuilding_returned_items_is_stable(doc in document()) {
        let usd = Currency::new("USD", 2);
        let first = TotalsBuilder::build(doc.clone(), &usd).unwrap();
        let rebuilt = Document {
            line_items: first.line_items.clone(),
            ..doc
        };
        let second = TotalsBuilder::build(rebuilt, &usd).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Without payments the balance always equals the total.
    #[test]
    fn prop_balance_defaults_to_total(doc in document()) {
        let usd = Currency::new("USD", 2);
        let result = TotalsBuilder::build(doc, &usd).unwrap();
        prop_assert_eq!(result.balance, result.total);
    }

    /// Every rounded output respects the currency precision.
    #[test]
    fn prop_outputs_carry_currency_scale(doc in document()) {
        let usd = Currency::new("USD", 2);
        let result = TotalsBuilder::build(doc, &usd).unwrap();
        prop_assert!(scale_at_most(result.sub_total, 2));
        prop_assert!(scale_at_most(result.total_taxes, 2));
        prop_assert!(scale_at_most(result.total, 2));
        prop_assert!(scale_at_most(result.balance, 2));
        for entry in result.tax_map.iter() {
            prop_assert!(scale_at_most(entry.amount, 2), "bucket {}", entry.name);
        }
        for item in &result.line_items {
            prop_assert!(scale_at_most(item.line_total, 2));
        }
    }

    /// Every active named rate ends up with a bucket, zero-rate included.
    #[test]
    fn prop_every_named_rate_gets_a_bucket(doc in document()) {
        let usd = Currency::new("USD", 2);
        let names: Vec<String> = doc
            .line_items
            .iter()
            .flat_map(|l| l.tax_rates.iter())
            .chain(doc.tax_rates.iter())
            .filter(|r| r.is_active())
            .map(|r| r.name.clone())
            .collect();
        let result = TotalsBuilder::build(doc, &usd).unwrap();
        for name in names {
            prop_assert!(result.tax_map.get(&name).is_some(), "missing bucket {}", name);
        }
    }

    /// Two simultaneous exclusive rates never compound on each other.
    #[test]
    fn prop_exclusive_rates_do_not_compound(
        base in money(),
        r1 in rate(),
        r2 in rate(),
    ) {
        let line = LineItem {
            quantity: Decimal::ONE,
            unit_cost: base,
            tax_rates: vec![TaxRate::new("A", r1), TaxRate::new("B", r2)],
            ..LineItem::default()
        };
        let computed = LineCalculator::compute(&line, TaxMode::Exclusive, false);
        let summed: Decimal = computed.taxes.iter().map(|t| t.amount).sum();
        prop_assert_eq!(summed, base * (r1 + r2) / Decimal::ONE_HUNDRED);
    }

    /// Backing an inclusive tax out and re-adding it exclusively lands on
    /// the same amount within one rounding unit.
    #[test]
    fn prop_inclusive_exclusive_duality(gross in money(), r in rate()) {
        let extracted = tax_amount(gross, r, TaxMode::Inclusive);
        let pre_tax = gross - extracted;
        let added = tax_amount(pre_tax, r, TaxMode::Exclusive);
        let unit = Decimal::new(1, 2);
        prop_assert!(
            (round_half_up(extracted, 2) - round_half_up(added, 2)).abs() <= unit,
            "inclusive {} vs exclusive {}",
            extracted,
            added
        );
    }

    /// Line and document percentage discounts multiply; they never collapse
    /// into a single summed adjustment.
    #[test]
    fn prop_discounts_apply_independently(
        cost in money(),
        line_pct in percentage(),
        doc_pct in percentage(),
    ) {
        let usd = Currency::new("USD", 2);
        let doc = Document {
            id: Uuid::new_v4(),
            kind: DocumentKind::Invoice,
            date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            line_items: vec![LineItem {
                quantity: Decimal::ONE,
                unit_cost: cost,
                discount: line_pct,
                ..LineItem::default()
            }],
            discount: doc_pct,
            is_amount_discount: false,
            tax_rates: vec![],
            surcharges: [Surcharge::default(); SURCHARGE_SLOTS],
            uses_inclusive_taxes: false,
            exchange_rate: Decimal::ONE,
            paid_to_date: None,
        };
        let result = TotalsBuilder::build(doc, &usd).unwrap();
        let hundred = Decimal::ONE_HUNDRED;
        let expected = cost
            * (Decimal::ONE - line_pct / hundred)
            * (Decimal::ONE - doc_pct / hundred);
        prop_assert_eq!(result.total, round_half_up(expected, 2));
    }
}
