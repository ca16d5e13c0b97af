//! Fraud-risk scoring: thresholds, the fixed batch, and the timed feed.

use course_core::command::UiCommand;
use course_core::engine::CourseEngine;
use course_core::event::CourseEvent;
use course_core::fraud::{
    assess, classify, feed_script, risk_score, sample_transactions, DeviceStatus, FraudControls,
    LocationCategory, RiskLevel, Transaction, VelocityCategory,
};

fn baseline_txn() -> Transaction {
    Transaction {
        amount: 10.0,
        merchant: "Test Merchant".into(),
        location: LocationCategory::Local,
        device: DeviceStatus::Known,
        velocity: VelocityCategory::Normal,
    }
}

#[test]
fn thresholds_are_twenty_and_fifty() {
    assert_eq!(classify(0.0), RiskLevel::Low);
    assert_eq!(classify(19.999), RiskLevel::Low);
    assert_eq!(classify(20.0), RiskLevel::Medium);
    assert_eq!(classify(49.999), RiskLevel::Medium);
    assert_eq!(classify(50.0), RiskLevel::High);
    assert_eq!(classify(112.5), RiskLevel::High);
}

#[test]
fn levels_map_to_actions() {
    assert_eq!(RiskLevel::Low.action(), "Approved");
    assert_eq!(RiskLevel::Medium.action(), "Review Required");
    assert_eq!(RiskLevel::High.action(), "Blocked");
}

#[test]
fn baseline_transaction_scores_zero() {
    let controls = FraudControls::default();
    assert_eq!(risk_score(&baseline_txn(), &controls), 0.0);
    assert_eq!(assess(&baseline_txn(), &controls).level, RiskLevel::Low);
}

#[test]
fn each_factor_contributes_its_weighted_term() {
    let controls = FraudControls::default();

    let mut txn = baseline_txn();
    txn.amount = 600.0;
    assert_eq!(risk_score(&txn, &controls), 30.0);

    let mut txn = baseline_txn();
    txn.velocity = VelocityCategory::High;
    assert_eq!(risk_score(&txn, &controls), 12.5);

    let mut txn = baseline_txn();
    txn.location = LocationCategory::Foreign;
    assert_eq!(risk_score(&txn, &controls), 10.0);

    let mut txn = baseline_txn();
    txn.device = DeviceStatus::Suspicious;
    assert_eq!(risk_score(&txn, &controls), 12.5);
}

#[test]
fn trusted_devices_and_ignored_locations_contribute_nothing() {
    // Full device trust zeroes the device term; zero location risk zeroes
    // the location term.
    let controls = FraudControls::from_sliders(500, 50, 0, 100);
    let mut txn = baseline_txn();
    txn.device = DeviceStatus::New;
    txn.location = LocationCategory::Foreign;
    assert_eq!(risk_score(&txn, &controls), 0.0);
}

#[test]
fn default_batch_classifies_deterministically() {
    let controls = FraudControls::default();
    let levels: Vec<RiskLevel> = sample_transactions()
        .iter()
        .map(|t| assess(t, &controls).level)
        .collect();

    assert_eq!(
        levels,
        vec![
            RiskLevel::Low,    // coffee shop
            RiskLevel::High,   // electronics, new device, far away
            RiskLevel::Low,    // gas station
            RiskLevel::High,   // unknown foreign vendor
            RiskLevel::Low,    // online store
            RiskLevel::Medium, // restaurant one city over
        ]
    );

    // The two blocked rows both deviate on every factor: 30 + 12.5 + 10 +
    // 12.5.
    let scores: Vec<f64> = sample_transactions()
        .iter()
        .map(|t| risk_score(t, &controls))
        .collect();
    assert_eq!(scores[1], 65.0);
    assert_eq!(scores[3], 65.0);
    assert_eq!(scores[5], 22.5);
}

#[test]
fn feed_lands_every_800ms_with_rolling_counters() {
    let mut engine = CourseEngine::new("fraud-feed".into(), 42);
    let first = engine.handle(UiCommand::RunFraudDetection {
        amount_threshold: 500,
        velocity_sensitivity: 50,
        location_risk: 50,
        device_trust: 50,
    });

    // Index zero is due immediately.
    assert!(matches!(
        &first[0],
        CourseEvent::TransactionAssessed { counters, .. }
            if counters.safe == 1 && counters.suspicious == 0 && counters.blocked == 0
    ));

    let rest = engine.advance(800 * 5);
    let assessed: Vec<_> = rest
        .iter()
        .filter_map(|e| match e {
            CourseEvent::TransactionAssessed {
                assessment,
                counters,
                ..
            } => Some((assessment.clone(), *counters)),
            _ => None,
        })
        .collect();
    assert_eq!(assessed.len(), 5);

    let (_, final_counters) = &assessed[4];
    assert_eq!(final_counters.safe, 3);
    assert_eq!(final_counters.suspicious, 1);
    assert_eq!(final_counters.blocked, 2);

    // Ordering matches the batch.
    assert_eq!(assessed[0].0.transaction.merchant, "Electronics Store");
    assert_eq!(assessed[4].0.transaction.merchant, "Restaurant");
}

#[test]
fn feed_script_offsets_follow_the_cadence() {
    let controls = FraudControls::default();
    let script = feed_script(course_core::sequencer::RunHandle(99), &controls);
    assert_eq!(script.len(), 6);
    for (i, (offset, _)) in script.iter().enumerate() {
        assert_eq!(*offset, i as u64 * 800);
    }
}

#[test]
fn raising_device_trust_downgrades_the_restaurant() {
    // At full trust and zero location risk, the restaurant's only deviant
    // factors vanish and it is approved.
    let controls = FraudControls::from_sliders(500, 0, 0, 100);
    let restaurant = &sample_transactions()[5];
    assert_eq!(assess(restaurant, &controls).level, RiskLevel::Low);
}
