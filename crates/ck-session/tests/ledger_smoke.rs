use ck_session::{HISTORY_CAPACITY, Params, SessionLedger};

#[test]
fn sixty_records_leave_the_newest_fifty() {
    let mut ledger = SessionLedger::new();
    for i in 0..60 {
        let inputs: Params = [("v".to_string(), i as f64)].into_iter().collect();
        ledger.record("Reynolds Number", inputs, i as f64 * 1000.0);
    }

    assert_eq!(ledger.len(), HISTORY_CAPACITY);
    let first = ledger.history().next().unwrap();
    assert_eq!(first.inputs["v"], 59.0);
    let last = ledger.history().last().unwrap();
    assert_eq!(last.inputs["v"], 10.0);
    assert!(ledger.history().all(|e| e.inputs["v"] >= 10.0));
}

#[test]
fn templates_outlive_history() {
    let mut ledger = SessionLedger::new();
    let inputs: Params = [("dT1".to_string(), 40.0), ("dT2".to_string(), 15.0)]
        .into_iter()
        .collect();
    ledger.save_template("exchanger", "LMTD", inputs.clone());
    ledger.record("LMTD", inputs.clone(), 25.5);
    ledger.clear();

    let template = ledger.template("exchanger").unwrap();
    assert_eq!(template.formula, "LMTD");
    assert_eq!(template.inputs, inputs);
    assert!(ledger.is_empty());
    assert_eq!(ledger.list_templates("lmtd").len(), 1);
}
