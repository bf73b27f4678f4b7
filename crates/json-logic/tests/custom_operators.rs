//! Host-registered operators and the registry extension point.

use json_logic::{
    ArgMode, Arity, EvalCtx, EvaluatorOptions, JsonLogic, LogicError, Operator,
    OperatorRegistry, Result, Value,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Raw-mode operator: returns its first operand as written, unevaluated.
struct Quote;

impl Operator for Quote {
    fn arity(&self) -> Arity {
        Arity::Fixed(1)
    }

    fn mode(&self) -> ArgMode {
        ArgMode::Raw
    }

    fn apply(&self, args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value> {
        Ok(args[0].clone())
    }
}

/// Eager operator that reads the context.
struct HasKey;

impl Operator for HasKey {
    fn arity(&self) -> Arity {
        Arity::Fixed(1)
    }

    fn apply(&self, args: &[Value], ctx: &mut EvalCtx<'_>) -> Result<Value> {
        let key = args[0]
            .as_str()
            .ok_or_else(|| LogicError::Custom("has_key expects a string".to_string()))?;
        let found = ctx
            .data()
            .as_object()
            .map(|obj| obj.contains_key(key))
            .unwrap_or(false);
        Ok(Value::Bool(found))
    }
}

#[test]
fn raw_operator_receives_unevaluated_operands() {
    let mut logic = JsonLogic::new();
    logic.register("quote", Quote);
    let out = logic
        .apply_json(&json!({"quote": [{"+": [1, 2]}]}), &json!(null))
        .unwrap();
    assert_eq!(out, json!({"+": [1, 2]}));
}

#[test]
fn raw_operator_operands_are_not_validated_at_compile_time() {
    let mut logic = JsonLogic::new();
    logic.register("quote", Quote);
    let rule = json!({"quote": [{"note": "x"}]});
    assert_eq!(logic.apply_json(&rule, &json!(null)).unwrap(), json!({"note": "x"}));
    let compiled = logic.compile(rule).unwrap();
    assert_eq!(compiled.apply_json(&json!(null)).unwrap(), json!({"note": "x"}));
}

#[test]
fn eager_custom_operator_operands_are_validated_at_compile_time() {
    let mut logic = JsonLogic::new();
    logic.register("has_key", HasKey);
    assert_eq!(
        logic.compile(json!({"has_key": [{"note": "x"}]})).unwrap_err(),
        LogicError::UnknownOperator("note".to_string())
    );
}

#[test]
fn eager_operator_reads_context() {
    let mut logic = JsonLogic::new();
    logic.register("has_key", HasKey);
    let rule = json!({"and": [{"has_key": "a"}, {"!": {"has_key": "b"}}]});
    assert_eq!(logic.apply_json(&rule, &json!({"a": 1})).unwrap(), json!(true));
    assert_eq!(
        logic.apply_json(&json!({"has_key": 5}), &json!({})).unwrap_err(),
        LogicError::Custom("has_key expects a string".to_string())
    );
}

#[test]
fn custom_operator_arity_is_enforced() {
    let mut logic = JsonLogic::new();
    logic.register("has_key", HasKey);
    let err = logic.apply_json(&json!({"has_key": ["a", "b"]}), &json!({})).unwrap_err();
    assert!(matches!(err, LogicError::Arity { .. }));
}

#[test]
fn closures_can_be_registered() {
    let mut logic = JsonLogic::new();
    logic.register_fn("sum_len", |args, _ctx| {
        let total: usize = args
            .iter()
            .map(|a| a.as_str().map(|s| s.chars().count()).unwrap_or(0))
            .sum();
        Ok(Value::from(total))
    });
    let out = logic
        .apply_json(&json!({"sum_len": ["ab", {"cat": ["c", "d"]}]}), &json!(null))
        .unwrap();
    assert_eq!(out, json!(4));
}

#[test]
fn registering_a_standard_name_overrides_it() {
    let mut logic = JsonLogic::new();
    logic.register_fn("+", |_args, _ctx| Ok(Value::from("overridden")));
    assert_eq!(
        logic.apply_json(&json!({"+": [1, 2]}), &json!(null)).unwrap(),
        json!("overridden")
    );
    // other engines are unaffected
    assert_eq!(
        JsonLogic::new().apply_json(&json!({"+": [1, 2]}), &json!(null)).unwrap(),
        json!(3)
    );
}

#[test]
fn empty_registry_knows_nothing() {
    let logic = JsonLogic::with_registry(OperatorRegistry::new());
    assert_eq!(
        logic.apply_json(&json!({"var": "a"}), &json!({"a": 1})).unwrap_err(),
        LogicError::UnknownOperator("var".to_string())
    );
    assert_eq!(logic.apply_json(&json!([1, 2]), &json!(null)).unwrap(), json!([1, 2]));
}

#[test]
fn short_circuit_is_observable_through_side_effects() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut logic = JsonLogic::new();
    logic.register_fn("tick", move |_args, _ctx| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Value::Bool(true))
    });

    logic
        .apply_json(&json!({"and": [false, {"tick": []}]}), &json!(null))
        .unwrap();
    logic
        .apply_json(&json!({"or": [1, {"tick": []}]}), &json!(null))
        .unwrap();
    logic
        .apply_json(&json!({"if": [false, {"tick": []}, 0]}), &json!(null))
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    logic
        .apply_json(&json!({"and": [true, {"tick": []}]}), &json!(null))
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn engine_is_shared_across_threads() {
    let logic = Arc::new(JsonLogic::new());
    let rule = Arc::new(
        logic
            .compile(json!({"*": [{"var": "n"}, 2]}))
            .unwrap(),
    );
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let rule = Arc::clone(&rule);
            std::thread::spawn(move || rule.apply_json(&json!({"n": i})).unwrap())
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![json!(0), json!(2), json!(4), json!(6)]);
}

#[test]
fn options_load_from_json() {
    let options: EvaluatorOptions = serde_json::from_value(json!({"max_depth": 2})).unwrap();
    let logic = JsonLogic::new().with_options(options);
    let deep = json!({"+": [{"+": [{"+": [1]}]}]});
    assert_eq!(
        logic.apply_json(&deep, &json!(null)).unwrap_err(),
        LogicError::DepthExceeded(2)
    );
    let options: EvaluatorOptions = serde_json::from_value(json!({})).unwrap();
    assert_eq!(options, EvaluatorOptions::default());
}
