//! Bril programs used across integration tests (canonical JSON form)

use bril_ssa::{to_ssa, Program, SsaConfig};
use serde_json::{json, Value};

pub fn parse(value: Value) -> Program {
    serde_json::from_value(value).expect("fixture is a valid Bril program")
}

pub fn convert(value: Value) -> Program {
    to_ssa(parse(value), &SsaConfig::default()).expect("conversion succeeds")
}

/// `v = const 4; print v`
pub fn single_block() -> Value {
    json!({
        "functions": [{
            "name": "main",
            "instrs": [
                {"op": "const", "dest": "v", "type": "int", "value": 4},
                {"op": "print", "args": ["v"]}
            ]
        }]
    })
}

/// entry -> {then, else} -> join, `x` assigned on both arms
pub fn diamond() -> Value {
    json!({
        "functions": [{
            "name": "main",
            "args": [{"name": "cond", "type": "bool"}],
            "instrs": [
                {"label": "entry"},
                {"op": "br", "args": ["cond"], "labels": ["then", "else"]},
                {"label": "then"},
                {"op": "const", "dest": "x", "type": "int", "value": 1},
                {"op": "jmp", "labels": ["join"]},
                {"label": "else"},
                {"op": "const", "dest": "x", "type": "int", "value": 2},
                {"op": "const", "dest": "x", "type": "int", "value": 3},
                {"op": "jmp", "labels": ["join"]},
                {"label": "join"},
                {"op": "print", "args": ["x"]}
            ]
        }]
    })
}

/// Counting loop; the unlabeled first block falls through into `loop`
pub fn counting_loop() -> Value {
    json!({
        "functions": [{
            "name": "main",
            "instrs": [
                {"op": "const", "dest": "i", "type": "int", "value": 0},
                {"op": "const", "dest": "one", "type": "int", "value": 1},
                {"op": "const", "dest": "n", "type": "int", "value": 10},
                {"label": "loop"},
                {"op": "lt", "dest": "cond", "type": "bool", "args": ["i", "n"]},
                {"op": "br", "args": ["cond"], "labels": ["body", "done"]},
                {"label": "body"},
                {"op": "add", "dest": "i", "type": "int", "args": ["i", "one"]},
                {"op": "jmp", "labels": ["loop"]},
                {"label": "done"},
                {"op": "print", "args": ["i"]},
                {"op": "ret"}
            ]
        }]
    })
}

/// Two functions with parameters, a call and a return value
pub fn with_call() -> Value {
    json!({
        "functions": [
            {
                "name": "add5",
                "args": [{"name": "x", "type": "int"}],
                "type": "int",
                "instrs": [
                    {"op": "const", "dest": "five", "type": "int", "value": 5},
                    {"op": "add", "dest": "r", "type": "int", "args": ["x", "five"]},
                    {"op": "ret", "args": ["r"]}
                ]
            },
            {
                "name": "main",
                "instrs": [
                    {"op": "const", "dest": "a", "type": "int", "value": 1},
                    {"op": "call", "dest": "b", "type": "int", "funcs": ["add5"], "args": ["a"]},
                    {"op": "print", "args": ["b"]}
                ]
            }
        ]
    })
}

/// Loop whose header is the first block, forcing a synthesized entry
pub fn loop_at_entry() -> Value {
    json!({
        "functions": [{
            "name": "spin",
            "args": [{"name": "p", "type": {"ptr": "int"}}],
            "instrs": [
                {"label": "top"},
                {"op": "load", "dest": "v", "type": "int", "args": ["p"]},
                {"op": "br", "args": ["stop"], "labels": ["top", "out"]},
                {"label": "out"},
                {"op": "const", "dest": "stop", "type": "bool", "value": true},
                {"op": "ret"}
            ]
        }]
    })
}

pub fn all_fixtures() -> Vec<(&'static str, Value)> {
    vec![
        ("single_block", single_block()),
        ("diamond", diamond()),
        ("counting_loop", counting_loop()),
        ("with_call", with_call()),
        ("loop_at_entry", loop_at_entry()),
    ]
}
