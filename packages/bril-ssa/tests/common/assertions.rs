//! SSA-specific assertions

use std::collections::HashSet;

use bril_ssa::shared::models::{Code, Function, Operand, Type, OP_PHI, OP_UPSILON};

use super::view::{local, FunctionView};

/// No two instructions in `func` share a destination
pub fn assert_unique_dests(func: &Function) {
    let mut seen = HashSet::new();
    for instr in func.instrs.iter().filter_map(Code::as_instruction) {
        if let Some(dest) = &instr.dest {
            assert!(
                seen.insert(dest.clone()),
                "Destination '{}' defined twice in '{}'",
                dest,
                func.name
            );
        }
    }
}

/// Every block starts with one phi per tracked variable, in order
pub fn assert_phi_prelude(func: &Function, vars: &[(&str, Type)]) {
    let view = FunctionView::of(func);
    for block in &view.blocks {
        assert!(
            block.instrs.len() > vars.len(),
            "Block '{}' too short for {} phis",
            block.name,
            vars.len()
        );
        for (i, (var, ty)) in vars.iter().enumerate() {
            let instr = &block.instrs[i];
            assert_eq!(instr.op, OP_PHI, "Block '{}' position {}", block.name, i);
            assert_eq!(instr.dest.as_deref(), Some(local(&block.name, var, 0).as_str()));
            assert_eq!(instr.ty.as_ref(), Some(ty));
            assert!(instr.args.is_none(), "phi takes no arguments");
        }
        assert_eq!(
            block.phis().len(),
            vars.len(),
            "Block '{}' has extra phis",
            block.name
        );
    }
}

/// For every edge B -> S and tracked variable v, B has exactly one upsilon
/// into `v_S0`, placed before B's terminator
pub fn assert_upsilon_coverage(func: &Function, vars: &[&str]) {
    let view = FunctionView::of(func);
    for block in &view.blocks {
        let terminator = block.terminator();
        assert!(terminator.is_terminator(), "Block '{}' must end in a terminator", block.name);

        let last = block.instrs.len() - 1;
        for succ in block.successors() {
            for var in vars {
                let target = local(succ, var, 0);
                let matches = block.upsilons_into(&target);
                assert_eq!(
                    matches.len(),
                    1,
                    "Edge {} -> {} must carry exactly one upsilon into '{}'",
                    block.name,
                    succ,
                    target
                );
                assert!(matches[0].0 < last, "Upsilon must precede the terminator");
            }
        }

        let expected = block.successors().len() * vars.len();
        assert_eq!(
            block.upsilons().len(),
            expected,
            "Block '{}' has upsilons that belong to no edge",
            block.name
        );
    }
}

/// Prelude feeds each entry phi from its parameter or `undef`
pub fn assert_bootstrap(func: &Function, vars: &[&str]) {
    let view = FunctionView::of(func);
    let entry = view.entry().name.clone();

    assert_eq!(view.prelude.len(), vars.len(), "One bootstrap upsilon per variable");
    for (instr, var) in view.prelude.iter().zip(vars) {
        assert_eq!(instr.op, OP_UPSILON);
        assert_eq!(instr.args()[0], Operand::Var(local(&entry, var, 0)));
        let expected = if func.is_parameter(var) {
            Operand::var(*var)
        } else {
            Operand::Undefined
        };
        assert_eq!(instr.args()[1], expected, "Bootstrap source for '{}'", var);
    }
}
