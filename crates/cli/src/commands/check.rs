// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use hubq_core::filter::has_conflicting_kinds;
use hubq_core::parse_filter;

use crate::error::Result;

pub fn run(expr: &str) -> Result<()> {
    run_impl(expr, &mut std::io::stdout())
}

pub(crate) fn run_impl(expr: &str, out: &mut impl Write) -> Result<()> {
    let filter = parse_filter(expr)?;
    let kinds = filter.qualifier_names();
    let names: Vec<&str> = kinds.iter().map(|k| k.as_str()).collect();

    writeln!(out, "expression: {}", filter)?;
    writeln!(out, "qualifiers: {}", names.join(", "))?;
    if filter.can_be_applied_to_issue() {
        writeln!(out, "applicable: yes")?;
    } else if has_conflicting_kinds(&kinds) {
        writeln!(out, "applicable: no (a qualifier kind repeats)")?;
    } else {
        writeln!(out, "applicable: no")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
