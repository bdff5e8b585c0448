//! Check operation - load and consolidate without emitting.

use eyre::Result;
use glgen_codegen::EmitContext;

use crate::reports::CheckReport;

/// Resolve everything an emitter would need and count it.
pub fn check(ctx: &EmitContext<'_>) -> Result<CheckReport> {
    Ok(CheckReport {
        label: ctx.label(),
        commands: ctx.commands()?.len(),
        enums: ctx.enums()?.len(),
        types: ctx.types()?.len(),
        groups: ctx.groups()?.len(),
    })
}
