//! Well-known account and instruction-argument layouts of the clockpay
//! program, declared field by field.
//!
//! These tables are the single source of truth for byte layout on the
//! client side; widths are computed from the field lists, never declared.

use account_codec::{CodecError, FieldSpec, SchemaRegistry};

/// Record-type name of the bursary accounting account.
pub const ACCOUNTING: &str = "accounting";
/// Record-type name of a payroll instance account.
pub const PAYROLL: &str = "payroll";
/// Record-type name of the deposit instruction arguments.
pub const DEPOSIT_ARGS: &str = "deposit_args";
/// Record-type name of the new-payroll instruction arguments.
pub const NEW_PAYROLL_ARGS: &str = "new_payroll_args";
/// Record-type name of the start-pay instruction arguments.
pub const START_PAY_ARGS: &str = "start_pay_args";

/// Fixed width of the cron schedule field, in bytes.
pub const CRON_SCHEDULE_LEN: usize = 30;

/// Build a registry holding every layout the clockpay program uses.
///
/// Call once at startup and share the result read-only; the registry is
/// append-only and these names are never redefined.
pub fn well_known_layouts() -> Result<SchemaRegistry, CodecError> {
    let mut registry = SchemaRegistry::new();

    // Bursary accounting state: 114 bytes.
    registry.define(
        ACCOUNTING,
        vec![
            FieldSpec::bytes("authority", 32),
            FieldSpec::bytes("mint", 32),
            FieldSpec::u64("active_payrolls"),
            FieldSpec::bytes("vault", 32),
            FieldSpec::u64("balance"),
            FieldSpec::bool("active"),
            FieldSpec::u8("bump"),
        ],
    )?;

    // Payroll instance state: 160 bytes.
    registry.define(
        PAYROLL,
        vec![
            FieldSpec::bytes("accounting", 32),
            FieldSpec::bool("active"),
            FieldSpec::u64("amount"),
            FieldSpec::u64("total_amount_disbursed"),
            FieldSpec::str("cron_schedule", CRON_SCHEDULE_LEN),
            FieldSpec::bytes("receiver", 32),
            FieldSpec::u64("max_cycles"),
            FieldSpec::u64("cycles_completed"),
            FieldSpec::bytes("thread", 32),
            FieldSpec::u8("bump"),
        ],
    )?;

    registry.define(DEPOSIT_ARGS, vec![FieldSpec::u64("amount")])?;

    registry.define(
        NEW_PAYROLL_ARGS,
        vec![
            FieldSpec::u64("amount"),
            FieldSpec::u64("cycles"),
            FieldSpec::str("schedule", CRON_SCHEDULE_LEN),
        ],
    )?;

    registry.define(
        START_PAY_ARGS,
        vec![
            FieldSpec::u64("time_till_start"),
            FieldSpec::u64("amount"),
            FieldSpec::u64("cycles"),
            FieldSpec::u64("interval"),
            FieldSpec::bytes("receiver_key", 32),
        ],
    )?;

    Ok(registry)
}
