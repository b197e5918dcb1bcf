//! Client-side primitives for the clockpay payroll program.
//!
//! Binds the two leaf crates to the concrete domain: [`seeds`] derives
//! the program's well-known account addresses, [`layouts`] declares the
//! binary shape of its account state and instruction arguments. The two
//! concerns are independent (addresses say where a record lives, layouts
//! say what its bytes mean) but a typical caller uses both per scenario:
//! derive an address, fetch or build the bytes, decode or encode them.

pub mod layouts;
pub mod seeds;

pub use account_codec::{decode, encode, CodecError, Record, Value};
pub use layouts::{well_known_layouts, ACCOUNTING, PAYROLL};
pub use seeds::{bursary_address, payroll_address, thread_address};
pub use sol_pda::PdaError;
