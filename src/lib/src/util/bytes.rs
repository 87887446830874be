//! Exact 1024 based humanization of byte counts
//!

const KIB: u128 = 1 << 10;
const MIB: u128 = 1 << 20;
const GIB: u128 = 1 << 30;
const TIB: u128 = 1 << 40;
const PIB: u128 = 1 << 50;
const EIB: u128 = 1 << 60;
const ZIB: u128 = 1 << 70;

/// Scale a byte count down to the largest binary unit that fits, with three
/// decimal places. Bytes stay integral. Counts past the EiB range (possible
/// for totals) come back as the infinity sign.
pub fn humanize(byte_count: u128) -> String {
    if byte_count < KIB {
        format!("{byte_count} B")
    } else if byte_count < MIB {
        format!("{:.3} KiB", byte_count as f64 / KIB as f64)
    } else if byte_count < GIB {
        format!("{:.3} MiB", byte_count as f64 / MIB as f64)
    } else if byte_count < TIB {
        format!("{:.3} GiB", byte_count as f64 / GIB as f64)
    } else if byte_count < PIB {
        format!("{:.3} TiB", byte_count as f64 / TIB as f64)
    } else if byte_count < EIB {
        format!("{:.3} PiB", byte_count as f64 / PIB as f64)
    } else if byte_count < ZIB {
        format!("{:.3} EiB", byte_count as f64 / EIB as f64)
    } else {
        String::from("∞")
    }
}
