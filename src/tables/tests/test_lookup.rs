use super::super::*;
use crate::error::KuznyechikError;

#[test]
fn lookup_returns_the_table_entry_in_bounds() {
    assert_eq!(lookup(&PI, 0).unwrap(), PI[0]);
    assert_eq!(lookup(&PI, 255).unwrap(), PI[255]);
}

#[test]
fn lookup_reports_out_of_range_instead_of_panicking() {
    let err = lookup(&PI, 256).unwrap_err();
    assert!(matches!(
        err,
        KuznyechikError::OutOfRange {
            index: 256,
            bound: 256
        }
    ));
}
