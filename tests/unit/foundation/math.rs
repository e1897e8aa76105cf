use super::*;

#[test]
fn clamp_index_bounds() {
    assert_eq!(clamp_index(2, 0, 3), 2);
    assert_eq!(clamp_index(-2, 0, 3), 0);
    assert_eq!(clamp_index(4, 0, 3), 3);
    assert_eq!(clamp_index(i64::MAX, 1, 1), 1);
}

#[test]
fn splitmix_is_deterministic() {
    assert_eq!(splitmix64(7), splitmix64(7));
    assert_ne!(splitmix64(7), splitmix64(8));
}

#[test]
fn significant_digits_match_printf_g() {
    assert_eq!(format_significant(0.0, 4), "0");
    assert_eq!(format_significant(10.000_61, 4), "10");
    assert_eq!(format_significant(-9.998_93, 4), "-9.999");
    assert_eq!(format_significant(0.5, 4), "0.5");
    assert_eq!(format_significant(33.333_33, 4), "33.33");
    assert_eq!(format_significant(9.999_96, 4), "10");
    assert_eq!(format_significant(1234.4, 4), "1234");
    assert_eq!(format_significant(32_767.5, 4), "3.277e+04");
    assert_eq!(format_significant(0.000_015, 4), "1.5e-05");
}

#[test]
fn len_i32_saturates() {
    assert_eq!(len_i32(0), 0);
    assert_eq!(len_i32(150), 150);
    assert_eq!(len_i32(usize::MAX), i32::MAX);
}
