use super::*;

#[test]
fn absent_rate_never_moves() {
    let m = MovePerHour::default();
    for t in [0, 1, 3_599_999, 3_600_000, u32::MAX] {
        assert_eq!(m.eval_moves(t, 10, 10), 0);
    }
}

#[test]
fn one_move_per_second() {
    let m = MovePerHour::constant(3600);
    assert_eq!(m.eval_moves(0, 10, 0), 0);
    assert_eq!(m.eval_moves(999, 10, 0), 0);
    assert_eq!(m.eval_moves(1000, 10, 0), 1);
    assert_eq!(m.eval_moves(61_000, 10, 0), 61);
    assert_eq!(m.eval_moves(61_000, 10, 60), 1);
}

#[test]
fn crosses_the_hour_without_losing_precision() {
    let m = MovePerHour::constant(3_600_000);
    assert_eq!(m.eval_moves(3_600_001, 10, 0), 3_600_001);
    // 1193 hours into the clock, still exact modulo the cycle.
    let t = 1193 * 3_600_000 + 1234;
    assert_eq!(m.eval_moves(t, 10, 1000), ((t as i64) % 1000) as i32);
}

#[test]
fn rate_is_clamped() {
    let fast = MovePerHour::constant(i32::MAX);
    let max = MovePerHour::constant(3_600_000);
    for t in [1, 77, 5_000_000] {
        assert_eq!(fast.eval_moves(t, 10, 0), max.eval_moves(t, 10, 0));
    }
    let slow = MovePerHour::constant(i32::MIN);
    assert_eq!(slow.eval_moves(5, 10, 0), -5);
}

#[test]
fn negative_rate_keeps_its_sign_modulo_cycle() {
    let m = MovePerHour::constant(-360_000);
    assert_eq!(m.eval_moves(10, 3, 3), -1);
    assert_eq!(m.eval_moves(30, 3, 3), 0);
}

#[test]
fn rate_can_depend_on_length() {
    let m = MovePerHour(Value::Length.into());
    assert_eq!(m.eval_moves(3_600_000, 42, 0), 42);
}
