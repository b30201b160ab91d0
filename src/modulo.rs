/// Floor modulo: the residue is always in `[0, divisor)` for a positive
/// divisor, unlike `%`, which keeps the dividend's sign.
#[inline]
pub const fn floor_mod(dividend: i32, divisor: i32) -> i32 {
    let remainder = dividend % divisor;

    if remainder < 0 {
        remainder + divisor
    } else {
        remainder
    }
}
