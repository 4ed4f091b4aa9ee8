//! Pure helpers shared by the ALU and the register-pair views.
//!
//! Nothing in here touches CPU state, so every function can be checked
//! against literal byte pairs.

/// Carry out of bit 3 when adding `a + b`.
#[inline]
pub const fn half_carry_add(a: u8, b: u8) -> bool {
    (a & 0x0F) + (b & 0x0F) > 0x0F
}

/// Borrow into bit 3 when subtracting `a - b`.
#[inline]
pub const fn half_carry_sub(a: u8, b: u8) -> bool {
    (a & 0x0F) < (b & 0x0F)
}

/// Carry out of bit 3 for `a + b + carry` (ADC).
#[inline]
pub const fn half_carry_add_with_carry(a: u8, b: u8, carry: bool) -> bool {
    (a & 0x0F) + (b & 0x0F) + carry as u8 > 0x0F
}

/// Borrow into bit 3 for `a - b - carry` (SBC).
#[inline]
pub const fn half_carry_sub_with_carry(a: u8, b: u8, carry: bool) -> bool {
    ((a & 0x0F) as u16) < (b & 0x0F) as u16 + carry as u16
}

/// Carry out of bit 7 for `a + b + carry`, taken from the 16-bit sum.
#[inline]
pub const fn carry_add_with_carry(a: u8, b: u8, carry: bool) -> bool {
    a as u16 + b as u16 + carry as u16 > 0xFF
}

/// Borrow out of bit 7 for `a - b - carry`.
#[inline]
pub const fn carry_sub_with_carry(a: u8, b: u8, carry: bool) -> bool {
    (a as u16) < b as u16 + carry as u16
}

/// Combine two 8-bit halves into a 16-bit value, `high` in the upper byte.
#[inline]
pub const fn pair(high: u8, low: u8) -> u16 {
    ((high as u16) << 8) | low as u16
}

/// Upper byte of a 16-bit value.
#[inline]
pub const fn high_of(value: u16) -> u8 {
    (value >> 8) as u8
}

/// Lower byte of a 16-bit value.
#[inline]
pub const fn low_of(value: u16) -> u8 {
    value as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_carry_add_matches_nibble_overflow_for_all_pairs() {
        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                let expected = (a & 0xF) as u16 + (b & 0xF) as u16 > 0xF;
                assert_eq!(half_carry_add(a, b), expected, "a={a:#04x} b={b:#04x}");
            }
        }
    }

    #[test]
    fn half_carry_sub_matches_nibble_borrow_for_all_pairs() {
        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                let expected = (a & 0xF) < (b & 0xF);
                assert_eq!(half_carry_sub(a, b), expected, "a={a:#04x} b={b:#04x}");
            }
        }
    }

    #[test]
    fn half_carry_literal_cases() {
        // 0b0011 + 0b1100 stays inside the nibble.
        assert!(!half_carry_add(3, 12));
        // 0b0111 + 0b1100 overflows it.
        assert!(half_carry_add(7, 12));
        assert!(half_carry_sub(7, 12));
        assert!(!half_carry_sub(12, 7));
    }

    #[test]
    fn carry_in_participates_in_three_operand_forms() {
        assert!(!half_carry_add_with_carry(0x0E, 0x00, false));
        assert!(half_carry_add_with_carry(0x0F, 0x00, true));
        assert!(half_carry_add_with_carry(0x08, 0x07, true));

        assert!(!half_carry_sub_with_carry(0x10, 0x00, false));
        assert!(half_carry_sub_with_carry(0x10, 0x00, true));
        assert!(half_carry_sub_with_carry(0x05, 0x05, true));

        assert!(carry_add_with_carry(0xFF, 0x00, true));
        assert!(!carry_add_with_carry(0xFE, 0x00, true));
        assert!(carry_sub_with_carry(0x00, 0x00, true));
        assert!(!carry_sub_with_carry(0x01, 0x00, true));
    }

    #[test]
    fn three_operand_forms_reduce_to_two_operand_without_carry() {
        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                assert_eq!(half_carry_add_with_carry(a, b, false), half_carry_add(a, b));
                assert_eq!(half_carry_sub_with_carry(a, b, false), half_carry_sub(a, b));
            }
        }
    }

    #[test]
    fn pair_round_trips_through_its_halves() {
        for h in 0..=u8::MAX {
            for l in 0..=u8::MAX {
                let value = pair(h, l);
                assert_eq!(pair(high_of(value), low_of(value)), value);
                assert_eq!(high_of(value), h);
                assert_eq!(low_of(value), l);
            }
        }
    }

    #[test]
    fn pair_places_high_byte_on_top() {
        assert_eq!(pair(0x78, 0x14), 0x7814);
        assert_eq!(low_of(0x7814), 0x14);
        assert_eq!(high_of(0x7814), 0x78);
    }
}
