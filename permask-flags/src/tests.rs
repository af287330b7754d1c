use super::*;

flag_table! {
    TEST_TABLE . "test" {
        ALPHA . "alpha" = 0,
        BETA . "beta" = 3,
        GAMMA . "gamma" = 31
    }
}

#[test]
fn grant_then_has() {
    test_logger();

    for bits in [0, 1, 0b0110, u32::MAX] {
        let word = FlagSet::new(bits);
        for flag in [ALPHA.mask(), BETA.mask(), GAMMA.mask()] {
            assert!(word.grant(flag).has(flag));
        }
    }
}

#[test]
fn revoke_then_not_has() {
    for bits in [0, 1, 0b0110, u32::MAX] {
        let word = FlagSet::new(bits);
        for flag in [ALPHA.mask(), BETA.mask(), GAMMA.mask()] {
            assert!(!word.revoke(flag).has(flag));
        }
    }
}

#[test]
fn grant_and_revoke_are_idempotent() {
    let word = FlagSet::new(0b1010);
    let flag = BETA.mask();

    assert_eq!(word.grant(flag).grant(flag), word.grant(flag));
    assert_eq!(word.revoke(flag).revoke(flag), word.revoke(flag));
}

#[test]
fn empty_mask_is_never_held() {
    assert!(!FlagSet::new(u32::MAX).has(FlagSet::EMPTY));
    assert!(!FlagSet::EMPTY.has(FlagSet::EMPTY));
}

#[test]
fn multi_bit_masks_edit_all_their_bits() {
    let both = ALPHA.mask().grant(BETA.mask());

    let held = FlagSet::EMPTY.grant(both);
    assert_eq!(held.bits, 0b1001);
    assert!(held.has(ALPHA.mask()) && held.has(BETA.mask()));

    let stripped = FlagSet::new(u32::MAX).revoke(both);
    assert!(!stripped.has(ALPHA.mask()) && !stripped.has(BETA.mask()));
    assert_eq!(stripped.bits, u32::MAX & !0b1001);
}

#[test]
fn double_toggle_is_identity() {
    let word = FlagSet::new(0b0110_1001);

    for position in [0, 1, 7, 31] {
        let flipped = word.toggle(position).unwrap();
        assert_ne!(flipped, word);
        assert_eq!(flipped.toggle(position).unwrap(), word);
    }
}

#[test]
fn toggle_preserves_every_other_bit() {
    let word = FlagSet::new(0b0110_1001);
    let flipped = word.toggle(3).unwrap();

    for q in 0..WIDTH {
        let probe = FlagSet::new(1 << q);
        if q == 3 {
            assert_ne!(flipped.has(probe), word.has(probe));
        } else {
            assert_eq!(flipped.has(probe), word.has(probe));
        }
    }
}

#[test]
fn toggle_rejects_out_of_range_positions() {
    let word = FlagSet::new(0b0110);

    assert_eq!(word.toggle(-1), Err(FlagError::OutOfRange { position: -1 }));
    assert_eq!(word.toggle(32), Err(FlagError::OutOfRange { position: 32 }));
    assert!(word.toggle(0).is_ok());
    assert!(word.toggle(31).is_ok());
}

#[test]
fn power_of_two() {
    for n in [1, 2, 4, 8, 16] {
        assert!(is_power_of_two(n), "{n} is a power of two");
    }
    for n in [0, -4, 3, 6, 10] {
        assert!(!is_power_of_two(n), "{n} is not a power of two");
    }
}

#[test]
fn permission_scenario() {
    let mut bits = FlagSet::EMPTY;

    bits = bits.grant(READ.mask());
    assert_eq!(bits.bits, 1);

    bits = bits.grant(EXECUTE.mask());
    assert_eq!(bits.bits, 5);
    assert!(!bits.has(WRITE.mask()));

    bits = bits.grant(WRITE.mask());
    assert_eq!(bits.bits, 7);

    bits = bits.revoke(EXECUTE.mask());
    assert_eq!(bits.bits, 3);
    assert_eq!(&PERMISSIONS.names(bits)[..], ["read", "write"]);
}

#[test]
fn camera_scenario() {
    let settings = FlagSet::new(0b0110);

    let settings = settings.toggle(HDR.position as i32).unwrap();
    assert_eq!(settings.bits, 0b0100);
    assert!(settings.has(TIMER.mask()));
    assert!(!settings.has(FLASH.mask()));
}

#[test]
fn macro_masks_match_their_positions() {
    assert_eq!(ALPHA.mask().bits, 1 << 0);
    assert_eq!(BETA.mask().bits, 1 << 3);
    assert_eq!(GAMMA.mask().bits, 1 << 31);
    assert_eq!(DELETE.mask().bits, 1 << 3);
}

#[test]
fn lookup_ignores_ascii_case() {
    assert_eq!(PERMISSIONS.get("Read"), Some(READ));
    assert_eq!(PERMISSIONS.get("EXECUTE"), Some(EXECUTE));
    assert_eq!(PERMISSIONS.get("owner"), None);
    assert_eq!(CAMERA.get("hdr"), Some(HDR));
}

#[test]
fn names_enumerate_in_table_order() {
    let word = FlagSet::new(0b1101);
    assert_eq!(&PERMISSIONS.names(word)[..], ["read", "execute", "delete"]);

    assert!(PERMISSIONS.names(FlagSet::EMPTY).is_empty());
}

#[test]
fn table_display() {
    assert_eq!(
        TEST_TABLE.to_string(),
        "test: alpha=0, beta=3, gamma=31"
    );
    assert_eq!(FlagSet::new(5).to_string(), "0b101");
}

#[test]
fn error_display_names_the_valid_range() {
    let err = FlagSet::EMPTY.toggle(40).unwrap_err();
    assert_eq!(
        err.to_string(),
        "bit position 40 is out of range (valid positions are 0..32)"
    );
}

#[test]
#[should_panic(expected = "pairwise distinct")]
fn duplicate_positions_fail_validation() {
    let flags = &[
        Flag { name: "a", position: 2 },
        Flag { name: "b", position: 2 },
    ];
    FlagTable::new("broken", flags);
}

#[test]
#[should_panic(expected = "outside the word")]
fn out_of_width_positions_fail_validation() {
    let flags = &[Flag { name: "a", position: 32 }];
    FlagTable::new("broken", flags);
}
