use super::super::*;

#[test]
fn pi_is_a_permutation_of_all_bytes() {
    let mut seen = [false; 256];
    for &v in PI.iter() {
        assert!(!seen[v as usize], "duplicate value {v} in PI");
        seen[v as usize] = true;
    }
}

#[test]
fn pi_inv_undoes_pi_in_both_directions() {
    for x in 0..=255u8 {
        assert_eq!(PI_INV[PI[x as usize] as usize], x);
        assert_eq!(PI[PI_INV[x as usize] as usize], x);
    }
}

#[test]
fn mask_leading_coefficient_is_identity() {
    assert_eq!(MASK[0], 1);
}
