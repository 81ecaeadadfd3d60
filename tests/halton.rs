use halton_rs::core::prelude::*;
use halton_rs::samplers::*;

fn near_equal(a: Float, b: Float, e: Float) -> bool {
    (a - b).abs() < e
}

#[test]
fn table_shape_and_cells() {
    let indices: Vec<u64> = vec![0, 1, 2, 3, 4, 7, 100];
    let bases: Vec<u64> = vec![2, 3, 5];
    let sequence =
        HaltonSequence::with_indices_and_bases(indices.clone(), bases.clone()).unwrap();

    let table = sequence.evaluate();
    assert_eq!(indices.len(), table.len());
    for (i, row) in table.iter().enumerate() {
        assert_eq!(bases.len(), row.len());
        for (j, &value) in row.iter().enumerate() {
            assert_eq!(
                HaltonSequence::evaluate_one(indices[i], bases[j]).unwrap(),
                value
            );
        }
    }
}

#[test]
fn first_points_in_two_dimensions() {
    let sequence = HaltonSequence::new(4, 2).unwrap();
    let table = sequence.evaluate();
    assert!(near_equal(0.0, table[0][0], 1e-6));
    assert!(near_equal(0.0, table[0][1], 1e-6));
    assert!(near_equal(0.5, table[1][0], 1e-6));
    assert!(near_equal(1.0 / 3.0, table[1][1], 1e-6));
    assert!(near_equal(0.25, table[2][0], 1e-6));
    assert!(near_equal(2.0 / 3.0, table[2][1], 1e-6));
    assert!(near_equal(0.75, table[3][0], 1e-6));
    assert!(near_equal(1.0 / 9.0, table[3][1], 1e-6));
}

#[test]
fn count_mode_uses_prime_bases() {
    let sequence = HaltonSequence::new(10, 4).unwrap();
    assert_eq!(&[2, 3, 5, 7], sequence.bases());
    let indices: Vec<u64> = (0..10).collect();
    assert_eq!(indices.as_slice(), sequence.indices());
}

#[test]
fn explicit_inputs_kept_verbatim() {
    // Duplicates and ordering are the caller's business.
    let sequence =
        HaltonSequence::with_indices_and_bases(vec![5, 5, 1], vec![3, 2]).unwrap();
    assert_eq!(&[5, 5, 1], sequence.indices());
    assert_eq!(&[3, 2], sequence.bases());
    let table = sequence.evaluate();
    assert_eq!(table[0], table[1]);
}

#[test]
fn points_iterate_rows() {
    let sequence = HaltonSequence::new(8, 3).unwrap();
    let rows: Vec<&[Float]> = sequence.points().collect();
    assert_eq!(8, rows.len());
    for (row, expected) in rows.iter().zip(sequence.evaluate()) {
        assert_eq!(expected.as_slice(), *row);
    }
}

#[test]
fn create_rejects_conflicting_modes() {
    let params = HaltonParams {
        num: Some(10),
        dim: Some(2),
        indices: Some(vec![0, 1]),
        bases: Some(vec![2, 3]),
    };
    let e = create_halton_sequence(&params).unwrap_err();
    assert_eq!(HaltonErrorKind::InvalidArgument, e.kind);

    // Even one field of the other mode conflicts.
    let params = HaltonParams {
        num: Some(10),
        bases: Some(vec![2, 3]),
        ..Default::default()
    };
    assert!(create_halton_sequence(&params).is_err());
}

#[test]
fn create_rejects_missing_modes() {
    let params = HaltonParams::default();
    let e = create_halton_sequence(&params).unwrap_err();
    assert_eq!(HaltonErrorKind::InvalidArgument, e.kind);

    // Half a mode is not a mode.
    let params = HaltonParams {
        num: Some(10),
        ..Default::default()
    };
    assert!(create_halton_sequence(&params).is_err());
    let params = HaltonParams {
        indices: Some(vec![0, 1, 2]),
        ..Default::default()
    };
    assert!(create_halton_sequence(&params).is_err());
}

#[test]
fn create_accepts_each_mode() {
    let params = HaltonParams {
        num: Some(6),
        dim: Some(3),
        ..Default::default()
    };
    let sequence = create_halton_sequence(&params).unwrap();
    assert_eq!(6, sequence.evaluate().len());
    assert_eq!(&[2, 3, 5], sequence.bases());

    let params = HaltonParams {
        indices: Some(vec![1, 2, 3]),
        bases: Some(vec![2]),
        ..Default::default()
    };
    let sequence = create_halton_sequence(&params).unwrap();
    assert_eq!(3, sequence.evaluate().len());
    assert!(near_equal(0.5, sequence.evaluate()[0][0], 1e-6));
}

#[test]
fn construction_rejects_degenerate_bases() {
    let e = HaltonSequence::with_indices_and_bases(vec![0, 1], vec![2, 0]).unwrap_err();
    assert_eq!(HaltonErrorKind::InvalidArgument, e.kind);
    assert!(HaltonSequence::with_indices_and_bases(vec![0, 1], vec![1]).is_err());
}

#[test]
fn table_values_in_unit_interval() {
    let sequence = HaltonSequence::new(256, 6).unwrap();
    for row in sequence.evaluate() {
        for &value in row {
            assert!((0.0..1.0).contains(&value));
        }
    }
}

#[test]
fn serialized_table_keeps_shape() {
    let sequence = HaltonSequence::new(5, 3).unwrap();
    let value = serde_json::to_value(&sequence).unwrap();
    let table = value["table"].as_array().unwrap();
    assert_eq!(5, table.len());
    for row in table {
        assert_eq!(3, row.as_array().unwrap().len());
    }
    assert_eq!(3, value["bases"].as_array().unwrap().len());
    assert_eq!(5, value["indices"].as_array().unwrap().len());
}
