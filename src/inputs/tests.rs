pub(crate) use super::*;

#[test]
fn test_validate_inputs_returns_dims() {
    let x = Matrix::from_vec(4, 3, vec![0.0; 12]).expect("test data has correct dimensions");
    let (rows, cols) = validate_inputs(&x).expect("4x3 is a valid input matrix");
    assert_eq!(rows, 4);
    assert_eq!(cols, 3);
}

#[test]
fn test_validate_inputs_empty_rows_ok() {
    // Zero points is legal; downstream code sees M == 0.
    let x = Matrix::from_vec(0, 2, vec![]).expect("test data has correct dimensions");
    let (rows, cols) = validate_inputs(&x).expect("0x2 is a valid input matrix");
    assert_eq!(rows, 0);
    assert_eq!(cols, 2);
}

#[test]
fn test_validate_inputs_zero_cols_fails() {
    let x = Matrix::from_vec(4, 0, vec![]).expect("test data has correct dimensions");
    let err = validate_inputs(&x).unwrap_err();
    assert!(matches!(err, SubspaceError::Shape { .. }));
    assert!(err.to_string().contains("4 x 0"));
}

#[test]
fn test_validate_inputs_outputs_ok() {
    let x = Matrix::from_vec(3, 2, vec![0.0; 6]).expect("test data has correct dimensions");
    let f = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).expect("test data has correct dimensions");
    let (rows, cols) = validate_inputs_outputs(&x, &f).expect("f pairs with x");
    assert_eq!((rows, cols), (3, 2));
}

#[test]
fn test_validate_inputs_outputs_count_mismatch() {
    let x = Matrix::from_vec(3, 2, vec![0.0; 6]).expect("test data has correct dimensions");
    let f = Matrix::from_vec(4, 1, vec![0.0; 4]).expect("test data has correct dimensions");
    let err = validate_inputs_outputs(&x, &f).unwrap_err();
    assert!(matches!(
        err,
        SubspaceError::CountMismatch {
            inputs: 3,
            outputs: 4
        }
    ));
}

#[test]
fn test_validate_inputs_outputs_non_scalar() {
    let x = Matrix::from_vec(3, 2, vec![0.0; 6]).expect("test data has correct dimensions");
    let f = Matrix::from_vec(3, 2, vec![0.0; 6]).expect("test data has correct dimensions");
    let err = validate_inputs_outputs(&x, &f).unwrap_err();
    assert!(matches!(err, SubspaceError::NonScalarOutput { cols: 2 }));
}

#[test]
fn test_validate_inputs_outputs_bad_x_rejected_first() {
    let x = Matrix::from_vec(3, 0, vec![]).expect("test data has correct dimensions");
    let f = Matrix::from_vec(3, 1, vec![0.0; 3]).expect("test data has correct dimensions");
    let err = validate_inputs_outputs(&x, &f).unwrap_err();
    assert!(matches!(err, SubspaceError::Shape { .. }));
}

#[test]
fn test_validate_inputs_outputs_zero_col_f() {
    let x = Matrix::from_vec(3, 2, vec![0.0; 6]).expect("test data has correct dimensions");
    let f = Matrix::from_vec(3, 0, vec![]).expect("test data has correct dimensions");
    let err = validate_inputs_outputs(&x, &f).unwrap_err();
    assert!(matches!(err, SubspaceError::Shape { .. }));
}

#[test]
fn test_atleast_2d_row() {
    let m = atleast_2d_row(&[1.0, 2.0, 3.0]);
    assert_eq!(m.shape(), (1, 3));
    assert!((m.get(0, 2) - 3.0).abs() < 1e-12);
}

#[test]
fn test_atleast_2d_col() {
    let m = atleast_2d_col(&[1.0, 2.0, 3.0]);
    assert_eq!(m.shape(), (3, 1));
    assert!((m.get(2, 0) - 3.0).abs() < 1e-12);
}

#[test]
fn test_atleast_2d_scalar() {
    // A scalar is a length-1 slice.
    let m = atleast_2d(&[7.0], Axis::Row);
    assert_eq!(m.shape(), (1, 1));
    assert!((m.get(0, 0) - 7.0).abs() < 1e-12);
}

#[test]
fn test_axis_from_str() {
    assert_eq!("row".parse::<Axis>().expect("'row' is valid"), Axis::Row);
    assert_eq!("col".parse::<Axis>().expect("'col' is valid"), Axis::Col);
}

#[test]
fn test_axis_from_str_invalid() {
    let err = "diagonal".parse::<Axis>().unwrap_err();
    assert!(matches!(err, SubspaceError::InvalidParameter { .. }));
    let msg = err.to_string();
    assert!(msg.contains("axis"));
    assert!(msg.contains("'row' or 'col'"));
}
