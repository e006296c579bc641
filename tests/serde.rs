#![cfg(feature = "serde")]

use sparsediff::SparseVector;

#[test]
fn roundtrip_sparse_vector_json() {
    let v: SparseVector<f64> = SparseVector::from_pairs([(4, 2.5), (1, -1.0), (9, 0.0)]).unwrap();

    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"indices":[1,4,9],"data":[-1.0,2.5,0.0]}"#);

    let back: SparseVector<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}

#[test]
fn roundtrip_nested() {
    let id = SparseVector::<f32, u16>::identity(3);
    let json = serde_json::to_string(&id).unwrap();
    let back: SparseVector<SparseVector<f32, u16>, u16> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn rejects_unsorted_indices() {
    let err = serde_json::from_str::<SparseVector<f64>>(r#"{"indices":[3,1],"data":[1.0,2.0]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("strictly increasing"), "{err}");
}

#[test]
fn rejects_duplicate_indices() {
    let res = serde_json::from_str::<SparseVector<f64>>(r#"{"indices":[2,2],"data":[1.0,2.0]}"#);
    assert!(res.is_err());
}

#[test]
fn rejects_length_mismatch() {
    let err = serde_json::from_str::<SparseVector<f64>>(r#"{"indices":[0,1,2],"data":[1.0]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("length mismatch"), "{err}");
}
