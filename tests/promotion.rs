use std::any::TypeId;

use sparsediff::{
    And, Compare, DenseDual, Divides, Dot, Minus, Multiplies, Or, OuterProduct, Plus,
    SparseDual64, SparseVector, SparseVectorOf, Sum,
};
use sparsediff::{compare_all, sparse_vector_of};

fn same_type<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

type D3 = DenseDual<f64, 3>;
type SV<T> = SparseVector<T, u32>;

#[test]
fn scalar_compare_is_symmetric() {
    assert!(same_type::<Compare<f32, f64>, f64>());
    assert!(same_type::<Compare<f64, f32>, f64>());
    assert!(same_type::<Compare<i32, i64>, Compare<i64, i32>>());
    assert!(same_type::<Compare<u32, f64>, f64>());
}

#[test]
fn dual_absorbs_its_scalar() {
    assert!(same_type::<Compare<D3, f64>, D3>());
    assert!(same_type::<Compare<f64, D3>, D3>());
    assert!(same_type::<Plus<f64, D3>, D3>());
    assert!(same_type::<Divides<D3, f64>, D3>());
    assert!(same_type::<And<D3, f64>, bool>());
}

#[test]
fn sparse_with_sparse() {
    assert!(same_type::<Plus<SV<f64>, SV<f64>>, SV<f64>>());
    assert!(same_type::<Minus<SV<f64>, SV<f64>>, SV<f64>>());
    assert!(same_type::<Multiplies<SV<D3>, SV<f64>>, SV<D3>>());
    assert!(same_type::<Compare<SV<f32>, SV<f64>>, SV<f64>>());
    assert!(same_type::<And<SV<f64>, SV<f64>>, SV<bool>>());
    assert!(same_type::<Or<SV<f64>, SV<f32>>, SV<bool>>());
    assert!(same_type::<Dot<SV<f64>, SV<D3>>, D3>());
    assert!(same_type::<Sum<SV<SV<f64>>>, SV<f64>>());
}

#[test]
fn outer_product_nests() {
    assert!(same_type::<
        OuterProduct<SV<f64>, SparseVector<f64, u16>>,
        SV<SparseVector<f64, u16>>,
    >());
    assert!(same_type::<OuterProduct<SV<D3>, SV<f64>>, SV<SV<D3>>>());
}

#[test]
fn sparse_owns_the_outer_layer() {
    // Whichever side the scalar or dual sits on, the sparse vector stays outside.
    assert!(same_type::<Plus<SV<f64>, f64>, SV<f64>>());
    assert!(same_type::<Plus<f64, SV<f64>>, SV<f64>>());
    assert!(same_type::<Multiplies<SV<f64>, D3>, SV<D3>>());
    assert!(same_type::<Multiplies<D3, SV<f64>>, SV<D3>>());
    assert!(same_type::<Compare<SV<f64>, D3>, Compare<D3, SV<f64>>>());
    assert!(same_type::<Compare<SV<f32>, f64>, SV<f64>>());
    assert!(same_type::<And<SparseDual64, SV<f64>>, SV<bool>>());
}

#[test]
fn sparse_vector_of() {
    assert!(same_type::<SparseVectorOf<f32, f64>, SV<f64>>());
    assert!(same_type::<SparseVectorOf<D3, f64>, SV<D3>>());
}

#[test]
fn sparse_vector_of_many_types() {
    assert!(same_type::<compare_all!(i32, f32, f64), f64>());
    assert!(same_type::<sparse_vector_of!(f32, i32), SparseVectorOf<f32, i32>>());
    assert!(same_type::<sparse_vector_of!(f64, D3, f64), SV<D3>>());
    assert!(same_type::<sparse_vector_of!(u32, f64, i32, f64, f64), SV<f64>>());
}
