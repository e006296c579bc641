use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::index::SparseIndex;
use crate::sparse_vector::SparseVector;

impl<T: Serialize, I: SparseIndex + Serialize> Serialize for SparseVector<T, I> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SparseVector", 2)?;
        s.serialize_field("indices", self.nude_indices())?;
        s.serialize_field("data", self.nude_data())?;
        s.end()
    }
}

impl<'de, T, I> Deserialize<'de> for SparseVector<T, I>
where
    T: Deserialize<'de>,
    I: SparseIndex + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Parts<T, I> {
            indices: Vec<I>,
            data: Vec<T>,
        }

        let parts = Parts::<T, I>::deserialize(deserializer)?;
        SparseVector::from_parts(parts.indices, parts.data).map_err(serde::de::Error::custom)
    }
}
