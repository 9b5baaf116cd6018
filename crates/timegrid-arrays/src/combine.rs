use crate::array::Int64Array;
use crate::error::ArrayError;

/// Concatenates integer index columns in order.
pub fn concat(arrays: &[Int64Array]) -> Int64Array {
    let total = arrays.iter().map(Int64Array::len).sum();
    let mut values = Vec::with_capacity(total);
    for array in arrays {
        values.extend_from_slice(array.values());
    }
    Int64Array::from_values(values)
}

/// Combines row indexes from several tables into one.
///
/// With `ignore_index` the originals are discarded and a fresh
/// `0..total_len` index is issued; otherwise the indexes are concatenated
/// as-is.
pub fn combine_indexes(indexes: &[Int64Array], ignore_index: bool) -> Result<Int64Array, ArrayError> {
    if ignore_index {
        let total: usize = indexes.iter().map(Int64Array::len).sum();
        return Int64Array::range(0, total as i64);
    }
    Ok(concat(indexes))
}
