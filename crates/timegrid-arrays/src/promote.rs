use crate::array::DataType;

/// Resolves the common column type for a mixed set of inputs.
///
/// Temporal types take part as `Int64`. Any non-numeric participant forces
/// `Utf8`; otherwise the highest-ranked numeric type wins. An empty set has
/// no type and resolves to `Null`.
pub fn promote_types(types: &[DataType]) -> DataType {
    let Some(&first) = types.first() else {
        return DataType::Null;
    };
    let mut common = demote_temporal(first);
    for &ty in &types[1..] {
        let current = demote_temporal(ty);
        if !current.is_numeric() {
            return DataType::Utf8;
        }
        if current > common {
            common = current;
        }
    }
    common
}

fn demote_temporal(ty: DataType) -> DataType {
    if ty.is_temporal() {
        DataType::Int64
    } else {
        ty
    }
}
