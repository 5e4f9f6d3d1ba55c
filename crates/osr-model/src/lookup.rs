/// Case folding used for every name comparison in the crate family.
pub fn fold_case(value: &str) -> String {
    value.trim().to_lowercase()
}
