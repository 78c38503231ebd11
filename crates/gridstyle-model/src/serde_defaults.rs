pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn is_true(v: &bool) -> bool {
    *v
}
