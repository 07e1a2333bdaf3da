/// JavaScript-style truthiness for optional strings: empty means absent.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
