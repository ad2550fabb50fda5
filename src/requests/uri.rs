/// Appends the already encoded `key=value` params to `endpoint`.
///
/// An empty param list leaves `endpoint` untouched, without a trailing `?`.
pub fn build_uri<P: AsRef<str>>(endpoint: &str, params: &[P]) -> String {
    if params.is_empty() {
        return endpoint.to_string();
    }

    let query = params
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", endpoint, query)
}
