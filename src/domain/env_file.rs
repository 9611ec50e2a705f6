/// Render `KEY=value` lines, one per entry, with every key upper-cased.
pub fn serialize_env<K, V>(entries: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    entries
        .iter()
        .map(|(key, value)| format!("{}={}", key.as_ref().to_uppercase(), value.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
